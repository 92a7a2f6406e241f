//! # Width List Parsing
//!
//! Converts the free-text comma-separated width field into numbers.
//! Malformed tokens are collected and reported, never fatal: the caller
//! decides what to do when nothing valid remains (the reliability study
//! treats an empty width list as InvalidConfiguration).

use serde::{Deserialize, Serialize};

/// Outcome of parsing a width list.
///
/// Both sequences preserve the order tokens appeared in the input.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParsedWidths {
    /// Successfully parsed widths (m), in input order
    pub widths: Vec<f64>,

    /// Tokens that failed to parse, trimmed, in input order
    pub rejected: Vec<String>,
}

impl ParsedWidths {
    /// True when no usable width survived the parse.
    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }
}

/// Parse a comma-separated list of candidate widths.
///
/// Each token is trimmed and parsed as a floating-point number. Tokens
/// that fail to parse land in `rejected` instead of aborting the parse.
///
/// # Example
///
/// ```rust
/// use geo_core::parse::parse_width_list;
///
/// let parsed = parse_width_list("1.5, 2.0, abc, 2.5");
/// assert_eq!(parsed.widths, vec![1.5, 2.0, 2.5]);
/// assert_eq!(parsed.rejected, vec!["abc".to_string()]);
/// ```
pub fn parse_width_list(text: &str) -> ParsedWidths {
    let mut parsed = ParsedWidths::default();
    for token in text.split(',') {
        let token = token.trim();
        match token.parse::<f64>() {
            Ok(value) => parsed.widths.push(value),
            Err(_) => parsed.rejected.push(token.to_string()),
        }
    }
    parsed
}
