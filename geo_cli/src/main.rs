//! # Groundwork CLI Application
//!
//! Terminal interface for foundation design checks. Prompts for inputs
//! with sensible defaults, runs the selected check (or the full Monte
//! Carlo reliability study) and prints formatted results plus JSON for
//! machine consumption. Result history is the caller's concern - the
//! engine itself keeps no state between runs.

use std::io::{self, BufRead, Write};

use geo_core::checks::{bearing, overturning, settlement, sliding};
use geo_core::checks::{BearingInput, OverturningInput, SettlementInput, SlidingInput};
use geo_core::reliability::{run_study_with_progress, StudyControl, StudyInput, UncertaintySpec};
use geo_core::{parse_width_list, Footing, LoadCase, SafetyCriteria, SoilProfile, StiffnessProfile};

/// Reliability at or above this reads as a good design in the summary
const GOOD_RELIABILITY_PCT: f64 = 80.0;

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn prompt_text(prompt: &str, default: &str) -> String {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default.to_string();
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default.to_string();
    }

    let trimmed = input.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

fn status_icon(pass: bool) -> &'static str {
    if pass { "[SAFE]" } else { "[FAILS]" }
}

fn print_json<T: serde::Serialize>(value: &T) {
    println!();
    println!("JSON Output (for machine use):");
    if let Ok(json) = serde_json::to_string_pretty(value) {
        println!("{}", json);
    }
}

fn print_error(e: &geo_core::GeoError) {
    eprintln!("Error: {}", e);
    if let Ok(json) = serde_json::to_string_pretty(e) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
}

fn prompt_soil() -> SoilProfile {
    SoilProfile {
        cohesion_kpa: prompt_f64("Cohesion c (kPa) [20.0]: ", 20.0),
        friction_angle_deg: prompt_f64("Friction angle phi (deg) [30.0]: ", 30.0),
        unit_weight_kn_m3: prompt_f64("Unit weight gamma (kN/m3) [18.0]: ", 18.0),
    }
}

fn prompt_stiffness() -> StiffnessProfile {
    StiffnessProfile {
        modulus_kpa: prompt_f64("Elastic modulus Es (kPa) [30000.0]: ", 30000.0),
        poisson_ratio: prompt_f64("Poisson ratio nu [0.3]: ", 0.3),
        influence_factor: prompt_f64("Influence factor I [1.0]: ", 1.0),
    }
}

fn run_bearing_mode() {
    let soil = prompt_soil();
    let footing = Footing {
        width_m: prompt_f64("Width B (m) [2.0]: ", 2.0),
        length_m: prompt_f64("Length L (m) [2.0]: ", 2.0),
        depth_m: prompt_f64("Embedment depth Df (m) [1.0]: ", 1.0),
    };
    let input = BearingInput {
        soil,
        footing,
        required_fs: prompt_f64("Factor of safety [3.0]: ", 3.0),
    };

    match bearing::calculate(&input) {
        Ok(result) => {
            println!();
            println!("Bearing Capacity Results");
            println!("  Ultimate capacity  q_ult   = {:.2} kPa", result.q_ult_kpa);
            println!("  Allowable capacity q_allow = {:.2} kPa", result.q_allow_kpa);
            print_json(&result);
        }
        Err(e) => print_error(&e),
    }
}

fn run_settlement_mode() {
    let loads = LoadCase {
        vertical_kn: prompt_f64("Load P (kN) [500.0]: ", 500.0),
        horizontal_kn: 0.0,
        moment_knm: 0.0,
    };
    let footing = Footing {
        width_m: prompt_f64("Width B (m) [2.0]: ", 2.0),
        length_m: prompt_f64("Length L (m) [2.0]: ", 2.0),
        depth_m: 0.0,
    };
    let input = SettlementInput {
        loads,
        footing,
        stiffness: prompt_stiffness(),
    };

    match settlement::calculate(&input) {
        Ok(result) => {
            println!();
            println!("Settlement Result");
            println!("  Bearing pressure q = {:.2} kPa", result.bearing_pressure_kpa);
            println!("  Settlement = {:.2} mm", result.settlement_mm);
            print_json(&result);
        }
        Err(e) => print_error(&e),
    }
}

fn run_sliding_mode() {
    let input = SlidingInput {
        loads: LoadCase {
            vertical_kn: prompt_f64("Vertical load P (kN) [500.0]: ", 500.0),
            horizontal_kn: prompt_f64("Horizontal load H (kN) [50.0]: ", 50.0),
            moment_knm: 0.0,
        },
        friction_coeff: prompt_f64("Base friction mu [0.5]: ", 0.5),
        required_fs: prompt_f64("Required FS [1.5]: ", 1.5),
    };

    match sliding::calculate(&input) {
        Ok(result) => {
            println!();
            println!("Sliding Factor of Safety");
            println!("  FS = {:.2} {}", result.fs, status_icon(result.passes()));
            print_json(&result);
        }
        Err(e) => print_error(&e),
    }
}

fn run_overturning_mode() {
    let input = OverturningInput {
        loads: LoadCase {
            vertical_kn: prompt_f64("Vertical load P (kN) [500.0]: ", 500.0),
            horizontal_kn: 0.0,
            moment_knm: prompt_f64("Overturning moment M (kN*m) [150.0]: ", 150.0),
        },
        footing: Footing {
            width_m: prompt_f64("Width B (m) [2.0]: ", 2.0),
            length_m: 1.0,
            depth_m: 0.0,
        },
        required_fs: prompt_f64("Required FS [2.0]: ", 2.0),
    };

    match overturning::calculate(&input) {
        Ok(result) => {
            println!();
            println!("Overturning Factor of Safety");
            println!("  Resisting moment = {:.2} kN*m", result.resisting_moment_knm);
            println!("  FS = {:.2} {}", result.fs, status_icon(result.passes()));
            print_json(&result);
        }
        Err(e) => print_error(&e),
    }
}

fn run_full_design_mode() {
    println!("-- Geometry --");
    let footing = Footing {
        width_m: 2.0, // template value; replaced by each candidate width
        length_m: prompt_f64("Length L (m) [2.0]: ", 2.0),
        depth_m: prompt_f64("Depth Df (m) [1.0]: ", 1.0),
    };

    println!("-- Soil --");
    let soil = prompt_soil();

    println!("-- Loads --");
    let loads = LoadCase {
        vertical_kn: prompt_f64("Vertical load P (kN) [500.0]: ", 500.0),
        horizontal_kn: prompt_f64("Horizontal load H (kN) [80.0]: ", 80.0),
        moment_knm: prompt_f64("Moment M (kN*m) [150.0]: ", 150.0),
    };

    println!("-- Stiffness --");
    let stiffness = prompt_stiffness();
    let friction_coeff = prompt_f64("Base friction mu [0.5]: ", 0.5);

    println!("-- Monte Carlo Settings --");
    let width_text = prompt_text("B values, comma separated [1.5,2.0,2.5]: ", "1.5,2.0,2.5");
    let iterations = prompt_f64("Iterations [300]: ", 300.0) as u32;
    let seed = prompt_f64("Random seed [42]: ", 42.0) as u64;

    println!("-- Uncertainty (%) --");
    let uncertainty = UncertaintySpec {
        unit_weight_pct: prompt_f64("gamma variation [10]: ", 10.0),
        modulus_pct: prompt_f64("Es variation [15]: ", 15.0),
        load_pct: prompt_f64("P variation [10]: ", 10.0),
    };

    println!("-- Safety Criteria --");
    let criteria = SafetyCriteria {
        bearing_fs: prompt_f64("FS bearing [3.0]: ", 3.0),
        ..Default::default()
    };

    let parsed = parse_width_list(&width_text);
    if !parsed.rejected.is_empty() {
        println!();
        println!("Ignoring malformed width tokens: {:?}", parsed.rejected);
    }
    if parsed.is_empty() {
        eprintln!("Error: no valid B values in {:?}", width_text);
        return;
    }

    let input = StudyInput {
        soil,
        loads,
        footing,
        stiffness,
        uncertainty,
        criteria,
        friction_coeff,
        widths_m: parsed.widths,
        iterations,
        seed,
    };

    println!();
    let outcome = run_study_with_progress(&input, |done, total| {
        println!("  ... width {}/{} done", done, total);
        StudyControl::Continue
    });

    match outcome {
        Ok(results) => {
            println!();
            println!("Monte Carlo Reliability Results ({} trials/width, seed {})", iterations, seed);
            for result in &results {
                let verdict = if result.reliability_percent >= GOOD_RELIABILITY_PCT {
                    "GOOD"
                } else {
                    "POOR"
                };
                println!(
                    "  B = {:.2} m -> Reliability = {:.1}%  [{}]",
                    result.width_m, result.reliability_percent, verdict
                );
            }
            print_json(&results);
        }
        Err(e) => print_error(&e),
    }
}

fn main() {
    println!("Groundwork CLI - Foundation Design Checks");
    println!("=========================================");
    println!();
    println!("Select mode:");
    println!("  1. Bearing Capacity");
    println!("  2. Settlement");
    println!("  3. Sliding Check");
    println!("  4. Overturning Check");
    println!("  5. Full Foundation Design (Monte Carlo)");
    println!();

    let mode = prompt_f64("Mode [5]: ", 5.0) as u32;
    println!();

    match mode {
        1 => run_bearing_mode(),
        2 => run_settlement_mode(),
        3 => run_sliding_mode(),
        4 => run_overturning_mode(),
        _ => run_full_design_mode(),
    }
}
