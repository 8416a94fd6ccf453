//! # MechCalc CLI
//!
//! Command-line driver for the mech_core calculators. Prints the derivation
//! steps and results as text, or the raw result as JSON with `--json`.
//!
//! Logging goes to stderr and is controlled with `RUST_LOG`
//! (e.g. `RUST_LOG=debug mech stress ...`).

use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use mech_core::calculations::deflection::{BeamDeflectionInput, SupportType};
use mech_core::calculations::stress::StressAnalysisInput;
use mech_core::{materials, CalcError, CalculationItem, CalculationOutcome, SafetyStatus};

#[derive(Parser)]
#[command(name = "mech", version, about = "Mechanical engineering calculator")]
struct Cli {
    /// Print results as JSON instead of text
    #[arg(long, global = true, env = "MECH_JSON")]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Axial stress and safety factor against yield
    Stress(StressArgs),
    /// Beam deflection under a point load
    Beam(BeamArgs),
    /// List the material property table
    Materials,
}

#[derive(Args)]
struct StressArgs {
    /// Applied force (N)
    #[arg(long)]
    force: f64,
    /// Cross-sectional area (mm²)
    #[arg(long)]
    area: f64,
    /// Material name, e.g. "Steel (A36)"
    #[arg(long, default_value = "Steel (A36)")]
    material: String,
    /// Descriptive load type
    #[arg(long, default_value = "Tensile Load")]
    load_type: String,
}

#[derive(Args)]
struct BeamArgs {
    /// Span (mm)
    #[arg(long)]
    length: f64,
    /// Point load (N)
    #[arg(long)]
    load: f64,
    /// Moment of inertia (mm⁴)
    #[arg(long)]
    inertia: f64,
    /// Elastic modulus (GPa)
    #[arg(long, default_value_t = 200.0)]
    modulus: f64,
    /// simply_supported, cantilever or fixed_both_ends
    #[arg(long, default_value = "simply_supported")]
    support: String,
}

impl From<StressArgs> for CalculationItem {
    fn from(args: StressArgs) -> Self {
        CalculationItem::StressAnalysis(StressAnalysisInput {
            force_n: args.force,
            area_mm2: args.area,
            material: args.material,
            load_type: args.load_type,
        })
    }
}

impl From<BeamArgs> for CalculationItem {
    fn from(args: BeamArgs) -> Self {
        CalculationItem::BeamDeflection(BeamDeflectionInput {
            length_mm: args.length,
            load_n: args.load,
            moment_of_inertia_mm4: args.inertia,
            elastic_modulus_gpa: args.modulus,
            support_type: SupportType::from(args.support),
        })
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let item: CalculationItem = match cli.command {
        Commands::Stress(args) => args.into(),
        Commands::Beam(args) => args.into(),
        Commands::Materials => return print_materials(cli.json),
    };

    log::info!("running {} calculation", item.calc_type());

    match item.run() {
        Ok(outcome) => {
            if cli.json {
                return print_json(&outcome);
            }
            print_outcome(&item, &outcome);
            ExitCode::SUCCESS
        }
        Err(e) => {
            report_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn print_outcome(item: &CalculationItem, outcome: &CalculationOutcome) {
    println!("═══════════════════════════════════════");
    println!("  {}", item.type_label().to_uppercase());
    println!("═══════════════════════════════════════");
    println!();
    println!("Steps:");
    for (n, step) in outcome.steps().iter().enumerate() {
        println!("  {}. {}", n + 1, step);
    }
    println!();

    match outcome {
        CalculationOutcome::StressAnalysis(r) => {
            println!("  Stress:        {:.2} MPa", r.stress_mpa);
            println!("  Yield:         {} MPa", r.yield_strength_mpa);
        }
        CalculationOutcome::BeamDeflection(r) => {
            println!("  δ_max:         {:.3} mm", r.max_deflection_mm);
            println!("  σ_max:         {:.2} MPa", r.max_stress_mpa);
        }
    }
    if outcome.safety_factor().is_finite() {
        println!("  Safety factor: {:.2}", outcome.safety_factor());
    } else {
        println!("  Safety factor: unbounded");
    }

    println!();
    println!("═══════════════════════════════════════");
    println!("  STATUS: {} {}", outcome.status().as_str().to_uppercase(), status_icon(outcome.status()));
    println!("═══════════════════════════════════════");
}

fn print_materials(json: bool) -> ExitCode {
    let all = materials::all();
    if json {
        return print_json(&all);
    }
    println!("{:<24} {:>12} {:>10}", "Material", "Fy (MPa)", "E (GPa)");
    for m in all {
        println!("{:<24} {:>12} {:>10}", m.name, m.yield_strength_mpa, m.elastic_modulus_gpa);
    }
    ExitCode::SUCCESS
}

/// Print `value` as pretty JSON. A value that fails to serialize is reported
/// like a calculation error and fails the process.
fn print_json<T: Serialize + ?Sized>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            report_error(&CalcError::from(e));
            ExitCode::FAILURE
        }
    }
}

fn report_error(e: &CalcError) {
    eprintln!("Error: {}", e);
    if let Ok(json) = serde_json::to_string_pretty(e) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
}

fn status_icon(status: SafetyStatus) -> &'static str {
    match status {
        SafetyStatus::Safe => "[OK]",
        SafetyStatus::Warning => "[WARN]",
        SafetyStatus::Danger => "[FAIL]",
    }
}
