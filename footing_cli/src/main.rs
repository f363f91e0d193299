//! # Footing CLI
//!
//! Designs one spread footing and prints the report.
//!
//! Inputs come from a TOML/JSON design file (`--input`), from the built-in
//! reference footing (`--defaults`), or are prompted for field by field.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use footing_core::{calculate_with, logging, DesignConfig, DesignReport, FootingInput};

#[derive(Debug, Parser)]
#[command(name = "footing", version, about = "Isolated spread footing design")]
struct Cli {
    /// Design file (.toml or .json)
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Use the reference footing without prompting
    #[arg(long, conflicts_with = "input")]
    defaults: bool,

    /// Print the report as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Responsible engineer, shown in the report header
    #[arg(long, default_value = "")]
    engineer: String,

    /// Job number, shown in the report header
    #[arg(long, default_value = "")]
    job: String,

    /// Default log level when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{} [{}]: ", prompt, default);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn prompt_input() -> FootingInput {
    let d = FootingInput::default();
    println!("Footing CLI - Spread Footing Design");
    println!("===================================");
    println!("Press Enter to keep the value in brackets.");
    println!();

    FootingInput {
        label: d.label.clone(),
        dead_load_tonf: prompt_f64("Dead load D (Tn)", d.dead_load_tonf),
        live_load_tonf: prompt_f64("Live load L (Tn)", d.live_load_tonf),
        allowable_bearing_tonf_m2: prompt_f64("Allowable bearing (Tn/m²)", d.allowable_bearing_tonf_m2),
        concrete_strength_kgf_cm2: prompt_f64("Concrete f'c (kgf/cm²)", d.concrete_strength_kgf_cm2),
        steel_yield_kgf_cm2: prompt_f64("Steel fy (kgf/cm²)", d.steel_yield_kgf_cm2),
        allowable_steel_stress_tonf_m2: prompt_f64("Surcharge s/c (Tn/m²)", d.allowable_steel_stress_tonf_m2),
        eccentricity_m: prompt_f64("Eccentricity e (m)", d.eccentricity_m),
        soil_unit_weight_tonf_m3: prompt_f64("Soil unit weight (Tn/m³)", d.soil_unit_weight_tonf_m3),
        foundation_depth_m: prompt_f64("Foundation depth Df (m)", d.foundation_depth_m),
        cover_cm: prompt_f64("Cover (cm)", d.cover_cm),
        column_dim1_cm: prompt_f64("Column t1 (cm)", d.column_dim1_cm),
        column_dim2_cm: prompt_f64("Column t2 (cm)", d.column_dim2_cm),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_with_level(&cli.log_level);

    let config = match &cli.input {
        Some(path) => match DesignConfig::load_from(path) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "using design file");
                config
            }
            Err(e) => return report_error(&e),
        },
        None if cli.defaults => DesignConfig::default(),
        None => DesignConfig {
            footing: prompt_input(),
            ..DesignConfig::default()
        },
    };

    let design = match calculate_with(&config.footing, &config.solver) {
        Ok(design) => design,
        Err(e) => return report_error(&e),
    };

    let report = DesignReport::new(cli.engineer, cli.job, config.footing, design);
    if cli.json {
        match report.to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => return report_error(&e),
        }
    } else {
        println!();
        print!("{}", report.render_text());
    }

    ExitCode::SUCCESS
}

fn report_error(e: &footing_core::CalcError) -> ExitCode {
    tracing::error!(code = e.error_code(), "design run failed: {}", e);
    eprintln!("Error [{}]: {}", e.error_code(), e);
    if let Ok(json) = serde_json::to_string_pretty(e) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
    ExitCode::FAILURE
}
