//! Backup-dispatch simulator entry point: CLI wiring and config-driven runs.

use std::path::Path;
use std::process;

use offgrid_sim::config::ScenarioConfig;
use offgrid_sim::dispatch::engine::run_backup_dispatch;
use offgrid_sim::dispatch::generator::{BackupSource, DieselGenerator, DieselWaterHeater};
use offgrid_sim::dispatch::kpi::BackupKpiReport;
use offgrid_sim::io::export::export_csv;
use offgrid_sim::profiles::DeficitProfile;

/// Parsed CLI arguments.
struct CliArgs {
    scenario_path: Option<String>,
    preset: Option<String>,
    profile_path: Option<String>,
    seed_override: Option<u64>,
    capacity_override: Option<f32>,
    telemetry_out: Option<String>,
}

fn print_help() {
    eprintln!("offgrid-sim — Off-grid backup-generator dispatch simulator");
    eprintln!();
    eprintln!("Usage: offgrid-sim [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --scenario <path>        Load scenario from TOML config file");
    eprintln!("  --preset <name>          Use a built-in preset (baseline)");
    eprintln!("  --profile <path>         Load unmet-energy/blackout profile from CSV");
    eprintln!("  --seed <u64>             Override random seed");
    eprintln!("  --capacity <kw>          Override rated backup capacity");
    eprintln!("  --telemetry-out <path>   Export hourly results to CSV");
    eprintln!("  --help                   Show this help message");
    eprintln!();
    eprintln!("If no --scenario or --preset is given, the baseline preset is used.");
    eprintln!("If no --profile is given, a synthetic profile is generated from the");
    eprintln!("scenario's [profile] section and seed.");
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs {
        scenario_path: None,
        preset: None,
        profile_path: None,
        seed_override: None,
        capacity_override: None,
        telemetry_out: None,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                process::exit(0);
            }
            "--scenario" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --scenario requires a path argument");
                    process::exit(1);
                }
                cli.scenario_path = Some(args[i].clone());
            }
            "--preset" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --preset requires a name argument");
                    process::exit(1);
                }
                cli.preset = Some(args[i].clone());
            }
            "--profile" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --profile requires a path argument");
                    process::exit(1);
                }
                cli.profile_path = Some(args[i].clone());
            }
            "--seed" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --seed requires a u64 argument");
                    process::exit(1);
                }
                if let Ok(s) = args[i].parse::<u64>() {
                    cli.seed_override = Some(s);
                } else {
                    eprintln!("error: --seed value \"{}\" is not a valid u64", args[i]);
                    process::exit(1);
                }
            }
            "--capacity" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --capacity requires a kW argument");
                    process::exit(1);
                }
                if let Ok(c) = args[i].parse::<f32>() {
                    cli.capacity_override = Some(c);
                } else {
                    eprintln!("error: --capacity value \"{}\" is not a valid number", args[i]);
                    process::exit(1);
                }
            }
            "--telemetry-out" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --telemetry-out requires a path argument");
                    process::exit(1);
                }
                cli.telemetry_out = Some(args[i].clone());
            }
            other => {
                eprintln!("error: unknown argument \"{other}\"");
                print_help();
                process::exit(1);
            }
        }
        i += 1;
    }

    cli
}

/// Builds the backup source described by the scenario's generator section.
fn build_backup_source(cfg: &ScenarioConfig) -> BackupSource {
    let g = &cfg.generator;
    match g.kind.as_str() {
        "water_heater" => BackupSource::Heat(DieselWaterHeater::new(
            g.name.clone(),
            g.fuel_consumption,
            g.electric_power,
            g.maximum_output_kw,
            g.minimum_load,
        )),
        _ => BackupSource::Electric(DieselGenerator::new(
            g.name.clone(),
            g.fuel_consumption,
            g.minimum_load,
        )),
    }
}

fn main() {
    let cli = parse_args();

    // Load config: --scenario takes priority, then --preset, then baseline default
    let mut scenario = if let Some(ref path) = cli.scenario_path {
        match ScenarioConfig::from_toml_file(Path::new(path)) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else if let Some(ref name) = cli.preset {
        match ScenarioConfig::from_preset(name) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else {
        ScenarioConfig::baseline()
    };

    // Apply overrides
    if let Some(seed) = cli.seed_override {
        scenario.simulation.seed = seed;
    }
    if let Some(capacity) = cli.capacity_override {
        scenario.simulation.capacity_kw = capacity;
    }

    // Validate
    let errors = scenario.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        process::exit(1);
    }

    // Profile: external CSV or synthetic stand-in
    let profile = if let Some(ref path) = cli.profile_path {
        match DeficitProfile::from_csv_file(Path::new(path)) {
            Ok(p) => p,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else {
        DeficitProfile::synthetic(
            &scenario.profile,
            scenario.simulation.total_hours(),
            scenario.simulation.seed,
        )
    };

    // Run the dispatch chain
    let source = build_backup_source(&scenario);
    let outcome = match run_backup_dispatch(
        &profile,
        scenario.reliability.target,
        scenario.simulation.capacity_kw,
        &source,
    ) {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    };

    println!(
        "{} over {} h: deficit threshold {:.3} kWh at {:.1} kW capacity",
        source.name(),
        profile.len(),
        outcome.threshold_kwh,
        scenario.simulation.capacity_kw
    );

    // Print key results
    let kpi = BackupKpiReport::from_outcome(
        &outcome,
        &profile.blackouts,
        scenario.simulation.capacity_kw,
    );
    println!("\n{kpi}");

    // Export CSV if requested
    if let Some(ref path) = cli.telemetry_out {
        if let Err(e) = export_csv(&profile, &outcome, Path::new(path)) {
            eprintln!("error: failed to write CSV: {e}");
            process::exit(1);
        }
        eprintln!("Telemetry written to {path}");
    }
}
