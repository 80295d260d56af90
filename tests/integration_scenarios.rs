//! Integration tests for scenario presets and documented reference cases.

mod common;

use offgrid_sim::config::ScenarioConfig;
use offgrid_sim::dispatch::engine::run_backup_dispatch;
use offgrid_sim::dispatch::fuel::fuel_usage;
use offgrid_sim::dispatch::generator::{BackupSource, DieselGenerator};
use offgrid_sim::dispatch::types::DispatchSchedule;
use offgrid_sim::io::export::write_csv;
use offgrid_sim::profiles::DeficitProfile;

#[test]
fn reference_case_threshold_and_dispatch() {
    // Blackout rate 0.4 with target 0.0 calibrates to the 60th percentile
    // of the deficits (2.0 kWh); both nonzero-deficit hours are covered.
    let profile = common::small_profile();
    let outcome = run_backup_dispatch(&profile, 0.0, 10.0, &common::default_source())
        .expect("dispatch should succeed");

    assert!((outcome.threshold_kwh - 2.0).abs() < 1e-6);
    assert_eq!(outcome.schedule.backup_active, vec![0.0, 0.0, 1.0, 1.0, 0.0]);
    assert_eq!(
        outcome.schedule.backup_energy_kwh,
        vec![0.0, 0.0, 5.0, 10.0, 0.0]
    );
}

#[test]
fn reference_case_minimum_load_fuel() {
    // 2 kWh from a 10 kW unit: load factor 0.2 under the 0.3 floor, so the
    // hour burns 0.3 * 10 * 0.4 = 1.2 litres.
    let source = BackupSource::Electric(DieselGenerator::new(
        "reference_diesel".to_string(),
        0.4,
        0.3,
    ));
    let schedule = DispatchSchedule {
        backup_energy_kwh: vec![2.0],
        backup_active: vec![1.0],
    };
    let fuel = fuel_usage(10.0, &source, &schedule);
    assert!((fuel[0] - 1.2).abs() < 1e-6);
}

#[test]
fn full_coverage_preset_eliminates_blackouts() {
    let cfg = ScenarioConfig::full_coverage();
    let profile = DeficitProfile::synthetic(
        &cfg.profile,
        cfg.simulation.total_hours(),
        cfg.simulation.seed,
    );
    let source = BackupSource::Electric(DieselGenerator::new(
        cfg.generator.name.clone(),
        cfg.generator.fuel_consumption,
        cfg.generator.minimum_load,
    ));
    let outcome = run_backup_dispatch(
        &profile,
        cfg.reliability.target,
        cfg.simulation.capacity_kw,
        &source,
    )
    .expect("dispatch should succeed");

    // Every blackout hour whose deficit reaches the threshold is covered;
    // with target 0.0 the uncovered remainder is a sliver of the original.
    let uncovered: f32 = profile
        .blackouts
        .iter()
        .zip(&outcome.schedule.backup_active)
        .map(|(&b, &a)| b * (1.0 - a))
        .sum();
    let original: f32 = profile.blackouts.iter().sum();
    assert!(
        uncovered <= 0.05 * original,
        "uncovered {uncovered} of {original} blackout hours"
    );
}

#[test]
fn light_duty_preset_never_dispatches() {
    let cfg = ScenarioConfig::light_duty();
    let profile = DeficitProfile::synthetic(
        &cfg.profile,
        cfg.simulation.total_hours(),
        cfg.simulation.seed,
    );
    let source = BackupSource::Electric(DieselGenerator::new(
        cfg.generator.name.clone(),
        cfg.generator.fuel_consumption,
        cfg.generator.minimum_load,
    ));
    let outcome = run_backup_dispatch(
        &profile,
        cfg.reliability.target,
        cfg.simulation.capacity_kw,
        &source,
    )
    .expect("dispatch should succeed");

    // The 0.9 target exceeds any realized blackout rate, so the sentinel
    // threshold keeps the generator off for the whole horizon.
    assert!(outcome.schedule.backup_active.iter().all(|&a| a == 0.0));
    assert_eq!(outcome.fuel_usage_litres.iter().sum::<f32>(), 0.0);
}

#[test]
fn csv_profile_feeds_the_chain() {
    let csv = "unmet_kwh,blackout\n0.0,0\n0.0,0\n5.0,1\n10.0,1\n0.0,0\n";
    let profile = DeficitProfile::from_reader(csv.as_bytes()).expect("profile should parse");
    let outcome = run_backup_dispatch(&profile, 0.0, 10.0, &common::default_source())
        .expect("dispatch should succeed");
    assert_eq!(outcome.schedule.backup_active, vec![0.0, 0.0, 1.0, 1.0, 0.0]);
}

#[test]
fn telemetry_round_trips_through_the_csv_reader() {
    let profile = common::small_profile();
    let outcome = run_backup_dispatch(&profile, 0.0, 10.0, &common::default_source())
        .expect("dispatch should succeed");

    let mut buf = Vec::new();
    write_csv(&profile, &outcome, &mut buf).expect("export should succeed");

    let mut rdr = csv::ReaderBuilder::new().from_reader(buf.as_slice());
    let mut rows = 0;
    for record in rdr.records() {
        let rec = record.expect("every row should parse");
        assert_eq!(rec.len(), 6);
        rows += 1;
    }
    assert_eq!(rows, profile.len());
}

#[test]
fn scenario_toml_missing_generator_field_is_rejected() {
    let toml = r#"
[simulation]
years = 1

[generator]
fuel_consumption = 0.4
"#;
    assert!(ScenarioConfig::from_toml_str(toml).is_err());
}

#[test]
fn water_heater_scenario_parses_and_validates() {
    let toml = r#"
[generator]
name = "clinic_heater"
kind = "water_heater"
fuel_consumption = 0.5
minimum_load = 0.2
electric_power = 0.02
maximum_output_kw = 8.0
"#;
    let cfg = ScenarioConfig::from_toml_str(toml).expect("scenario should parse");
    assert!(cfg.validate().is_empty());
    assert_eq!(cfg.generator.kind, "water_heater");
}
