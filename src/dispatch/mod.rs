/// Orchestration of the calibrate, dispatch, and fuel chain.
pub mod engine;
pub mod fuel;
/// Backup source descriptors.
pub mod generator;
pub mod kpi;
pub mod schedule;
/// Deficit-threshold calibration against a reliability target.
pub mod threshold;
pub mod types;
