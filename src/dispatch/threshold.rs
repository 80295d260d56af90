//! Deficit-threshold calibration against a reliability target.

use super::types::{InvalidInputError, ensure_aligned};

/// Linear-interpolated percentile of `values` on the 0 to 100 scale.
///
/// Percentile 0 is the minimum and percentile 100 the maximum; ranks in
/// between interpolate linearly between the bracketing order statistics.
fn percentile(values: &[f32], pct: f32) -> f32 {
    let mut sorted = values.to_vec();
    sorted.sort_by(f32::total_cmp);

    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }

    let rank = (pct / 100.0).clamp(0.0, 1.0) * (n - 1) as f32;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    let frac = rank - lower as f32;
    sorted[lower] + frac * (sorted[upper] - sorted[lower])
}

/// Finds the unmet-energy level at which the backup source must switch on
/// for the covered hours to bring the blackout rate down to `target`.
///
/// When the realized blackout rate already meets the target, returns
/// `max(unmet_energy) + 1.0`: a threshold strictly above every realized
/// deficit, so backup never activates. The fixed offset keeps floating-point
/// ties at the maximum from spuriously dispatching.
///
/// Pure function of its three inputs; calling it twice with identical
/// series yields the identical threshold.
///
/// # Errors
///
/// Returns an `InvalidInputError` if the series are empty or misaligned.
pub fn find_deficit_threshold(
    unmet_energy: &[f32],
    blackouts: &[f32],
    target: f32,
) -> Result<f32, InvalidInputError> {
    ensure_aligned(unmet_energy, blackouts)?;

    let blackout_rate = blackouts.iter().sum::<f32>() / blackouts.len() as f32;
    let gap = blackout_rate - target;

    if gap > 0.0 {
        Ok(percentile(unmet_energy, 100.0 * (1.0 - gap)))
    } else {
        let max = unmet_energy.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        Ok(max + 1.0)
    }
}
