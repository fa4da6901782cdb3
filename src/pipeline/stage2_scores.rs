use crate::input::BoxTable;
use crate::pipeline::stage1_centers::ResolvedParam;

/// RMS of per-parameter deviations in sigma units. NaN/inf propagate.
pub fn rms_distance(table: &BoxTable, row: usize, params: &[ResolvedParam]) -> f64 {
    if params.is_empty() {
        return 0.0;
    }
    let mut l2 = 0.0f64;
    for p in params {
        let d = (p.center - table.value(row, p.column)) / p.sigma;
        l2 += d * d;
    }
    (l2 / params.len() as f64).sqrt()
}

pub fn run_stage2(table: &BoxTable, params: &[ResolvedParam]) -> Vec<f64> {
    let scores: Vec<f64> = (0..table.n_boxes())
        .map(|row| rms_distance(table, row, params))
        .collect();
    let non_finite = scores.iter().filter(|s| !s.is_finite()).count();
    if non_finite > 0 {
        tracing::warn!(
            "{} of {} boxes have a non-finite rms distance; they rank last",
            non_finite,
            scores.len()
        );
    }
    scores
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_scores.rs"]
mod tests;
