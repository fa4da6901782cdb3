use serde::Serialize;
use thiserror::Error;

pub mod json;
pub mod text;

pub const CENTER_SIG_FIGS: i32 = 4;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Serialize)]
pub struct ParamSummary {
    pub name: String,
    pub center: f64,
    pub fiducial_center: f64,
    pub sigma: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_mean: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RankedRow {
    #[serde(rename = "box")]
    pub box_index: usize,
    pub rank: usize,
    pub rms: f64,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportContext {
    pub tool: String,
    pub version: String,
    pub fiducial: String,
    pub center_mode: String,
    pub columns: Vec<String>,
    pub params: Vec<ParamSummary>,
    pub rows: Vec<RankedRow>,
}

impl ReportContext {
    pub fn uses_sample_mean(&self) -> bool {
        self.center_mode == "mean"
    }
}

/// Rounds to `n` significant figures, half away from zero.
/// Zero and non-finite inputs come back unchanged.
pub fn round_to_n(x: f64, n: i32) -> f64 {
    if x == 0.0 || !x.is_finite() {
        return x;
    }
    let digits = n - 1 - x.abs().log10().floor() as i32;
    if digits >= 0 {
        let scale = 10f64.powi(digits);
        (x * scale).round() / scale
    } else {
        let scale = 10f64.powi(-digits);
        (x / scale).round() * scale
    }
}

/// Shortest round-trip form: `67.0`, `0.02214`, `1e-05`, `nan`.
pub fn format_repr(v: f64) -> String {
    if v.is_nan() {
        return "nan".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let abs = v.abs();
    if abs == 0.0 || (1e-4..1e16).contains(&abs) {
        let s = format!("{v}");
        return if s.contains('.') { s } else { format!("{s}.0") };
    }
    let s = format!("{v:e}");
    match s.split_once('e') {
        Some((mantissa, exp)) => match exp.parse::<i32>() {
            Ok(exp) => {
                let sign = if exp < 0 { '-' } else { '+' };
                format!("{mantissa}e{sign}{:02}", exp.abs())
            }
            Err(_) => s,
        },
        None => s,
    }
}

pub fn format_fixed3(v: f64) -> String {
    if v.is_finite() {
        format!("{:.3}", v)
    } else {
        format_repr(v)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
