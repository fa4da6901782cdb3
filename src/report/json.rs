use crate::report::{ReportContext, ReportError};

/// Non-finite scores serialize as `null`.
pub fn render_report_json(ctx: &ReportContext) -> Result<String, ReportError> {
    let mut out = serde_json::to_string_pretty(ctx)?;
    out.push('\n');
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/json.rs"]
mod tests;
