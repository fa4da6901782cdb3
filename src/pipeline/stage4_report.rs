use std::io::Write;

use crate::input::BoxTable;
use crate::pipeline::stage1_centers::{CenterMode, ResolvedParam};
use crate::report::json::render_report_json;
use crate::report::text::render_report_text;
use crate::report::{ParamSummary, RankedRow, ReportContext, ReportError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct Stage4Input<'a> {
    pub fiducial: &'a str,
    pub mode: CenterMode,
    pub params: &'a [ResolvedParam],
    pub table: &'a BoxTable,
    pub scores: &'a [f64],
    pub ranking: &'a [usize],
}

pub fn build_report_context(input: &Stage4Input<'_>) -> ReportContext {
    let params = input
        .params
        .iter()
        .map(|p| ParamSummary {
            name: p.name.clone(),
            center: p.center,
            fiducial_center: p.fiducial_center,
            sigma: p.sigma,
            sample_mean: p.sample_mean,
        })
        .collect();

    let rows = input
        .ranking
        .iter()
        .enumerate()
        .map(|(rank, &box_index)| RankedRow {
            box_index,
            rank: rank + 1,
            rms: input.scores[box_index],
            values: input
                .params
                .iter()
                .map(|p| input.table.value(box_index, p.column))
                .collect(),
        })
        .collect();

    ReportContext {
        tool: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        fiducial: input.fiducial.to_string(),
        center_mode: input.mode.label().to_string(),
        columns: input.params.iter().map(|p| p.name.clone()).collect(),
        params,
        rows,
    }
}

pub fn render_report(input: &Stage4Input<'_>, format: ReportFormat) -> Result<String, ReportError> {
    let ctx = build_report_context(input);
    match format {
        ReportFormat::Text => Ok(render_report_text(&ctx)),
        ReportFormat::Json => render_report_json(&ctx),
    }
}

pub fn write_report(
    input: &Stage4Input<'_>,
    format: ReportFormat,
    out: &mut dyn Write,
) -> Result<(), ReportError> {
    let rendered = render_report(input, format)?;
    out.write_all(rendered.as_bytes())?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_report.rs"]
mod tests;
