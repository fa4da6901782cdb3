use std::io::Write;
use std::path::PathBuf;

use thiserror::Error;

use crate::input::{InputError, load_box_table};
use crate::model::ModelError;
use crate::model::fiducial::find_fiducial;
use crate::model::selection::ParameterSelection;
use crate::report::ReportError;

pub mod stage1_centers;
pub mod stage2_scores;
pub mod stage3_rank;
pub mod stage4_report;

use stage1_centers::{CenterMode, Stage1Inputs, run_stage1};
use stage2_scores::run_stage2;
use stage3_rank::run_stage3;
use stage4_report::{ReportFormat, Stage4Input, write_report};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Model(#[from] ModelError),
    #[error(transparent)]
    Report(#[from] ReportError),
}

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input: PathBuf,
    pub params: String,
    pub fiducial: String,
    pub center_mode: CenterMode,
    pub format: ReportFormat,
}

pub fn run(config: &RunConfig, out: &mut dyn Write) -> Result<(), PipelineError> {
    let fiducial = find_fiducial(&config.fiducial)?;
    let selection = ParameterSelection::parse(&config.params)?;
    let table = load_box_table(&config.input)?;

    let stage1 = run_stage1(&Stage1Inputs {
        fiducial,
        selection: &selection,
        table: &table,
        mode: config.center_mode,
    })?;
    let scores = run_stage2(&table, &stage1.params);
    let ranking = run_stage3(&scores);

    write_report(
        &Stage4Input {
            fiducial: fiducial.id,
            mode: config.center_mode,
            params: &stage1.params,
            table: &table,
            scores: &scores,
            ranking: &ranking,
        },
        config.format,
        out,
    )?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/mod.rs"]
mod tests;
