use crate::input::BoxTable;
use crate::model::ModelError;
use crate::model::fiducial::FiducialDef;
use crate::model::selection::ParameterSelection;
use crate::pipeline::PipelineError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CenterMode {
    Fiducial,
    SampleMean,
}

impl CenterMode {
    pub fn label(self) -> &'static str {
        match self {
            CenterMode::Fiducial => "fiducial",
            CenterMode::SampleMean => "mean",
        }
    }
}

/// Center and uncertainty for one selected parameter, bound to its table column.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedParam {
    pub name: String,
    pub column: usize,
    pub center: f64,
    pub fiducial_center: f64,
    pub sigma: f64,
    pub sample_mean: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct Stage1Inputs<'a> {
    pub fiducial: &'a FiducialDef,
    pub selection: &'a ParameterSelection,
    pub table: &'a BoxTable,
    pub mode: CenterMode,
}

#[derive(Debug)]
pub struct Stage1Output {
    pub params: Vec<ResolvedParam>,
}

pub fn run_stage1(inputs: &Stage1Inputs<'_>) -> Result<Stage1Output, PipelineError> {
    let mut params = Vec::with_capacity(inputs.selection.names().len());
    for name in inputs.selection.names() {
        let def = inputs.fiducial.param(name)?;
        let column = inputs.table.column_index(name)?;
        if def.sigma.is_nan() || def.sigma <= 0.0 {
            return Err(ModelError::NonPositiveSigma {
                param: name.clone(),
                sigma: def.sigma,
            }
            .into());
        }

        let sample_mean = match inputs.mode {
            CenterMode::Fiducial => None,
            CenterMode::SampleMean => Some(
                inputs
                    .table
                    .column_mean(column)
                    .ok_or(ModelError::EmptySample)?,
            ),
        };
        let center = sample_mean.unwrap_or(def.center);
        if let Some(mean) = sample_mean {
            tracing::info!(
                "centering {} on box-sample mean {} (fiducial {})",
                name,
                mean,
                def.center
            );
        }
        tracing::debug!("{}: center={} sigma={} column={}", name, center, def.sigma, column);

        params.push(ResolvedParam {
            name: name.clone(),
            column,
            center,
            fiducial_center: def.center,
            sigma: def.sigma,
            sample_mean,
        });
    }
    Ok(Stage1Output { params })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_centers.rs"]
mod tests;
