use thiserror::Error;

pub mod fiducial;
pub mod selection;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown fiducial cosmology {name:?} (known: {known})")]
    UnknownFiducial { name: String, known: String },
    #[error("parameter {param:?} is not defined by fiducial cosmology {fiducial}")]
    UnknownParameter { param: String, fiducial: String },
    #[error("parameter list is empty")]
    EmptySelection,
    #[error("parameter list {0:?} contains an empty name")]
    EmptyParameterName(String),
    #[error("uncertainty for {param} must be positive, got {sigma}")]
    NonPositiveSigma { param: String, sigma: f64 },
    #[error("cannot center on the sample mean of an empty box table")]
    EmptySample,
}
