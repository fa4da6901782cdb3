use crate::model::ModelError;

pub const DEFAULT_FIDUCIAL: &str = "mdpl2";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FiducialParam {
    pub name: &'static str,
    pub center: f64,
    pub sigma: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct FiducialDef {
    pub id: &'static str,
    pub source: &'static str,
    pub params: &'static [FiducialParam],
}

impl FiducialDef {
    pub fn param(&self, name: &str) -> Result<&FiducialParam, ModelError> {
        self.params
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| ModelError::UnknownParameter {
                param: name.to_string(),
                fiducial: self.id.to_string(),
            })
    }
}

const fn param(name: &'static str, center: f64, sigma: f64) -> FiducialParam {
    FiducialParam {
        name,
        center,
        sigma,
    }
}

// Planck 2018 VI (arXiv:1807.06209), Table 4 rows 3 and 7, Table 5 row 6.
const PL2018: &[FiducialParam] = &[
    param("ombh2", 0.02224, 0.00022),
    param("omch2", 0.1179, 0.0028),
    param("w0", -1.04, 0.1),
    param("ns", 0.9589, 0.0084),
    param("ln10As", 3.036, 0.017),
    param("H0", 66.3, 1.4),
    param("Neff", 2.99, 0.34),
];

// MultiDark-Planck 2 (cosmosim.org), uncertainties from Planck 2013 XVI
// (arXiv:1303.5076) Table 2 and eq. 74.
const MDPL2: &[FiducialParam] = &[
    param("ombh2", 0.02214, 0.00033),
    param("omch2", 0.1189, 0.003),
    param("w0", -1.0, 0.1),
    param("ns", 0.96, 0.0073),
    param("ln10As", 3.098, 0.057),
    param("H0", 67.77, 1.5),
    param("Neff", 3.046, 0.66),
];

const BUILTIN_FIDUCIALS: &[FiducialDef] = &[
    FiducialDef {
        id: "pl2018",
        source: "Planck 2018 VI, arXiv:1807.06209",
        params: PL2018,
    },
    FiducialDef {
        id: "mdpl2",
        source: "MDPL2 simulation, Planck 2013 XVI errors, arXiv:1303.5076",
        params: MDPL2,
    },
];

pub fn builtin_fiducials() -> &'static [FiducialDef] {
    BUILTIN_FIDUCIALS
}

pub fn find_fiducial(name: &str) -> Result<&'static FiducialDef, ModelError> {
    BUILTIN_FIDUCIALS
        .iter()
        .find(|f| f.id == name)
        .ok_or_else(|| ModelError::UnknownFiducial {
            name: name.to_string(),
            known: BUILTIN_FIDUCIALS
                .iter()
                .map(|f| f.id)
                .collect::<Vec<_>>()
                .join(", "),
        })
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/fiducial.rs"]
mod tests;
