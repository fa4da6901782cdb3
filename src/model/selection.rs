use crate::model::ModelError;

pub const DEFAULT_PARAMS: &str = "ombh2,omch2,w0,ns,ln10As,H0,Neff";

/// Ordered parameter names. Order drives report columns only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterSelection {
    names: Vec<String>,
}

impl ParameterSelection {
    pub fn parse(list: &str) -> Result<Self, ModelError> {
        if list.trim().is_empty() {
            return Err(ModelError::EmptySelection);
        }
        let mut names = Vec::new();
        for raw in list.split(',') {
            let name = raw.trim();
            if name.is_empty() {
                return Err(ModelError::EmptyParameterName(list.to_string()));
            }
            names.push(name.to_string());
        }
        Ok(Self { names })
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/selection.rs"]
mod tests;
