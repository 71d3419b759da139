use nrx_core::errors::{ErrorInfo, NrxError};
use serde::{Deserialize, Serialize};

use crate::nest::LoopNest;

/// Column-oriented loop description as it appears in configuration files.
///
/// ```yaml
/// index: [i0, i1]
/// lower: ["0", "0"]
/// upper: [Nx0, Nx1]
/// increment: ["1", "1"]
/// pragma: ["", "#pragma omp parallel for"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct LoopColumns {
    /// Loop variable names, outermost first.
    pub index: Vec<String>,
    /// Lower bounds.
    pub lower: Vec<String>,
    /// Upper bounds.
    pub upper: Vec<String>,
    /// Increments.
    pub increment: Vec<String>,
    /// Annotation lines; empty strings mean none.
    pub pragma: Vec<String>,
}

impl LoopColumns {
    /// Parses a YAML document; every column must be a list of strings.
    pub fn from_yaml_str(data: &str) -> Result<Self, NrxError> {
        serde_yaml::from_str(data).map_err(|err| {
            NrxError::Config(
                ErrorInfo::new("loop-config", "invalid loop configuration document")
                    .with_context("cause", err),
            )
        })
    }

    /// Validates column lengths and builds the nest.
    pub fn to_nest(&self) -> Result<LoopNest, NrxError> {
        LoopNest::from_columns(
            &self.index,
            &self.lower,
            &self.upper,
            &self.increment,
            &self.pragma,
        )
    }
}
