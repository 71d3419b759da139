use nrx_core::errors::{ErrorInfo, NrxError};
use serde::{Deserialize, Serialize};

/// YAML-configurable parameters for declared-symbol ψ4 assembly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Psi4Config {
    /// Symbol names of the null tetrad legs.
    #[serde(default)]
    pub tetrad: TetradNames,
    /// Symbol names of the ADM input tensors.
    #[serde(default)]
    pub inputs: InputNames,
    /// Where the Christoffel symbols come from.
    #[serde(default)]
    pub christoffel: ChristoffelSource,
    /// Whether reports carry the rendered expression text.
    #[serde(default)]
    pub include_expressions: bool,
}

impl Psi4Config {
    /// Parses a configuration document, filling omitted fields with defaults.
    pub fn from_yaml_str(data: &str) -> Result<Self, NrxError> {
        serde_yaml::from_str(data).map_err(|err| {
            NrxError::Config(
                ErrorInfo::new("psi4-config", "invalid psi4 configuration document")
                    .with_context("cause", err),
            )
        })
    }
}

/// Symbol name patterns for the tetrad vectors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TetradNames {
    /// Outgoing real null vector.
    #[serde(default = "default_n")]
    pub n: String,
    /// Real part of the complex null vector.
    #[serde(default = "default_m_re")]
    pub m_re: String,
    /// Imaginary part of the complex null vector.
    #[serde(default = "default_m_im")]
    pub m_im: String,
}

fn default_n() -> String {
    "n4U".into()
}

fn default_m_re() -> String {
    "mre4U".into()
}

fn default_m_im() -> String {
    "mim4U".into()
}

impl Default for TetradNames {
    fn default() -> Self {
        Self {
            n: default_n(),
            m_re: default_m_re(),
            m_im: default_m_im(),
        }
    }
}

/// Symbol name patterns for the declared ADM inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputNames {
    /// Spatial metric γ_ij.
    pub metric: String,
    /// Inverse metric γ^ij.
    pub metric_inverse: String,
    /// First derivatives γ_ij,k.
    pub metric_d: String,
    /// Second derivatives γ_ij,kl.
    pub metric_dd: String,
    /// Christoffel symbols Γ^i_jk.
    pub christoffel: String,
    /// Extrinsic curvature K_ij.
    pub extrinsic: String,
    /// First derivatives K_ij,k.
    pub extrinsic_d: String,
}

impl Default for InputNames {
    fn default() -> Self {
        Self {
            metric: "gammaDD".into(),
            metric_inverse: "gammaUU".into(),
            metric_d: "gammaDDdD".into(),
            metric_dd: "gammaDDdDD".into(),
            christoffel: "GammaUDD".into(),
            extrinsic: "KDD".into(),
            extrinsic_d: "KDDdD".into(),
        }
    }
}

/// Origin of the Christoffel symbols handed to the assembler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ChristoffelSource {
    /// Opaque symbols symmetric in the lower pair.
    #[default]
    Declared,
    /// Built from the inverse metric and the metric first derivatives.
    FromMetric,
}
