#![deny(missing_docs)]
#![doc = "Symbolic assembly of the Weyl scalar psi4 from ADM slice data and a null tetrad."]

/// YAML-configurable symbol names and Christoffel source.
pub mod config;
mod contract;
pub mod curvature;
mod inputs;
/// Serializable summaries of assembled results.
pub mod report;
mod tetrad;

pub use config::{ChristoffelSource, InputNames, Psi4Config, TetradNames};
pub use contract::{assemble, assemble_terms, contract, Psi4, Psi4Terms};
pub use curvature::{rank2_term3, rank3_term2, rank4_term1, riemann};
pub use inputs::{christoffel_from_metric, AdmInputs};
pub use report::{from_json, to_json, Psi4Report};
pub use tetrad::NullTetrad;

use nrx_core::errors::NrxError;
use nrx_core::Expr;

/// Declares inputs and tetrad from `config` and assembles the symbolic ψ4.
pub fn assemble_declared(
    config: &Psi4Config,
) -> Result<(AdmInputs<Expr>, Psi4<Expr>), NrxError> {
    let inputs = AdmInputs::declared(config)?;
    let tetrad = NullTetrad::declared(&config.tetrad);
    let psi4 = assemble(&inputs, &tetrad)?;
    Ok((inputs, psi4))
}
