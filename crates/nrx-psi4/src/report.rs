use std::collections::BTreeMap;

use nrx_core::errors::{ErrorInfo, NrxError};
use nrx_core::{canonical_expr_hash, canonical_hash_all, Expr, Provenance, SchemaVersion};
use serde::{Deserialize, Serialize};

use crate::contract::Psi4;
use crate::inputs::AdmInputs;

/// Schema version written into every [`Psi4Report`].
pub const REPORT_SCHEMA: SchemaVersion = SchemaVersion::new(1, 0, 0);

/// Size and identity summary of one ψ4 component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentSummary {
    /// Number of canonical terms.
    pub terms: usize,
    /// Highest total degree.
    pub degree: u32,
    /// Number of distinct symbols.
    pub symbols: usize,
    /// Canonical hash of the expression.
    pub hash: String,
    /// Rendered expression text, when requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,
}

impl ComponentSummary {
    fn from_expr(expr: &Expr, include_expression: bool) -> Self {
        Self {
            terms: expr.num_terms(),
            degree: expr.degree(),
            symbols: expr.symbols().len(),
            hash: canonical_expr_hash(expr),
            expression: include_expression.then(|| expr.to_string()),
        }
    }
}

/// Serializable description of an assembled ψ4.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Psi4Report {
    /// Report schema.
    pub schema_version: SchemaVersion,
    /// Input hash and tool versions.
    pub provenance: Provenance,
    /// Real part summary.
    pub re: ComponentSummary,
    /// Imaginary part summary.
    pub im: ComponentSummary,
    /// Canonical hash over `(re, im)`.
    pub combined_hash: String,
}

impl Psi4Report {
    /// Summarizes a symbolic ψ4 assembled from `inputs`.
    pub fn build(psi4: &Psi4<Expr>, inputs: &AdmInputs<Expr>, include_expressions: bool) -> Self {
        let mut tool_versions = BTreeMap::new();
        tool_versions.insert("nrx-psi4".to_string(), env!("CARGO_PKG_VERSION").to_string());
        Self {
            schema_version: REPORT_SCHEMA,
            provenance: Provenance {
                inputs_hash: inputs.canonical_hash(),
                tool_versions,
            },
            re: ComponentSummary::from_expr(&psi4.re, include_expressions),
            im: ComponentSummary::from_expr(&psi4.im, include_expressions),
            combined_hash: canonical_hash_all([&psi4.re, &psi4.im]),
        }
    }
}

/// Serializes a report to pretty JSON.
pub fn to_json(report: &Psi4Report) -> Result<String, NrxError> {
    serde_json::to_string_pretty(report)
        .map_err(|err| NrxError::Serde(ErrorInfo::new("json-serialize", err.to_string())))
}

/// Restores a report from JSON, rejecting unknown major schema versions.
pub fn from_json(data: &str) -> Result<Psi4Report, NrxError> {
    let report: Psi4Report = serde_json::from_str(data)
        .map_err(|err| NrxError::Serde(ErrorInfo::new("json-deserialize", err.to_string())))?;
    if report.schema_version.major != REPORT_SCHEMA.major {
        return Err(NrxError::Serde(
            ErrorInfo::new("schema-version", "unsupported psi4 report schema")
                .with_context("found", report.schema_version.major)
                .with_context("expected", REPORT_SCHEMA.major),
        ));
    }
    Ok(report)
}
