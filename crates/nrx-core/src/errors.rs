//! Structured error types shared across nrx crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`NrxError`] variant.
///
/// Context keys name the offending object (`tensor`, `symbol`, a loop column)
/// and the quantities compared (`expected`, `found`, `dim`, `axis`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable kebab-case code, e.g. `dimension-mismatch`.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Ordered key value pairs describing the failing input.
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional remediation hint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Payload with the given code and message and no context.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Records `key = value`, rendering the value with `Display`.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Display) -> Self {
        self.context.insert(key.into(), value.to_string());
        self
    }

    /// Sets the remediation hint.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Looks up a context value.
    pub fn context_value(&self, key: &str) -> Option<&str> {
        self.context.get(key).map(String::as_str)
    }
}

/// `[code] message {key=value, ...} (hint: ...)`
impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        let mut entries = self.context.iter();
        if let Some((key, value)) = entries.next() {
            write!(f, " {{{key}={value}")?;
            for (key, value) in entries {
                write!(f, ", {key}={value}")?;
            }
            f.write_str("}")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " (hint: {hint})")?;
        }
        Ok(())
    }
}

/// Canonical error type for the nrx workspace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum NrxError {
    /// Invalid configuration: mismatched loop columns, bad symmetry declarations.
    #[error("invalid configuration: {0}")]
    Config(ErrorInfo),
    /// Precondition violations on tensor rank, dimension or index bounds.
    #[error("shape precondition violated: {0}")]
    Shape(ErrorInfo),
    /// Numeric evaluation of a symbolic expression failed.
    #[error("evaluation failed: {0}")]
    Eval(ErrorInfo),
    /// Report serialization and schema errors.
    #[error("serialization failed: {0}")]
    Serde(ErrorInfo),
}

impl NrxError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            NrxError::Config(info)
            | NrxError::Shape(info)
            | NrxError::Eval(info)
            | NrxError::Serde(info) => info,
        }
    }

    /// The payload's stable code.
    pub fn code(&self) -> &str {
        &self.info().code
    }

    /// Shape error for a tensor whose dimension is not `expected`.
    pub fn dimension_mismatch(name: &str, expected: usize, found: usize) -> Self {
        NrxError::Shape(
            ErrorInfo::new("dimension-mismatch", format!("tensor `{name}` has the wrong dimension"))
                .with_context("tensor", name)
                .with_context("expected", expected)
                .with_context("found", found),
        )
    }
}
