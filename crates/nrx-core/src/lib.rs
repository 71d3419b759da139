#![deny(missing_docs)]
#![doc = "Exact symbolic arithmetic, shared error types and canonical hashing for the nrx workspace."]

/// The arithmetic trait tensor code is generic over.
pub mod algebra;
pub mod errors;
/// Canonical hashing helpers for expressions.
pub mod hash;
pub mod provenance;
pub mod symbolic;

pub use algebra::{rational, Algebra};
pub use errors::{ErrorInfo, NrxError};
pub use hash::{canonical_expr_hash, canonical_hash_all};
pub use num_rational::Rational64;
pub use provenance::{Provenance, SchemaVersion};
pub use symbolic::{Expr, Monomial, Symbol};
