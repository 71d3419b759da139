#![deny(missing_docs)]
#![doc = "Fixed-rank tensor containers over the nrx expression algebra."]

mod field;

pub use field::{index_tuples, symbol_name, Rank1, Rank2, Rank3, Rank4, TensorField};

/// Spatial dimension of every slice tensor.
pub const SPATIAL_DIM: usize = 3;

/// Spacetime dimension of tetrad legs.
pub const SPACETIME_DIM: usize = 4;
