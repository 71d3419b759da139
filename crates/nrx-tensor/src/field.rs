use std::fmt;

use nrx_core::errors::{ErrorInfo, NrxError};
use nrx_core::{Algebra, Expr};

/// Dense tensor of fixed rank `R` and runtime dimension, stored row-major.
///
/// The rank is part of the type; ranks above four are rejected at compile
/// time. Index components are checked against the dimension on every access,
/// and an out-of-range component panics.
#[derive(Clone, PartialEq)]
pub struct TensorField<E, const R: usize> {
    dim: usize,
    entries: Vec<E>,
}

/// Rank-1 tensor.
pub type Rank1<E> = TensorField<E, 1>;
/// Rank-2 tensor.
pub type Rank2<E> = TensorField<E, 2>;
/// Rank-3 tensor.
pub type Rank3<E> = TensorField<E, 3>;
/// Rank-4 tensor.
pub type Rank4<E> = TensorField<E, 4>;

impl<E, const R: usize> TensorField<E, R> {
    const RANK_SUPPORTED: () = assert!(R <= 4, "tensor rank must be between 0 and 4");

    /// Builds a tensor by evaluating `f` at every index tuple in row-major order.
    pub fn from_fn(dim: usize, mut f: impl FnMut([usize; R]) -> E) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::RANK_SUPPORTED;
        let entries = index_tuples::<R>(dim).map(&mut f).collect();
        Self { dim, entries }
    }

    /// Number of values each index ranges over.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Number of indices.
    pub const fn rank(&self) -> usize {
        R
    }

    /// Number of stored entries, `dim^rank`.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True only for a positive-rank tensor of dimension zero.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entry at `idx`.
    ///
    /// # Panics
    ///
    /// Panics when any component of `idx` is not below [`Self::dim`].
    pub fn get(&self, idx: [usize; R]) -> &E {
        &self.entries[self.offset(idx)]
    }

    /// Returns a mutable reference to the entry at `idx`; panics like [`Self::get`].
    pub fn get_mut(&mut self, idx: [usize; R]) -> &mut E {
        let offset = self.offset(idx);
        &mut self.entries[offset]
    }

    /// Overwrites the entry at `idx`; panics like [`Self::get`].
    pub fn set(&mut self, idx: [usize; R], value: E) {
        *self.get_mut(idx) = value;
    }

    /// Returns the entry at `idx` or a shape error naming the bad component.
    pub fn try_get(&self, idx: [usize; R]) -> Result<&E, NrxError> {
        if let Some(axis) = idx.iter().position(|&component| component >= self.dim) {
            return Err(NrxError::Shape(
                ErrorInfo::new("index-out-of-range", "tensor index outside declared bounds")
                    .with_context("axis", axis)
                    .with_context("index", format!("{idx:?}"))
                    .with_context("dim", self.dim),
            ));
        }
        Ok(self.get(idx))
    }

    /// Iterates `(index, entry)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = ([usize; R], &E)> {
        index_tuples::<R>(self.dim).zip(self.entries.iter())
    }

    /// Iterates the entries in row-major order.
    pub fn values(&self) -> impl Iterator<Item = &E> {
        self.entries.iter()
    }

    /// Applies `f` to every entry, keeping rank and dimension.
    pub fn map<F>(&self, mut f: impl FnMut(&E) -> F) -> TensorField<F, R> {
        TensorField {
            dim: self.dim,
            entries: self.entries.iter().map(&mut f).collect(),
        }
    }

    /// Fails with a shape error unless the dimension equals `expected`.
    pub fn expect_dim(&self, name: &str, expected: usize) -> Result<(), NrxError> {
        if self.dim == expected {
            Ok(())
        } else {
            Err(NrxError::dimension_mismatch(name, expected, self.dim))
        }
    }

    fn offset(&self, idx: [usize; R]) -> usize {
        idx.iter().fold(0, |acc, &component| {
            assert!(
                component < self.dim,
                "tensor index {idx:?} out of bounds for dimension {}",
                self.dim
            );
            acc * self.dim + component
        })
    }
}

impl<E: Algebra, const R: usize> TensorField<E, R> {
    /// Tensor with every entry set to the algebra's zero.
    pub fn zero(dim: usize) -> Self {
        Self::from_fn(dim, |_| E::zero())
    }

    /// Multiplies every entry in place by a rational factor.
    pub fn scale_in_place(&mut self, factor: nrx_core::Rational64) {
        for entry in &mut self.entries {
            *entry = entry.scaled(factor);
        }
    }

    /// True when every entry vanishes.
    pub fn is_zero(&self) -> bool {
        self.entries.iter().all(Algebra::vanishes)
    }
}

impl<const R: usize> TensorField<Expr, R> {
    /// Tensor whose entries are distinct symbols named `pattern` followed by
    /// the indices, e.g. `gammaDD01`; see [`symbol_name`].
    pub fn declare(pattern: &str, dim: usize) -> Self {
        Self::from_fn(dim, |idx| Expr::symbol(symbol_name(pattern, &idx, dim)))
    }

    /// Like [`Self::declare`], treating each listed pair of index positions
    /// as symmetric so that swapped tuples share one symbol.
    ///
    /// Pairs must name distinct positions below the rank and must not overlap.
    pub fn declare_symmetric(
        pattern: &str,
        dim: usize,
        pairs: &[(usize, usize)],
    ) -> Result<Self, NrxError> {
        let mut seen = [false; R];
        for &(a, b) in pairs {
            if a == b || a >= R || b >= R {
                return Err(NrxError::Config(
                    ErrorInfo::new("symmetry-pair", "symmetry pair must name two distinct index positions")
                        .with_context("tensor", pattern)
                        .with_context("pair", format!("({a}, {b})"))
                        .with_context("rank", R),
                ));
            }
            if seen[a] || seen[b] {
                return Err(NrxError::Config(
                    ErrorInfo::new("symmetry-overlap", "symmetry pairs must be disjoint")
                        .with_context("tensor", pattern)
                        .with_context("pair", format!("({a}, {b})")),
                ));
            }
            seen[a] = true;
            seen[b] = true;
        }
        Ok(Self::from_fn(dim, |mut idx| {
            for &(a, b) in pairs {
                let (lo, hi) = (a.min(b), a.max(b));
                if idx[lo] > idx[hi] {
                    idx.swap(lo, hi);
                }
            }
            Expr::symbol(symbol_name(pattern, &idx, dim))
        }))
    }
}

impl<E: fmt::Debug, const R: usize> fmt::Debug for TensorField<E, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TensorField")
            .field("rank", &R)
            .field("dim", &self.dim)
            .field("entries", &self.entries.len())
            .finish_non_exhaustive()
    }
}

/// Name of the declared symbol at `idx`: the pattern followed by each index.
///
/// Up to dimension 10 every index is one digit and the digits are appended
/// directly (`gammaDD01`); beyond that each index is preceded by `_`
/// (`p_1_10`) so distinct tuples never share a name.
pub fn symbol_name(pattern: &str, idx: &[usize], dim: usize) -> String {
    let mut name = String::with_capacity(pattern.len() + 2 * idx.len());
    name.push_str(pattern);
    for component in idx {
        if dim > 10 {
            name.push('_');
        }
        name.push_str(&component.to_string());
    }
    name
}

/// Every index tuple of rank `R` over `0..dim`, in row-major order.
pub fn index_tuples<const R: usize>(dim: usize) -> impl Iterator<Item = [usize; R]> {
    let total = if R == 0 { 1 } else { dim.pow(R as u32) };
    (0..total).map(move |mut flat| {
        let mut idx = [0usize; R];
        for slot in idx.iter_mut().rev() {
            *slot = flat % dim;
            flat /= dim;
        }
        idx
    })
}
