//! The arithmetic capability tensor code is written against.

use std::fmt::Debug;

use num_rational::Rational64;
use num_traits::{One, Zero};

use crate::symbolic::Expr;

/// Commutative ring with exact rational scaling and structural equality.
///
/// Tensor containers and the curvature assembler are generic over this trait,
/// so the same construction runs on symbolic [`Expr`] values or directly on
/// exact numbers.
pub trait Algebra: Clone + PartialEq + Debug + Send + Sync {
    /// Additive identity.
    fn zero() -> Self;

    /// Multiplicative identity.
    fn one() -> Self;

    /// Embeds a rational constant.
    fn from_rational(value: Rational64) -> Self;

    /// Returns `self + other`.
    fn plus(&self, other: &Self) -> Self;

    /// Returns `self * other`.
    fn times(&self, other: &Self) -> Self;

    /// Returns `factor * self`.
    fn scaled(&self, factor: Rational64) -> Self;

    /// Returns true for the additive identity.
    fn vanishes(&self) -> bool;

    /// Returns `self - other`.
    fn minus(&self, other: &Self) -> Self {
        self.plus(&other.scaled(rational(-1, 1)))
    }

    /// In-place `self += term`.
    fn accumulate(&mut self, term: &Self) {
        *self = self.plus(term);
    }

    /// In-place `self += a * b`.
    fn accumulate_product(&mut self, a: &Self, b: &Self) {
        let product = a.times(b);
        self.accumulate(&product);
    }
}

impl Algebra for Expr {
    fn zero() -> Self {
        Expr::zero()
    }

    fn one() -> Self {
        Expr::one()
    }

    fn from_rational(value: Rational64) -> Self {
        Expr::constant(value)
    }

    fn plus(&self, other: &Self) -> Self {
        self + other
    }

    fn times(&self, other: &Self) -> Self {
        self * other
    }

    fn scaled(&self, factor: Rational64) -> Self {
        self.scale(factor)
    }

    fn vanishes(&self) -> bool {
        self.is_zero()
    }

    fn accumulate(&mut self, term: &Self) {
        *self += term;
    }

    fn accumulate_product(&mut self, a: &Self, b: &Self) {
        self.add_product(a, b);
    }
}

impl Algebra for Rational64 {
    fn zero() -> Self {
        <Rational64 as Zero>::zero()
    }

    fn one() -> Self {
        <Rational64 as One>::one()
    }

    fn from_rational(value: Rational64) -> Self {
        value
    }

    fn plus(&self, other: &Self) -> Self {
        self + other
    }

    fn times(&self, other: &Self) -> Self {
        self * other
    }

    fn scaled(&self, factor: Rational64) -> Self {
        self * factor
    }

    fn vanishes(&self) -> bool {
        Zero::is_zero(self)
    }

    fn accumulate(&mut self, term: &Self) {
        *self += term;
    }
}

/// Shorthand for the rational `numer / denom`.
pub fn rational(numer: i64, denom: i64) -> Rational64 {
    Rational64::new(numer, denom)
}
