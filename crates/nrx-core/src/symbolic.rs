//! Canonical sparse polynomials over exact rationals.
//!
//! An [`Expr`] is a finite sum of `coefficient * monomial` terms. Terms are
//! stored in a `BTreeMap` keyed by [`Monomial`], zero coefficients are never
//! stored, and like terms are merged on insertion. Two expressions are
//! therefore structurally equal exactly when they are equal as polynomials.

use std::cmp::Ordering;
use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};
use std::sync::Arc;

use num_rational::Rational64;
use num_traits::{One, Signed, Zero};

use crate::errors::{ErrorInfo, NrxError};

/// Opaque symbolic atom identified by its name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(Arc<str>);

impl Symbol {
    /// Creates a symbol with the given name.
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(Arc::from(name.as_ref()))
    }

    /// Returns the symbol name.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Product of symbols raised to positive integer powers, sorted by symbol.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Monomial {
    factors: Vec<(Symbol, u32)>,
}

impl Monomial {
    /// The empty product.
    pub fn unit() -> Self {
        Self::default()
    }

    /// A single symbol to the first power.
    pub fn of(symbol: Symbol) -> Self {
        Self {
            factors: vec![(symbol, 1)],
        }
    }

    /// Returns the `(symbol, power)` factors in canonical order.
    pub fn factors(&self) -> &[(Symbol, u32)] {
        &self.factors
    }

    /// Returns true for the empty product.
    pub fn is_unit(&self) -> bool {
        self.factors.is_empty()
    }

    /// Total degree of the monomial.
    pub fn degree(&self) -> u32 {
        self.factors.iter().map(|(_, power)| power).sum()
    }

    /// Multiplies two monomials by merging their sorted factor lists.
    pub fn product(&self, other: &Monomial) -> Monomial {
        let (lhs, rhs) = (&self.factors, &other.factors);
        let mut factors = Vec::with_capacity(lhs.len() + rhs.len());
        let (mut i, mut j) = (0, 0);
        while i < lhs.len() && j < rhs.len() {
            match lhs[i].0.cmp(&rhs[j].0) {
                Ordering::Less => {
                    factors.push(lhs[i].clone());
                    i += 1;
                }
                Ordering::Greater => {
                    factors.push(rhs[j].clone());
                    j += 1;
                }
                Ordering::Equal => {
                    factors.push((lhs[i].0.clone(), lhs[i].1 + rhs[j].1));
                    i += 1;
                    j += 1;
                }
            }
        }
        factors.extend_from_slice(&lhs[i..]);
        factors.extend_from_slice(&rhs[j..]);
        Monomial { factors }
    }
}

impl fmt::Display for Monomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.factors.is_empty() {
            return f.write_str("1");
        }
        for (idx, (symbol, power)) in self.factors.iter().enumerate() {
            if idx > 0 {
                f.write_str("*")?;
            }
            if *power == 1 {
                write!(f, "{symbol}")?;
            } else {
                write!(f, "pow({symbol}, {power})")?;
            }
        }
        Ok(())
    }
}

/// Symbolic expression kept in canonical polynomial form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Expr {
    terms: BTreeMap<Monomial, Rational64>,
}

impl Expr {
    /// The empty sum.
    pub fn zero() -> Self {
        Self::default()
    }

    /// The constant one.
    pub fn one() -> Self {
        Self::constant(Rational64::one())
    }

    /// A constant rational value.
    pub fn constant(value: Rational64) -> Self {
        let mut expr = Self::zero();
        expr.add_term(Monomial::unit(), value);
        expr
    }

    /// A constant integer value.
    pub fn integer(value: i64) -> Self {
        Self::constant(Rational64::from_integer(value))
    }

    /// A single named symbol.
    pub fn symbol(name: impl AsRef<str>) -> Self {
        Self::from(Symbol::new(name))
    }

    /// Returns true when the expression has no terms.
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Number of stored terms.
    pub fn num_terms(&self) -> usize {
        self.terms.len()
    }

    /// Highest total degree over all terms; zero for constants and the empty sum.
    pub fn degree(&self) -> u32 {
        self.terms.keys().map(Monomial::degree).max().unwrap_or(0)
    }

    /// Iterates the terms in canonical order.
    pub fn terms(&self) -> impl Iterator<Item = (&Monomial, &Rational64)> {
        self.terms.iter()
    }

    /// Every symbol appearing in the expression.
    pub fn symbols(&self) -> BTreeSet<Symbol> {
        self.terms
            .keys()
            .flat_map(|monomial| monomial.factors().iter().map(|(symbol, _)| symbol.clone()))
            .collect()
    }

    /// Returns the expression multiplied by a rational factor.
    pub fn scale(&self, factor: Rational64) -> Expr {
        if factor.is_zero() {
            return Expr::zero();
        }
        let terms = self
            .terms
            .iter()
            .map(|(monomial, coeff)| (monomial.clone(), coeff * factor))
            .collect();
        Expr { terms }
    }

    /// Adds `a * b` into `self` without materializing the product.
    pub fn add_product(&mut self, a: &Expr, b: &Expr) {
        for (ma, ca) in &a.terms {
            for (mb, cb) in &b.terms {
                self.add_term(ma.product(mb), ca * cb);
            }
        }
    }

    /// Evaluates the expression with every symbol bound to a rational value.
    pub fn evaluate(&self, bindings: &BTreeMap<Symbol, Rational64>) -> Result<Rational64, NrxError> {
        let mut total = Rational64::zero();
        for (monomial, coeff) in &self.terms {
            let mut value = *coeff;
            for (symbol, power) in monomial.factors() {
                let bound = bindings.get(symbol).ok_or_else(|| {
                    NrxError::Eval(
                        ErrorInfo::new("unbound-symbol", "expression references an unbound symbol")
                            .with_context("symbol", symbol.name()),
                    )
                })?;
                for _ in 0..*power {
                    value *= *bound;
                }
            }
            total += value;
        }
        Ok(total)
    }

    fn add_term(&mut self, monomial: Monomial, coeff: Rational64) {
        if coeff.is_zero() {
            return;
        }
        match self.terms.entry(monomial) {
            Entry::Vacant(slot) => {
                slot.insert(coeff);
            }
            Entry::Occupied(mut slot) => {
                let sum = *slot.get() + coeff;
                if sum.is_zero() {
                    slot.remove();
                } else {
                    *slot.get_mut() = sum;
                }
            }
        }
    }
}

impl From<Symbol> for Expr {
    fn from(symbol: Symbol) -> Self {
        let mut expr = Expr::zero();
        expr.add_term(Monomial::of(symbol), Rational64::one());
        expr
    }
}

impl From<Rational64> for Expr {
    fn from(value: Rational64) -> Self {
        Expr::constant(value)
    }
}

impl From<i64> for Expr {
    fn from(value: i64) -> Self {
        Expr::integer(value)
    }
}

impl AddAssign<&Expr> for Expr {
    fn add_assign(&mut self, rhs: &Expr) {
        for (monomial, coeff) in &rhs.terms {
            self.add_term(monomial.clone(), *coeff);
        }
    }
}

impl AddAssign<Expr> for Expr {
    fn add_assign(&mut self, rhs: Expr) {
        if self.terms.is_empty() {
            *self = rhs;
            return;
        }
        for (monomial, coeff) in rhs.terms {
            self.add_term(monomial, coeff);
        }
    }
}

impl SubAssign<&Expr> for Expr {
    fn sub_assign(&mut self, rhs: &Expr) {
        for (monomial, coeff) in &rhs.terms {
            self.add_term(monomial.clone(), -*coeff);
        }
    }
}

impl Add<&Expr> for &Expr {
    type Output = Expr;

    fn add(self, rhs: &Expr) -> Expr {
        let mut out = self.clone();
        out += rhs;
        out
    }
}

impl Add for Expr {
    type Output = Expr;

    fn add(mut self, rhs: Expr) -> Expr {
        self += rhs;
        self
    }
}

impl Sub<&Expr> for &Expr {
    type Output = Expr;

    fn sub(self, rhs: &Expr) -> Expr {
        let mut out = self.clone();
        out -= rhs;
        out
    }
}

impl Sub for Expr {
    type Output = Expr;

    fn sub(mut self, rhs: Expr) -> Expr {
        self -= &rhs;
        self
    }
}

impl Mul<&Expr> for &Expr {
    type Output = Expr;

    fn mul(self, rhs: &Expr) -> Expr {
        let mut out = Expr::zero();
        out.add_product(self, rhs);
        out
    }
}

impl Mul for Expr {
    type Output = Expr;

    fn mul(self, rhs: Expr) -> Expr {
        &self * &rhs
    }
}

impl Neg for &Expr {
    type Output = Expr;

    fn neg(self) -> Expr {
        self.scale(-Rational64::one())
    }
}

impl Neg for Expr {
    type Output = Expr;

    fn neg(self) -> Expr {
        -&self
    }
}

fn write_rational(f: &mut fmt::Formatter<'_>, value: &Rational64) -> fmt::Result {
    if value.is_integer() {
        write!(f, "{}", value.numer())
    } else {
        write!(f, "{}/{}", value.numer(), value.denom())
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return f.write_str("0");
        }
        for (idx, (monomial, coeff)) in self.terms.iter().enumerate() {
            let magnitude = coeff.abs();
            match (idx, coeff.is_negative()) {
                (0, true) => f.write_str("-")?,
                (0, false) => {}
                (_, true) => f.write_str(" - ")?,
                (_, false) => f.write_str(" + ")?,
            }
            if monomial.is_unit() {
                write_rational(f, &magnitude)?;
            } else if magnitude.is_one() {
                write!(f, "{monomial}")?;
            } else {
                write_rational(f, &magnitude)?;
                write!(f, "*{monomial}")?;
            }
        }
        Ok(())
    }
}
