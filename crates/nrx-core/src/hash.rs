use sha2::{Digest, Sha256};

use crate::symbolic::{Expr, Monomial};

/// Computes the canonical structural hash of an expression.
pub fn canonical_expr_hash(expr: &Expr) -> String {
    let mut hasher = Sha256::new();
    encode_expr(expr, &mut hasher);
    format!("{:x}", hasher.finalize())
}

/// Computes a single canonical hash over an ordered sequence of expressions.
pub fn canonical_hash_all<'a, I>(exprs: I) -> String
where
    I: IntoIterator<Item = &'a Expr>,
{
    let mut hasher = Sha256::new();
    let mut count = 0u64;
    for expr in exprs {
        encode_expr(expr, &mut hasher);
        count += 1;
    }
    hasher.update(count.to_le_bytes());
    format!("{:x}", hasher.finalize())
}

fn encode_expr(expr: &Expr, hasher: &mut Sha256) {
    hasher.update((expr.num_terms() as u64).to_le_bytes());
    for (monomial, coeff) in expr.terms() {
        hasher.update(coeff.numer().to_le_bytes());
        hasher.update(coeff.denom().to_le_bytes());
        encode_monomial(monomial, hasher);
    }
}

fn encode_monomial(monomial: &Monomial, hasher: &mut Sha256) {
    hasher.update((monomial.factors().len() as u64).to_le_bytes());
    for (symbol, power) in monomial.factors() {
        let name = symbol.name().as_bytes();
        hasher.update((name.len() as u64).to_le_bytes());
        hasher.update(name);
        hasher.update(power.to_le_bytes());
    }
}
