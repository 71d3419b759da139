use nrx_core::errors::NrxError;
use nrx_core::{rational, Algebra};
use nrx_tensor::{Rank2, Rank3, Rank4};
use tracing::debug;

use crate::curvature::{rank2_term3, rank3_term2, rank4_term1, riemann};
use crate::inputs::AdmInputs;
use crate::tetrad::NullTetrad;

/// Real and imaginary parts of ψ4.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Psi4<E> {
    /// Real part.
    pub re: E,
    /// Imaginary part.
    pub im: E,
}

/// Every intermediate tensor of an assembly together with its result.
#[derive(Debug, Clone, PartialEq)]
pub struct Psi4Terms<E> {
    /// Spatial Riemann tensor.
    pub riemann: Rank4<E>,
    /// Rank-4 term contracted with four spatial tetrad slots.
    pub rank4_term1: Rank4<E>,
    /// Rank-3 term contracted with one time slot.
    pub rank3_term2: Rank3<E>,
    /// Rank-2 term contracted with two time slots.
    pub rank2_term3: Rank2<E>,
    /// The contracted scalar.
    pub psi4: Psi4<E>,
}

/// Assembles ψ4 from ADM slice data and a null tetrad.
///
/// Fails before doing any work when an input has the wrong dimension.
pub fn assemble<E: Algebra>(
    inputs: &AdmInputs<E>,
    tetrad: &NullTetrad<E>,
) -> Result<Psi4<E>, NrxError> {
    assemble_terms(inputs, tetrad).map(|terms| terms.psi4)
}

/// Like [`assemble`], also returning the intermediate tensors.
pub fn assemble_terms<E: Algebra>(
    inputs: &AdmInputs<E>,
    tetrad: &NullTetrad<E>,
) -> Result<Psi4Terms<E>, NrxError> {
    inputs.validate()?;
    tetrad.validate()?;

    let riemann = riemann(inputs);
    debug!(stage = "riemann", nonzero = nonzero(riemann.values()), "assembled");
    let rank4_term1 = rank4_term1(&riemann, &inputs.extrinsic);
    debug!(stage = "rank4_term1", nonzero = nonzero(rank4_term1.values()), "assembled");
    let rank3_term2 = rank3_term2(inputs);
    debug!(stage = "rank3_term2", nonzero = nonzero(rank3_term2.values()), "assembled");
    let rank2_term3 = rank2_term3(&riemann, inputs);
    debug!(stage = "rank2_term3", nonzero = nonzero(rank2_term3.values()), "assembled");

    let psi4 = contract(&rank4_term1, &rank3_term2, &rank2_term3, tetrad);
    debug!(
        re_vanishes = psi4.re.vanishes(),
        im_vanishes = psi4.im.vanishes(),
        "psi4 contracted"
    );
    Ok(Psi4Terms {
        riemann,
        rank4_term1,
        rank3_term2,
        rank2_term3,
        psi4,
    })
}

/// Contracts the three curvature terms against the tetrad bilinear forms.
///
/// Spatial index `i` is placed in tetrad slot `i + 1`; slot 0 carries the
/// time legs of the rank-3 and rank-2 terms.
pub fn contract<E: Algebra>(
    rank4_term1: &Rank4<E>,
    rank3_term2: &Rank3<E>,
    rank2_term3: &Rank2<E>,
    tetrad: &NullTetrad<E>,
) -> Psi4<E> {
    let mut re = E::zero();
    let mut im = E::zero();

    for ([i, j, k, l], coeff) in rank4_term1.iter() {
        let (fr, fi) = tetrad.products([i + 1, j + 1, k + 1, l + 1]);
        re.accumulate_product(coeff, &fr);
        im.accumulate_product(coeff, &fi);
    }

    let half = rational(1, 2);
    for ([j, k, l], coeff) in rank3_term2.iter() {
        let (ar, ai) = tetrad.products([0, j + 1, k + 1, l + 1]);
        let (br, bi) = tetrad.products([j + 1, 0, k + 1, l + 1]);
        re.accumulate_product(coeff, &ar.minus(&br).scaled(half));
        im.accumulate_product(coeff, &ai.minus(&bi).scaled(half));
    }

    let quarter = rational(1, 4);
    for ([j, l], coeff) in rank2_term3.iter() {
        let (ar, ai) = tetrad.products([0, j + 1, 0, l + 1]);
        let (br, bi) = tetrad.products([j + 1, 0, 0, l + 1]);
        let (cr, ci) = tetrad.products([0, j + 1, l + 1, 0]);
        let (dr, di) = tetrad.products([j + 1, 0, l + 1, 0]);
        let wr = ar.minus(&br).minus(&cr).plus(&dr).scaled(quarter);
        let wi = ai.minus(&bi).minus(&ci).plus(&di).scaled(quarter);
        re.accumulate_product(coeff, &wr);
        im.accumulate_product(coeff, &wi);
    }

    Psi4 { re, im }
}

fn nonzero<'a, E: Algebra + 'a>(values: impl Iterator<Item = &'a E>) -> usize {
    values.filter(|value| !value.vanishes()).count()
}
