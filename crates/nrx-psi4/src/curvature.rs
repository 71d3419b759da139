//! Spatial curvature tensors feeding the ψ4 contraction.
//!
//! Every function here works on dimension-3 tensors and expects inputs that
//! already passed [`AdmInputs::validate`].

use nrx_core::{rational, Algebra};
use nrx_tensor::{Rank2, Rank3, Rank4, SPATIAL_DIM};

use crate::inputs::AdmInputs;

const D: usize = SPATIAL_DIM;

/// Riemann tensor of the spatial metric:
/// `R_iklm = ½(γ_im,kl + γ_kl,im − γ_il,km − γ_km,il)
///         + γ^np (Γ^n_kl Γ^p_im − Γ^n_km Γ^p_il)`.
pub fn riemann<E: Algebra>(inputs: &AdmInputs<E>) -> Rank4<E> {
    let g_dd = &inputs.metric_dd;
    let g_uu = &inputs.metric_inverse;
    let gamma = &inputs.christoffel;
    Rank4::from_fn(D, |[i, k, l, m]| {
        let mut value = g_dd
            .get([i, m, k, l])
            .plus(g_dd.get([k, l, i, m]))
            .minus(g_dd.get([i, l, k, m]))
            .minus(g_dd.get([k, m, i, l]))
            .scaled(rational(1, 2));
        for n in 0..D {
            for p in 0..D {
                let cross = gamma
                    .get([n, k, l])
                    .times(gamma.get([p, i, m]))
                    .minus(&gamma.get([n, k, m]).times(gamma.get([p, i, l])));
                value.accumulate_product(g_uu.get([n, p]), &cross);
            }
        }
        value
    })
}

/// `R_ijkl + K_ik K_lj − K_il K_kj`.
pub fn rank4_term1<E: Algebra>(riemann: &Rank4<E>, extrinsic: &Rank2<E>) -> Rank4<E> {
    Rank4::from_fn(D, |[i, j, k, l]| {
        let mut value = riemann.get([i, j, k, l]).clone();
        value.accumulate_product(extrinsic.get([i, k]), extrinsic.get([l, j]));
        value.minus(&extrinsic.get([i, l]).times(extrinsic.get([k, j])))
    })
}

/// `−8 (K_j[k,l] + Γ^p_j[k K_l]p)`, with the antisymmetrization brackets
/// carrying their factor of ½.
pub fn rank3_term2<E: Algebra>(inputs: &AdmInputs<E>) -> Rank3<E> {
    let k_dd = &inputs.extrinsic;
    let k_dd_d = &inputs.extrinsic_d;
    let gamma = &inputs.christoffel;
    let half = rational(1, 2);
    let mut term = Rank3::from_fn(D, |[j, k, l]| {
        let mut value = k_dd_d.get([j, k, l]).minus(k_dd_d.get([j, l, k])).scaled(half);
        for p in 0..D {
            let connection = gamma
                .get([p, j, k])
                .times(k_dd.get([l, p]))
                .minus(&gamma.get([p, j, l]).times(k_dd.get([k, p])));
            value.accumulate(&connection.scaled(half));
        }
        value
    });
    term.scale_in_place(rational(-8, 1));
    term
}

/// `4 (γ^im R_ijml − K_jp γ^pm K_ml + K K_jl)` where `K = γ^im K_im`.
pub fn rank2_term3<E: Algebra>(
    riemann: &Rank4<E>,
    inputs: &AdmInputs<E>,
) -> Rank2<E> {
    let g_uu = &inputs.metric_inverse;
    let k_dd = &inputs.extrinsic;

    let mut trace_k = E::zero();
    for i in 0..D {
        for m in 0..D {
            trace_k.accumulate_product(g_uu.get([i, m]), k_dd.get([i, m]));
        }
    }

    let mut term = Rank2::from_fn(D, |[j, l]| {
        let mut value = E::zero();
        for i in 0..D {
            for m in 0..D {
                value.accumulate_product(g_uu.get([i, m]), riemann.get([i, j, m, l]));
            }
        }
        for m in 0..D {
            for p in 0..D {
                let raised = k_dd.get([j, p]).times(g_uu.get([p, m]));
                value = value.minus(&raised.times(k_dd.get([m, l])));
            }
        }
        value.accumulate_product(&trace_k, k_dd.get([j, l]));
        value
    });
    term.scale_in_place(rational(4, 1));
    term
}
