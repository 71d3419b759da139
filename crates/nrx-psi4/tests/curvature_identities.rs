use nrx_core::{rational, Expr, Rational64};
use nrx_psi4::{
    christoffel_from_metric, rank2_term3, rank3_term2, rank4_term1, riemann, AdmInputs, Psi4Config,
};
use nrx_tensor::{index_tuples, Rank2, Rank3, Rank4, TensorField};
use proptest::prelude::*;

fn declared() -> AdmInputs<Expr> {
    AdmInputs::declared(&Psi4Config::default()).expect("declared inputs")
}

#[test]
fn riemann_is_antisymmetric_in_both_pairs() {
    let r = riemann(&declared());
    for [i, k, l, m] in index_tuples::<4>(3) {
        let value = r.get([i, k, l, m]);
        assert!((value + r.get([k, i, l, m])).is_zero(), "first pair at {i}{k}{l}{m}");
        assert!((value + r.get([i, k, m, l])).is_zero(), "last pair at {i}{k}{l}{m}");
    }
}

#[test]
fn riemann_diagonal_pairs_vanish() {
    let r = riemann(&declared());
    for [i, l, m] in index_tuples::<3>(3) {
        assert!(r.get([i, i, l, m]).is_zero());
        assert!(r.get([l, m, i, i]).is_zero());
    }
}

#[test]
fn rank3_term2_picks_up_curl_of_extrinsic_curvature() {
    let mut inputs = AdmInputs::<Rational64>::flat();
    inputs.extrinsic_d.set([0, 1, 2], rational(1, 1));
    let term = rank3_term2(&inputs);
    assert_eq!(term.get([0, 1, 2]), &rational(-4, 1));
    assert_eq!(term.get([0, 2, 1]), &rational(4, 1));
    assert_eq!(term.get([1, 0, 2]), &rational(0, 1));
}

#[test]
fn rank2_term3_for_isotropic_extrinsic_curvature() {
    let mut inputs = AdmInputs::<Rational64>::flat();
    for i in 0..3 {
        inputs.extrinsic.set([i, i], rational(1, 1));
    }
    let r = riemann(&inputs);
    assert!(r.is_zero());
    let term = rank2_term3(&r, &inputs);
    for [j, l] in index_tuples::<2>(3) {
        let expected = if j == l { rational(8, 1) } else { rational(0, 1) };
        assert_eq!(term.get([j, l]), &expected, "entry {j}{l}");
    }
}

#[test]
fn rank4_term1_adds_gauss_codazzi_products() {
    let mut inputs = AdmInputs::<Rational64>::flat();
    inputs.extrinsic.set([0, 0], rational(2, 1));
    inputs.extrinsic.set([1, 1], rational(3, 1));
    let r = riemann(&inputs);
    let term = rank4_term1(&r, &inputs.extrinsic);
    // K_00 K_11 - K_01 K_10
    assert_eq!(term.get([0, 1, 0, 1]), &rational(6, 1));
    assert_eq!(term.get([0, 1, 1, 0]), &rational(-6, 1));
    assert_eq!(term.get([0, 0, 1, 1]), &rational(0, 1));
}

#[test]
fn christoffel_from_single_derivative() {
    let inverse: Rank2<Rational64> = Rank2::from_fn(3, |[i, j]| rational((i == j) as i64, 1));
    let mut metric_d: Rank3<Rational64> = TensorField::zero(3);
    metric_d.set([0, 0, 0], rational(2, 1));
    let gamma = christoffel_from_metric(&inverse, &metric_d).unwrap();
    for ([i, k, l], value) in gamma.iter() {
        let expected = if [i, k, l] == [0, 0, 0] { rational(1, 1) } else { rational(0, 1) };
        assert_eq!(value, &expected);
    }
}

#[test]
fn christoffel_rejects_wrong_dimension() {
    let inverse: Rank2<Rational64> = TensorField::zero(4);
    let metric_d: Rank3<Rational64> = TensorField::zero(3);
    let err = christoffel_from_metric(&inverse, &metric_d).unwrap_err();
    assert_eq!(err.info().context["tensor"], "metric_inverse");
}

fn small_rational() -> impl Strategy<Value = Rational64> {
    (-4i64..=4, 1i64..=3).prop_map(|(n, d)| rational(n, d))
}

fn numeric_inputs() -> impl Strategy<Value = AdmInputs<Rational64>> {
    (
        prop::collection::vec(small_rational(), 6),
        prop::collection::vec(small_rational(), 81),
        prop::collection::vec(small_rational(), 27),
    )
        .prop_map(|(inverse, second, christoffel)| {
            let mut inputs = AdmInputs::<Rational64>::flat();
            let upper = [[0, 1, 2], [1, 3, 4], [2, 4, 5]];
            inputs.metric_inverse = Rank2::from_fn(3, |[i, j]| inverse[upper[i][j]]);
            let mut second = second.into_iter();
            inputs.metric_dd = Rank4::from_fn(3, |_| second.next().unwrap_or_else(|| rational(0, 1)));
            let mut christoffel = christoffel.into_iter();
            inputs.christoffel = Rank3::from_fn(3, |_| christoffel.next().unwrap_or_else(|| rational(0, 1)));
            inputs
        })
}

proptest! {
    #[test]
    fn numeric_riemann_is_antisymmetric(inputs in numeric_inputs()) {
        let r = riemann(&inputs);
        for [i, k, l, m] in index_tuples::<4>(3) {
            prop_assert_eq!(*r.get([i, k, l, m]), -*r.get([k, i, l, m]));
            prop_assert_eq!(*r.get([i, k, l, m]), -*r.get([i, k, m, l]));
        }
    }
}
