use nrx_core::errors::NrxError;
use nrx_core::{canonical_hash_all, rational, Algebra, Expr};
use nrx_tensor::{Rank2, Rank3, Rank4, TensorField, SPATIAL_DIM};

use crate::config::{ChristoffelSource, Psi4Config};

/// ADM slice data consumed by the assembler, all of spatial dimension.
///
/// Derivative indices always come last: `metric_d[i][j][k]` is ∂_k γ_ij and
/// `metric_dd[i][j][k][l]` is ∂_k ∂_l γ_ij. Christoffel symbols carry the
/// upper index first.
#[derive(Debug, Clone, PartialEq)]
pub struct AdmInputs<E> {
    /// Spatial metric γ_ij.
    pub metric: Rank2<E>,
    /// Inverse spatial metric γ^ij.
    pub metric_inverse: Rank2<E>,
    /// First derivatives γ_ij,k.
    pub metric_d: Rank3<E>,
    /// Second derivatives γ_ij,kl.
    pub metric_dd: Rank4<E>,
    /// Christoffel symbols Γ^i_jk.
    pub christoffel: Rank3<E>,
    /// Extrinsic curvature K_ij.
    pub extrinsic: Rank2<E>,
    /// First derivatives K_ij,k.
    pub extrinsic_d: Rank3<E>,
}

impl<E: Algebra> AdmInputs<E> {
    /// Checks that every tensor has the spatial dimension.
    pub fn validate(&self) -> Result<(), NrxError> {
        self.metric.expect_dim("metric", SPATIAL_DIM)?;
        self.metric_inverse.expect_dim("metric_inverse", SPATIAL_DIM)?;
        self.metric_d.expect_dim("metric_d", SPATIAL_DIM)?;
        self.metric_dd.expect_dim("metric_dd", SPATIAL_DIM)?;
        self.christoffel.expect_dim("christoffel", SPATIAL_DIM)?;
        self.extrinsic.expect_dim("extrinsic", SPATIAL_DIM)?;
        self.extrinsic_d.expect_dim("extrinsic_d", SPATIAL_DIM)?;
        Ok(())
    }

    /// Flat slice: identity metric and inverse, every derivative, Christoffel
    /// symbol and extrinsic curvature component zero.
    pub fn flat() -> Self {
        Self {
            metric: identity(),
            metric_inverse: identity(),
            metric_d: TensorField::zero(SPATIAL_DIM),
            metric_dd: TensorField::zero(SPATIAL_DIM),
            christoffel: TensorField::zero(SPATIAL_DIM),
            extrinsic: TensorField::zero(SPATIAL_DIM),
            extrinsic_d: TensorField::zero(SPATIAL_DIM),
        }
    }
}

impl AdmInputs<Expr> {
    /// Declares every input as opaque symbols carrying the physical index
    /// symmetries: γ, γ⁻¹ and K symmetric; first derivatives symmetric in the
    /// undifferentiated pair; second derivatives symmetric in both pairs;
    /// Christoffels symmetric in the lower pair.
    pub fn declared(config: &Psi4Config) -> Result<Self, NrxError> {
        let names = &config.inputs;
        let metric_inverse =
            TensorField::declare_symmetric(&names.metric_inverse, SPATIAL_DIM, &[(0, 1)])?;
        let metric_d = TensorField::declare_symmetric(&names.metric_d, SPATIAL_DIM, &[(0, 1)])?;
        let christoffel = match config.christoffel {
            ChristoffelSource::Declared => {
                TensorField::declare_symmetric(&names.christoffel, SPATIAL_DIM, &[(1, 2)])?
            }
            ChristoffelSource::FromMetric => christoffel_from_metric(&metric_inverse, &metric_d)?,
        };
        Ok(Self {
            metric: TensorField::declare_symmetric(&names.metric, SPATIAL_DIM, &[(0, 1)])?,
            metric_inverse,
            metric_d,
            metric_dd: TensorField::declare_symmetric(
                &names.metric_dd,
                SPATIAL_DIM,
                &[(0, 1), (2, 3)],
            )?,
            christoffel,
            extrinsic: TensorField::declare_symmetric(&names.extrinsic, SPATIAL_DIM, &[(0, 1)])?,
            extrinsic_d: TensorField::declare_symmetric(
                &names.extrinsic_d,
                SPATIAL_DIM,
                &[(0, 1)],
            )?,
        })
    }

    /// Canonical hash over every entry of every input, in field order.
    pub fn canonical_hash(&self) -> String {
        canonical_hash_all(
            self.metric
                .values()
                .chain(self.metric_inverse.values())
                .chain(self.metric_d.values())
                .chain(self.metric_dd.values())
                .chain(self.christoffel.values())
                .chain(self.extrinsic.values())
                .chain(self.extrinsic_d.values()),
        )
    }
}

fn identity<E: Algebra>() -> Rank2<E> {
    Rank2::from_fn(SPATIAL_DIM, |[i, j]| if i == j { E::one() } else { E::zero() })
}

/// Christoffel symbols of the second kind from the metric data:
/// `Γ^i_kl = ½ Σ_m γ^im (γ_mk,l + γ_ml,k − γ_kl,m)`.
pub fn christoffel_from_metric<E: Algebra>(
    metric_inverse: &Rank2<E>,
    metric_d: &Rank3<E>,
) -> Result<Rank3<E>, NrxError> {
    metric_inverse.expect_dim("metric_inverse", SPATIAL_DIM)?;
    metric_d.expect_dim("metric_d", SPATIAL_DIM)?;
    let half = rational(1, 2);
    Ok(Rank3::from_fn(SPATIAL_DIM, |[i, k, l]| {
        let mut value = E::zero();
        for m in 0..SPATIAL_DIM {
            let lowered = metric_d
                .get([m, k, l])
                .plus(metric_d.get([m, l, k]))
                .minus(metric_d.get([k, l, m]));
            value.accumulate_product(metric_inverse.get([i, m]), &lowered);
        }
        value.scaled(half)
    }))
}
