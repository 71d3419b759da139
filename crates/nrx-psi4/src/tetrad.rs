use nrx_core::errors::NrxError;
use nrx_core::{rational, Algebra, Expr};
use nrx_tensor::{Rank1, TensorField, SPACETIME_DIM};

use crate::config::TetradNames;

/// Null tetrad legs used to project the curvature: the outgoing vector `n`
/// and the real and imaginary parts of the complex vector `m`.
///
/// Slot 0 is the time direction; spatial index `i` lives in slot `i + 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct NullTetrad<E> {
    /// Outgoing real null vector.
    pub n: Rank1<E>,
    /// Real part of `m`.
    pub m_re: Rank1<E>,
    /// Imaginary part of `m`.
    pub m_im: Rank1<E>,
}

impl NullTetrad<Expr> {
    /// Tetrad whose components are opaque symbols such as `n4U0`.
    pub fn declared(names: &TetradNames) -> Self {
        Self {
            n: TensorField::declare(&names.n, SPACETIME_DIM),
            m_re: TensorField::declare(&names.m_re, SPACETIME_DIM),
            m_im: TensorField::declare(&names.m_im, SPACETIME_DIM),
        }
    }
}

impl<E: Algebra> NullTetrad<E> {
    /// Checks that every leg has four components.
    pub fn validate(&self) -> Result<(), NrxError> {
        self.n.expect_dim("n", SPACETIME_DIM)?;
        self.m_re.expect_dim("m_re", SPACETIME_DIM)?;
        self.m_im.expect_dim("m_im", SPACETIME_DIM)?;
        Ok(())
    }

    /// Real part of `n^μ m^ν n^η m^δ`:
    /// `n_μ mre_ν n_η mre_δ − n_μ mim_ν n_η mim_δ`.
    pub fn real_product(&self, [mu, nu, eta, delta]: [usize; 4]) -> E {
        let nn = self.n.get([mu]).times(self.n.get([eta]));
        let re_re = self.m_re.get([nu]).times(self.m_re.get([delta]));
        let im_im = self.m_im.get([nu]).times(self.m_im.get([delta]));
        nn.times(&re_re.minus(&im_im))
    }

    /// Imaginary part of `n^μ m^ν n^η m^δ`:
    /// `−n_μ mre_ν n_η mim_δ − n_μ mim_ν n_η mre_δ`.
    pub fn imag_product(&self, [mu, nu, eta, delta]: [usize; 4]) -> E {
        let nn = self.n.get([mu]).times(self.n.get([eta]));
        let re_im = self.m_re.get([nu]).times(self.m_im.get([delta]));
        let im_re = self.m_im.get([nu]).times(self.m_re.get([delta]));
        nn.times(&re_im.plus(&im_re)).scaled(rational(-1, 1))
    }

    /// Both parts at once, `(real, imag)`.
    pub fn products(&self, slots: [usize; 4]) -> (E, E) {
        (self.real_product(slots), self.imag_product(slots))
    }
}
