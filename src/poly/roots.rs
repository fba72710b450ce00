use na::{DMatrix, Schur};
use num::{
    complex::{Complex32, Complex64},
    Complex,
};

use crate::{
    aliases::{F, R},
    basis::Basis,
    storage::BasicStorage,
    util::complex::complex_sort_mut,
    BasePoly, Error, FieldScalar, Result,
};

/// Computes the eigenvalues of a square matrix. Root finding delegates to
/// implementors of this trait, any numeric linear algebra backend can be
/// plugged in.
pub trait EigenvalueSolver<T: FieldScalar> {
    /// All eigenvalues of `matrix`, in any order.
    ///
    /// # Errors
    /// [`Error::NoConverge`] if the solver gave up.
    fn eigenvalues(&self, matrix: DMatrix<T>) -> Result<Vec<Complex<T::Real>>>;
}

/// Configuration of [`SchurSolver`]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EigenConfig<T> {
    /// Tolerance used to decide that a subdiagonal entry has vanished.
    pub epsilon: T,

    /// Maximum total number of QR iterations, zero for no limit.
    pub max_iter: usize,
}

impl<T> EigenConfig<T> {
    #[must_use]
    pub fn with_epsilon(mut self, epsilon: T) -> Self {
        self.epsilon = epsilon;
        self
    }

    #[must_use]
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }
}

/// The default eigenvalue solver, based on `nalgebra`'s Schur
/// decomposition.
#[derive(Clone, Copy, Debug)]
pub struct SchurSolver<T> {
    config: EigenConfig<T>,
}

impl<T> SchurSolver<T> {
    #[must_use]
    pub const fn new(config: EigenConfig<T>) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &EigenConfig<T> {
        &self.config
    }
}

macro_rules! impl_schur {
    ($re:ty, $c:ty) => {
        impl Default for EigenConfig<$re> {
            fn default() -> Self {
                Self {
                    epsilon: <$re>::EPSILON,
                    max_iter: 10_000,
                }
            }
        }

        impl Default for SchurSolver<$re> {
            fn default() -> Self {
                Self::new(EigenConfig::default())
            }
        }

        impl EigenvalueSolver<$re> for SchurSolver<$re> {
            fn eigenvalues(&self, matrix: DMatrix<$re>) -> Result<Vec<$c>> {
                let n = matrix.nrows();
                log::trace!("real Schur decomposition of {n}x{n} matrix");
                let (eps, max_iter) = (self.config.epsilon, self.config.max_iter);
                let Some(schur) = Schur::try_new(matrix, eps, max_iter) else {
                    log::debug!("Schur decomposition did not converge");
                    return Err(Error::NoConverge);
                };
                Ok(schur.complex_eigenvalues().iter().copied().collect())
            }
        }

        impl EigenvalueSolver<$c> for SchurSolver<$re> {
            fn eigenvalues(&self, matrix: DMatrix<$c>) -> Result<Vec<$c>> {
                let n = matrix.nrows();
                log::trace!("complex Schur decomposition of {n}x{n} matrix");
                let (eps, max_iter) = (self.config.epsilon, self.config.max_iter);
                let Some(schur) = Schur::try_new(matrix, eps, max_iter) else {
                    log::debug!("Schur decomposition did not converge");
                    return Err(Error::NoConverge);
                };
                // the complex Schur form is upper triangular
                let eigs = schur
                    .eigenvalues()
                    .ok_or_else(|| anyhow::anyhow!("complex Schur form is not triangular"))?;
                Ok(eigs.iter().copied().collect())
            }
        }
    };
}
impl_schur!(f32, Complex32);
impl_schur!(f64, Complex64);

impl<S: BasicStorage, B: Basis> BasePoly<S, B> {
    /// Roots of the polynomial, as the eigenvalues of its companion matrix
    /// computed with the default [`SchurSolver`].
    ///
    /// Roots are sorted by real part, then by imaginary part.
    ///
    /// # Errors
    /// Same as [`Self::roots_with`].
    ///
    /// # Examples
    /// ```
    /// use polybasis::poly;
    ///
    /// let roots = poly![2.0, -3.0, 1.0].roots().unwrap();
    /// assert!(f64::abs(roots[0].re - 1.0) < 1E-12);
    /// assert!(f64::abs(roots[1].re - 2.0) < 1E-12);
    /// ```
    pub fn roots(&self) -> Result<Vec<Complex<R<S>>>>
    where
        SchurSolver<R<S>>: EigenvalueSolver<F<S>> + Default,
    {
        self.roots_with(&SchurSolver::default())
    }

    /// Roots of the polynomial, with a custom eigenvalue solver.
    ///
    /// Constants have no roots.
    ///
    /// # Errors
    /// - [`Error::Argument`] for the zero polynomial, every point is a root.
    /// - [`Error::UnsupportedOperation`] if the polynomial has negative
    ///   indices.
    /// - Any error of the solver.
    pub fn roots_with<E: EigenvalueSolver<F<S>>>(
        &self,
        solver: &E,
    ) -> Result<Vec<Complex<R<S>>>> {
        if self.is_zero() {
            return Err(Error::Argument(
                "every point is a root of the zero polynomial",
            ));
        }
        if self.first_index() >= 0 && self.degree() == 0 {
            return Ok(vec![]);
        }
        let mut roots = solver.eigenvalues(self.companion()?)?;
        complex_sort_mut(&mut roots);
        Ok(roots)
    }
}
