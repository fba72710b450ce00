//! Marker types for the functional basis a polynomial's coefficients are
//! expressed in.

mod sealed {
    pub trait Sealed {}
}

/// Runtime discriminant of a [`Basis`], used to select the recurrence of
/// every algorithm.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BasisKind {
    /// Monomials `x^k`
    Standard,
    /// Chebyshev polynomials of the first kind `T_k(x)`
    ChebyshevT,
}

impl BasisKind {
    /// Whether arguments must lie in `[-1, 1]` for checked evaluation.
    #[must_use]
    pub const fn has_bounded_domain(self) -> bool {
        matches!(self, Self::ChebyshevT)
    }
}

/// A basis of univariate polynomials. This is a closed set, it cannot be
/// implemented outside of this crate.
pub trait Basis: sealed::Sealed + 'static {
    const KIND: BasisKind;

    /// Human readable name, used in error messages.
    const NAME: &'static str;
}

/// The monomial basis `1, x, x^2, ...`
#[derive(Debug)]
pub enum Standard {}

/// Chebyshev polynomials of the first kind `T_0, T_1, T_2, ...`
#[derive(Debug)]
pub enum ChebyshevT {}

impl sealed::Sealed for Standard {}

impl sealed::Sealed for ChebyshevT {}

impl Basis for Standard {
    const KIND: BasisKind = BasisKind::Standard;
    const NAME: &'static str = "standard";
}

impl Basis for ChebyshevT {
    const KIND: BasisKind = BasisKind::ChebyshevT;
    const NAME: &'static str = "Chebyshev";
}
