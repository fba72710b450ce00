//! Testing utilities, do not depend on any of these in production!

use fastrand::Rng;
use itertools::{EitherOrBoth, Itertools};

struct RandStreamF64 {
    state: Rng,
}

impl RandStreamF64 {
    fn new(seed: u64) -> Self {
        Self {
            state: Rng::with_seed(seed),
        }
    }
}

impl Iterator for RandStreamF64 {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.state.f64())
    }
}

/// Endless stream of uniformly distributed reals in `[min, max)`.
pub struct RandStreamR64 {
    real_stream: RandStreamF64,
    min: f64,
    max: f64,
}

impl RandStreamR64 {
    #[must_use]
    pub fn new(seed: u64, min: f64, max: f64) -> Self {
        assert!(min <= max, "minimum should be smaller or equal to maximum");
        let real_stream = RandStreamF64::new(seed);
        Self {
            real_stream,
            min,
            max,
        }
    }

    /// Take the next `n` values
    pub fn take_vec(&mut self, n: usize) -> Vec<f64> {
        self.by_ref().take(n).collect()
    }
}

impl Iterator for RandStreamR64 {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        self.real_stream
            .next()
            .map(|x| x * (self.max - self.min) + self.min)
    }
}

/// Chebyshev polynomial `T_k(x)` from the three-term definition, for checking
/// recurrences against.
#[must_use]
pub fn chebyshev_t(k: usize, x: f64) -> f64 {
    let (mut t0, mut t1) = (1.0, x);
    if k == 0 {
        return t0;
    }
    for _ in 1..k {
        (t0, t1) = (t1, 2.0 * x * t1 - t0);
    }
    t1
}

/// Compare two sequences elementwise within an absolute tolerance, treating
/// missing trailing entries as zero.
#[must_use]
pub fn check_close(a: &[f64], b: &[f64], tolerance: f64) -> bool {
    a.iter().zip_longest(b).all(|pair| {
        let (x, y) = match pair {
            EitherOrBoth::Both(x, y) => (*x, *y),
            EitherOrBoth::Left(x) => (*x, 0.0),
            EitherOrBoth::Right(y) => (0.0, *y),
        };
        (x - y).abs() <= tolerance
    })
}
