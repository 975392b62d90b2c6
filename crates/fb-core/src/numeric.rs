use crate::{FbError, FbResult};

/// Floating point type used throughout the workspace
pub type Real = f64;

/// Absolute/relative tolerance pair for float comparisons
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> FbResult<Real> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(FbError::NonFinite { what, value: v })
    }
}

/// Index and value of the smallest candidate, scanning left to right.
///
/// The running value is replaced only when a later candidate compares
/// strictly less, so ties keep the earliest candidate, a NaN after the first
/// slot is skipped and a NaN in the first slot sticks.
///
/// Returns `None` for an empty slice.
pub fn first_min(candidates: &[Real]) -> Option<(usize, Real)> {
    let (&first, rest) = candidates.split_first()?;
    let mut best = (0, first);
    for (i, &v) in rest.iter().enumerate() {
        if v < best.1 {
            best = (i + 1, v);
        }
    }
    Some(best)
}
