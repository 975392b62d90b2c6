//! The force clamp.
//!
//! No input is validated here. Negative forces, efficiencies outside `[0, 1]`
//! and non-finite values all flow through the arithmetic unchanged.

use fb_core::{Force, Ratio, Real, first_min, n, to_newtons, to_unitless};

/// Actuator force remaining after losses: `efficiency * actuator_force`.
#[inline]
pub fn effective_force(actuator_force: Real, efficiency: Real) -> Real {
    efficiency * actuator_force
}

/// Clamp a desired force by a safety limit and by the loss-adjusted actuator
/// capability.
///
/// Returns `min(desired_force, safe_limit, efficiency * actuator_force)`.
///
/// The minimum scans left to right and only moves on a strictly smaller
/// candidate: ties resolve to the earlier argument, a NaN `safe_limit` or
/// effective force is skipped, and a NaN `desired_force` is returned as is.
///
/// # Example
///
/// ```
/// use fb_budget::apply_force;
///
/// // safety limit binds
/// assert_eq!(apply_force(10.0, 3.0, 5.0, 0.8), 3.0);
/// // efficiency-scaled actuator binds
/// assert_eq!(apply_force(10.0, 10.0, 5.0, 0.5), 2.5);
/// ```
pub fn apply_force(
    desired_force: Real,
    safe_limit: Real,
    actuator_force: Real,
    efficiency: Real,
) -> Real {
    let effective = effective_force(actuator_force, efficiency);
    clamp_candidates(desired_force, safe_limit, effective).1
}

/// [`apply_force`] over SI quantities. Computed in newtons.
pub fn apply_force_si(
    desired_force: Force,
    safe_limit: Force,
    actuator_force: Force,
    efficiency: Ratio,
) -> Force {
    n(apply_force(
        to_newtons(desired_force),
        to_newtons(safe_limit),
        to_newtons(actuator_force),
        to_unitless(efficiency),
    ))
}

/// Slot index (0 = desired, 1 = safe limit, 2 = effective) and value of the
/// winning candidate.
pub(crate) fn clamp_candidates(desired: Real, safe_limit: Real, effective: Real) -> (usize, Real) {
    // three slots, never empty
    first_min(&[desired, safe_limit, effective]).unwrap_or((0, desired))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use fb_core::{Tolerances, nearly_equal};
    use proptest::prelude::*;

    const F: core::ops::Range<f64> = -1e6..1e6;

    proptest! {
        #[test]
        fn equals_three_way_min(a in F, b in F, c in F, e in -2.0_f64..2.0) {
            let expected = a.min(b).min(e * c);
            prop_assert_eq!(apply_force(a, b, c, e), expected);
        }

        #[test]
        fn never_exceeds_any_candidate(a in F, b in F, c in F, e in 0.0_f64..1.0) {
            let out = apply_force(a, b, c, e);
            prop_assert!(out <= a);
            prop_assert!(out <= b);
            prop_assert!(out <= e * c);
        }

        #[test]
        fn non_decreasing_in_desired(
            a in F,
            da in 0.0_f64..1e6,
            b in F,
            c in F,
            e in 0.0_f64..1.0,
        ) {
            prop_assert!(apply_force(a, b, c, e) <= apply_force(a + da, b, c, e));
        }

        #[test]
        fn zero_efficiency(a in F, b in F, c in F) {
            prop_assert_eq!(apply_force(a, b, c, 0.0), a.min(b).min(0.0));
        }

        #[test]
        fn repeated_calls_agree(a in F, b in F, c in F, e in F) {
            prop_assert_eq!(apply_force(a, b, c, e), apply_force(a, b, c, e));
        }

        #[test]
        fn si_matches_bare(a in F, b in F, c in F, e in 0.0_f64..1.0) {
            let typed = to_newtons(apply_force_si(n(a), n(b), n(c), fb_core::unitless(e)));
            let bare = apply_force(a, b, c, e);
            prop_assert!(nearly_equal(typed, bare, Tolerances::default()));
        }
    }
}
