//! Structured form of the clamp.

use crate::clamp::{clamp_candidates, effective_force};
use fb_core::Real;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The four inputs of a force clamp, in newtons and as a bare ratio.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForceBudget {
    /// Force the caller wants to apply (N).
    pub desired_force: Real,
    /// Maximum force the target tolerates without damage (N).
    pub safe_limit: Real,
    /// Maximum force the actuator hardware produces (N).
    pub actuator_force: Real,
    /// Multiplicative loss factor applied to `actuator_force`.
    pub efficiency: Real,
}

impl ForceBudget {
    pub fn new(
        desired_force: Real,
        safe_limit: Real,
        actuator_force: Real,
        efficiency: Real,
    ) -> Self {
        Self {
            desired_force,
            safe_limit,
            actuator_force,
            efficiency,
        }
    }

    /// Holding a cookie: 2 N wanted, it breaks above 3 N, the motor pushes
    /// 5 N and friction/cloth losses leave 80% of that.
    pub fn cookie_demo() -> Self {
        Self::new(2.0, 3.0, 5.0, 0.8)
    }

    pub fn effective_force(&self) -> Real {
        effective_force(self.actuator_force, self.efficiency)
    }

    /// Clamped output force (N).
    pub fn apply(&self) -> Real {
        self.breakdown().output
    }

    /// Output force together with the intermediate effective force and the
    /// limit that produced it.
    pub fn breakdown(&self) -> ForceBreakdown {
        let effective_force = self.effective_force();
        let (slot, output) = clamp_candidates(self.desired_force, self.safe_limit, effective_force);
        let binding = BindingLimit::from_slot(slot);
        tracing::trace!(
            desired = self.desired_force,
            safe_limit = self.safe_limit,
            effective = effective_force,
            output,
            %binding,
            "force clamped"
        );
        ForceBreakdown {
            effective_force,
            output,
            binding,
        }
    }
}

impl Default for ForceBudget {
    fn default() -> Self {
        Self::cookie_demo()
    }
}

/// Which candidate the clamp returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BindingLimit {
    /// The request itself was within every limit.
    Desired,
    /// The target's safe limit.
    SafeLimit,
    /// The efficiency-scaled actuator force.
    Actuator,
}

impl BindingLimit {
    fn from_slot(slot: usize) -> Self {
        match slot {
            0 => Self::Desired,
            1 => Self::SafeLimit,
            _ => Self::Actuator,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Desired => "desired force",
            Self::SafeLimit => "safe limit",
            Self::Actuator => "actuator",
        }
    }
}

impl fmt::Display for BindingLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of clamping a [`ForceBudget`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForceBreakdown {
    /// `efficiency * actuator_force` (N).
    pub effective_force: Real,
    /// Final output force (N).
    pub output: Real,
    pub binding: BindingLimit,
}
