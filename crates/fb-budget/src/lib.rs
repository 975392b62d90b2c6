//! Force budgeting for grippers and other force-limited actuators.
//!
//! The core of this crate is a single pure clamp: the force actually applied
//! is the smallest of what the caller asks for, what the target can tolerate,
//! and what the actuator can deliver after losses.
//!
//! ```
//! use fb_budget::apply_force;
//!
//! // 2 N wanted, object breaks above 3 N, motor pushes 5 N at 80% efficiency
//! let force = apply_force(2.0, 3.0, 5.0, 0.8);
//! assert_eq!(force, 2.0);
//! ```
//!
//! # Layers
//!
//! - [`clamp`]: the bare `f64` function and its typed (`uom`) twin
//! - [`budget`]: a serializable bundle of the four inputs plus a breakdown
//!   naming which limit was binding
//! - [`report`]: console formatting of results

pub mod budget;
pub mod clamp;
pub mod report;

pub use budget::{BindingLimit, ForceBreakdown, ForceBudget};
pub use clamp::{apply_force, apply_force_si, effective_force};
pub use report::output_line;
