//! Scenario validation.
//!
//! Structural checks only. Force values are never range-checked; a non-finite
//! value is logged and left for the clamp to propagate.

use crate::schema::Scenario;
use fb_core::ensure_finite;
use std::collections::HashSet;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Empty ID in {context}")]
    EmptyId { context: String },

    #[error("Scenario has no cases")]
    NoCases,

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_scenario(scenario: &Scenario) -> Result<(), ValidationError> {
    if scenario.version > crate::migrate::LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: scenario.version,
        });
    }

    if scenario.cases.is_empty() {
        return Err(ValidationError::NoCases);
    }

    let mut ids = HashSet::new();
    for case in &scenario.cases {
        if case.id.trim().is_empty() {
            return Err(ValidationError::EmptyId {
                context: "cases".to_string(),
            });
        }
        if !ids.insert(case.id.as_str()) {
            return Err(ValidationError::DuplicateId {
                id: case.id.clone(),
                context: "cases".to_string(),
            });
        }

        let fields = [
            (case.desired_force_n, "desired_force_n"),
            (case.safe_limit_n, "safe_limit_n"),
            (case.actuator_force_n, "actuator_force_n"),
            (case.efficiency, "efficiency"),
        ];
        for (value, what) in fields {
            if let Err(err) = ensure_finite(value, what) {
                tracing::warn!(case = %case.id, "{err}");
            }
        }
    }

    Ok(())
}
