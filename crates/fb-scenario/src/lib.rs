//! fb-scenario: scenario file format, loading and validation.

pub mod migrate;
pub mod schema;
pub mod validate;

pub use migrate::{LATEST_VERSION, migrate_to_latest};
pub use schema::*;
pub use validate::{ValidationError, validate_scenario};

use std::path::Path;

pub type ScenarioResult<T> = Result<T, ScenarioError>;

#[derive(thiserror::Error, Debug)]
pub enum ScenarioError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Migration error: {what}")]
    Migration { what: String },

    #[error("Unsupported scenario format: {path}")]
    UnsupportedFormat { path: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_yaml(path: &Path) -> ScenarioResult<Scenario> {
    let content = std::fs::read_to_string(path)?;
    let scenario: Scenario = serde_yaml::from_str(&content)?;
    finish_load(scenario)
}

pub fn save_yaml(path: &Path, scenario: &Scenario) -> ScenarioResult<()> {
    validate_scenario(scenario)?;
    let content = serde_yaml::to_string(scenario)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &Path) -> ScenarioResult<Scenario> {
    let content = std::fs::read_to_string(path)?;
    let scenario: Scenario = serde_json::from_str(&content)?;
    finish_load(scenario)
}

pub fn save_json(path: &Path, scenario: &Scenario) -> ScenarioResult<()> {
    validate_scenario(scenario)?;
    let content = serde_json::to_string_pretty(scenario)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load by extension: `.json` as JSON, `.yaml`/`.yml` as YAML.
pub fn load_path(path: &Path) -> ScenarioResult<Scenario> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => load_json(path),
        Some("yaml") | Some("yml") => load_yaml(path),
        _ => Err(ScenarioError::UnsupportedFormat {
            path: path.display().to_string(),
        }),
    }
}

fn finish_load(scenario: Scenario) -> ScenarioResult<Scenario> {
    let scenario = migrate_to_latest(scenario)?;
    validate_scenario(&scenario)?;
    tracing::debug!(
        name = %scenario.name,
        cases = scenario.cases.len(),
        "scenario loaded"
    );
    Ok(scenario)
}
