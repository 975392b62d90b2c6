//! Scenario version migration.

use crate::ScenarioError;
use crate::schema::Scenario;

pub const LATEST_VERSION: u32 = 1;

pub fn migrate_to_latest(mut scenario: Scenario) -> Result<Scenario, ScenarioError> {
    while scenario.version < LATEST_VERSION {
        scenario = migrate_one_version(scenario)?;
    }
    Ok(scenario)
}

fn migrate_one_version(scenario: Scenario) -> Result<Scenario, ScenarioError> {
    match scenario.version {
        0 => migrate_v0_to_v1(scenario),
        v => Err(ScenarioError::Migration {
            what: format!("No migration path from version {}", v),
        }),
    }
}

// v0 -> v1 renamed `budgets` to `cases`; the serde alias already absorbed it.
fn migrate_v0_to_v1(mut scenario: Scenario) -> Result<Scenario, ScenarioError> {
    tracing::debug!(name = %scenario.name, "migrating scenario v0 -> v1");
    scenario.version = 1;
    Ok(scenario)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn v0_bumped() {
        let mut s = Scenario::new("old", vec![]);
        s.version = 0;
        let s = migrate_to_latest(s).unwrap();
        assert_eq!(s.version, LATEST_VERSION);
    }

    #[test]
    fn latest_untouched() {
        let s = Scenario::new("new", vec![]);
        assert_eq!(migrate_to_latest(s.clone()).unwrap(), s);
    }
}
