//! Scenario schema definitions.

use fb_budget::{ForceBreakdown, ForceBudget};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scenario {
    pub version: u32,
    pub name: String,
    // version 0 files called the list `budgets`
    #[serde(default, alias = "budgets")]
    pub cases: Vec<CaseDef>,
}

/// One independent clamp evaluation. Forces in newtons.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CaseDef {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub desired_force_n: f64,
    pub safe_limit_n: f64,
    pub actuator_force_n: f64,
    pub efficiency: f64,
}

impl CaseDef {
    pub fn budget(&self) -> ForceBudget {
        ForceBudget::new(
            self.desired_force_n,
            self.safe_limit_n,
            self.actuator_force_n,
            self.efficiency,
        )
    }
}

impl From<(&str, ForceBudget)> for CaseDef {
    fn from((id, b): (&str, ForceBudget)) -> Self {
        Self {
            id: id.to_string(),
            description: None,
            desired_force_n: b.desired_force,
            safe_limit_n: b.safe_limit,
            actuator_force_n: b.actuator_force,
            efficiency: b.efficiency,
        }
    }
}

/// Outcome of one case, as reported by [`Scenario::evaluate`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CaseResult {
    pub id: String,
    #[serde(flatten)]
    pub breakdown: ForceBreakdown,
}

impl Scenario {
    pub fn new(name: impl Into<String>, cases: Vec<CaseDef>) -> Self {
        Self {
            version: crate::LATEST_VERSION,
            name: name.into(),
            cases,
        }
    }

    /// Clamp every case, in file order.
    pub fn evaluate(&self) -> Vec<CaseResult> {
        self.cases
            .iter()
            .map(|case| CaseResult {
                id: case.id.clone(),
                breakdown: case.budget().breakdown(),
            })
            .collect()
    }

    pub fn case(&self, id: &str) -> Option<&CaseDef> {
        self.cases.iter().find(|c| c.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fb_budget::BindingLimit;

    #[test]
    fn parse_minimal_yaml() {
        let yaml = r#"
version: 1
name: Gripper
cases:
  - id: cookie
    desired_force_n: 2.0
    safe_limit_n: 3.0
    actuator_force_n: 5.0
    efficiency: 0.8
"#;
        let scenario: Scenario = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(scenario.cases.len(), 1);
        assert_eq!(scenario.cases[0].budget(), ForceBudget::cookie_demo());
        assert_eq!(scenario.cases[0].description, None);
    }

    #[test]
    fn budgets_alias_accepted() {
        let yaml = r#"
version: 0
name: Legacy
budgets:
  - id: a
    desired_force_n: 1.0
    safe_limit_n: 1.0
    actuator_force_n: 1.0
    efficiency: 1.0
"#;
        let scenario: Scenario = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(scenario.cases.len(), 1);
    }

    #[test]
    fn evaluate_preserves_order() {
        let scenario = Scenario::new(
            "mixed",
            vec![
                CaseDef::from(("safe", ForceBudget::new(10.0, 3.0, 5.0, 0.8))),
                CaseDef::from(("cookie", ForceBudget::cookie_demo())),
                CaseDef::from(("motor", ForceBudget::new(10.0, 10.0, 5.0, 0.5))),
            ],
        );
        let results = scenario.evaluate();
        let ids: Vec<&str> = results.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["safe", "cookie", "motor"]);
        assert_eq!(results[0].breakdown.binding, BindingLimit::SafeLimit);
        assert_eq!(results[1].breakdown.output, 2.0);
        assert_eq!(results[2].breakdown.output, 2.5);
    }

    #[test]
    fn case_lookup_by_id() {
        let scenario = Scenario::new(
            "lookup",
            vec![
                CaseDef::from(("cookie", ForceBudget::cookie_demo())),
                CaseDef::from(("egg", ForceBudget::new(10.0, 3.0, 5.0, 0.8))),
            ],
        );
        let egg = scenario.case("egg").unwrap();
        assert_eq!(egg.budget().apply(), 3.0);
        assert!(scenario.case("missing").is_none());
    }

    #[test]
    fn case_result_flattens() {
        let result = CaseResult {
            id: "cookie".into(),
            breakdown: ForceBudget::cookie_demo().breakdown(),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["id"], "cookie");
        assert_eq!(json["output"], 2.0);
        assert_eq!(json["binding"], "desired");
    }
}
