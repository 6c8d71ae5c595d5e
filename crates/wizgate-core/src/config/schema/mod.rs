mod log;
mod route;
mod rules;

pub use log::*;
pub use route::*;
pub use rules::*;

use crate::{ThisError, ids::WizardStepId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

///
/// ConfigSchemaError
///

#[derive(Debug, ThisError)]
pub enum ConfigSchemaError {
    #[error("validation error: {0}")]
    ValidationError(String),
}

pub const NAME_MAX_BYTES: usize = 64;

///
/// Validate
///

pub trait Validate {
    fn validate(&self) -> Result<(), ConfigSchemaError>;
}

///
/// ConfigModel
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigModel {
    #[serde(default)]
    pub log: LogConfig,

    #[serde(default)]
    pub route: RouteConfig,

    // per-step overrides keyed by step literal
    // steps and targets left out keep their built-in rule
    #[serde(default)]
    pub rules: BTreeMap<String, StepRuleOverride>,
}

impl ConfigModel {
    /// The rule in effect for `step`: the built-in rule with any configured
    /// target overrides applied.
    #[must_use]
    pub fn rule_for(&self, step: WizardStepId) -> StepRule {
        let builtin = StepRule::builtin(step);

        match self.rules.get(step.as_str()) {
            Some(over) => over.apply_to(builtin),
            None => builtin,
        }
    }
}

impl Validate for ConfigModel {
    fn validate(&self) -> Result<(), ConfigSchemaError> {
        self.log.validate()?;
        self.route.validate()?;

        for (key, rule) in &self.rules {
            if key.parse::<WizardStepId>().is_err() {
                return Err(ConfigSchemaError::ValidationError(format!(
                    "rules.{key}: unknown wizard step"
                )));
            }

            rule.validate().map_err(|ConfigSchemaError::ValidationError(msg)| {
                ConfigSchemaError::ValidationError(format!("rules.{key}.{msg}"))
            })?;
        }

        Ok(())
    }
}
