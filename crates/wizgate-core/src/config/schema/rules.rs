use super::{ConfigSchemaError, NAME_MAX_BYTES, Validate};
use crate::ids::{ValidationGroup, ValidationId, WizardStepId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

///
/// TargetRule
///
/// What one record kind (cluster or host) must pass for a step: whole groups
/// plus individual validation ids.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TargetRule {
    #[serde(default)]
    pub groups: Vec<ValidationGroup>,

    #[serde(default)]
    pub validation_ids: Vec<ValidationId>,
}

impl TargetRule {
    #[must_use]
    pub const fn new(groups: Vec<ValidationGroup>, validation_ids: Vec<ValidationId>) -> Self {
        Self {
            groups,
            validation_ids,
        }
    }

    fn validate_in(&self, context: &str) -> Result<(), ConfigSchemaError> {
        validate_names(
            self.groups.iter().map(ValidationGroup::as_str),
            &format!("{context}.groups"),
        )?;
        validate_names(
            self.validation_ids.iter().map(ValidationId::as_str),
            &format!("{context}.validation_ids"),
        )
    }
}

fn validate_names<'a>(
    names: impl Iterator<Item = &'a str>,
    context: &str,
) -> Result<(), ConfigSchemaError> {
    let mut seen = BTreeSet::new();

    for name in names {
        if name.trim().is_empty() {
            return Err(ConfigSchemaError::ValidationError(format!(
                "{context} contains an empty name"
            )));
        }
        if name.len() > NAME_MAX_BYTES {
            return Err(ConfigSchemaError::ValidationError(format!(
                "{context} '{name}' exceeds {NAME_MAX_BYTES} bytes"
            )));
        }
        if !seen.insert(name) {
            return Err(ConfigSchemaError::ValidationError(format!(
                "{context} lists '{name}' more than once"
            )));
        }
    }

    Ok(())
}

///
/// StepRule
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StepRule {
    #[serde(default)]
    pub cluster: TargetRule,

    #[serde(default)]
    pub host: TargetRule,
}

impl StepRule {
    /// The rule shipped for `step` when config does not override it.
    #[must_use]
    pub fn builtin(step: WizardStepId) -> Self {
        match step {
            WizardStepId::ClusterDetails => Self {
                cluster: TargetRule::new(
                    vec![],
                    vec![
                        ValidationId::PULL_SECRET_SET,
                        ValidationId::DNS_DOMAIN_DEFINED,
                    ],
                ),
                host: TargetRule::default(),
            },

            // sufficient-masters-count stays out until the backend reports it
            // reliably during discovery
            WizardStepId::BaremetalDiscovery => Self {
                cluster: TargetRule::new(vec![], vec![ValidationId::OCS_REQUIREMENTS_SATISFIED]),
                host: TargetRule::new(
                    vec![ValidationGroup::HARDWARE],
                    vec![
                        ValidationId::CONNECTED,
                        ValidationId::CONTAINER_IMAGES_AVAILABLE,
                    ],
                ),
            },

            WizardStepId::Networking => Self {
                cluster: TargetRule::new(vec![ValidationGroup::NETWORK], vec![]),
                host: TargetRule::new(vec![ValidationGroup::NETWORK], vec![]),
            },

            WizardStepId::Review => Self {
                cluster: TargetRule::new(vec![], vec![ValidationId::ALL_HOSTS_READY_TO_INSTALL]),
                host: TargetRule::default(),
            },
        }
    }
}

impl Validate for StepRule {
    fn validate(&self) -> Result<(), ConfigSchemaError> {
        self.cluster.validate_in("cluster")?;
        self.host.validate_in("host")
    }
}

///
/// StepRuleOverride
///
/// Config entry for one step. A target left out keeps its built-in rule; a
/// target that is present replaces it wholesale.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StepRuleOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster: Option<TargetRule>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<TargetRule>,
}

impl StepRuleOverride {
    #[must_use]
    pub fn apply_to(&self, base: StepRule) -> StepRule {
        StepRule {
            cluster: self.cluster.clone().unwrap_or(base.cluster),
            host: self.host.clone().unwrap_or(base.host),
        }
    }
}

impl Validate for StepRuleOverride {
    fn validate(&self) -> Result<(), ConfigSchemaError> {
        if let Some(cluster) = &self.cluster {
            cluster.validate_in("cluster")?;
        }
        if let Some(host) = &self.host {
            host.validate_in("host")?;
        }

        Ok(())
    }
}

///
/// TESTS
///
