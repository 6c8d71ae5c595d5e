pub mod schema;

use crate::{
    ThisError,
    domain::policy::gate::{StepRuleTable, WizardGate},
    ids::WizardStepId,
};
use schema::{ConfigSchemaError, RouteConfig, Validate};
use std::sync::Arc;

pub use schema::ConfigModel;

/// Errors related to configuration parsing and rendering.
#[derive(Debug, ThisError)]
pub enum ConfigError {
    /// TOML could not be parsed into the expected structure.
    #[error("toml error: {0}")]
    CannotParseToml(String),

    #[error("cannot render config as toml: {0}")]
    CannotRenderToml(String),

    /// Wrapper for data schema-level errors.
    #[error(transparent)]
    ConfigSchema(#[from] ConfigSchemaError),
}

///
/// Config
///
/// A validated configuration. Built once by the caller and handed to whatever
/// needs it; there is no global instance.
///

#[derive(Clone, Debug)]
pub struct Config {
    model: Arc<ConfigModel>,
}

impl Config {
    /// Parse and validate a TOML document.
    pub fn from_toml(config_str: &str) -> Result<Self, ConfigError> {
        let model: ConfigModel =
            toml::from_str(config_str).map_err(|e| ConfigError::CannotParseToml(e.to_string()))?;

        Self::from_model(model)
    }

    pub fn from_model(model: ConfigModel) -> Result<Self, ConfigError> {
        model.validate()?;

        Ok(Self {
            model: Arc::new(model),
        })
    }

    #[must_use]
    pub fn model(&self) -> &ConfigModel {
        &self.model
    }

    #[must_use]
    pub fn route(&self) -> &RouteConfig {
        &self.model.route
    }

    /// Rule table with config overrides applied over the built-in rules.
    #[must_use]
    pub fn rule_table(&self) -> StepRuleTable {
        WizardStepId::ALL
            .into_iter()
            .map(|step| (step, self.model.rule_for(step)))
            .collect()
    }

    #[must_use]
    pub fn gate(&self) -> WizardGate {
        WizardGate::new(self.rule_table())
    }

    /// Render the configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(&*self.model)
            .map_err(|e| ConfigError::CannotRenderToml(e.to_string()))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: Arc::new(ConfigModel::default()),
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ids::{ValidationGroup, ValidationId},
        log::Level,
    };

    #[test]
    fn empty_document_uses_defaults() {
        let config = Config::from_toml("").unwrap();

        assert_eq!(config.model().log.level, Level::Info);
        assert_eq!(config.route().base_path, "");
        assert_eq!(config.rule_table(), StepRuleTable::builtin());
    }

    #[test]
    fn overrides_replace_only_named_steps() {
        let config = Config::from_toml(
            r#"
            [log]
            level = "debug"

            [route]
            base_path = "/assisted-installer"

            [rules.networking.cluster]
            groups = ["network", "configuration"]

            [rules.networking.host]
            validation_ids = ["belongs-to-majority-group"]
            "#,
        )
        .unwrap();

        let table = config.rule_table();
        let networking = table.get(WizardStepId::Networking).unwrap();

        assert_eq!(
            networking.cluster.groups,
            vec![
                ValidationGroup::NETWORK,
                ValidationGroup::from("configuration")
            ]
        );
        assert!(networking.host.groups.is_empty());
        assert_eq!(
            networking.host.validation_ids,
            vec![ValidationId::from("belongs-to-majority-group")]
        );

        let review = table.get(WizardStepId::Review).unwrap();
        assert_eq!(
            review.cluster.validation_ids,
            vec![ValidationId::ALL_HOSTS_READY_TO_INSTALL]
        );
        assert_eq!(config.model().log.level, Level::Debug);
        assert_eq!(
            config.route().cluster_path("c1"),
            "/assisted-installer/clusters/c1"
        );
    }

    #[test]
    fn single_target_override_keeps_builtin_other_target() {
        let config = Config::from_toml(
            r#"
            [rules.networking.cluster]
            groups = ["network"]
            validation_ids = ["api-vip-defined"]
            "#,
        )
        .unwrap();

        let table = config.rule_table();
        let networking = table.get(WizardStepId::Networking).unwrap();

        assert_eq!(
            networking.cluster.validation_ids,
            vec![ValidationId::from("api-vip-defined")]
        );
        assert_eq!(networking.host.groups, vec![ValidationGroup::NETWORK]);
    }

    #[test]
    fn unknown_step_key_is_rejected() {
        let err = Config::from_toml(
            r#"
            [rules.static-ip-yaml-view.cluster]
            groups = ["network"]
            "#,
        )
        .unwrap_err();

        assert!(matches!(err, ConfigError::ConfigSchema(_)));
        assert!(err.to_string().contains("static-ip-yaml-view"));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = Config::from_toml("[route]\nprefix = \"/x\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::CannotParseToml(_)));
    }

    #[test]
    fn bad_base_path_is_rejected() {
        let err = Config::from_toml("[route]\nbase_path = \"ui/\"\n").unwrap_err();
        assert!(err.to_string().contains("base_path"));
    }

    #[test]
    fn rendered_toml_parses_back() {
        let config = Config::from_toml(
            r#"
            [rules.review.cluster]
            validation_ids = ["all-hosts-are-ready-to-install", "api-vip-defined"]
            "#,
        )
        .unwrap();

        let rendered = config.to_toml().unwrap();
        let reparsed = Config::from_toml(&rendered).unwrap();

        assert_eq!(reparsed.rule_table(), config.rule_table());
    }
}
