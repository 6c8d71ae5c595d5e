use super::{ConfigSchemaError, Validate};
use serde::{Deserialize, Serialize};

///
/// RouteConfig
///
/// Base path the installer UI is mounted under. Passed explicitly to whatever
/// builds links; there is no process-wide base path.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RouteConfig {
    #[serde(default)]
    pub base_path: String,
}

impl RouteConfig {
    #[must_use]
    pub fn new(base_path: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    #[must_use]
    pub fn clusters_path(&self) -> String {
        format!("{}/clusters", self.base_path)
    }

    #[must_use]
    pub fn cluster_path(&self, cluster_id: &str) -> String {
        format!("{}/{cluster_id}", self.clusters_path())
    }
}

impl Validate for RouteConfig {
    fn validate(&self) -> Result<(), ConfigSchemaError> {
        let path = &self.base_path;
        if path.is_empty() {
            return Ok(());
        }

        if !path.starts_with('/') || path.ends_with('/') {
            return Err(ConfigSchemaError::ValidationError(format!(
                "route.base_path '{path}' must start with '/' and must not end with '/'"
            )));
        }

        Ok(())
    }
}

///
/// TESTS
///
