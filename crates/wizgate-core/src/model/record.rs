use crate::model::{
    status::{ClusterStatus, HostStatus},
    validation::ValidationsInfo,
};
use serde::{Deserialize, Serialize};

///
/// HighAvailabilityMode
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum HighAvailabilityMode {
    #[default]
    Full,
    None,
}

///
/// HostRecord
///
/// A host as reported by the provisioning API. Only the fields the gate and
/// the dialogs read are modelled; anything else in the payload is ignored.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HostRecord {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requested_hostname: Option<String>,

    pub status: HostStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validations_info: Option<String>,
}

impl HostRecord {
    #[must_use]
    pub fn validations(&self) -> ValidationsInfo {
        ValidationsInfo::parse(self.validations_info.as_deref())
    }

    /// Display name, falling back to the host id.
    #[must_use]
    pub fn hostname(&self) -> &str {
        self.requested_hostname.as_deref().unwrap_or(&self.id)
    }
}

///
/// ClusterRecord
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterRecord {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    pub status: ClusterStatus,

    #[serde(default)]
    pub high_availability_mode: HighAvailabilityMode,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validations_info: Option<String>,

    #[serde(default)]
    pub hosts: Vec<HostRecord>,
}

impl ClusterRecord {
    #[must_use]
    pub fn validations(&self) -> ValidationsInfo {
        ValidationsInfo::parse(self.validations_info.as_deref())
    }

    #[must_use]
    pub fn is_single_node(&self) -> bool {
        self.high_availability_mode == HighAvailabilityMode::None
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_api_payload() {
        let raw = r#"{
            "id": "c-1",
            "name": "edge",
            "status": "pending-for-input",
            "highAvailabilityMode": "None",
            "validationsInfo": "{\"network\":[]}",
            "hosts": [
                {"id": "h-1", "status": "known", "requestedHostname": "master-0", "progress": {}}
            ],
            "baseDnsDomain": "example.com"
        }"#;

        let cluster: ClusterRecord = serde_json::from_str(raw).unwrap();

        assert_eq!(cluster.status, ClusterStatus::PendingForInput);
        assert!(cluster.is_single_node());
        assert_eq!(cluster.validations().len(), 1);
        assert_eq!(cluster.hosts[0].hostname(), "master-0");
        assert!(cluster.hosts[0].validations().is_empty());
    }

    #[test]
    fn missing_optional_fields_default() {
        let cluster: ClusterRecord =
            serde_json::from_str(r#"{"id": "c-2", "status": "insufficient"}"#).unwrap();

        assert!(!cluster.is_single_node());
        assert!(cluster.hosts.is_empty());
        assert!(cluster.validations().is_empty());
    }
}
