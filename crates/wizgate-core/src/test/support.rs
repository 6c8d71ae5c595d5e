// Record builders shared by the unit tests.

use crate::model::{
    ClusterRecord, ClusterStatus, HighAvailabilityMode, HostRecord, HostStatus, ValidationResult,
    ValidationStatus, ValidationsInfo,
};

///
/// ValidationsBuilder
///

#[derive(Default)]
pub struct ValidationsBuilder {
    info: ValidationsInfo,
}

impl ValidationsBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn group(mut self, name: &'static str, entries: &[(&'static str, ValidationStatus)]) -> Self {
        let entries = entries
            .iter()
            .map(|(id, status)| ValidationResult::new(*id, *status))
            .collect();
        self.info.insert(name, entries);
        self
    }

    #[must_use]
    pub fn build(self) -> ValidationsInfo {
        self.info
    }

    /// Serialized form, as it sits on a record.
    #[must_use]
    pub fn build_json(self) -> String {
        serde_json::to_string(&self.info).expect("validations serialize")
    }
}

#[must_use]
pub fn host(id: &str, status: HostStatus, validations_info: Option<String>) -> HostRecord {
    HostRecord {
        id: id.to_string(),
        requested_hostname: None,
        status,
        validations_info,
    }
}

#[must_use]
pub fn cluster(
    status: ClusterStatus,
    validations_info: Option<String>,
    hosts: Vec<HostRecord>,
) -> ClusterRecord {
    ClusterRecord {
        id: "cluster-1".to_string(),
        name: Some("test".to_string()),
        status,
        high_availability_mode: HighAvailabilityMode::Full,
        validations_info,
        hosts,
    }
}
