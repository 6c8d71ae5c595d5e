use crate::{
    ids::{ValidationGroup, ValidationId},
    model::status::ValidationStatus,
};
use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{MapAccess, Visitor},
    ser::SerializeMap,
};
use std::fmt;

///
/// ValidationResult
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ValidationResult {
    pub id: ValidationId,
    pub status: ValidationStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ValidationResult {
    #[must_use]
    pub fn new(id: impl Into<ValidationId>, status: ValidationStatus) -> Self {
        Self {
            id: id.into(),
            status,
            message: None,
        }
    }
}

///
/// ValidationsInfo
///
/// Group name -> ordered results. Groups keep the order they were inserted
/// (or appeared in the source JSON).
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ValidationsInfo {
    groups: Vec<(ValidationGroup, Vec<ValidationResult>)>,
}

impl ValidationsInfo {
    #[must_use]
    pub const fn new() -> Self {
        Self { groups: Vec::new() }
    }

    /// Decode the blob persisted on a cluster or host record.
    /// Missing, blank or malformed input yields an empty mapping.
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        raw.map(str::trim)
            .filter(|s| !s.is_empty())
            .and_then(|s| Self::try_parse(s).ok())
            .unwrap_or_default()
    }

    pub fn try_parse(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Insert a group, replacing an existing one in place.
    pub fn insert(&mut self, group: impl Into<ValidationGroup>, entries: Vec<ValidationResult>) {
        let group = group.into();

        match self.groups.iter_mut().find(|(name, _)| *name == group) {
            Some((_, slot)) => *slot = entries,
            None => self.groups.push((group, entries)),
        }
    }

    #[must_use]
    pub fn get(&self, group: &str) -> Option<&[ValidationResult]> {
        self.groups
            .iter()
            .find(|(name, _)| name.as_str() == group)
            .map(|(_, entries)| entries.as_slice())
    }

    pub fn groups(&self) -> impl Iterator<Item = (&ValidationGroup, &[ValidationResult])> {
        self.groups
            .iter()
            .map(|(name, entries)| (name, entries.as_slice()))
    }

    /// Every result across every group, in order.
    pub fn entries(&self) -> impl Iterator<Item = &ValidationResult> {
        self.groups.iter().flat_map(|(_, entries)| entries.iter())
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.groups.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl FromIterator<(ValidationGroup, Vec<ValidationResult>)> for ValidationsInfo {
    fn from_iter<I: IntoIterator<Item = (ValidationGroup, Vec<ValidationResult>)>>(
        iter: I,
    ) -> Self {
        let mut info = Self::new();
        for (group, entries) in iter {
            info.insert(group, entries);
        }

        info
    }
}

impl Serialize for ValidationsInfo {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for (group, entries) in &self.groups {
            map.serialize_entry(group, entries)?;
        }

        map.end()
    }
}

impl<'de> Deserialize<'de> for ValidationsInfo {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct InfoVisitor;

        impl<'de> Visitor<'de> for InfoVisitor {
            type Value = ValidationsInfo;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of validation group to validation results")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut info = ValidationsInfo::new();

                // a null group is absent, not empty
                while let Some((group, entries)) =
                    access.next_entry::<ValidationGroup, Option<Vec<ValidationResult>>>()?
                {
                    if let Some(entries) = entries {
                        info.insert(group, entries);
                    }
                }

                Ok(info)
            }
        }

        deserializer.deserialize_map(InfoVisitor)
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    const RAW: &str = r#"{
        "network": [{"id": "api-vip-defined", "status": "failure", "message": "missing"}],
        "hardware": [{"id": "has-cpu-cores", "status": "success"}],
        "configuration": null
    }"#;

    #[test]
    fn parse_keeps_source_group_order() {
        let info = ValidationsInfo::parse(Some(RAW));
        let names: Vec<&str> = info.groups().map(|(g, _)| g.as_str()).collect();

        assert_eq!(names, vec!["network", "hardware"]);
        assert_eq!(info.get("configuration"), None);
        assert_eq!(
            info.get("network").unwrap()[0].message.as_deref(),
            Some("missing")
        );
    }

    #[test]
    fn explicit_empty_group_is_kept() {
        let info = ValidationsInfo::parse(Some(r#"{"network": [], "hardware": null}"#));

        assert_eq!(info.get("network"), Some(&[][..]));
        assert_eq!(info.get("hardware"), None);
        assert_eq!(info.len(), 1);
    }

    #[test]
    fn malformed_or_missing_input_is_empty() {
        assert!(ValidationsInfo::parse(Some("{not json")).is_empty());
        assert!(ValidationsInfo::parse(Some("null")).is_empty());
        assert!(ValidationsInfo::parse(Some("   ")).is_empty());
        assert!(ValidationsInfo::parse(None).is_empty());
        assert!(ValidationsInfo::try_parse("[1, 2]").is_err());
    }

    #[test]
    fn insert_replaces_in_place() {
        let mut info = ValidationsInfo::new();
        info.insert("hardware", vec![]);
        info.insert("network", vec![]);
        info.insert(
            "hardware",
            vec![ValidationResult::new("has-cpu-cores", ValidationStatus::Success)],
        );

        let names: Vec<&str> = info.groups().map(|(g, _)| g.as_str()).collect();
        assert_eq!(names, vec!["hardware", "network"]);
        assert_eq!(info.entries().count(), 1);
    }

    #[test]
    fn serializes_back_in_order() {
        let info = ValidationsInfo::parse(Some(RAW));
        let json = serde_json::to_string(&info).unwrap();

        assert!(json.find("network").unwrap() < json.find("hardware").unwrap());
        assert_eq!(ValidationsInfo::parse(Some(&json)), info);
    }
}
