use crate::domain::policy::gate::GateError;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

///
/// WizardStepId
///
/// One page of the cluster-creation wizard. The kebab-case literals are the
/// keys used by rule tables and config files.
///

#[derive(
    Clone, Copy, Debug, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum WizardStepId {
    #[display("cluster-details")]
    ClusterDetails,

    #[display("baremetal-discovery")]
    BaremetalDiscovery,

    #[display("networking")]
    Networking,

    #[display("review")]
    Review,
}

impl WizardStepId {
    /// Every step, in default wizard order.
    pub const ALL: [Self; 4] = [
        Self::ClusterDetails,
        Self::BaremetalDiscovery,
        Self::Networking,
        Self::Review,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ClusterDetails => "cluster-details",
            Self::BaremetalDiscovery => "baremetal-discovery",
            Self::Networking => "networking",
            Self::Review => "review",
        }
    }
}

impl FromStr for WizardStepId {
    type Err = GateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|step| step.as_str() == s)
            .ok_or_else(|| GateError::UnknownStep(s.to_string()))
    }
}

///
/// TESTS
///
