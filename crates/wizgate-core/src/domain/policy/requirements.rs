//! Host requirement descriptions for the discovery step.
//!
//! Which text applies depends on the cluster topology, so the wording sits
//! behind `RequirementsContent` with one implementation per tier.

use crate::model::ClusterRecord;
use serde::{Deserialize, Serialize};

///
/// RoleRequirements
/// Minimums reported by the API for one host role; zero or absent means
/// "use the default"
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleRequirements {
    #[serde(default)]
    pub cpu_cores: Option<u32>,

    #[serde(default)]
    pub ram_gib: Option<u32>,

    #[serde(default)]
    pub disk_size_gb: Option<u32>,
}

impl RoleRequirements {
    const fn resolved(self, defaults: ResolvedRequirements) -> ResolvedRequirements {
        ResolvedRequirements {
            cpu_cores: or_default(self.cpu_cores, defaults.cpu_cores),
            ram_gib: or_default(self.ram_gib, defaults.ram_gib),
            disk_size_gb: or_default(self.disk_size_gb, defaults.disk_size_gb),
        }
    }
}

const fn or_default(value: Option<u32>, default: u32) -> u32 {
    match value {
        Some(v) if v > 0 => v,
        _ => default,
    }
}

///
/// ResolvedRequirements
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ResolvedRequirements {
    pub cpu_cores: u32,
    pub ram_gib: u32,
    pub disk_size_gb: u32,
}

const MASTER_DEFAULTS: ResolvedRequirements = ResolvedRequirements {
    cpu_cores: 4,
    ram_gib: 16,
    disk_size_gb: 120,
};

const WORKER_DEFAULTS: ResolvedRequirements = ResolvedRequirements {
    cpu_cores: 2,
    ram_gib: 8,
    disk_size_gb: 120,
};

///
/// HostRequirements
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct HostRequirements {
    #[serde(default)]
    pub master: RoleRequirements,

    #[serde(default)]
    pub worker: RoleRequirements,
}

impl HostRequirements {
    #[must_use]
    pub const fn master(&self) -> ResolvedRequirements {
        self.master.resolved(MASTER_DEFAULTS)
    }

    #[must_use]
    pub const fn worker(&self) -> ResolvedRequirements {
        self.worker.resolved(WORKER_DEFAULTS)
    }
}

///
/// RequirementsContent
///

pub trait RequirementsContent {
    /// Hosts that must be discovered before the step can pass.
    fn required_hosts(&self) -> usize;

    fn describe(&self, requirements: &HostRequirements) -> String;
}

///
/// StandardRequirements
///

pub struct StandardRequirements;

impl RequirementsContent for StandardRequirements {
    fn required_hosts(&self) -> usize {
        3
    }

    fn describe(&self, requirements: &HostRequirements) -> String {
        let master = requirements.master();
        let worker = requirements.worker();

        format!(
            "Three master hosts are required with at least {} CPU cores, {} GB of RAM, and {} GB \
             of filesystem storage each. Two or more additional worker hosts are recommended with \
             at least {} CPU cores, {} GB of RAM, and {} GB of filesystem storage each.",
            master.cpu_cores,
            master.ram_gib,
            master.disk_size_gb,
            worker.cpu_cores,
            worker.ram_gib,
            worker.disk_size_gb,
        )
    }
}

///
/// SingleNodeRequirements
///

pub struct SingleNodeRequirements;

impl RequirementsContent for SingleNodeRequirements {
    fn required_hosts(&self) -> usize {
        1
    }

    fn describe(&self, requirements: &HostRequirements) -> String {
        let master = requirements.master();

        format!(
            "One host is required with at least {} CPU cores, {} GB of RAM, and {} GB of \
             filesystem storage.",
            master.cpu_cores, master.ram_gib, master.disk_size_gb,
        )
    }
}

/// Pick the requirement wording for this cluster's topology.
#[must_use]
pub fn requirements_for(cluster: &ClusterRecord) -> &'static dyn RequirementsContent {
    if cluster.is_single_node() {
        &SingleNodeRequirements
    } else {
        &StandardRequirements
    }
}

///
/// TESTS
///
