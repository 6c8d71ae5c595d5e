//! Wizard step gating.
//!
//! Decides, per wizard step, which validation results matter and whether the
//! cluster (and each of its hosts) has passed them. This module is PURE policy:
//! - reads records and the rule table
//! - computes decisions
//!
//! No I/O. No logging. Inputs are never mutated.

use crate::{
    ThisError,
    config::schema::{StepRule, TargetRule},
    ids::{ValidationGroup, ValidationId, WizardStepId},
    model::{
        ClusterRecord, ClusterStatus, HostRecord, HostStatus, ValidationResult, ValidationsInfo,
    },
};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, sync::Arc};

///
/// GateError
/// Caller contract violations; unmet requirements are never errors
///

#[derive(Debug, ThisError)]
pub enum GateError {
    #[error("unknown wizard step '{0}'")]
    UnknownStep(String),

    #[error("no gating rule configured for wizard step '{0}'")]
    MissingRule(WizardStepId),
}

///
/// GateTarget
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GateTarget {
    Cluster,
    Host,
}

///
/// StepRuleTable
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct StepRuleTable {
    rules: BTreeMap<WizardStepId, StepRule>,
}

impl StepRuleTable {
    #[must_use]
    pub fn builtin() -> Self {
        WizardStepId::ALL
            .into_iter()
            .map(|step| (step, StepRule::builtin(step)))
            .collect()
    }

    pub fn insert(&mut self, step: WizardStepId, rule: StepRule) {
        self.rules.insert(step, rule);
    }

    pub fn get(&self, step: WizardStepId) -> Result<&StepRule, GateError> {
        self.rules.get(&step).ok_or(GateError::MissingRule(step))
    }

    pub fn iter(&self) -> impl Iterator<Item = (WizardStepId, &StepRule)> {
        self.rules.iter().map(|(step, rule)| (*step, rule))
    }
}

impl FromIterator<(WizardStepId, StepRule)> for StepRuleTable {
    fn from_iter<I: IntoIterator<Item = (WizardStepId, StepRule)>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

///
/// Checks
///

/// True iff every id occurs exactly once across all groups and passed.
/// An absent id fails; an empty `ids` passes.
#[must_use]
pub fn check_required_ids(info: &ValidationsInfo, ids: &[ValidationId]) -> bool {
    ids.iter().all(|id| {
        let mut matches = info.entries().filter(|v| v.id == *id);

        match (matches.next(), matches.next()) {
            (Some(only), None) => only.status.is_success(),
            _ => false,
        }
    })
}

/// True iff every named group exists and all of its entries passed.
/// A missing group fails; an empty `groups` passes.
#[must_use]
pub fn check_required_groups(info: &ValidationsInfo, groups: &[ValidationGroup]) -> bool {
    groups.iter().all(|group| {
        info.get(group.as_str())
            .is_some_and(|entries| entries.iter().all(|v| v.status.is_success()))
    })
}

fn check_rule(info: &ValidationsInfo, rule: &TargetRule) -> bool {
    check_required_groups(info, &rule.groups) && check_required_ids(info, &rule.validation_ids)
}

///
/// HostGateReport
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct HostGateReport {
    pub id: String,
    pub hostname: String,
    pub status: HostStatus,
    pub step_status: HostStatus,
}

///
/// StepGateReport
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct StepGateReport {
    pub step: WizardStepId,
    pub status: ClusterStatus,
    pub step_status: ClusterStatus,
    pub can_advance: bool,
    pub hosts: Vec<HostGateReport>,
}

///
/// WizardGate
///

#[derive(Clone, Debug)]
pub struct WizardGate {
    rules: Arc<StepRuleTable>,
}

impl WizardGate {
    #[must_use]
    pub fn new(rules: StepRuleTable) -> Self {
        Self {
            rules: Arc::new(rules),
        }
    }

    #[must_use]
    pub fn rules(&self) -> &StepRuleTable {
        &self.rules
    }

    fn target_rule(&self, step: WizardStepId, target: GateTarget) -> Result<&TargetRule, GateError> {
        let rule = self.rules.get(step)?;

        Ok(match target {
            GateTarget::Cluster => &rule.cluster,
            GateTarget::Host => &rule.host,
        })
    }

    /// Keep only the results relevant to `step`.
    ///
    /// Groups listed wholesale are copied verbatim; other groups keep just the
    /// entries whose id is required. Groups left empty are dropped. Output
    /// groups follow input order.
    pub fn filter_validations(
        &self,
        info: &ValidationsInfo,
        step: WizardStepId,
        target: GateTarget,
    ) -> Result<ValidationsInfo, GateError> {
        let rule = self.target_rule(step, target)?;

        let filtered: ValidationsInfo = info
            .groups()
            .filter_map(|(group, entries)| {
                if rule.groups.contains(group) {
                    return Some((group.clone(), entries.to_vec()));
                }

                let selected: Vec<ValidationResult> = entries
                    .iter()
                    .filter(|v| rule.validation_ids.contains(&v.id))
                    .cloned()
                    .collect();

                (!selected.is_empty()).then(|| (group.clone(), selected))
            })
            .collect();

        Ok(filtered)
    }

    /// Host status as seen by `step`.
    ///
    /// Only `insufficient` / `pending-for-input` hosts are reinterpreted: they
    /// read as `known` once the step's host rule passes.
    pub fn derive_host_status(
        &self,
        host: &HostRecord,
        step: WizardStepId,
    ) -> Result<HostStatus, GateError> {
        let rule = self.target_rule(step, GateTarget::Host)?;

        if !host.status.is_gateable() {
            return Ok(host.status);
        }

        Ok(if check_rule(&host.validations(), rule) {
            HostStatus::Known
        } else {
            host.status
        })
    }

    /// Cluster status as seen by `step`.
    ///
    /// A gateable cluster reads as `ready` only when every host derives to
    /// `known` and the step's cluster rule passes. Hosts are checked first.
    pub fn derive_cluster_status(
        &self,
        cluster: &ClusterRecord,
        step: WizardStepId,
    ) -> Result<ClusterStatus, GateError> {
        let rule = self.target_rule(step, GateTarget::Cluster)?;

        if !cluster.status.is_gateable() {
            return Ok(cluster.status);
        }

        for host in &cluster.hosts {
            if self.derive_host_status(host, step)? != HostStatus::Known {
                return Ok(cluster.status);
            }
        }

        Ok(if check_rule(&cluster.validations(), rule) {
            ClusterStatus::Ready
        } else {
            cluster.status
        })
    }

    pub fn can_advance(&self, cluster: &ClusterRecord, step: WizardStepId) -> Result<bool, GateError> {
        Ok(self.derive_cluster_status(cluster, step)? == ClusterStatus::Ready)
    }

    /// Full picture for one step: every host's derived status plus the
    /// cluster verdict.
    pub fn report(
        &self,
        cluster: &ClusterRecord,
        step: WizardStepId,
    ) -> Result<StepGateReport, GateError> {
        let hosts = cluster
            .hosts
            .iter()
            .map(|host| {
                Ok(HostGateReport {
                    id: host.id.clone(),
                    hostname: host.hostname().to_string(),
                    status: host.status,
                    step_status: self.derive_host_status(host, step)?,
                })
            })
            .collect::<Result<Vec<_>, GateError>>()?;

        let step_status = self.derive_cluster_status(cluster, step)?;

        Ok(StepGateReport {
            step,
            status: cluster.status,
            step_status,
            can_advance: step_status == ClusterStatus::Ready,
            hosts,
        })
    }
}

impl Default for WizardGate {
    fn default() -> Self {
        Self::new(StepRuleTable::builtin())
    }
}

///
/// TESTS
///
