use crate::{
    ThisError,
    domain::policy::gate::{GateError, WizardGate},
    ids::WizardStepId,
    log,
    log::Topic,
    model::{ClusterRecord, ClusterStatus},
};
use serde::{Deserialize, Serialize};

///
/// NavigationError
///

#[derive(Debug, ThisError)]
pub enum NavigationError {
    #[error("wizard is already at its first step '{0}'")]
    AtFirstStep(WizardStepId),

    #[error("wizard is already at its last step '{0}'")]
    AtLastStep(WizardStepId),

    #[error("step '{step}' cannot advance while the cluster reads as '{status}'")]
    Blocked {
        step: WizardStepId,
        status: ClusterStatus,
    },

    #[error("wizard has no steps")]
    Empty,

    #[error("step '{0}' is not part of this wizard")]
    NotInSequence(WizardStepId),

    #[error(transparent)]
    Gate(#[from] GateError),
}

///
/// WizardFlow
/// `New` is entered right after the cluster was created from the new-cluster
/// page, so cluster details are already filled in
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WizardFlow {
    #[default]
    Existing,
    New,
}

#[must_use]
pub const fn first_step(flow: WizardFlow) -> WizardStepId {
    match flow {
        WizardFlow::New => WizardStepId::BaremetalDiscovery,
        WizardFlow::Existing => WizardStepId::ClusterDetails,
    }
}

///
/// WizardNavigator
///

#[derive(Clone, Debug)]
pub struct WizardNavigator {
    steps: Vec<WizardStepId>,
    current: usize,
}

impl WizardNavigator {
    /// Default step order, starting where `flow` says.
    #[must_use]
    pub fn new(flow: WizardFlow) -> Self {
        let steps = WizardStepId::ALL.to_vec();
        let first = first_step(flow);
        let current = steps.iter().position(|s| *s == first).unwrap_or(0);

        Self { steps, current }
    }

    pub fn with_steps(
        steps: Vec<WizardStepId>,
        first: WizardStepId,
    ) -> Result<Self, NavigationError> {
        if steps.is_empty() {
            return Err(NavigationError::Empty);
        }

        let current = steps
            .iter()
            .position(|s| *s == first)
            .ok_or(NavigationError::NotInSequence(first))?;

        Ok(Self { steps, current })
    }

    #[must_use]
    pub fn current(&self) -> WizardStepId {
        self.steps[self.current]
    }

    #[must_use]
    pub fn steps(&self) -> &[WizardStepId] {
        &self.steps
    }

    #[must_use]
    pub const fn is_first(&self) -> bool {
        self.current == 0
    }

    #[must_use]
    pub const fn is_last(&self) -> bool {
        self.current + 1 == self.steps.len()
    }

    pub fn set_current(&mut self, step: WizardStepId) -> Result<(), NavigationError> {
        self.current = self
            .steps
            .iter()
            .position(|s| *s == step)
            .ok_or(NavigationError::NotInSequence(step))?;

        Ok(())
    }

    /// Advance one step if the gate lets the current step through.
    pub fn move_next(
        &mut self,
        gate: &WizardGate,
        cluster: &ClusterRecord,
    ) -> Result<WizardStepId, NavigationError> {
        let step = self.current();
        if self.is_last() {
            return Err(NavigationError::AtLastStep(step));
        }

        let status = gate.derive_cluster_status(cluster, step)?;
        if status != ClusterStatus::Ready {
            log!(
                Topic::Navigation,
                Debug,
                "cluster {} blocked at '{step}' ({status})",
                cluster.id
            );

            return Err(NavigationError::Blocked { step, status });
        }

        self.current += 1;
        let next = self.current();
        log!(
            Topic::Navigation,
            Info,
            "cluster {} moved '{step}' -> '{next}'",
            cluster.id
        );

        Ok(next)
    }

    /// Step back; never gated.
    pub fn move_back(&mut self) -> Result<WizardStepId, NavigationError> {
        if self.is_first() {
            return Err(NavigationError::AtFirstStep(self.current()));
        }

        self.current -= 1;

        Ok(self.current())
    }
}

///
/// TESTS
///
