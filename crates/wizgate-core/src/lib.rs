//! Wizard step gating for cluster installation.
//!
//! Given cluster and host records fetched from the provisioning API, decide
//! which validations a wizard step cares about and whether the step may
//! advance.
//!
//! ## Layering
//!
//! - `model/` holds the records as received; nothing here mutates them.
//! - `domain::policy` owns the deterministic decisions (gate, requirements).
//! - `workflow/` holds the small stateful pieces (navigation, dialogs).
//! - `config/` parses and validates the TOML rule overrides.
//!
//! The default flow is: caller → workflow → policy → model.

pub mod config;
pub mod domain;
pub mod error;
pub mod ids;
pub mod log;
pub mod model;
pub mod workflow;

#[cfg(test)]
pub(crate) mod test;

pub use error::Error;

pub(crate) use thiserror::Error as ThisError;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        config::Config,
        domain::policy::{
            gate::{GateTarget, StepRuleTable, WizardGate},
            requirements::{HostRequirements, RequirementsContent, requirements_for},
        },
        ids::{DialogId, ValidationGroup, ValidationId, WizardStepId},
        model::{ClusterRecord, ClusterStatus, HostRecord, HostStatus, ValidationsInfo},
        workflow::{
            dialogs::{DialogPayload, DialogRegistry},
            navigator::{WizardFlow, WizardNavigator},
        },
    };
}

///
/// Crate Version
///

pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
