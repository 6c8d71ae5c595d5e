use derive_more::Display;
use serde::{Deserialize, Serialize};

///
/// ClusterStatus
///
/// Statuses the API adds later decode as `Unknown` and are never gated.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClusterStatus {
    #[display("insufficient")]
    Insufficient,
    #[display("pending-for-input")]
    PendingForInput,
    #[display("ready")]
    Ready,
    #[display("preparing-for-installation")]
    PreparingForInstallation,
    #[display("installing")]
    Installing,
    #[display("installing-pending-user-action")]
    InstallingPendingUserAction,
    #[display("finalizing")]
    Finalizing,
    #[display("installed")]
    Installed,
    #[display("adding-hosts")]
    AddingHosts,
    #[display("cancelled")]
    Cancelled,
    #[display("error")]
    Error,
    #[serde(other)]
    #[display("unknown")]
    Unknown,
}

impl ClusterStatus {
    /// Statuses that step gating may reinterpret; everything else passes
    /// through untouched.
    #[must_use]
    pub const fn is_gateable(self) -> bool {
        matches!(self, Self::Insufficient | Self::PendingForInput)
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::PendingForInput => "Pending input",
            Self::Insufficient => "Draft",
            Self::Ready => "Ready",
            Self::PreparingForInstallation => "Preparing for installation",
            Self::Installing => "Installing",
            Self::InstallingPendingUserAction => "Installing (pending user action)",
            Self::Finalizing => "Finalizing",
            Self::Cancelled => "Installation cancelled",
            Self::Error => "Error",
            Self::Installed => "Installed",
            Self::AddingHosts => "Adding hosts",
            Self::Unknown => "Unknown",
        }
    }
}

///
/// HostStatus
///
/// Same fallback as `ClusterStatus`.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum HostStatus {
    #[display("discovering")]
    Discovering,
    #[display("pending-for-input")]
    PendingForInput,
    #[display("known")]
    Known,
    #[display("disconnected")]
    Disconnected,
    #[display("insufficient")]
    Insufficient,
    #[display("disabled")]
    Disabled,
    #[display("preparing-for-installation")]
    PreparingForInstallation,
    #[display("installing")]
    Installing,
    #[display("installing-in-progress")]
    InstallingInProgress,
    #[display("installing-pending-user-action")]
    InstallingPendingUserAction,
    #[display("installed")]
    Installed,
    #[display("cancelled")]
    Cancelled,
    #[display("error")]
    Error,
    #[display("resetting")]
    Resetting,
    #[display("resetting-pending-user-action")]
    ResettingPendingUserAction,
    #[display("added-to-existing-cluster")]
    AddedToExistingCluster,
    #[serde(other)]
    #[display("unknown")]
    Unknown,
}

impl HostStatus {
    #[must_use]
    pub const fn is_gateable(self) -> bool {
        matches!(self, Self::Insufficient | Self::PendingForInput)
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Discovering => "Discovering",
            Self::PendingForInput => "Pending input",
            Self::Known => "Known",
            Self::Disconnected => "Disconnected",
            Self::Insufficient => "Insufficient",
            Self::Disabled => "Disabled",
            Self::PreparingForInstallation => "Preparing for installation",
            Self::Installing => "Starting installation",
            Self::InstallingInProgress => "Installing",
            Self::InstallingPendingUserAction => "Incorrect boot order",
            Self::Installed => "Installed",
            Self::Cancelled => "Installation cancelled",
            Self::Error => "Error",
            Self::Resetting => "Resetting",
            Self::ResettingPendingUserAction => "Reboot required",
            Self::AddedToExistingCluster => "Added to existing cluster",
            Self::Unknown => "Unknown",
        }
    }
}

///
/// ValidationStatus
///
/// Anything the API adds later decodes as `Unknown`, which never counts as a
/// pass.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValidationStatus {
    #[display("success")]
    Success,
    #[display("failure")]
    Failure,
    #[display("pending")]
    Pending,
    #[display("error")]
    Error,
    #[display("disabled")]
    Disabled,
    #[serde(other)]
    #[display("unknown")]
    Unknown,
}

impl ValidationStatus {
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }
}

///
/// TESTS
///
