use derive_more::Display;
use serde::{Deserialize, Serialize};

///
/// DialogId
///
/// Closed set of host dialogs the inventory screens can open.
///

#[derive(
    Clone, Copy, Debug, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[serde(rename_all = "kebab-case")]
#[remain::sorted]
pub enum DialogId {
    #[display("additional-ntp-sources")]
    AdditionalNtpSources,
    #[display("delete-host")]
    DeleteHost,
    #[display("edit-host")]
    EditHost,
    #[display("events")]
    Events,
    #[display("reset-host")]
    ResetHost,
}
