//! Stateful helpers the wizard screens drive: step navigation and the host
//! dialog registry. Unlike `domain::policy`, these may log.

pub mod dialogs;
pub mod navigator;

use crate::ThisError;

///
/// WorkflowError
///

#[derive(Debug, ThisError)]
pub enum WorkflowError {
    #[error(transparent)]
    Dialog(#[from] dialogs::DialogError),

    #[error(transparent)]
    Navigation(#[from] navigator::NavigationError),
}
