pub mod gate;
pub mod requirements;

use crate::ThisError;

///
/// PolicyError
///

#[derive(Debug, ThisError)]
pub enum PolicyError {
    #[error(transparent)]
    Gate(#[from] gate::GateError),
}
