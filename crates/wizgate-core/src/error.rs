use crate::{
    ThisError,
    config::{ConfigError, schema::ConfigSchemaError},
    domain::{
        DomainError,
        policy::{PolicyError, gate::GateError},
    },
    workflow::{WorkflowError, dialogs::DialogError, navigator::NavigationError},
};

///
/// Error
///
/// Crate-level error. Each layer keeps its own enum; this one only routes
/// them so callers can use a single `?`.
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Workflow(#[from] WorkflowError),
}

impl From<ConfigSchemaError> for Error {
    fn from(err: ConfigSchemaError) -> Self {
        ConfigError::from(err).into()
    }
}

impl From<PolicyError> for Error {
    fn from(err: PolicyError) -> Self {
        DomainError::from(err).into()
    }
}

impl From<GateError> for Error {
    fn from(err: GateError) -> Self {
        PolicyError::from(err).into()
    }
}

impl From<DialogError> for Error {
    fn from(err: DialogError) -> Self {
        WorkflowError::from(err).into()
    }
}

impl From<NavigationError> for Error {
    fn from(err: NavigationError) -> Self {
        WorkflowError::from(err).into()
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaf_errors_route_to_their_layer() {
        let err: Error = "nowhere".parse::<crate::ids::WizardStepId>().unwrap_err().into();
        assert!(matches!(err, Error::Domain(DomainError::Policy(PolicyError::Gate(_)))));
        assert_eq!(err.to_string(), "unknown wizard step 'nowhere'");

        let err: Error = NavigationError::Empty.into();
        assert!(matches!(err, Error::Workflow(WorkflowError::Navigation(_))));
    }
}
