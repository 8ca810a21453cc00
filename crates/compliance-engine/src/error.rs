use shared_types::ParseContractTypeError;
use thiserror::Error;

/// Caller-visible analysis failures. No partial verdict accompanies them.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error(transparent)]
    UnknownContractType(#[from] ParseContractTypeError),
}
