pub(crate) mod credential_validator;
pub(crate) mod http_credential_validator;
pub(crate) mod in_memory_credential_validator;
pub(crate) mod validation_result;

pub use credential_validator::CredentialValidator;
pub use http_credential_validator::{DEFAULT_VALIDATOR_TIMEOUT, HttpCredentialValidator};
pub use in_memory_credential_validator::InMemoryCredentialValidator;
pub use validation_result::ValidationResult;
