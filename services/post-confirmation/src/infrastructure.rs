// Infrastructure layer modules
pub mod cognito_ops;
pub mod config;
pub mod logging;

// Re-exports
pub use cognito_ops::{AwsCognitoOps, CognitoOps, CognitoOpsError};
pub use config::{ConfigError, PostConfirmationConfig};
pub use logging::init_logging;
