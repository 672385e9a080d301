// Domain layer modules
pub mod confirmed_user;

// Re-exports
pub use confirmed_user::{ConfirmedUser, ExtractError, MISSING_ATTRIBUTE};
