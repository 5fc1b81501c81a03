//! Shared domain primitives.

mod errors;
mod gender;
mod severity;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use gender::Gender;
pub use severity::Severity;
