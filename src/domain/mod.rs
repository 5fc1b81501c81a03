//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, enums, errors)
//! - `screening` - The two screening steps: lung-cancer risk and drug response

pub mod foundation;
pub mod screening;
