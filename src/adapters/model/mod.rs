//! Model adapters - loading and invoking the pre-trained classifiers.

mod linear_artifact;
mod loader;
pub mod mock;

pub use linear_artifact::LinearArtifact;
pub use loader::ModelSet;
