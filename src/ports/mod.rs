//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ClassifierModel` - Port over the opaque pre-trained classifiers

mod classifier_model;

pub use classifier_model::{ClassLabel, ClassifierModel, ModelError};
