//! Adapters - Implementations of ports against concrete technology.

pub mod http;
pub mod model;
