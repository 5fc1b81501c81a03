//! PulmoScreen - Two-Step Clinical Screening Service
//!
//! This crate implements a lung-cancer risk check followed by a conditional
//! drug-response check, each backed by a pre-trained classifier loaded at
//! startup.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
