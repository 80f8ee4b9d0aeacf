//! # Aethon - SolarEdge Cloud Monitoring Integration
//!
//! A Rust integration between home-automation hosts and the SolarEdge
//! monitoring cloud API: validate a configured site once at setup time,
//! hand a typed runtime handle to the host's sensor platform, and get out
//! of the way. Polling cadence, entity definitions, and retry scheduling
//! stay with the host.
//!
//! ## Architecture
//!
//! The crate follows a modular architecture with clear separation of concerns:
//!
//! - `config`: Configuration management and validation
//! - `logging`: Structured logging and tracing
//! - `api`: Monitoring API client and typed responses
//! - `entry`: Configuration entries and runtime data
//! - `platform`: Host platform forwarding seam
//! - `setup`: Entry setup, validation, and unload

pub mod api;
pub mod config;
pub mod entry;
pub mod error;
pub mod logging;
pub mod platform;
pub mod setup;

// Re-export commonly used types
pub use api::{SiteApi, SolarEdgeClient};
pub use config::Config;
pub use entry::{ConfigEntry, RuntimeData};
pub use error::{AethonError, Result};
pub use setup::{SetupOutcome, activate, setup_entry, unload_entry, validate_site};
