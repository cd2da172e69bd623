//! Configuration module for FinDash
//!
//! This module provides configuration management including:
//! - Data directory resolution
//! - User settings persistence (backend selection, budget targets)

pub mod paths;
pub mod settings;

pub use paths::FinDashPaths;
pub use settings::{Settings, StoreBackend};
