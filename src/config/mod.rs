//! Configuration loading and management for the staff engine.
//!
//! This module loads engine settings (warning window, page size, week start,
//! search fields and certification status policy) from YAML.
//!
//! # Example
//!
//! ```no_run
//! use staff_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/engine.yaml").unwrap();
//! println!("Warning window: {} days", config.config().warning_window_days);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{DEFAULT_PAGE_SIZE, DEFAULT_WARNING_WINDOW_DAYS, EngineConfig};
