//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → HbnbConfig (validated, immutable)
//!     → handed to the API client, controller and page writer
//! ```
//!
//! Every section has defaults, so an empty file (or no file at all) yields a
//! configuration pointing at a local HBnB API on port 5001.

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{ApiConfig, HbnbConfig, ObservabilityConfig, PageConfig, TimeoutConfig};
pub use validation::{validate_config, ValidationError};
