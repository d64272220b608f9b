//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! controller, api client, driver loop
//!     → tracing events and spans (structured fields, request IDs)
//!     → logging.rs subscriber (stderr, pretty or JSON)
//! ```

pub mod logging;

pub use logging::init_logging;
