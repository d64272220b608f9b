//! Lifecycle management.
//!
//! # Data Flow
//! ```text
//! Ctrl-C (signals.rs)
//!     → Shutdown::trigger (shutdown.rs)
//!     → driver loop stops reading events
//!     → page is written, process exits
//! ```

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
