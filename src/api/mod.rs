//! HBnB REST API client.
//!
//! # Data Flow
//! ```text
//! controller / hbnb-cli
//!     → client.rs (reqwest, X-Request-Id, timeouts)
//!     → HBnB API (/api/v1/...)
//!     → types.rs (serde wire types)
//!     → Result<T, ApiError> (error.rs)
//! ```

pub mod client;
pub mod error;
pub mod types;

pub use client::{ApiClient, X_REQUEST_ID};
pub use error::{ApiError, ApiResult};
pub use types::{Amenity, City, Place, State, Stats, StatusResponse};
