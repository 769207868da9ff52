//! Authentication module for the session cookie contract.
//!
//! This module owns everything token-shaped in the gateway: the login and
//! logout endpoints (JSON and HTML-form variants), the session extractor that
//! reads the cookie on every request, and the display-identity decode used by
//! the page layout.

pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod service;

// Re-exports for convenience
pub use handlers::*;
pub use middleware::*;
pub use models::*;
pub use routes::*;
pub use service::*;
