//! # Middleware Components
//!
//! Cross-cutting request processing shared by several routes.

pub mod session;

pub use session::session_middleware;
