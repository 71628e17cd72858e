//! # Business Logic Services
//!
//! Services encapsulate domain-specific functionality and provide clean
//! interfaces for use by HTTP handlers and middleware.
//!
//! ## Available Services
//!
//! - **Phase diagram** (`phase_diagram`) - Pressure to temperature/volume interpolation
//! - **Session** (`session`) - Signing and verification of session cookies

pub mod phase_diagram;
pub mod session;
