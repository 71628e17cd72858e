//! # Utility Modules
//!
//! This module contains utility functions and constants used throughout the
//! repair bay service.
//!
//! ## Available Utilities
//!
//! - **Constants** (`constant`) - Application-wide configuration constants
//! - **HTML** (`html`) - Page rendering for the repair bay
//! - **Secrets** (`secret`) - Secret loading from env vars or secret files
//! - **Validators** (`validator`) - Input validation helpers

pub mod constant;
pub mod html;
pub mod secret;
pub mod validator;
