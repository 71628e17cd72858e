//! # HTTP Request Handlers
//!
//! Each handler is responsible for processing one endpoint and returning an
//! appropriate response.
//!
//! ## Available Handlers
//!
//! - **Health Check** (`health_check`) - Application health monitoring
//! - **Phase Change** (`phase_change`) - Pressure to temperature/volume calculator
//! - **Repair Bay** (`repair_bay`) - HTML page driven by session state
//! - **Status** (`status`) - Records a damaged ship system in the session
//! - **Teapot** (`teapot`) - Always answers 418

mod health_check;
mod phase_change;
mod repair_bay;
mod status;
mod teapot;

pub use health_check::*;
pub use phase_change::*;
pub use repair_bay::*;
pub use status::*;
pub use teapot::*;
