mod phase;
mod session;
mod ship_system;
mod state;

pub use phase::{
    ALERT_MESSAGE, ALERT_TEMPERATURE, CRITICAL_POINT, NORMAL_POINT, PhaseDiagramResult,
    ReferencePoint, SAFE_MESSAGE,
};
pub use session::{Session, SessionData};
pub use ship_system::ShipSystem;
pub use state::AppState;
