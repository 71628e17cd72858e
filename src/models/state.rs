use tracing::info;

use crate::services::{phase_diagram::PhaseDiagram, session::SessionService};

/// Application state shared across requests. Needs to be thread-safe.
pub struct AppState {
    /// Signs and verifies session cookies.
    pub session_service: SessionService,
    /// Phase-change calculator over the fixed reference points.
    pub phase_diagram: PhaseDiagram,
}

impl AppState {
    /// Creates a new application state.
    ///
    /// # Arguments
    ///
    /// * `session_service` - Service for signing session cookies
    pub fn new(session_service: SessionService) -> Self {
        info!(
            session_max_age_secs = session_service.max_age().as_secs(),
            "Initializing application state"
        );

        Self {
            session_service,
            phase_diagram: PhaseDiagram::new(),
        }
    }
}
