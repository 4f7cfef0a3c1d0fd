//! Typed navigation state.
//!
//! The destination a detail view needs ("which caller invoked me") travels
//! inside the route itself instead of a mutable global set before
//! navigating; there is no set-flag-then-navigate ordering to get wrong.

use std::sync::Mutex;

/// Which caller opened the prediction detail view. Decides how the id in
/// the route is interpreted and therefore which endpoint is fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictionSource {
    /// Opened from the predictions list: the id is a prediction id.
    List,
    /// Opened from a test-result detail: the id is a test-result id and
    /// all of its predictions are fetched.
    TestResult,
}

/// Shell destinations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Landing,
    Login,
    Register,
    Dashboard,
    Patients,
    PatientDetails { patient_id: i64 },
    TestResults { patient_id: i64 },
    PredictionDetail { id: i64, source: PredictionSource },
    TreatmentPlans,
    Rooms,
    AdminDashboard,
    Settings,
    Profile,
}

/// Current-route cell. Views navigate through it; the session guard
/// forces it to [`Route::Login`] on detected expiry.
pub struct Navigator {
    current: Mutex<Route>,
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            current: Mutex::new(Route::Landing),
        }
    }

    pub fn current(&self) -> Route {
        self.current
            .lock()
            .map(|route| route.clone())
            .unwrap_or(Route::Landing)
    }

    pub fn navigate(&self, route: Route) {
        tracing::debug!(?route, "navigate");
        if let Ok(mut current) = self.current.lock() {
            *current = route;
        }
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}
