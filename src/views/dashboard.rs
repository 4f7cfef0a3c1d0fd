use std::sync::Arc;

use crate::api;
use crate::client::ApiContext;
use crate::models::DashboardStats;

/// Doctor/patient dashboard: headline figures only.
pub struct DashboardController {
    ctx: Arc<ApiContext>,
    pub stats: Option<DashboardStats>,
    pub loading: bool,
}

impl DashboardController {
    pub fn new(ctx: Arc<ApiContext>) -> Self {
        Self {
            ctx,
            stats: None,
            loading: false,
        }
    }

    /// Fetch the stats; on failure the spinner stops and the previous
    /// figures (if any) stay on screen.
    pub fn load(&mut self) {
        self.loading = true;
        match api::dashboard::stats(&self.ctx) {
            Ok(stats) => self.stats = Some(stats),
            Err(e) => tracing::debug!(error = %e, "dashboard stats load failed"),
        }
        self.loading = false;
    }
}
