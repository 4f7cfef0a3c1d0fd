use serde::Deserialize;

/// Doctor/patient dashboard figures (`dashboard-stats/`).
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardStats {
    pub total_patients: i64,
    pub new_patients: i64,
    pub success_rate: f64,
    pub total_predictions: i64,
    pub pending_predictions: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserStats {
    pub total: i64,
    pub doctors: i64,
    pub patients: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResourceStats {
    pub total: i64,
    pub available: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelPerformance {
    pub accuracy: f64,
    pub total_predictions: i64,
}

/// System-wide figures for the admin dashboard (`admin/stats/`).
#[derive(Debug, Clone, Deserialize)]
pub struct SystemStats {
    pub users: UserStats,
    pub resources: ResourceStats,
    pub model_performance: ModelPerformance,
}
