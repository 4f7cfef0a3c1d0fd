//! Wire payload types for the PrognoSys backend.
//!
//! Field names mirror the backend's JSON exactly (snake_case responses,
//! a handful of camelCase request bodies kept via serde renames).

pub mod enums;
pub mod notification;
pub mod patient;
pub mod prediction;
pub mod resource;
pub mod room;
pub mod settings;
pub mod stats;
pub mod test_result;
pub mod treatment;
pub mod user;

pub use enums::{
    AllocationStatus, ChestPainType, Gender, NotificationPriority, NotificationType,
    PredictionStatus, RestingEcg, RoomStatus, RoomType, Theme, UserRole, YesNo,
};
pub use notification::Notification;
pub use patient::{AssignedDoctor, PatientDetails, PatientSummary};
pub use prediction::Prediction;
pub use resource::Resource;
pub use room::Room;
pub use settings::{UserSettings, UserSettingsPatch};
pub use stats::{DashboardStats, ModelPerformance, ResourceStats, SystemStats, UserStats};
pub use test_result::{SubmitOutcome, TestResult, TestResultDetail, TestResultForm};
pub use treatment::TreatmentPlan;
pub use user::{
    ChangePasswordRequest, Credentials, LoginResponse, ManagedUser, RegisterRequest,
    RegisterResponse, UserIdentity, UserProfile,
};

/// Errors from model parsing and enum conversion.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("Invalid {field} value: {value}")]
    InvalidEnum { field: String, value: String },
}
