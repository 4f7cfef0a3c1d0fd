//! Representative view controllers.
//!
//! Pure plumbing by design: each controller owns a local copy of the data
//! for one screen plus a loading flag, refetches on every (re)load, and
//! leans on the request guard for all cross-cutting failure handling. If
//! a load overlaps an earlier one, the last to resolve wins; no ordering
//! is guaranteed across concurrent calls.

pub mod dashboard;
pub mod predictions;
pub mod rooms;

pub use dashboard::DashboardController;
pub use predictions::PredictionsController;
pub use rooms::RoomBoardController;
