use std::path::PathBuf;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

/// Application-level constants
pub const APP_NAME: &str = "PrognoSys";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Origin + path prefix all backend calls are relative to.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/api/";

/// Fixed interval between background notification fetches.
pub const NOTIFICATION_POLL_INTERVAL: Duration = Duration::from_secs(10);

/// How long a toast stays visible before auto-dismissal.
pub const TOAST_TTL: Duration = Duration::from_secs(6);

/// Get the application data directory
/// ~/PrognoSys/ on all platforms (user-visible, shared across processes)
pub fn app_data_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Cannot determine home directory");
    home.join(APP_NAME)
}

/// Durable session file. Any process sharing this path shares the session
/// (last-write-wins, no locking).
pub fn session_file() -> PathBuf {
    app_data_dir().join("session.json")
}

/// Default log filter when RUST_LOG is unset.
pub fn default_log_filter() -> &'static str {
    "prognosys_client=info"
}

/// Install the global tracing subscriber. Call once at process start;
/// embedding shells that install their own subscriber can skip this.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_log_filter())),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_data_dir_under_home() {
        let dir = app_data_dir();
        let home = dirs::home_dir().unwrap();
        assert!(dir.starts_with(home));
        assert!(dir.ends_with("PrognoSys"));
    }

    #[test]
    fn session_file_under_app_data() {
        let file = session_file();
        assert!(file.starts_with(app_data_dir()));
        assert!(file.ends_with("session.json"));
    }

    #[test]
    fn base_url_ends_with_api_prefix() {
        assert!(DEFAULT_BASE_URL.ends_with("/api/"));
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, env!("CARGO_PKG_VERSION"));
    }
}
