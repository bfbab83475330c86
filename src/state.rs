use crate::api::BackendClient;
use crate::config::AppConfig;

/// Phase of the submission flow. At most one submission is in flight at a
/// time; the Generate button stays desensitized outside `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiPhase {
    Idle,
    FetchingLoadingFragment,
    AwaitingResult,
    Rendering,
}

/// Central application state holding shared data and clients.
pub struct AppState {
    /// Persisted configuration (backend URL).
    pub config: AppConfig,
    /// Backend client, rebuilt when the configuration changes.
    pub client: Option<BackendClient>,
    /// Current phase of the submission flow.
    pub phase: UiPhase,
    /// Cleaned report of the last successful submission, kept for export.
    pub last_report: Option<String>,
    /// Organization type of the last successful submission, used for the
    /// suggested export filename.
    pub last_org_type: Option<String>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let client = BackendClient::new(&config.backend_url).ok();
        Self {
            config,
            client,
            phase: UiPhase::Idle,
            last_report: None,
            last_org_type: None,
        }
    }

    /// Rebuilds the backend client from the current configuration.
    pub fn rebuild_client(&mut self) {
        self.client = BackendClient::new(&self.config.backend_url).ok();
    }

    pub fn is_busy(&self) -> bool {
        self.phase != UiPhase::Idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_idle_with_client() {
        let state = AppState::new(AppConfig::default());
        assert!(!state.is_busy());
        assert!(state.client.is_some());
        assert!(state.last_report.is_none());
    }

    #[test]
    fn test_rebuild_client_follows_config() {
        let mut state = AppState::new(AppConfig::default());
        state.config.backend_url = "http://10.0.0.2:9000/".to_string();
        state.rebuild_client();
        assert_eq!(
            state.client.as_ref().map(|c| c.base_url()),
            Some("http://10.0.0.2:9000")
        );
    }

    #[test]
    fn test_busy_outside_idle() {
        let mut state = AppState::new(AppConfig::default());
        state.phase = UiPhase::AwaitingResult;
        assert!(state.is_busy());
        state.phase = UiPhase::Idle;
        assert!(!state.is_busy());
    }
}
