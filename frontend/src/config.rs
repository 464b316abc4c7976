use serde::Deserialize;

#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3000"  // Development URL when running `trunk serve` next to the backend
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production: the backend serves the bundle
}

/// Local storage key holding the usage event log.
pub const EVENTS_STORAGE_KEY: &str = "shieldline_events";

/// Body of `GET /api/maintenance`. The backend's `MAINTENANCE_MODE` is the only
/// switch; the client asks for it once at startup.
#[derive(Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct MaintenanceStatus {
    pub maintenance: bool,
}

/// Simulated latency for form submissions.
pub const SUBMIT_DELAY_MS: u32 = 1500;

pub const CONTACT_EMAIL: &str = "hello@shieldline.example";
pub const CONTACT_PHONE: &str = "+82 2-555-0142";

#[cfg(test)]
mod tests {
    use super::MaintenanceStatus;

    #[test]
    fn reads_backend_status_body() {
        let status: MaintenanceStatus = serde_json::from_str(r#"{"maintenance":true}"#).unwrap();
        assert!(status.maintenance);
        let status: MaintenanceStatus = serde_json::from_str(r#"{"maintenance":false}"#).unwrap();
        assert!(!status.maintenance);
        assert!(serde_json::from_str::<MaintenanceStatus>("{}").is_err());
    }
}
