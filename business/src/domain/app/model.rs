use serde::{Deserialize, Serialize};

/// Identifiers binding the backend SDK to one Firebase project instance.
///
/// Built once at process start and never mutated afterwards; the whole record
/// is handed to the initializer by value instead of living as global state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub api_key: String,
    pub auth_domain: String,
    pub database_url: String,
    pub project_id: String,
    pub storage_bucket: String,
    pub messaging_sender_id: String,
    pub app_id: String,
    pub measurement_id: Option<String>,
}

impl ProjectConfig {
    /// Analytics collection is only enabled when a non-empty measurement id
    /// is present.
    pub fn has_measurement_id(&self) -> bool {
        self.measurement_id
            .as_deref()
            .is_some_and(|id| !id.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_measurement_id(measurement_id: Option<&str>) -> ProjectConfig {
        ProjectConfig {
            api_key: "AIzaSyTestKey".to_string(),
            auth_domain: "quizzed-base.firebaseapp.com".to_string(),
            database_url: "https://quizzed-base-default-rtdb.europe-west1.firebasedatabase.app"
                .to_string(),
            project_id: "quizzed-base".to_string(),
            storage_bucket: "quizzed-base.firebasestorage.app".to_string(),
            messaging_sender_id: "290804717986".to_string(),
            app_id: "1:290804717986:web:e5b0b7e845cb51ee3ffafb".to_string(),
            measurement_id: measurement_id.map(str::to_string),
        }
    }

    #[test]
    fn should_report_measurement_id_when_present() {
        let config = config_with_measurement_id(Some("G-VKXENK378H"));

        assert!(config.has_measurement_id());
    }

    #[test]
    fn should_not_report_measurement_id_when_absent() {
        let config = config_with_measurement_id(None);

        assert!(!config.has_measurement_id());
    }

    #[test]
    fn should_not_report_measurement_id_when_empty() {
        let config = config_with_measurement_id(Some(""));

        assert!(!config.has_measurement_id());
    }
}
