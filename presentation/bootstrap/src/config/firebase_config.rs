use std::env;

use business::domain::app::model::ProjectConfig;

/// Firebase project identifiers for the Quizzed app, loaded from the
/// environment.
pub struct FirebaseConfig {
    pub api_key: String,
    pub auth_domain: String,
    pub database_url: String,
    pub project_id: String,
    pub storage_bucket: String,
    pub messaging_sender_id: String,
    pub app_id: String,
    pub measurement_id: Option<String>,
}

impl FirebaseConfig {
    /// Load the Firebase project configuration from environment variables
    ///
    /// Environment variables:
    /// - FIREBASE_API_KEY (required)
    /// - FIREBASE_AUTH_DOMAIN (required)
    /// - FIREBASE_DATABASE_URL (required)
    /// - FIREBASE_PROJECT_ID (required)
    /// - FIREBASE_STORAGE_BUCKET (required)
    /// - FIREBASE_MESSAGING_SENDER_ID (required)
    /// - FIREBASE_APP_ID (required)
    /// - FIREBASE_MEASUREMENT_ID (optional; enables analytics when non-empty)
    pub fn from_env() -> Self {
        Self {
            api_key: env::var("FIREBASE_API_KEY").expect("FIREBASE_API_KEY must be set"),
            auth_domain: env::var("FIREBASE_AUTH_DOMAIN")
                .expect("FIREBASE_AUTH_DOMAIN must be set"),
            database_url: env::var("FIREBASE_DATABASE_URL")
                .expect("FIREBASE_DATABASE_URL must be set"),
            project_id: env::var("FIREBASE_PROJECT_ID").expect("FIREBASE_PROJECT_ID must be set"),
            storage_bucket: env::var("FIREBASE_STORAGE_BUCKET")
                .expect("FIREBASE_STORAGE_BUCKET must be set"),
            messaging_sender_id: env::var("FIREBASE_MESSAGING_SENDER_ID")
                .expect("FIREBASE_MESSAGING_SENDER_ID must be set"),
            app_id: env::var("FIREBASE_APP_ID").expect("FIREBASE_APP_ID must be set"),
            measurement_id: env::var("FIREBASE_MEASUREMENT_ID")
                .ok()
                .filter(|id| !id.is_empty()),
        }
    }

    /// Convert into the domain configuration record handed to the initializer.
    pub fn into_project_config(self) -> ProjectConfig {
        ProjectConfig {
            api_key: self.api_key,
            auth_domain: self.auth_domain,
            database_url: self.database_url,
            project_id: self.project_id,
            storage_bucket: self.storage_bucket,
            messaging_sender_id: self.messaging_sender_id,
            app_id: self.app_id,
            measurement_id: self.measurement_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_preserve_all_fields_when_converting_to_project_config() {
        // Arrange
        let config = FirebaseConfig {
            api_key: "AIzaSyTestKey".to_string(),
            auth_domain: "quizzed-base.firebaseapp.com".to_string(),
            database_url: "https://quizzed-base-default-rtdb.europe-west1.firebasedatabase.app"
                .to_string(),
            project_id: "quizzed-base".to_string(),
            storage_bucket: "quizzed-base.firebasestorage.app".to_string(),
            messaging_sender_id: "290804717986".to_string(),
            app_id: "1:290804717986:web:e5b0b7e845cb51ee3ffafb".to_string(),
            measurement_id: Some("G-VKXENK378H".to_string()),
        };

        // Act
        let project_config = config.into_project_config();

        // Assert
        assert_eq!(project_config.api_key, "AIzaSyTestKey");
        assert_eq!(project_config.auth_domain, "quizzed-base.firebaseapp.com");
        assert_eq!(project_config.project_id, "quizzed-base");
        assert_eq!(
            project_config.app_id,
            "1:290804717986:web:e5b0b7e845cb51ee3ffafb"
        );
        assert_eq!(
            project_config.measurement_id.as_deref(),
            Some("G-VKXENK378H")
        );
    }
}
