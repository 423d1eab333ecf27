use async_trait::async_trait;
use once_cell::sync::OnceCell;
use url::Url;

use business::domain::app::errors::BackendError;
use business::domain::app::model::ProjectConfig;
use business::domain::app::services::BackendAppService;

use crate::client::FirebaseClient;

/// Handle for an initialized Firebase app.
///
/// Construction is local only; network traffic starts when the handle is
/// consumed, mirroring the web SDK's `initializeApp`.
pub struct FirebaseApp {
    pub client: FirebaseClient,
    pub project_id: String,
    pub app_id: String,
    pub auth_domain: String,
    pub messaging_sender_id: String,
    measurement_id: Option<String>,
}

impl FirebaseApp {
    fn new(config: &ProjectConfig) -> Result<Self, BackendError> {
        if config.api_key.is_empty() || config.project_id.is_empty() || config.app_id.is_empty() {
            return Err(BackendError::InvalidConfiguration);
        }
        Url::parse(&config.database_url).map_err(|_| BackendError::InvalidConfiguration)?;

        Ok(Self {
            client: FirebaseClient::new(
                config.api_key.clone(),
                config.database_url.clone(),
                config.storage_bucket.clone(),
            ),
            project_id: config.project_id.clone(),
            app_id: config.app_id.clone(),
            auth_domain: config.auth_domain.clone(),
            messaging_sender_id: config.messaging_sender_id.clone(),
            measurement_id: config.measurement_id.clone(),
        })
    }
}

/// Handle for one enabled analytics stream.
pub struct FirebaseAnalytics {
    pub measurement_id: String,
}

/// SDK adapter holding the write-once app and analytics handles.
pub struct BackendAppServiceFirebase {
    app: OnceCell<FirebaseApp>,
    analytics: OnceCell<FirebaseAnalytics>,
}

impl BackendAppServiceFirebase {
    pub fn new() -> Self {
        Self {
            app: OnceCell::new(),
            analytics: OnceCell::new(),
        }
    }

    pub fn app(&self) -> Option<&FirebaseApp> {
        self.app.get()
    }

    pub fn analytics(&self) -> Option<&FirebaseAnalytics> {
        self.analytics.get()
    }
}

impl Default for BackendAppServiceFirebase {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BackendAppService for BackendAppServiceFirebase {
    async fn initialize_app(&self, config: &ProjectConfig) -> Result<(), BackendError> {
        let app = FirebaseApp::new(config)?;
        self.app.set(app).map_err(|_| BackendError::DuplicateApp)
    }

    async fn enable_analytics(&self) -> Result<(), BackendError> {
        let app = self.app.get().ok_or(BackendError::AppNotInitialized)?;
        let measurement_id = app
            .measurement_id
            .clone()
            .filter(|id| !id.is_empty())
            .ok_or(BackendError::AnalyticsUnavailable)?;

        // Repeated calls hand back the already-enabled stream.
        let _ = self.analytics.set(FirebaseAnalytics { measurement_id });
        Ok(())
    }
}
