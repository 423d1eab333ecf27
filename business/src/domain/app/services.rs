use async_trait::async_trait;

use super::errors::BackendError;
use super::model::ProjectConfig;

/// Service port for the external backend SDK this component configures and
/// starts. Failure modes belong to the SDK; callers propagate them as-is.
#[async_trait]
pub trait BackendAppService: Send + Sync {
    /// Bind the SDK to the project described by `config`.
    async fn initialize_app(&self, config: &ProjectConfig) -> Result<(), BackendError>;

    /// Enable analytics collection for the already-initialized app.
    async fn enable_analytics(&self) -> Result<(), BackendError>;
}
