use async_trait::async_trait;

use crate::domain::app::errors::BackendError;
use crate::domain::app::model::ProjectConfig;

pub struct InitializeAppParams {
    pub config: ProjectConfig,
}

#[async_trait]
pub trait InitializeAppUseCase: Send + Sync {
    async fn execute(&self, params: InitializeAppParams) -> Result<(), BackendError>;
}
