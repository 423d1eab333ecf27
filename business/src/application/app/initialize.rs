use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::app::errors::BackendError;
use crate::domain::app::services::BackendAppService;
use crate::domain::app::use_cases::initialize::{InitializeAppParams, InitializeAppUseCase};
use crate::domain::logger::Logger;

pub struct InitializeAppUseCaseImpl {
    pub sdk: Arc<dyn BackendAppService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl InitializeAppUseCase for InitializeAppUseCaseImpl {
    async fn execute(&self, params: InitializeAppParams) -> Result<(), BackendError> {
        // SDK failures propagate untranslated; recovery is owned by the SDK.
        self.sdk.initialize_app(&params.config).await?;

        if params.config.has_measurement_id() {
            self.sdk.enable_analytics().await?;
        }

        self.logger.info("Firebase initialized successfully");

        Ok(())
    }
}
