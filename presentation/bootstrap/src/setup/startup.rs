use std::sync::Arc;

use tokio::sync::oneshot;

use business::domain::app::model::ProjectConfig;
use business::domain::app::use_cases::initialize::{InitializeAppParams, InitializeAppUseCase};

/// One-shot startup sequence: wait for the host's ready trigger, then
/// initialize the backend SDK with the given configuration.
pub struct Startup;

impl Startup {
    pub async fn run(
        ready: oneshot::Receiver<()>,
        initialize_app: Arc<dyn InitializeAppUseCase>,
        config: ProjectConfig,
    ) -> anyhow::Result<()> {
        ready.await?;

        initialize_app
            .execute(InitializeAppParams { config })
            .await?;

        Ok(())
    }
}
