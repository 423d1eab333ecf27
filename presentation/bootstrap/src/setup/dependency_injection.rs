use std::sync::Arc;

use logger::TracingLogger;

use firebase::app::BackendAppServiceFirebase;

use business::application::app::initialize::InitializeAppUseCaseImpl;
use business::domain::app::use_cases::initialize::InitializeAppUseCase;

pub struct DependencyContainer {
    pub initialize_app: Arc<dyn InitializeAppUseCase>,
}

impl DependencyContainer {
    pub fn new() -> Self {
        let logger = Arc::new(TracingLogger);

        // Infrastructure adapters
        let sdk = Arc::new(BackendAppServiceFirebase::new());

        let initialize_app = Arc::new(InitializeAppUseCaseImpl { sdk, logger });

        Self { initialize_app }
    }
}
