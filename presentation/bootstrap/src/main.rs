use dotenvy::dotenv;
use tokio::sync::oneshot;

mod config;
mod setup;

use config::firebase_config::FirebaseConfig;
use setup::{dependency_injection::DependencyContainer, startup::Startup};

/// Bootstrap Entry Point
///
/// Loads the Firebase project configuration, wires dependencies, and runs the
/// one-shot startup sequence once the host signals readiness.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration
    let config = FirebaseConfig::from_env();

    // 4. Wire dependencies
    let container = DependencyContainer::new();

    // 5. Run the startup sequence behind the host's ready trigger
    let (ready_tx, ready_rx) = oneshot::channel();
    let startup = tokio::spawn(Startup::run(
        ready_rx,
        container.initialize_app,
        config.into_project_config(),
    ));

    // The hosting process is ready as soon as wiring completes.
    let _ = ready_tx.send(());

    startup.await??;

    Ok(())
}
