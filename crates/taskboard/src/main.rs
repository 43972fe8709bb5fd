use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use listenfd::ListenFd;
use taskboard_core::storage::TaskRepository;
use tokio::{net::TcpListener, signal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use taskboard::{
    app::create_app,
    config::{Config, StorageBackend},
    state::AppState,
    storage::{DynamoDbTaskRepository, InMemoryTaskRepository},
};

/// Taskboard - Track tasks in a single DynamoDB table
#[derive(Parser, Debug)]
#[command(name = "taskboard")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Host address to bind the server to
    #[arg(long, short = 'H', default_value = "0.0.0.0", env = "HOST")]
    host: String,

    /// Port to listen on
    #[arg(long, short, default_value = "3000", env = "PORT")]
    port: u16,

    /// Storage backend for tasks
    #[arg(long, value_enum, default_value_t = StorageBackend::Dynamodb, env = "STORAGE_BACKEND")]
    storage: StorageBackend,

    /// Target DynamoDB Local with static credentials
    #[arg(long, env = "TASKBOARD_LOCAL")]
    local: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env();

    init_tracing(config.log_json);

    let task_repo: Arc<dyn TaskRepository> = match cli.storage {
        StorageBackend::Dynamodb => {
            let store = config.store_config(cli.local);
            tracing::info!(store = %store.target_display(), "Using DynamoDB storage");
            Arc::new(DynamoDbTaskRepository::connect(&store).await)
        }
        StorageBackend::Inmemory => {
            tracing::warn!("Using in-memory storage; tasks are lost on shutdown");
            Arc::new(InMemoryTaskRepository::new())
        }
    };

    let app = create_app(AppState::new(task_repo), config.request_timeout());

    // Auto-reload support via listenfd
    let mut listenfd = ListenFd::from_env();
    let listener = match listenfd.take_tcp_listener(0)? {
        Some(listener) => {
            listener.set_nonblocking(true)?;
            TcpListener::from_std(listener)?
        }
        None => {
            let addr = format!("{}:{}", cli.host, cli.port);
            TcpListener::bind(&addr).await?
        }
    };

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

fn init_tracing(json: bool) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "taskboard=debug,tower_http=debug".into()),
        )
        .with(json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json).then(tracing_subscriber::fmt::layer))
        .init();
}

/// Wait for shutdown signals (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down...");
        }
    }
}
