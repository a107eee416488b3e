//! Screenwise HTTP server entrypoint.

use std::net::SocketAddr;
use std::time::Duration;

use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tokio::signal;

use screenwise::config::Config;
use screenwise::gateway::{HandlerState, create_router_with_state};
use screenwise::scoring::{EvaluatorMode, HeuristicEvaluator, ModelBackedEvaluator};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if std::env::args().any(|arg| arg == "--health-check") {
        std::process::exit(run_health_check().await);
    }

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    config.validate()?;
    let addr: SocketAddr = config.socket_addr().parse()?;

    tracing::info!(
        bind_addr = %config.bind_addr,
        port = config.port,
        evaluator = %config.evaluator,
        "Screenwise starting"
    );

    let app = match config.evaluator {
        EvaluatorMode::Heuristic => {
            create_router_with_state(HandlerState::new(HeuristicEvaluator::new()))
        }
        EvaluatorMode::ModelBacked => {
            // validate() guarantees a model identifier in this mode.
            let model = config.model.clone().unwrap_or_default();
            tracing::warn!(
                model = %model,
                "Model-backed evaluator has no model client, answers use the heuristic fallback"
            );
            create_router_with_state(HandlerState::new(ModelBackedEvaluator::new(model)))
        }
    };

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Screenwise shutdown complete");
    Ok(())
}

async fn run_health_check() -> i32 {
    let url = match Config::from_env() {
        Ok(config) => config.health_check_url(),
        Err(_) => return 1,
    };

    let client = match reqwest::Client::builder()
        .timeout(Duration::from_secs(1))
        .build()
    {
        Ok(client) => client,
        Err(_) => return 1,
    };

    match client.get(&url).send().await {
        Ok(res) if res.status().is_success() => 0,
        _ => 1,
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
