#![recursion_limit = "256"]

mod config;
mod proxy;
mod routes;
mod state;

use std::process::ExitCode;

/// Fatal startup failures.
#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error("backend client: {0}")]
    Backend(#[from] reqwest::Error),
    #[error("{0}")]
    Leptos(String),
    #[error("server io: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "painel failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), StartupError> {
    let config = config::Config::from_env()?;
    let state = state::AppState::new(&config)?;
    let app = routes::leptos_app(state).map_err(StartupError::Leptos)?;

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!(port = config.port, backend = %config.backend_url, "painel listening");
    axum::serve(listener, app).await?;
    Ok(())
}
