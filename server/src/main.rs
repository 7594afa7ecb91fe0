mod config;
mod routes;
mod services;
mod state;

use tracing_subscriber::EnvFilter;

use crate::config::{AppConfig, RunMode, leptos_options};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let leptos = match leptos_options() {
        Ok(options) => options,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };
    if leptos.output_name.is_empty() {
        tracing::warn!("LEPTOS_OUTPUT_NAME not set, serving pages without hydration");
    }

    if config.session.using_default_secret {
        match config.mode {
            RunMode::Production => {
                tracing::warn!("SESSION_SECRET not set, signing theme cookies with the built-in default");
            }
            RunMode::Development => tracing::info!("SESSION_SECRET not set, using development default"),
        }
    }

    let port = config.port;
    let mode = config.mode;
    let state = state::AppState::new(config, leptos).expect("session store init failed");

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, ?mode, "todo-server listening");
    axum::serve(listener, app).await.expect("server failed");
}
