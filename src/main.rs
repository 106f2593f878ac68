use clap::Parser;
use countrysrv::{
    api,
    cli::Args,
    config::Config,
    services::{country::CountryService, gate, rate_limit::RateLimiter},
    AppState,
};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let config = match Config::from_env() {
        Ok(mut config) => {
            args.apply_to(&mut config);
            Arc::new(config)
        }
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let country_service = match CountryService::new(&config.dataset_path()) {
        Ok(service) => Arc::new(service),
        Err(e) => {
            eprintln!("Failed to initialize country service: {}", e);
            std::process::exit(1);
        }
    };

    info!(
        "Loaded {} countries from {}",
        country_service.len(),
        config.dataset_path().display()
    );

    let gate = gate::from_config(&config);
    let rate_limiter = Arc::new(RateLimiter::new(
        config.rate_limit_max,
        Duration::from_secs(config.rate_limit_window_secs),
    ));

    let app_state = AppState {
        config: config.clone(),
        country_service,
        gate,
        rate_limiter,
    };

    let app = api::router(app_state);

    let listener = TcpListener::bind(&format!("0.0.0.0:{}", config.server_port))
        .await
        .unwrap();

    println!("Server listening on http://0.0.0.0:{}", config.server_port);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .unwrap();
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
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    println!("Signal received, starting graceful shutdown");
}
