#![doc = include_str!("../README.md")]

mod api;
mod cli;
mod error;
mod metrics;
mod prelude;
mod quantity;
mod scrape;

use clap::{Parser, crate_version};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use crate::{
    api::envertec::{BASE_URL, Credentials},
    cli::Args,
    prelude::*,
    scrape::AppState,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result {
    let _ = dotenvy::dotenv();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).without_time().compact().init();
    let args = Args::parse();
    info!(version = crate_version!(), args.bind_address, "starting…");
    ensure!(args.metrics_path.starts_with('/'), "the metrics path must start with `/`");

    let credentials = Credentials::try_from(args.credentials.clone())
        .inspect_err(|error| warn!("{error}, every scrape is going to fail"))
        .ok();
    let state = AppState { credentials, base_url: BASE_URL.to_owned() };
    let app = scrape::router(&args.metrics_path, state);

    let listener =
        TcpListener::bind(&args.bind_address).await.context("failed to bind to the address")?;
    info!(args.metrics_path, "serving…");
    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

    info!("done!");
    Ok(())
}

/// Per <https://github.com/tokio-rs/axum/blob/main/examples/graceful-shutdown/src/main.rs>.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c().await.expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
