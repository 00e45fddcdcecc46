use anyhow::Context;
use clap::Parser;

mod app_context;
mod cli;
mod dataset;
mod game;
mod geometry;
mod health;
mod http;
mod logging;
mod map;
mod sessions;
mod storage;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = cli::Args::parse();
    logging::init(&args);
    tracing::info!("Initialized logging.");

    let app_context = app_context::init(&args);
    dataset::init(&args, app_context.dataset.clone());
    storage::init(&args, app_context.sessions.clone());
    let router = http::router::new(&args, app_context);

    let listener = tokio::net::TcpListener::bind(args.listen_address)
        .await
        .with_context(|| format!("Failed to bind to {}.", args.listen_address))?;
    tracing::info!(
        listen_address = %args.listen_address,
        cities = %args.cities,
        "Serving the game."
    );
    axum::serve(listener, router)
        .await
        .context("Server stopped unexpectedly.")
}
