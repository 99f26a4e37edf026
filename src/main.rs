use clap::Parser;
use cli::Args;
use std::process::ExitCode;

mod app_context;
mod cli;
mod credentials;
mod gate;
mod geo;
mod health;
mod hoodmap;
mod http;
mod logging;
mod photos;
mod places;
mod proximity;
mod reviews;
mod storage;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    logging::init();
    tracing::info!("Initialized logging.");

    let app_context = match app_context::init(&args) {
        Ok(app_context) => app_context,
        Err(err) => {
            tracing::error!(%err, "Failed to initialize the application.");
            return ExitCode::FAILURE;
        }
    };
    let router = http::router::new(&args, app_context);

    let listener = match tokio::net::TcpListener::bind(args.listen_address).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!(%err, address = %args.listen_address, "Failed to bind.");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(address = %args.listen_address, "Listening.");
    if let Err(err) = axum::serve(listener, router).await {
        tracing::error!(%err, "Server stopped unexpectedly.");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
