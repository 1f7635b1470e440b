use tracing::{info, error};
use tracing_subscriber::EnvFilter;

mod api;
mod config;
mod models;
mod services;
mod utils;

use api::tanka::TankaClient;
use config::Config;
use services::chart_service::FileSink;
use services::report_service;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env()
            .add_directive("fuel_chart=info".parse().unwrap()))
        .with_target(true)
        .init();

    let config = Config::from_env();
    let source = TankaClient::with_url(config.api_url.clone());
    info!("⛽ Fetching fuel prices from {}", source.url());

    let sink = FileSink::new(&config.output_path);

    match report_service::run(&source, &sink, &config.chart_options()).await {
        Ok(fuel) => {
            info!(
                "Chart with {} dates written to {}",
                fuel.petrol95.len(),
                sink.path().display()
            );
        }
        Err(e) => {
            error!("Failed to produce chart: {}", e);
            panic!("Unable to write chart to {}: {}", sink.path().display(), e);
        }
    }
}
