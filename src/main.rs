use std::net::TcpListener;

use env_logger::Env;
use venturelens::{
    configuration::get_configuration,
    services::{OpenaiClient, PageFetcher},
    startup::run,
};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let configuration = get_configuration().expect("Failed to read configuration.");

    let address = format!(
        "{}:{}",
        configuration.application.host, configuration.application.port
    );
    let listener = TcpListener::bind(address)?;

    let fetcher = PageFetcher::new(&configuration.enrichment);
    let openai_client = OpenaiClient::new(configuration.api_keys.openai);
    if !openai_client.is_configured() {
        log::info!("No Openai API key configured, running heuristic extraction only");
    }

    log::info!(
        "Starting enrichment service on {}:{}",
        configuration.application.host,
        configuration.application.port
    );

    run(listener, fetcher, openai_client, configuration.enrichment)?.await
}
