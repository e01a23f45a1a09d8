use std::net::TcpListener;

use anyhow::Context;
use domain_intel::{
    configuration::get_configuration,
    startup::{build_enricher, run},
};
use env_logger::Env;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let configuration = get_configuration().context("Failed to read configuration.")?;
    let enricher = build_enricher(&configuration)?;

    let address = format!(
        "{}:{}",
        configuration.application.host, configuration.application.port
    );
    let listener = TcpListener::bind(&address)?;
    log::info!("Listening on {}", address);

    run(listener, enricher)?.await?;
    Ok(())
}
