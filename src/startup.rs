use std::{net::TcpListener, sync::Arc};

use actix_web::{dev::Server, middleware::Logger, web, App, HttpServer};
use anyhow::Context;

use crate::{
    configuration::Settings,
    routes::{default_route, enrich_route},
    services::{
        throttle_from_settings, CredentialPool, Droid, Enricher, HttpContentFetcher, OpenaiClient,
        Summarizer,
    },
};

/// Wires the pipeline pieces together from configuration.
pub fn build_enricher(configuration: &Settings) -> anyhow::Result<Enricher> {
    let content_fetcher = HttpContentFetcher::new(configuration.scraper.clone())
        .context("Failed to build HTTP client")?;
    let droid = Droid::new(configuration.scraper.clone());
    if !droid.is_enabled() {
        log::warn!("No webdriver_url configured, rendered page fallback is disabled");
    }

    let model = OpenaiClient::new(&configuration.model);
    let summarizer = Summarizer::new(Arc::new(model), configuration.model.structured_output);
    let credentials = CredentialPool::new(configuration.model.api_keys.iter())
        .context("Configure at least one key in model.api_keys or APP_MODEL__API_KEYS")?;
    log::info!("Loaded {} model credentials", credentials.key_count());

    Ok(Enricher::new(
        Arc::new(content_fetcher),
        Arc::new(droid),
        summarizer,
        credentials,
        throttle_from_settings(&configuration.throttle),
    ))
}

pub fn run(listener: TcpListener, enricher: Enricher) -> Result<Server, std::io::Error> {
    let enricher = web::Data::new(enricher);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .service(default_route::default)
            .service(default_route::health_check)
            .service(enrich_route::enrich)
            .app_data(enricher.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
