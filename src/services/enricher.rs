use std::sync::{Arc, Mutex, PoisonError};

use crate::domain::{EnrichmentResult, EnrichmentStatus, ScrapedContent};

use super::{
    ContentFetcher, Credential, CredentialPool, RenderedFetcher, SummarizeError, Summarizer,
    Throttle,
};

/// Receives a notification as each domain of a batch starts.
pub trait ProgressReporter: Send + Sync {
    fn domain_started(&self, index: usize, total: usize, domain: &str);
}

pub struct LogProgress;

impl ProgressReporter for LogProgress {
    fn domain_started(&self, index: usize, total: usize, domain: &str) {
        log::info!("Processing {}/{}: {}", index, total, domain);
    }
}

/// Runs the scrape → summarize pipeline over a batch of domains, one at a time.
pub struct Enricher {
    content_fetcher: Arc<dyn ContentFetcher>,
    rendered_fetcher: Arc<dyn RenderedFetcher>,
    summarizer: Summarizer,
    credentials: Mutex<CredentialPool>,
    throttle: Arc<dyn Throttle>,
}

impl Enricher {
    pub fn new(
        content_fetcher: Arc<dyn ContentFetcher>,
        rendered_fetcher: Arc<dyn RenderedFetcher>,
        summarizer: Summarizer,
        credentials: CredentialPool,
        throttle: Arc<dyn Throttle>,
    ) -> Self {
        Enricher {
            content_fetcher,
            rendered_fetcher,
            summarizer,
            credentials: Mutex::new(credentials),
            throttle,
        }
    }

    /// One result per input domain, in input order. Individual failures end up
    /// as empty fields and never abort the batch.
    pub async fn process_all(
        &self,
        domains: &[String],
        progress: &dyn ProgressReporter,
    ) -> Vec<EnrichmentResult> {
        let total = domains.len();
        let mut results = Vec::with_capacity(total);

        for (index, domain) in domains.iter().enumerate() {
            progress.domain_started(index + 1, total, domain);
            results.push(self.process_domain(domain).await);
        }

        let enriched = results
            .iter()
            .filter(|r| r.status == EnrichmentStatus::Enriched)
            .count();
        log::info!("Batch finished, enriched {} of {} domains", enriched, total);

        results
    }

    async fn process_domain(&self, domain: &str) -> EnrichmentResult {
        let content = self.scrape(domain).await;
        if content.is_empty() {
            log::info!("No usable content for {}", domain);
            return EnrichmentResult::no_content(domain);
        }

        let credential = self.next_credential();
        self.throttle.wait().await;

        match self.summarizer.summarize(&credential, content.as_str()).await {
            Ok(info) => EnrichmentResult::from_model(domain, &info.name, &info.description),
            Err(e) => {
                log::warn!("Could not summarize {}: {}", domain, e);
                let status = match &e {
                    SummarizeError::EmptyContent => EnrichmentStatus::NoContent,
                    SummarizeError::Unparseable => EnrichmentStatus::Unparseable,
                    SummarizeError::Model(_) => EnrichmentStatus::ModelError,
                };
                let sentinel = e.sentinel();
                EnrichmentResult::new(domain, &sentinel.name, &sentinel.description, status)
            }
        }
    }

    /// Static pages first, the headless browser only when they give nothing.
    async fn scrape(&self, domain: &str) -> ScrapedContent {
        match self.content_fetcher.fetch(domain).await {
            Ok(content) if !content.is_empty() => return content,
            Ok(_) => log::debug!("Static pages of {} had no text", domain),
            Err(e) => log::debug!("Static fetch of {} failed: {}", domain, e),
        }

        match self.rendered_fetcher.fetch_rendered(domain).await {
            Ok(content) => content,
            Err(e) => {
                log::debug!("Rendered fetch of {} failed: {}", domain, e);
                ScrapedContent::empty()
            }
        }
    }

    fn next_credential(&self) -> Credential {
        self.credentials
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .next_credential()
    }
}
