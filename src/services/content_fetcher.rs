use async_trait::async_trait;
use reqwest::StatusCode;
use url::Url;

use crate::{
    configuration::ScraperSettings,
    domain::{page_text, text_cleaner, ScrapedContent},
};

/// Marketing pages tried in order, the empty path is the site root.
pub const CANDIDATE_PATHS: [&str; 6] = ["/about", "/about-us", "/company", "", "/products", "/services"];

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Failed to build http client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("No candidate page of {domain} answered with 200, last failure: {last_failure}")]
    AllCandidatesFailed {
        domain: String,
        last_failure: String,
    },
}

#[async_trait]
pub trait ContentFetcher: Send + Sync {
    async fn fetch(&self, domain: &str) -> Result<ScrapedContent, FetchError>;
}

pub struct HttpContentFetcher {
    client: reqwest::Client,
    settings: ScraperSettings,
}

impl HttpContentFetcher {
    pub fn new(settings: ScraperSettings) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(settings.request_timeout())
            .user_agent(fake_user_agent::get_rua())
            .build()
            .map_err(FetchError::Client)?;

        Ok(HttpContentFetcher { client, settings })
    }

    pub fn candidate_urls(&self, domain: &str) -> Vec<String> {
        let base_url = self.settings.base_url(domain);
        CANDIDATE_PATHS
            .iter()
            .map(|path| format!("{}{}", base_url, path))
            .collect()
    }

    async fn fetch_html(&self, url: &str) -> Result<String, String> {
        let url = Url::parse(url).map_err(|e| format!("invalid url {}: {}", url, e))?;

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| format!("request to {} failed: {}", url, e))?;

        if response.status() != StatusCode::OK {
            return Err(format!("{} answered with {}", url, response.status()));
        }

        response
            .text()
            .await
            .map_err(|e| format!("failed to read body of {}: {}", url, e))
    }
}

#[async_trait]
impl ContentFetcher for HttpContentFetcher {
    async fn fetch(&self, domain: &str) -> Result<ScrapedContent, FetchError> {
        let mut last_failure = String::from("no candidate urls");

        for url in self.candidate_urls(domain) {
            match self.fetch_html(&url).await {
                Ok(html) => {
                    let text = text_cleaner::clean(&page_text::extract_page_text(&html));
                    log::debug!("Scraped {} chars from {}", text.chars().count(), url);
                    return Ok(ScrapedContent::new(text));
                }
                Err(failure) => {
                    log::debug!("Skipping candidate page: {}", failure);
                    last_failure = failure;
                }
            }
        }

        Err(FetchError::AllCandidatesFailed {
            domain: domain.to_string(),
            last_failure,
        })
    }
}
