use std::time::Duration;

use async_trait::async_trait;
use thirtyfour::{error::WebDriverError, ChromiumLikeCapabilities, DesiredCapabilities, WebDriver};

use crate::{
    configuration::ScraperSettings,
    domain::{page_text, ScrapedContent},
};

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("WebDriver failure: {0}")]
    WebDriver(#[from] WebDriverError),
    #[error("WebDriver at {webdriver_url} did not open a session within {timeout:?}")]
    SessionTimeout {
        webdriver_url: String,
        timeout: Duration,
    },
    #[error("Navigation to {url} did not finish within {timeout:?}")]
    NavigationTimeout { url: String, timeout: Duration },
}

/// Fallback fetcher for sites that only render their copy with JavaScript.
#[async_trait]
pub trait RenderedFetcher: Send + Sync {
    async fn fetch_rendered(&self, domain: &str) -> Result<ScrapedContent, RenderError>;
}

/// Drives a fresh headless Chrome session per domain through a WebDriver
/// endpoint (chromedriver or selenium). The session is quit before returning.
pub struct Droid {
    settings: ScraperSettings,
}

impl Droid {
    pub fn new(settings: ScraperSettings) -> Self {
        Droid { settings }
    }

    pub fn is_enabled(&self) -> bool {
        self.settings.webdriver_url.is_some()
    }

    async fn launch(&self, webdriver_url: &str) -> Result<WebDriver, RenderError> {
        let mut caps = DesiredCapabilities::chrome();
        caps.set_headless()?;

        let timeout = self.settings.page_load_timeout();
        let driver = tokio::time::timeout(timeout, WebDriver::new(webdriver_url, caps))
            .await
            .map_err(|_| RenderError::SessionTimeout {
                webdriver_url: webdriver_url.to_string(),
                timeout,
            })??;
        Ok(driver)
    }

    async fn render(&self, driver: &WebDriver, url: &str) -> Result<String, RenderError> {
        let timeout = self.settings.page_load_timeout();
        driver.set_page_load_timeout(timeout).await?;

        tokio::time::timeout(timeout, driver.goto(url))
            .await
            .map_err(|_| RenderError::NavigationTimeout {
                url: url.to_string(),
                timeout,
            })??;

        Ok(driver.source().await?)
    }
}

#[async_trait]
impl RenderedFetcher for Droid {
    async fn fetch_rendered(&self, domain: &str) -> Result<ScrapedContent, RenderError> {
        let Some(webdriver_url) = self.settings.webdriver_url.as_deref() else {
            log::debug!("No webdriver configured, skipping rendered fetch of {}", domain);
            return Ok(ScrapedContent::empty());
        };

        let url = self.settings.base_url(domain);
        let driver = self.launch(webdriver_url).await?;

        let rendered = self.render(&driver, &url).await;
        if let Err(e) = driver.quit().await {
            log::warn!("Failed to quit browser session for {}: {:?}", url, e);
        }

        let html = rendered?;
        Ok(ScrapedContent::new(page_text::extract_rendered_text(&html)))
    }
}
