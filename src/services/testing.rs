//! Deterministic stand-ins for the network facing pieces of the pipeline.

use std::{
    collections::HashMap,
    sync::Mutex,
    time::Duration,
};

use async_trait::async_trait;

use crate::domain::ScrapedContent;

use super::{
    ContentFetcher, Credential, FetchError, LanguageModel, ModelError, ProgressReporter,
    RenderError, RenderedFetcher,
};

#[derive(Clone)]
pub enum StubPage {
    Text(String),
    Empty,
    Fail,
}

/// Serves canned pages per domain, unknown domains come back empty.
#[derive(Default)]
pub struct StubFetcher {
    pages: HashMap<String, StubPage>,
    calls: Mutex<Vec<String>>,
}

impl StubFetcher {
    pub fn with_page(mut self, domain: &str, page: StubPage) -> Self {
        self.pages.insert(domain.to_string(), page);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn serve(&self, domain: &str) -> Option<ScrapedContent> {
        self.calls.lock().unwrap().push(domain.to_string());
        match self.pages.get(domain) {
            Some(StubPage::Text(text)) => Some(ScrapedContent::new(text.clone())),
            Some(StubPage::Fail) => None,
            Some(StubPage::Empty) | None => Some(ScrapedContent::empty()),
        }
    }
}

#[async_trait]
impl ContentFetcher for StubFetcher {
    async fn fetch(&self, domain: &str) -> Result<ScrapedContent, FetchError> {
        self.serve(domain).ok_or_else(|| FetchError::AllCandidatesFailed {
            domain: domain.to_string(),
            last_failure: "stubbed failure".to_string(),
        })
    }
}

#[async_trait]
impl RenderedFetcher for StubFetcher {
    async fn fetch_rendered(&self, domain: &str) -> Result<ScrapedContent, RenderError> {
        self.serve(domain).ok_or_else(|| RenderError::NavigationTimeout {
            url: format!("https://{}", domain),
            timeout: Duration::from_secs(10),
        })
    }
}

struct ModelCall {
    credential: Credential,
    prompt: String,
    json_response: bool,
}

/// Answers every prompt with the same reply, or fails every call.
pub struct ScriptedModel {
    reply: Option<String>,
    calls: Mutex<Vec<ModelCall>>,
}

impl ScriptedModel {
    pub fn replying(reply: &str) -> Self {
        ScriptedModel {
            reply: Some(reply.to_string()),
            calls: Mutex::new(vec![]),
        }
    }

    pub fn failing() -> Self {
        ScriptedModel {
            reply: None,
            calls: Mutex::new(vec![]),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.calls.lock().unwrap().iter().map(|c| c.prompt.clone()).collect()
    }

    pub fn credentials(&self) -> Vec<Credential> {
        self.calls.lock().unwrap().iter().map(|c| c.credential.clone()).collect()
    }

    pub fn json_requests(&self) -> Vec<bool> {
        self.calls.lock().unwrap().iter().map(|c| c.json_response).collect()
    }
}

#[async_trait]
impl LanguageModel for ScriptedModel {
    async fn complete(
        &self,
        credential: &Credential,
        prompt: &str,
        json_response: bool,
    ) -> Result<String, ModelError> {
        self.calls.lock().unwrap().push(ModelCall {
            credential: credential.clone(),
            prompt: prompt.to_string(),
            json_response,
        });
        self.reply.clone().ok_or(ModelError::EmptyResponse)
    }
}

#[derive(Default)]
pub struct RecordingProgress {
    lines: Mutex<Vec<String>>,
}

impl RecordingProgress {
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl ProgressReporter for RecordingProgress {
    fn domain_started(&self, index: usize, total: usize, domain: &str) {
        self.lines
            .lock()
            .unwrap()
            .push(format!("Processing {}/{}: {}", index, total, domain));
    }
}
