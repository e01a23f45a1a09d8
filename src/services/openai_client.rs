use std::time::Duration;

use async_openai::{
    config::OpenAIConfig,
    error::OpenAIError,
    types::{ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs, ResponseFormat},
    Client,
};
use async_trait::async_trait;
use backoff::ExponentialBackoffBuilder;

use crate::configuration::ModelSettings;

use super::Credential;

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("Model request failed: {0}")]
    Request(#[from] OpenAIError),
    #[error("Model did not answer within {0:?}")]
    Timeout(Duration),
    #[error("No content in model response")]
    EmptyResponse,
}

/// One prompt, answered with one block of text.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    async fn complete(
        &self,
        credential: &Credential,
        prompt: &str,
        json_response: bool,
    ) -> Result<String, ModelError>;
}

/// Chat-completions client for any OpenAI compatible endpoint. Gemini is the
/// default through its `/v1beta/openai` surface.
pub struct OpenaiClient {
    api_base: String,
    model: String,
    request_timeout: Duration,
}

impl OpenaiClient {
    pub fn new(settings: &ModelSettings) -> Self {
        OpenaiClient {
            api_base: settings.api_base.clone(),
            model: settings.name.clone(),
            request_timeout: settings.request_timeout(),
        }
    }

    fn client_for(&self, credential: &Credential) -> Client<OpenAIConfig> {
        let config = OpenAIConfig::new()
            .with_api_base(self.api_base.clone())
            .with_api_key(credential.expose());
        // Failures surface on the first attempt, the batch moves on to the next domain.
        let no_retry = ExponentialBackoffBuilder::new()
            .with_max_elapsed_time(Some(Duration::ZERO))
            .build();
        Client::with_config(config).with_backoff(no_retry)
    }
}

#[async_trait]
impl LanguageModel for OpenaiClient {
    async fn complete(
        &self,
        credential: &Credential,
        prompt: &str,
        json_response: bool,
    ) -> Result<String, ModelError> {
        let mut request = CreateChatCompletionRequestArgs::default();
        request
            .model(self.model.clone())
            .messages([ChatCompletionRequestUserMessageArgs::default()
                .content(prompt)
                .build()?
                .into()])
            .max_tokens(1000_u32);
        if json_response {
            request.response_format(ResponseFormat::JsonObject);
        }
        let request = request.build()?;

        let client = self.client_for(credential);
        let response = tokio::time::timeout(self.request_timeout, client.chat().create(request))
            .await
            .map_err(|_| ModelError::Timeout(self.request_timeout))??;
        log::debug!("Model usage: {:?}", response.usage);

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(ModelError::EmptyResponse)
    }
}
