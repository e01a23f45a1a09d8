use std::sync::{Arc, LazyLock};

use regex::Regex;
use serde::Deserialize;

use crate::domain::CompanyInfo;

use super::{Credential, LanguageModel, ModelError};

static LABELED_REPLY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)Company Name: (.*?)\nDescription: (.*)").expect("reply pattern is valid")
});

const PROMPT_INSTRUCTIONS: &str = r#"
Extract the company name and write a professional company description based on the provided text.
- Provide the exact company name as it appears on the website.
- Description should focus on services offered and the target audience but it needs to be complete and ready to use for clients, No extra remarks.
- Keep the description under 250 words.
- Avoid placeholders like [Company Name] or any extra remark either clean description and name or say "No Description".
"#;

const LABELED_FORMAT: &str = r#"- Format response as:
  Company Name: <name>
  Description: <description>
"#;

const JSON_FORMAT: &str = r#"- Format response as a single JSON object:
  {"company_name": "<name>", "description": "<description>"}
"#;

#[derive(Debug, thiserror::Error)]
pub enum SummarizeError {
    #[error("Nothing to summarize")]
    EmptyContent,
    #[error("Model reply did not follow the requested format")]
    Unparseable,
    #[error(transparent)]
    Model(#[from] ModelError),
}

impl SummarizeError {
    /// The legacy `(name, description)` pair each failure collapses to.
    pub fn sentinel(&self) -> CompanyInfo {
        match self {
            SummarizeError::EmptyContent | SummarizeError::Unparseable => {
                CompanyInfo::new("No Name", "")
            }
            SummarizeError::Model(_) => CompanyInfo::new("Error", ""),
        }
    }
}

pub struct Summarizer {
    model: Arc<dyn LanguageModel>,
    structured_output: bool,
}

impl Summarizer {
    pub fn new(model: Arc<dyn LanguageModel>, structured_output: bool) -> Self {
        Summarizer {
            model,
            structured_output,
        }
    }

    /// Asks the model for the company behind `content`. Blank content never
    /// reaches the model.
    pub async fn summarize(
        &self,
        credential: &Credential,
        content: &str,
    ) -> Result<CompanyInfo, SummarizeError> {
        if content.trim().is_empty() {
            return Err(SummarizeError::EmptyContent);
        }

        let prompt = build_prompt(content, self.structured_output);
        let reply = self
            .model
            .complete(credential, &prompt, self.structured_output)
            .await?;

        let parsed = match self.structured_output {
            true => parse_json_reply(&reply).or_else(|| parse_labeled_reply(&reply)),
            false => parse_labeled_reply(&reply),
        };

        parsed.ok_or_else(|| {
            log::debug!("Unparseable model reply: {:?}", reply);
            SummarizeError::Unparseable
        })
    }
}

pub fn build_prompt(content: &str, structured_output: bool) -> String {
    let format = match structured_output {
        true => JSON_FORMAT,
        false => LABELED_FORMAT,
    };

    format!("{}{}\nContent: {}\n", PROMPT_INSTRUCTIONS, format, content)
}

/// Expects `Company Name: <name>` followed on the next line by
/// `Description: <description>`; the description runs to the end of the reply.
pub fn parse_labeled_reply(reply: &str) -> Option<CompanyInfo> {
    LABELED_REPLY
        .captures(reply)
        .map(|caps| CompanyInfo::new(caps[1].trim(), caps[2].trim()))
}

#[derive(Deserialize)]
struct JsonReply {
    company_name: String,
    description: String,
}

/// Accepts a bare JSON object or one wrapped in a markdown code fence.
pub fn parse_json_reply(reply: &str) -> Option<CompanyInfo> {
    let body = reply.trim();
    let body = body
        .strip_prefix("```json")
        .or_else(|| body.strip_prefix("```"))
        .and_then(|inner| inner.trim_end().strip_suffix("```"))
        .unwrap_or(body);

    serde_json::from_str::<JsonReply>(body.trim())
        .ok()
        .map(|json| CompanyInfo::new(json.company_name.trim(), json.description.trim()))
}
