use serde::Serialize;

const NAME_SENTINELS: [&str; 2] = ["No Name", "Error"];
const DESCRIPTION_SENTINELS: [&str; 4] = [
    "No Description",
    "Error",
    "No content found",
    "No meaningful content found",
];

/// Company identity as read back from the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyInfo {
    pub name: String,
    pub description: String,
}

impl CompanyInfo {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        CompanyInfo {
            name: name.into(),
            description: description.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EnrichmentStatus {
    Enriched,
    /// The model answered but only with its "no name, no description" reply.
    Declined,
    NoContent,
    Unparseable,
    ModelError,
}

/// One output row. Name and description are always present, empty meaning unknown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrichmentResult {
    pub domain: String,
    pub company_name: String,
    pub description: String,
    pub status: EnrichmentStatus,
}

impl EnrichmentResult {
    pub fn new(
        domain: impl Into<String>,
        company_name: &str,
        description: &str,
        status: EnrichmentStatus,
    ) -> Self {
        EnrichmentResult {
            domain: domain.into(),
            company_name: normalize_name(company_name),
            description: normalize_description(description),
            status,
        }
    }

    /// A model answer, tagged `Declined` when nothing survives normalization.
    pub fn from_model(domain: impl Into<String>, name: &str, description: &str) -> Self {
        let result = EnrichmentResult::new(domain, name, description, EnrichmentStatus::Enriched);
        match result.company_name.is_empty() && result.description.is_empty() {
            true => EnrichmentResult {
                status: EnrichmentStatus::Declined,
                ..result
            },
            false => result,
        }
    }

    pub fn no_content(domain: impl Into<String>) -> Self {
        EnrichmentResult::new(domain, "", "", EnrichmentStatus::NoContent)
    }
}

pub fn normalize_name(name: &str) -> String {
    match NAME_SENTINELS.contains(&name) {
        true => String::new(),
        false => name.to_string(),
    }
}

pub fn normalize_description(description: &str) -> String {
    match DESCRIPTION_SENTINELS.contains(&description) {
        true => String::new(),
        false => description.to_string(),
    }
}
