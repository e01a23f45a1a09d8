use itertools::Itertools;

use super::enrichment::EnrichmentResult;

pub const EXPORT_HEADER: [&str; 3] = ["Domain", "Company Name", "Description"];
pub const EXPORT_FILE_NAME: &str = "enriched_results.csv";

#[derive(Debug, thiserror::Error)]
pub enum DomainTableError {
    #[error("Failed to read domain table: {0}")]
    Csv(#[from] csv::Error),
    #[error("Failed to write domain table: {0}")]
    Io(#[from] std::io::Error),
}

/// Reads the first column of every row after the header. Rows whose first
/// cell is empty are skipped, extra columns are ignored.
pub fn parse_domains(input: &[u8]) -> Result<Vec<String>, DomainTableError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input);

    let mut domains = vec![];
    for record in reader.records() {
        let record = record?;
        match record.get(0) {
            Some(domain) if !domain.is_empty() => domains.push(domain.to_string()),
            _ => {}
        }
    }

    Ok(domains)
}

/// CSV with the same column order as the input convention, so the file can be
/// fed back in.
pub fn to_csv(results: &[EnrichmentResult]) -> Result<Vec<u8>, DomainTableError> {
    let mut writer = csv::Writer::from_writer(vec![]);
    writer.write_record(EXPORT_HEADER)?;

    for result in results {
        writer.write_record([
            result.domain.as_str(),
            result.company_name.as_str(),
            result.description.as_str(),
        ])?;
    }

    writer
        .into_inner()
        .map_err(|e| DomainTableError::Io(e.into_error()))
}

/// One `domain, name, description` line per record, for copy-paste.
pub fn to_plain_text(results: &[EnrichmentResult]) -> String {
    results
        .iter()
        .map(|r| format!("{}, {}, {}", r.domain, r.company_name, r.description))
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::{parse_domains, to_csv, to_plain_text};
    use crate::domain::enrichment::{EnrichmentResult, EnrichmentStatus};

    #[test]
    fn header_is_skipped_and_empty_rows_dropped() {
        let input = b"domain\nacme.com\n\n ,extra\nglobex.com,ignored\n";
        let domains = parse_domains(input).unwrap();

        assert_eq!(domains, vec!["acme.com", "globex.com"]);
    }

    #[test]
    fn header_only_yields_nothing() {
        assert!(parse_domains(b"domain\n").unwrap().is_empty());
        assert!(parse_domains(b"").unwrap().is_empty());
    }

    #[test]
    fn csv_export_round_trips_domains() {
        let results = vec![
            EnrichmentResult::new(
                "acme.com",
                "Acme, Inc.",
                "Anvils.\nAnd rockets.",
                EnrichmentStatus::Enriched,
            ),
            EnrichmentResult::no_content("globex.com"),
        ];

        let bytes = to_csv(&results).unwrap();
        let text = String::from_utf8(bytes.clone()).unwrap();
        assert!(text.starts_with("Domain,Company Name,Description\n"));
        assert!(text.contains("\"Acme, Inc.\""));

        assert_eq!(parse_domains(&bytes).unwrap(), vec!["acme.com", "globex.com"]);
    }

    #[test]
    fn plain_text_is_comma_space_separated() {
        let results = vec![
            EnrichmentResult::new("acme.com", "Acme", "Anvils.", EnrichmentStatus::Enriched),
            EnrichmentResult::no_content("globex.com"),
        ];

        assert_eq!(
            to_plain_text(&results),
            "acme.com, Acme, Anvils.\nglobex.com, , "
        );
    }
}
