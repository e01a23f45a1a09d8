use actix_multipart::form::{bytes::Bytes, MultipartForm};
use actix_web::{http::header::ContentDisposition, post, web, HttpResponse};
use serde::Deserialize;

use crate::{
    domain::domain_table::{self, EXPORT_FILE_NAME},
    services::{Enricher, LogProgress},
};

#[derive(MultipartForm)]
pub struct DomainUpload {
    file: Bytes,
}

#[derive(Deserialize, Default, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "lowercase")]
enum OutputFormat {
    #[default]
    Csv,
    Text,
    Json,
}

#[derive(Deserialize)]
struct EnrichQuery {
    #[serde(default)]
    format: OutputFormat,
}

#[post("/enrich")]
pub async fn enrich(
    enricher: web::Data<Enricher>,
    query: web::Query<EnrichQuery>,
    MultipartForm(upload): MultipartForm<DomainUpload>,
) -> HttpResponse {
    let domains = match domain_table::parse_domains(&upload.file.data) {
        Ok(domains) if !domains.is_empty() => domains,
        Ok(_) => return HttpResponse::BadRequest().body("Uploaded table has no domains"),
        Err(e) => {
            log::warn!("Rejected upload {:?}: {}", upload.file.file_name, e);
            return HttpResponse::BadRequest().body(e.to_string());
        }
    };

    log::info!("Enriching {} uploaded domains", domains.len());
    let results = enricher.process_all(&domains, &LogProgress).await;

    match query.format {
        OutputFormat::Csv => match domain_table::to_csv(&results) {
            Ok(csv) => HttpResponse::Ok()
                .content_type("text/csv")
                .insert_header(ContentDisposition::attachment(EXPORT_FILE_NAME))
                .body(csv),
            Err(e) => {
                log::error!("Failed to export results: {}", e);
                HttpResponse::InternalServerError().finish()
            }
        },
        OutputFormat::Text => HttpResponse::Ok()
            .content_type("text/plain; charset=utf-8")
            .body(domain_table::to_plain_text(&results)),
        OutputFormat::Json => HttpResponse::Ok().json(results),
    }
}
