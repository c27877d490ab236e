use actix_web::{http::StatusCode, post, web, HttpResponse, ResponseError};
use serde::Deserialize;
use serde_json::json;

use crate::configuration::EnrichmentSettings;
use crate::domain::enrichment::{merge_signals, EnrichmentResult, Source, MAX_SIGNALS};
use crate::services::{
    detect_lexical_signals, detect_structural_signals, extract_keywords, heuristic_summary,
    log_host, normalize, strip_tags, AiError, FetchError, OpenaiClient, PageFetcher,
};

/// Stands in for `whatTheyDo` whenever the model path could not produce one.
pub const FALLBACK_NOTICE: &str = "AI analysis unavailable; heuristic profile only.";

const NOTE_AI_UNAVAILABLE: &str = "AI extraction was unavailable; returning heuristic analysis.";
const NOTE_AI_UNPARSABLE: &str = "AI response could not be parsed; returning heuristic analysis.";

#[derive(thiserror::Error, Debug)]
pub enum EnrichError {
    #[error("Website URL is required.")]
    MissingWebsite,
    #[error("{0}")]
    Fetch(#[from] FetchError),
    #[error("Enrichment failed: {0}")]
    Internal(#[from] anyhow::Error),
}

impl ResponseError for EnrichError {
    fn status_code(&self) -> StatusCode {
        match self {
            EnrichError::MissingWebsite => StatusCode::BAD_REQUEST,
            EnrichError::Fetch(_) => StatusCode::BAD_GATEWAY,
            EnrichError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }
}

#[derive(Deserialize)]
struct EnrichRequest {
    website: Option<String>,
}

#[post("/enrich")]
async fn enrich(
    body: web::Json<EnrichRequest>,
    fetcher: web::Data<PageFetcher>,
    openai_client: web::Data<OpenaiClient>,
    settings: web::Data<EnrichmentSettings>,
) -> Result<HttpResponse, EnrichError> {
    let website = match &body.website {
        Some(website) if !website.trim().is_empty() => website.trim().to_string(),
        _ => return Err(EnrichError::MissingWebsite),
    };

    let html = fetcher.fetch_page(&website).await?;

    let cleaned = strip_tags(&html);
    let text = normalize(&cleaned, settings.max_text_chars);
    let structural = detect_structural_signals(&html.to_lowercase());

    let result = if openai_client.is_configured() {
        match openai_client
            .extract_company_profile(&text, &structural)
            .await
        {
            Ok(extraction) => EnrichmentResult {
                summary: extraction.summary,
                what_they_do: Some(extraction.what_they_do),
                keywords: extraction.keywords,
                signals: merge_signals(extraction.signals, structural),
                sources: vec![Source::now(&website)],
                note: None,
            },
            Err(e) => {
                log::error!("AI extraction failed for {}: {}", log_host(&website), e);
                degraded_result(&html, &cleaned, &text, structural, &website, &e)
            }
        }
    } else {
        heuristic_result(&html, &cleaned, &text, structural, &website)
    };

    Ok(HttpResponse::Ok().json(result))
}

fn heuristic_result(
    html: &str,
    cleaned: &str,
    text: &str,
    structural: Vec<String>,
    website: &str,
) -> EnrichmentResult {
    let lexical = detect_lexical_signals(&text.to_lowercase());
    let signals: Vec<String> = structural
        .into_iter()
        .chain(lexical)
        .take(MAX_SIGNALS)
        .collect();

    EnrichmentResult {
        summary: heuristic_summary(html, cleaned, text),
        what_they_do: None,
        keywords: extract_keywords(text),
        signals,
        sources: vec![Source::now(website)],
        note: None,
    }
}

fn degraded_result(
    html: &str,
    cleaned: &str,
    text: &str,
    structural: Vec<String>,
    website: &str,
    error: &AiError,
) -> EnrichmentResult {
    let note = match error {
        AiError::InvalidJson(_) => NOTE_AI_UNPARSABLE,
        _ => NOTE_AI_UNAVAILABLE,
    };

    let mut result = heuristic_result(html, cleaned, text, structural, website);
    result.what_they_do = Some(vec![FALLBACK_NOTICE.to_string()]);
    result.note = Some(note.to_string());
    result
}
