use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Every response carries at most this many signals, merged or not.
pub const MAX_SIGNALS: usize = 4;
/// The heuristic keyword extractor returns at most this many words.
pub const MAX_KEYWORDS: usize = 8;

/// Successful enrichment payload. Field names mirror the dashboard client,
/// hence camelCase on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichmentResult {
    pub summary: String,
    /// Present on the AI path (model bullets) and on the degraded path (a
    /// single fallback notice); omitted when only heuristics ran.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub what_they_do: Option<Vec<String>>,
    pub keywords: Vec<String>,
    pub signals: Vec<String>,
    pub sources: Vec<Source>,
    /// Diagnostic attached to degraded-but-successful responses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    pub url: String,
    pub timestamp: String,
}

impl Source {
    /// Single source entry: the requested URL verbatim, stamped now.
    pub fn now(url: &str) -> Self {
        Source {
            url: url.to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// What the model is asked to return. Anything it leaves out parses as empty
/// rather than failing the whole extraction.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AiExtraction {
    pub summary: String,
    pub what_they_do: Vec<String>,
    pub keywords: Vec<String>,
    pub signals: Vec<String>,
}

/// Model-reported signals first, then structurally detected ones, capped.
pub fn merge_signals(ai_signals: Vec<String>, structural: Vec<String>) -> Vec<String> {
    ai_signals
        .into_iter()
        .chain(structural)
        .take(MAX_SIGNALS)
        .collect()
}
