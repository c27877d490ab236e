use std::time::Duration;

use async_openai::{
    config::OpenAIConfig,
    error::OpenAIError,
    types::{
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs, ResponseFormat,
    },
    Client,
};

use crate::domain::enrichment::AiExtraction;

const MODEL: &str = "gpt-4o-mini";
const MAX_COMPLETION_TOKENS: u32 = 700;
const TEMPERATURE: f32 = 0.2;
const COMPLETION_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(thiserror::Error, Debug)]
pub enum AiError {
    #[error("Openai API key is not configured")]
    NotConfigured,
    #[error("Openai request timed out")]
    Timeout,
    #[error("Openai request failed: {0}")]
    Request(#[from] OpenAIError),
    #[error("Openai response contained no content")]
    EmptyResponse,
    #[error("Openai response was not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

pub struct OpenaiClient {
    client: Option<Client<OpenAIConfig>>,
}

impl OpenaiClient {
    /// A blank key leaves the client unconfigured and every extraction
    /// returns [`AiError::NotConfigured`].
    pub fn new(api_key: String) -> Self {
        if api_key.trim().is_empty() {
            return OpenaiClient { client: None };
        }
        let config = OpenAIConfig::new().with_api_key(api_key);
        OpenaiClient {
            client: Some(Client::with_config(config)),
        }
    }

    /// Client pointed at an alternate OpenAI-compatible endpoint.
    pub fn with_api_base(api_key: String, api_base: String) -> Self {
        let config = OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(api_base);
        OpenaiClient {
            client: Some(Client::with_config(config)),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    /// Structured company profile from the page text. Structural signals are
    /// passed along as hints so the model does not rediscover them.
    pub async fn extract_company_profile(
        &self,
        text: &str,
        structural_signals: &[String],
    ) -> Result<AiExtraction, AiError> {
        let client = self.client.as_ref().ok_or(AiError::NotConfigured)?;

        let prompt = build_prompt(text, structural_signals);
        let request = CreateChatCompletionRequestArgs::default()
            .model(MODEL)
            .messages([ChatCompletionRequestUserMessageArgs::default()
                .content(prompt)
                .build()?
                .into()])
            .temperature(TEMPERATURE)
            .max_tokens(MAX_COMPLETION_TOKENS)
            .response_format(ResponseFormat::JsonObject)
            .build()?;

        let response = match tokio::time::timeout(COMPLETION_TIMEOUT, client.chat().create(request))
            .await
        {
            Ok(Ok(response)) => response,
            Ok(Err(e)) => return Err(AiError::Request(e)),
            Err(_) => return Err(AiError::Timeout),
        };
        log::info!("Openai extraction completed, usage: {:?}", response.usage);

        let content = response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .ok_or(AiError::EmptyResponse)?;

        parse_extraction(&content)
    }
}

fn build_prompt(text: &str, structural_signals: &[String]) -> String {
    let hints = if structural_signals.is_empty() {
        "none".to_string()
    } else {
        structural_signals.join(", ")
    };
    format!(
        r#"You are a venture research analyst. Analyze the website text below and respond with a strict JSON object containing exactly these fields:
"summary": a 1-2 sentence description of what the company does,
"whatTheyDo": an array of 3-6 short bullet strings,
"keywords": an array of 5-10 lowercase keywords,
"signals": an array of 2-4 short business signal labels.
Respond with the JSON object only, no prose and no markdown.

Structural signals already detected on the site: {}

Website text:
{}"#,
        hints, text
    )
}

/// Models sometimes wrap JSON in markdown fences despite instructions, so a
/// failed parse is retried once with the fences stripped.
fn parse_extraction(content: &str) -> Result<AiExtraction, AiError> {
    let parsed = serde_json::from_str::<AiExtraction>(content).or_else(|_| {
        let trimmed = content
            .trim()
            .trim_start_matches("```json")
            .trim_start_matches("```")
            .trim_end_matches("```")
            .trim();
        serde_json::from_str::<AiExtraction>(trimmed)
    })?;
    Ok(parsed)
}
