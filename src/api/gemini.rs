mod prompt;

use std::time::Duration;

use async_trait::async_trait;
use http::{HeaderMap, HeaderValue};
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::{
    core::{
        advisor::{DisruptionPredictor, RouteOptimizer},
        forecast::Forecast,
        reroute::{RerouteRequest, RerouteResult},
        scenario::Conditions,
    },
    prelude::*,
};

/// Google Gemini `generateContent` client with structured output.
#[derive(Clone)]
pub struct Api {
    client: Client,
    base_url: Url,
    model: String,
}

#[bon::bon]
impl Api {
    #[builder]
    pub fn new(
        api_key: &str,
        base_url: Url,
        model: String,
        #[builder(default = Duration::from_secs(60))] timeout: Duration,
    ) -> Result<Self> {
        let mut api_key = HeaderValue::from_str(api_key).context("invalid API key")?;
        api_key.set_sensitive(true);
        let mut headers = HeaderMap::new();
        headers.append("x-goog-api-key", api_key);
        let client = Client::builder()
            .user_agent("sentinel")
            .timeout(timeout)
            .default_headers(headers)
            .build()?;
        Ok(Self { client, base_url, model })
    }
}

impl Api {
    #[instrument(skip_all, level = Level::DEBUG, fields(model = %self.model))]
    async fn generate<R: DeserializeOwned>(&self, prompt: String, schema: Value) -> Result<R> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.base_url.as_str().trim_end_matches('/'),
            self.model,
        );
        let response = self
            .client
            .post(&url)
            .json(&GenerateContentRequest::new(prompt, schema))
            .send()
            .await
            .with_context(|| format!("failed to call `{url}`"))?
            .error_for_status()?
            .json::<GenerateContentResponse>()
            .await
            .context("failed to deserialize the `generateContent` response")?;
        let text = response.into_text()?;
        debug!(len = text.len(), "generated");
        serde_json::from_str(&text).context("the model output does not match the schema")
    }
}

#[async_trait]
impl DisruptionPredictor for Api {
    #[instrument(skip_all)]
    async fn predict_disruptions(&self, conditions: &Conditions) -> Result<Forecast> {
        self.generate(prompt::predict_disruptions(conditions), prompt::forecast_schema()).await
    }
}

#[async_trait]
impl RouteOptimizer for Api {
    #[instrument(skip_all)]
    async fn calculate_optimal_rerouting(&self, request: &RerouteRequest) -> Result<RerouteResult> {
        self.generate(prompt::calculate_optimal_rerouting(request), prompt::reroute_schema()).await
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: [Content; 1],
    generation_config: GenerationConfig,
}

impl GenerateContentRequest {
    fn new(prompt: String, response_schema: Value) -> Self {
        Self {
            contents: [Content {
                role: Some("user".to_owned()),
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema,
            },
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: Value,
}

#[derive(Serialize, Deserialize)]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,

    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,

    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<Content>,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first candidate.
    fn into_text(self) -> Result<String> {
        if let Some(reason) = self.prompt_feedback.and_then(|feedback| feedback.block_reason) {
            bail!("the prompt is blocked ({reason})");
        }
        let candidate = self.candidates.into_iter().next().context("no candidates returned")?;
        let finish_reason = candidate.finish_reason;
        let text: String = candidate
            .content
            .into_iter()
            .flat_map(|content| content.parts)
            .map(|part| part.text)
            .collect();
        if text.is_empty() {
            bail!("the candidate has no text (finish reason: {finish_reason:?})");
        }
        Ok(text)
    }
}
