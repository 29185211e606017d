//! Gemini `generateContent` REST backend.

use async_trait::async_trait;
use reqwest::{header, Client};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

use super::prompt;
use super::service::{IdeationResult, InsightError, InsightService};
use crate::config::Product;
use crate::settings::InsightSettings;

const API_KEY_HEADER: &str = "x-goog-api-key";

pub struct GeminiService {
    client: Client,
    endpoint: String,
    model: String,
    api_key: Option<String>,
}

impl GeminiService {
    pub fn new(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        api_key: Option<String>,
    ) -> Result<Self, InsightError> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| InsightError::Unavailable(format!("HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            model: model.into(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
        })
    }

    pub fn from_settings(settings: &InsightSettings) -> Result<Self, InsightError> {
        Self::new(&settings.endpoint, &settings.model, settings.resolved_api_key())
    }

    fn generate_url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }

    async fn generate(&self, request: GenerateRequest) -> Result<String, InsightError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| InsightError::Unavailable("no API key configured".to_string()))?;

        let response = self
            .client
            .post(self.generate_url())
            .header(API_KEY_HEADER, api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| InsightError::NetworkError(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(InsightError::RequestFailed(format!("HTTP {}: {}", status, body)));
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| InsightError::ParseError(e.to_string()))?;

        let text: String = body
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect()
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(InsightError::EmptyResponse);
        }
        Ok(text)
    }
}

/// generateContent request body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

impl GenerateRequest {
    fn text(prompt: String) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part { text: Some(prompt) }],
            }],
            generation_config: None,
        }
    }

    fn with_json_schema(mut self, schema: serde_json::Value) -> Self {
        self.generation_config = Some(GenerationConfig {
            response_mime_type: "application/json".to_string(),
            response_schema: schema,
        });
        self
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

fn ideation_schema() -> serde_json::Value {
    let strings = json!({ "type": "ARRAY", "items": { "type": "STRING" } });
    json!({
        "type": "OBJECT",
        "properties": {
            "subDirections": strings.clone(),
            "relatedProducts": strings.clone(),
            "marketGaps": strings.clone(),
            "suggestedPaths": strings,
            "insightSummary": { "type": "STRING" },
        },
        "required": ["subDirections", "relatedProducts", "marketGaps", "suggestedPaths", "insightSummary"],
    })
}

#[async_trait]
impl InsightService for GeminiService {
    fn id(&self) -> &str {
        &self.model
    }

    async fn single_insight(&self, product: &Product, context: &str) -> Result<String, InsightError> {
        self.generate(GenerateRequest::text(prompt::single_insight(product, context)))
            .await
    }

    async fn comparison_insight(&self, products: &[Arc<Product>]) -> Result<String, InsightError> {
        self.generate(GenerateRequest::text(prompt::comparison_insight(products)))
            .await
    }

    async fn ideation(&self, query: &str) -> Result<IdeationResult, InsightError> {
        let request = GenerateRequest::text(prompt::ideation(query)).with_json_schema(ideation_schema());
        let text = self.generate(request).await?;
        serde_json::from_str(&text).map_err(|e| InsightError::ParseError(e.to_string()))
    }
}
