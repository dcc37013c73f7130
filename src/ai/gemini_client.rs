// External dependencies
use anyhow::{Context, Result};
use log::{debug, warn};
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use url::Url;

// Internal dependencies
use crate::config::Settings;

// ============================================================================
// Gemini API Structures
// ============================================================================

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

impl GenerateContentRequest {
    /// Wraps one prompt in the list-of-one nesting the API requires.
    fn for_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        }
    }
}

pub struct GeminiClient {
    client: Client,
    url: Url,
    api_key: String,
}

// ============================================================================
// Client Implementation
// ============================================================================

impl GeminiClient {
    pub fn new(settings: &Settings) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        let url = Url::parse(&settings.api.url).context("Invalid API endpoint URL")?;

        Ok(Self {
            client,
            url,
            api_key: settings.api.key.clone(),
        })
    }

    /// Sends one prompt and returns either the model's trimmed text or a
    /// failure description starting with "Error:". Every failure is caught
    /// and classified here; nothing propagates to the caller.
    pub async fn complete(&self, prompt: &str) -> String {
        let request = GenerateContentRequest::for_prompt(prompt);

        debug!("Sending request, prompt length: {}", prompt.len());

        let response = match self
            .client
            .post(self.url.clone())
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => {
                warn!("Request failed: {err}");
                return "Error: Request Exception".to_string();
            }
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("HTTP error {status} - Response: {body}");
            return format!("Error: HTTP {}", status.as_u16());
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(err) => {
                warn!("Failed to read response body: {err}");
                return "Error: Unexpected error".to_string();
            }
        };

        let data: Value = match serde_json::from_str(&body) {
            Ok(data) => data,
            Err(err) => {
                warn!("Response body is not JSON: {err} - Response: {body}");
                return "Error: Unexpected error".to_string();
            }
        };

        match extract_text(&data) {
            Extraction::Text(text) => text,
            Extraction::Empty => {
                warn!("Empty or unexpected response for prompt: {prompt}");
                format!("Error: No valid text response from API. Full response: {data}")
            }
            Extraction::Malformed => {
                warn!("Could not traverse API response: {data}");
                "Error: Could not parse API response.".to_string()
            }
        }
    }
}

// ============================================================================
// Response Traversal
// ============================================================================

enum Extraction {
    /// Trimmed text from `candidates[0].content.parts[0].text`.
    Text(String),
    /// The path exists structurally but the text is missing or empty.
    Empty,
    /// A wrong type or out-of-range index along the path.
    Malformed,
}

/// Walks `candidates[0].content.parts[0].text`. A missing key falls through
/// to the empty-text case; an empty list or a value of the wrong type is a
/// hard traversal failure.
fn extract_text(data: &Value) -> Extraction {
    let candidate = match data.get("candidates") {
        None => return Extraction::Empty,
        Some(Value::Array(candidates)) => match candidates.first() {
            Some(candidate) => candidate,
            None => return Extraction::Malformed,
        },
        Some(_) => return Extraction::Malformed,
    };

    let content = match candidate {
        Value::Object(fields) => match fields.get("content") {
            None => return Extraction::Empty,
            Some(content) => content,
        },
        _ => return Extraction::Malformed,
    };

    let part = match content {
        Value::Object(fields) => match fields.get("parts") {
            None => return Extraction::Empty,
            Some(Value::Array(parts)) => match parts.first() {
                Some(part) => part,
                None => return Extraction::Malformed,
            },
            Some(_) => return Extraction::Malformed,
        },
        _ => return Extraction::Malformed,
    };

    match part {
        Value::Object(fields) => match fields.get("text") {
            None => Extraction::Empty,
            Some(Value::String(text)) if text.is_empty() => Extraction::Empty,
            Some(Value::String(text)) => Extraction::Text(text.trim().to_string()),
            Some(_) => Extraction::Malformed,
        },
        _ => Extraction::Malformed,
    }
}
