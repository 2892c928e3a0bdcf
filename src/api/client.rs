use crate::api::response::{
    extract_content, extract_error_message, extract_finish_reason, extract_total_tokens,
};
use crate::api::{ChatModel, ChatRequest};
use crate::config::Config;
use crate::error::{DocqaError, Result};
use crate::models::Message;
use async_trait::async_trait;
use colored::*;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde_json::Value;
use std::time::Duration;

async fn make_api_request(
    client: &reqwest::Client,
    api_endpoint: &str,
    request_body: &ChatRequest<'_>,
) -> Result<reqwest::Response> {
    let response = client.post(api_endpoint).json(request_body).send().await?;
    Ok(response)
}

/// Chat completions client for OpenAI-compatible endpoints.
pub struct OpenAiClient {
    http: reqwest::Client,
    endpoint: String,
    model: String,
    max_tokens: Option<u32>,
    temperature: Option<f32>,
    verbose: bool,
}

impl OpenAiClient {
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", config.api_key)).map_err(|e| {
                DocqaError::Config(format!("Invalid authorization header: {}", e))
            })?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.request_timeout))
            .build()?;

        Ok(Self {
            http,
            endpoint: config.api_endpoint.clone(),
            model: config.model.clone(),
            max_tokens: Some(config.max_tokens),
            temperature: config.temperature,
            verbose: config.verbose,
        })
    }
}

#[async_trait]
impl ChatModel for OpenAiClient {
    fn model_id(&self) -> &str {
        &self.model
    }

    async fn complete(&self, messages: &[Message]) -> Result<String> {
        let request_body = ChatRequest {
            model: &self.model,
            messages,
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        if self.verbose {
            eprintln!(
                "{}",
                format!(
                    "[docqa] Sending {} messages to {}",
                    messages.len(),
                    self.model
                )
                .dimmed()
            );
        }

        let response = make_api_request(&self.http, &self.endpoint, &request_body).await?;
        let status = response.status();

        if self.verbose {
            eprintln!("{}", format!("[docqa] Response status: {}", status).dimmed());
        }

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(DocqaError::ModelCall {
                status: Some(status.as_u16()),
                message: extract_error_message(&error_text),
            });
        }

        let response_text = response.text().await?;
        let response_json: Value =
            serde_json::from_str(&response_text).map_err(|e| DocqaError::ModelCall {
                status: Some(status.as_u16()),
                message: format!("Malformed response: {}", e),
            })?;

        if self.verbose {
            if let Some(tokens) = extract_total_tokens(&response_json) {
                eprintln!("{}", format!("[docqa] Tokens used: {}", tokens).dimmed());
            }
        }

        if extract_finish_reason(&response_json).as_deref() == Some("length") {
            eprintln!(
                "{}",
                "Note: the answer was cut off by the max tokens limit.".yellow()
            );
        }

        extract_content(&response_json)?.ok_or_else(|| DocqaError::ModelCall {
            status: Some(status.as_u16()),
            message: "Response contained no message content".to_string(),
        })
    }
}
