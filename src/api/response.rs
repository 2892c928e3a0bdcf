use crate::error::{DocqaError, Result};
use serde_json::Value;

fn malformed(message: &str) -> DocqaError {
    DocqaError::ModelCall {
        status: None,
        message: message.to_string(),
    }
}

fn first_message(response_json: &Value) -> Result<&Value> {
    let choices = response_json
        .get("choices")
        .and_then(|c| c.as_array())
        .ok_or_else(|| malformed("No choices in response"))?;

    let first_choice = choices
        .first()
        .ok_or_else(|| malformed("Empty choices array"))?;

    first_choice
        .get("message")
        .ok_or_else(|| malformed("No message in response"))
}

/// Extract content from a non-streaming chat completion
pub fn extract_content(response_json: &Value) -> Result<Option<String>> {
    let message = first_message(response_json)?;

    Ok(message
        .get("content")
        .and_then(|c| c.as_str())
        .map(|s| s.to_string()))
}

/// Extract the finish reason of the first choice, e.g. `length` when the
/// answer was cut off by `max_tokens`
pub fn extract_finish_reason(response_json: &Value) -> Option<String> {
    response_json
        .get("choices")
        .and_then(|c| c.as_array())
        .and_then(|c| c.first())
        .and_then(|c| c.get("finish_reason"))
        .and_then(|r| r.as_str())
        .map(|s| s.to_string())
}

/// Total token count reported by the provider, if any
pub fn extract_total_tokens(response_json: &Value) -> Option<u64> {
    response_json
        .get("usage")
        .and_then(|u| u.get("total_tokens"))
        .and_then(|t| t.as_u64())
}

/// Pull the provider's error message out of an error body.
///
/// OpenAI-compatible APIs answer with `{"error": {"message": ...}}`; any
/// other body is returned unchanged.
pub fn extract_error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|json| {
            json.get("error")
                .and_then(|e| e.get("message").or(Some(e)))
                .and_then(|m| m.as_str())
                .map(|s| s.to_string())
        })
        .unwrap_or_else(|| body.trim().to_string())
}
