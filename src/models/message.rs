use crate::error::{DocqaError, Result};
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One conversation turn as sent to the chat completions API.
///
/// Both fields are optional so that a normalized record keeps exactly the
/// keys it was given; absent fields are omitted on serialization.
#[derive(Debug, Serialize, Clone, Default, PartialEq, Eq)]
pub struct Message {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role: Some(role.as_str().to_string()),
            content: Some(content.into()),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.role.as_deref() == Some(role.as_str())
    }

    pub fn is_system(&self) -> bool {
        self.has_role(Role::System)
    }

    pub fn content_str(&self) -> &str {
        self.content.as_deref().unwrap_or("")
    }

    /// The message as a JSON record with only its present fields.
    pub fn to_value(&self) -> Value {
        let mut record = Map::new();
        if let Some(role) = &self.role {
            record.insert("role".to_string(), Value::String(role.clone()));
        }
        if let Some(content) = &self.content {
            record.insert("content".to_string(), Value::String(content.clone()));
        }
        Value::Object(record)
    }
}

/// Project an arbitrary JSON value onto a [`Message`].
///
/// Only `role` and `content` are kept; every other key is dropped and a
/// `null` field is treated as absent. The role value is passed through
/// without checking it against [`Role`], and empty content is accepted.
pub fn normalize(value: &Value) -> Result<Message> {
    let record = value.as_object().ok_or_else(|| {
        DocqaError::Validation(format!(
            "expected a message object, got {}",
            json_kind(value)
        ))
    })?;

    Ok(Message {
        role: string_field(record, "role")?,
        content: string_field(record, "content")?,
    })
}

fn string_field(record: &Map<String, Value>, key: &str) -> Result<Option<String>> {
    match record.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text.clone())),
        Some(other) => Err(DocqaError::Validation(format!(
            "field '{}' must be a string, got {}",
            key,
            json_kind(other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

