use crate::api::ChatModel;
use crate::error::{DocqaError, Result};
use std::env;

/// Password check guarding access to the model client.
///
/// The only way to obtain an [`Authorized`] handle, and therefore the only
/// way to start a conversation, is a successful [`AccessGate::authorize`].
pub struct AccessGate {
    secret: String,
}

impl AccessGate {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Hand out `model` wrapped in an [`Authorized`] handle if `entered`
    /// matches the configured secret. An empty configured secret never
    /// matches.
    pub fn authorize<M: ChatModel>(&self, entered: &str, model: M) -> Result<Authorized<M>> {
        if !self.secret.is_empty() && secrets_match(entered, &self.secret) {
            Ok(Authorized { model })
        } else {
            Err(DocqaError::AccessDenied)
        }
    }
}

/// Capability proving the access gate was passed.
pub struct Authorized<M> {
    model: M,
}

impl<M> Authorized<M> {
    pub fn model(&self) -> &M {
        &self.model
    }

    pub(crate) fn into_model(self) -> M {
        self.model
    }
}

fn secrets_match(entered: &str, expected: &str) -> bool {
    let (entered, expected) = (entered.as_bytes(), expected.as_bytes());
    if entered.len() != expected.len() {
        return false;
    }
    entered
        .iter()
        .zip(expected)
        .fold(0u8, |diff, (a, b)| diff | (a ^ b))
        == 0
}

/// Read the password from `DOCQA_PASSWORD`, or prompt for it without echo.
pub fn read_password() -> Result<String> {
    if let Ok(password) = env::var("DOCQA_PASSWORD") {
        return Ok(password);
    }

    dialoguer::Password::new()
        .with_prompt("Enter your password")
        .allow_empty_password(true)
        .interact()
        .map_err(|e| DocqaError::Other(format!("Failed to read password: {}", e)))
}
