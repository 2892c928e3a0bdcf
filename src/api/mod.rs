pub mod client;
pub mod models;
pub mod response;

pub use client::OpenAiClient;
pub use models::ChatRequest;

use crate::error::Result;
use crate::models::Message;
use async_trait::async_trait;

/// A chat model that turns an ordered message history into one reply.
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Identifier of the model answering the requests.
    fn model_id(&self) -> &str;

    async fn complete(&self, messages: &[Message]) -> Result<String>;
}
