use super::history::{History, DEFAULT_WINDOW_SIZE};
use crate::access::Authorized;
use crate::api::ChatModel;
use crate::error::Result;
use crate::models::Message;
use chrono::{DateTime, Local};
use uuid::Uuid;

/// One in-memory question and answer session.
///
/// The history lives only as long as the conversation; nothing is written
/// to disk.
pub struct Conversation<M> {
    session_id: Uuid,
    started_at: DateTime<Local>,
    model: M,
    history: History,
    window_size: usize,
}

impl<M: ChatModel> Conversation<M> {
    pub fn new(authorized: Authorized<M>) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            started_at: Local::now(),
            model: authorized.into_model(),
            history: History::new(),
            window_size: DEFAULT_WINDOW_SIZE,
        }
    }

    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    /// Seed the conversation with a system instruction.
    ///
    /// Must be called before the first [`Conversation::submit`]; the
    /// instruction is only pinned when it is the first message.
    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Result<Self> {
        self.history = self
            .history
            .append_and_trim(Message::system(prompt), self.window_size)?;
        Ok(self)
    }

    /// Ask one question and record both turns.
    ///
    /// The user turn is committed before the model is called. If the call
    /// fails the error is returned and the history keeps the user turn with
    /// no assistant reply; submitting the same text again appends it again.
    pub async fn submit(&mut self, user_text: &str) -> Result<String> {
        self.history = self
            .history
            .append_and_trim(Message::user(user_text), self.window_size)?;

        let reply = self.model.complete(self.history.messages()).await?;

        self.history = self
            .history
            .append_and_trim(Message::assistant(reply.as_str()), self.window_size)?;

        Ok(reply)
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn started_at(&self) -> DateTime<Local> {
        self.started_at
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    pub fn model(&self) -> &M {
        &self.model
    }
}
