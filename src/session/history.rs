use crate::error::Result;
use crate::models::{normalize, Message};
use serde::Serialize;
use serde_json::Value;

/// Number of messages kept besides the pinned system message.
pub const DEFAULT_WINDOW_SIZE: usize = 20;

/// Messages waiting to be appended to a [`History`].
///
/// A single record is promoted to a one-element batch. A JSON array is read
/// as an ordered sequence of records.
#[derive(Debug, Clone, Default)]
pub struct Batch {
    records: Vec<Value>,
}

impl Batch {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl From<Value> for Batch {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(records) => Self { records },
            record => Self {
                records: vec![record],
            },
        }
    }
}

impl From<Vec<Value>> for Batch {
    fn from(records: Vec<Value>) -> Self {
        Self { records }
    }
}

impl From<Message> for Batch {
    fn from(message: Message) -> Self {
        Self {
            records: vec![message.to_value()],
        }
    }
}

impl From<Vec<Message>> for Batch {
    fn from(messages: Vec<Message>) -> Self {
        Self {
            records: messages.iter().map(Message::to_value).collect(),
        }
    }
}

/// Ordered conversation context sent to the model.
///
/// A `History` is never edited in place: [`History::append_and_trim`] builds
/// a new value and leaves the receiver untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct History {
    messages: Vec<Message>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.messages.iter()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// The leading system message, if there is one.
    pub fn pinned(&self) -> Option<&Message> {
        self.messages.first().filter(|m| m.is_system())
    }

    pub fn append_and_trim(
        &self,
        new_messages: impl Into<Batch>,
        window_size: usize,
    ) -> Result<History> {
        append_and_trim(self, new_messages, window_size)
    }
}

impl From<Vec<Message>> for History {
    fn from(messages: Vec<Message>) -> Self {
        Self { messages }
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a Message;
    type IntoIter = std::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}

/// Append a batch to `existing` and cap the result to `window_size`
/// non-system messages.
///
/// Every record is normalized before anything is appended, so a single bad
/// record rejects the whole batch. If the combined sequence starts with a
/// system message it is pinned at index 0 and does not count against the
/// window. The oldest remaining messages are dropped first.
pub fn append_and_trim(
    existing: &History,
    new_messages: impl Into<Batch>,
    window_size: usize,
) -> Result<History> {
    let batch = new_messages.into();
    let normalized = batch
        .records
        .iter()
        .map(normalize)
        .collect::<Result<Vec<_>>>()?;

    let mut combined = existing
        .messages
        .iter()
        .cloned()
        .chain(normalized)
        .peekable();

    let pinned = combined.next_if(Message::is_system);
    let rest: Vec<Message> = combined.collect();
    let excess = rest.len().saturating_sub(window_size);

    let mut messages = Vec::with_capacity(rest.len() - excess + 1);
    messages.extend(pinned);
    messages.extend(rest.into_iter().skip(excess));

    Ok(History { messages })
}

