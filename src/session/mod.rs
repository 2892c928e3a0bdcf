mod conversation;
mod history;

pub use conversation::Conversation;
pub use history::{append_and_trim, Batch, History, DEFAULT_WINDOW_SIZE};
