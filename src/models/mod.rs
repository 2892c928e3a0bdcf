mod message;

pub use message::{normalize, Message, Role};
