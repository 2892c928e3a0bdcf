pub mod highlight;
pub mod output;

pub use highlight::MarkdownRenderer;
pub use output::{
    display_answer, display_document_summary, display_error, display_history, format_history,
};
