use crate::document::Document;
use crate::error::DocqaError;
use crate::models::Message;
use crate::session::History;
use crate::ui::highlight::MarkdownRenderer;
use colored::*;

/// Longest preview of a system message shown by `/history`.
const SYSTEM_PREVIEW_CHARS: usize = 120;

/// Display an answer with markdown rendering
pub fn display_answer(renderer: &MarkdownRenderer, answer: &str) {
    println!("{}", "### Answer".bold());
    print!("{}", renderer.render(answer.trim_end()));
    println!();
}

/// Display the loaded document's name, type and size
pub fn display_document_summary(document: &Document) {
    println!(
        "{}",
        format!(
            "Loaded {} ({}, {} characters)",
            document.name,
            document.mime,
            document.char_count()
        )
        .cyan()
    );
}

pub fn display_history(history: &History) {
    print!("{}", format_history(history));
}

/// One line per message: a colored role tag followed by the content.
pub fn format_history(history: &History) -> String {
    if history.is_empty() {
        return format!("{}\n", "(history is empty)".dimmed());
    }

    let mut output = String::new();
    for (index, message) in history.iter().enumerate() {
        let role = message.role.as_deref().unwrap_or("?");
        let tag = match role {
            "system" => format!("[{}]", role).magenta(),
            "user" => format!("[{}]", role).green(),
            "assistant" => format!("[{}]", role).cyan(),
            _ => format!("[{}]", role).normal(),
        };
        output.push_str(&format!(
            "{} {} {}\n",
            format!("{:>2}.", index + 1).dimmed(),
            tag,
            preview(message)
        ));
    }
    output
}

fn preview(message: &Message) -> String {
    let content = message.content_str();
    if message.is_system() && content.chars().count() > SYSTEM_PREVIEW_CHARS {
        let truncated: String = content.chars().take(SYSTEM_PREVIEW_CHARS).collect();
        format!("{}...", truncated.replace('\n', " "))
    } else {
        content.to_string()
    }
}

pub fn display_error(error: &DocqaError) {
    eprintln!("{} {}", "Error:".red(), error);
}
