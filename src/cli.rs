use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(name = "docqa")]
#[command(
    about = "Ask questions about a text, markdown or PDF document using an OpenAI-compatible API",
    long_about = None
)]
pub struct Args {
    #[arg(
        short = 'f',
        long = "file",
        help = "Document to load (.txt, .md or .pdf)"
    )]
    pub file: Option<PathBuf>,

    #[arg(
        short = 'i',
        long = "interactive",
        help = "Keep asking questions after the first answer"
    )]
    pub interactive: bool,

    #[arg(short = 'm', long = "model", help = "Model to use (e.g., gpt-4o-mini)")]
    pub model: Option<String>,

    #[arg(long = "max-tokens", help = "Maximum answer length in tokens")]
    pub max_tokens: Option<u32>,

    #[arg(long = "temperature", help = "Sampling temperature")]
    pub temperature: Option<f32>,

    #[arg(
        short = 'w',
        long = "window",
        help = "Number of messages kept besides the system instruction"
    )]
    pub window_size: Option<usize>,

    #[arg(
        long = "api-endpoint",
        help = "Custom API base URL (e.g., http://localhost:11434/v1)"
    )]
    pub api_endpoint: Option<String>,

    #[arg(short = 'v', long = "verbose", help = "Print diagnostic output")]
    pub verbose: bool,

    #[arg(
        long = "config-init",
        help = "Write an example config file to ~/.config/docqa/docqa.yaml"
    )]
    pub config_init: bool,

    #[arg(help = "Question to ask about the document")]
    pub question: Vec<String>,
}

impl Args {
    /// The question given on the command line, if any.
    pub fn question_text(&self) -> Option<String> {
        let question = self.question.join(" ");
        let question = question.trim();
        if question.is_empty() {
            None
        } else {
            Some(question.to_string())
        }
    }
}
