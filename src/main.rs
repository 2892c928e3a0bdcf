use clap::Parser;
use colored::*;
use std::process;

use docqa::access::{read_password, AccessGate};
use docqa::api::{ChatModel, OpenAiClient};
use docqa::cli::Args;
use docqa::config::{Config, FileConfig};
use docqa::document::Document;
use docqa::error::{DocqaError, Result};
use docqa::orchestrator::{self, system_instruction, OrchestratorContext};
use docqa::session::Conversation;
use docqa::ui::{display_document_summary, display_error};

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Err(e) = run(args).await {
        display_error(&e);
        process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    // Handle --config-init option
    if args.config_init {
        let config_dir = FileConfig::global_config_dir()
            .ok_or_else(|| DocqaError::Config("could not determine home directory".to_string()))?;
        let path = FileConfig::init_in(&config_dir)?;
        println!(
            "{}",
            format!("Created config file at {}", path.display()).green()
        );
        return Ok(());
    }

    let Some(file) = args.file.clone() else {
        print_usage();
        return Err(DocqaError::Config(
            "no document given; pass one with --file <PATH>".to_string(),
        ));
    };

    let config = Config::from_env_and_args(&args)?;

    if config.verbose {
        eprintln!(
            "{}",
            format!("[docqa] API endpoint: {}", config.api_endpoint).dimmed()
        );
        eprintln!(
            "{}",
            format!("[docqa] History window: {}", config.window_size).dimmed()
        );
    }

    // The password is checked before anything else touches the API client
    let client = OpenAiClient::from_config(&config)?;
    let gate = AccessGate::new(config.access_password.clone());
    let authorized = gate.authorize(&read_password()?, client)?;
    eprintln!("{}", "Password accepted!".green());

    if config.verbose {
        eprintln!(
            "{}",
            format!("[docqa] Using model: {}", authorized.model().model_id()).dimmed()
        );
    }

    let document = Document::load(&file)?;
    display_document_summary(&document);

    let mut conversation = Conversation::new(authorized)
        .with_window_size(config.window_size)
        .with_system_prompt(system_instruction(&config, &document))?;

    if config.verbose {
        eprintln!(
            "{}",
            format!("[docqa] Session {}", conversation.session_id()).dimmed()
        );
    }

    let context = OrchestratorContext {
        config,
        args,
        document,
    };

    orchestrator::run(&context, &mut conversation).await
}

fn print_usage() {
    eprintln!("{}", "Usage: docqa [OPTIONS] --file <PATH> [QUESTION...]".red());
    eprintln!(
        "{}",
        "  -f, --file <PATH>          Document to load (.txt, .md or .pdf)".dimmed()
    );
    eprintln!(
        "{}",
        "  -i, --interactive          Keep asking questions after the first answer".dimmed()
    );
    eprintln!(
        "{}",
        "  -m, --model <MODEL>        Model to use".dimmed()
    );
    eprintln!(
        "{}",
        "  -w, --window <N>           Messages kept besides the system instruction".dimmed()
    );
    eprintln!(
        "{}",
        "      --config-init          Write an example config file".dimmed()
    );
}
