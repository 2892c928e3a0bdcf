use crate::api::ChatModel;
use crate::cli::Args;
use crate::config::Config;
use crate::document::Document;
use crate::error::Result;
use crate::session::Conversation;
use crate::ui::{display_answer, display_error, display_history, MarkdownRenderer};
use colored::*;
use std::io::{self, Write};

pub struct OrchestratorContext {
    pub config: Config,
    pub args: Args,
    pub document: Document,
}

/// A line typed at the interactive prompt.
#[derive(Debug, PartialEq, Eq)]
pub enum Input {
    Ask(String),
    History,
    Quit,
    Empty,
}

pub fn parse_input(line: &str) -> Input {
    match line.trim() {
        "" => Input::Empty,
        "/quit" | "/exit" => Input::Quit,
        "/history" => Input::History,
        question => Input::Ask(question.to_string()),
    }
}

/// The pinned system instruction for a conversation about `document`.
pub fn system_instruction(config: &Config, document: &Document) -> String {
    format!(
        "{}\n\nToday's date is {}.\n\n{}",
        config.system_prompt,
        Config::get_current_date(),
        document.prompt_context()
    )
}

pub async fn run<M: ChatModel>(
    context: &OrchestratorContext,
    conversation: &mut Conversation<M>,
) -> Result<()> {
    let renderer = MarkdownRenderer::new();

    if let Some(question) = context.args.question_text() {
        if !context.args.interactive {
            return ask(context, conversation, &renderer, &question).await;
        }
        if let Err(e) = ask(context, conversation, &renderer, &question).await {
            display_error(&e);
        }
    }

    interactive_loop(context, conversation, &renderer).await
}

async fn interactive_loop<M: ChatModel>(
    context: &OrchestratorContext,
    conversation: &mut Conversation<M>,
    renderer: &MarkdownRenderer,
) -> Result<()> {
    println!(
        "{}",
        format!(
            "Ask something about {} (/history to show the conversation, /quit to exit)",
            context.document.name
        )
        .dimmed()
    );

    loop {
        print!("{} ", ">".green().bold());
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            println!();
            break;
        }

        match parse_input(&line) {
            Input::Empty => continue,
            Input::Quit => break,
            Input::History => display_history(conversation.history()),
            Input::Ask(question) => {
                if let Err(e) = ask(context, conversation, renderer, &question).await {
                    display_error(&e);
                    if e.is_model_call_error() {
                        eprintln!(
                            "{}",
                            "Your question was kept in the history; ask again to retry.".dimmed()
                        );
                    }
                }
            }
        }
    }

    if context.config.verbose {
        eprintln!(
            "{}",
            format!(
                "[docqa] Session {} ended after {} seconds",
                conversation.session_id(),
                (chrono::Local::now() - conversation.started_at()).num_seconds()
            )
            .dimmed()
        );
    }

    Ok(())
}

async fn ask<M: ChatModel>(
    context: &OrchestratorContext,
    conversation: &mut Conversation<M>,
    renderer: &MarkdownRenderer,
    question: &str,
) -> Result<()> {
    let answer = conversation.submit(question).await?;
    display_answer(renderer, &answer);

    if context.config.verbose {
        eprintln!(
            "{}",
            format!(
                "[docqa] History: {} messages (window {})",
                conversation.history().len(),
                conversation.window_size()
            )
            .dimmed()
        );
    }

    Ok(())
}
