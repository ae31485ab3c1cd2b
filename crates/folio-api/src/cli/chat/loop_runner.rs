//! Main chat loop orchestration.

use std::io::Write;

use console::style;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::info;

use folio_core::chat::exchange::{ChatExchange, Conversation};
use folio_core::llm::provider::LlmProvider;
use folio_types::chat::{ChatMessage, ChatRole};

use crate::state::AppState;

use super::banner::print_welcome_banner;
use super::commands::{self, ChatCommand};

/// Run the interactive chat loop on stdin/stdout.
pub async fn run_chat_loop(state: &AppState) -> anyhow::Result<()> {
    let conversation = state.exchange.start_conversation();
    let profile = &state.portfolio().profile;

    print_welcome_banner(
        &profile.name,
        &profile.title,
        state.config.generation.model_name(),
        &conversation.id().to_string(),
    );

    let reader = BufReader::new(tokio::io::stdin());
    let mut out = std::io::stdout();
    let turns = drive_conversation(&state.exchange, &conversation, reader, &mut out).await?;

    info!(conversation_id = %conversation.id(), turns, "chat session ended");
    Ok(())
}

/// Feed lines from `reader` into `conversation` until EOF or `/quit`.
///
/// Returns the number of accepted turns.
pub async fn drive_conversation<P, R, W>(
    exchange: &ChatExchange<P>,
    conversation: &Conversation,
    reader: R,
    out: &mut W,
) -> anyhow::Result<usize>
where
    P: LlmProvider,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let name = exchange.portfolio().profile.name.clone();

    for message in conversation.snapshot().await.history {
        print_message(out, &name, &message)?;
    }

    let mut lines = reader.lines();
    let mut turns = 0;

    loop {
        write!(out, "  {} ", style("You >").green().bold())?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            writeln!(out, "\n  {}", style("Session ended.").dim())?;
            break;
        };

        if let Some(cmd) = commands::parse(&line) {
            match cmd {
                ChatCommand::Help => writeln!(out, "\n{}\n", commands::help_text())?,
                ChatCommand::History => {
                    writeln!(out)?;
                    for message in conversation.snapshot().await.history {
                        print_message(out, &name, &message)?;
                    }
                }
                ChatCommand::Exit => {
                    writeln!(out, "\n  {}", style("Session ended.").dim())?;
                    break;
                }
                ChatCommand::Unknown(cmd_name) => writeln!(
                    out,
                    "\n  {} Unknown command: {}. Type /help for available commands.\n",
                    style("?").yellow().bold(),
                    style(cmd_name).dim()
                )?,
            }
            continue;
        }

        let outcome = exchange.submit(conversation, &line).await;
        if !outcome.is_accepted() {
            continue;
        }
        if let Some(message) = outcome.message() {
            writeln!(out)?;
            print_message(out, &name, message)?;
        }
        turns += 1;
    }

    Ok(turns)
}

fn print_message<W: Write>(out: &mut W, name: &str, message: &ChatMessage) -> std::io::Result<()> {
    match message.role {
        ChatRole::Assistant => writeln!(
            out,
            "  {} {}\n",
            style(format!("{name}'s assistant >")).cyan().bold(),
            message.text.trim()
        ),
        ChatRole::User => writeln!(out, "  {} {}", style("You >").green().bold(), message.text),
    }
}
