//! One-shot question command.

use anyhow::{Result, bail};
use console::style;

use folio_core::chat::exchange::FALLBACK_MESSAGE;

use crate::state::AppState;

/// Ask one question and print the reply, or the fallback message when
/// generation fails. Failures are logged, not returned.
pub async fn ask(state: &AppState, question: &str, json: bool) -> Result<()> {
    let question = question.trim();
    if question.is_empty() {
        bail!("question must not be empty");
    }

    let (reply, failure) = match state.exchange.generate(question).await {
        Ok(text) => (text, None),
        Err(failure) => {
            tracing::warn!(error = %failure, "generation failed, using fallback reply");
            (FALLBACK_MESSAGE.to_string(), Some(failure.to_string()))
        }
    };

    if json {
        let out = serde_json::json!({
            "question": question,
            "reply": reply,
            "fell_back": failure.is_some(),
            "failure": failure,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!();
    println!(
        "  {} {}",
        style("Assistant >").cyan().bold(),
        reply.trim()
    );
    println!();
    Ok(())
}
