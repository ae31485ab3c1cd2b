//! Print the grounding context.

use anyhow::Result;

use folio_core::context::{ContextDocument, SystemInstruction};

use crate::state::AppState;

/// Print the full system instruction, or with `--json` only the context document.
pub fn context(state: &AppState, json: bool) -> Result<()> {
    if json {
        let document = ContextDocument::from_portfolio(state.portfolio());
        println!("{}", serde_json::to_string_pretty(&document)?);
    } else {
        println!("{}", SystemInstruction::build(state.portfolio()));
    }
    Ok(())
}
