//! Welcome banner display for chat sessions.

use console::style;

/// Print the welcome banner at the start of a chat session.
pub fn print_welcome_banner(name: &str, title: &str, model: &str, conversation_id: &str) {
    println!();
    println!("  * {}", style(name).cyan().bold());
    println!("  {}", style(title).dim());
    println!();
    println!("  {}  {}", style("Model:").bold(), style(model).dim());
    println!(
        "  {}  {}",
        style("Conversation:").bold(),
        style(&conversation_id[..8.min(conversation_id.len())]).dim()
    );
    println!();
    println!(
        "  {}",
        style("Type /help for commands, /quit or Ctrl+D to exit").dim()
    );
    println!("  {}", style("---").dim());
    println!();
}
