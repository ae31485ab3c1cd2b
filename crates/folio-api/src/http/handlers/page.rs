//! Embedded page shell.
//!
//! A single self-contained HTML document (inline CSS and JS) compiled into
//! the binary. It fetches the portfolio and drives the chat widget through
//! the JSON API, so no build step or external assets are needed.

use axum::response::Html;

const INDEX_HTML: &str = include_str!("../../../assets/index.html");

/// GET / - the portfolio page with the chat widget.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_contains_chat_widget_hooks() {
        assert!(INDEX_HTML.contains("id=\"chat-form\""));
        assert!(INDEX_HTML.contains("\"/api/v1\""));
        assert!(INDEX_HTML.contains("\"/conversations\""));
        assert!(INDEX_HTML.contains("\"/portfolio\""));
    }
}
