//! Content Store loading.
//!
//! The built-in portfolio is compiled into the binary. An operator can point
//! `content_path` at a JSON file of the same shape to replace it. Either way
//! the result is validated before anything is served.

use std::path::Path;

use folio_types::content::Portfolio;
use folio_types::error::ContentError;

const BUILTIN_PORTFOLIO: &str = include_str!("../content/portfolio.json");

/// Parse and validate the embedded portfolio.
pub fn builtin_portfolio() -> Result<Portfolio, ContentError> {
    parse_portfolio(BUILTIN_PORTFOLIO)
}

/// Parse portfolio JSON and check its invariants.
pub fn parse_portfolio(json: &str) -> Result<Portfolio, ContentError> {
    let portfolio: Portfolio =
        serde_json::from_str(json).map_err(|e| ContentError::Parse(e.to_string()))?;
    portfolio.validate()?;
    Ok(portfolio)
}

/// Load the portfolio from `path`, or the built-in one when `path` is `None`.
///
/// Unlike config, a bad content file is an error: serving someone else's
/// portfolio silently would be worse than not starting.
pub async fn load_portfolio(path: Option<&Path>) -> Result<Portfolio, ContentError> {
    let Some(path) = path else {
        return builtin_portfolio();
    };

    let json = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| ContentError::Io(format!("{}: {e}", path.display())))?;

    let portfolio = parse_portfolio(&json)?;
    tracing::info!(
        path = %path.display(),
        projects = portfolio.projects.len(),
        "loaded portfolio content"
    );
    Ok(portfolio)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn builtin_portfolio_is_valid() {
        let portfolio = builtin_portfolio().unwrap();
        assert_eq!(portfolio.profile.name, "Shivam Singh");
        assert_eq!(portfolio.profile.email, "initshivam@gmail.com");
        assert_eq!(portfolio.skills.len(), 3);
        assert_eq!(portfolio.experience.len(), 3);
        assert_eq!(portfolio.education.len(), 2);
        assert_eq!(portfolio.projects.len(), 3);
        assert_eq!(portfolio.social_links[0].icon, "linkedin");
    }

    #[test]
    fn parse_portfolio_rejects_garbage() {
        let err = parse_portfolio("{ nope").unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
    }

    #[test]
    fn parse_portfolio_runs_validation() {
        let mut value: serde_json::Value = serde_json::from_str(BUILTIN_PORTFOLIO).unwrap();
        value["projects"][1]["id"] = serde_json::json!(1);
        let err = parse_portfolio(&value.to_string()).unwrap_err();
        assert!(matches!(err, ContentError::DuplicateId { section: "projects", id: 1 }));
    }

    #[tokio::test]
    async fn load_portfolio_none_uses_builtin() {
        let portfolio = load_portfolio(None).await.unwrap();
        assert_eq!(portfolio, builtin_portfolio().unwrap());
    }

    #[tokio::test]
    async fn load_portfolio_reads_override_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("portfolio.json");
        let mut value: serde_json::Value = serde_json::from_str(BUILTIN_PORTFOLIO).unwrap();
        value["profile"]["name"] = serde_json::json!("Ada Lovelace");
        tokio::fs::write(&path, value.to_string()).await.unwrap();

        let portfolio = load_portfolio(Some(&path)).await.unwrap();
        assert_eq!(portfolio.profile.name, "Ada Lovelace");
    }

    #[tokio::test]
    async fn load_portfolio_missing_file_is_io_error() {
        let tmp = TempDir::new().unwrap();
        let err = load_portfolio(Some(&tmp.path().join("absent.json")))
            .await
            .unwrap_err();
        assert!(matches!(err, ContentError::Io(ref m) if m.contains("absent.json")));
    }
}
