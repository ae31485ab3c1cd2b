//! Startup health check command.

use std::path::Path;

use anyhow::{Result, bail};
use console::style;

use folio_infra::config::validate_config;
use folio_infra::content::load_portfolio;
use folio_infra::secret::EnvCredentialSource;
use folio_types::config::FolioConfig;

/// Result of each check, in display order.
#[derive(Debug)]
pub struct CheckReport {
    pub config_path: Option<String>,
    pub config: Result<(), String>,
    pub content: Result<String, String>,
    pub credential_variable: String,
    pub credential_present: bool,
}

impl CheckReport {
    /// Config and content must be valid. A missing credential only degrades
    /// chat to the fallback reply, so it is reported but not fatal.
    pub fn healthy(&self) -> bool {
        self.config.is_ok() && self.content.is_ok()
    }
}

/// Run every check without stopping at the first failure.
pub async fn run_checks(config: &FolioConfig, config_path: Option<&Path>) -> CheckReport {
    let content = match load_portfolio(config.content_path.as_deref()).await {
        Ok(portfolio) => Ok(portfolio.profile.name),
        Err(e) => Err(e.to_string()),
    };
    let credentials = EnvCredentialSource::new(config.generation.api_key_env.clone());

    CheckReport {
        config_path: config_path.map(|p| p.display().to_string()),
        config: validate_config(config).map_err(|e| e.to_string()),
        content,
        credential_variable: config.generation.api_key_env.clone(),
        credential_present: credentials.is_present(),
    }
}

/// `folio check`: print the report, fail when config or content is invalid.
///
/// Never prints the credential value.
pub async fn check(config: &FolioConfig, config_path: Option<&Path>, json: bool) -> Result<()> {
    let report = run_checks(config, config_path).await;

    if json {
        let out = serde_json::json!({
            "config_path": report.config_path,
            "config_valid": report.config.is_ok(),
            "config_error": report.config.as_ref().err(),
            "content_valid": report.content.is_ok(),
            "content_error": report.content.as_ref().err(),
            "credential_variable": report.credential_variable,
            "credential_present": report.credential_present,
            "healthy": report.healthy(),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        let mark = |ok: bool| {
            if ok {
                format!("{}", style("✓").green())
            } else {
                format!("{}", style("✗").red())
            }
        };

        println!();
        println!("  {} Folio health check", style("🔍").bold());
        println!();
        println!(
            "  {} Config {}",
            mark(report.config.is_ok()),
            style(report.config_path.as_deref().unwrap_or("(defaults)")).dim()
        );
        if let Err(e) = &report.config {
            println!("      {}", style(e).red());
        }
        match &report.content {
            Ok(name) => println!("  {} Content valid ({})", mark(true), style(name).cyan()),
            Err(e) => {
                println!("  {} Content invalid", mark(false));
                println!("      {}", style(e).red());
            }
        }
        println!(
            "  {} Credential variable {} {}",
            mark(report.credential_present),
            style(&report.credential_variable).bold(),
            if report.credential_present {
                "is set"
            } else {
                "is not set (chat will answer with the fallback message)"
            }
        );
        println!();
    }

    if !report.healthy() {
        bail!("health check failed");
    }
    Ok(())
}
