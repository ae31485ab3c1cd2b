//! Folio CLI and HTTP server entry point.
//!
//! Binary name: `folio`
//!
//! Parses CLI arguments, loads config and content, then dispatches to the
//! appropriate command handler or starts the HTTP server.

mod cli;
mod http;
mod state;

use clap::Parser;

use folio_infra::config::{load_config, resolve_config_path};
use folio_observe::tracing_setup::{bootstrap_subscriber, init_tracing, shutdown_tracing};

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let filter = cli.log_filter();

    // The config decides whether OTel is on, so it is loaded under a
    // temporary subscriber.
    let config_path = resolve_config_path(cli.config.as_deref());
    let config = {
        let _guard = bootstrap_subscriber(filter);
        load_config(config_path.as_deref()).await
    };

    init_tracing(config.observability.otel, filter)
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    let result = run(cli, config, config_path).await;
    shutdown_tracing();
    result
}

async fn run(
    cli: Cli,
    config: folio_types::config::FolioConfig,
    config_path: Option<std::path::PathBuf>,
) -> anyhow::Result<()> {
    // Check reports problems instead of failing on the first one.
    if let Commands::Check = cli.command {
        return cli::check::check(&config, config_path.as_deref(), cli.json).await;
    }

    let state = AppState::init(config, config_path).await?;

    match cli.command {
        Commands::Ask { question } => {
            cli::ask::ask(&state, &question, cli.json).await?;
        }

        Commands::Chat => {
            cli::chat::loop_runner::run_chat_loop(&state).await?;
        }

        Commands::Context => {
            cli::context::context(&state, cli.json)?;
        }

        Commands::Serve { port, host } => {
            let host = host.unwrap_or_else(|| state.config.server.host.clone());
            let port = port.unwrap_or(state.config.server.port);
            let addr = format!("{host}:{port}");
            let listener = tokio::net::TcpListener::bind(&addr).await?;

            if !cli.quiet {
                println!();
                println!(
                    "  {} Folio listening on {}",
                    console::style("⚡").bold(),
                    console::style(format!("http://{addr}")).cyan()
                );
                println!(
                    "  {}",
                    console::style("Press Ctrl+C to stop").dim()
                );
            }
            tracing::info!(
                %addr,
                config = ?state.config_path,
                model = %state.config.generation.model_name(),
                "server started"
            );

            let router = http::router::build_router(state);

            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;

            if !cli.quiet {
                println!("\n  Server stopped.");
            }
        }

        Commands::Check => unreachable!("handled above"),
    }

    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
///
/// If a handler cannot be installed, that signal is logged and ignored.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
