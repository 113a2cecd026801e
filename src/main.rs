//! Taskboard MCP Server - Main Entry Point
//!
//! This is the main entry point for the taskboard MCP server application.
//! The actual implementation is in the `taskboard_mcp` library.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use mcp_attr::server::serve_stdio;
use taskboard_mcp::{Storage, TaskError, TaskboardServerHandler};
use tracing_subscriber::EnvFilter;

/// Taskboard MCP Server - personal daily task tracking via Model Context Protocol
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the task data file (TOML)
    file: String,

    /// Log level when RUST_LOG is not set (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Check if no arguments were provided (except the program name)
    if std::env::args().len() == 1 {
        // No arguments provided, show help and exit with error code
        let mut cmd = Args::command();
        cmd.print_help().ok();
        println!(); // Add a newline after help
        std::process::exit(2);
    }

    let args = Args::parse();

    // stdout carries the MCP transport, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&args.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let handler = TaskboardServerHandler::new(&args.file).map_err(|e| {
        if let Some(TaskError::CorruptState { .. }) = e.downcast_ref::<TaskError>() {
            let backup = Storage::new(&args.file).backup_path();
            tracing::error!(
                backup = %backup.display(),
                "task data is corrupt; refusing to start. Restore the backup or fix the file by hand"
            );
        }
        e
    })?;

    tracing::info!(file = %args.file, "serving taskboard over stdio");
    serve_stdio(handler)
        .await
        .context("MCP server terminated with an error")?;
    Ok(())
}
