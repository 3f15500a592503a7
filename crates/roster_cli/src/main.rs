mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use roster_core::DEFAULT_TITLE;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "maintainers")]
#[command(version, about = "Manage BloodHorn Bootloader maintainers", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List maintainers, optionally filtered by role
    List {
        /// Filter by role (display name such as "Core Developer", or slug such as "core-developer")
        #[arg(long, visible_alias = "role")]
        category: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Show a specific maintainer
    Get {
        /// Name of the maintainer (case-insensitive)
        name: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Export maintainers to a Markdown file
    Export {
        /// Output file path
        #[arg(short, long, default_value = "MAINTAINERS.md")]
        output: String,

        /// Top-level document title
        #[arg(long, default_value = DEFAULT_TITLE)]
        title: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout carries only command output
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();

    match cli.command {
        Commands::List { category, format } => {
            commands::list::execute(category.as_deref(), format)
        }

        Commands::Get { name, format } => commands::get::execute(&name, format),

        Commands::Export { output, title } => commands::export::execute(&output, &title),
    }
}
