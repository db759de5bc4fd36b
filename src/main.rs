use clap::{Parser, Subcommand};
use std::process::ExitCode;

use groupdeck::commands::{
    LsOptions, cmd_config_get, cmd_config_path, cmd_config_set, cmd_ls, cmd_tui,
};

#[derive(Parser)]
#[command(name = "groupdeck")]
#[command(about = "Terminal dashboard for WhatsApp group metadata")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive dashboard (the default when no command is given)
    Tui {
        /// Seed the initial state from a view-link query string
        #[arg(long)]
        view: Option<String>,

        /// Directory server URL (overrides the configured endpoint)
        #[arg(long)]
        server: Option<String>,

        /// Use the built-in demo dataset instead of a server
        #[arg(long)]
        demo: bool,
    },

    /// List groups to stdout
    Ls {
        /// Restrict to one phone number
        #[arg(long)]
        phone: Option<String>,

        /// Search group names (case-insensitive substring)
        #[arg(long)]
        search: Option<String>,

        /// Filter by exact project name
        #[arg(long)]
        project: Option<String>,

        /// Require a label (repeatable; groups must carry all of them)
        #[arg(long = "label", action = clap::ArgAction::Append)]
        labels: Vec<String>,

        /// Page number (1-based)
        #[arg(long)]
        page: Option<usize>,

        /// Page size (5, 10, 25, or 50)
        #[arg(long = "page-size")]
        page_size: Option<usize>,

        /// View-link query string; explicit flags win over it
        #[arg(long)]
        view: Option<String>,

        /// Directory server URL (overrides the configured endpoint)
        #[arg(long)]
        server: Option<String>,

        /// Use the built-in demo dataset instead of a server
        #[arg(long)]
        demo: bool,

        /// Output format (text, json)
        #[arg(long, default_value = "text")]
        output: String,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print a configuration value
    Get {
        /// Configuration key (server_url, page_size, timeout_seconds)
        key: String,
    },
    /// Set a configuration value
    Set {
        /// Configuration key (server_url, page_size, timeout_seconds)
        key: String,
        /// Value to set
        value: String,
    },
    /// Print the config file location
    Path,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        None => cmd_tui(None, None, false).await,

        Some(Commands::Tui { view, server, demo }) => {
            cmd_tui(view.as_deref(), server.as_deref(), demo).await
        }

        Some(Commands::Ls {
            phone,
            search,
            project,
            labels,
            page,
            page_size,
            view,
            server,
            demo,
            output,
        }) => {
            cmd_ls(LsOptions {
                phone,
                search,
                project,
                labels,
                page,
                page_size,
                view,
                server,
                demo,
                output_json: output == "json",
            })
            .await
        }

        Some(Commands::Config { action }) => match action {
            ConfigAction::Get { key } => cmd_config_get(&key),
            ConfigAction::Set { key, value } => cmd_config_set(&key, &value),
            ConfigAction::Path => cmd_config_path(),
        },
    };

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
