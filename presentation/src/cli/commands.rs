//! CLI command definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for ai-readiness
#[derive(Parser, Debug)]
#[command(name = "ai-readiness")]
#[command(author, version, about = "AI readiness survey - answers in, evaluation report out")]
#[command(long_about = r#"
Serves the AI readiness survey. Submitted answers are turned into an
evaluation prompt, sent to the AI Builder completion API, and the model's
report is returned to the browser.

Configuration is merged from (in priority order):
1. PORT and READINESS_* environment variables
2. --config <path>, otherwise ./readiness.toml
3. Built-in defaults

The API credential is read from AI_BUILDER_TOKEN.

Example:
  ai-readiness serve --port 8000
  ai-readiness deploy --branch main
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files and environment overrides
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration sources and exit
    #[arg(long)]
    pub show_config: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run the HTTP server (default)
    Serve(ServeArgs),
    /// Submit this service to the AI Builder deployment API
    Deploy(DeployArgs),
}

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ServeArgs {
    /// Interface to bind
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Directory with index.html and front-end assets
    #[arg(long, value_name = "DIR")]
    pub static_dir: Option<PathBuf>,
}

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct DeployArgs {
    /// Service name on the hosting platform
    #[arg(long)]
    pub service_name: Option<String>,

    /// Git repository to deploy from
    #[arg(long)]
    pub repo_url: Option<String>,

    /// Branch to deploy
    #[arg(long)]
    pub branch: Option<String>,

    /// Port the deployed service listens on
    #[arg(long)]
    pub port: Option<u16>,
}

impl Cli {
    /// The subcommand to run, `serve` when none was given
    pub fn command(&self) -> Command {
        self.command
            .clone()
            .unwrap_or_else(|| Command::Serve(ServeArgs::default()))
    }
}
