//! CLI entrypoint for ai-readiness
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use readiness_application::{AnalyzeAnswersUseCase, DeployServiceUseCase, summarize_reply};
use readiness_domain::QuestionBank;
use readiness_infrastructure::{
    ConfigLoader, FileConfig, HttpCompletionGateway, HttpDeploymentGateway,
};
use readiness_presentation::{AppState, Cli, Command, DeployArgs, ServeArgs, ServerOptions};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over -v flags
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {e}"))?
    };

    let issues = config.validate();
    if !issues.is_empty() {
        for issue in &issues {
            warn!("Invalid configuration: {}", issue);
        }
        bail!("{} configuration error(s), refusing to start", issues.len());
    }

    match cli.command() {
        Command::Serve(args) => serve(config, args).await,
        Command::Deploy(args) => deploy(config, args).await,
    }
}

async fn serve(mut config: FileConfig, args: ServeArgs) -> Result<()> {
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    let static_dir = args
        .static_dir
        .unwrap_or_else(|| PathBuf::from(&config.server.static_dir));

    info!("Starting ai-readiness on {}", config.server.bind_address());

    // === Dependency Injection ===
    let bank = Arc::new(QuestionBank::canonical());
    let gateway = HttpCompletionGateway::from_config(&config.completion)
        .context("Failed to create completion client")?;
    let analyze = AnalyzeAnswersUseCase::new(bank, Arc::new(gateway))
        .with_answer_format(config.prompt.answer_format);

    let options = ServerOptions {
        bind_address: config.server.bind_address(),
        static_dir,
    };

    readiness_presentation::serve(AppState::new(analyze), options)
        .await
        .context("HTTP server failed")
}

async fn deploy(mut config: FileConfig, args: DeployArgs) -> Result<()> {
    let settings = &mut config.deploy;
    if let Some(service_name) = args.service_name {
        settings.service_name = service_name;
    }
    if let Some(repo_url) = args.repo_url {
        settings.repo_url = repo_url;
    }
    if let Some(branch) = args.branch {
        settings.branch = branch;
    }
    if let Some(port) = args.port {
        settings.port = port;
    }

    let api_key = config.completion.resolve_api_key();
    if api_key.is_none() {
        bail!(
            "{} is not set; cannot authenticate with the deployment API",
            config.completion.api_key_env
        );
    }

    let gateway = HttpDeploymentGateway::new(
        &config.completion.base_url,
        api_key,
        Duration::from_secs(config.deploy.timeout_secs),
    )
    .context("Failed to create deployment client")?;

    let request = config.deploy.to_request();
    println!(
        "Deploying {} from {} ({}) on port {}",
        request.service_name, request.repo_url, request.branch, request.port
    );

    let response = DeployServiceUseCase::new(Arc::new(gateway))
        .execute(&request)
        .await
        .context("Deployment request failed")?;

    println!("Deployment request submitted");
    println!("{}", serde_json::to_string_pretty(&response)?);
    for line in summarize_reply(&response) {
        println!("{}", line);
    }
    Ok(())
}
