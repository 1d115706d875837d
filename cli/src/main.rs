//! CLI entrypoint for ContentForge
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, bail};
use clap::{Parser, ValueEnum};
use forge_application::{
    AgentOrchestrator, GenerationLogger, JobQueue, LlmGateway, QueueWorker,
};
use forge_domain::{GenerationRequest, RequestContext};
use forge_infrastructure::{
    ConfigLoader, HttpLlmGateway, InMemoryJobQueue, JsonlGenerationLogger,
};
use std::path::PathBuf;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Content plus agent and timing details
    Full,
    /// Content only
    Text,
    /// Raw JSON response
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "contentforge", version, about = "AI content generation with agent orchestration")]
struct Cli {
    /// The generation prompt
    prompt: Option<String>,

    /// Run a workflow over these agent ids (comma-separated, in order)
    #[arg(long, value_delimiter = ',')]
    workflow: Option<Vec<String>>,

    /// Existing content to improve instead of writing from scratch
    #[arg(long)]
    selected_content: Option<String>,

    /// Enqueue the request and process it through the queue worker
    #[arg(long)]
    queue: bool,

    /// Show the status of all registered agents and exit
    #[arg(long)]
    status: bool,

    /// Path to an explicit config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Skip all config files and use built-in defaults
    #[arg(long)]
    no_config: bool,

    /// Print the config file locations being used and exit
    #[arg(long)]
    config_sources: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Full)]
    output: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.config_sources {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).map_err(|e| anyhow::anyhow!(e))?
    };

    info!("Starting ContentForge");

    // === Dependency Injection ===
    let gateway: Arc<dyn LlmGateway> = Arc::new(HttpLlmGateway::from_config(&config.providers));
    let queue: Arc<dyn JobQueue> = Arc::new(InMemoryJobQueue::new());
    let token = CancellationToken::new();

    let mut orchestrator = AgentOrchestrator::new(gateway, Arc::clone(&queue))
        .with_cancellation(token.clone());

    if let Some(path) = &config.logging.generation_log {
        match JsonlGenerationLogger::new(path) {
            Some(logger) => {
                orchestrator =
                    orchestrator.with_logger(Arc::new(logger) as Arc<dyn GenerationLogger>);
            }
            None => warn!("generation log disabled, could not open {}", path.display()),
        }
    }

    // Apply per-agent config overrides from file config
    for (agent_id, patch) in &config.agents {
        if !orchestrator.update_agent_config(agent_id, patch) {
            warn!(agent = %agent_id, "config overrides reference unknown agent");
        }
    }

    let orchestrator = Arc::new(orchestrator);

    // Cancel in-flight work on ctrl-c
    {
        let token = token.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                token.cancel();
            }
        });
    }

    if cli.status {
        print_status(&orchestrator);
        return Ok(());
    }

    let Some(prompt) = cli.prompt else {
        bail!("A prompt is required. Use --status to inspect agents.");
    };

    let mut request = GenerationRequest::try_new(prompt, "cli")?;
    if let Some(selected) = cli.selected_content {
        request = request.with_context(RequestContext {
            selected_content: Some(selected),
            ..Default::default()
        });
    }

    if let Some(agent_ids) = cli.workflow {
        let responses = orchestrator.execute_workflow(&request, &agent_ids).await?;
        if responses.is_empty() {
            bail!("No workflow step produced output.");
        }
        for (index, response) in responses.iter().enumerate() {
            if cli.output == OutputFormat::Full {
                println!("=== Step {} ({}) ===", index + 1, response.agent_used);
            }
            print_response(response, cli.output)?;
        }
        return Ok(());
    }

    let response = if cli.queue {
        let job_id = orchestrator.process_request_async(request).await?;
        println!("Queued job {job_id}");

        let worker = QueueWorker::new(Arc::clone(&orchestrator), Arc::clone(&queue))
            .with_cancellation(token.clone());
        worker.drain().await?;

        match queue.job(&job_id).await? {
            Some(job) if job.error.is_none() => {
                println!("Job {} finished: {:?}", job.id, job.status);
                return Ok(());
            }
            Some(job) => bail!(
                "Job {} ended in {:?}: {}",
                job.id,
                job.status,
                job.error.unwrap_or_default()
            ),
            None => bail!("Job {job_id} disappeared from the queue"),
        }
    } else {
        orchestrator.process_request(&request).await?
    };

    print_response(&response, cli.output)
}

fn print_status(orchestrator: &AgentOrchestrator) {
    println!("Registered agents:");
    for snapshot in orchestrator.all_agent_status() {
        println!(
            "  {:<18} {:<10} {:<12} {} / {} [{}]",
            snapshot.id,
            snapshot.agent_type,
            snapshot.status,
            snapshot.provider,
            snapshot.model,
            snapshot.capabilities.join(", ")
        );
    }
}

fn print_response(
    response: &forge_domain::GenerationResponse,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => println!("{}", response.content),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(response)?),
        OutputFormat::Full => {
            println!("{}", response.content);
            println!();
            println!(
                "[agent: {} | confidence: {:.2} | {:.2}s | {} tokens]",
                response.agent_used,
                response.confidence_score,
                response.processing_time,
                response.token_usage.total_tokens
            );
        }
    }
    Ok(())
}
