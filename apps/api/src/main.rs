use std::io::Read;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use prepflow::config::Config;
use prepflow::llm_client::LlmClient;
use prepflow::plan::parser::SingleAttemptParser;
use prepflow::render::{export_plan, render_markdown};
use prepflow::requestor::{Notifier, PlanRequestor};
use prepflow::routes::{build_router, GENERATE_PLAN_PATH};
use prepflow::session::Session;
use prepflow::state::AppState;

#[derive(Parser)]
#[command(name = "prepflow", version, about = "Interview prep plans from job descriptions")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the plan generation API
    Serve,
    /// Request a plan from a running API and print it as Markdown
    Plan {
        /// File holding the job description (stdin when omitted)
        #[arg(short, long)]
        file: Option<PathBuf>,
        /// Plan endpoint URL
        #[arg(
            long,
            env = "PREPFLOW_ENDPOINT",
            default_value = "http://localhost:8080/api/v1/generate-prep-plan"
        )]
        endpoint: String,
        /// Also write the plan as a Markdown file into this directory
        #[arg(long)]
        export: Option<PathBuf>,
        /// Client-side request timeout in seconds
        #[arg(long, default_value_t = 120)]
        timeout_secs: u64,
    },
}

/// Prints notifications to stderr so stdout carries only the plan.
struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn success(&self, message: &str) {
        eprintln!("✔ {message}");
    }

    fn error(&self, message: &str) {
        eprintln!("✖ {message}");
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Command::Serve => serve(config).await.map(|()| ExitCode::SUCCESS),
        Command::Plan {
            file,
            endpoint,
            export,
            timeout_secs,
        } => request(file, endpoint, export, Duration::from_secs(timeout_secs)).await,
    }
}

async fn serve(config: Config) -> Result<()> {
    info!("Starting PrepFlow API v{}", env!("CARGO_PKG_VERSION"));

    let llm = LlmClient::from_config(&config).context("Failed to build LLM client")?;
    match &llm {
        Some(client) => info!(
            "LLM client initialized (model: {}, timeout: {}s)",
            client.model(),
            config.ai_timeout.as_secs()
        ),
        None => warn!("AI_API_KEY is not set; plan requests will fail until it is configured"),
    }

    let state = AppState {
        llm,
        config: config.clone(),
        parser: Arc::new(SingleAttemptParser),
    };

    let app = build_router(state);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}, plan endpoint {GENERATE_PLAN_PATH}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn request(
    file: Option<PathBuf>,
    endpoint: String,
    export: Option<PathBuf>,
    timeout: Duration,
) -> Result<ExitCode> {
    let job_description = match file {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read job description from stdin")?;
            buf
        }
    };

    let requestor = PlanRequestor::new(endpoint, timeout, Arc::new(TerminalNotifier))
        .context("Failed to build HTTP client")?;
    let mut session = Session::new(requestor);

    // The notifier already told the user what went wrong.
    let Ok(plan) = session.submit(&job_description).await else {
        return Ok(ExitCode::FAILURE);
    };

    print!("{}", render_markdown(&plan));

    if let Some(dir) = export {
        let path = export_plan(&dir, &plan)?;
        eprintln!("Saved {}", path.display());
    }

    Ok(ExitCode::SUCCESS)
}
