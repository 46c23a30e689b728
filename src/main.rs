use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

use devcard::report::{self, OutputFormat};
use devcard::{
    api, ClientConfig, Config, GitHubClient, ProfilePipeline, ServerConfig, SnapshotSource,
};

#[derive(Parser, Debug)]
#[command(name = "devcard")]
#[command(version)]
#[command(about = "Developer statistics from a GitHub profile, its repositories and recent events")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the summary for one GitHub user
    Summary {
        /// GitHub username to summarize
        #[arg(short, long)]
        username: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Directory with saved user.json, repos.json and events.json to read instead of the API
        #[arg(long)]
        snapshot: Option<PathBuf>,
    },
    /// Serve GET /api/github-profile?username=...
    Serve {
        /// Address to bind (overrides BIND_ADDRESS)
        #[arg(long)]
        address: Option<String>,

        /// Port to bind (overrides PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("devcard=info".parse()?)
                .add_directive("reqwest=warn".parse()?),
        )
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let config = Config::from_env()?;

    match args.command {
        Command::Summary {
            username,
            format,
            output,
            snapshot,
        } => {
            let pipeline = match snapshot {
                Some(dir) => ProfilePipeline::new(SnapshotSource::new(dir)),
                None => ProfilePipeline::new(GitHubClient::new(&ClientConfig::from(&config))?),
            };

            let spinner = ProgressBar::new_spinner();
            spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
            spinner.set_message(format!("Fetching GitHub data for {}", username));
            spinner.enable_steady_tick(Duration::from_millis(100));

            let result = pipeline.summarize(&username).await;
            spinner.finish_and_clear();
            let summary = result?;

            let rendered = report::render(&summary, format)?;
            if let Some(path) = output {
                std::fs::write(&path, &rendered)?;
                tracing::info!("Output written to: {}", path.display());
            } else {
                println!("{}", rendered);
            }
        }
        Command::Serve { address, port } => {
            let mut server = ServerConfig::from(&config);
            if let Some(address) = address {
                server.address = address;
            }
            if let Some(port) = port {
                server.port = port;
            }

            let pipeline = ProfilePipeline::new(GitHubClient::new(&ClientConfig::from(&config))?);
            tracing::info!("Listening on {}:{}", server.address, server.port);
            api::build(pipeline, api::figment(&server))
                .launch()
                .await
                .map_err(|e| anyhow::anyhow!("Server failed: {}", e))?;
        }
    }

    Ok(())
}
