use clap::{Parser, Subcommand};
use tracesift::{
    client::JaegerClient, config::Config, finder::TraceFinder, models::ErrorCategory, server,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "tracesift")]
#[command(about = "Error-trace aggregation over a Jaeger query backend", version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Server {
        #[arg(short, long, default_value = "3000")]
        port: u16,
    },
    /// Print the trace IDs for one error category and exit
    Errors {
        /// generic, floating-ip or quota
        #[arg(short, long, default_value = "generic")]
        category: String,
    },
    /// Print recently solved floating-IP traces and exit
    SolvedFloatingIp,
    /// Print recently solved quota traces for an instance and exit
    SolvedQuota {
        /// Instance name the server-create span must mention
        instance: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tracesift=info,tower_http=info".into()),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;

    match cli.command {
        Some(Commands::Server { port }) => {
            server::run(config, port).await?;
        }
        Some(Commands::Errors { category }) => {
            let category = ErrorCategory::from_str(&category)
                .ok_or_else(|| anyhow::anyhow!("unknown category '{}'", category))?;
            let finder = build_finder(config)?;
            for trace_id in finder.errors(category).await? {
                println!("{}", trace_id);
            }
        }
        Some(Commands::SolvedFloatingIp) => {
            let finder = build_finder(config)?;
            for trace_id in finder.solved_floating_ip().await? {
                println!("{}", trace_id);
            }
        }
        Some(Commands::SolvedQuota { instance }) => {
            let finder = build_finder(config)?;
            for trace_id in finder.solved_quota(&instance).await? {
                println!("{}", trace_id);
            }
        }
        None => {
            // Default to server
            server::run(config, 3000).await?;
        }
    }

    Ok(())
}

fn build_finder(config: Config) -> anyhow::Result<TraceFinder> {
    let client = JaegerClient::new(&config)?;
    Ok(TraceFinder::new(client, config))
}
