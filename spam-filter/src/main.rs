//! spam-filter: Spam detection service
//!
//! Serves the classifier over HTTP and offers one-shot commands for
//! classifying, evaluating and exporting the model.

use clap::{Parser, Subcommand};
use spam_filter::classifier::{evaluate, TRAINING_CORPUS};
use spam_filter::persistence;
use spam_filter::{api::ApiServer, Config, SpamFilter};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "spam-filter")]
#[command(about = "Naive Bayes spam classifier", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the HTTP API
    Serve,
    /// Classify a single message
    Predict {
        /// Message text
        text: String,
    },
    /// Print a classification report over the built-in corpus
    Evaluate,
    /// Train and write a model snapshot
    Export {
        /// Destination file
        path: PathBuf,
    },
}

fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("spam_filter={},tower_http={}", config.logging.level, config.logging.level).into()
    });
    let registry = tracing_subscriber::registry().with(filter);

    match config.logging.format.as_str() {
        "json" => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        "pretty" => registry.with(tracing_subscriber::fmt::layer().pretty()).init(),
        _ => registry.with(tracing_subscriber::fmt::layer().compact()).init(),
    }
}

fn build_filter(config: &Config) -> anyhow::Result<SpamFilter> {
    let mode = config.model.probability_mode;
    let filter = match &config.model.snapshot_path {
        Some(path) => persistence::load_or_train(path, mode)?,
        None => {
            let filter = SpamFilter::with_mode(mode);
            filter.train()?;
            filter
        }
    };
    Ok(filter)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref())?;
    config.validate()?;
    init_logging(&config);

    match cli.command {
        Commands::Serve => {
            info!("Starting spam-filter v{}", env!("CARGO_PKG_VERSION"));
            info!("  Listening on: {}", config.server.listen_addr);
            info!("  Probability mode: {:?}", config.model.probability_mode);

            let filter = Arc::new(build_filter(&config)?);
            let server = ApiServer::new(filter, config.server.listen_addr.clone());
            server.run().await?;
        }
        Commands::Predict { text } => {
            let filter = build_filter(&config)?;
            let prediction = filter.predict(&text)?;
            println!("Prediction: {}", prediction.label);
            println!("Confidence: {:.2}%", prediction.probability * 100.0);
        }
        Commands::Evaluate => {
            let filter = build_filter(&config)?;
            let evaluation = evaluate(&filter, &TRAINING_CORPUS)?;
            println!("{}", evaluation);
        }
        Commands::Export { path } => {
            let filter = SpamFilter::with_mode(config.model.probability_mode);
            persistence::save(filter.train()?, &path)?;
            println!("Model written to {}", path.display());
        }
    }

    Ok(())
}
