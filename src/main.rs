use anyhow::Context;
use chrono::Utc;
use clap::{Parser, Subcommand};
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

mod chart;
mod db;
mod error;
mod ingest;
mod models;
mod questionnaire;
mod sentiment;
mod stats;
mod store;
mod window;

use sentiment::SentimentLexicon;

#[derive(Parser)]
#[command(name = "emotion-pulse")]
#[command(about = "Emotion keyword analytics and questionnaire backend core", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create or upgrade the database schema
    InitDb,
    /// Load the level feedback rows and a starter labeled corpus
    Seed,
    /// Record one emotion keyword and update today's sentiment tally
    Ingest {
        #[arg(long)]
        keyword: String,
    },
    /// Keyword frequency table for a lookback window
    KeywordStats {
        #[arg(long, default_value = "weekly")]
        period: String,
        #[arg(long, default_value_t = 20)]
        limit: usize,
    },
    /// Daily sentiment trend series for the chart
    Chart,
    /// Generate a randomized emotion-labeled questionnaire
    Questionnaire {
        #[arg(long, default_value = "standard")]
        mode: String,
    },
    /// Feedback, tips and references for a test level (1-4)
    LevelFeedback {
        #[arg(long)]
        level: i32,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let database_url = std::env::var("DATABASE_URL")
        .context("DATABASE_URL must be set to a production Postgres instance")?;

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .context("failed to connect to Postgres")?;

    match cli.command {
        Commands::InitDb => {
            db::init_db(&pool).await?;
            println!("Schema ready.");
        }
        Commands::Seed => {
            db::seed(&pool).await?;
            println!("Seed data inserted.");
        }
        Commands::Ingest { keyword } => {
            let store = db::PgStore::new(pool);
            let lexicon = SentimentLexicon::new();
            if !ingest::ingest(&store, &store, &lexicon, &keyword).await {
                anyhow::bail!("failed to process emotion '{keyword}'");
            }
            println!("Recorded '{keyword}'.");
        }
        Commands::KeywordStats { period, limit } => {
            let store = db::PgStore::new(pool);
            let result = stats::aggregate(&store, &period, Utc::now()).await?;

            if result.entries.is_empty() {
                println!("No keywords recorded in the {} window.", result.period);
                return Ok(());
            }

            println!(
                "{} distinct keywords in the {} window:",
                result.distinct_keywords, result.period
            );
            for entry in result.entries.iter().take(limit) {
                println!("- {} x{}", entry.keyword, entry.count);
            }
        }
        Commands::Chart => {
            let store = db::PgStore::new(pool);
            let series = chart::sentiment_series(&store).await?;
            println!("{}", serde_json::to_string_pretty(&series)?);
        }
        Commands::Questionnaire { mode } => {
            let store = db::PgStore::new(pool);
            let items = questionnaire::generate(&store, &mode).await?;
            println!("{}", serde_json::to_string_pretty(&items)?);
        }
        Commands::LevelFeedback { level } => {
            let store = db::PgStore::new(pool);
            let feedback = questionnaire::level_feedback(&store, level).await?;
            println!("{}", serde_json::to_string_pretty(&feedback)?);
        }
    }

    Ok(())
}
