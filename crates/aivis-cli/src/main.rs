mod render;

use std::path::PathBuf;

use aivis_core::{AppConfig, Catalog, Variant};
use aivis_metrics::Session;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "aivis")]
#[command(about = "Simulated AI visibility metrics for pharmaceutical brands")]
struct Cli {
    /// Seed for a reproducible table (overrides AIVIS_SEED)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Column set to synthesize: minimal or extended (overrides AIVIS_VARIANT)
    #[arg(long, global = true)]
    variant: Option<Variant>,

    /// YAML brand/platform catalog (overrides AIVIS_CATALOG_PATH)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print every synthesized row
    Table {
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Print the group with the highest mean for one metric
    Summarize {
        /// Group rows by `brand` or `platform`
        #[arg(long, default_value = "brand")]
        group: String,

        /// Metric column, by display name or snake_case alias
        #[arg(long, default_value = "visibility_score")]
        metric: String,
    },
    /// Print the strategic insights
    Insights,
    /// Print a markdown report with insights and grouped means
    Report,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = aivis_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let session = start_session(&cli, &config)?;

    let output = match cli.command {
        Some(Commands::Table { format }) => match format {
            OutputFormat::Text => render::table_text(session.table()),
            OutputFormat::Json => serde_json::to_string_pretty(session.table().records())?,
        },
        Some(Commands::Summarize { group, metric }) => {
            let top = aivis_metrics::summarize_by_name(session.table(), &group, &metric)?;
            render::top_group(&group, &metric, &top)
        }
        Some(Commands::Insights) => render::insights(&session.insights()?),
        Some(Commands::Report) | None => {
            let now = chrono::Utc::now().format("%Y-%m-%d %H:%M UTC").to_string();
            render::report(&session, &now)?
        }
    };

    println!("{output}");
    Ok(())
}

/// Resolve catalog, variant and seed from flags over config, then synthesize
/// the session table.
fn start_session(cli: &Cli, config: &AppConfig) -> anyhow::Result<Session> {
    let variant = cli.variant.unwrap_or(config.variant);
    let seed = cli.seed.or(config.seed);
    let catalog_path = cli.catalog.as_ref().or(config.catalog_path.as_ref());

    let catalog: Catalog = match catalog_path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading catalog");
            aivis_core::load_catalog(path)?
        }
        None => aivis_core::builtin_catalog(),
    };

    tracing::debug!(env = %config.env, %variant, ?seed, "starting session");
    Ok(Session::start(catalog, variant, seed)?)
}
