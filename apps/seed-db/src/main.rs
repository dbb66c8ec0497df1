use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use sql_data_provider::DataLayer;

mod names;
mod seed;

/// Fills the store with synthetic organisations and employees
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(long, default_value = "sqlite://rbac.db?mode=rwc")]
    database_url: String,

    #[arg(long, default_value_t = 5)]
    organisations: usize,

    #[arg(long, default_value_t = 10)]
    employees: usize,

    /// makes the generated names reproducible
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,sea_orm=warn")),
        )
        .init();

    let db = sql_data_provider::db_conn(cli.database_url.as_str(), true).await?;
    let data = DataLayer::build(db);

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let summary = seed::seed(&data, cli.organisations, cli.employees, &mut rng).await?;
    tracing::info!(?summary, "Seeding finished");

    println!(
        "Inserted {} organisations and {} employees ({} organisations in store)",
        summary.organisations_created, summary.employees_created, summary.organisations_total
    );

    Ok(())
}
