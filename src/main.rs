use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use snykexporter::export;
use snykexporter::models::IgnoreRecord;
use snykexporter::{Config, HierarchyWalker, SnykClient, WalkerConfig};

#[derive(Parser, Debug)]
#[command(name = "snykexporter")]
#[command(version = "0.1.0")]
#[command(about = "Export Snyk ignore rules across every organization and project")]
struct Args {
    /// Restrict discovery to organizations in this group
    #[arg(short, long)]
    group_id: Option<String>,

    /// Delay between project scans, in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Write the flat records to this CSV file (timestamped name when omitted)
    #[arg(long, value_name = "FILE")]
    csv: Option<PathBuf>,

    /// Also dump the records as pretty JSON to this file
    #[arg(long, value_name = "FILE")]
    json: Option<PathBuf>,

    /// List accessible groups and exit
    #[arg(long)]
    list_groups: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("snykexporter=info".parse()?)
                .add_directive("reqwest=warn".parse()?),
        )
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let config = Config::from_env()?;

    let client = SnykClient::new(&config.api_token, &config.base_url, config.page_limit)?;

    if args.list_groups {
        list_groups(&client).await;
        return Ok(());
    }

    let mut walker_config = WalkerConfig::from(&config);
    walker_config.group_id = args.group_id.clone();
    if let Some(delay_ms) = args.delay_ms {
        walker_config.project_delay = Duration::from_millis(delay_ms);
    }

    let walker = HierarchyWalker::new(client, walker_config);

    tracing::info!("Starting ignore traversal");
    let records = tokio::select! {
        records = walker.process_all() => records,
        _ = tokio::signal::ctrl_c() => {
            tracing::warn!("Interrupted, exiting");
            std::process::exit(130);
        }
    };

    println!("Found {} ignore records", records.len());

    if records.is_empty() {
        tracing::info!("Nothing to export");
        return Ok(());
    }

    export_records(&records, &args)?;

    Ok(())
}

async fn list_groups(client: &SnykClient) {
    let groups = client.groups().await;
    if groups.is_empty() {
        println!("No groups accessible with this token");
        return;
    }

    println!("Available groups:");
    for group in &groups {
        println!(
            "  {} ({})",
            group.display_name(),
            group.id.as_deref().unwrap_or("no id")
        );
    }
}

fn export_records(records: &[IgnoreRecord], args: &Args) -> anyhow::Result<()> {
    // CSV is the primary sink; fall back to a generated name unless the
    // run asked for JSON only.
    let csv_path = match (&args.csv, &args.json) {
        (None, Some(_)) => None,
        (path, _) => Some(
            path.clone()
                .unwrap_or_else(|| PathBuf::from(export::default_file_name("csv"))),
        ),
    };

    if let Some(path) = csv_path {
        export::write_csv(records, &path)?;
        tracing::info!("CSV results saved to: {}", path.display());
    }

    if let Some(path) = &args.json {
        export::write_json(records, path)?;
        tracing::info!("JSON results saved to: {}", path.display());
    }

    Ok(())
}
