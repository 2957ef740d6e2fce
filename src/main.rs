use clap::Parser;
use env_logger::Env;

use jobforce::configuration::get_configuration;
use jobforce::services::JobsDataCollector;

/// Scrape Google Jobs listings for a query into a CSV file.
#[derive(Parser)]
#[command(name = "jobforce", version)]
struct Cli {
    /// The query for which to return Google Jobs results for.
    #[arg(long)]
    query: String,
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let configuration = get_configuration().expect("Failed to read configuration.");

    let collector = JobsDataCollector::new(configuration.scraper);
    collector.save_jobs_data_for_query(&cli.query).await;
}
