use anyhow::Context;

use crate::configuration::ScraperSettings;
use crate::domain::job::Job;
use crate::services::droid::DroidFactory;
use crate::services::scraper::GoogleJobsScraper;
use crate::services::session::JobsSessionFactory;

/// Scrapes Google Jobs for a query and persists the results to a CSV file.
pub struct JobsDataCollector<F> {
    scraper: GoogleJobsScraper<F>,
    output_file: String,
}

impl JobsDataCollector<DroidFactory> {
    pub fn new(settings: ScraperSettings) -> Self {
        let factory = DroidFactory::new(&settings);
        Self::with_factory(factory, settings)
    }
}

impl<F: JobsSessionFactory> JobsDataCollector<F> {
    pub fn with_factory(factory: F, settings: ScraperSettings) -> Self {
        let output_file = settings.output_file.clone();
        JobsDataCollector {
            scraper: GoogleJobsScraper::new(factory, settings),
            output_file,
        }
    }

    /// Scrapes data from Google Jobs for a given query string and stores it
    /// into a CSV file. Failures are logged, never propagated; no file is
    /// written unless at least one listing was found.
    pub async fn save_jobs_data_for_query(&self, query: &str) {
        log::info!("Getting Google Jobs data for query {}..", query);

        let jobs = match self.scraper.get_jobs_data_for_query(query).await {
            Ok(jobs) => jobs,
            Err(e) => {
                log::error!(
                    "Error when scraping Google Jobs for query {}: {:?}",
                    query,
                    e
                );
                return;
            }
        };

        if jobs.is_empty() {
            log::info!("No items found for query.");
            return;
        }

        if let Err(e) = self.save_to_csv(&jobs) {
            log::error!("Error writing jobs for query {}: {:?}", query, e);
        }
    }

    /// Saves given list of jobs to a CSV file, overwriting any previous run.
    fn save_to_csv(&self, jobs: &[Job]) -> anyhow::Result<()> {
        log::info!("Writing {} jobs to {}..", jobs.len(), self.output_file);

        let mut writer = csv::Writer::from_path(&self.output_file)
            .with_context(|| format!("Failed to create {}", self.output_file))?;
        for job in jobs {
            writer.serialize(job)?;
        }
        writer.flush()?;

        Ok(())
    }
}
