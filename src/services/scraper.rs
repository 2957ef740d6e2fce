use std::time::Duration;

use thirtyfour::error::{WebDriverError, WebDriverResult};
use thiserror::Error;

use crate::configuration::ScraperSettings;
use crate::domain::job::Job;
use crate::services::session::{ConsentOutcome, JobsSession, JobsSessionFactory};

// The consent redirect and the results list both render asynchronously
// after navigation, so give each a fixed settling delay.
const CONSENT_SETTLE_DELAY: Duration = Duration::from_secs(2);
const RESULTS_RENDER_DELAY: Duration = Duration::from_secs(3);

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Unable to initialize Chrome webdriver for scraping.")]
    DriverInitialization(#[source] WebDriverError),

    #[error("Unable to accept Google consent form.")]
    ConsentFormAccept(#[source] WebDriverError),

    #[error("Unable to get Google Jobs data with Chrome webdriver.")]
    DriverGetJobsData(#[source] WebDriverError),
}

pub struct GoogleJobsScraper<F> {
    factory: F,
    settings: ScraperSettings,
}

impl<F: JobsSessionFactory> GoogleJobsScraper<F> {
    pub fn new(factory: F, settings: ScraperSettings) -> Self {
        GoogleJobsScraper { factory, settings }
    }

    /// Retrieves the job listings on the Google Jobs results page for a
    /// query.
    ///
    /// The webdriver session is closed exactly once on every path out of
    /// this function; only the launch failure path has no session to close.
    pub async fn get_jobs_data_for_query(&self, query: &str) -> Result<Vec<Job>, ScrapeError> {
        log::info!("Retrieving jobs for query {}..", query);

        let session = match self.factory.launch().await {
            Ok(session) => session,
            Err(e) => return Err(ScrapeError::DriverInitialization(e)),
        };

        if let Err(e) = self.accept_consent_form(&session, query).await {
            close_session(session).await;
            return Err(ScrapeError::ConsentFormAccept(e));
        }

        let result = self.scrape_jobs(&session).await;
        close_session(session).await;

        result.map_err(ScrapeError::DriverGetJobsData)
    }

    async fn accept_consent_form(&self, session: &F::Session, query: &str) -> WebDriverResult<()> {
        log::info!("Accepting consent form..");

        let url = self.settings.jobs_url(query);
        session.open(&url).await?;

        if session.accept_consent().await? == ConsentOutcome::ButtonMissing {
            log::warn!("Consent form button not found.");
        }

        tokio::time::sleep(CONSENT_SETTLE_DELAY).await;
        Ok(())
    }

    async fn scrape_jobs(&self, session: &F::Session) -> WebDriverResult<Vec<Job>> {
        log::info!("Scraping Google Jobs page..");
        tokio::time::sleep(RESULTS_RENDER_DELAY).await;

        let cards = session.scrape_job_cards().await?;

        let mut jobs = vec![];
        for card in cards {
            match Job::try_from(card) {
                Ok(job) => jobs.push(job),
                Err(e) => log::warn!("Data missing from jobs item div, skipping: {}", e),
            }
        }

        Ok(jobs)
    }
}

async fn close_session<S: JobsSession>(session: S) {
    if let Err(e) = session.quit().await {
        log::warn!("Error closing webdriver session: {:?}", e);
    }
}
