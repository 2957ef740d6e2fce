use async_trait::async_trait;
use thirtyfour::error::WebDriverResult;

use crate::domain::job::JobCard;

/// Outcome of trying to click the consent interstitial button. The button
/// only shows up for some locales and sessions, so not finding it is a
/// normal outcome rather than an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConsentOutcome {
    Accepted,
    ButtonMissing,
}

/// One live browser session on the jobs results page.
///
/// `quit` consumes the session, so a closed session cannot be reused.
#[async_trait]
pub trait JobsSession: Send + Sync {
    async fn open(&self, url: &str) -> WebDriverResult<()>;

    async fn accept_consent(&self) -> WebDriverResult<ConsentOutcome>;

    async fn scrape_job_cards(&self) -> WebDriverResult<Vec<JobCard>>;

    async fn quit(self) -> WebDriverResult<()>;
}

#[async_trait]
pub trait JobsSessionFactory: Send + Sync {
    type Session: JobsSession;

    async fn launch(&self) -> WebDriverResult<Self::Session>;
}
