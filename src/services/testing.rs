//! Fakes for the webdriver session seam, used by the scraper and collector
//! tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use thirtyfour::error::{WebDriverError, WebDriverResult};

use crate::configuration::{
    DEFAULT_JOBS_SEARCH_URL, DEFAULT_OUTPUT_FILE, DEFAULT_WEBDRIVER_URL, ScraperSettings,
};
use crate::domain::job::JobCard;
use crate::services::session::{ConsentOutcome, JobsSession, JobsSessionFactory};

/// The stage at which a fake session should fail.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum FailAt {
    #[default]
    Nowhere,
    Launch,
    Open,
    ConsentClick,
    ScrapeJobCards,
}

#[derive(Clone)]
pub struct QuitCounter(Arc<AtomicUsize>);

impl QuitCounter {
    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

#[derive(Default)]
pub struct FakeSessionFactory {
    pub fail_at: FailAt,
    pub consent_button_missing: bool,
    pub cards: Vec<JobCard>,
    quit_calls: Arc<AtomicUsize>,
    visited_urls: Arc<Mutex<Vec<String>>>,
}

impl FakeSessionFactory {
    pub fn with_cards(cards: Vec<JobCard>) -> Self {
        FakeSessionFactory {
            cards,
            ..Default::default()
        }
    }

    pub fn failing_at(fail_at: FailAt) -> Self {
        FakeSessionFactory {
            fail_at,
            ..Default::default()
        }
    }

    pub fn quit_calls(&self) -> QuitCounter {
        QuitCounter(self.quit_calls.clone())
    }

    pub fn visited_urls(&self) -> Arc<Mutex<Vec<String>>> {
        self.visited_urls.clone()
    }
}

pub struct FakeSession {
    fail_at: FailAt,
    consent_button_missing: bool,
    cards: Vec<JobCard>,
    quit_calls: Arc<AtomicUsize>,
    visited_urls: Arc<Mutex<Vec<String>>>,
}

#[async_trait]
impl JobsSessionFactory for FakeSessionFactory {
    type Session = FakeSession;

    async fn launch(&self) -> WebDriverResult<FakeSession> {
        if self.fail_at == FailAt::Launch {
            return Err(webdriver_error("webdriver refused the session"));
        }

        Ok(FakeSession {
            fail_at: self.fail_at,
            consent_button_missing: self.consent_button_missing,
            cards: self.cards.clone(),
            quit_calls: self.quit_calls.clone(),
            visited_urls: self.visited_urls.clone(),
        })
    }
}

#[async_trait]
impl JobsSession for FakeSession {
    async fn open(&self, url: &str) -> WebDriverResult<()> {
        if self.fail_at == FailAt::Open {
            return Err(webdriver_error("navigation failed"));
        }
        self.visited_urls.lock().unwrap().push(url.to_string());
        Ok(())
    }

    async fn accept_consent(&self) -> WebDriverResult<ConsentOutcome> {
        if self.fail_at == FailAt::ConsentClick {
            return Err(webdriver_error("consent click failed"));
        }
        match self.consent_button_missing {
            true => Ok(ConsentOutcome::ButtonMissing),
            false => Ok(ConsentOutcome::Accepted),
        }
    }

    async fn scrape_job_cards(&self) -> WebDriverResult<Vec<JobCard>> {
        if self.fail_at == FailAt::ScrapeJobCards {
            return Err(webdriver_error("results list missing"));
        }
        Ok(self.cards.clone())
    }

    async fn quit(self) -> WebDriverResult<()> {
        self.quit_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

fn webdriver_error(message: &str) -> WebDriverError {
    WebDriverError::FatalError(message.to_string())
}

/// A fully populated card, numbered so tests can assert on ordering.
pub fn full_card(n: usize) -> JobCard {
    JobCard {
        title: Some(format!("Job title {}", n)),
        company: Some(format!("Company {}", n)),
        location: Some(format!("Location {}", n)),
        url: Some(format!("https://example.com/jobs/{}", n)),
    }
}

pub fn test_settings() -> ScraperSettings {
    ScraperSettings {
        search_url: DEFAULT_JOBS_SEARCH_URL.to_string(),
        webdriver_url: DEFAULT_WEBDRIVER_URL.parse().unwrap(),
        output_file: DEFAULT_OUTPUT_FILE.to_string(),
    }
}
