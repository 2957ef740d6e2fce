use async_trait::async_trait;
use thirtyfour::error::{WebDriverError, WebDriverResult};
use thirtyfour::{By, ChromiumLikeCapabilities, DesiredCapabilities, WebDriver, WebElement};
use url::Url;

use crate::configuration::ScraperSettings;
use crate::domain::job::JobCard;
use crate::services::session::{ConsentOutcome, JobsSession, JobsSessionFactory};

// Structural markers of the rendered results page.
const CONSENT_BUTTON_XPATH: &str =
    "/html/body/c-wiz/div/div/div/div[2]/div[1]/div[3]/div[1]/div[1]/form[2]/div/div/button/span";
const JOB_ITEM_CLASS: &str = "EimVGf";
const TITLE_CLASS: &str = "tNxQIb";
const COMPANY_CLASS: &str = "a3jPc";
const LOCATION_CLASS: &str = "FqK3wc";
const LINK_CLASS: &str = "MQUd2b";

/// A headless Chrome session driven over the WebDriver protocol.
pub struct Droid {
    driver: WebDriver,
}

pub struct DroidFactory {
    webdriver_url: Url,
}

impl DroidFactory {
    pub fn new(settings: &ScraperSettings) -> Self {
        DroidFactory {
            webdriver_url: settings.webdriver_url.clone(),
        }
    }
}

#[async_trait]
impl JobsSessionFactory for DroidFactory {
    type Session = Droid;

    async fn launch(&self) -> WebDriverResult<Droid> {
        let mut caps = DesiredCapabilities::chrome();
        caps.set_headless()?;
        // Chrome refuses to sandbox as root inside a container.
        caps.set_no_sandbox()?;
        caps.set_disable_dev_shm_usage()?;

        let driver = WebDriver::new(self.webdriver_url.as_str(), caps).await?;

        Ok(Droid { driver })
    }
}

#[async_trait]
impl JobsSession for Droid {
    async fn open(&self, url: &str) -> WebDriverResult<()> {
        self.driver.goto(url).await
    }

    async fn accept_consent(&self) -> WebDriverResult<ConsentOutcome> {
        let button = match self.driver.find(By::XPath(CONSENT_BUTTON_XPATH)).await {
            Ok(button) => button,
            Err(WebDriverError::NoSuchElement(_)) => return Ok(ConsentOutcome::ButtonMissing),
            Err(e) => return Err(e),
        };
        button.click().await?;

        Ok(ConsentOutcome::Accepted)
    }

    async fn scrape_job_cards(&self) -> WebDriverResult<Vec<JobCard>> {
        let items = self.driver.find_all(By::ClassName(JOB_ITEM_CLASS)).await?;

        let mut cards = Vec::with_capacity(items.len());
        for item in items {
            cards.push(JobCard {
                title: child_text(&item, TITLE_CLASS).await,
                company: child_text(&item, COMPANY_CLASS).await,
                location: child_text(&item, LOCATION_CLASS).await,
                url: child_attr(&item, LINK_CLASS, "href").await,
            });
        }

        Ok(cards)
    }

    async fn quit(self) -> WebDriverResult<()> {
        self.driver.quit().await
    }
}

async fn child_text(item: &WebElement, class_name: &str) -> Option<String> {
    let element = item.find(By::ClassName(class_name)).await.ok()?;
    element.text().await.ok()
}

async fn child_attr(item: &WebElement, class_name: &str, attr_name: &str) -> Option<String> {
    let element = item.find(By::ClassName(class_name)).await.ok()?;
    element.attr(attr_name).await.ok().flatten()
}
