use serde::Deserialize;
use url::Url;

pub const DEFAULT_JOBS_SEARCH_URL: &str = "https://www.google.com/search?ibp=htl;jobs&hl=en&gl=us";
pub const DEFAULT_WEBDRIVER_URL: &str = "http://localhost:9515";
pub const DEFAULT_OUTPUT_FILE: &str = "jobs.csv";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub scraper: ScraperSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScraperSettings {
    pub search_url: String,
    pub webdriver_url: Url,
    pub output_file: String,
}

impl ScraperSettings {
    /// Returns a Google Jobs URL for a given query string.
    pub fn jobs_url(&self, query: &str) -> String {
        format!("{}&q={}", self.search_url, urlencoding::encode(query))
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    // Defaults first, then environment variables on top, e.g.
    // JOBFORCE_SCRAPER__OUTPUT_FILE=remote_jobs.csv
    let settings = config::Config::builder()
        .set_default("scraper.search_url", DEFAULT_JOBS_SEARCH_URL)?
        .set_default("scraper.webdriver_url", DEFAULT_WEBDRIVER_URL)?
        .set_default("scraper.output_file", DEFAULT_OUTPUT_FILE)?
        .add_source(
            config::Environment::with_prefix("JOBFORCE")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}
