use serde::Serialize;
use thiserror::Error;

/// One job listing scraped from the results page. Every field is required.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Job {
    pub title: String,
    pub company: String,
    pub location: String,
    pub url: String,
}

/// Raw field values read out of a single listing container, before
/// validation. A child element that could not be found or read leaves its
/// field as `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobCard {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Error, PartialEq)]
#[error("missing required field `{0}` in jobs item")]
pub struct MissingJobField(pub &'static str);

impl TryFrom<JobCard> for Job {
    type Error = MissingJobField;

    fn try_from(card: JobCard) -> Result<Self, Self::Error> {
        Ok(Job {
            title: required_field(card.title, "title")?,
            company: required_field(card.company, "company")?,
            location: required_field(card.location, "location")?,
            url: required_field(card.url, "url")?,
        })
    }
}

fn required_field(value: Option<String>, name: &'static str) -> Result<String, MissingJobField> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(MissingJobField(name)),
    }
}
