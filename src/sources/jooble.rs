use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;
use serde_json::json;

use crate::config::Config;
use crate::error::AppError;
use crate::models::listing::NewListing;
use crate::sources::JobSource;
use crate::sources::classify::classify;

const API_BASE: &str = "https://jooble.org/api";

pub struct Jooble;

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    jobs: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct ApiJob {
    id: i64,
    title: String,
    #[serde(default)]
    company: String,
    #[serde(default)]
    location: String,
    #[serde(default)]
    snippet: String,
    #[serde(default)]
    salary: String,
    #[serde(default)]
    link: String,
    /// Local timestamp without offset, e.g. "2026-08-01T00:00:00.0000000".
    #[serde(default)]
    updated: String,
}

#[async_trait]
impl JobSource for Jooble {
    fn name(&self) -> &'static str {
        "jooble"
    }

    async fn fetch(
        &self,
        client: &reqwest::Client,
        config: &Config,
    ) -> Result<Vec<NewListing>, AppError> {
        let Some(key) = config.jooble_api_key.as_deref() else {
            tracing::warn!("jooble: no API key configured, skipping source");
            return Ok(Vec::new());
        };

        let resp = client
            .post(format!("{API_BASE}/{key}"))
            .json(&json!({ "keywords": config.sync_keywords, "page": "1" }))
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("jooble request failed: {e}")))?;

        if !resp.status().is_success() {
            return Err(AppError::Upstream(format!(
                "jooble returned {}",
                resp.status()
            )));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| AppError::Upstream(format!("jooble body read failed: {e}")))?;

        parse_response(&body)
    }
}

/// Parse a jooble search response, dropping malformed records.
pub fn parse_response(body: &str) -> Result<Vec<NewListing>, AppError> {
    let resp: ApiResponse = serde_json::from_str(body)
        .map_err(|e| AppError::Upstream(format!("jooble payload not parseable: {e}")))?;

    let mut listings = Vec::with_capacity(resp.jobs.len());
    for raw in resp.jobs {
        match serde_json::from_value::<ApiJob>(raw) {
            Ok(job) if !job.title.is_empty() => listings.push(normalize(job)),
            Ok(_) => {}
            Err(e) => tracing::debug!("jooble: dropping malformed record: {e}"),
        }
    }
    Ok(listings)
}

fn normalize(job: ApiJob) -> NewListing {
    let category = classify(&job.company, &job.title, &job.snippet);
    let remote = job.location.to_lowercase().contains("remote");
    NewListing {
        external_id: format!("jooble-{}", job.id),
        title: job.title,
        company: job.company,
        location: job.location,
        description: job.snippet,
        url: job.link,
        remote,
        tags: Vec::new(),
        salary: if job.salary.is_empty() {
            None
        } else {
            Some(job.salary)
        },
        source: "jooble".to_string(),
        category,
        posted_at: parse_updated(&job.updated).unwrap_or_else(Utc::now),
    }
}

/// The API reports timestamps without a zone; treat them as UTC.
fn parse_updated(updated: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(updated, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}
