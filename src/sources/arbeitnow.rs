use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::config::Config;
use crate::error::AppError;
use crate::models::listing::NewListing;
use crate::sources::JobSource;
use crate::sources::classify::classify;

const API_URL: &str = "https://www.arbeitnow.com/api/job-board-api";

pub struct Arbeitnow;

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    data: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct ApiJob {
    slug: String,
    title: String,
    #[serde(default)]
    company_name: String,
    #[serde(default)]
    location: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    url: String,
    #[serde(default)]
    remote: bool,
    #[serde(default)]
    tags: Vec<String>,
    /// Unix seconds as reported by the board.
    #[serde(default)]
    created_at: i64,
}

#[async_trait]
impl JobSource for Arbeitnow {
    fn name(&self) -> &'static str {
        "arbeitnow"
    }

    async fn fetch(
        &self,
        client: &reqwest::Client,
        _config: &Config,
    ) -> Result<Vec<NewListing>, AppError> {
        let resp = client
            .get(API_URL)
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("arbeitnow request failed: {e}")))?;

        if !resp.status().is_success() {
            return Err(AppError::Upstream(format!(
                "arbeitnow returned {}",
                resp.status()
            )));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| AppError::Upstream(format!("arbeitnow body read failed: {e}")))?;

        parse_response(&body)
    }
}

/// Parse the job-board-api payload. Records that fail to deserialize
/// or lack a usable title are dropped individually, never failing the
/// whole batch.
pub fn parse_response(body: &str) -> Result<Vec<NewListing>, AppError> {
    let resp: ApiResponse = serde_json::from_str(body)
        .map_err(|e| AppError::Upstream(format!("arbeitnow payload not parseable: {e}")))?;

    let mut listings = Vec::with_capacity(resp.data.len());
    for raw in resp.data {
        match serde_json::from_value::<ApiJob>(raw) {
            Ok(job) if !job.title.is_empty() => listings.push(normalize(job)),
            Ok(job) => tracing::debug!("arbeitnow: dropping record without title: {}", job.slug),
            Err(e) => tracing::debug!("arbeitnow: dropping malformed record: {e}"),
        }
    }
    Ok(listings)
}

fn normalize(job: ApiJob) -> NewListing {
    let category = classify(&job.company_name, &job.title, &job.description);
    NewListing {
        external_id: format!("arbeitnow-{}", job.slug),
        title: job.title,
        company: job.company_name,
        location: job.location,
        description: job.description,
        url: job.url,
        remote: job.remote,
        tags: job.tags,
        salary: None,
        source: "arbeitnow".to_string(),
        category,
        posted_at: DateTime::from_timestamp(job.created_at, 0).unwrap_or_else(Utc::now),
    }
}
