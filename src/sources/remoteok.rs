use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::config::Config;
use crate::error::AppError;
use crate::models::listing::NewListing;
use crate::sources::JobSource;
use crate::sources::classify::classify;

const API_URL: &str = "https://remoteok.com/api";

pub struct RemoteOk;

#[async_trait]
impl JobSource for RemoteOk {
    fn name(&self) -> &'static str {
        "remoteok"
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
            .map_err(|e| AppError::Upstream(format!("remoteok request failed: {e}")))?;

        if !resp.status().is_success() {
            return Err(AppError::Upstream(format!(
                "remoteok returned {}",
                resp.status()
            )));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| AppError::Upstream(format!("remoteok body read failed: {e}")))?;

        parse_response(&body)
    }
}

/// Parse the RemoteOK API payload: a JSON array whose first element is
/// a legal notice object, followed by the postings. Records without an
/// id or position are skipped.
pub fn parse_response(body: &str) -> Result<Vec<NewListing>, AppError> {
    let items: Vec<Value> = serde_json::from_str(body)
        .map_err(|e| AppError::Upstream(format!("remoteok payload not parseable: {e}")))?;

    let mut listings = Vec::new();
    for raw in &items {
        if let Some(listing) = parse_job(raw) {
            listings.push(listing);
        }
    }
    Ok(listings)
}

fn parse_job(raw: &Value) -> Option<NewListing> {
    // The legal-notice element has no id; skipping on a missing id
    // also drops it.
    let id = match raw.get("id")? {
        Value::String(s) if !s.is_empty() => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };

    let title = raw.get("position").and_then(|v| v.as_str())?.to_string();
    if title.is_empty() {
        return None;
    }

    let company = str_field(raw, "company");
    let description = str_field(raw, "description");
    let location = {
        let loc = str_field(raw, "location");
        if loc.is_empty() { "Remote".to_string() } else { loc }
    };

    let url = raw
        .get("apply_url")
        .or_else(|| raw.get("url"))
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();

    let tags = raw
        .get("tags")
        .and_then(|v| v.as_array())
        .map(|a| {
            a.iter()
                .filter_map(|t| t.as_str())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default();

    let posted_at = raw
        .get("epoch")
        .and_then(|v| v.as_i64())
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .or_else(|| {
            raw.get("date")
                .and_then(|v| v.as_str())
                .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
                .map(|dt| dt.with_timezone(&Utc))
        })
        .unwrap_or_else(Utc::now);

    let category = classify(&company, &title, &description);

    Some(NewListing {
        external_id: format!("remoteok-{id}"),
        title,
        company,
        location,
        description,
        url,
        // Everything on this board is remote by definition.
        remote: true,
        tags,
        salary: format_salary(raw),
        source: "remoteok".to_string(),
        category,
        posted_at,
    })
}

fn str_field(raw: &Value, key: &str) -> String {
    raw.get(key)
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string()
}

/// Fold the structured salary range into the free-text salary field.
fn format_salary(raw: &Value) -> Option<String> {
    let min = raw.get("salary_min").and_then(|v| v.as_i64()).unwrap_or(0);
    let max = raw.get("salary_max").and_then(|v| v.as_i64()).unwrap_or(0);
    match (min > 0, max > min) {
        (true, true) => Some(format!("${min} - ${max}")),
        (true, false) => Some(format!("${min}")),
        _ => None,
    }
}
