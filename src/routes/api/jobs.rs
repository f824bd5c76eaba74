use axum::Json;
use axum::extract::{Path, Query, State};
use chrono::Utc;
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::config::Config;
use crate::error::AppError;
use crate::links::is_application_url;
use crate::models::listing::{Category, Listing, ListingFilters, ListingPage, NewListing};
use crate::models::stats::ListingStats;
use crate::sources::runner;

/// Query parameters for GET /api/jobs. An unknown category value is
/// rejected by deserialization before any handler code runs.
#[derive(Debug, Deserialize)]
pub struct JobsQuery {
    pub search: Option<String>,
    pub location: Option<String>,
    pub remote: Option<bool>,
    pub category: Option<Category>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

pub async fn list(
    State(pool): State<PgPool>,
    Query(query): Query<JobsQuery>,
) -> Result<Json<ListingPage>, AppError> {
    let filters = ListingFilters {
        search: query.search.filter(|s| !s.is_empty()),
        location: query.location.filter(|s| !s.is_empty()),
        remote: query.remote,
        category: query.category,
    };
    let page = Listing::list(&pool, &filters, query.page, query.limit).await?;
    Ok(Json(page))
}

pub async fn stats(State(pool): State<PgPool>) -> Result<Json<ListingStats>, AppError> {
    let stats = ListingStats::compute(&pool).await?;
    Ok(Json(stats))
}

pub async fn get(
    State(pool): State<PgPool>,
    Path(id): Path<i32>,
) -> Result<Json<Listing>, AppError> {
    let listing = Listing::get(&pool, id).await?;
    Ok(Json(listing))
}

/// Body for POST /api/jobs, the direct-posting flow.
#[derive(Debug, Deserialize)]
pub struct CreateListing {
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
    pub url: String,
    #[serde(default)]
    pub remote: bool,
    #[serde(default)]
    pub tags: Vec<String>,
    pub salary: Option<String>,
    #[serde(default)]
    pub category: Category,
}

pub async fn create(
    State(pool): State<PgPool>,
    Json(input): Json<CreateListing>,
) -> Result<Json<Listing>, AppError> {
    if input.title.trim().is_empty() {
        return Err(AppError::BadRequest("Title is required".to_string()));
    }
    if input.company.trim().is_empty() {
        return Err(AppError::BadRequest("Company is required".to_string()));
    }
    if !is_application_url(&input.url) {
        return Err(AppError::BadRequest(
            "URL must link to an application page, not a homepage".to_string(),
        ));
    }

    let listing = Listing::create(
        &pool,
        NewListing {
            external_id: format!("direct-{}", Uuid::new_v4()),
            title: input.title,
            company: input.company,
            location: input.location,
            description: input.description,
            url: input.url,
            remote: input.remote,
            tags: input.tags,
            salary: input.salary,
            source: "direct".to_string(),
            category: input.category,
            posted_at: Utc::now(),
        },
    )
    .await?;

    Ok(Json(listing))
}

/// POST /api/jobs/sync
///
/// Runs a full sync cycle inline and reports how many listings were
/// newly ingested. Re-posting the same upstream data is a no-op by the
/// store's dedup policy, so repeated triggers are harmless.
pub async fn sync(
    State(pool): State<PgPool>,
    State(config): State<Config>,
) -> Result<Json<serde_json::Value>, AppError> {
    let client = runner::http_client()?;
    let outcome = runner::sync_all(&pool, &client, &config).await?;

    Ok(Json(serde_json::json!({
        "message": format!("Sync complete: {} new listings", outcome.inserted),
        "count": outcome.inserted,
    })))
}
