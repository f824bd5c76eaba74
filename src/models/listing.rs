use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::error::AppError;

/// Default page size used by the listing endpoint and its client.
pub const DEFAULT_LIMIT: i64 = 30;
/// Upper bound on caller-supplied page sizes.
pub const MAX_LIMIT: i64 = 100;

/// Top-level classification used for tab filtering. Fixed enumeration;
/// free-form categories are rejected at the deserialization boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "listing_category", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Un,
    Ngo,
    #[default]
    International,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Listing {
    pub id: i32,
    /// Dedup key, unique per origin record across all sources.
    pub external_id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub url: String,
    pub remote: bool,
    pub tags: Vec<String>,
    pub salary: Option<String>,
    pub source: String,
    pub category: Category,
    /// Posting time reported by the origin source; the listing sort key.
    pub posted_at: DateTime<Utc>,
    /// Ingestion time; only feeds the last-updated stat, never ordering.
    pub created_at: DateTime<Utc>,
}

/// A normalized posting ready for insertion, produced by a job source
/// or the direct-post handler.
#[derive(Debug, Clone)]
pub struct NewListing {
    pub external_id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub url: String,
    pub remote: bool,
    pub tags: Vec<String>,
    pub salary: Option<String>,
    pub source: String,
    pub category: Category,
    pub posted_at: DateTime<Utc>,
}

/// Validated filter set for listing queries. All fields optional and
/// combined with AND; constructed once at the API boundary.
#[derive(Debug, Clone, Default)]
pub struct ListingFilters {
    /// Case-insensitive substring over title, company or description.
    pub search: Option<String>,
    /// Case-insensitive substring over location.
    pub location: Option<String>,
    /// Some(true) restricts to remote listings; None and Some(false)
    /// impose no constraint.
    pub remote: Option<bool>,
    pub category: Option<Category>,
}

/// One page of listings plus the metadata the infinite-scroll client
/// needs. Serialized as the `{jobs, total, page, totalPages, hasMore}`
/// wire envelope.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingPage {
    pub jobs: Vec<Listing>,
    pub total: i64,
    pub page: i64,
    pub total_pages: i64,
    pub has_more: bool,
}

impl ListingPage {
    pub fn new(jobs: Vec<Listing>, total: i64, page: i64, limit: i64) -> Self {
        let total_pages = total_pages(total, limit);
        ListingPage {
            jobs,
            total,
            page,
            total_pages,
            has_more: page < total_pages,
        }
    }
}

/// Clamp a caller-supplied page number to the valid domain.
pub fn clamp_page(page: Option<i64>) -> i64 {
    page.unwrap_or(1).max(1)
}

/// Clamp a caller-supplied page size to the valid domain.
pub fn clamp_limit(limit: Option<i64>) -> i64 {
    limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
}

/// Number of pages needed to hold `total` rows at `limit` per page.
pub fn total_pages(total: i64, limit: i64) -> i64 {
    if total <= 0 { 0 } else { (total + limit - 1) / limit }
}

const FILTER_WHERE: &str = "($1::text IS NULL OR title ILIKE '%' || $1 || '%' OR company ILIKE '%' || $1 || '%' OR description ILIKE '%' || $1 || '%')
 AND ($2::text IS NULL OR location ILIKE '%' || $2 || '%')
 AND ($3::boolean IS NOT TRUE OR remote = TRUE)
 AND ($4::listing_category IS NULL OR category = $4)";

impl Listing {
    /// Filtered, ordered, paginated read. Ordering is posted_at DESC
    /// with id DESC as tiebreak so repeated identical queries return
    /// identical pages. A page past the end yields an empty list, not
    /// an error.
    pub async fn list(
        pool: &PgPool,
        filters: &ListingFilters,
        page: Option<i64>,
        limit: Option<i64>,
    ) -> Result<ListingPage, AppError> {
        let page = clamp_page(page);
        let limit = clamp_limit(limit);
        let offset = (page - 1) * limit;

        let total = Self::count_filtered(pool, filters).await?;

        let sql = format!(
            "SELECT * FROM listings WHERE {FILTER_WHERE} ORDER BY posted_at DESC, id DESC LIMIT $5 OFFSET $6"
        );
        let jobs = sqlx::query_as::<_, Listing>(&sql)
            .bind(&filters.search)
            .bind(&filters.location)
            .bind(filters.remote)
            .bind(filters.category)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await?;

        Ok(ListingPage::new(jobs, total, page, limit))
    }

    /// Count of rows matching the filter, independent of pagination.
    pub async fn count_filtered(
        pool: &PgPool,
        filters: &ListingFilters,
    ) -> Result<i64, AppError> {
        let sql = format!("SELECT COUNT(*) FROM listings WHERE {FILTER_WHERE}");
        let row: (i64,) = sqlx::query_as(&sql)
            .bind(&filters.search)
            .bind(&filters.location)
            .bind(filters.remote)
            .bind(filters.category)
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }

    pub async fn get(pool: &PgPool, id: i32) -> Result<Listing, AppError> {
        sqlx::query_as::<_, Listing>("SELECT * FROM listings WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Listing {id} not found")))
    }

    /// Insert a single listing; used by the direct-post flow where the
    /// external id is freshly synthesized and cannot collide.
    pub async fn create(pool: &PgPool, input: NewListing) -> Result<Listing, AppError> {
        let listing = sqlx::query_as::<_, Listing>(
            "INSERT INTO listings (external_id, title, company, location, description, url, remote, tags, salary, source, category, posted_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12) RETURNING *",
        )
        .bind(&input.external_id)
        .bind(&input.title)
        .bind(&input.company)
        .bind(&input.location)
        .bind(&input.description)
        .bind(&input.url)
        .bind(input.remote)
        .bind(&input.tags)
        .bind(&input.salary)
        .bind(&input.source)
        .bind(input.category)
        .bind(input.posted_at)
        .fetch_one(pool)
        .await?;
        Ok(listing)
    }

    /// Batch ingestion with insert-if-absent semantics: a posting whose
    /// external_id already exists is skipped silently, never updated.
    /// Returns only the rows that were newly inserted, so a repeated
    /// identical batch returns an empty vec. Runs in one transaction so
    /// a store failure mid-batch applies nothing. Concurrent sync runs
    /// are safe through the unique constraint alone.
    pub async fn insert_batch(
        pool: &PgPool,
        batch: Vec<NewListing>,
    ) -> Result<Vec<Listing>, AppError> {
        let mut tx = pool.begin().await?;
        let mut inserted = Vec::new();
        for input in batch {
            let row = sqlx::query_as::<_, Listing>(
                "INSERT INTO listings (external_id, title, company, location, description, url, remote, tags, salary, source, category, posted_at)
                 VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
                 ON CONFLICT (external_id) DO NOTHING
                 RETURNING *",
            )
            .bind(&input.external_id)
            .bind(&input.title)
            .bind(&input.company)
            .bind(&input.location)
            .bind(&input.description)
            .bind(&input.url)
            .bind(input.remote)
            .bind(&input.tags)
            .bind(&input.salary)
            .bind(&input.source)
            .bind(input.category)
            .bind(input.posted_at)
            .fetch_optional(&mut *tx)
            .await?;
            if let Some(listing) = row {
                inserted.push(listing);
            }
        }
        tx.commit().await?;
        Ok(inserted)
    }
}
