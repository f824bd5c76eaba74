// Job source integrations: each source fetches postings from an
// external API and normalizes them into NewListing rows for ingestion.

pub mod arbeitnow;
pub mod classify;
pub mod jooble;
pub mod remoteok;
pub mod runner;

use async_trait::async_trait;

use crate::config::Config;
use crate::error::AppError;
use crate::models::listing::NewListing;

/// Trait that all job sources implement. A fetch returns normalized
/// postings carrying source-prefixed external ids; deduplication
/// against prior runs happens downstream in the store.
#[async_trait]
pub trait JobSource: Send + Sync {
    /// Source name, also stored on every listing this source yields.
    fn name(&self) -> &'static str;

    /// Fetch and normalize the source's current postings.
    async fn fetch(
        &self,
        client: &reqwest::Client,
        config: &Config,
    ) -> Result<Vec<NewListing>, AppError>;
}

/// All registered sources, in sync order.
pub fn all_sources() -> Vec<Box<dyn JobSource>> {
    vec![
        Box::new(arbeitnow::Arbeitnow),
        Box::new(remoteok::RemoteOk),
        Box::new(jooble::Jooble),
    ]
}

pub fn get_source(name: &str) -> Option<Box<dyn JobSource>> {
    all_sources().into_iter().find(|s| s.name() == name)
}
