pub mod jobs;
pub mod tokens;

use axum::Router;
use axum::extract::FromRef;
use axum::middleware;
use axum::routing::{delete, get, post};
use sqlx::PgPool;

use crate::auth::require_api_token;
use crate::config::Config;

#[derive(Clone, FromRef)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Config,
}

pub fn router(pool: PgPool, config: Config) -> Router {
    let state = AppState {
        pool: pool.clone(),
        config,
    };

    // Listing reads are public; everything that mutates the store or
    // manages tokens requires a bearer token.
    let public = Router::new()
        .route("/jobs", get(jobs::list))
        .route("/jobs/stats", get(jobs::stats))
        .route("/jobs/{id}", get(jobs::get));

    let protected = Router::new()
        .route("/jobs", post(jobs::create))
        .route("/jobs/sync", post(jobs::sync))
        .route("/tokens", get(tokens::list).post(tokens::create))
        .route("/tokens/{id}", delete(tokens::revoke))
        .layer(middleware::from_fn_with_state(pool, require_api_token));

    Router::new().nest("/api", public.merge(protected).with_state(state))
}
