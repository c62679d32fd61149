//! HTTP surface: the home page and the avatar endpoint.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{Path, Query, Request, State},
    http::{header, StatusCode},
    middleware::{self, Next},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Deserialize;

use crate::context::ServiceContext;
use crate::error::AvatarError;
use crate::page::render_home;

/// Query string of the home page.
#[derive(Debug, Deserialize)]
pub struct HomeQuery {
    /// Player identifier typed into the form.
    pub username: Option<String>,
}

/// Build the axum router.
pub fn build_router(ctx: Arc<ServiceContext>) -> Router {
    Router::new()
        .route("/", get(home_handler))
        .route("/avatar/{uuid}", get(avatar_handler))
        .with_state(ctx)
        .layer(middleware::from_fn(log_requests))
}

async fn home_handler(Query(query): Query<HomeQuery>) -> Html<String> {
    Html(render_home(query.username.as_deref()))
}

/// Render one avatar; every pipeline failure becomes a plain-text 500.
async fn avatar_handler(
    State(ctx): State<Arc<ServiceContext>>,
    Path(uuid): Path<String>,
) -> Response {
    match ctx.render(&uuid).await {
        Ok(png) => ([(header::CONTENT_TYPE, "image/png")], png).into_response(),
        Err(e) => {
            if let AvatarError::Download { status } = e {
                tracing::warn!(%uuid, status, "skin API refused the download");
            } else {
                tracing::error!(%uuid, "avatar failed: {e}");
            }
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                format!("Error: {e}"),
            )
                .into_response()
        }
    }
}

/// One log line per request, leveled by response status.
async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let start = Instant::now();

    let response = next.run(request).await;

    let status = response.status().as_u16();
    #[allow(clippy::cast_possible_truncation)]
    let latency_ms = start.elapsed().as_millis() as u64;

    match status {
        500.. => tracing::error!(%method, %path, status, latency_ms, "request failed"),
        400..=499 => tracing::warn!(%method, %path, status, latency_ms, "request rejected"),
        _ => tracing::info!(%method, %path, status, latency_ms, "request served"),
    }

    response
}
