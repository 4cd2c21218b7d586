//! Visit recorder: persists one pageview per page-rendering request.

use axum::{
    extract::{Request, State},
    http::{header, Method},
    middleware::Next,
    response::Response,
};
use tracing::debug;
use uuid::Uuid;

use quill_core::{PageviewRepository, RecordPageviewRequest};

use crate::{ApiError, AppState};

/// Only the five page-rendering GET routes qualify as page views: home,
/// analytics, the new-note form, a note view, and a note edit form.
/// Everything else (mutations, assets, health probes, stray 404 paths)
/// must not appear in analytics.
fn is_page_request(method: &Method, path: &str) -> bool {
    if method != Method::GET {
        return false;
    }
    match path {
        "/" | "/analytics" | "/notes/new" => true,
        _ => {
            let Some(rest) = path.strip_prefix("/notes/") else {
                return false;
            };
            let id = rest.strip_suffix("/edit").unwrap_or(rest);
            !id.contains('/') && Uuid::parse_str(id).is_ok()
        }
    }
}

/// Record a pageview before handing the request to the page handler.
///
/// Runs on every page-rendering GET route (home, analytics, note forms,
/// note view). All other requests are passed through without recording.
///
/// Exactly one pageview row is written per qualifying request, stamped
/// with the current time. If persistence fails the request short-circuits
/// with the error response and the page handler never runs.
pub async fn record_visit(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    if !is_page_request(&method, &path) {
        return Ok(next.run(request).await);
    }

    let user_agent = request
        .headers()
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(String::from);

    state
        .db
        .pageviews
        .insert(RecordPageviewRequest {
            path: path.clone(),
            user_agent,
        })
        .await?;

    debug!(subsystem = "web", component = "visit_recorder", path = %path, "Visit recorded");
    Ok(next.run(request).await)
}
