//! Analytics page handler.

use askama::Template;
use axum::{extract::State, response::Html};

use quill_core::{rank_visits, PageviewRepository, PathVisits};

use crate::{ApiError, AppState};

/// Template for the ranked visit-count report.
#[derive(Template)]
#[template(path = "analytics.html")]
pub struct AnalyticsTemplate {
    pub paths: Vec<PathVisits>,
}

/// `GET /analytics` — visit counts per path, highest first.
///
/// Reads the complete pageview log and ranks it in one grouping pass.
/// A failed store read fails the whole report; there is no partial output.
pub async fn analytics_report(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let visits = state.db.pageviews.list().await?;
    let template = AnalyticsTemplate {
        paths: rank_visits(&visits),
    };
    Ok(Html(template.render()?))
}
