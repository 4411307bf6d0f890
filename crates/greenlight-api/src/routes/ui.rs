//! UI route serving the dashboard page.

use askama::Template;
use axum::Router;
use axum::response::{Html, IntoResponse};
use axum::routing::get;

use crate::AppState;
use crate::error::ApiError;

/// Interval at which the browser re-polls the JSON endpoints.
const REFRESH_MS: u32 = 30_000;

#[derive(Template)]
#[template(path = "pages/dashboard.html")]
struct DashboardTemplate {
    refresh_ms: u32,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(dashboard_page))
}

async fn dashboard_page() -> Result<impl IntoResponse, ApiError> {
    let template = DashboardTemplate {
        refresh_ms: REFRESH_MS,
    };

    match template.render() {
        Ok(html) => Ok(Html(html)),
        Err(e) => {
            tracing::error!("Dashboard template render error: {}", e);
            Err(ApiError::Internal(format!("Template error: {}", e)))
        }
    }
}
