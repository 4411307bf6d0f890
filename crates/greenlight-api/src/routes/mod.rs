//! API routes.

pub mod health;
pub mod repos;
pub mod status;
pub mod ui;

use crate::AppState;
use axum::Router;

/// Build the main router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(ui::router())
        .nest("/api", api_router())
        .merge(health::router())
        .with_state(state)
}

fn api_router() -> Router<AppState> {
    Router::new().merge(repos::router()).merge(status::router())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_repo(platform: &str, owner: &str, name: &str, token: &str) -> Request<Body> {
        let body = json!({
            "platform": platform,
            "owner": owner,
            "name": name,
            "token": token,
        });
        Request::builder()
            .method("POST")
            .uri("/api/repos")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_add_and_list_redacts_token() {
        let app = router(AppState::new());

        let response = app
            .clone()
            .oneshot(post_repo("github", "acme", "widgets", "super-secret"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let created = body_json(response).await;
        assert_eq!(created["success"], json!(true));
        assert_eq!(created["repo"]["id"], json!("acme/widgets"));
        assert_eq!(created["repo"]["token"], json!("***"));

        let response = app
            .oneshot(Request::get("/api/repos").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let listed = body_json(response).await;
        assert_eq!(listed, json!([{
            "id": "acme/widgets",
            "platform": "github",
            "owner": "acme",
            "name": "widgets",
            "token": "***",
        }]));
    }

    #[tokio::test]
    async fn test_delete_unknown_repo_reports_success() {
        let app = router(AppState::new());

        let response = app
            .oneshot(
                Request::delete("/api/repos/never%2Fadded")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({"success": true}));
    }

    #[tokio::test]
    async fn test_status_for_unknown_repo_is_404() {
        let app = router(AppState::new());

        let response = app
            .oneshot(
                Request::get("/api/repos/never%2Fadded/status")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["error"], json!("Repository not found"));
    }

    #[tokio::test]
    async fn test_status_for_unrecognized_platform_is_empty_object() {
        let app = router(AppState::new());

        let response = app
            .clone()
            .oneshot(post_repo("bitbucket", "acme", "widgets", "t"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(
                Request::get("/api/repos/acme%2Fwidgets/status")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({}));
    }

    #[tokio::test]
    async fn test_summary_is_empty_array_without_repos() {
        let app = router(AppState::new());

        let response = app
            .oneshot(Request::get("/api/status").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!([]));
    }

    #[tokio::test]
    async fn test_health() {
        let app = router(AppState::new());

        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({"status": "ok"}));
    }
}
