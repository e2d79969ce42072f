// Site routes.
// Mounts the page, API, static and health handlers behind request tracing.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use super::handlers::{health, home, nav_script, page_context};
use super::state::AppState;

/// Create the site router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/api/context", get(page_context))
        .route("/static/js/nav.js", get(nav_script))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{Cache, DEFAULT_TTL};
    use crate::config::{CacheBackendKind, Settings};
    use crate::github::GitHubClient;
    use crate::youtube::YouTubeClient;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn state(server: &MockServer) -> AppState {
        let settings = Settings {
            cache_backend: CacheBackendKind::Memory,
            ..Settings::default()
        };
        AppState::with_clients(
            settings,
            Cache::memory(DEFAULT_TTL),
            GitHubClient::with_base_url(&server.uri(), None).unwrap(),
            YouTubeClient::with_base_urls(&server.uri(), &server.uri()).unwrap(),
        )
    }

    async fn get(router: Router, uri: &str) -> (StatusCode, String) {
        let (status, _, body) = get_with_type(router, uri).await;
        (status, body)
    }

    async fn get_with_type(router: Router, uri: &str) -> (StatusCode, String, String) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, content_type, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_home_page_renders() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/Dprimc/repos"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"name": "msp-toolkit", "html_url": "https://github.com/Dprimc/msp-toolkit"}
            ])))
            .mount(&server)
            .await;

        let (status, html) = get(create_router(state(&server)), "/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Denis Primc"));
        assert!(html.contains("msp-toolkit"));
        assert!(html.contains("Azure AD Conditional Access Explained"));
    }

    #[tokio::test]
    async fn test_home_page_renders_when_upstreams_fail() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let (status, html) = get(create_router(state(&server)), "/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Denis Primc"));
        assert!(!html.contains("id=\"open-source\""));
    }

    #[tokio::test]
    async fn test_context_endpoint() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let (status, body) = get(create_router(state(&server)), "/api/context").await;
        let context: Value = serde_json::from_str(&body).unwrap();

        assert_eq!(status, StatusCode::OK);
        assert_eq!(context["hero"]["name"], "Denis Primc");
        assert_eq!(context["featured_videos"].as_array().unwrap().len(), 3);
        assert!(context["github_projects"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_nav_script_is_served_and_referenced() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;
        let router = create_router(state(&server));

        let (status, content_type, script) =
            get_with_type(router.clone(), "/static/js/nav.js").await;
        assert_eq!(status, StatusCode::OK);
        assert!(content_type.starts_with("application/javascript"));
        assert!(script.contains("aria-expanded"));
        assert!(script.contains("Escape"));

        let (_, html) = get(router, "/").await;
        assert!(html.contains("<script src=\"/static/js/nav.js\" defer></script>"));
    }

    #[tokio::test]
    async fn test_health() {
        let server = MockServer::start().await;
        let (status, body) = get(create_router(state(&server)), "/health").await;
        let health: Value = serde_json::from_str(&body).unwrap();

        assert_eq!(status, StatusCode::OK);
        assert_eq!(health["status"], "healthy");
    }
}
