// tests/support/helpers.rs
use super::mocks;
use axum::body::{self, Body};
use axum::http::{Request, StatusCode};
use axum::response::Response;
use folio_core::application::queries::content::ContentPolicy;
use folio_core::application::services::ApplicationServices;
use folio_core::domain::content::{ContentEntry, ContentRepository};
use folio_core::domain::profile::SiteProfile;
use folio_core::infrastructure::{content::InMemoryContentRepository, profile::parse_site_profile};
use folio_core::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt as _;

pub const SITE_PROFILE_JSON: &str = include_str!("../../content/site.json");

pub fn site_profile() -> SiteProfile {
    parse_site_profile(SITE_PROFILE_JSON).expect("content/site.json is valid")
}

pub fn build_services_with_repo(
    repo: Arc<dyn ContentRepository>,
    policy: ContentPolicy,
) -> Arc<ApplicationServices> {
    Arc::new(ApplicationServices::new(
        repo,
        Arc::new(site_profile()),
        Arc::new(mocks::fixed_clock()),
        policy,
    ))
}

pub fn build_services(entries: Vec<ContentEntry>, production: bool) -> Arc<ApplicationServices> {
    let repo = InMemoryContentRepository::new(super::builders::collection(entries));
    build_services_with_repo(Arc::new(repo), ContentPolicy::for_environment(production))
}

pub fn make_test_router(entries: Vec<ContentEntry>, production: bool) -> axum::Router {
    let state = HttpState {
        services: build_services(entries, production),
    };
    build_router(state, &[])
}

pub async fn get(app: &axum::Router, uri: &str) -> Response {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("request");
    app.clone().oneshot(req).await.expect("router is infallible")
}

pub async fn read_json(resp: Response) -> Value {
    let (parts, body_stream) = resp.into_parts();
    let bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    serde_json::from_slice(&bytes).expect("valid json body")
}

pub fn slugs(items: &Value) -> Vec<String> {
    items
        .as_array()
        .expect("array of entries")
        .iter()
        .map(|item| item["slug"].as_str().expect("slug").to_string())
        .collect()
}

/// Assert that a response is an error body with the expected status and error string.
pub async fn assert_error_response(
    resp: Response,
    expected_status: StatusCode,
    expected_error: &str,
) -> Value {
    assert_eq!(resp.status(), expected_status);
    let json = read_json(resp).await;
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field");
    json
}
