// tests/e2e_http.rs
use axum::http::StatusCode;

mod support;

use support::{
    EntryBuilder, assert_error_response, get, make_test_router, read_json, sample_entries, slugs,
};

#[tokio::test]
async fn health_returns_ok() {
    let app = make_test_router(Vec::new(), true);
    let resp = get(&app, "/health").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let json = read_json(resp).await;
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn production_listing_is_newest_first_without_drafts() {
    let app = make_test_router(sample_entries(), true);
    let resp = get(&app, "/api/v1/entries").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let json = read_json(resp).await;
    assert_eq!(
        slugs(&json["items"]),
        ["june-evening", "june", "march", "january"]
    );
    assert_eq!(json["total"], 4);
    assert_eq!(json["items"][1]["published_on"], "June 1, 2023");
    assert_eq!(json["items"][1]["tags"][0], "Rust");
}

#[tokio::test]
async fn development_listing_includes_drafts() {
    let app = make_test_router(sample_entries(), false);
    let json = read_json(get(&app, "/api/v1/entries").await).await;
    assert_eq!(
        slugs(&json["items"]),
        ["draft-july", "june-evening", "june", "march", "january"]
    );
    assert_eq!(json["items"][0]["draft"], true);
}

#[tokio::test]
async fn listing_limit_truncates_after_sorting() {
    let app = make_test_router(sample_entries(), true);
    let json = read_json(get(&app, "/api/v1/entries?limit=2").await).await;
    assert_eq!(slugs(&json["items"]), ["june-evening", "june"]);
    assert_eq!(json["total"], 2);

    let json = read_json(get(&app, "/api/v1/entries?limit=0").await).await;
    assert!(json["items"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn entry_by_slug_hides_drafts_in_production() {
    let prod = make_test_router(sample_entries(), true);
    let resp = get(&prod, "/api/v1/entries/march").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_json(resp).await["slug"], "march");

    let resp = get(&prod, "/api/v1/entries/draft-july").await;
    assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;

    let dev = make_test_router(sample_entries(), false);
    let resp = get(&dev, "/api/v1/entries/draft-july").await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn unknown_slug_is_404() {
    let app = make_test_router(sample_entries(), true);
    let resp = get(&app, "/api/v1/entries/nope").await;
    assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;
}

#[tokio::test]
async fn malformed_timestamp_aborts_the_listing() {
    let mut entries = sample_entries();
    entries.push(EntryBuilder::new("broken").published_at("someday").build());
    let app = make_test_router(entries, true);

    let resp = get(&app, "/api/v1/entries").await;
    let json =
        assert_error_response(resp, StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
            .await;
    assert!(json["message"].as_str().unwrap().contains("broken"));

    let resp = get(&app, "/api/v1/home").await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn home_shows_profile_and_two_most_recent() {
    let app = make_test_router(sample_entries(), true);
    let resp = get(&app, "/api/v1/home").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let json = read_json(resp).await;
    assert_eq!(slugs(&json["recent"]), ["june-evening", "june"]);
    assert_eq!(json["profile"]["author"], "Sam Whitley");
    assert_eq!(json["profile"]["copyright_year"], 2024);
}

#[tokio::test]
async fn profile_lists_socials_and_skills() {
    let app = make_test_router(Vec::new(), true);
    let json = read_json(get(&app, "/api/v1/profile").await).await;
    let labels: Vec<&str> = json["socials"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["label"].as_str().unwrap())
        .collect();
    assert_eq!(labels, ["LinkedIn", "GitHub", "ProtonMail"]);
    assert_eq!(json["skills"][1]["name"], "Python");
}

#[tokio::test]
async fn empty_collection_lists_nothing() {
    let app = make_test_router(Vec::new(), false);
    let json = read_json(get(&app, "/api/v1/entries").await).await;
    assert_eq!(json["total"], 0);
    let home = read_json(get(&app, "/api/v1/home").await).await;
    assert!(home["recent"].as_array().unwrap().is_empty());
}
