#![allow(dead_code)]

use axum::ServiceExt;
use axum::extract::Request;
use axum_test::TestServer;
use page_hydrator::config::Config;
use page_hydrator::dom::Hydration;
use page_hydrator::domain::entities::Place;
use page_hydrator::infrastructure::http::HttpContentRepository;
use page_hydrator::routes::app_router;
use page_hydrator::state::AppState;
use serde_json::{Value, json};
use std::sync::Arc;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub fn create_test_state(api: &MockServer, fallback: Vec<Place>) -> AppState {
    let config = Config {
        api_base_url: api.uri(),
        ..Config::default()
    };
    let repository = Arc::new(HttpContentRepository::new(&config.api_base_url));
    AppState::new(&config, repository, fallback).unwrap()
}

/// Serves the full application, path normalization included.
pub fn test_server(state: AppState) -> TestServer {
    TestServer::new(ServiceExt::<Request>::into_make_service(app_router(state))).unwrap()
}

/// Full application router against a mock upstream API.
pub fn create_test_server(api: &MockServer) -> TestServer {
    test_server(create_test_state(api, Vec::new()))
}

pub async fn mock_json(api: &MockServer, route: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(api)
        .await;
}

pub async fn mock_status(api: &MockServer, route: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status).set_body_string("upstream says no"))
        .mount(api)
        .await;
}

pub fn blog_post(id: i64, slug: &str, title: &str) -> Value {
    json!({
        "post_id": id,
        "slug": slug,
        "title": title,
        "category_title": "Food",
        "author_first_name": "Jane",
        "created_at": "2025-10-05T15:04:00",
        "image": "images/cover.jpg",
        "content": {
            "section_1_title": "Intro",
            "section_1_paragraph_1": "First paragraph."
        },
        "analytics": { "comments": 3 }
    })
}

pub fn hydration(response: &axum_test::TestResponse) -> Hydration {
    response.json::<Hydration>()
}
