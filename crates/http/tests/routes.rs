//! End-to-end tests driving the router against an in-memory database.

#![allow(clippy::unwrap_used, reason = "integration test code")]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, HeaderMap, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use opinions_http::{create_router, AppState};
use opinions_service::OpinionService;
use opinions_storage::{OpinionStore, SqliteStorage};
use tower::ServiceExt;

const DUNE_FORM: &str = "title=Dune&text=Visually+stunning&source=http%3A%2F%2Fexample.com";

async fn test_app() -> (Router, Arc<SqliteStorage>) {
    let storage = Arc::new(SqliteStorage::in_memory().await.unwrap());
    let state = AppState::new(OpinionService::new(storage.clone()));
    (create_router(Arc::new(state)), storage)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, HeaderMap, String) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, headers, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn get(app: &Router, uri: &str) -> (StatusCode, HeaderMap, String) {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

async fn post_form(app: &Router, body: &str) -> (StatusCode, HeaderMap, String) {
    let request = Request::post("/add")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_owned()))
        .unwrap();
    send(app, request).await
}

#[tokio::test]
async fn random_view_on_empty_store_is_500() {
    let (app, _) = test_app().await;
    let (status, _, body) = get(&app, "/").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.contains("Something went wrong"));
}

#[tokio::test]
async fn add_form_renders_blank() {
    let (app, _) = test_app().await;
    let (status, headers, body) = get(&app, "/add").await;
    assert_eq!(status, StatusCode::OK);
    assert!(headers[header::CONTENT_TYPE].to_str().unwrap().starts_with("text/html"));
    assert!(body.contains(r#"<form method="post" action="/add""#));
    assert!(body.contains(r#"name="title""#));
    assert!(!body.contains(r#"class="flash""#));
}

#[tokio::test]
async fn valid_submission_redirects_to_detail() {
    let (app, storage) = test_app().await;
    let (status, headers, _) = post_form(&app, DUNE_FORM).await;
    assert_eq!(status, StatusCode::SEE_OTHER);

    let location = headers[header::LOCATION].to_str().unwrap().to_owned();
    let stored = storage.find_by_text("Visually stunning").await.unwrap().unwrap();
    assert_eq!(location, format!("/opinions/{}", stored.id));

    let (status, _, body) = get(&app, &location).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<h1>Dune</h1>"));
    assert!(body.contains("Visually stunning"));
    assert!(body.contains(r#"href="http://example.com""#));
}

#[tokio::test]
async fn invalid_submission_rerenders_with_errors() {
    let (app, storage) = test_app().await;
    let (status, _, body) = post_form(&app, "title=&text=Only+text").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("This field is required."));
    assert!(body.contains("Only text"));
    assert_eq!(storage.count().await.unwrap(), 0);
}

#[tokio::test]
async fn missing_fields_are_validation_errors() {
    let (app, storage) = test_app().await;
    let (status, _, body) = post_form(&app, "").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.matches("This field is required.").count(), 2);
    assert_eq!(storage.count().await.unwrap(), 0);
}

#[tokio::test]
async fn repeated_field_rerenders_blank_form() {
    let (app, storage) = test_app().await;
    let (status, headers, body) = post_form(&app, "title=a&title=b&text=x").await;
    assert_eq!(status, StatusCode::OK);
    assert!(headers[header::CONTENT_TYPE].to_str().unwrap().starts_with("text/html"));
    assert!(body.contains(r#"<form method="post" action="/add""#));
    assert!(body.contains("The form could not be read."));
    assert_eq!(body.matches("This field is required.").count(), 2);
    assert_eq!(storage.count().await.unwrap(), 0);
}

#[tokio::test]
async fn missing_content_type_rerenders_blank_form() {
    let (app, storage) = test_app().await;
    let request = Request::post("/add").body(Body::from(DUNE_FORM)).unwrap();
    let (status, _, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"<form method="post" action="/add""#));
    assert!(body.contains("The form could not be read."));
    assert!(!body.contains("Visually stunning"));
    assert_eq!(storage.count().await.unwrap(), 0);
}

#[tokio::test]
async fn invalid_utf8_is_stored_with_replacement_characters() {
    let (app, storage) = test_app().await;
    let (status, headers, _) = post_form(&app, "title=Bytes&text=ok%FF%FE").await;
    assert_eq!(status, StatusCode::SEE_OTHER);

    let location = headers[header::LOCATION].to_str().unwrap().to_owned();
    let id: i64 = location.trim_start_matches("/opinions/").parse().unwrap();
    let stored = storage.get_by_id(id).await.unwrap().unwrap();
    assert!(stored.text.starts_with("ok"));
    assert!(stored.text.contains('\u{FFFD}'));
}

#[tokio::test]
async fn unknown_id_is_404() {
    let (app, _) = test_app().await;
    for uri in ["/opinions/1", "/opinions/999999", "/opinions/abc", "/no/such/page"] {
        let (status, _, body) = get(&app, uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert!(body.contains("Page not found"), "{uri}");
    }
}

#[tokio::test]
async fn dune_scenario() {
    let (app, storage) = test_app().await;

    let (status, headers, _) = post_form(&app, DUNE_FORM).await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(storage.count().await.unwrap(), 1);

    for _ in 0..5 {
        let (status, _, body) = get(&app, "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<h1>Dune</h1>"));
    }

    let location = headers[header::LOCATION].to_str().unwrap();
    assert_eq!(location, "/opinions/1");
    let (status, _, body) = get(&app, "/opinions/1").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Visually stunning"));

    let (status, _, body) = post_form(&app, DUNE_FORM).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("This opinion was already submitted!"));
    assert_eq!(storage.count().await.unwrap(), 1);
}

#[tokio::test]
async fn submitted_markup_is_escaped() {
    let (app, _) = test_app().await;
    let (status, headers, _) =
        post_form(&app, "title=%3Cscript%3Ex%3C%2Fscript%3E&text=fine").await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    let location = headers[header::LOCATION].to_str().unwrap().to_owned();
    let (_, _, body) = get(&app, &location).await;
    assert!(body.contains("&lt;script&gt;x&lt;/script&gt;"));
    assert!(!body.contains("<script>x</script>"));
}
