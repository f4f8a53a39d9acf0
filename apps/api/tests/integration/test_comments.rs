use super::helpers::{
    create_comment, empty_request, expect_status, json_request, read_json, send, spawn_app,
};
use axum::http::StatusCode;
use serde_json::{Value, json};

#[tokio::test]
async fn create_without_likes_defaults_to_zero() {
    let app = spawn_app();

    let created = create_comment(&app.app, json!({ "author": "Ada", "text": "First!" })).await;
    assert_eq!(created["likes"], 0);
    assert_eq!(created["author"], "Ada");
    assert!(created["image"].is_null());
    assert!(created["id"].is_i64());
    assert!(created["date"].is_string());
}

#[tokio::test]
async fn list_is_newest_first_regardless_of_insert_order() {
    let app = spawn_app();
    for date in [
        "2024-03-01T00:00:00Z",
        "2024-01-01T00:00:00Z",
        "2024-05-01T00:00:00Z",
        "2024-02-01T00:00:00Z",
    ] {
        create_comment(
            &app.app,
            json!({ "author": "A", "text": date, "date": date }),
        )
        .await;
    }

    let res = send(&app.app, empty_request("GET", "/comments/")).await;
    let body: Value = read_json(expect_status(res, StatusCode::OK).await).await;
    assert_eq!(body["count"], 4);
    assert!(body["next"].is_null());
    assert!(body["previous"].is_null());
    let texts: Vec<&str> = body["results"]
        .as_array()
        .expect("results should be an array")
        .iter()
        .map(|c| c["text"].as_str().unwrap())
        .collect();
    assert_eq!(
        texts,
        vec![
            "2024-05-01T00:00:00Z",
            "2024-03-01T00:00:00Z",
            "2024-02-01T00:00:00Z",
            "2024-01-01T00:00:00Z",
        ]
    );
}

#[tokio::test]
async fn list_window_links_to_neighbours() {
    let app = spawn_app();
    for i in 0..5 {
        create_comment(&app.app, json!({ "author": "A", "text": format!("c{}", i) })).await;
    }

    let res = send(&app.app, empty_request("GET", "/comments/?limit=2&offset=2")).await;
    let body: Value = read_json(expect_status(res, StatusCode::OK).await).await;
    assert_eq!(body["count"], 5);
    assert_eq!(body["results"].as_array().unwrap().len(), 2);
    assert_eq!(body["next"], "/comments/?limit=2&offset=4");
    assert_eq!(body["previous"], "/comments/?limit=2&offset=0");
}

#[tokio::test]
async fn window_at_the_largest_offset_has_no_next_link() {
    let app = spawn_app();
    create_comment(&app.app, json!({ "author": "A", "text": "only" })).await;

    let uri = format!("/comments/?limit=1&offset={}", i64::MAX);
    let res = send(&app.app, empty_request("GET", &uri)).await;
    let body: Value = read_json(expect_status(res, StatusCode::OK).await).await;
    assert_eq!(body["count"], 1);
    assert!(body["results"].as_array().unwrap().is_empty());
    assert!(body["next"].is_null());
    assert_eq!(
        body["previous"],
        format!("/comments/?limit=1&offset={}", i64::MAX - 1)
    );
}

#[tokio::test]
async fn naive_date_is_accepted_as_utc() {
    let app = spawn_app();
    let created = create_comment(
        &app.app,
        json!({ "author": "A", "text": "t", "date": "2024-01-01T00:00:00" }),
    )
    .await;
    assert_eq!(created["date"], "2024-01-01T00:00:00Z");
}

#[tokio::test]
async fn retrieve_update_delete_round() {
    let app = spawn_app();
    let created = create_comment(
        &app.app,
        json!({ "author": "Ada", "text": "hello", "image": "https://example.com/a.png" }),
    )
    .await;
    let id = created["id"].as_i64().unwrap();
    let uri = format!("/comments/{}/", id);

    let res = send(&app.app, empty_request("GET", &uri)).await;
    let fetched: Value = read_json(expect_status(res, StatusCode::OK).await).await;
    assert_eq!(fetched, created);

    // PATCH without image keeps it
    let res = send(&app.app, json_request("PATCH", &uri, &json!({ "text": "edited" }))).await;
    let patched: Value = read_json(expect_status(res, StatusCode::OK).await).await;
    assert_eq!(patched["text"], "edited");
    assert_eq!(patched["image"], "https://example.com/a.png");

    // PATCH with explicit null clears it
    let res = send(&app.app, json_request("PATCH", &uri, &json!({ "image": null }))).await;
    let cleared: Value = read_json(expect_status(res, StatusCode::OK).await).await;
    assert!(cleared["image"].is_null());

    let res = send(
        &app.app,
        json_request("PUT", &uri, &json!({ "author": "Grace", "text": "replaced", "likes": -3 })),
    )
    .await;
    let replaced: Value = read_json(expect_status(res, StatusCode::OK).await).await;
    assert_eq!(replaced["author"], "Grace");
    assert_eq!(replaced["likes"], -3);
    assert_eq!(replaced["date"], created["date"]);

    let res = send(&app.app, empty_request("DELETE", &uri)).await;
    expect_status(res, StatusCode::NO_CONTENT).await;

    let res = send(&app.app, empty_request("GET", &uri)).await;
    expect_status(res, StatusCode::NOT_FOUND).await;
    let res = send(&app.app, empty_request("DELETE", &uri)).await;
    expect_status(res, StatusCode::NOT_FOUND).await;
    assert_eq!(app.repo.len(), 0);
}

#[tokio::test]
async fn put_requires_author_and_text() {
    let app = spawn_app();
    let created = create_comment(&app.app, json!({ "author": "Ada", "text": "hello" })).await;
    let uri = format!("/comments/{}", created["id"]);

    let res = send(&app.app, json_request("PUT", &uri, &json!({ "text": "only text" }))).await;
    expect_status(res, StatusCode::BAD_REQUEST).await;
}

#[tokio::test]
async fn invalid_bodies_are_rejected_and_store_nothing() {
    let app = spawn_app();
    let cases = [
        json!({ "author": "a".repeat(101), "text": "hi" }),
        json!({ "author": "A", "text": "hi", "image": format!("https://example.com/{}", "a".repeat(500)) }),
        json!({ "author": "A", "text": "hi", "image": "not a url" }),
        json!({ "author": "   ", "text": "hi" }),
        json!({ "author": "A" }),
        json!({ "author": "A", "text": "hi", "likes": "many" }),
    ];
    for body in cases {
        let res = send(&app.app, json_request("POST", "/comments/", &body)).await;
        let res = expect_status(res, StatusCode::BAD_REQUEST).await;
        let err: Value = read_json(res).await;
        assert!(err["error"].is_string(), "no error message for {}", body);
    }

    let malformed = axum::http::Request::builder()
        .method("POST")
        .uri("/comments/")
        .header(axum::http::header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from("{not json"))
        .unwrap();
    let res = send(&app.app, malformed).await;
    expect_status(res, StatusCode::BAD_REQUEST).await;

    assert_eq!(app.repo.len(), 0);
}

#[tokio::test]
async fn unknown_id_is_not_found() {
    let app = spawn_app();
    let res = send(&app.app, empty_request("GET", "/comments/999/")).await;
    let res = expect_status(res, StatusCode::NOT_FOUND).await;
    let err: Value = read_json(res).await;
    assert_eq!(err["error"], "Resource not found");

    let res = send(&app.app, json_request("PATCH", "/comments/999/", &json!({ "text": "x" }))).await;
    expect_status(res, StatusCode::NOT_FOUND).await;
}

#[tokio::test]
async fn non_numeric_id_is_not_found_as_json() {
    let app = spawn_app();
    for (method, uri) in [
        ("GET", "/comments/abc/"),
        ("DELETE", "/comments/abc"),
        ("POST", "/comments/abc/toggle-like/"),
    ] {
        let res = send(&app.app, empty_request(method, uri)).await;
        let res = expect_status(res, StatusCode::NOT_FOUND).await;
        let err: Value = read_json(res).await;
        assert_eq!(err["error"], "Resource not found", "{} {}", method, uri);
    }
}

#[tokio::test]
async fn malformed_query_is_a_json_bad_request() {
    let app = spawn_app();
    let res = send(&app.app, empty_request("GET", "/comments/?limit=abc")).await;
    let res = expect_status(res, StatusCode::BAD_REQUEST).await;
    let err: Value = read_json(res).await;
    assert!(err["error"].as_str().unwrap().contains("limit"));
}

#[tokio::test]
async fn responses_carry_a_request_id() {
    let app = spawn_app();
    let res = send(&app.app, empty_request("GET", "/health")).await;
    assert!(res.headers().contains_key("x-request-id"));
    let res = expect_status(res, StatusCode::OK).await;
    let body: Value = read_json(res).await;
    assert_eq!(body["status"], "healthy");
}
