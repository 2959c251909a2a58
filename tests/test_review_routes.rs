use std::sync::Arc;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
};
use serde_json::{Value, json};
use tour_reviews::{
    auth::generate_jwt,
    db::MemoryStore,
    http::create_http_routes,
    models::{TourRatings, User},
    state::AppState,
};
use tower::ServiceExt;
use uuid::Uuid;

const SECRET: &str = "test-secret";

struct TestApp {
    router: Router,
    store: Arc<MemoryStore>,
    tour: Uuid,
    user: Uuid,
    token: String,
}

async fn setup() -> TestApp {
    let store = Arc::new(MemoryStore::new());
    let tour = Uuid::new_v4();
    store.add_tour(tour).await;

    let user = Uuid::new_v4();
    store
        .add_user(User {
            id: user,
            name: "Carol".into(),
            email: "carol@example.com".into(),
            photo: Some("carol.jpg".into()),
        })
        .await;

    let token = generate_jwt(user, SECRET).expect("token");
    let router = create_http_routes(AppState::with_store(store.clone(), SECRET));

    TestApp {
        router,
        store,
        tour,
        user,
        token,
    }
}

async fn send(
    app: &TestApp,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        request = request.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let body = match body {
        Some(json) => {
            request = request.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .router
        .clone()
        .oneshot(request.body(body).expect("request"))
        .await
        .expect("response");

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

#[tokio::test]
async fn test_create_requires_token() {
    let app = setup().await;
    let uri = format!("/tours/{}/reviews", app.tour);

    let (status, _) = send(
        &app,
        Method::POST,
        &uri,
        None,
        Some(json!({ "text": "Nice", "rating": 4 })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(
        &app,
        Method::POST,
        &uri,
        Some("not-a-jwt"),
        Some(json!({ "text": "Nice", "rating": 4 })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(app.store.review_count().await, 0);
}

#[tokio::test]
async fn test_nested_create_fills_tour_and_user() {
    let app = setup().await;
    let uri = format!("/tours/{}/reviews", app.tour);

    let (status, body) = send(
        &app,
        Method::POST,
        &uri,
        Some(&app.token),
        Some(json!({ "text": "Breathtaking views", "rating": 5 })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["tour"], json!(app.tour));
    assert_eq!(body["user"], json!(app.user));
    assert_eq!(
        app.store.tour_ratings(app.tour).await,
        Some(TourRatings {
            ratings_quantity: 1,
            ratings_average: 5.0
        })
    );

    let (status, body) = send(&app, Method::GET, &uri, None, None).await;
    assert_eq!(status, StatusCode::OK);
    let reviews = body.as_array().expect("array");
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0]["user"], json!({ "name": "Carol", "photo": "carol.jpg" }));
}

#[tokio::test]
async fn test_write_errors_map_to_status_codes() {
    let app = setup().await;
    let uri = format!("/tours/{}/reviews", app.tour);

    let (status, _) = send(
        &app,
        Method::POST,
        &uri,
        Some(&app.token),
        Some(json!({ "text": "Too good", "rating": 7 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        Method::POST,
        "/reviews",
        Some(&app.token),
        Some(json!({ "text": "Which tour?", "rating": 3 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        Method::POST,
        &uri,
        Some(&app.token),
        Some(json!({ "text": "First", "rating": 3 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = send(
        &app,
        Method::POST,
        &uri,
        Some(&app.token),
        Some(json!({ "text": "Second", "rating": 4 })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = send(
        &app,
        Method::DELETE,
        &format!("/reviews/{}", Uuid::new_v4()),
        Some(&app.token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    assert_eq!(app.store.review_count().await, 1);
}

#[tokio::test]
async fn test_update_and_delete_by_id() {
    let app = setup().await;

    let (status, created) = send(
        &app,
        Method::POST,
        "/reviews",
        Some(&app.token),
        Some(json!({ "review": "Decent", "rating": 3, "tour": app.tour })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let review_uri = format!("/reviews/{}", created["id"].as_str().expect("id"));

    let (status, updated) = send(
        &app,
        Method::PATCH,
        &review_uri,
        Some(&app.token),
        Some(json!({ "rating": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["rating"], json!(1.0));
    assert_eq!(updated["user"]["name"], json!("Carol"));
    assert_eq!(
        app.store.tour_ratings(app.tour).await,
        Some(TourRatings {
            ratings_quantity: 1,
            ratings_average: 1.0
        })
    );

    let (status, fetched) = send(&app, Method::GET, &review_uri, None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["text"], json!("Decent"));

    let (status, _) = send(&app, Method::DELETE, &review_uri, Some(&app.token), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(
        app.store.tour_ratings(app.tour).await,
        Some(TourRatings::default())
    );

    let (status, _) = send(&app, Method::GET, &review_uri, None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_filters_by_query() {
    let app = setup().await;

    send(
        &app,
        Method::POST,
        &format!("/tours/{}/reviews", app.tour),
        Some(&app.token),
        Some(json!({ "text": "Fine", "rating": 4 })),
    )
    .await;

    let (status, all) = send(&app, Method::GET, "/reviews", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all.as_array().map(Vec::len), Some(1));

    let uri = format!("/reviews?tour={}", Uuid::new_v4());
    let (status, none) = send(&app, Method::GET, &uri, None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(none.as_array().map(Vec::len), Some(0));
}

#[tokio::test]
async fn test_review_of_unknown_tour_is_a_bad_request() {
    let app = setup().await;

    let (status, _) = send(
        &app,
        Method::POST,
        &format!("/tours/{}/reviews", Uuid::new_v4()),
        Some(&app.token),
        Some(json!({ "text": "Ghost tour", "rating": 4 })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(app.store.review_count().await, 0);
}

#[tokio::test]
async fn test_patch_with_null_rating_clears_it() {
    let app = setup().await;

    let (_, created) = send(
        &app,
        Method::POST,
        &format!("/tours/{}/reviews", app.tour),
        Some(&app.token),
        Some(json!({ "text": "Okay", "rating": 2 })),
    )
    .await;
    let review_uri = format!("/reviews/{}", created["id"].as_str().expect("id"));

    let (status, updated) = send(
        &app,
        Method::PATCH,
        &review_uri,
        Some(&app.token),
        Some(json!({ "rating": null })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["rating"], Value::Null);
    assert_eq!(updated["text"], json!("Okay"));
    assert_eq!(
        app.store.tour_ratings(app.tour).await,
        Some(TourRatings {
            ratings_quantity: 1,
            ratings_average: 4.5
        })
    );
}
