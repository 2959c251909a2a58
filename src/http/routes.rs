use axum::{Router, routing::get};

use crate::{
    http::handlers::{
        create_review_handler, create_tour_review_handler, delete_review_handler,
        get_all_reviews_handler, get_review_handler, get_tour_reviews_handler,
        update_review_handler,
    },
    state::AppState,
};

pub fn create_http_routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/reviews",
            get(get_all_reviews_handler).post(create_review_handler),
        )
        .route(
            "/reviews/{review_id}",
            get(get_review_handler)
                .patch(update_review_handler)
                .delete(delete_review_handler),
        )
        .route(
            "/tours/{tour_id}/reviews",
            get(get_tour_reviews_handler).post(create_tour_review_handler),
        )
        .with_state(state)
}
