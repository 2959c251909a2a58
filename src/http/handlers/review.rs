use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::{
    auth::AuthClaims,
    errors::AppError,
    models::{NewReview, PopulatedReview, Review, ReviewFilter, ReviewPatch},
    reviews,
    state::AppState,
};

pub async fn get_all_reviews_handler(
    State(state): State<AppState>,
    Query(filter): Query<ReviewFilter>,
) -> Result<Json<Vec<PopulatedReview>>, (StatusCode, String)> {
    let reviews = reviews::list_reviews(state.reviews.as_ref(), &filter)
        .await
        .map_err(|e| {
            tracing::error!("Error listing reviews: {}", e);
            e.to_response()
        })?;

    Ok(Json(reviews))
}

pub async fn get_tour_reviews_handler(
    State(state): State<AppState>,
    Path(tour_id): Path<Uuid>,
) -> Result<Json<Vec<PopulatedReview>>, (StatusCode, String)> {
    let filter = ReviewFilter::for_tour(tour_id);
    let reviews = reviews::list_reviews(state.reviews.as_ref(), &filter)
        .await
        .map_err(|e| {
            tracing::error!("Error listing reviews of tour {}: {}", tour_id, e);
            e.to_response()
        })?;

    Ok(Json(reviews))
}

pub async fn get_review_handler(
    State(state): State<AppState>,
    Path(review_id): Path<Uuid>,
) -> Result<Json<PopulatedReview>, (StatusCode, String)> {
    let review = reviews::get_review(state.reviews.as_ref(), review_id)
        .await
        .map_err(|e| e.to_response())?;

    Ok(Json(review))
}

pub async fn create_review_handler(
    State(state): State<AppState>,
    claims: AuthClaims,
    Json(payload): Json<NewReview>,
) -> Result<(StatusCode, Json<Review>), (StatusCode, String)> {
    create(state, claims, None, payload).await
}

pub async fn create_tour_review_handler(
    State(state): State<AppState>,
    Path(tour_id): Path<Uuid>,
    claims: AuthClaims,
    Json(payload): Json<NewReview>,
) -> Result<(StatusCode, Json<Review>), (StatusCode, String)> {
    create(state, claims, Some(tour_id), payload).await
}

// The tour defaults to the one in the path, the user to the caller.
async fn create(
    state: AppState,
    claims: AuthClaims,
    tour_id: Option<Uuid>,
    mut payload: NewReview,
) -> Result<(StatusCode, Json<Review>), (StatusCode, String)> {
    if payload.tour.is_none() {
        payload.tour = tour_id;
    }
    if payload.user.is_none() {
        payload.user = Some(claims.user_id().map_err(|e| e.to_response())?);
    }

    let review = reviews::create_review(state.reviews.as_ref(), state.tours.as_ref(), payload)
        .await
        .map_err(log_write_error)?;

    tracing::info!("Review {} created for tour {}", review.id, review.tour);
    Ok((StatusCode::CREATED, Json(review)))
}

pub async fn update_review_handler(
    State(state): State<AppState>,
    Path(review_id): Path<Uuid>,
    _claims: AuthClaims,
    Json(patch): Json<ReviewPatch>,
) -> Result<Json<PopulatedReview>, (StatusCode, String)> {
    let review = reviews::update_review(
        state.reviews.as_ref(),
        state.tours.as_ref(),
        review_id,
        patch,
    )
    .await
    .map_err(log_write_error)?;

    Ok(Json(review))
}

pub async fn delete_review_handler(
    State(state): State<AppState>,
    Path(review_id): Path<Uuid>,
    _claims: AuthClaims,
) -> Result<StatusCode, (StatusCode, String)> {
    reviews::delete_review(state.reviews.as_ref(), state.tours.as_ref(), review_id)
        .await
        .map_err(log_write_error)?;

    Ok(StatusCode::NO_CONTENT)
}

fn log_write_error(err: AppError) -> (StatusCode, String) {
    match &err {
        AppError::Validation { .. } | AppError::DuplicateReview | AppError::NotFound(_) => {
            tracing::debug!("Rejected review write: {}", err);
        }
        _ => tracing::error!("Error writing review: {}", err),
    }
    err.to_response()
}
