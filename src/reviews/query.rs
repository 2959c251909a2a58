use uuid::Uuid;

use crate::{
    db::ReviewStore,
    errors::AppError,
    models::{PopulatedReview, ReviewFilter},
};

pub async fn get_review(
    reviews: &dyn ReviewStore,
    review_id: Uuid,
) -> Result<PopulatedReview, AppError> {
    reviews
        .find_review(review_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No review found with id {review_id}")))
}

pub async fn list_reviews(
    reviews: &dyn ReviewStore,
    filter: &ReviewFilter,
) -> Result<Vec<PopulatedReview>, AppError> {
    reviews.find_reviews(filter).await
}
