use uuid::Uuid;

use super::recompute_tour_ratings;
use crate::{
    db::{ReviewStore, TourStore},
    errors::AppError,
    models::{NewReview, PopulatedReview, Review, ReviewPatch},
};

#[derive(Debug, Clone)]
pub enum ReviewMutation {
    Create(NewReview),
    UpdateById(Uuid, ReviewPatch),
    DeleteById(Uuid),
}

#[derive(Debug, Clone, PartialEq)]
pub enum MutationOutcome {
    Created(Review),
    Updated(PopulatedReview),
    /// The review as it was before removal.
    Deleted(PopulatedReview),
}

pub async fn apply_mutation(
    reviews: &dyn ReviewStore,
    tours: &dyn TourStore,
    mutation: ReviewMutation,
) -> Result<MutationOutcome, AppError> {
    match mutation {
        ReviewMutation::Create(new_review) => create_review(reviews, tours, new_review)
            .await
            .map(MutationOutcome::Created),
        ReviewMutation::UpdateById(id, patch) => update_review(reviews, tours, id, patch)
            .await
            .map(MutationOutcome::Updated),
        ReviewMutation::DeleteById(id) => delete_review(reviews, tours, id)
            .await
            .map(MutationOutcome::Deleted),
    }
}

pub async fn create_review(
    reviews: &dyn ReviewStore,
    tours: &dyn TourStore,
    new_review: NewReview,
) -> Result<Review, AppError> {
    let review = new_review.into_review()?;
    reviews.insert_review(&review).await?;

    after_mutation(reviews, tours, review.tour).await?;
    Ok(review)
}

pub async fn update_review(
    reviews: &dyn ReviewStore,
    tours: &dyn TourStore,
    review_id: Uuid,
    patch: ReviewPatch,
) -> Result<PopulatedReview, AppError> {
    patch.validate()?;

    let tour_id = snapshot_tour(reviews, review_id).await?;
    let updated = reviews
        .update_review(review_id, &patch)
        .await?
        .ok_or_else(|| not_found(review_id))?;

    after_mutation(reviews, tours, tour_id).await?;
    Ok(updated)
}

pub async fn delete_review(
    reviews: &dyn ReviewStore,
    tours: &dyn TourStore,
    review_id: Uuid,
) -> Result<PopulatedReview, AppError> {
    let tour_id = snapshot_tour(reviews, review_id).await?;
    let deleted = reviews
        .delete_review(review_id)
        .await?
        .ok_or_else(|| not_found(review_id))?;

    after_mutation(reviews, tours, tour_id).await?;
    Ok(deleted)
}

/// Reads the tour of the review about to change, before the write runs.
async fn snapshot_tour(reviews: &dyn ReviewStore, review_id: Uuid) -> Result<Uuid, AppError> {
    reviews
        .find_review(review_id)
        .await?
        .map(|review| review.tour)
        .ok_or_else(|| not_found(review_id))
}

async fn after_mutation(
    reviews: &dyn ReviewStore,
    tours: &dyn TourStore,
    tour_id: Uuid,
) -> Result<(), AppError> {
    recompute_tour_ratings(reviews, tours, tour_id)
        .await
        .map_err(|e| AppError::RatingsRecompute {
            tour_id,
            source: Box::new(e),
        })?;
    Ok(())
}

fn not_found(review_id: Uuid) -> AppError {
    AppError::NotFound(format!("No review found with id {review_id}"))
}
