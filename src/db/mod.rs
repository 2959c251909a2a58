pub mod memory;
pub mod postgres;
pub mod review;
pub mod tour;

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    errors::AppError,
    models::{PopulatedReview, RatingStats, Review, ReviewFilter, ReviewPatch, TourRatings},
};

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Storage for reviews.
///
/// Every read, including the update-and-return and delete-and-return
/// variants, yields a [`PopulatedReview`] carrying the author's name and
/// photo. Implementations must reject a second review for the same
/// (tour, user) pair with [`AppError::DuplicateReview`], atomically with
/// the insert, and a review of an unknown tour with a validation error on
/// `tour`. The user is only a reference: reviews outlive their author.
#[async_trait]
pub trait ReviewStore: Send + Sync {
    async fn insert_review(&self, review: &Review) -> Result<(), AppError>;

    async fn find_review(&self, id: Uuid) -> Result<Option<PopulatedReview>, AppError>;

    async fn find_reviews(&self, filter: &ReviewFilter) -> Result<Vec<PopulatedReview>, AppError>;

    /// Applies `patch` and returns the review as it is after the update.
    async fn update_review(
        &self,
        id: Uuid,
        patch: &ReviewPatch,
    ) -> Result<Option<PopulatedReview>, AppError>;

    /// Removes the review and returns it as it was.
    async fn delete_review(&self, id: Uuid) -> Result<Option<PopulatedReview>, AppError>;

    /// Count of the tour's reviews and mean of their defined ratings.
    async fn rating_stats(&self, tour_id: Uuid) -> Result<RatingStats, AppError>;
}

/// The tour side of the relationship: only the derived rating fields are
/// ever written from here.
#[async_trait]
pub trait TourStore: Send + Sync {
    /// Overwrites the tour's rating fields. A missing tour is not an error.
    async fn update_tour_ratings(&self, tour_id: Uuid, ratings: TourRatings)
    -> Result<(), AppError>;
}
