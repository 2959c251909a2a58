use uuid::Uuid;

use crate::{
    db::{ReviewStore, TourStore},
    errors::AppError,
    models::TourRatings,
};

/// Recomputes the tour's rating fields from all of its reviews and stores
/// them. A tour left without reviews falls back to 0 reviews averaging 4.5.
pub async fn recompute_tour_ratings(
    reviews: &dyn ReviewStore,
    tours: &dyn TourStore,
    tour_id: Uuid,
) -> Result<TourRatings, AppError> {
    let stats = reviews.rating_stats(tour_id).await?;
    let ratings = TourRatings::from_stats(stats);

    tours.update_tour_ratings(tour_id, ratings).await?;

    tracing::debug!(
        "Tour {} ratings: {} reviews, average {}",
        tour_id,
        ratings.ratings_quantity,
        ratings.ratings_average
    );
    Ok(ratings)
}
