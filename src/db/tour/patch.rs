use sqlx::PgPool;
use uuid::Uuid;

use crate::{errors::AppError, models::TourRatings};

pub async fn update_tour_ratings(
    tour_id: Uuid,
    ratings: TourRatings,
    postgres: &PgPool,
) -> Result<(), AppError> {
    let result = sqlx::query(
        "UPDATE tours
			SET ratings_quantity = $2, ratings_average = $3
			WHERE id = $1",
    )
    .bind(tour_id)
    .bind(ratings.ratings_quantity)
    .bind(ratings.ratings_average)
    .execute(postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to update tour ratings: {}", e)))?;

    if result.rows_affected() == 0 {
        tracing::debug!("Tour {} not found, ratings not stored", tour_id);
    }

    Ok(())
}
