use sqlx::PgPool;
use uuid::Uuid;

use super::{POPULATED_COLUMNS, ReviewRow};
use crate::{errors::AppError, models::PopulatedReview};

pub async fn delete_review(
    review_id: Uuid,
    postgres: &PgPool,
) -> Result<Option<PopulatedReview>, AppError> {
    let sql = format!(
        "WITH r AS (
				DELETE FROM reviews
				WHERE id = $1
				RETURNING id, text, rating, created_at, tour_id, user_id
			)
			SELECT {POPULATED_COLUMNS}
			FROM r
			LEFT JOIN users u ON u.id = r.user_id"
    );

    let row = sqlx::query_as::<_, ReviewRow>(&sql)
        .bind(review_id)
        .fetch_optional(postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to delete review: {}", e)))?;

    match &row {
        Some(review) => tracing::info!("Deleted review {} of tour {}", review.id, review.tour_id),
        None => tracing::debug!("No review {} to delete", review_id),
    }

    Ok(row.map(PopulatedReview::from))
}
