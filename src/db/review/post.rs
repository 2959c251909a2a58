use sqlx::PgPool;

use crate::{errors::AppError, models::Review};

pub async fn insert_review(review: &Review, postgres: &PgPool) -> Result<(), AppError> {
    sqlx::query(
        "INSERT INTO reviews (id, text, rating, created_at, tour_id, user_id)
			VALUES ($1, $2, $3, $4, $5, $6)",
    )
    .bind(review.id)
    .bind(&review.text)
    .bind(review.rating)
    .bind(review.created_at)
    .bind(review.tour)
    .bind(review.user)
    .execute(postgres)
    .await
    .map_err(|e| match e {
        sqlx::Error::Database(db) if db.is_unique_violation() => AppError::DuplicateReview,
        sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
            AppError::unknown_tour(review.tour)
        }
        e => AppError::DatabaseError(format!("Failed to insert review: {}", e)),
    })?;

    tracing::debug!("Inserted review {} for tour {}", review.id, review.tour);
    Ok(())
}
