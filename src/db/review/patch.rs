use sqlx::PgPool;
use uuid::Uuid;

use super::{POPULATED_COLUMNS, ReviewRow};
use crate::{
    errors::AppError,
    models::{PopulatedReview, ReviewPatch},
};

pub async fn update_review(
    review_id: Uuid,
    patch: &ReviewPatch,
    postgres: &PgPool,
) -> Result<Option<PopulatedReview>, AppError> {
    let sql = format!(
        "WITH r AS (
				UPDATE reviews
				SET text = COALESCE($2, text), rating = CASE WHEN $3 THEN $4 ELSE rating END
				WHERE id = $1
				RETURNING id, text, rating, created_at, tour_id, user_id
			)
			SELECT {POPULATED_COLUMNS}
			FROM r
			LEFT JOIN users u ON u.id = r.user_id"
    );

    let row = sqlx::query_as::<_, ReviewRow>(&sql)
        .bind(review_id)
        .bind(patch.text.as_deref())
        .bind(patch.rating.is_some())
        .bind(patch.rating.flatten())
        .fetch_optional(postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to update review: {}", e)))?;

    if row.is_some() {
        tracing::debug!("Updated review {}", review_id);
    }

    Ok(row.map(PopulatedReview::from))
}
