use sqlx::PgPool;
use uuid::Uuid;

use super::{POPULATED_COLUMNS, ReviewRow};
use crate::{
    errors::AppError,
    models::{PopulatedReview, RatingStats, ReviewFilter},
};

pub async fn get_review_by_id(
    review_id: Uuid,
    postgres: &PgPool,
) -> Result<Option<PopulatedReview>, AppError> {
    let sql = format!(
        "SELECT {POPULATED_COLUMNS}
			FROM reviews r
			LEFT JOIN users u ON u.id = r.user_id
			WHERE r.id = $1"
    );

    let row = sqlx::query_as::<_, ReviewRow>(&sql)
        .bind(review_id)
        .fetch_optional(postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to fetch review: {}", e)))?;

    Ok(row.map(PopulatedReview::from))
}

pub async fn get_reviews(
    filter: &ReviewFilter,
    postgres: &PgPool,
) -> Result<Vec<PopulatedReview>, AppError> {
    let sql = format!(
        "SELECT {POPULATED_COLUMNS}
			FROM reviews r
			LEFT JOIN users u ON u.id = r.user_id
			WHERE ($1::uuid IS NULL OR r.tour_id = $1)
			ORDER BY r.created_at"
    );

    let rows = sqlx::query_as::<_, ReviewRow>(&sql)
        .bind(filter.tour)
        .fetch_all(postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to fetch reviews: {}", e)))?;

    Ok(rows.into_iter().map(PopulatedReview::from).collect())
}

/// `AVG` skips NULL ratings while `COUNT(*)` counts every review.
pub async fn get_rating_stats(tour_id: Uuid, postgres: &PgPool) -> Result<RatingStats, AppError> {
    let (count, average) = sqlx::query_as::<_, (i64, Option<f64>)>(
        "SELECT COUNT(*), AVG(rating)
			FROM reviews
			WHERE tour_id = $1",
    )
    .bind(tour_id)
    .fetch_one(postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to aggregate ratings: {}", e)))?;

    Ok(RatingStats { count, average })
}
