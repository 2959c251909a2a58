use async_trait::async_trait;
use sqlx::{PgPool, postgres::PgPoolOptions};
use uuid::Uuid;

use super::{ReviewStore, TourStore, review, tour};
use crate::{
    errors::AppError,
    models::{PopulatedReview, RatingStats, Review, ReviewFilter, ReviewPatch, TourRatings},
};

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, AppError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Failed to connect to Postgres: {}", e)))?;

        tracing::info!("Connected to Postgres");
        Ok(Self { pool })
    }

    pub async fn migrate(&self) -> Result<(), AppError> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Failed to run migrations: {}", e)))?;

        tracing::info!("Database migrations applied");
        Ok(())
    }
}

#[async_trait]
impl ReviewStore for PgStore {
    async fn insert_review(&self, review: &Review) -> Result<(), AppError> {
        review::insert_review(review, &self.pool).await
    }

    async fn find_review(&self, id: Uuid) -> Result<Option<PopulatedReview>, AppError> {
        review::get_review_by_id(id, &self.pool).await
    }

    async fn find_reviews(&self, filter: &ReviewFilter) -> Result<Vec<PopulatedReview>, AppError> {
        review::get_reviews(filter, &self.pool).await
    }

    async fn update_review(
        &self,
        id: Uuid,
        patch: &ReviewPatch,
    ) -> Result<Option<PopulatedReview>, AppError> {
        review::update_review(id, patch, &self.pool).await
    }

    async fn delete_review(&self, id: Uuid) -> Result<Option<PopulatedReview>, AppError> {
        review::delete_review(id, &self.pool).await
    }

    async fn rating_stats(&self, tour_id: Uuid) -> Result<RatingStats, AppError> {
        review::get_rating_stats(tour_id, &self.pool).await
    }
}

#[async_trait]
impl TourStore for PgStore {
    async fn update_tour_ratings(
        &self,
        tour_id: Uuid,
        ratings: TourRatings,
    ) -> Result<(), AppError> {
        tour::update_tour_ratings(tour_id, ratings, &self.pool).await
    }
}
