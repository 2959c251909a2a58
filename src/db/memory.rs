use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;
use uuid::Uuid;

use super::{ReviewStore, TourStore};
use crate::{
    errors::AppError,
    models::{
        PopulatedReview, RatingStats, Review, ReviewFilter, ReviewPatch, TourRatings, User,
    },
};

#[derive(Debug, Default)]
struct MemoryData {
    // insertion order doubles as creation order
    reviews: Vec<Review>,
    users: HashMap<Uuid, User>,
    tours: HashMap<Uuid, TourRatings>,
}

impl MemoryData {
    fn populate(&self, review: Review) -> PopulatedReview {
        let author = self.users.get(&review.user).map(User::author);
        PopulatedReview::from_review(review, author)
    }

    fn position(&self, id: Uuid) -> Option<usize> {
        self.reviews.iter().position(|r| r.id == id)
    }
}

/// Process-local store holding reviews, users and tour ratings behind a
/// single lock, so the (tour, user) check and the insert happen together.
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: Mutex<MemoryData>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add_user(&self, user: User) {
        self.data.lock().await.users.insert(user.id, user);
    }

    pub async fn remove_user(&self, user_id: Uuid) -> Option<User> {
        self.data.lock().await.users.remove(&user_id)
    }

    /// Registers a tour with the ratings of a tour that has no reviews.
    pub async fn add_tour(&self, tour_id: Uuid) {
        self.data
            .lock()
            .await
            .tours
            .insert(tour_id, TourRatings::default());
    }

    pub async fn tour_ratings(&self, tour_id: Uuid) -> Option<TourRatings> {
        self.data.lock().await.tours.get(&tour_id).copied()
    }

    pub async fn review_count(&self) -> usize {
        self.data.lock().await.reviews.len()
    }
}

#[async_trait]
impl ReviewStore for MemoryStore {
    async fn insert_review(&self, review: &Review) -> Result<(), AppError> {
        let mut data = self.data.lock().await;

        if !data.tours.contains_key(&review.tour) {
            return Err(AppError::unknown_tour(review.tour));
        }

        if data
            .reviews
            .iter()
            .any(|r| r.tour == review.tour && r.user == review.user)
        {
            return Err(AppError::DuplicateReview);
        }

        data.reviews.push(review.clone());
        tracing::debug!("Inserted review {} for tour {}", review.id, review.tour);
        Ok(())
    }

    async fn find_review(&self, id: Uuid) -> Result<Option<PopulatedReview>, AppError> {
        let data = self.data.lock().await;
        let review = data.reviews.iter().find(|r| r.id == id).cloned();
        Ok(review.map(|r| data.populate(r)))
    }

    async fn find_reviews(&self, filter: &ReviewFilter) -> Result<Vec<PopulatedReview>, AppError> {
        let data = self.data.lock().await;
        let reviews = data
            .reviews
            .iter()
            .filter(|r| filter.matches(r))
            .cloned()
            .map(|r| data.populate(r))
            .collect();
        Ok(reviews)
    }

    async fn update_review(
        &self,
        id: Uuid,
        patch: &ReviewPatch,
    ) -> Result<Option<PopulatedReview>, AppError> {
        let mut data = self.data.lock().await;
        let Some(index) = data.position(id) else {
            return Ok(None);
        };

        patch.apply(&mut data.reviews[index]);
        let updated = data.reviews[index].clone();
        tracing::debug!("Updated review {}", id);
        Ok(Some(data.populate(updated)))
    }

    async fn delete_review(&self, id: Uuid) -> Result<Option<PopulatedReview>, AppError> {
        let mut data = self.data.lock().await;
        let Some(index) = data.position(id) else {
            tracing::debug!("No review {} to delete", id);
            return Ok(None);
        };

        let removed = data.reviews.remove(index);
        tracing::info!("Deleted review {} of tour {}", removed.id, removed.tour);
        Ok(Some(data.populate(removed)))
    }

    async fn rating_stats(&self, tour_id: Uuid) -> Result<RatingStats, AppError> {
        let data = self.data.lock().await;

        let mut count = 0i64;
        let mut rated = 0u32;
        let mut sum = 0.0;
        for review in data.reviews.iter().filter(|r| r.tour == tour_id) {
            count += 1;
            if let Some(rating) = review.rating {
                rated += 1;
                sum += rating;
            }
        }

        let average = (rated > 0).then(|| sum / f64::from(rated));
        Ok(RatingStats { count, average })
    }
}

#[async_trait]
impl TourStore for MemoryStore {
    async fn update_tour_ratings(
        &self,
        tour_id: Uuid,
        ratings: TourRatings,
    ) -> Result<(), AppError> {
        match self.data.lock().await.tours.get_mut(&tour_id) {
            Some(stored) => *stored = ratings,
            None => tracing::debug!("Tour {} not found, ratings not stored", tour_id),
        }
        Ok(())
    }
}
