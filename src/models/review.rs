use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;

pub const MIN_RATING: f64 = 1.0;
pub const MAX_RATING: f64 = 5.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: Uuid,
    pub text: String,
    pub rating: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub tour: Uuid,
    pub user: Uuid,
}

/// Unvalidated input for a new review. Every field is optional so a missing
/// one can be reported by name.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewReview {
    #[serde(alias = "review")]
    pub text: Option<String>,
    pub rating: Option<f64>,
    pub tour: Option<Uuid>,
    pub user: Option<Uuid>,
}

impl NewReview {
    pub fn into_review(self) -> Result<Review, AppError> {
        let text = self
            .text
            .ok_or_else(|| AppError::validation("text", "Review can not be empty!"))?;
        validate_text(&text)?;

        if let Some(rating) = self.rating {
            validate_rating(rating)?;
        }

        let tour = self
            .tour
            .ok_or_else(|| AppError::validation("tour", "Review must belong to a tour."))?;
        let user = self
            .user
            .ok_or_else(|| AppError::validation("user", "Review must belong to a user."))?;

        Ok(Review {
            id: Uuid::new_v4(),
            text,
            rating: self.rating,
            created_at: Utc::now(),
            tour,
            user,
        })
    }
}

/// Fields an id-based update may change. `tour` and `user` are fixed once
/// the review exists.
///
/// `rating` distinguishes an absent key (`None`, left as is) from an
/// explicit `null` (`Some(None)`, rating cleared).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReviewPatch {
    #[serde(alias = "review")]
    pub text: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub rating: Option<Option<f64>>,
}

impl ReviewPatch {
    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(text) = &self.text {
            validate_text(text)?;
        }
        if let Some(Some(rating)) = self.rating {
            validate_rating(rating)?;
        }
        Ok(())
    }

    pub fn apply(&self, review: &mut Review) {
        if let Some(text) = &self.text {
            review.text = text.clone();
        }
        if let Some(rating) = self.rating {
            review.rating = rating;
        }
    }
}

fn validate_text(text: &str) -> Result<(), AppError> {
    if text.is_empty() {
        return Err(AppError::validation("text", "Review can not be empty!"));
    }
    Ok(())
}

fn validate_rating(rating: f64) -> Result<(), AppError> {
    if !rating.is_finite() || !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(AppError::validation(
            "rating",
            format!("Rating must be between {MIN_RATING} and {MAX_RATING}, got {rating}"),
        ));
    }
    Ok(())
}

/// Public projection of the user who wrote a review.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewAuthor {
    pub name: String,
    pub photo: Option<String>,
}

/// A review as returned by every read path, with its author attached.
/// `user` is `None` when the referenced user no longer exists.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PopulatedReview {
    pub id: Uuid,
    pub text: String,
    pub rating: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub tour: Uuid,
    #[serde(skip)]
    pub user_id: Uuid,
    pub user: Option<ReviewAuthor>,
}

impl PopulatedReview {
    pub fn from_review(review: Review, author: Option<ReviewAuthor>) -> Self {
        Self {
            id: review.id,
            text: review.text,
            rating: review.rating,
            created_at: review.created_at,
            tour: review.tour,
            user_id: review.user,
            user: author,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReviewFilter {
    pub tour: Option<Uuid>,
}

impl ReviewFilter {
    pub fn for_tour(tour_id: Uuid) -> Self {
        Self {
            tour: Some(tour_id),
        }
    }

    pub fn matches(&self, review: &Review) -> bool {
        self.tour.is_none_or(|tour| review.tour == tour)
    }
}
