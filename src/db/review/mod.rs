pub mod delete;
pub mod get;
pub mod patch;
pub mod post;

pub use delete::delete_review;
pub use get::{get_rating_stats, get_review_by_id, get_reviews};
pub use patch::update_review;
pub use post::insert_review;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::{PopulatedReview, ReviewAuthor};

// Columns selected by every populated read. The review side must be aliased `r`.
const POPULATED_COLUMNS: &str = "r.id, r.text, r.rating, r.created_at, r.tour_id, r.user_id, \
     u.name AS user_name, u.photo AS user_photo";

#[derive(Debug, sqlx::FromRow)]
struct ReviewRow {
    id: Uuid,
    text: String,
    rating: Option<f64>,
    created_at: DateTime<Utc>,
    tour_id: Uuid,
    user_id: Uuid,
    user_name: Option<String>,
    user_photo: Option<String>,
}

impl From<ReviewRow> for PopulatedReview {
    fn from(row: ReviewRow) -> Self {
        let user = row.user_name.map(|name| ReviewAuthor {
            name,
            photo: row.user_photo,
        });

        PopulatedReview {
            id: row.id,
            text: row.text,
            rating: row.rating,
            created_at: row.created_at,
            tour: row.tour_id,
            user_id: row.user_id,
            user,
        }
    }
}
