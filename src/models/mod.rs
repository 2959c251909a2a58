pub mod review;
pub mod tour;
pub mod user;

pub use review::{NewReview, PopulatedReview, Review, ReviewAuthor, ReviewFilter, ReviewPatch};
pub use tour::{RatingStats, TourRatings};
pub use user::User;
