use serde::{Deserialize, Serialize};

/// Average given to a tour that has no reviews.
pub const DEFAULT_RATINGS_AVERAGE: f64 = 4.5;

/// Count and mean of the reviews of one tour, as computed by the store.
/// `average` only covers reviews with a rating.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RatingStats {
    pub count: i64,
    pub average: Option<f64>,
}

/// The derived rating fields stored on a tour.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TourRatings {
    pub ratings_quantity: i64,
    pub ratings_average: f64,
}

impl Default for TourRatings {
    fn default() -> Self {
        Self {
            ratings_quantity: 0,
            ratings_average: DEFAULT_RATINGS_AVERAGE,
        }
    }
}

impl TourRatings {
    pub fn from_stats(stats: RatingStats) -> Self {
        if stats.count == 0 {
            return Self::default();
        }

        Self {
            ratings_quantity: stats.count,
            // reviews exist but none carries a rating
            ratings_average: stats.average.unwrap_or(DEFAULT_RATINGS_AVERAGE),
        }
    }
}
