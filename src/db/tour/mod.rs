pub mod patch;

pub use patch::update_tour_ratings;
