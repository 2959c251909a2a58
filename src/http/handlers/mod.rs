pub mod review;

pub use review::{
    create_review_handler, create_tour_review_handler, delete_review_handler,
    get_all_reviews_handler, get_review_handler, get_tour_reviews_handler, update_review_handler,
};
