//! Review write paths and the tour ratings they keep in sync.
//!
//! Every mutation goes through [`apply_mutation`] (or the per-kind helpers
//! it dispatches to). Once the review write has committed, the owning tour's
//! `ratings_quantity` and `ratings_average` are recomputed from scratch. The
//! two writes are separate: if the recompute fails the review change stays,
//! the error reaches the caller, and the next mutation on that tour brings
//! the fields back in line.

pub mod mutation;
pub mod query;
pub mod ratings;

pub use mutation::{
    MutationOutcome, ReviewMutation, apply_mutation, create_review, delete_review, update_review,
};
pub use query::{get_review, list_reviews};
pub use ratings::recompute_tour_ratings;
