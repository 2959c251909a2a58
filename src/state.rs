use std::sync::Arc;

use crate::db::{ReviewStore, TourStore};

#[derive(Clone)]
pub struct AppState {
    pub reviews: Arc<dyn ReviewStore>,
    pub tours: Arc<dyn TourStore>,
    pub jwt_secret: Arc<str>,
}

impl AppState {
    /// Builds the state around one store that serves both reviews and tours.
    pub fn with_store<S>(store: Arc<S>, jwt_secret: &str) -> Self
    where
        S: ReviewStore + TourStore + 'static,
    {
        Self {
            reviews: store.clone(),
            tours: store,
            jwt_secret: Arc::from(jwt_secret),
        }
    }
}
