use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::review::ReviewAuthor;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub photo: Option<String>,
}

impl User {
    pub fn author(&self) -> ReviewAuthor {
        ReviewAuthor {
            name: self.name.clone(),
            photo: self.photo.clone(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // user ID
    pub exp: usize,  // expiration time
}
