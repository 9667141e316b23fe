use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::Property;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    /// bcrypt digest, never the clear-text password.
    pub password_hash: String,
    pub wishlist: Vec<WishlistEntry>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn new(name: &str, email: &str, password_hash: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.to_owned(),
            email: email.to_owned(),
            password_hash,
            wishlist: Vec::new(),
            created_at: Utc::now(),
            updated_at: None,
        }
    }
}

/// Property summary pinned to a user's wishlist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WishlistEntry {
    pub property_id: String,
    pub title: String,
    pub city: String,
    pub price: i64,
    pub image: String,
}

impl From<&Property> for WishlistEntry {
    fn from(property: &Property) -> Self {
        Self {
            property_id: property.id.clone(),
            title: property.title.clone(),
            city: property.city.clone(),
            price: property.price,
            image: property.images.first().cloned().unwrap_or_default(),
        }
    }
}

/// Profile fields a user may change after registration. The password, when
/// present, is already hashed: hashing happens before the store split.
#[derive(Debug, Clone, Default)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub password_hash: Option<String>,
}
