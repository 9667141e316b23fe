use serde::{Deserialize, Serialize};

/// Static reference data shown on the landing page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub id: String,
    pub name: String,
    pub image: String,
    pub property_count: i64,
}

impl City {
    pub fn new(name: &str, image: &str, property_count: i64) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.to_owned(),
            image: image.to_owned(),
            property_count,
        }
    }
}
