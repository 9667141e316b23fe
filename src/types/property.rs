use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::InvalidEnumValue;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Property {
    pub id: String,
    pub title: String,
    pub description: String,
    pub property_type: PropertyType,
    pub city: String,
    pub area: String,
    /// Monthly rent in rupees.
    pub price: i64,
    pub images: Vec<String>,
    pub amenities: Vec<String>,
    pub room_type: RoomType,
    pub gender_preference: GenderPreference,
    pub verified: bool,
    pub rating: f64,
    pub total_reviews: i64,
    /// Kilometers to the nearest campus.
    pub distance_from_college: i64,
    pub available_rooms: i64,
    pub created_at: DateTime<Utc>,
    pub created_by: Option<String>,
}

impl Property {
    pub fn new(draft: PropertyDraft) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: draft.title,
            description: draft.description,
            property_type: draft.property_type,
            city: draft.city,
            area: draft.area,
            price: draft.price,
            images: draft.images,
            amenities: draft.amenities,
            room_type: draft.room_type,
            gender_preference: draft.gender_preference,
            verified: draft.verified,
            rating: draft.rating,
            total_reviews: draft.total_reviews,
            distance_from_college: draft.distance_from_college,
            available_rooms: draft.available_rooms,
            created_at: Utc::now(),
            created_by: draft.created_by,
        }
    }
}

/// Listing payload as submitted by an owner; unset fields keep the same
/// defaults the original listing form applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PropertyDraft {
    pub title: String,
    pub description: String,
    pub property_type: PropertyType,
    pub city: String,
    pub area: String,
    pub price: i64,
    pub images: Vec<String>,
    pub amenities: Vec<String>,
    pub room_type: RoomType,
    pub gender_preference: GenderPreference,
    pub verified: bool,
    pub rating: f64,
    pub total_reviews: i64,
    pub distance_from_college: i64,
    pub available_rooms: i64,
    pub created_by: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    #[default]
    Pg,
    Hostel,
    Flat,
}

impl PropertyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Pg => "pg",
            PropertyType::Hostel => "hostel",
            PropertyType::Flat => "flat",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyType {
    type Err = InvalidEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pg" => Ok(PropertyType::Pg),
            "hostel" => Ok(PropertyType::Hostel),
            "flat" => Ok(PropertyType::Flat),
            other => Err(InvalidEnumValue {
                kind: "property_type",
                value: other.to_owned(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomType {
    #[default]
    Single,
    Double,
    Triple,
    Shared,
}

impl RoomType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoomType::Single => "single",
            RoomType::Double => "double",
            RoomType::Triple => "triple",
            RoomType::Shared => "shared",
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoomType {
    type Err = InvalidEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single" => Ok(RoomType::Single),
            "double" => Ok(RoomType::Double),
            "triple" => Ok(RoomType::Triple),
            "shared" => Ok(RoomType::Shared),
            other => Err(InvalidEnumValue {
                kind: "room_type",
                value: other.to_owned(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenderPreference {
    #[default]
    Any,
    Male,
    Female,
}

impl GenderPreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            GenderPreference::Any => "any",
            GenderPreference::Male => "male",
            GenderPreference::Female => "female",
        }
    }

    /// A gender-neutral listing satisfies every preference filter.
    pub fn accepts(&self, wanted: GenderPreference) -> bool {
        *self == GenderPreference::Any || *self == wanted
    }
}

impl fmt::Display for GenderPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GenderPreference {
    type Err = InvalidEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "any" => Ok(GenderPreference::Any),
            "male" => Ok(GenderPreference::Male),
            "female" => Ok(GenderPreference::Female),
            other => Err(InvalidEnumValue {
                kind: "gender_preference",
                value: other.to_owned(),
            }),
        }
    }
}
