use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::InvalidEnumValue;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    pub property_id: String,
    pub student_name: String,
    pub university: String,
    /// 1 to 5 stars.
    pub rating: i32,
    pub comment: String,
    pub date: DateTime<Utc>,
    pub status: ReviewStatus,
}

impl Review {
    /// New submissions start pending; only approved reviews are listed
    /// publicly.
    pub fn new(property_id: &str, draft: ReviewDraft) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            property_id: property_id.to_owned(),
            student_name: draft.student_name,
            university: draft.university,
            rating: draft.rating,
            comment: draft.comment,
            date: Utc::now(),
            status: ReviewStatus::Pending,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ReviewDraft {
    pub student_name: String,
    pub university: String,
    pub rating: i32,
    pub comment: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    Pending,
    Approved,
}

impl ReviewStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewStatus::Pending => "pending",
            ReviewStatus::Approved => "approved",
        }
    }
}

impl fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReviewStatus {
    type Err = InvalidEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ReviewStatus::Pending),
            "approved" => Ok(ReviewStatus::Approved),
            other => Err(InvalidEnumValue {
                kind: "review_status",
                value: other.to_owned(),
            }),
        }
    }
}
