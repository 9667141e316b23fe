use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::types::InvalidEnumValue;

/// How long a complaint may stay open before it is considered resolved on
/// the next read.
pub const RESOLVE_WINDOW_HOURS: i64 = 2;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Complaint {
    pub id: String,
    pub booking_id: String,
    /// Email of the owning user.
    pub email: String,
    pub message: String,
    pub status: ComplaintStatus,
    pub created_at: DateTime<Utc>,
    pub expected_resolve_by: DateTime<Utc>,
    pub resolved_at: Option<DateTime<Utc>>,
}

impl Complaint {
    pub fn new(email: &str, booking_id: &str, message: &str) -> Self {
        let created_at = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            booking_id: booking_id.to_owned(),
            email: email.to_owned(),
            message: message.to_owned(),
            status: ComplaintStatus::Open,
            created_at,
            expected_resolve_by: created_at + Duration::hours(RESOLVE_WINDOW_HOURS),
            resolved_at: None,
        }
    }

    pub fn with_expected_resolve_by(mut self, deadline: DateTime<Utc>) -> Self {
        self.expected_resolve_by = deadline;
        self
    }

    /// Lazy auto-resolution rule: an open complaint past its deadline
    /// transitions in place. Returns whether a transition happened.
    pub fn resolve_if_overdue(&mut self, now: DateTime<Utc>) -> bool {
        if self.status == ComplaintStatus::Open && self.expected_resolve_by < now {
            self.status = ComplaintStatus::Resolved;
            self.resolved_at = Some(now);
            return true;
        }
        false
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplaintStatus {
    Open,
    Resolved,
}

impl ComplaintStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComplaintStatus::Open => "open",
            ComplaintStatus::Resolved => "resolved",
        }
    }
}

impl fmt::Display for ComplaintStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComplaintStatus {
    type Err = InvalidEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(ComplaintStatus::Open),
            "resolved" => Ok(ComplaintStatus::Resolved),
            other => Err(InvalidEnumValue {
                kind: "complaint_status",
                value: other.to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overdue_complaint_resolves_once() {
        let mut complaint = Complaint::new("a@b.c", "booking-1", "no hot water")
            .with_expected_resolve_by(Utc::now() - Duration::minutes(5));

        let now = Utc::now();
        assert!(complaint.resolve_if_overdue(now));
        assert_eq!(complaint.status, ComplaintStatus::Resolved);
        assert_eq!(complaint.resolved_at, Some(now));

        // Second pass is a no-op and keeps the original resolution time.
        assert!(!complaint.resolve_if_overdue(Utc::now()));
        assert_eq!(complaint.resolved_at, Some(now));
    }

    #[test]
    fn fresh_complaint_stays_open() {
        let mut complaint = Complaint::new("a@b.c", "booking-1", "wifi down");
        assert!(!complaint.resolve_if_overdue(Utc::now()));
        assert_eq!(complaint.status, ComplaintStatus::Open);
        assert!(complaint.resolved_at.is_none());
    }
}
