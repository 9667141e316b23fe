use super::{FacadeError, degrade_on_failure};
use crate::{mem, repo, types};

/// Complaint filing and per-booking listing. Overdue-open complaints are
/// auto-resolved as part of the read, whichever store answers.
#[derive(Clone)]
pub struct FacadeComplaint {
    repo: repo::Repository,
    mem: mem::MemStore,
}

impl FacadeComplaint {
    pub fn new(repo: repo::Repository, mem: mem::MemStore) -> Self {
        Self { repo, mem }
    }

    /// `Ok(None)` only on the degraded path when no user carries `email`.
    pub async fn create(
        &self,
        email: &str,
        booking_id: &str,
        message: &str,
    ) -> Result<Option<types::Complaint>, FacadeError> {
        let message = message.trim();
        if message.is_empty() || booking_id.trim().is_empty() {
            return Err(FacadeError::InvalidInput(
                "booking id and complaint message are required".to_owned(),
            ));
        }

        let complaint = types::Complaint::new(email, booking_id, message);

        degrade_on_failure(
            "create_complaint",
            repo::complaint_create(&self.repo, &complaint)
                .await
                .map(|()| Some(complaint.clone())),
            || Ok(self.mem.insert_complaint(complaint.clone())),
        )
    }

    pub async fn by_booking(
        &self,
        booking_id: &str,
    ) -> Result<Vec<types::Complaint>, FacadeError> {
        degrade_on_failure(
            "list_complaints",
            repo::complaints_by_booking(&self.repo, booking_id).await,
            || Ok(self.mem.complaints_by_booking(booking_id)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration as ChronoDuration, Utc};
    use std::time::Duration;

    fn degraded_facade() -> FacadeComplaint {
        let repo = repo::Repository::new(None, Duration::from_millis(100));
        let mem = mem::MemStore::empty();
        mem.create_user(types::User::new("Asha", "c@example.com", "digest".to_owned()))
            .unwrap();
        FacadeComplaint::new(repo, mem)
    }

    #[tokio::test]
    async fn filed_complaint_opens_with_a_deadline() {
        let complaints = degraded_facade();

        let filed = complaints
            .create("c@example.com", "booking-1", "  geyser not working  ")
            .await
            .unwrap()
            .unwrap();
        assert!(filed.id.starts_with("mem-complaint-"));
        assert_eq!(filed.message, "geyser not working");
        assert_eq!(filed.status, types::ComplaintStatus::Open);
        assert_eq!(
            filed.expected_resolve_by - filed.created_at,
            ChronoDuration::hours(types::RESOLVE_WINDOW_HOURS)
        );
    }

    #[tokio::test]
    async fn blank_message_is_rejected() {
        let complaints = degraded_facade();
        let err = complaints
            .create("c@example.com", "booking-1", "   ")
            .await
            .unwrap_err();
        assert!(matches!(err, FacadeError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn listing_resolves_overdue_complaints_in_place() {
        let complaints = degraded_facade();

        let overdue = types::Complaint::new("c@example.com", "booking-1", "fan broken")
            .with_expected_resolve_by(Utc::now() - ChronoDuration::minutes(1));
        complaints.mem.insert_complaint(overdue).unwrap();
        complaints
            .create("c@example.com", "booking-1", "wifi slow")
            .await
            .unwrap();

        let listed = complaints.by_booking("booking-1").await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].status, types::ComplaintStatus::Resolved);
        assert!(listed[0].resolved_at.is_some());
        assert_eq!(listed[1].status, types::ComplaintStatus::Open);

        // Unknown booking: empty list, not an error.
        assert!(complaints.by_booking("booking-none").await.unwrap().is_empty());
    }
}
