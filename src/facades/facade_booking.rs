use super::{FacadeError, degrade_on_failure};
use crate::{mem, repo, types};

const AADHAAR_DIGITS: usize = 12;

/// Booking lifecycle: creation with the first-month-free promotion, profile
/// listing, cancellation and meal-plan edits.
#[derive(Clone)]
pub struct FacadeBooking {
    repo: repo::Repository,
    mem: mem::MemStore,
}

impl FacadeBooking {
    pub fn new(repo: repo::Repository, mem: mem::MemStore) -> Self {
        Self { repo, mem }
    }

    /// `Ok(None)` means the degraded store served the call but holds no
    /// user for that email, so the booking has no owner to attach to.
    pub async fn create(
        &self,
        email: &str,
        draft: types::BookingDraft,
    ) -> Result<Option<types::Booking>, FacadeError> {
        let required = [
            &draft.property_id,
            &draft.tenant_name,
            &draft.tenant_phone,
            &draft.tenant_address,
            &draft.aadhaar_number,
        ];
        if required.iter().any(|field| field.trim().is_empty()) {
            return Err(FacadeError::InvalidInput(
                "all booking details are required".to_owned(),
            ));
        }
        if draft.aadhaar_number.len() != AADHAAR_DIGITS
            || !draft.aadhaar_number.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(FacadeError::InvalidInput(format!(
                "aadhaar number must be exactly {AADHAAR_DIGITS} digits"
            )));
        }

        let booking = types::Booking::new(email, draft);

        degrade_on_failure(
            "create_booking",
            repo::booking_create(&self.repo, &booking)
                .await
                .map(|()| Some(booking.clone())),
            || Ok(self.mem.insert_booking(booking.clone())),
        )
    }

    pub async fn by_id(&self, id: &str) -> Result<Option<types::Booking>, FacadeError> {
        degrade_on_failure("find_booking", repo::booking_by_id(&self.repo, id).await, || {
            Ok(self.mem.booking_by_id(id))
        })
    }

    pub async fn by_user(&self, email: &str) -> Result<Vec<types::Booking>, FacadeError> {
        degrade_on_failure(
            "list_bookings",
            repo::bookings_by_user(&self.repo, email).await,
            || Ok(self.mem.bookings_by_user(email)),
        )
    }

    /// `true` when a booking owned by `email` matched; cancelling an
    /// already-cancelled booking keeps the original cancellation time.
    pub async fn cancel(&self, email: &str, id: &str) -> Result<bool, FacadeError> {
        degrade_on_failure(
            "cancel_booking",
            repo::booking_cancel(&self.repo, email, id).await,
            || Ok(self.mem.cancel_booking(email, id)),
        )
    }

    pub async fn update_meal_preference(
        &self,
        email: &str,
        id: &str,
        meal_preference: Option<&str>,
        meals: Option<&serde_json::Value>,
    ) -> Result<bool, FacadeError> {
        degrade_on_failure(
            "update_meal_preference",
            repo::booking_set_meal_preference(&self.repo, email, id, meal_preference, meals).await,
            || Ok(self.mem.set_meal_preference(email, id, meal_preference, meals)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn degraded_facade() -> FacadeBooking {
        let repo = repo::Repository::new(None, Duration::from_millis(100));
        FacadeBooking::new(repo, mem::MemStore::empty())
    }

    fn draft() -> types::BookingDraft {
        types::BookingDraft {
            property_id: "prop-1".to_owned(),
            property_title: "Sunrise PG Powai".to_owned(),
            property_price: 15000,
            tenant_name: "Asha Rao".to_owned(),
            tenant_phone: "9876543210".to_owned(),
            tenant_address: "12 MG Road".to_owned(),
            aadhaar_number: "123456789012".to_owned(),
            meal_preference: Some("veg".to_owned()),
        }
    }

    async fn with_user(facade: &FacadeBooking, email: &str) {
        // The degraded store only attaches bookings to known users.
        let user = types::User::new("Asha", email, "digest".to_owned());
        facade.mem.create_user(user).unwrap();
    }

    #[tokio::test]
    async fn booking_without_known_owner_comes_back_empty() {
        let bookings = degraded_facade();
        let created = bookings.create("ghost@example.com", draft()).await.unwrap();
        assert!(created.is_none());
    }

    #[tokio::test]
    async fn booking_carries_the_free_month_promotion() {
        let bookings = degraded_facade();
        with_user(&bookings, "b@example.com").await;

        let booking = bookings.create("b@example.com", draft()).await.unwrap().unwrap();
        assert!(booking.id.starts_with("mem-booking-"));
        assert_eq!(booking.status, types::BookingStatus::Confirmed);
        assert_eq!(
            booking.free_month_end_date - booking.booking_date,
            chrono::Duration::days(types::FREE_MONTH_DAYS)
        );

        let listed = bookings.by_user("b@example.com").await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, booking.id);
    }

    #[tokio::test]
    async fn malformed_aadhaar_is_rejected() {
        let bookings = degraded_facade();
        with_user(&bookings, "a@example.com").await;

        for bad in ["12345", "12345678901a", "1234567890123"] {
            let err = bookings
                .create(
                    "a@example.com",
                    types::BookingDraft {
                        aadhaar_number: bad.to_owned(),
                        ..draft()
                    },
                )
                .await
                .unwrap_err();
            assert!(matches!(err, FacadeError::InvalidInput(_)), "accepted `{bad}`");
        }
    }

    #[tokio::test]
    async fn cancel_twice_keeps_the_first_timestamp() {
        let bookings = degraded_facade();
        with_user(&bookings, "c@example.com").await;
        let booking = bookings.create("c@example.com", draft()).await.unwrap().unwrap();

        assert!(bookings.cancel("c@example.com", &booking.id).await.unwrap());
        let first = bookings.by_id(&booking.id).await.unwrap().unwrap().cancelled_at;
        assert!(first.is_some());

        assert!(bookings.cancel("c@example.com", &booking.id).await.unwrap());
        let second = bookings.by_id(&booking.id).await.unwrap().unwrap().cancelled_at;
        assert_eq!(second, first);

        // A different user never matches someone else's booking.
        assert!(!bookings.cancel("other@example.com", &booking.id).await.unwrap());
    }

    #[tokio::test]
    async fn meal_plan_edits_stick_to_the_booking() {
        let bookings = degraded_facade();
        with_user(&bookings, "m@example.com").await;
        let booking = bookings.create("m@example.com", draft()).await.unwrap().unwrap();

        let meals = serde_json::json!({ "monday": ["poha", "dal rice"] });
        assert!(
            bookings
                .update_meal_preference("m@example.com", &booking.id, Some("veg"), Some(&meals))
                .await
                .unwrap()
        );

        let updated = bookings.by_id(&booking.id).await.unwrap().unwrap();
        assert_eq!(updated.meal_preference.as_deref(), Some("veg"));
        assert_eq!(updated.meals, Some(meals));
    }
}
