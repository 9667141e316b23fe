//! Degraded-mode store: process-local, mutex-guarded flat collections
//! serving requests only while the durable store is unreachable.
//!
//! Bookings and complaints are top-level maps carrying the owning user's
//! email, so a lookup by id is a direct map hit instead of a scan over
//! every user's nested lists. Nothing here survives a restart and nothing
//! is shared across processes; this is a last-resort, low-traffic path.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::Utc;
use rand::{Rng, distr::Alphanumeric};

use crate::types;

const ID_SUFFIX_LEN: usize = 6;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Degraded twin of the persistent unique-key rejection.
    #[error("record already exists for key `{0}`")]
    AlreadyExists(String),
}

/// Synthetic id for records created while degraded. The scheme is
/// deliberately different from the persistent store's UUIDs so the two
/// formats are never mistaken for one another; callers treat ids as opaque.
pub fn synthetic_id(kind: &str) -> String {
    let suffix: String = rand::rng()
        .sample_iter(Alphanumeric)
        .take(ID_SUFFIX_LEN)
        .map(char::from)
        .collect();
    format!("mem-{kind}-{}-{suffix}", Utc::now().timestamp_millis())
}

#[derive(Clone)]
pub struct MemStore {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    users: HashMap<String, types::User>,
    properties: HashMap<String, types::Property>,
    cities: HashMap<String, types::City>,
    bookings: HashMap<String, types::Booking>,
    complaints: HashMap<String, types::Complaint>,
    reviews: HashMap<String, types::Review>,
}

impl Default for MemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemStore {
    /// Store pre-loaded with the reference catalog, matching what the
    /// original deployment serves when no database is available.
    pub fn new() -> Self {
        let store = Self::empty();
        {
            let mut inner = store.lock();
            for city in crate::seed::cities() {
                inner.cities.insert(city.id.clone(), city);
            }
            let properties = crate::seed::properties();
            for review in crate::seed::reviews(&properties) {
                inner.reviews.insert(review.id.clone(), review);
            }
            for property in properties {
                inner.properties.insert(property.id.clone(), property);
            }
        }
        store
    }

    pub fn empty() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner::default())),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().expect("BUG: degraded store mutex poisoned")
    }

    // --- users ---

    /// Email uniqueness is enforced by linear scan; there is no index to
    /// lean on here. The record is re-keyed with a synthetic id.
    pub fn create_user(&self, mut user: types::User) -> Result<String, Error> {
        let mut inner = self.lock();
        if inner.users.values().any(|u| u.email == user.email) {
            return Err(Error::AlreadyExists(user.email));
        }
        user.id = synthetic_id("user");
        let id = user.id.clone();
        inner.users.insert(id.clone(), user);
        Ok(id)
    }

    pub fn find_user_by_email(&self, email: &str) -> Option<types::User> {
        self.lock().users.values().find(|u| u.email == email).cloned()
    }

    pub fn update_user(&self, email: &str, update: &types::UserUpdate) -> Option<types::User> {
        let mut inner = self.lock();
        let user = inner.users.values_mut().find(|u| u.email == email)?;
        if let Some(name) = &update.name {
            user.name = name.clone();
        }
        if let Some(hash) = &update.password_hash {
            user.password_hash = hash.clone();
        }
        user.updated_at = Some(Utc::now());
        Some(user.clone())
    }

    pub fn wishlist_add(&self, email: &str, entry: types::WishlistEntry) -> bool {
        let mut inner = self.lock();
        let Some(user) = inner.users.values_mut().find(|u| u.email == email) else {
            return false;
        };
        if !user.wishlist.iter().any(|e| e.property_id == entry.property_id) {
            user.wishlist.push(entry);
        }
        true
    }

    pub fn wishlist_remove(&self, email: &str, property_id: &str) -> bool {
        let mut inner = self.lock();
        let Some(user) = inner.users.values_mut().find(|u| u.email == email) else {
            return false;
        };
        user.wishlist.retain(|e| e.property_id != property_id);
        true
    }

    // --- bookings ---

    /// Requires the owning user to exist in this store; a booking without
    /// an owner would be unreachable from any profile page.
    pub fn insert_booking(&self, mut booking: types::Booking) -> Option<types::Booking> {
        let mut inner = self.lock();
        if !inner.users.values().any(|u| u.email == booking.email) {
            return None;
        }
        booking.id = synthetic_id("booking");
        inner.bookings.insert(booking.id.clone(), booking.clone());
        Some(booking)
    }

    pub fn booking_by_id(&self, id: &str) -> Option<types::Booking> {
        self.lock().bookings.get(id).cloned()
    }

    pub fn bookings_by_user(&self, email: &str) -> Vec<types::Booking> {
        let inner = self.lock();
        let mut found: Vec<_> = inner
            .bookings
            .values()
            .filter(|b| b.email == email)
            .cloned()
            .collect();
        found.sort_by_key(|b| b.booking_date);
        found
    }

    /// Forward-only: re-cancelling keeps the original cancellation time.
    pub fn cancel_booking(&self, email: &str, id: &str) -> bool {
        let mut inner = self.lock();
        let Some(booking) = inner.bookings.get_mut(id) else {
            return false;
        };
        if booking.email != email {
            return false;
        }
        if booking.status != types::BookingStatus::Cancelled {
            booking.status = types::BookingStatus::Cancelled;
            booking.cancelled_at = Some(Utc::now());
        }
        true
    }

    pub fn set_meal_preference(
        &self,
        email: &str,
        id: &str,
        meal_preference: Option<&str>,
        meals: Option<&serde_json::Value>,
    ) -> bool {
        let mut inner = self.lock();
        let Some(booking) = inner.bookings.get_mut(id) else {
            return false;
        };
        if booking.email != email {
            return false;
        }
        booking.meal_preference = meal_preference.map(str::to_owned);
        booking.meals = meals.cloned();
        booking.updated_at = Some(Utc::now());
        true
    }

    // --- complaints ---

    pub fn insert_complaint(&self, mut complaint: types::Complaint) -> Option<types::Complaint> {
        let mut inner = self.lock();
        if !inner.users.values().any(|u| u.email == complaint.email) {
            return None;
        }
        complaint.id = synthetic_id("complaint");
        inner.complaints.insert(complaint.id.clone(), complaint.clone());
        Some(complaint)
    }

    /// Applies the lazy auto-resolution rule as part of the read, mirroring
    /// the persistent path.
    pub fn complaints_by_booking(&self, booking_id: &str) -> Vec<types::Complaint> {
        let mut inner = self.lock();
        let now = Utc::now();
        let mut found: Vec<_> = inner
            .complaints
            .values_mut()
            .filter(|c| c.booking_id == booking_id)
            .map(|c| {
                c.resolve_if_overdue(now);
                c.clone()
            })
            .collect();
        found.sort_by_key(|c| c.created_at);
        found
    }

    // --- properties & cities ---

    pub fn properties(&self) -> Vec<types::Property> {
        let inner = self.lock();
        let mut found: Vec<_> = inner.properties.values().cloned().collect();
        found.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        found
    }

    pub fn property_by_id(&self, id: &str) -> Option<types::Property> {
        self.lock().properties.get(id).cloned()
    }

    pub fn insert_property(&self, mut property: types::Property) -> types::Property {
        let mut inner = self.lock();
        property.id = synthetic_id("property");
        inner.properties.insert(property.id.clone(), property.clone());
        property
    }

    pub fn cities(&self) -> Vec<types::City> {
        let inner = self.lock();
        let mut found: Vec<_> = inner.cities.values().cloned().collect();
        found.sort_by(|a, b| a.name.cmp(&b.name));
        found
    }

    // --- reviews ---

    pub fn insert_review(&self, mut review: types::Review) -> types::Review {
        let mut inner = self.lock();
        review.id = synthetic_id("review");
        inner.reviews.insert(review.id.clone(), review.clone());
        review
    }

    pub fn reviews_by_property(&self, property_id: &str) -> Vec<types::Review> {
        let inner = self.lock();
        let mut found: Vec<_> = inner
            .reviews
            .values()
            .filter(|r| r.property_id == property_id && r.status == types::ReviewStatus::Approved)
            .cloned()
            .collect();
        found.sort_by_key(|r| r.date);
        found
    }

    pub fn reviews_all(&self) -> Vec<types::Review> {
        let inner = self.lock();
        let mut found: Vec<_> = inner.reviews.values().cloned().collect();
        found.sort_by_key(|r| r.date);
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn user(email: &str) -> types::User {
        types::User::new("Test User", email, "digest".to_owned())
    }

    #[test]
    fn synthetic_ids_carry_the_mem_scheme() {
        let id = synthetic_id("booking");
        assert!(id.starts_with("mem-booking-"));
        assert_ne!(synthetic_id("booking"), synthetic_id("booking"));
    }

    #[test]
    fn duplicate_email_rejected_by_scan() {
        let store = MemStore::empty();
        store.create_user(user("dup@example.com")).unwrap();

        let err = store.create_user(user("dup@example.com")).unwrap_err();
        assert!(matches!(err, Error::AlreadyExists(key) if key == "dup@example.com"));

        // The first record is unaffected.
        assert!(store.find_user_by_email("dup@example.com").is_some());
    }

    #[test]
    fn wishlist_is_idempotent_per_property() {
        let store = MemStore::empty();
        store.create_user(user("w@example.com")).unwrap();

        let entry = types::WishlistEntry {
            property_id: "prop-1".to_owned(),
            title: "Some PG".to_owned(),
            city: "Pune".to_owned(),
            price: 9000,
            image: String::new(),
        };
        assert!(store.wishlist_add("w@example.com", entry.clone()));
        assert!(store.wishlist_add("w@example.com", entry));

        let wishlist = store.find_user_by_email("w@example.com").unwrap().wishlist;
        assert_eq!(wishlist.len(), 1);

        assert!(store.wishlist_remove("w@example.com", "prop-1"));
        assert!(store.find_user_by_email("w@example.com").unwrap().wishlist.is_empty());
    }

    #[test]
    fn booking_requires_known_owner() {
        let store = MemStore::empty();
        let booking = types::Booking::new("ghost@example.com", types::BookingDraft::default());
        assert!(store.insert_booking(booking).is_none());
    }

    #[test]
    fn cancel_is_forward_only() {
        let store = MemStore::empty();
        store.create_user(user("b@example.com")).unwrap();
        let booking = store
            .insert_booking(types::Booking::new("b@example.com", types::BookingDraft::default()))
            .unwrap();

        assert!(store.cancel_booking("b@example.com", &booking.id));
        let cancelled_at = store.booking_by_id(&booking.id).unwrap().cancelled_at;
        assert!(cancelled_at.is_some());

        // Second cancel still matches and changes nothing.
        assert!(store.cancel_booking("b@example.com", &booking.id));
        let after = store.booking_by_id(&booking.id).unwrap();
        assert_eq!(after.status, types::BookingStatus::Cancelled);
        assert_eq!(after.cancelled_at, cancelled_at);
    }

    #[test]
    fn overdue_complaint_resolves_on_read() {
        let store = MemStore::empty();
        store.create_user(user("c@example.com")).unwrap();

        let overdue = types::Complaint::new("c@example.com", "booking-1", "fan broken")
            .with_expected_resolve_by(Utc::now() - Duration::minutes(1));
        store.insert_complaint(overdue).unwrap();
        let fresh = types::Complaint::new("c@example.com", "booking-1", "wifi slow");
        store.insert_complaint(fresh).unwrap();

        let complaints = store.complaints_by_booking("booking-1");
        assert_eq!(complaints.len(), 2);
        assert_eq!(complaints[0].status, types::ComplaintStatus::Resolved);
        assert!(complaints[0].resolved_at.is_some());
        assert_eq!(complaints[1].status, types::ComplaintStatus::Open);
    }

    #[test]
    fn seeded_store_serves_the_reference_catalog() {
        let store = MemStore::new();
        assert_eq!(store.cities().len(), 8);

        let properties = store.properties();
        assert_eq!(properties.len(), 10);

        // Seed reviews are approved and attached to real properties.
        let with_reviews: Vec<_> = properties
            .iter()
            .filter(|p| !store.reviews_by_property(&p.id).is_empty())
            .collect();
        assert_eq!(with_reviews.len(), 2);
    }
}
