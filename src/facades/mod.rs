//! # Facade Module
//!
//! This module implements the **Facade** pattern, serving as the single
//! entity-operation surface between the web layer and the two backing
//! stores.
//!
//! * **Store Abstraction:** callers never learn whether the durable store
//!   or the in-memory degraded store served a request; both paths return
//!   the same result shapes.
//! * **Fallback Dispatch:** every operation first attempts the persistent
//!   adapter; only connectivity-class failures select the degraded path.
//!   Business-rule rejections (duplicate email) propagate untouched, and an
//!   empty-but-reachable store is a valid answer, never a fallback trigger.
//! * **Validation & Credentials:** caller input is rejected before any
//!   store call, and passwords are hashed before the persistent/degraded
//!   split so both stores only ever see the same digest.

mod facade_booking;
pub use facade_booking::*;

mod facade_complaint;
pub use facade_complaint::*;

mod facade_error;
pub use facade_error::*;

mod facade_property;
pub use facade_property::*;

mod facade_review;
pub use facade_review::*;

mod facade_user;
pub use facade_user::*;

use log::warn;

use crate::{mem, repo};

/// Entry point handed to the web layer: one facade per entity, all sharing
/// the same persistent adapter and degraded store.
#[derive(Clone)]
pub struct Facade {
    pub users: FacadeUser,
    pub properties: FacadeProperty,
    pub bookings: FacadeBooking,
    pub complaints: FacadeComplaint,
    pub reviews: FacadeReview,
}

impl Facade {
    pub fn new(repo: repo::Repository, mem: mem::MemStore) -> Self {
        Self {
            users: FacadeUser::new(repo.clone(), mem.clone()),
            properties: FacadeProperty::new(repo.clone(), mem.clone()),
            bookings: FacadeBooking::new(repo.clone(), mem.clone()),
            complaints: FacadeComplaint::new(repo.clone(), mem.clone()),
            reviews: FacadeReview::new(repo, mem),
        }
    }

    pub fn from_env() -> Self {
        Self::new(repo::Repository::from_env(), mem::MemStore::new())
    }
}

/// Three-way dispatch shared by every operation: a served persistent result
/// wins, a business-rule rejection propagates, and anything else (store
/// unreachable, timed out, corrupted row) is answered from the degraded
/// store.
pub(crate) fn degrade_on_failure<T>(
    op: &str,
    persistent: Result<T, repo::Error>,
    degraded: impl FnOnce() -> Result<T, FacadeError>,
) -> Result<T, FacadeError> {
    match persistent {
        Ok(value) => Ok(value),
        Err(repo::Error::AlreadyExists(key)) => Err(FacadeError::AlreadyExists(key)),
        Err(err) => {
            warn!("{op}: durable store failed, serving degraded data: {err}");
            degraded()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types;

    #[test]
    fn served_persistent_result_wins_even_when_empty() {
        let result = degrade_on_failure("list", Ok(Vec::<types::Property>::new()), || {
            panic!("empty result is a valid answer, not a fallback trigger")
        });
        assert!(result.unwrap().is_empty());
    }

    #[test]
    fn business_rejection_propagates_without_fallback() {
        let result = degrade_on_failure::<String>(
            "create",
            Err(repo::Error::AlreadyExists("user_email_key".to_owned())),
            || panic!("rejection must not select the degraded store"),
        );
        assert!(matches!(
            result,
            Err(FacadeError::AlreadyExists(key)) if key == "user_email_key"
        ));
    }

    #[test]
    fn connectivity_failure_selects_the_degraded_closure() {
        let result = degrade_on_failure(
            "list",
            Err(repo::Error::Unavailable("connection refused".to_owned())),
            || Ok(vec!["degraded".to_owned()]),
        );
        assert_eq!(result.unwrap(), ["degraded"]);
    }
}
