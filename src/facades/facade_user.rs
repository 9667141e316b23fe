use log::debug;

use super::{FacadeError, degrade_on_failure};
use crate::{mem, repo, types};

/// Matches the cost the original registration flow used.
const BCRYPT_COST: u32 = 10;
const MIN_PASSWORD_LEN: usize = 6;

/// Registration, login verification, profile edits and wishlist management.
///
/// Passwords are hashed once, before the persistent/degraded split, so
/// whichever store ends up holding the record holds the same digest.
#[derive(Clone)]
pub struct FacadeUser {
    repo: repo::Repository,
    mem: mem::MemStore,
}

impl FacadeUser {
    pub fn new(repo: repo::Repository, mem: mem::MemStore) -> Self {
        Self { repo, mem }
    }

    /// Returns the id of the created user. A duplicate email surfaces as
    /// [`FacadeError::AlreadyExists`] from either store.
    pub async fn create(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<String, FacadeError> {
        if name.trim().is_empty() || email.trim().is_empty() {
            return Err(FacadeError::InvalidInput(
                "name, email and password are required".to_owned(),
            ));
        }
        if password.len() < MIN_PASSWORD_LEN {
            return Err(FacadeError::InvalidInput(format!(
                "password must be at least {MIN_PASSWORD_LEN} characters"
            )));
        }

        let password_hash = bcrypt::hash(password, BCRYPT_COST)?;
        let user = types::User::new(name.trim(), email.trim(), password_hash);

        degrade_on_failure(
            "create_user",
            repo::user_create(&self.repo, &user).await,
            || Ok(self.mem.create_user(user.clone())?),
        )
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<types::User>, FacadeError> {
        degrade_on_failure(
            "find_user_by_email",
            repo::user_find_by_email(&self.repo, email).await,
            || Ok(self.mem.find_user_by_email(email)),
        )
    }

    /// Returns the user when the password matches its stored digest.
    pub async fn verify(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<types::User>, FacadeError> {
        let Some(user) = self.find_by_email(email).await? else {
            return Ok(None);
        };
        if bcrypt::verify(password, &user.password_hash)? {
            Ok(Some(user))
        } else {
            debug!("password mismatch for `{email}`");
            Ok(None)
        }
    }

    /// Applies a profile edit; `None` when no user carries that email. A
    /// replacement password shorter than the minimum is rejected up front.
    pub async fn update(
        &self,
        email: &str,
        name: Option<&str>,
        password: Option<&str>,
    ) -> Result<Option<types::User>, FacadeError> {
        let name = name.map(str::trim).filter(|n| !n.is_empty()).map(str::to_owned);
        let password_hash = match password {
            Some(p) if p.len() < MIN_PASSWORD_LEN => {
                return Err(FacadeError::InvalidInput(format!(
                    "password must be at least {MIN_PASSWORD_LEN} characters"
                )));
            }
            Some(p) => Some(bcrypt::hash(p, BCRYPT_COST)?),
            None => None,
        };
        let update = types::UserUpdate { name, password_hash };

        degrade_on_failure(
            "update_user",
            repo::user_update(&self.repo, email, &update).await,
            || Ok(self.mem.update_user(email, &update)),
        )
    }

    /// Idempotent per property id: re-adding an already pinned property
    /// leaves exactly one entry.
    pub async fn add_to_wishlist(
        &self,
        email: &str,
        entry: types::WishlistEntry,
    ) -> Result<bool, FacadeError> {
        degrade_on_failure(
            "add_to_wishlist",
            repo::wishlist_add(&self.repo, email, &entry).await,
            || Ok(self.mem.wishlist_add(email, entry.clone())),
        )
    }

    pub async fn remove_from_wishlist(
        &self,
        email: &str,
        property_id: &str,
    ) -> Result<bool, FacadeError> {
        degrade_on_failure(
            "remove_from_wishlist",
            repo::wishlist_remove(&self.repo, email, property_id).await,
            || Ok(self.mem.wishlist_remove(email, property_id)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    /// Facade over an unconfigured adapter: every persistent call fails
    /// with `Unavailable`, exercising the full fallback dispatch.
    fn degraded_facade() -> FacadeUser {
        let repo = repo::Repository::new(None, Duration::from_millis(100));
        FacadeUser::new(repo, mem::MemStore::empty())
    }

    #[tokio::test]
    async fn register_then_verify_round_trip() {
        let users = degraded_facade();

        let id = users.create("Asha", "asha@example.com", "hunter22").await.unwrap();
        assert!(id.starts_with("mem-user-"));

        let found = users.find_by_email("asha@example.com").await.unwrap().unwrap();
        assert_eq!(found.name, "Asha");
        assert_ne!(found.password_hash, "hunter22");

        assert!(users.verify("asha@example.com", "hunter22").await.unwrap().is_some());
        assert!(users.verify("asha@example.com", "wrong-password").await.unwrap().is_none());
        assert!(users.verify("nobody@example.com", "hunter22").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn duplicate_email_is_a_business_rejection() {
        let users = degraded_facade();
        users.create("First", "dup@example.com", "password1").await.unwrap();

        let err = users.create("Second", "dup@example.com", "password2").await.unwrap_err();
        assert!(matches!(err, FacadeError::AlreadyExists(_)));

        // The first record is unaffected.
        let kept = users.find_by_email("dup@example.com").await.unwrap().unwrap();
        assert_eq!(kept.name, "First");
    }

    #[tokio::test]
    async fn missing_fields_rejected_before_any_store_call() {
        let users = degraded_facade();
        let err = users.create("", "a@example.com", "password").await.unwrap_err();
        assert!(matches!(err, FacadeError::InvalidInput(_)));
        assert!(users.find_by_email("a@example.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn wishlist_add_is_idempotent() {
        let users = degraded_facade();
        users.create("Asha", "w@example.com", "password").await.unwrap();

        let entry = types::WishlistEntry {
            property_id: "prop-9".to_owned(),
            title: "Lakeview Hostel".to_owned(),
            city: "Pune".to_owned(),
            price: 11000,
            image: String::new(),
        };
        assert!(users.add_to_wishlist("w@example.com", entry.clone()).await.unwrap());
        assert!(users.add_to_wishlist("w@example.com", entry).await.unwrap());

        let wishlist = users.find_by_email("w@example.com").await.unwrap().unwrap().wishlist;
        assert_eq!(wishlist.len(), 1);

        assert!(users.remove_from_wishlist("w@example.com", "prop-9").await.unwrap());
        let wishlist = users.find_by_email("w@example.com").await.unwrap().unwrap().wishlist;
        assert!(wishlist.is_empty());
    }

    #[tokio::test]
    async fn update_renames_and_rehashes() {
        let users = degraded_facade();
        users.create("Old Name", "u@example.com", "password1").await.unwrap();

        let err = users.update("u@example.com", None, Some("short")).await.unwrap_err();
        assert!(matches!(err, FacadeError::InvalidInput(_)));

        let updated = users
            .update("u@example.com", Some("New Name"), Some("password2"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.name, "New Name");
        assert!(updated.updated_at.is_some());

        assert!(users.verify("u@example.com", "password1").await.unwrap().is_none());
        assert!(users.verify("u@example.com", "password2").await.unwrap().is_some());
    }
}
