use super::{FacadeError, degrade_on_failure};
use crate::{mem, repo, types};

const RATING_RANGE: std::ops::RangeInclusive<i32> = 1..=5;

/// Review submission and listing. Public listings only carry approved
/// reviews; new submissions wait in pending.
#[derive(Clone)]
pub struct FacadeReview {
    repo: repo::Repository,
    mem: mem::MemStore,
}

impl FacadeReview {
    pub fn new(repo: repo::Repository, mem: mem::MemStore) -> Self {
        Self { repo, mem }
    }

    pub async fn create(
        &self,
        property_id: &str,
        mut draft: types::ReviewDraft,
    ) -> Result<types::Review, FacadeError> {
        draft.student_name = draft.student_name.trim().to_owned();
        draft.university = draft.university.trim().to_owned();
        draft.comment = draft.comment.trim().to_owned();
        if draft.student_name.is_empty() || draft.university.is_empty() || draft.comment.is_empty()
        {
            return Err(FacadeError::InvalidInput(
                "name, university and comment are required".to_owned(),
            ));
        }
        if !RATING_RANGE.contains(&draft.rating) {
            return Err(FacadeError::InvalidInput(
                "rating must be between 1 and 5".to_owned(),
            ));
        }

        let review = types::Review::new(property_id, draft);

        degrade_on_failure(
            "create_review",
            repo::review_create(&self.repo, &review)
                .await
                .map(|()| review.clone()),
            || Ok(self.mem.insert_review(review.clone())),
        )
    }

    /// Approved reviews only, oldest first.
    pub async fn by_property(
        &self,
        property_id: &str,
    ) -> Result<Vec<types::Review>, FacadeError> {
        degrade_on_failure(
            "list_reviews",
            repo::reviews_by_property(&self.repo, property_id).await,
            || Ok(self.mem.reviews_by_property(property_id)),
        )
    }

    /// Every review regardless of status, the moderation view.
    pub async fn all(&self) -> Result<Vec<types::Review>, FacadeError> {
        degrade_on_failure("list_all_reviews", repo::review_all(&self.repo).await, || {
            Ok(self.mem.reviews_all())
        })
    }
}
