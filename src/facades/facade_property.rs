use super::{FacadeError, degrade_on_failure};
use crate::{mem, query, repo, types};

/// Catalog reads plus listing creation; city summaries hang off the same
/// facade because they are derived from the catalog.
#[derive(Clone)]
pub struct FacadeProperty {
    repo: repo::Repository,
    mem: mem::MemStore,
}

impl FacadeProperty {
    pub fn new(repo: repo::Repository, mem: mem::MemStore) -> Self {
        Self { repo, mem }
    }

    /// An empty catalog from a reachable store is a valid answer and never
    /// triggers the degraded path.
    pub async fn all(&self) -> Result<Vec<types::Property>, FacadeError> {
        degrade_on_failure("list_properties", repo::property_all(&self.repo).await, || {
            Ok(self.mem.properties())
        })
    }

    /// Criteria are applied in process over whichever catalog answered.
    pub async fn search(
        &self,
        filter: &query::PropertyFilter,
    ) -> Result<Vec<types::Property>, FacadeError> {
        Ok(filter.apply(self.all().await?))
    }

    pub async fn by_id(&self, id: &str) -> Result<Option<types::Property>, FacadeError> {
        degrade_on_failure(
            "find_property",
            repo::property_by_id(&self.repo, id).await,
            || Ok(self.mem.property_by_id(id)),
        )
    }

    pub async fn create(
        &self,
        draft: types::PropertyDraft,
    ) -> Result<types::Property, FacadeError> {
        if draft.title.trim().is_empty() {
            return Err(FacadeError::InvalidInput("listing title is required".to_owned()));
        }
        let property = types::Property::new(draft);

        degrade_on_failure(
            "create_property",
            repo::property_create(&self.repo, &property)
                .await
                .map(|()| property.clone()),
            || Ok(self.mem.insert_property(property.clone())),
        )
    }

    pub async fn cities(&self) -> Result<Vec<types::City>, FacadeError> {
        degrade_on_failure("list_cities", repo::city_all(&self.repo).await, || {
            Ok(self.mem.cities())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::PropertyFilter;
    use std::time::Duration;

    /// Unconfigured adapter over the pre-seeded degraded store, the state
    /// the app boots into when no store url is configured.
    fn degraded_facade() -> FacadeProperty {
        let repo = repo::Repository::new(None, Duration::from_millis(100));
        FacadeProperty::new(repo, mem::MemStore::new())
    }

    #[tokio::test]
    async fn unreachable_store_serves_the_seeded_catalog() {
        let properties = degraded_facade();

        let all = properties.all().await.unwrap();
        assert_eq!(all.len(), 10);

        let cities = properties.cities().await.unwrap();
        assert_eq!(cities.len(), 8);
    }

    #[tokio::test]
    async fn search_filters_the_degraded_catalog() {
        let properties = degraded_facade();

        let filter = PropertyFilter::default().with_city("Mumbai");
        let found = properties.search(&filter).await.unwrap();
        assert!(!found.is_empty());
        assert!(found.iter().all(|p| p.city == "Mumbai"));
    }

    #[tokio::test]
    async fn created_listing_is_findable_by_its_degraded_id() {
        let properties = degraded_facade();

        let created = properties
            .create(types::PropertyDraft {
                title: "Test Residency".to_owned(),
                city: "Chennai".to_owned(),
                price: 9500,
                ..types::PropertyDraft::default()
            })
            .await
            .unwrap();
        assert!(created.id.starts_with("mem-property-"));

        let found = properties.by_id(&created.id).await.unwrap().unwrap();
        assert_eq!(found.title, "Test Residency");
    }

    #[tokio::test]
    async fn untitled_listing_is_rejected() {
        let properties = degraded_facade();
        let err = properties
            .create(types::PropertyDraft::default())
            .await
            .unwrap_err();
        assert!(matches!(err, FacadeError::InvalidInput(_)));
    }
}
