use crate::api::{ProfileStore, UserRecord};
use crate::error::StoreError;
use crate::filter::{self, FilterQuery};

/// The caller-owned copy of the profile list.
///
/// Consistency strategy: after every successful mutation the list is
/// re-fetched and replaced wholesale rather than patched locally, so there
/// is never a partially applied view. A failed refresh leaves the previous
/// contents untouched.
#[derive(Debug, Default)]
pub struct Directory {
    records: Vec<UserRecord>,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the held list with a fresh fetch from `store`.
    pub async fn refresh(&mut self, store: &dyn ProfileStore) -> Result<(), StoreError> {
        self.records = store.list().await?;
        Ok(())
    }

    pub fn records(&self) -> &[UserRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The subset visible under `query`, in list order.
    pub fn visible(&self, query: &FilterQuery) -> Vec<&UserRecord> {
        filter::filter(&self.records, query)
    }

    /// Distinct interest tags across the held records.
    pub fn interests(&self) -> Vec<String> {
        filter::distinct_interests(&self.records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::InMemoryStore;
    use crate::api::{Contact, UserDraft};

    fn draft(name: &str, interests: &[&str]) -> UserDraft {
        UserDraft {
            name: name.into(),
            photo: String::new(),
            brief: String::new(),
            contact: Contact::default(),
            interests: interests.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[tokio::test]
    async fn test_refresh_replaces_wholesale() {
        let store = InMemoryStore::new();
        store.create(&draft("Ada", &["poetry"])).await.unwrap();

        let mut dir = Directory::new();
        dir.refresh(&store).await.unwrap();
        assert_eq!(dir.len(), 1);

        store.create(&draft("Grace", &[])).await.unwrap();
        dir.refresh(&store).await.unwrap();
        assert_eq!(dir.len(), 2);
    }

    #[tokio::test]
    async fn test_failed_refresh_leaves_records_untouched() {
        let store = InMemoryStore::new();
        store.create(&draft("Ada", &[])).await.unwrap();

        let mut dir = Directory::new();
        dir.refresh(&store).await.unwrap();
        assert_eq!(dir.len(), 1);

        store.fail_next(503);
        let err = dir.refresh(&store).await.unwrap_err();
        assert!(matches!(err, StoreError::RequestFailed { status: 503 }));
        assert_eq!(dir.len(), 1);
        assert_eq!(dir.records()[0].name, "Ada");
    }

    #[tokio::test]
    async fn test_visible_delegates_to_filter() {
        let store = InMemoryStore::new();
        store.create(&draft("Ada", &["poetry"])).await.unwrap();
        store.create(&draft("Grace", &["compilers"])).await.unwrap();

        let mut dir = Directory::new();
        dir.refresh(&store).await.unwrap();

        let query = FilterQuery::default().with_interest("poetry");
        let visible = dir.visible(&query);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Ada");
        assert_eq!(dir.interests(), ["poetry", "compilers"]);
    }
}
