pub mod http;
pub mod mock;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// A user profile as served by the backend. The id is server-assigned and
/// is the sole key for update/delete targeting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: String,
    pub name: String,
    pub photo: String,
    pub brief: String,
    pub contact: Contact,
    #[serde(default)]
    pub interests: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Contact {
    pub email: String,
    pub phone: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

/// A client-constructed payload for create/update — a record without the
/// server-assigned id. Updates resend the complete draft; there are no
/// partial/merge semantics on the wire.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UserDraft {
    pub name: String,
    pub photo: String,
    pub brief: String,
    pub contact: Contact,
    #[serde(default)]
    pub interests: Vec<String>,
}

impl UserRecord {
    /// The draft that would recreate this record, for edit-then-resubmit
    /// flows.
    pub fn to_draft(&self) -> UserDraft {
        UserDraft {
            name: self.name.clone(),
            photo: self.photo.clone(),
            brief: self.brief.clone(),
            contact: self.contact.clone(),
            interests: self.interests.clone(),
        }
    }
}

/// CRUD access to the remote profile collection. Every operation is exactly
/// one round trip — no retry, batching, or caching.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn list(&self) -> Result<Vec<UserRecord>, StoreError>;
    async fn get(&self, id: &str) -> Result<UserRecord, StoreError>;
    async fn create(&self, draft: &UserDraft) -> Result<UserRecord, StoreError>;
    async fn update(&self, id: &str, draft: &UserDraft) -> Result<UserRecord, StoreError>;
    async fn delete(&self, id: &str) -> Result<(), StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str) -> UserDraft {
        UserDraft {
            name: name.into(),
            photo: format!("https://example.com/{name}.jpg"),
            brief: "Test profile".into(),
            contact: Contact {
                email: format!("{name}@example.com"),
                phone: "555-0100".into(),
                location: "Testville".into(),
                latitude: Some(51.5),
                longitude: Some(-0.12),
            },
            interests: vec!["coding".into(), "hiking".into()],
        }
    }

    #[test]
    fn test_parse_full_record() {
        let json = r#"{
            "id": "abc123",
            "name": "Ada Lovelace",
            "photo": "https://example.com/ada.jpg",
            "brief": "First programmer",
            "contact": {
                "email": "ada@example.com",
                "phone": "555-0101",
                "location": "London",
                "latitude": 51.5,
                "longitude": -0.12
            },
            "interests": ["mathematics", "poetry"]
        }"#;
        let record: UserRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, "abc123");
        assert_eq!(record.name, "Ada Lovelace");
        assert_eq!(record.contact.latitude, Some(51.5));
        assert_eq!(record.interests, vec!["mathematics", "poetry"]);
    }

    #[test]
    fn test_parse_record_without_coordinates() {
        let json = r#"{
            "id": "x",
            "name": "Nomad",
            "photo": "",
            "brief": "",
            "contact": {"email": "", "phone": "", "location": ""},
            "interests": []
        }"#;
        let record: UserRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.contact.latitude, None);
        assert_eq!(record.contact.longitude, None);
    }

    #[test]
    fn test_parse_null_coordinates() {
        let json = r#"{
            "id": "x",
            "name": "Nomad",
            "photo": "",
            "brief": "",
            "contact": {"email": "", "phone": "", "location": "", "latitude": null, "longitude": null},
            "interests": []
        }"#;
        let record: UserRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.contact.latitude, None);
    }

    #[test]
    fn test_draft_omits_absent_coordinates() {
        let mut d = draft("ada");
        d.contact.latitude = None;
        d.contact.longitude = None;
        let json = serde_json::to_value(&d).unwrap();
        let contact = json.get("contact").unwrap();
        assert!(contact.get("latitude").is_none());
        assert!(contact.get("longitude").is_none());
    }

    #[tokio::test]
    async fn test_create_list_update_delete_roundtrip() {
        let store = mock::InMemoryStore::new();

        let created = store.create(&draft("ada")).await.unwrap();
        assert!(!created.id.is_empty());

        let listed = store.list().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, created.id);

        let mut changed = created.to_draft();
        changed.brief = "Updated brief".into();
        let updated = store.update(&created.id, &changed).await.unwrap();
        assert_eq!(updated.id, created.id);

        let fetched = store.get(&created.id).await.unwrap();
        assert_eq!(fetched.brief, "Updated brief");

        store.delete(&created.id).await.unwrap();
        match store.get(&created.id).await {
            Err(StoreError::NotFound(id)) => assert_eq!(id, created.id),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_get_unknown_id_is_not_found() {
        let store = mock::InMemoryStore::new();
        assert!(matches!(
            store.get("missing").await,
            Err(StoreError::NotFound(_))
        ));
        assert!(matches!(
            store.delete("missing").await,
            Err(StoreError::NotFound(_))
        ));
    }
}
