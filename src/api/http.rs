use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;

use super::{ProfileStore, UserDraft, UserRecord};
use crate::error::StoreError;

/// HTTP client for the user-management backend.
///
/// Talks plain JSON to `/api/users` and `/api/users/{id}`. Each call is a
/// single fire-and-await round trip; the server is trusted to assign and
/// keep identifiers. No timeout is set — transport defaults apply.
pub struct HttpProfileStore {
    client: Client,
    base_url: String,
}

impl HttpProfileStore {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("userdesk/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn collection_url(&self) -> String {
        format!("{}/api/users", self.base_url)
    }

    fn record_url(&self, id: &str) -> String {
        format!("{}/api/users/{}", self.base_url, id)
    }
}

/// Decode a success response, surfacing non-2xx statuses as `RequestFailed`.
async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, StoreError> {
    let status = resp.status();
    if !status.is_success() {
        return Err(StoreError::RequestFailed {
            status: status.as_u16(),
        });
    }
    let body = resp.text().await.map_err(StoreError::Transport)?;
    Ok(serde_json::from_str(&body)?)
}

#[async_trait::async_trait]
impl ProfileStore for HttpProfileStore {
    async fn list(&self) -> Result<Vec<UserRecord>, StoreError> {
        let url = self.collection_url();
        tracing::debug!("GET {url}");
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(StoreError::Transport)?;
        read_json(resp).await
    }

    async fn get(&self, id: &str) -> Result<UserRecord, StoreError> {
        let url = self.record_url(id);
        tracing::debug!("GET {url}");
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(StoreError::Transport)?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Err(StoreError::NotFound(id.to_string()));
        }
        read_json(resp).await
    }

    async fn create(&self, draft: &UserDraft) -> Result<UserRecord, StoreError> {
        let url = self.collection_url();
        tracing::debug!("POST {url}");
        let resp = self
            .client
            .post(&url)
            .json(draft)
            .send()
            .await
            .map_err(StoreError::Transport)?;
        read_json(resp).await
    }

    async fn update(&self, id: &str, draft: &UserDraft) -> Result<UserRecord, StoreError> {
        let url = self.record_url(id);
        tracing::debug!("PUT {url}");
        let resp = self
            .client
            .put(&url)
            .json(draft)
            .send()
            .await
            .map_err(StoreError::Transport)?;
        read_json(resp).await
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let url = self.record_url(id);
        tracing::debug!("DELETE {url}");
        let resp = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(StoreError::Transport)?;
        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            return Err(StoreError::NotFound(id.to_string()));
        }
        if !status.is_success() {
            return Err(StoreError::RequestFailed {
                status: status.as_u16(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_without_trailing_slash() {
        let store = HttpProfileStore::new("http://localhost:5000").unwrap();
        assert_eq!(store.collection_url(), "http://localhost:5000/api/users");
        assert_eq!(store.record_url("42"), "http://localhost:5000/api/users/42");
    }

    #[test]
    fn test_urls_with_trailing_slash() {
        let store = HttpProfileStore::new("http://localhost:5000/").unwrap();
        assert_eq!(store.collection_url(), "http://localhost:5000/api/users");
        assert_eq!(store.record_url("42"), "http://localhost:5000/api/users/42");
    }
}
