use crate::api::ProfileStore;
use crate::directory::Directory;

pub async fn delete(store: &dyn ProfileStore, id: &str) -> anyhow::Result<()> {
    store.delete(id).await?;
    println!("Deleted profile '{id}'.");

    let mut directory = Directory::new();
    directory.refresh(store).await?;
    println!("Directory now holds {} profile(s).", directory.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::UserDraft;
    use crate::api::mock::InMemoryStore;
    use crate::error::StoreError;

    #[tokio::test]
    async fn test_delete_then_get_is_not_found() {
        let store = InMemoryStore::new();
        let created = store
            .create(&UserDraft {
                name: "Ada".into(),
                ..Default::default()
            })
            .await
            .unwrap();

        delete(&store, &created.id).await.unwrap();
        assert!(matches!(
            store.get(&created.id).await,
            Err(StoreError::NotFound(_))
        ));
    }
}
