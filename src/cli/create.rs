use crate::api::{ProfileStore, UserDraft};
use crate::directory::Directory;

pub async fn create(store: &dyn ProfileStore, draft: &UserDraft) -> anyhow::Result<()> {
    let created = store.create(draft).await?;
    println!("Created profile '{}' ({}).", created.name, created.id);

    // Re-fetch rather than patching locally.
    let mut directory = Directory::new();
    directory.refresh(store).await?;
    println!("Directory now holds {} profile(s).", directory.len());
    Ok(())
}
