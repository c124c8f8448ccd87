use crate::api::ProfileStore;
use crate::cli::tidy_interests;
use crate::directory::Directory;

/// Field values supplied on the command line. Unset fields keep the current
/// value; the wire request always carries the complete record — there are
/// no partial updates on the backend.
#[derive(Debug, Default)]
pub struct FieldOverrides {
    pub name: Option<String>,
    pub photo: Option<String>,
    pub brief: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub interests: Option<Vec<String>>,
}

pub async fn update(
    store: &dyn ProfileStore,
    id: &str,
    overrides: FieldOverrides,
) -> anyhow::Result<()> {
    // Populate the draft from the current record, the same way the admin
    // form was pre-filled before an edit.
    let current = store.get(id).await?;
    let mut draft = current.to_draft();

    if let Some(v) = overrides.name {
        draft.name = v;
    }
    if let Some(v) = overrides.photo {
        draft.photo = v;
    }
    if let Some(v) = overrides.brief {
        draft.brief = v;
    }
    if let Some(v) = overrides.email {
        draft.contact.email = v;
    }
    if let Some(v) = overrides.phone {
        draft.contact.phone = v;
    }
    if let Some(v) = overrides.location {
        draft.contact.location = v;
    }
    if let Some(v) = overrides.latitude {
        draft.contact.latitude = Some(v);
    }
    if let Some(v) = overrides.longitude {
        draft.contact.longitude = Some(v);
    }
    if let Some(tags) = overrides.interests {
        draft.interests = tidy_interests(tags);
    }

    let updated = store.update(id, &draft).await?;
    println!("Updated profile '{}' ({}).", updated.name, updated.id);

    let mut directory = Directory::new();
    directory.refresh(store).await?;
    println!("Directory now holds {} profile(s).", directory.len());
    Ok(())
}
