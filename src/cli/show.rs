use crate::api::ProfileStore;
use crate::geo;

pub async fn show(store: &dyn ProfileStore, id: &str) -> anyhow::Result<()> {
    let user = store.get(id).await?;

    println!("ID:        {}", user.id);
    println!("Name:      {}", user.name);
    if !user.photo.is_empty() {
        println!("Photo:     {}", user.photo);
    }
    if !user.brief.is_empty() {
        println!("About:     {}", user.brief);
    }
    println!("Email:     {}", user.contact.email);
    println!("Phone:     {}", user.contact.phone);
    println!("Location:  {}", user.contact.location);
    if !user.interests.is_empty() {
        println!("Interests: {}", user.interests.join(", "));
    }

    let view = geo::resolve(user.contact.latitude, user.contact.longitude);
    println!("Map:       {}", view.osm_url());
    Ok(())
}

pub async fn map(store: &dyn ProfileStore, id: &str) -> anyhow::Result<()> {
    let user = store.get(id).await?;
    let view = geo::resolve(user.contact.latitude, user.contact.longitude);

    if view.zoom == geo::CLOSE_ZOOM {
        println!("Centered on {}.", user.name);
    } else {
        println!("{} has no recorded coordinates; showing the world view.", user.name);
    }
    println!("Center: {}, {}", view.latitude, view.longitude);
    println!("Zoom:   {}", view.zoom);
    println!("Link:   {}", view.osm_url());
    Ok(())
}
