use comfy_table::{Cell, Table};

use crate::api::ProfileStore;
use crate::directory::Directory;
use crate::filter::FilterQuery;

pub async fn list(
    store: &dyn ProfileStore,
    search: Option<&str>,
    interest: Option<&str>,
    format: &str,
) -> anyhow::Result<()> {
    let mut directory = Directory::new();
    directory.refresh(store).await?;

    let mut query = FilterQuery::default();
    if let Some(s) = search {
        query.search = s.to_string();
    }
    if let Some(tag) = interest {
        query.interest = Some(tag.to_string());
    }

    let visible = directory.visible(&query);

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&visible)?);
        return Ok(());
    }

    if visible.is_empty() {
        println!("No users match your filter.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["ID", "Name", "Email", "Location", "Interests"]);

    for user in &visible {
        table.add_row(vec![
            Cell::new(&user.id),
            Cell::new(&user.name),
            Cell::new(&user.contact.email),
            Cell::new(&user.contact.location),
            Cell::new(user.interests.join(", ")),
        ]);
    }

    println!("{table}");
    println!("\n{} of {} profile(s) shown", visible.len(), directory.len());
    Ok(())
}

pub async fn interests(store: &dyn ProfileStore) -> anyhow::Result<()> {
    let mut directory = Directory::new();
    directory.refresh(store).await?;

    let tags = directory.interests();
    if tags.is_empty() {
        println!("No interests recorded.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Interest", "Profiles"]);

    for tag in &tags {
        let count = directory
            .records()
            .iter()
            .filter(|r| r.interests.iter().any(|i| i == tag))
            .count();
        table.add_row(vec![Cell::new(tag), Cell::new(count)]);
    }

    println!("{table}");
    Ok(())
}
