use comfy_table::{Cell, Table};

use super::Report;
use crate::geo;

pub fn render(report: &Report) -> anyhow::Result<String> {
    let mut output = String::new();

    output.push_str(&format!(
        "=== User Directory Report ({}) ===\n\n",
        report.generated_at
    ));

    // Summary
    output.push_str("--- Summary ---\n");
    output.push_str(&format!(
        "Profiles:            {}\n",
        report.summary.total_profiles
    ));
    output.push_str(&format!(
        "With coordinates:    {}\n",
        report.summary.geotagged_profiles
    ));
    output.push_str(&format!(
        "Distinct interests:  {}\n",
        report.summary.distinct_interests
    ));

    // Profiles table
    if !report.profiles.is_empty() {
        output.push_str("\n--- Profiles ---\n");
        let mut table = Table::new();
        table.set_header(vec!["Name", "Email", "Location", "Interests", "Map"]);
        for user in &report.profiles {
            let view = geo::resolve(user.contact.latitude, user.contact.longitude);
            let map = if view.zoom == geo::CLOSE_ZOOM {
                view.osm_url()
            } else {
                "-".to_string()
            };
            table.add_row(vec![
                Cell::new(&user.name),
                Cell::new(&user.contact.email),
                Cell::new(&user.contact.location),
                Cell::new(user.interests.join(", ")),
                Cell::new(map),
            ]);
        }
        output.push_str(&table.to_string());
        output.push('\n');
    }

    // Interests table
    if !report.summary.interest_counts.is_empty() {
        output.push_str("\n--- Interests ---\n");
        let mut table = Table::new();
        table.set_header(vec!["Interest", "Profiles"]);
        for count in &report.summary.interest_counts {
            table.add_row(vec![
                Cell::new(&count.interest),
                Cell::new(count.profiles),
            ]);
        }
        output.push_str(&table.to_string());
        output.push('\n');
    }

    Ok(output)
}
