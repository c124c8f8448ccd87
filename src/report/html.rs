use super::Report;
use crate::geo;

pub fn render(report: &Report) -> anyhow::Result<String> {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"UTF-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    html.push_str("<title>User Directory</title>\n");
    html.push_str("<style>\n");
    html.push_str("  body { font-family: system-ui, sans-serif; max-width: 960px; margin: 2rem auto; padding: 0 1rem; color: #1a1a1a; }\n");
    html.push_str("  h1 { border-bottom: 2px solid #333; padding-bottom: 0.5rem; }\n");
    html.push_str("  table { border-collapse: collapse; width: 100%; margin: 1rem 0; }\n");
    html.push_str("  th, td { border: 1px solid #ddd; padding: 0.5rem; text-align: left; }\n");
    html.push_str("  th { background: #f5f5f5; font-weight: 600; }\n");
    html.push_str("  tr:nth-child(even) { background: #fafafa; }\n");
    html.push_str("  .summary { display: grid; grid-template-columns: repeat(auto-fit, minmax(180px, 1fr)); gap: 1rem; margin: 1rem 0; }\n");
    html.push_str("  .stat { background: #f5f5f5; padding: 1rem; border-radius: 4px; }\n");
    html.push_str("  .stat .value { font-size: 1.5rem; font-weight: 700; }\n");
    html.push_str("  .stat .label { color: #666; font-size: 0.875rem; }\n");
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    html.push_str(&format!(
        "<h1>User Directory</h1>\n<p>Generated: {}</p>\n",
        report.generated_at
    ));

    // Summary cards
    html.push_str("<div class=\"summary\">\n");
    write_stat(&mut html, "Profiles", report.summary.total_profiles);
    write_stat(
        &mut html,
        "With Coordinates",
        report.summary.geotagged_profiles,
    );
    write_stat(
        &mut html,
        "Distinct Interests",
        report.summary.distinct_interests,
    );
    html.push_str("</div>\n");

    // Profiles table
    if !report.profiles.is_empty() {
        html.push_str("<h2>Profiles</h2>\n");
        html.push_str("<table>\n<thead><tr><th>Name</th><th>About</th><th>Email</th><th>Location</th><th>Interests</th><th>Map</th></tr></thead>\n<tbody>\n");
        for user in &report.profiles {
            let view = geo::resolve(user.contact.latitude, user.contact.longitude);
            let map = if view.zoom == geo::CLOSE_ZOOM {
                format!("<a href=\"{}\">view</a>", escape_html(&view.osm_url()))
            } else {
                "-".to_string()
            };
            html.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                escape_html(&user.name),
                escape_html(&user.brief),
                escape_html(&user.contact.email),
                escape_html(&user.contact.location),
                escape_html(&user.interests.join(", ")),
                map,
            ));
        }
        html.push_str("</tbody></table>\n");
    }

    // Interests table
    if !report.summary.interest_counts.is_empty() {
        html.push_str("<h2>Interests</h2>\n");
        html.push_str(
            "<table>\n<thead><tr><th>Interest</th><th>Profiles</th></tr></thead>\n<tbody>\n",
        );
        for count in &report.summary.interest_counts {
            html.push_str(&format!(
                "<tr><td>{}</td><td>{}</td></tr>\n",
                escape_html(&count.interest),
                count.profiles,
            ));
        }
        html.push_str("</tbody></table>\n");
    }

    html.push_str("</body>\n</html>\n");

    Ok(html)
}

fn write_stat(html: &mut String, label: &str, value: usize) {
    html.push_str(&format!(
        "<div class=\"stat\"><div class=\"value\">{value}</div><div class=\"label\">{label}</div></div>\n"
    ));
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
