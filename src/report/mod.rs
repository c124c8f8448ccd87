pub mod html;
pub mod json;
pub mod terminal;

use serde::Serialize;

use crate::api::UserRecord;
use crate::filter;

pub enum ReportFormat {
    Terminal,
    Json,
    Html,
}

/// A point-in-time snapshot of the profile directory.
#[derive(Debug, Serialize)]
pub struct Report {
    pub generated_at: String,
    pub profiles: Vec<UserRecord>,
    pub summary: ReportSummary,
}

#[derive(Debug, Serialize)]
pub struct ReportSummary {
    pub total_profiles: usize,
    pub geotagged_profiles: usize,
    pub distinct_interests: usize,
    pub interest_counts: Vec<InterestCount>,
}

#[derive(Debug, Serialize)]
pub struct InterestCount {
    pub interest: String,
    pub profiles: usize,
}

impl Report {
    pub fn build(records: &[UserRecord]) -> Self {
        let interest_counts: Vec<InterestCount> = filter::distinct_interests(records)
            .into_iter()
            .map(|tag| InterestCount {
                profiles: records
                    .iter()
                    .filter(|r| r.interests.iter().any(|i| *i == tag))
                    .count(),
                interest: tag,
            })
            .collect();

        let summary = ReportSummary {
            total_profiles: records.len(),
            geotagged_profiles: records
                .iter()
                .filter(|r| r.contact.latitude.is_some() && r.contact.longitude.is_some())
                .count(),
            distinct_interests: interest_counts.len(),
            interest_counts,
        };

        Self {
            generated_at: chrono::Utc::now().to_rfc3339(),
            profiles: records.to_vec(),
            summary,
        }
    }

    pub fn render(&self, format: ReportFormat) -> anyhow::Result<String> {
        match format {
            ReportFormat::Terminal => terminal::render(self),
            ReportFormat::Json => json::render(self),
            ReportFormat::Html => html::render(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Contact;

    fn record(name: &str, interests: &[&str], located: bool) -> UserRecord {
        UserRecord {
            id: name.to_lowercase(),
            name: name.into(),
            photo: String::new(),
            brief: String::new(),
            contact: Contact {
                latitude: located.then_some(40.0),
                longitude: located.then_some(-74.0),
                ..Default::default()
            },
            interests: interests.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_summary_counts() {
        let records = vec![
            record("Ada", &["poetry", "mathematics"], true),
            record("Grace", &["compilers"], false),
            record("Radia", &["poetry"], true),
        ];
        let report = Report::build(&records);

        assert_eq!(report.summary.total_profiles, 3);
        assert_eq!(report.summary.geotagged_profiles, 2);
        assert_eq!(report.summary.distinct_interests, 3);

        let poetry = report
            .summary
            .interest_counts
            .iter()
            .find(|c| c.interest == "poetry")
            .unwrap();
        assert_eq!(poetry.profiles, 2);
    }

    #[test]
    fn test_empty_directory_report() {
        let report = Report::build(&[]);
        assert_eq!(report.summary.total_profiles, 0);
        assert!(report.summary.interest_counts.is_empty());
        // All three renderers handle the empty case.
        report.render(ReportFormat::Terminal).unwrap();
        report.render(ReportFormat::Json).unwrap();
        report.render(ReportFormat::Html).unwrap();
    }
}
