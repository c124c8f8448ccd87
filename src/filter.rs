use crate::api::UserRecord;

/// The two filter dimensions of the profile list: a free-text name search
/// and a single interest tag. Recomputed per invocation, never stored.
#[derive(Debug, Clone, Default)]
pub struct FilterQuery {
    pub search: String,
    pub interest: Option<String>,
}

impl FilterQuery {
    pub fn with_search(self, search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            ..self
        }
    }

    pub fn with_interest(self, interest: impl Into<String>) -> Self {
        Self {
            interest: Some(interest.into()),
            ..self
        }
    }
}

/// Select the visible subset of `records` for `query`.
///
/// The name predicate is a case-insensitive substring match, with an
/// empty or whitespace-only search matching everything. The interest
/// predicate is exact tag membership. Both are ANDed and the input order
/// is preserved.
pub fn filter<'a>(records: &'a [UserRecord], query: &FilterQuery) -> Vec<&'a UserRecord> {
    let needle = query.search.trim().to_lowercase();

    records
        .iter()
        .filter(|r| needle.is_empty() || r.name.to_lowercase().contains(&needle))
        .filter(|r| match &query.interest {
            Some(tag) => r.interests.iter().any(|i| i == tag),
            None => true,
        })
        .collect()
}

/// Distinct interest tags across `records`, in first-seen order. These
/// populate the interest filter dimension.
pub fn distinct_interests(records: &[UserRecord]) -> Vec<String> {
    let mut seen = Vec::new();
    for record in records {
        for tag in &record.interests {
            if !seen.contains(tag) {
                seen.push(tag.clone());
            }
        }
    }
    seen
}
