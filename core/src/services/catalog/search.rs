//! Substring search across the service taxonomy

use super::data::ServiceCatalog;

/// Queries shorter than this (after normalization) return no matches, to
/// avoid noisy results on very short input.
pub const MIN_QUERY_LENGTH: usize = 3;

/// A single autocomplete match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceMatch {
    /// The category this match belongs to
    pub category: &'static str,
    /// The matching sub-service, when the match is granular
    pub sub_service: Option<&'static str>,
    /// False for a category-level row, true for a sub-service row
    pub is_granular: bool,
}

impl ServiceMatch {
    fn category_row(category: &'static str) -> Self {
        Self {
            category,
            sub_service: None,
            is_granular: false,
        }
    }

    fn sub_service_row(category: &'static str, sub_service: &'static str) -> Self {
        Self {
            category,
            sub_service: Some(sub_service),
            is_granular: true,
        }
    }
}

impl ServiceCatalog {
    /// Search both taxonomy levels for a partial text
    ///
    /// Matching is case-insensitive substring containment, tested
    /// independently against each category name and each sub-service name.
    /// Categories are visited in declaration order; within a category the
    /// category row (emitted only when the category name itself matched)
    /// precedes the matching sub-service rows. A category whose name did
    /// not match contributes only its matching sub-service rows.
    pub fn search(&self, query: &str) -> Vec<ServiceMatch> {
        let needle = normalize_query(query);
        if needle.chars().count() < MIN_QUERY_LENGTH {
            return Vec::new();
        }

        let mut matches = Vec::new();
        for (category, subs) in self.entries {
            if category.to_lowercase().contains(&needle) {
                matches.push(ServiceMatch::category_row(category));
            }
            for sub in *subs {
                if sub.to_lowercase().contains(&needle) {
                    matches.push(ServiceMatch::sub_service_row(category, sub));
                }
            }
        }
        matches
    }
}

/// Lowercase the query and trim non-alphanumeric noise from both ends.
/// Interior punctuation is kept so names like "Move-Out Cleaning" stay
/// matchable by their exact text.
fn normalize_query(query: &str) -> String {
    query
        .to_lowercase()
        .trim_matches(|c: char| !c.is_alphanumeric())
        .to_string()
}
