//! Bucket assignment and recency selection for fetched index names.
//!
//! Categorization partitions the names returned by one settings fetch: every
//! name lands in exactly one bucket. Selection then optionally trims each
//! bucket to its lexicographically greatest members, which stands in for
//! recency when index names carry sortable date suffixes. No date parsing
//! happens here; callers whose names are not sortable get lexicographic
//! order, not chronological.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use crate::es_settings::IndexSettingsResponse;
use crate::matcher::IndexMatcher;

/// Group name that buckets every fetched index together.
pub const ALL_GROUP: &str = "_all";

/// One configured group. Groups are evaluated in declared order and the
/// first match wins, so overlapping patterns resolve deterministically.
pub struct GroupMatcher {
    pub name: String,
    pub matcher: Box<dyn IndexMatcher>,
}

impl GroupMatcher {
    pub fn new(name: impl Into<String>, matcher: impl IndexMatcher + 'static) -> Self {
        Self {
            name: name.into(),
            matcher: Box::new(matcher),
        }
    }
}

/// Partition fetched index names into buckets.
///
/// With no include-list, or one whose first entry is `_all`, every name lands
/// in a single `_all` bucket. Otherwise each name goes to the first matching
/// configured group; names nothing matches become singleton buckets labeled
/// by their own name.
pub fn categorize_indices(
    response: &IndexSettingsResponse,
    indices_included: &[Arc<str>],
    matchers: &[GroupMatcher],
) -> BTreeMap<String, Vec<String>> {
    let mut buckets: BTreeMap<String, Vec<String>> = BTreeMap::new();

    let wildcard = indices_included
        .first()
        .map(|first| &**first == ALL_GROUP)
        .unwrap_or(true);
    if wildcard {
        let all = buckets.entry(ALL_GROUP.to_string()).or_default();
        all.extend(response.keys().cloned());
        return buckets;
    }

    for name in response.keys() {
        let group = matchers
            .iter()
            .find(|gm| gm.matcher.matches(name))
            .map(|gm| gm.name.clone())
            .unwrap_or_else(|| name.clone());
        buckets.entry(group).or_default().push(name.clone());
    }

    buckets
}

/// Trim each bucket to its lexicographically greatest `num_most_recent`
/// members and merge the survivors into one flat map.
///
/// A cap of zero or below keeps every member. Collisions cannot occur in the
/// merged map because bucket membership partitions unique names.
pub fn select_most_recent(
    response: &IndexSettingsResponse,
    buckets: BTreeMap<String, Vec<String>>,
    num_most_recent: i64,
) -> IndexSettingsResponse {
    let mut selected = HashMap::new();
    for (_, mut names) in buckets {
        let keep = if num_most_recent > 0 {
            names.sort_unstable();
            (num_most_recent as usize).min(names.len())
        } else {
            names.len()
        };
        for name in names.iter().rev().take(keep) {
            if let Some(entry) = response.get(name) {
                selected.insert(name.clone(), entry.clone());
            }
        }
    }
    selected
}
