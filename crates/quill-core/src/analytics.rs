//! Visit-count ranking for the analytics page.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::Pageview;

/// Total visit count for one distinct URL path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathVisits {
    pub path: String,
    pub count: u64,
}

/// Rank recorded visits by path popularity.
///
/// One grouping pass over the full record set: count records per distinct
/// exact path, then sort by count descending. Ties keep first-seen order
/// (stable sort over the discovery sequence).
///
/// The output contains exactly one entry per distinct path, and the counts
/// sum to the number of input records.
pub fn rank_visits(visits: &[Pageview]) -> Vec<PathVisits> {
    let mut counts: HashMap<&str, u64> = HashMap::new();
    // Distinct paths in first-seen order, so tie-breaking is deterministic
    let mut discovered: Vec<&str> = Vec::new();

    for visit in visits {
        let entry = counts.entry(visit.path.as_str()).or_insert(0);
        if *entry == 0 {
            discovered.push(visit.path.as_str());
        }
        *entry += 1;
    }

    let mut results: Vec<PathVisits> = discovered
        .into_iter()
        .map(|path| PathVisits {
            path: path.to_string(),
            count: counts[path],
        })
        .collect();

    results.sort_by(|a, b| b.count.cmp(&a.count));
    results
}
