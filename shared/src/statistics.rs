//! Summary metrics over the candidate list.
//!
//! Everything here is a pure function of the input slice. The result depends
//! on input order wherever ties are possible: equal-sized parties keep the
//! order in which they were first seen, and the first of several equally long
//! (or short) strings wins.

use std::collections::HashMap;
use crate::models::{Candidate, PartyShare, StatisticsReport};

pub const NO_PARTY: &str = "None";
pub const RECENT_LIMIT: usize = 5;

pub fn compute_statistics(candidates: &[Candidate]) -> StatisticsReport {
    let total = candidates.len();
    let distribution = party_distribution(candidates);

    let (most_common_party, most_common_party_count) = distribution
        .first()
        .map(|share| (share.party.clone(), share.count))
        .unwrap_or_else(|| (NO_PARTY.to_string(), 0));

    let (longest_description, shortest_description) =
        length_extremes(candidates.iter().map(|c| c.description.as_str()));
    let (longest_name, shortest_name) =
        length_extremes(candidates.iter().map(|c| c.name.as_str()));

    StatisticsReport {
        total_candidates: total,
        party_count: distribution.len(),
        most_common_party,
        most_common_party_count,
        avg_description_length: average_length(candidates.iter().map(|c| c.description.as_str())),
        party_distribution: distribution,
        longest_description: longest_description.to_string(),
        shortest_description: shortest_description.to_string(),
        longest_name: longest_name.to_string(),
        shortest_name: shortest_name.to_string(),
        recent_candidates: candidates.iter().rev().take(RECENT_LIMIT).cloned().collect(),
    }
}

fn party_distribution(candidates: &[Candidate]) -> Vec<PartyShare> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, usize)> = Vec::new();

    for candidate in candidates {
        match index.get(candidate.party.as_str()) {
            Some(&slot) => groups[slot].1 += 1,
            None => {
                index.insert(candidate.party.as_str(), groups.len());
                groups.push((candidate.party.as_str(), 1));
            }
        }
    }

    // `sort_by` is stable, so first-seen order survives between equal counts.
    groups.sort_by(|a, b| b.1.cmp(&a.1));

    groups
        .into_iter()
        .map(|(party, count)| PartyShare {
            party: party.to_string(),
            count,
            percentage: format_percentage(count, candidates.len()),
        })
        .collect()
}

/// `count / total * 100` with one decimal; 0 when there is nothing to count.
pub fn format_percentage(count: usize, total: usize) -> String {
    if total == 0 {
        return "0.0".to_string();
    }
    to_fixed_tenths(count as f64 / total as f64 * 100.0)
}

/// Formats the exact decimal value of a non-negative `value` to one place,
/// breaking exact ties upward. `{:.1}` alone sends ties to even.
pub(crate) fn to_fixed_tenths(value: f64) -> String {
    // An exact tie at the hundredths is an odd number of quarters.
    let quarters = value * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 == 1.0 {
        let tenths = (quarters as u64 * 5 + 1) / 2;
        return format!("{}.{}", tenths / 10, tenths % 10);
    }
    format!("{:.1}", value)
}

/// Mean character count rounded half-up to a whole number; 0 when empty.
pub fn average_length<'a>(values: impl Iterator<Item = &'a str>) -> usize {
    let (sum, n) = values.fold((0usize, 0usize), |(sum, n), v| (sum + v.chars().count(), n + 1));
    if n == 0 {
        return 0;
    }
    (2 * sum + n) / (2 * n)
}

/// Longest and shortest strings by character count. Only a strictly longer or
/// shorter value replaces the running best, so the first occurrence wins a
/// tie. The shortest slot starts as an empty sentinel that any value fills.
pub fn length_extremes<'a>(values: impl Iterator<Item = &'a str>) -> (&'a str, &'a str) {
    let mut longest = ("", 0usize);
    let mut shortest = ("", 0usize);

    for value in values {
        let len = value.chars().count();
        if len > longest.1 {
            longest = (value, len);
        }
        if len < shortest.1 || shortest.0.is_empty() {
            shortest = (value, len);
        }
    }

    (longest.0, shortest.0)
}
