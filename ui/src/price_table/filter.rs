use super::entry::PriceEntry;

/// Returns `true` if `pair` contains `term`, ignoring case.
///
/// An empty term matches every pair.
pub fn matches(pair: &str, term: &str) -> bool {
    term.is_empty() || pair.to_lowercase().contains(&term.to_lowercase())
}

/// Keeps the entries whose pair matches `term`, in their original order.
pub fn filter_entries(list: &[PriceEntry], term: &str) -> Vec<PriceEntry> {
    list.iter()
        .filter(|entry| matches(&entry.pair, term))
        .cloned()
        .collect()
}
