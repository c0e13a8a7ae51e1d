/// City catalog offered by the autocomplete dropdown.
pub const CITY_CATALOG: &[&str] = &[
    "New York, US",
    "London, UK",
    "Tokyo, JP",
    "Paris, FR",
    "Sydney, AU",
    "Berlin, DE",
    "Toronto, CA",
    "Mumbai, IN",
];

/// Queries shorter than this return no suggestions.
pub const MIN_QUERY_LEN: usize = 2;

/// Case-insensitive substring filter over `catalog`; catalog order is
/// preserved, no ranking.
pub fn suggest<'a>(query: &str, catalog: &[&'a str]) -> Vec<&'a str> {
    if query.chars().count() < MIN_QUERY_LEN {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    catalog
        .iter()
        .filter(|entry| entry.to_lowercase().contains(&needle))
        .copied()
        .collect()
}

/// City name a catalog entry contributes to the search flow: the text before
/// the first comma.
pub fn canonical_city(entry: &str) -> &str {
    entry.split(',').next().unwrap_or(entry)
}
