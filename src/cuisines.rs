/// Every cuisine tag the reservation service recognizes. Order matters:
/// when no cuisines are requested, searches iterate this list top to bottom.
pub const MASTER_CUISINES: [&str; 15] = [
    "American",
    "Chinese",
    "Cocktail Bar",
    "French",
    "Indian",
    "Italian",
    "Japanese",
    "Korean",
    "Mediterranean",
    "Mexican",
    "New American",
    "Pizza",
    "Seafood",
    "Sushi",
    "Thai",
];

pub fn master_list() -> Vec<String> {
    MASTER_CUISINES.iter().map(|c| c.to_string()).collect()
}

/// Intersects the requested cuisines against the master list, preserving
/// the caller's order. Matching is exact and case-sensitive. An empty
/// intersection, including empty input, resolves to the whole master list:
/// the default is "search everything", never "search nothing".
pub fn resolve(requested: &[String], master: &[String]) -> Vec<String> {
    let matched: Vec<String> = requested
        .iter()
        .map(|c| c.trim())
        .filter(|c| master.iter().any(|m| m == c))
        .map(str::to_string)
        .collect();

    if matched.is_empty() {
        master.to_vec()
    } else {
        matched
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn master() -> Vec<String> {
        master_list()
    }

    #[test]
    fn intersection_keeps_caller_order() {
        let requested = vec!["Korean".to_string(), "Japanese".to_string()];
        assert_eq!(
            resolve(&requested, &master()),
            vec!["Korean".to_string(), "Japanese".to_string()]
        );
    }

    #[test]
    fn unknown_entries_are_dropped() {
        let requested = vec!["Japanese".to_string(), "Martian".to_string()];
        assert_eq!(resolve(&requested, &master()), vec!["Japanese".to_string()]);
    }

    #[test]
    fn whitespace_around_entries_is_trimmed() {
        let requested = vec![" Thai ".to_string()];
        assert_eq!(resolve(&requested, &master()), vec!["Thai".to_string()]);
    }

    #[test]
    fn empty_input_resolves_to_full_master_list() {
        assert_eq!(resolve(&[], &master()), master());
        assert_eq!(resolve(&[], &master()).len(), 15);
    }

    #[test]
    fn fully_unrecognized_input_resolves_to_full_master_list() {
        let requested = vec!["Klingon".to_string(), "Vulcan".to_string()];
        assert_eq!(resolve(&requested, &master()), master());
    }

    // Matching is case-sensitive by baseline; a lowercase entry counts as
    // unrecognized and the search widens to everything rather than failing.
    #[test]
    fn lowercase_entry_is_not_matched_and_falls_back() {
        let requested = vec!["japanese".to_string()];
        assert_eq!(resolve(&requested, &master()), master());
    }
}
