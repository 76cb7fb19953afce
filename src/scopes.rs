/// candidates containing `partial` (case-insensitive), in their original order
pub fn filter<'a>(candidates: &'a [String], partial: &str) -> Vec<&'a str> {
    if partial.is_empty() {
        return candidates.iter().map(String::as_str).collect();
    }

    let needle = partial.to_lowercase();
    candidates
        .iter()
        .filter(|candidate| candidate.to_lowercase().contains(&needle))
        .map(String::as_str)
        .collect()
}
