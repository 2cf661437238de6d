use std::collections::HashSet;

/// Removes repeated values, keeping the first occurrence of each one in its
/// original position. The input is not re-sorted.
pub fn dedupe<I>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();

    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

/// Sorts lexicographically, then drops duplicates.
pub fn sorted_unique(mut items: Vec<String>) -> Vec<String> {
    items.sort();
    dedupe(items)
}
