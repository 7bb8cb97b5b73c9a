//! Frequency ranking with encounter-order tie-breaking

use rustc_hash::FxHashMap;
use std::hash::Hash;

/// Count items and rank them by descending frequency
///
/// Items with equal counts keep the order in which they were first seen,
/// so the ranking is fully deterministic.
///
/// # Examples
/// ```
/// use signal_decoder::core::rank_by_frequency;
///
/// let ranked = rank_by_frequency("ABBCCA".chars());
/// assert_eq!(ranked, vec![('A', 2), ('B', 2), ('C', 2)]);
/// ```
#[must_use]
pub fn rank_by_frequency<T, I>(items: I) -> Vec<(T, usize)>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut first_seen: Vec<T> = Vec::new();
    let mut counts: FxHashMap<T, usize> = FxHashMap::default();

    for item in items {
        if let Some(count) = counts.get_mut(&item) {
            *count += 1;
        } else {
            counts.insert(item.clone(), 1);
            first_seen.push(item);
        }
    }

    let mut ranked: Vec<(T, usize)> = first_seen
        .into_iter()
        .map(|item| {
            let count = counts[&item];
            (item, count)
        })
        .collect();

    // Stable sort keeps encounter order among ties
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_by_descending_count() {
        let ranked = rank_by_frequency("ABBCCC".chars());
        assert_eq!(ranked, vec![('C', 3), ('B', 2), ('A', 1)]);
    }

    #[test]
    fn ties_keep_encounter_order() {
        let ranked = rank_by_frequency("ZYXXYZ".chars());
        assert_eq!(ranked, vec![('Z', 2), ('Y', 2), ('X', 2)]);
    }

    #[test]
    fn works_on_tokens() {
        let ranked = rank_by_frequency(vec!["OF", "TO", "OF", "IN", "TO", "OF"]);
        assert_eq!(ranked, vec![("OF", 3), ("TO", 2), ("IN", 1)]);
    }

    #[test]
    fn empty_input() {
        let ranked = rank_by_frequency(Vec::<char>::new());
        assert!(ranked.is_empty());
    }
}
