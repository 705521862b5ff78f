use std::cmp::Ordering;
use icu_collator::{Collator, CollatorOptions, Strength};
use crate::models::{Pool, SortColumn, SortDirection, SortKey};

/// Orders two column values.
///
/// A missing value always ranks as the minimum: first when ascending, last
/// when descending. Two missing values are equal.
pub fn compare_keys(a: SortKey<'_>, b: SortKey<'_>, direction: SortDirection) -> Ordering {
    let ordering = match (a.is_missing(), b.is_missing()) {
        (true, true) => return Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => match (a, b) {
            (SortKey::Number(Some(x)), SortKey::Number(Some(y))) => {
                x.partial_cmp(&y).unwrap_or(Ordering::Equal)
            }
            (SortKey::Text(Some(x)), SortKey::Text(Some(y))) => locale_cmp(x, y),
            _ => return Ordering::Equal,
        },
    };

    match direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    }
}

thread_local! {
    // root collation, tertiary strength
    static COLLATOR: Option<Collator> = {
        let mut options = CollatorOptions::new();
        options.strength = Some(Strength::Tertiary);
        Collator::try_new(&Default::default(), options).ok()
    };
}

/// Dictionary order under the root collation: whitespace and punctuation
/// before symbols, digits, then letters. Accents and case only break ties,
/// with lowercase before uppercase.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    COLLATOR.with(|collator| match collator {
        Some(collator) => collator.compare(a, b),
        None => folded_cmp(a, b),
    })
}

fn folded_cmp(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    if folded != Ordering::Equal {
        return folded;
    }

    for (x, y) in a.chars().zip(b.chars()) {
        if x != y {
            return match (x.is_lowercase(), y.is_lowercase()) {
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                _ => x.cmp(&y),
            };
        }
    }
    a.len().cmp(&b.len())
}

/// Stable in-place sort.
pub fn sort_pools(pools: &mut [&Pool], column: SortColumn, direction: SortDirection) {
    pools.sort_by(|a, b| compare_keys(column.key(a), column.key(b), direction));
}
