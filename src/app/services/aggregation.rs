//! Generic aggregation helpers
//!
//! Data-shape agnostic group, sum, mean, median and count over any iterator and
//! extractor closure. Used by the KPI builder and every chart builder.
//!
//! Grouping keeps the order in which keys are first seen; callers sort when they
//! need a specific order.

use std::collections::HashMap;
use std::hash::Hash;

/// Group items by key, keeping first-seen key order and item order within groups
pub fn group_by<I, K, F>(items: I, mut key_fn: F) -> Vec<(K, Vec<I::Item>)>
where
    I: IntoIterator,
    K: Eq + Hash + Clone,
    F: FnMut(&I::Item) -> K,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, Vec<I::Item>)> = Vec::new();

    for item in items {
        let key = key_fn(&item);
        match index.get(&key) {
            Some(&slot) => groups[slot].1.push(item),
            None => {
                index.insert(key.clone(), groups.len());
                groups.push((key, vec![item]));
            }
        }
    }

    groups
}

/// Sum of projections; non-finite projections count as 0
pub fn sum_by<I, F>(items: I, mut value_fn: F) -> f64
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> f64,
{
    items
        .into_iter()
        .map(|item| value_fn(&item))
        .filter(|value| value.is_finite())
        .sum()
}

/// Arithmetic mean over finite projections, NaN when there are none
pub fn mean_by<I, F>(items: I, value_fn: F) -> f64
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> f64,
{
    let values = finite_values(items, value_fn);
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Median over finite projections, NaN when there are none
///
/// Even counts average the two middle values.
pub fn median_by<I, F>(items: I, value_fn: F) -> f64
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> f64,
{
    let mut values = finite_values(items, value_fn);
    if values.is_empty() {
        return f64::NAN;
    }
    values.sort_by(f64::total_cmp);

    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        (values[mid - 1] + values[mid]) / 2.0
    } else {
        values[mid]
    }
}

/// Occurrence count per key, in first-seen key order
pub fn count_by<I, K, F>(items: I, mut key_fn: F) -> Vec<(K, usize)>
where
    I: IntoIterator,
    K: Eq + Hash + Clone,
    F: FnMut(&I::Item) -> K,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut counts: Vec<(K, usize)> = Vec::new();

    for item in items {
        let key = key_fn(&item);
        match index.get(&key) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                index.insert(key.clone(), counts.len());
                counts.push((key, 1));
            }
        }
    }

    counts
}

/// Stable descending sort on the value of `(key, value)` pairs
///
/// Ties keep their incoming order.
pub fn sort_desc_by_value<K, V: PartialOrd>(pairs: &mut [(K, V)]) {
    pairs.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}

fn finite_values<I, F>(items: I, mut value_fn: F) -> Vec<f64>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> f64,
{
    items
        .into_iter()
        .map(|item| value_fn(&item))
        .filter(|value| value.is_finite())
        .collect()
}
