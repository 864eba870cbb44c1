//! Partitioning of flat tagged record lists.
//!
//! The platform stores several structured views as one flat list of records
//! whose field combination decides which view a record belongs to. [`partition`]
//! splits such a list into keyed buckets once, and [`Buckets::take_or`] hands a
//! bucket to its decoder or falls back to the view's declared default rows.

use std::collections::HashMap;
use std::hash::Hash;

/// Records grouped by discriminator key, each bucket in input order.
#[derive(Debug, Clone)]
pub struct Buckets<K, T> {
    buckets: HashMap<K, Vec<T>>,
}

/// Split `items` into buckets keyed by `discriminator`.
///
/// Items for which the discriminator returns `None` are discarded.
pub fn partition<K, T, I, F>(items: I, mut discriminator: F) -> Buckets<K, T>
where
    K: Eq + Hash,
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> Option<K>,
{
    let mut buckets: HashMap<K, Vec<T>> = HashMap::new();
    for item in items {
        if let Some(key) = discriminator(&item) {
            buckets.entry(key).or_default().push(item);
        }
    }
    Buckets { buckets }
}

impl<K: Eq + Hash, T> Buckets<K, T> {
    /// Remove and return the bucket for `key` (empty if nothing matched).
    pub fn take(&mut self, key: &K) -> Vec<T> {
        self.buckets.remove(key).unwrap_or_default()
    }

    /// Decode the bucket for `key`, or return `default` when it is empty.
    pub fn take_or<V, F, D>(&mut self, key: &K, decode: F, default: D) -> Vec<V>
    where
        F: FnMut(T) -> V,
        D: FnOnce() -> Vec<V>,
    {
        let bucket = self.take(key);
        if bucket.is_empty() {
            default()
        } else {
            bucket.into_iter().map(decode).collect()
        }
    }

    /// Number of items in the bucket for `key`.
    #[must_use]
    pub fn len_of(&self, key: &K) -> usize {
        self.buckets.get(key).map_or(0, Vec::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Parity {
        Even,
        Odd,
    }

    fn parity(n: &i32) -> Option<Parity> {
        if *n < 0 {
            None
        } else if n % 2 == 0 {
            Some(Parity::Even)
        } else {
            Some(Parity::Odd)
        }
    }

    #[test]
    fn test_partition_preserves_order_and_discards() {
        let mut buckets = partition(vec![3, -1, 4, 1, 6], parity);
        assert_eq!(buckets.len_of(&Parity::Odd), 2);
        assert_eq!(buckets.take(&Parity::Even), vec![4, 6]);
        assert_eq!(buckets.take(&Parity::Odd), vec![3, 1]);
        // Taken buckets are gone.
        assert!(buckets.take(&Parity::Odd).is_empty());
    }

    #[test]
    fn test_take_or_uses_default_for_empty_bucket() {
        let mut buckets = partition(vec![1, 3], parity);
        let evens = buckets.take_or(&Parity::Even, |n| n * 10, || vec![0]);
        assert_eq!(evens, vec![0]);
        let odds = buckets.take_or(&Parity::Odd, |n| n * 10, || vec![0]);
        assert_eq!(odds, vec![10, 30]);
    }
}
