//! Generic time-series container.
//!
//! `TimeSeries<K, V>` is an ordered map from a time key to a value.  Keys are
//! unique and always iterated in ascending order, whatever order the samples
//! were supplied in.

use std::collections::BTreeMap;
use std::ops::Bound;

/// A generic time-indexed container backed by a `BTreeMap`.
///
/// Missing keys simply return `None`; there is no null-value sentinel.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeries<K: Ord + Clone, V: Clone> {
    data: BTreeMap<K, V>,
}

impl<K: Ord + Clone, V: Clone> Default for TimeSeries<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord + Clone, V: Clone> std::iter::FromIterator<(K, V)> for TimeSeries<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<K: Ord + Clone, V: Clone> TimeSeries<K, V> {
    // ── Constructors ─────────────────────────────────────────────────────

    /// Create an empty time series.
    pub fn new() -> Self {
        Self {
            data: BTreeMap::new(),
        }
    }

    /// Build from an iterator of `(K, V)` pairs.  Later pairs overwrite
    /// earlier ones with the same key.
    pub fn from_pairs(iter: impl IntoIterator<Item = (K, V)>) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }

    /// Return a copy of this series with one more sample.
    ///
    /// `self` is left untouched.
    pub fn with_sample(&self, key: K, value: V) -> Self {
        let mut data = self.data.clone();
        data.insert(key, value);
        Self { data }
    }

    // ── Inspectors ───────────────────────────────────────────────────────

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the series is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The earliest key, or `None` if empty.
    pub fn first_key(&self) -> Option<&K> {
        self.data.keys().next()
    }

    /// The latest key, or `None` if empty.
    pub fn last_key(&self) -> Option<&K> {
        self.data.keys().next_back()
    }

    /// The earliest entry, or `None` if empty.
    pub fn first(&self) -> Option<(&K, &V)> {
        self.data.iter().next()
    }

    /// The latest entry, or `None` if empty.
    pub fn last(&self) -> Option<(&K, &V)> {
        self.data.iter().next_back()
    }

    // ── Element access ───────────────────────────────────────────────────

    /// Look up a value by key.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.data.get(key)
    }

    /// The last entry whose key is `<= key`.
    pub fn at_or_before(&self, key: &K) -> Option<(&K, &V)> {
        self.data.range(..=key).next_back()
    }

    /// The first entry whose key is strictly `> key`.
    pub fn after(&self, key: &K) -> Option<(&K, &V)> {
        self.data
            .range((Bound::Excluded(key), Bound::Unbounded))
            .next()
    }

    // ── Bulk access ──────────────────────────────────────────────────────

    /// All keys in ascending order.
    pub fn keys(&self) -> Vec<K> {
        self.data.keys().cloned().collect()
    }

    /// Iterate over `(&K, &V)` in ascending key order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&K, &V)> {
        self.data.iter()
    }
}

impl<K: Ord + Clone, V: Clone> std::ops::Index<&K> for TimeSeries<K, V> {
    type Output = V;

    fn index(&self, key: &K) -> &V {
        &self.data[key]
    }
}

impl<K: Ord + Clone + std::fmt::Display, V: Clone + std::fmt::Display> std::fmt::Display
    for TimeSeries<K, V>
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (k, v) in &self.data {
            writeln!(f, "{k} => {v}")?;
        }
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
