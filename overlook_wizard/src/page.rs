// Copyright 2025 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page definitions and the values they report.

use alloc::string::String;
use core::future::{Future, ready};
use core::hash::Hash;

use hashbrown::DefaultHashBuilder;
use indexmap::IndexMap;

/// Result of a page's validation: `Err` carries a message for the user.
pub type Validation = Result<(), String>;

/// The metadata the controller keeps for each page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageSpec<K> {
    /// Identifier, unique among the pages of one wizard.
    pub key: K,
    /// Short label shown in the step indicator.
    pub title: String,
    /// Whether the wizard may finish before this page has been completed.
    pub optional: bool,
}

impl<K> PageSpec<K> {
    /// A required page.
    pub fn new(key: K, title: impl Into<String>) -> Self {
        Self {
            key,
            title: title.into(),
            optional: false,
        }
    }

    /// An optional page.
    pub fn optional(key: K, title: impl Into<String>) -> Self {
        Self {
            optional: true,
            ..Self::new(key, title)
        }
    }
}

/// A page supplied by the host.
///
/// Only [`key`](Self::key) and [`title`](Self::title) are required. The hooks
/// default to a page that has no value, is always valid, and does not care
/// about being shown.
pub trait WizardPage<K> {
    /// Snapshot type reported by [`value`](Self::value).
    type Value: Clone;

    /// Identifier, unique among the pages of one wizard.
    fn key(&self) -> &K;

    /// Short label shown in the step indicator.
    fn title(&self) -> &str;

    /// Whether the wizard may finish before this page has been completed.
    fn is_optional(&self) -> bool {
        false
    }

    /// The page's current value, included in the values handed to
    /// [`validate`](Self::validate), [`about_to_show`](Self::about_to_show),
    /// and the host's finish handler. Purely informational pages return `None`.
    fn value(&self) -> Option<Self::Value> {
        None
    }

    /// Check the page's current state.
    ///
    /// `values` holds the value of every visible page, so a page can validate
    /// against its neighbours. The future may do asynchronous work; the
    /// controller never awaits it. Hosts await it and feed the result into
    /// [`Validity::record`](crate::Validity::record).
    fn validate(&self, values: &PageValues<K, Self::Value>) -> impl Future<Output = Validation> {
        let _ = values;
        ready(Ok(()))
    }

    /// Called right before the page becomes the current one, so it can refresh
    /// itself from the other pages' values.
    fn about_to_show(&mut self, values: &PageValues<K, Self::Value>) {
        let _ = values;
    }

    /// The controller's view of this page.
    fn spec(&self) -> PageSpec<K>
    where
        K: Clone,
    {
        PageSpec {
            key: self.key().clone(),
            title: self.title().into(),
            optional: self.is_optional(),
        }
    }
}

/// Page values keyed by page key, in visible page order.
///
/// Two sets of values are equal only when they hold the same pairs in the
/// same order.
#[derive(Clone, Debug)]
pub struct PageValues<K, V> {
    entries: IndexMap<K, V, DefaultHashBuilder>,
}

impl<K, V> Default for PageValues<K, V> {
    fn default() -> Self {
        Self {
            entries: IndexMap::with_hasher(DefaultHashBuilder::default()),
        }
    }
}

impl<K: Hash + Eq, V> PageValues<K, V> {
    /// An empty set of values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` for `key`, returning the value it replaces.
    ///
    /// A replaced key keeps its original position.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.entries.insert(key, value)
    }

    /// The value stored for `key`.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    /// Whether a value is stored for `key`.
    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }
}

impl<K, V> PageValues<K, V> {
    /// Number of stored values.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no values are stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter()
    }

    /// Iterate over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.keys()
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for PageValues<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq> Eq for PageValues<K, V> {}

impl<K: Hash + Eq, V> FromIterator<(K, V)> for PageValues<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut values = Self::new();
        for (k, v) in iter {
            values.insert(k, v);
        }
        values
    }
}

impl<K, V> IntoIterator for PageValues<K, V> {
    type Item = (K, V);
    type IntoIter = indexmap::map::IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
