// Copyright 2025 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host-maintained record of which pages are valid.

use core::hash::Hash;

use hashbrown::HashMap;

use crate::Validation;

/// Which pages currently consider themselves valid.
///
/// The host owns this map: it awaits each page's validation and records the
/// result here, and the controller only reads it. A page with no entry (for
/// example one whose validation is still in flight) counts as invalid, which
/// blocks forward navigation without raising an error.
#[derive(Clone, Debug)]
pub struct Validity<K> {
    pages: HashMap<K, bool>,
}

impl<K> Default for Validity<K> {
    fn default() -> Self {
        Self {
            pages: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash> Validity<K> {
    /// A map where every page is invalid.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `key` as valid or invalid.
    pub fn set(&mut self, key: K, valid: bool) {
        self.pages.insert(key, valid);
    }

    /// Store the outcome of a page's validation and return whether it passed.
    pub fn record(&mut self, key: K, result: &Validation) -> bool {
        let valid = result.is_ok();
        if let Err(message) = result {
            log::debug!("page validation failed: {message}");
        }
        self.pages.insert(key, valid);
        valid
    }

    /// Whether `key` is known to be valid. Absent entries are not.
    pub fn is_valid(&self, key: &K) -> bool {
        self.pages.get(key).copied().unwrap_or(false)
    }

    /// The recorded entry for `key`, if any.
    pub fn get(&self, key: &K) -> Option<bool> {
        self.pages.get(key).copied()
    }

    /// Drop the entry for `key`, returning it to the unknown (invalid) state.
    pub fn forget(&mut self, key: &K) -> Option<bool> {
        self.pages.remove(key)
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.pages.clear();
    }
}

impl<K: Eq + Hash> FromIterator<(K, bool)> for Validity<K> {
    fn from_iter<I: IntoIterator<Item = (K, bool)>>(iter: I) -> Self {
        Self {
            pages: iter.into_iter().collect(),
        }
    }
}

impl<K: Eq + Hash> Extend<(K, bool)> for Validity<K> {
    fn extend<I: IntoIterator<Item = (K, bool)>>(&mut self, iter: I) {
        self.pages.extend(iter);
    }
}
