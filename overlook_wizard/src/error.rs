// Copyright 2025 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by the wizard controller.

use core::fmt;

/// A page configuration the controller cannot run.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError<K> {
    /// The page list was empty; a wizard needs at least one page to show.
    #[error("a wizard needs at least one page")]
    Empty,
    /// Two pages share the same key.
    #[error("page key {0:?} is used by more than one page")]
    DuplicateKey(K),
    /// A reconfiguration dropped the page that is currently shown.
    #[error("current page {0:?} is not part of the new configuration")]
    MissingCurrent(K),
}

/// The terminal state a wizard ended in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Terminal {
    /// The user finished the wizard.
    Finished,
    /// The user cancelled the wizard.
    Cancelled,
}

impl fmt::Display for Terminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Finished => "finished",
            Self::Cancelled => "cancelled",
        })
    }
}

/// Errors returned by [`Wizard`](crate::Wizard) operations.
///
/// Every error leaves the wizard exactly as it was before the call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum WizardError<K> {
    /// The supplied page configuration is empty or inconsistent.
    #[error("invalid wizard configuration: {0}")]
    Config(ConfigError<K>),
    /// Navigation targeted a key that is not among the visible pages.
    #[error("no visible page with key {0:?}")]
    UnknownPage(K),
    /// The wizard already finished or was cancelled.
    #[error("wizard is already {0}")]
    InvalidState(Terminal),
}

impl<K> From<ConfigError<K>> for WizardError<K> {
    fn from(err: ConfigError<K>) -> Self {
        Self::Config(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn messages_name_the_offending_key() {
        let err: WizardError<&str> = ConfigError::DuplicateKey("address").into();
        assert_eq!(
            err.to_string(),
            "invalid wizard configuration: page key \"address\" is used by more than one page"
        );
        assert_eq!(
            WizardError::<u32>::InvalidState(Terminal::Cancelled).to_string(),
            "wizard is already cancelled"
        );
        assert_eq!(
            WizardError::UnknownPage(7_u32).to_string(),
            "no visible page with key 7"
        );
    }
}
