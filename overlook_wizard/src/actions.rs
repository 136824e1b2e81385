// Copyright 2025 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navigation actions available to the user.

bitflags::bitflags! {
    /// The set of wizard buttons that are currently enabled.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct NavActions: u8 {
        /// Move back one page.
        const PREVIOUS = 0b0000_0001;
        /// Move forward one page.
        const NEXT     = 0b0000_0010;
        /// Finish the wizard.
        const FINISH   = 0b0000_0100;
        /// Abandon the wizard.
        const CANCEL   = 0b0000_1000;
    }
}

impl NavActions {
    /// The action to emphasize: finishing when allowed, otherwise moving on
    /// when allowed, otherwise nothing.
    #[must_use]
    pub fn primary(self) -> Self {
        if self.contains(Self::FINISH) {
            Self::FINISH
        } else if self.contains(Self::NEXT) {
            Self::NEXT
        } else {
            Self::empty()
        }
    }
}
