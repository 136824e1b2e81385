// Copyright 2025 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Step indicator model.

use alloc::string::String;

/// How a step is presented in the step indicator.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum StepStatus {
    /// The page currently shown.
    Current,
    /// A page that reports itself valid.
    Complete,
    /// A page not yet completed.
    Pending,
}

/// One entry of the step indicator, in visible page order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WizardStep<K> {
    /// Key of the page this step stands for.
    pub key: K,
    /// The page's title.
    pub title: String,
    /// Presentation state.
    pub status: StepStatus,
}

impl<K> WizardStep<K> {
    /// Whether this step is the page currently shown.
    #[must_use]
    pub fn is_current(&self) -> bool {
        self.status == StepStatus::Current
    }
}
