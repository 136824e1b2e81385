// Copyright 2025 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlook Wizard: headless sequencing for multi-step wizard dialogs.
//!
//! A wizard walks the user through an ordered list of pages. This crate owns
//! the part of that which is pure logic:
//!
//! - **Page configuration** ([`PageSpec`], or host pages implementing
//!   [`WizardPage`]): a unique key, a title, and whether the page is optional.
//! - **The run state** ([`Wizard`]): which pages are visible, which one is
//!   current, and whether the run has ended ([`WizardPhase`]).
//! - **Navigation gating**: moving forward requires the current page to be
//!   recorded as valid in a host-maintained [`Validity`] map; finishing only
//!   requires that no required page remains after the current one.
//! - **Presentation data**: the enabled buttons as [`NavActions`] and the step
//!   indicator as [`WizardStep`]s.
//!
//! This crate deliberately does **not** render anything or run validation on
//! its own schedule. Host frameworks are responsible for:
//!
//! - Showing the page whose key is [`Wizard::current`].
//! - Awaiting [`Wizard::validate_current`] and storing the result with
//!   [`Validity::record`].
//! - Calling [`Wizard::next`], [`Wizard::previous`], [`Wizard::finish`], or
//!   [`Wizard::cancel`] in response to user input, then
//!   [`Wizard::prepare_current`] when the page changed.
//! - Collecting page values with [`Wizard::collect_values`] once the run
//!   completes.
//!
//! ## Minimal example
//!
//! ```rust
//! use overlook_wizard::{NavActions, Outcome, PageSpec, Validity, Wizard};
//!
//! let mut wizard = Wizard::new([
//!     PageSpec::new("source", "Choose a source"),
//!     PageSpec::new("fields", "Map fields"),
//!     PageSpec::optional("schedule", "Schedule"),
//! ])?;
//! let mut validity = Validity::new();
//!
//! // The first page is not valid yet, so only cancelling is possible.
//! assert_eq!(wizard.actions(&validity), NavActions::CANCEL);
//!
//! validity.set("source", true);
//! assert!(wizard.next(&validity)?);
//! assert_eq!(*wizard.current(), "fields");
//!
//! // Only an optional page remains, so the wizard can finish here.
//! assert!(wizard.can_finish());
//! assert_eq!(wizard.finish()?, Outcome::Completed);
//! # Ok::<(), overlook_wizard::WizardError<&str>>(())
//! ```
//!
//! Every operation that can fail returns a [`WizardError`] and leaves the
//! wizard untouched. Once a run has finished or been cancelled, every further
//! transition fails with [`WizardError::InvalidState`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod actions;
mod error;
mod page;
mod steps;
mod validity;
mod wizard;

pub use actions::NavActions;
pub use error::{ConfigError, Terminal, WizardError};
pub use page::{PageSpec, PageValues, Validation, WizardPage};
pub use steps::{StepStatus, WizardStep};
pub use validity::Validity;
pub use wizard::{Outcome, Wizard, WizardPhase};
