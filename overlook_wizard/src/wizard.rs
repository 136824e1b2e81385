// Copyright 2025 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The wizard page-sequencing controller.

use alloc::vec::Vec;
use core::fmt::Debug;
use core::future::Future;
use core::hash::Hash;

use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::{
    ConfigError, NavActions, PageSpec, PageValues, StepStatus, Terminal, Validation, Validity,
    WizardError, WizardPage, WizardStep,
};

/// Most wizards have a handful of pages; keep those inline.
type PageTable<K> = SmallVec<[PageSpec<K>; 8]>;

/// Where a wizard run stands.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum WizardPhase<K> {
    /// The wizard is open and showing the page with this key.
    Active(K),
    /// The user finished the wizard.
    Finished,
    /// The user cancelled the wizard.
    Cancelled,
}

/// How a wizard run ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The wizard was finished; the host should collect the page values.
    Completed,
    /// The wizard was cancelled; the host should discard the page values.
    Cancelled,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum RunState {
    Active,
    Ended(Terminal),
}

/// A wizard run: the visible pages in order, the page currently shown, and
/// whether the run is still open.
///
/// The wizard only sequences pages. It reads page validity from a
/// host-maintained [`Validity`] map and never runs validation itself.
#[derive(Clone, Debug)]
pub struct Wizard<K> {
    pages: PageTable<K>,
    index: HashMap<K, usize>,
    current: usize,
    state: RunState,
}

impl<K> Wizard<K>
where
    K: Clone + Eq + Hash + Debug,
{
    /// Open a wizard over `pages`, showing the first one.
    ///
    /// Fails with [`ConfigError::Empty`] when there are no pages and with
    /// [`ConfigError::DuplicateKey`] when two pages share a key.
    pub fn new<I>(pages: I) -> Result<Self, WizardError<K>>
    where
        I: IntoIterator<Item = PageSpec<K>>,
    {
        let (pages, index) = build_table(pages.into_iter().collect())?;
        log::debug!("wizard opened on {:?} with {} pages", pages[0].key, pages.len());
        Ok(Self {
            pages,
            index,
            current: 0,
            state: RunState::Active,
        })
    }

    /// Open a wizard over host-supplied pages.
    pub fn from_pages<P>(pages: &[P]) -> Result<Self, WizardError<K>>
    where
        P: WizardPage<K>,
    {
        Self::new(pages.iter().map(WizardPage::spec))
    }

    /// Replace the page configuration while keeping the current page.
    ///
    /// A configuration equal to the one already held changes nothing. The
    /// current page must still be present; otherwise the call fails with
    /// [`ConfigError::MissingCurrent`] and the wizard is left untouched.
    pub fn reconfigure<I>(&mut self, pages: I) -> Result<(), WizardError<K>>
    where
        I: IntoIterator<Item = PageSpec<K>>,
    {
        self.ensure_active()?;
        let pages: PageTable<K> = pages.into_iter().collect();
        if pages == self.pages {
            log::trace!("reconfigure with an unchanged page list");
            return Ok(());
        }
        let (pages, index) = build_table(pages)?;
        let current_key = self.current();
        let Some(&current) = index.get(current_key) else {
            log::debug!("reconfigure rejected: {current_key:?} would disappear");
            return Err(ConfigError::MissingCurrent(current_key.clone()).into());
        };
        log::debug!(
            "wizard reconfigured to {} pages, {current_key:?} now at {current}",
            pages.len()
        );
        self.pages = pages;
        self.index = index;
        self.current = current;
        Ok(())
    }

    /// [`reconfigure`](Self::reconfigure) from host-supplied pages.
    pub fn reconfigure_pages<P>(&mut self, pages: &[P]) -> Result<(), WizardError<K>>
    where
        P: WizardPage<K>,
    {
        self.reconfigure(pages.iter().map(WizardPage::spec))
    }

    /// Key of the page currently shown.
    ///
    /// After the wizard ends this is the page that was shown last.
    pub fn current(&self) -> &K {
        &self.pages[self.current].key
    }

    /// Metadata of the page currently shown.
    pub fn current_page(&self) -> &PageSpec<K> {
        &self.pages[self.current]
    }

    /// Zero-based position of the current page among the visible pages.
    pub fn position(&self) -> usize {
        self.current
    }

    /// Number of visible pages. Never zero.
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Always `false`: a wizard cannot be built without pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// The visible pages, in order.
    pub fn pages(&self) -> &[PageSpec<K>] {
        &self.pages
    }

    /// Keys of the visible pages, in order.
    pub fn visible(&self) -> impl Iterator<Item = &K> {
        self.pages.iter().map(|p| &p.key)
    }

    /// Metadata for the visible page with `key`.
    pub fn page(&self, key: &K) -> Option<&PageSpec<K>> {
        self.index.get(key).map(|&i| &self.pages[i])
    }

    /// Where this run stands.
    pub fn phase(&self) -> WizardPhase<&K> {
        match self.state {
            RunState::Active => WizardPhase::Active(self.current()),
            RunState::Ended(Terminal::Finished) => WizardPhase::Finished,
            RunState::Ended(Terminal::Cancelled) => WizardPhase::Cancelled,
        }
    }

    /// Whether the wizard is still open.
    pub fn is_active(&self) -> bool {
        self.state == RunState::Active
    }

    /// Whether [`next`](Self::next) would move: a later page exists and the
    /// current page is recorded as valid.
    pub fn can_go_next(&self, validity: &Validity<K>) -> bool {
        self.is_active() && self.current + 1 < self.pages.len() && validity.is_valid(self.current())
    }

    /// Whether [`previous`](Self::previous) would move.
    pub fn can_go_previous(&self) -> bool {
        self.is_active() && self.current > 0
    }

    /// Whether the wizard may be finished from the current page.
    ///
    /// True when the current page is the last one, or when every page after it
    /// is optional. The current page's own validity is not consulted.
    pub fn can_finish(&self) -> bool {
        self.is_active() && self.pages[self.current + 1..].iter().all(|p| p.optional)
    }

    /// Every action currently available. Cancelling is possible as long as
    /// the wizard is open.
    pub fn actions(&self, validity: &Validity<K>) -> NavActions {
        let mut actions = NavActions::empty();
        actions.set(NavActions::PREVIOUS, self.can_go_previous());
        actions.set(NavActions::NEXT, self.can_go_next(validity));
        actions.set(NavActions::FINISH, self.can_finish());
        actions.set(NavActions::CANCEL, self.is_active());
        actions
    }

    /// Move to the next visible page.
    ///
    /// Returns `Ok(false)` and stays put when [`can_go_next`](Self::can_go_next)
    /// is false.
    pub fn next(&mut self, validity: &Validity<K>) -> Result<bool, WizardError<K>> {
        self.ensure_active()?;
        if !self.can_go_next(validity) {
            log::trace!("next ignored on {:?}", self.current());
            return Ok(false);
        }
        self.move_to(self.current + 1);
        Ok(true)
    }

    /// Move to the previous visible page.
    ///
    /// Returns `Ok(false)` and stays put on the first page.
    pub fn previous(&mut self) -> Result<bool, WizardError<K>> {
        self.ensure_active()?;
        if !self.can_go_previous() {
            log::trace!("previous ignored on {:?}", self.current());
            return Ok(false);
        }
        self.move_to(self.current - 1);
        Ok(true)
    }

    /// Jump to the visible page with `key`.
    ///
    /// Validity is not checked, so hosts decide which steps are clickable.
    pub fn go_to(&mut self, key: &K) -> Result<(), WizardError<K>> {
        self.ensure_active()?;
        let Some(&target) = self.index.get(key) else {
            log::debug!("go_to rejected: {key:?} is not a visible page");
            return Err(WizardError::UnknownPage(key.clone()));
        };
        self.move_to(target);
        Ok(())
    }

    /// End the run as completed.
    ///
    /// This does not check [`can_finish`](Self::can_finish); the host gates
    /// its finish button on it.
    pub fn finish(&mut self) -> Result<Outcome, WizardError<K>> {
        self.end(Terminal::Finished)?;
        Ok(Outcome::Completed)
    }

    /// End the run as cancelled.
    pub fn cancel(&mut self) -> Result<Outcome, WizardError<K>> {
        self.end(Terminal::Cancelled)?;
        Ok(Outcome::Cancelled)
    }

    /// The step indicator: one entry per visible page.
    pub fn steps(&self, validity: &Validity<K>) -> Vec<WizardStep<K>> {
        self.pages
            .iter()
            .enumerate()
            .map(|(i, page)| WizardStep {
                key: page.key.clone(),
                title: page.title.clone(),
                status: if i == self.current {
                    StepStatus::Current
                } else if validity.is_valid(&page.key) {
                    StepStatus::Complete
                } else {
                    StepStatus::Pending
                },
            })
            .collect()
    }

    /// The values of the visible pages, in visible order.
    ///
    /// Pages without a value, and host pages that are not visible, are left out.
    pub fn collect_values<P>(&self, pages: &[P]) -> PageValues<K, P::Value>
    where
        P: WizardPage<K>,
    {
        self.pages
            .iter()
            .filter_map(|spec| {
                let page = pages.iter().find(|p| *p.key() == spec.key)?;
                Some((spec.key.clone(), page.value()?))
            })
            .collect()
    }

    /// Let the current page refresh itself before it is shown.
    ///
    /// Hosts call this after opening the wizard and after every transition
    /// that moved to another page.
    pub fn prepare_current<P>(&self, pages: &mut [P]) -> Result<(), WizardError<K>>
    where
        P: WizardPage<K>,
    {
        self.ensure_active()?;
        let values = self.collect_values(pages);
        let key = self.current();
        let page = pages
            .iter_mut()
            .find(|p| p.key() == key)
            .ok_or_else(|| WizardError::UnknownPage(key.clone()))?;
        page.about_to_show(&values);
        Ok(())
    }

    /// Start validating the current page against the values of all visible pages.
    ///
    /// The returned future is not polled here. The host awaits it and stores
    /// the result with [`Validity::record`].
    pub fn validate_current<'a, P>(
        &self,
        pages: &'a [P],
    ) -> Result<impl Future<Output = Validation> + use<'a, K, P>, WizardError<K>>
    where
        P: WizardPage<K>,
    {
        self.ensure_active()?;
        let values = self.collect_values(pages);
        let key = self.current();
        let page = pages
            .iter()
            .find(|p| p.key() == key)
            .ok_or_else(|| WizardError::UnknownPage(key.clone()))?;
        Ok(async move { page.validate(&values).await })
    }

    fn move_to(&mut self, target: usize) {
        log::debug!(
            "wizard moved from {:?} to {:?}",
            self.pages[self.current].key,
            self.pages[target].key
        );
        self.current = target;
    }

    fn end(&mut self, terminal: Terminal) -> Result<(), WizardError<K>> {
        self.ensure_active()?;
        log::debug!("wizard {terminal} on {:?}", self.current());
        self.state = RunState::Ended(terminal);
        Ok(())
    }

    fn ensure_active(&self) -> Result<(), WizardError<K>> {
        match self.state {
            RunState::Active => Ok(()),
            RunState::Ended(terminal) => {
                log::debug!("operation rejected, wizard already {terminal}");
                Err(WizardError::InvalidState(terminal))
            }
        }
    }
}

fn build_table<K>(pages: PageTable<K>) -> Result<(PageTable<K>, HashMap<K, usize>), ConfigError<K>>
where
    K: Clone + Eq + Hash,
{
    if pages.is_empty() {
        return Err(ConfigError::Empty);
    }
    let mut index = HashMap::with_capacity(pages.len());
    for (i, page) in pages.iter().enumerate() {
        if index.insert(page.key.clone(), i).is_some() {
            return Err(ConfigError::DuplicateKey(page.key.clone()));
        }
    }
    Ok((pages, index))
}
