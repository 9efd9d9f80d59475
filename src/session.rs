// src/session.rs
//! Orchestrator: snapshot, apply, revert, re-apply on options change.
//!
//! ```text
//! Session::start ─▶ Initialized ─▶ Applied ◀──▶ Reverted
//!                   (snapshots)      apply()     revert()
//! ```
//! Snapshots are taken once, before any rule runs, and are the only thing
//! revert restores from. Option changes always go revert → reload → apply;
//! never an incremental diff.
use std::collections::BTreeMap;
use std::error::Error;

use crate::config::options::Options;
use crate::core::{dom, Page};
use crate::rules::{self, ApplyReport};
use crate::specs::Region;
use crate::store::{ChangeFlag, OptionsStore};
use crate::terms::TermMap;

/// Original markup of each region present on the page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Snapshots {
    regions: BTreeMap<Region, String>,
}

impl Snapshots {
    /// Capture every region that exists. Missing regions are skipped.
    pub fn take(page: &Page) -> Result<Self, Box<dyn Error>> {
        let mut regions = BTreeMap::new();
        for region in Region::ALL {
            match region.locate(page) {
                Some(el) => {
                    regions.insert(region, dom::inner_html(&el)?);
                }
                None => logd!("Snapshot: no {} on page", region.title()),
            }
        }
        Ok(Self { regions })
    }

    pub fn get(&self, region: Region) -> Option<&str> {
        self.regions.get(&region).map(String::as_str)
    }

    pub fn regions(&self) -> impl Iterator<Item = Region> + '_ {
        self.regions.keys().copied()
    }

    pub fn len(&self) -> usize { self.regions.len() }

    pub fn is_empty(&self) -> bool { self.regions.is_empty() }

    /// Put every captured region back. Regions without a snapshot are left
    /// alone.
    pub fn restore(&self, page: &Page) -> Result<(), Box<dyn Error>> {
        for (region, markup) in &self.regions {
            // Re-located each time; an outer region restored first may have
            // replaced an inner one's element.
            match region.locate(page) {
                Some(el) => dom::set_inner_html(&el, markup)?,
                None => loge!("Revert: {} disappeared from page", region.title()),
            }
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    Initialized,
    Applied,
    Reverted,
}

pub struct Session {
    page: Page,
    snapshots: Snapshots,
    options: Options,
    terms: TermMap,
    state: State,
    pending: ChangeFlag,
}

impl Session {
    /// Snapshot `page` under `options`, without applying. Change
    /// notifications reach the session only through `pending`; the caller
    /// decides what raises it.
    pub fn new(page: Page, options: Options, pending: ChangeFlag) -> Result<Self, Box<dyn Error>> {
        let snapshots = Snapshots::take(&page)?;
        logf!(
            "Init: {} region snapshot(s), options {:?}",
            snapshots.len(),
            options
        );
        Ok(Self {
            page,
            terms: TermMap::build(&options),
            snapshots,
            options,
            state: State::Initialized,
            pending,
        })
    }

    /// Snapshot `page` and take options from `store`, without applying.
    /// The session subscribes to `store` for its own lifetime.
    pub fn init(page: Page, store: &dyn OptionsStore) -> Result<Self, Box<dyn Error>> {
        let options = store.options()?;
        let pending = ChangeFlag::default();
        pending.watch(store);
        Self::new(page, options, pending)
    }

    /// `init` followed by `apply`.
    pub fn start(page: Page, store: &dyn OptionsStore) -> Result<Self, Box<dyn Error>> {
        let mut session = Self::init(page, store)?;
        session.apply();
        Ok(session)
    }

    pub fn page(&self) -> &Page { &self.page }
    pub fn snapshots(&self) -> &Snapshots { &self.snapshots }
    pub fn options(&self) -> &Options { &self.options }
    pub fn terms(&self) -> &TermMap { &self.terms }
    pub fn state(&self) -> State { self.state }

    /// Run every rule against the current page. Disabled options leave the
    /// page untouched.
    pub fn apply(&mut self) -> ApplyReport {
        self.state = State::Applied;
        if !self.options.enabled {
            logf!("Disabled, leaving page as is");
            return ApplyReport::default();
        }
        logf!("Replacing terms ({})", self.options.role_terms);
        let report = rules::apply_all(&self.page, &self.terms);
        logf!(
            "Replaced: {} change(s), skipped: {:?}",
            report.total(),
            report.skipped().collect::<Vec<_>>()
        );
        report
    }

    /// Restore every snapshotted region.
    pub fn revert(&mut self) -> Result<(), Box<dyn Error>> {
        self.snapshots.restore(&self.page)?;
        self.state = State::Reverted;
        Ok(())
    }

    /// Full change cycle: revert, re-read options, rebuild terms, apply.
    pub fn reapply(&mut self, store: &dyn OptionsStore) -> Result<ApplyReport, Box<dyn Error>> {
        logf!("Options changed, updating");
        self.revert()?;
        let options = store.options()?;
        self.terms = TermMap::build(&options);
        self.options = options;
        Ok(self.apply())
    }

    /// Whether a change notification is waiting.
    pub fn has_pending(&self) -> bool { self.pending.is_raised() }

    /// Run change cycles until no notification is waiting. Notifications that
    /// land during a cycle are picked up by the next one, never interleaved.
    /// Returns the last report, or `None` if nothing was pending.
    pub fn process_pending(
        &mut self,
        store: &dyn OptionsStore,
    ) -> Result<Option<ApplyReport>, Box<dyn Error>> {
        let mut last = None;
        while self.pending.take() {
            last = Some(self.reapply(store)?);
        }
        Ok(last)
    }
}
