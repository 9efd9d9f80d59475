// src/rules/mod.rs
//! Substitution rules, one per terminology domain.
//!
//! Each rule names the term key it cannot work without. [`Rule::run`] checks
//! that key first and skips the rule outright when the map lacks it, so a
//! terminology variant can opt out of whole domains by leaving keys out.
use crate::core::Page;
use crate::terms::{TermKey, TermMap};

pub mod gendered;
pub mod links;
pub mod micro;

pub trait Rule: Send + Sync + 'static {
    fn name(&self) -> &'static str;

    /// Term key this rule requires.
    fn guard(&self) -> TermKey;

    /// Rewrite in place. Returns the number of links/text nodes changed.
    fn apply(&self, page: &Page, terms: &TermMap) -> usize;

    /// Guarded `apply`. `None` when skipped for a missing key.
    fn run(&self, page: &Page, terms: &TermMap) -> Option<usize> {
        if !terms.has(self.guard()) {
            logd!("Rule {}: no {} term, skipping", self.name(), self.guard());
            return None;
        }
        let n = self.apply(page, terms);
        logd!("Rule {}: {} change(s)", self.name(), n);
        Some(n)
    }
}

/// Application order.
pub static RULES: &[&'static dyn Rule] = &[
    &links::ROLES,
    &links::CHAINS,
    &links::SHOULDER_ROUNDS,
    &links::DOUBLE_GYP,
    &micro::MICRO_CHOREO,
    &micro::MICRO_FORMATION,
    &gendered::GENDERED_PHRASES,
    &gendered::GENDERED_VARIANT_VIDEOS,
    &gendered::CALLING_NOTES,
];

/// Outcome of one rule in an apply pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleOutcome {
    pub rule: &'static str,
    /// `None` if skipped for a missing term.
    pub changes: Option<usize>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApplyReport {
    pub outcomes: Vec<RuleOutcome>,
}

impl ApplyReport {
    pub fn total(&self) -> usize {
        self.outcomes.iter().filter_map(|o| o.changes).sum()
    }

    pub fn skipped(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.outcomes.iter().filter(|o| o.changes.is_none()).map(|o| o.rule)
    }

    pub fn changes_for(&self, rule: &str) -> Option<usize> {
        self.outcomes.iter().find(|o| o.rule == rule).and_then(|o| o.changes)
    }
}

/// Run every rule in order.
pub fn apply_all(page: &Page, terms: &TermMap) -> ApplyReport {
    let outcomes = RULES
        .iter()
        .map(|r| RuleOutcome { rule: r.name(), changes: r.run(page, terms) })
        .collect();
    ApplyReport { outcomes }
}
