// src/terms.rs
//! Terminology maps: symbolic term keys → display strings.
//!
//! A `TermMap` is built once per options value and never mutated. A missing
//! key means "skip everything that needs it", which is how the `mw` selector
//! switches off all role substitutions.
use std::collections::BTreeMap;
use std::fmt;

use crate::config::options::{Options, RoleTerms};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(non_camel_case_types)]
pub enum TermKey {
    ROLE_R,
    ROLE_L,
    ROLE_R_S,
    ROLE_L_S,
    CHAIN_R,
    CHAIN_L,
    CHAIN_R_BY_L,
    GRAND_CHAIN_R,
    GRAND_CHAIN_L,
    OPEN_CHAIN_R,
    OPEN_CHAIN_L,
    THREE_CHAIN_R,
    DOUBLE_TRADE,
    RSR,
    LSR,
    MICRO_R,
    MICRO_L,
}

impl TermKey {
    pub fn as_str(self) -> &'static str {
        use TermKey::*;
        match self {
            ROLE_R => "ROLE_R",
            ROLE_L => "ROLE_L",
            ROLE_R_S => "ROLE_R_S",
            ROLE_L_S => "ROLE_L_S",
            CHAIN_R => "CHAIN_R",
            CHAIN_L => "CHAIN_L",
            CHAIN_R_BY_L => "CHAIN_R_BY_L",
            GRAND_CHAIN_R => "GRAND_CHAIN_R",
            GRAND_CHAIN_L => "GRAND_CHAIN_L",
            OPEN_CHAIN_R => "OPEN_CHAIN_R",
            OPEN_CHAIN_L => "OPEN_CHAIN_L",
            THREE_CHAIN_R => "THREE_CHAIN_R",
            DOUBLE_TRADE => "DOUBLE_TRADE",
            RSR => "RSR",
            LSR => "LSR",
            MICRO_R => "MICRO_R",
            MICRO_L => "MICRO_L",
        }
    }
}

impl fmt::Display for TermKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub type Entries = &'static [(TermKey, &'static str)];

// Double gyp always shows up as "Corner trade 4 (quick trades)" on the site,
// so "quick trades" reads naturally in its place.
pub const HALF_GYP_TERMS: Entries = &[
    (TermKey::DOUBLE_TRADE, "quick trades"),
    (TermKey::RSR, "right shoulder round"),
    (TermKey::LSR, "left shoulder round"),
];

pub const ROLE_TERMS_BIRDS: Entries = &[
    (TermKey::ROLE_R, "Robins"),
    (TermKey::ROLE_L, "Larks"),
    (TermKey::ROLE_R_S, "Robin"),
    (TermKey::ROLE_L_S, "Lark"),
    (TermKey::CHAIN_R, "Robins chain"),
    (TermKey::CHAIN_L, "Larks chain"),
    (TermKey::CHAIN_R_BY_L, "right-hand chain"),
    (TermKey::GRAND_CHAIN_R, "Robins grand chain"),
    (TermKey::GRAND_CHAIN_L, "Larks grand chain"),
    (TermKey::OPEN_CHAIN_R, "Robins open chain"),
    (TermKey::OPEN_CHAIN_L, "Larks open chain"),
    (TermKey::THREE_CHAIN_R, "Three Robins chain"),
    // Single initials for micro-notation (heys, waves)
    (TermKey::MICRO_R, "R"),
    (TermKey::MICRO_L, "L"),
];

pub const ROLE_TERMS_LF: Entries = &[
    (TermKey::ROLE_R, "Follows"),
    (TermKey::ROLE_L, "Leads"),
    (TermKey::ROLE_R_S, "Follow"),
    (TermKey::ROLE_L_S, "Lead"),
    (TermKey::CHAIN_R, "Follows chain"),
    (TermKey::CHAIN_L, "Leads chain"),
    (TermKey::CHAIN_R_BY_L, "right-hand chain"),
    (TermKey::GRAND_CHAIN_R, "Follows grand chain"),
    (TermKey::GRAND_CHAIN_L, "Leads grand chain"),
    (TermKey::OPEN_CHAIN_R, "Follows open chain"),
    (TermKey::OPEN_CHAIN_L, "Leads open chain"),
    (TermKey::THREE_CHAIN_R, "Three follows chain"),
    (TermKey::MICRO_R, "F"),
    (TermKey::MICRO_L, "L"),
];

pub const ROLE_TERMS_LG: Entries = &[
    (TermKey::ROLE_R, "Ladies"),
    (TermKey::ROLE_L, "Gents"),
    (TermKey::ROLE_R_S, "Lady"),
    (TermKey::ROLE_L_S, "Gent"),
    (TermKey::CHAIN_R, "Ladies chain"),
    (TermKey::CHAIN_L, "Gents chain"),
    (TermKey::CHAIN_R_BY_L, "right-hand chain"),
    (TermKey::GRAND_CHAIN_R, "Ladies grand chain"),
    (TermKey::GRAND_CHAIN_L, "Gents grand chain"),
    (TermKey::OPEN_CHAIN_R, "Ladies open chain"),
    (TermKey::OPEN_CHAIN_L, "Gents open chain"),
    (TermKey::THREE_CHAIN_R, "Three ladies chain"),
    (TermKey::MICRO_R, "L"),
    (TermKey::MICRO_L, "G"),
];

/// Role-variant table for a selector. Unknown selectors have none.
pub fn role_variant(roles: &RoleTerms) -> Option<Entries> {
    match roles {
        RoleTerms::Birds => Some(ROLE_TERMS_BIRDS),
        RoleTerms::LeadFollow => Some(ROLE_TERMS_LF),
        RoleTerms::LadiesGents => Some(ROLE_TERMS_LG),
        RoleTerms::Other(_) => None,
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TermMap {
    entries: BTreeMap<TermKey, String>,
}

impl TermMap {
    /// Shallow union, later tables winning on collisions.
    pub fn from_tables(tables: &[Entries]) -> Self {
        let mut entries = BTreeMap::new();
        for table in tables {
            for (k, v) in table.iter() {
                entries.insert(*k, s!(*v));
            }
        }
        Self { entries }
    }

    /// Resolve options into the flat map the substitution rules consume.
    pub fn build(options: &Options) -> Self {
        let mut tables = Vec::with_capacity(2);
        if options.use_rsr {
            tables.push(HALF_GYP_TERMS);
        }
        if let Some(roles) = role_variant(&options.role_terms) {
            tables.push(roles);
        }
        Self::from_tables(&tables)
    }

    pub fn get(&self, key: TermKey) -> Option<&str> {
        self.entries.get(&key).map(String::as_str)
    }

    pub fn has(&self, key: TermKey) -> bool {
        self.entries.contains_key(&key)
    }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = (TermKey, &str)> {
        self.entries.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

impl FromIterator<(TermKey, String)> for TermMap {
    fn from_iter<I: IntoIterator<Item = (TermKey, String)>>(iter: I) -> Self {
        Self { entries: iter.into_iter().collect() }
    }
}
