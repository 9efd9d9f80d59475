// src/config/options.rs
use std::fmt;

use super::consts::*;

/// Which terminology variant replaces the gendered role names.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum RoleTerms {
    /// Larks / Robins
    Birds,
    /// Leads / Follows
    LeadFollow,
    /// Gents / Ladies
    LadiesGents,
    /// Anything else, including "mw". Selects no role terms at all.
    Other(String),
}

impl RoleTerms {
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            ROLES_BIRDS => RoleTerms::Birds,
            ROLES_LEAD_FOLLOW => RoleTerms::LeadFollow,
            ROLES_LADIES_GENTS => RoleTerms::LadiesGents,
            other => RoleTerms::Other(s!(other)),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            RoleTerms::Birds => ROLES_BIRDS,
            RoleTerms::LeadFollow => ROLES_LEAD_FOLLOW,
            RoleTerms::LadiesGents => ROLES_LADIES_GENTS,
            RoleTerms::Other(s) => s,
        }
    }

    /// Human label for selectors.
    pub fn label(&self) -> &str {
        match self {
            RoleTerms::Birds => "Larks / Robins",
            RoleTerms::LeadFollow => "Leads / Follows",
            RoleTerms::LadiesGents => "Gents / Ladies",
            RoleTerms::Other(_) => "Men / Women (unchanged)",
        }
    }

    /// The selectable choices, in display order.
    pub fn choices() -> [RoleTerms; 4] {
        [
            RoleTerms::Birds,
            RoleTerms::LeadFollow,
            RoleTerms::LadiesGents,
            RoleTerms::Other(s!(ROLES_MEN_WOMEN)),
        ]
    }
}

impl fmt::Display for RoleTerms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options exactly as read from a store. Unset keys are `None`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StoredOptions {
    pub enabled: Option<bool>,
    pub use_rsr: Option<bool>,
    pub role_terms: Option<String>,
}

impl StoredOptions {
    /// Parse the `key=value` text form. `#` comments and unknown keys are ignored.
    pub fn parse(text: &str) -> Self {
        let mut out = StoredOptions::default();
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') { continue; }
            let Some((key, val)) = line.split_once('=') else { continue };
            let (key, val) = (key.trim(), val.trim());
            match key {
                KEY_ENABLED => out.enabled = Some(parse_bool(val)),
                KEY_USE_RSR => out.use_rsr = Some(parse_bool(val)),
                KEY_ROLE_TERMS => out.role_terms = Some(s!(val)),
                _ => {}
            }
        }
        out
    }

    pub fn to_text(&self) -> String {
        let mut s = s!();
        if let Some(v) = self.enabled {
            s.push_str(&format!("{KEY_ENABLED}={}\n", if v { 1 } else { 0 }));
        }
        if let Some(v) = self.use_rsr {
            s.push_str(&format!("{KEY_USE_RSR}={}\n", if v { 1 } else { 0 }));
        }
        if let Some(v) = &self.role_terms {
            s.push_str(&join!(KEY_ROLE_TERMS, "=", v, "\n"));
        }
        s
    }
}

fn parse_bool(val: &str) -> bool {
    val == "1" || val.eq_ignore_ascii_case("true")
}

/// Resolved options, defaults applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    pub enabled: bool,
    pub use_rsr: bool,
    pub role_terms: RoleTerms,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            enabled: DEFAULT_ENABLED,
            use_rsr: DEFAULT_USE_RSR,
            role_terms: RoleTerms::parse(DEFAULT_ROLE_TERMS),
        }
    }
}

impl Options {
    pub fn resolve(stored: &StoredOptions) -> Self {
        let defaults = Options::default();
        Self {
            enabled: stored.enabled.unwrap_or(defaults.enabled),
            use_rsr: stored.use_rsr.unwrap_or(defaults.use_rsr),
            role_terms: stored
                .role_terms
                .as_deref()
                .map(RoleTerms::parse)
                .unwrap_or(defaults.role_terms),
        }
    }

    pub fn to_stored(&self) -> StoredOptions {
        StoredOptions {
            enabled: Some(self.enabled),
            use_rsr: Some(self.use_rsr),
            role_terms: Some(s!(self.role_terms.as_str())),
        }
    }
}
