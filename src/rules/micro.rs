// src/rules/micro.rs
//! Micro-notation: the `MR`, `W2L`, `M roll L` shorthand used in heys,
//! waves and formation notes. Not wrapped in links, so every text node in
//! the region is scanned.
use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::Rule;
use crate::core::text_nodes::rewrite_text_nodes;
use crate::core::Page;
use crate::specs::locators;
use crate::terms::{TermKey, TermMap};

// Two-character MR, M1, ... and three-character M1R, W2L, ...
static M_SHORT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"M([LR0-9][RL]?)").expect("valid regex"));
static W_SHORT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"W([LR0-9][RL]?)").expect("valid regex"));
// "roll away (W roll L, M side-step R)"
static M_MOVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"M (roll|side-step) ([LR])").expect("valid regex"));
static W_MOVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"W (roll|side-step) ([LR])").expect("valid regex"));

fn short(re: &Regex, text: &str, initial: &str) -> String {
    re.replace_all(text, |c: &Captures| join!(initial, &c[1])).into_owned()
}

fn moves(re: &Regex, text: &str, initial: &str) -> String {
    re.replace_all(text, |c: &Captures| format!("{initial} {} {}", &c[1], &c[2]))
        .into_owned()
}

/// Rewrite `M`/`W` micro-notation to the given initials.
///
/// The passes run one after another (M forms, W forms, then the roll /
/// side-step forms) rather than as one combined pattern.
pub fn rewrite_micro(text: &str, micro_l: &str, micro_r: &str, with_moves: bool) -> String {
    let out = short(&M_SHORT, text, micro_l);
    let out = short(&W_SHORT, &out, micro_r);
    if !with_moves {
        return out;
    }
    let out = moves(&M_MOVE, &out, micro_l);
    moves(&W_MOVE, &out, micro_r)
}

fn initials(terms: &TermMap) -> Option<(&str, &str)> {
    Some((terms.get(TermKey::MICRO_L)?, terms.get(TermKey::MICRO_R)?))
}

pub struct MicroChoreo;
pub static MICRO_CHOREO: MicroChoreo = MicroChoreo;

impl Rule for MicroChoreo {
    fn name(&self) -> &'static str { "micro-notation (choreo)" }
    fn guard(&self) -> TermKey { TermKey::MICRO_L }

    fn apply(&self, page: &Page, terms: &TermMap) -> usize {
        let Some((l, r)) = initials(terms) else { return 0 };
        let Some(phrases) = locators::phrases(page) else { return 0 };
        rewrite_text_nodes(&phrases, |t| rewrite_micro(t, l, r, true))
    }
}

/// Formation notes like "Wave of four (MR, WL)." There's no selector for
/// these; the cell is found by its label.
pub struct MicroFormation;
pub static MICRO_FORMATION: MicroFormation = MicroFormation;

impl Rule for MicroFormation {
    fn name(&self) -> &'static str { "micro-notation (formation)" }
    fn guard(&self) -> TermKey { TermKey::MICRO_L }

    fn apply(&self, page: &Page, terms: &TermMap) -> usize {
        let Some((l, r)) = initials(terms) else { return 0 };
        let Some(cell) = locators::formation_cell(page) else { return 0 };
        rewrite_text_nodes(&cell, |t| rewrite_micro(t, l, r, false))
    }
}

#[cfg(test)]
mod tests {
    use super::rewrite_micro;

    #[test]
    fn birds_initials() {
        assert_eq!(rewrite_micro("MR WL M1R W2L", "L", "R", true), "LR RL L1R R2L");
    }

    #[test]
    fn lead_follow_initials() {
        assert_eq!(rewrite_micro("MR WL M1R W2L", "L", "F", true), "LR FL L1R F2L");
    }

    #[test]
    fn moves_only_when_asked() {
        let text = "roll away (W roll L, M side-step R)";
        assert_eq!(rewrite_micro(text, "L", "R", true), "roll away (R roll L, L side-step R)");
        assert_eq!(rewrite_micro(text, "L", "R", false), text);
    }

    #[test]
    fn plain_words_untouched() {
        let text = "Meet, Wave, Mad Robin";
        assert_eq!(rewrite_micro(text, "L", "R", true), text);
    }
}
