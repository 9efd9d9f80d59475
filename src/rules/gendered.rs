// src/rules/gendered.rs
//! Free-text gendered words ("the men", "Ladies", "a gent") and, in calling
//! notes, "same/opposite gender(ed)" phrasing.
use std::sync::LazyLock;

use markup5ever_rcdom::Handle;
use regex::{Captures, Regex};

use super::Rule;
use crate::core::casing::match_case;
use crate::core::text_nodes::rewrite_text_nodes;
use crate::core::Page;
use crate::specs::locators;
use crate::terms::{TermKey, TermMap};

// Word boundaries keep "promenade", "agents" and "ladybird" intact
static GENDERED_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(women|woman|ladies|lady|men|man|gents|gent)\b").expect("valid regex")
});
static GENDER_PHRASE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(same|opposite)\s+gender(?:ed)?\b").expect("valid regex")
});

fn term_for_word<'t>(word: &str, terms: &'t TermMap) -> Option<&'t str> {
    let plural_r = terms.get(TermKey::ROLE_R);
    let plural_l = terms.get(TermKey::ROLE_L);
    match word.to_ascii_lowercase().as_str() {
        "women" | "ladies" => plural_r,
        "woman" | "lady" => terms.get(TermKey::ROLE_R_S).or(plural_r),
        "men" | "gents" => plural_l,
        "man" | "gent" => terms.get(TermKey::ROLE_L_S).or(plural_l),
        _ => None,
    }
}

/// Replace gendered words, keeping each word's capitalization.
pub fn rewrite_gendered_words(text: &str, terms: &TermMap) -> String {
    GENDERED_WORD
        .replace_all(text, |c: &Captures| {
            let word = &c[0];
            match term_for_word(word, terms) {
                Some(term) => match_case(word, term),
                None => s!(word),
            }
        })
        .into_owned()
}

/// "same gender(ed)" → "same role", "opposite gender(ed)" → "opposite role".
pub fn rewrite_gender_phrases(text: &str) -> String {
    GENDER_PHRASE
        .replace_all(text, |c: &Captures| {
            let base = if c[1].eq_ignore_ascii_case("same") { "same role" } else { "opposite role" };
            match_case(&c[0], base)
        })
        .into_owned()
}

fn rewrite_region(region: Option<Handle>, terms: &TermMap, phrases: bool) -> usize {
    let Some(root) = region else { return 0 };
    rewrite_text_nodes(&root, |t| {
        if phrases {
            rewrite_gendered_words(&rewrite_gender_phrases(t), terms)
        } else {
            rewrite_gendered_words(t, terms)
        }
    })
}

pub struct GenderedPhrases;
pub static GENDERED_PHRASES: GenderedPhrases = GenderedPhrases;

impl Rule for GenderedPhrases {
    fn name(&self) -> &'static str { "gendered words (phrases)" }
    fn guard(&self) -> TermKey { TermKey::ROLE_L }

    fn apply(&self, page: &Page, terms: &TermMap) -> usize {
        rewrite_region(locators::phrases(page), terms, false)
    }
}

pub struct GenderedVariantVideos;
pub static GENDERED_VARIANT_VIDEOS: GenderedVariantVideos = GenderedVariantVideos;

impl Rule for GenderedVariantVideos {
    fn name(&self) -> &'static str { "gendered words (variant videos)" }
    fn guard(&self) -> TermKey { TermKey::ROLE_L }

    fn apply(&self, page: &Page, terms: &TermMap) -> usize {
        rewrite_region(locators::variant_videos_cell(page), terms, false)
    }
}

pub struct CallingNotes;
pub static CALLING_NOTES: CallingNotes = CallingNotes;

impl Rule for CallingNotes {
    fn name(&self) -> &'static str { "calling notes" }
    fn guard(&self) -> TermKey { TermKey::ROLE_L }

    fn apply(&self, page: &Page, terms: &TermMap) -> usize {
        rewrite_region(locators::calling_notes(page), terms, true)
    }
}
