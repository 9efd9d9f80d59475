// src/rules/links.rs
//! Glossary links: the whole link text becomes the mapped term.
use markup5ever_rcdom::Handle;

use super::Rule;
use crate::core::dom;
use crate::core::text_nodes::{set_text_of, text_of};
use crate::core::Page;
use crate::specs::locators::{links_ending_with, LinkFragment};
use crate::terms::{TermKey, TermMap};

/// Set the text of every link ending in `frag` to `key`'s term.
fn replace_links(page: &Page, terms: &TermMap, frag: LinkFragment, key: TermKey) -> usize {
    let Some(term) = terms.get(key) else { return 0 };
    let links = links_ending_with(page, frag);
    for link in &links {
        dom::set_text(link, term);
    }
    links.len()
}

pub struct Roles;
pub static ROLES: Roles = Roles;

impl Rule for Roles {
    fn name(&self) -> &'static str { "roles" }
    fn guard(&self) -> TermKey { TermKey::ROLE_R }

    fn apply(&self, page: &Page, terms: &TermMap) -> usize {
        replace_links(page, terms, LinkFragment::Men, TermKey::ROLE_L)
            + replace_links(page, terms, LinkFragment::Women, TermKey::ROLE_R)
    }
}

// There are a lot of kinds of chains, and they all name a role.
const CHAIN_LINKS: &[(LinkFragment, TermKey)] = &[
    (LinkFragment::LadiesChain, TermKey::CHAIN_R),
    (LinkFragment::GentsChain, TermKey::CHAIN_L),
    (LinkFragment::RightHandLadiesChain, TermKey::CHAIN_R_BY_L),
    (LinkFragment::GrandLadiesChain, TermKey::GRAND_CHAIN_R),
    (LinkFragment::GrandGentsChain, TermKey::GRAND_CHAIN_L),
    (LinkFragment::OpenLadiesChain, TermKey::OPEN_CHAIN_R),
    (LinkFragment::OpenGentsChain, TermKey::OPEN_CHAIN_L),
    (LinkFragment::ThreeLadiesChain, TermKey::THREE_CHAIN_R),
];

pub struct Chains;
pub static CHAINS: Chains = Chains;

impl Rule for Chains {
    fn name(&self) -> &'static str { "chains" }
    fn guard(&self) -> TermKey { TermKey::CHAIN_R }

    fn apply(&self, page: &Page, terms: &TermMap) -> usize {
        CHAIN_LINKS
            .iter()
            .map(|(frag, key)| replace_links(page, terms, *frag, *key))
            .sum()
    }
}

pub struct DoubleGyp;
pub static DOUBLE_GYP: DoubleGyp = DoubleGyp;

impl Rule for DoubleGyp {
    fn name(&self) -> &'static str { "double-gyp" }
    fn guard(&self) -> TermKey { TermKey::DOUBLE_TRADE }

    fn apply(&self, page: &Page, terms: &TermMap) -> usize {
        replace_links(page, terms, LinkFragment::DoubleGyp, TermKey::DOUBLE_TRADE)
    }
}

/// Gypsies are written `<a>gypsy</a> right 1½`. The direction word moves
/// into the link: `<a>right shoulder round</a> 1½`.
pub struct ShoulderRounds;
pub static SHOULDER_ROUNDS: ShoulderRounds = ShoulderRounds;

impl Rule for ShoulderRounds {
    fn name(&self) -> &'static str { "shoulder-rounds" }
    fn guard(&self) -> TermKey { TermKey::RSR }

    fn apply(&self, page: &Page, terms: &TermMap) -> usize {
        links_ending_with(page, LinkFragment::Gypsy)
            .iter()
            .filter(|link| shoulder_round(link, terms))
            .count()
    }
}

fn shoulder_round(link: &Handle, terms: &TermMap) -> bool {
    // Expect a text node right after the link, starting with the direction
    let Some(next) = dom::next_sibling(link) else {
        logd!("Shoulder round: gypsy link with nothing after it, skipping");
        return false;
    };
    let text = text_of(&next);
    let Some(direction) = text.split_whitespace().next() else {
        logd!("Shoulder round: gypsy link without a direction, skipping");
        return false;
    };
    let key = match direction {
        "right" => TermKey::RSR,
        "left" => TermKey::LSR,
        other => {
            logd!("Shoulder round: unexpected direction {:?}, skipping", other);
            return false;
        }
    };
    let Some(term) = terms.get(key) else { return false };

    let rest = text.replacen(direction, "", 1);
    if !set_text_of(&next, &rest) {
        return false;
    }
    dom::set_text(link, term);
    true
}
