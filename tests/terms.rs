// tests/terms.rs
//
// Resolving options into a terminology map.
mod common;

use cb_terms::terms::{TermKey, TermMap, HALF_GYP_TERMS, ROLE_TERMS_BIRDS};
use common::options;

#[test]
fn rsr_addon_follows_use_rsr() {
    let on = TermMap::build(&options(true, true, "mw"));
    assert_eq!(on.get(TermKey::DOUBLE_TRADE), Some("quick trades"));
    assert_eq!(on.get(TermKey::RSR), Some("right shoulder round"));
    assert_eq!(on.get(TermKey::LSR), Some("left shoulder round"));

    let off = TermMap::build(&options(true, false, "mw"));
    assert!(!off.has(TermKey::DOUBLE_TRADE));
    assert!(off.is_empty());
}

#[test]
fn variants_select_role_terms() {
    let birds = TermMap::build(&options(true, false, "birds"));
    assert_eq!(birds.get(TermKey::ROLE_R), Some("Robins"));
    assert_eq!(birds.get(TermKey::ROLE_L), Some("Larks"));
    assert_eq!(birds.get(TermKey::ROLE_L_S), Some("Lark"));
    assert_eq!(birds.get(TermKey::MICRO_R), Some("R"));

    let lf = TermMap::build(&options(true, false, "lf"));
    assert_eq!(lf.get(TermKey::ROLE_R), Some("Follows"));
    assert_eq!(lf.get(TermKey::ROLE_L), Some("Leads"));
    assert_eq!(lf.get(TermKey::MICRO_R), Some("F"));

    let lg = TermMap::build(&options(true, false, "lg"));
    assert_eq!(lg.get(TermKey::ROLE_R), Some("Ladies"));
    assert_eq!(lg.get(TermKey::MICRO_L), Some("G"));
}

#[test]
fn unknown_selector_yields_no_role_terms() {
    for sel in ["mw", "", "robots"] {
        let t = TermMap::build(&options(true, true, sel));
        assert!(!t.has(TermKey::ROLE_R), "selector {sel:?}");
        assert!(!t.has(TermKey::CHAIN_R), "selector {sel:?}");
        assert!(!t.has(TermKey::MICRO_L), "selector {sel:?}");
        assert!(t.has(TermKey::DOUBLE_TRADE));
    }
}

#[test]
fn union_is_both_tables() {
    let t = TermMap::build(&options(true, true, "birds"));
    assert_eq!(t.len(), HALF_GYP_TERMS.len() + ROLE_TERMS_BIRDS.len());
}

#[test]
fn later_table_wins_on_collision() {
    let first: &[(TermKey, &str)] = &[(TermKey::ROLE_R, "A")];
    let second: &[(TermKey, &str)] = &[(TermKey::ROLE_R, "B")];
    let t = TermMap::from_tables(&[first, second]);
    assert_eq!(t.get(TermKey::ROLE_R), Some("B"));
}
