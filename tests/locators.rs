// tests/locators.rs
//
// Region lookup and the text-node walker.
mod common;

use cb_terms::core::{dom, text_nodes, Page, TextNodes};
use cb_terms::specs::locators::{self, LinkFragment};
use cb_terms::specs::Region;
use common::*;

#[test]
fn finds_every_region_on_a_dance_page() {
    let page = Page::parse(DANCE_PAGE);
    for region in Region::ALL {
        assert!(region.locate(&page).is_some(), "{}", region.title());
    }

    let formation = locators::formation_cell(&page).unwrap();
    assert_eq!(dom::text_content(&formation), "Wave of four (MR, WL).");

    let videos = locators::variant_videos_cell(&page).unwrap();
    assert!(dom::text_content(&videos).starts_with("Video with the men"));

    let notes = locators::calling_notes(&page).unwrap();
    assert_eq!(dom::attr(&notes, "class").as_deref(), Some("notes"));
}

#[test]
fn missing_regions_are_none() {
    let page = Page::parse("<html><body><h2>Notes</h2><table><tr><td>Other</td></tr></table></body></html>");
    for region in Region::ALL {
        assert!(region.locate(&page).is_none(), "{}", region.title());
    }
}

#[test]
fn label_cell_without_value_is_none() {
    let page = Page::parse("<table><tr><td>FormationDetail</td></tr></table>");
    assert!(locators::formation_cell(&page).is_none());
}

#[test]
fn link_suffix_must_follow_the_hash() {
    let page = Page::parse(CHAIN_PAGE);
    assert_eq!(locators::links_ending_with(&page, LinkFragment::LadiesChain).len(), 1);
    assert_eq!(locators::links_ending_with(&page, LinkFragment::GentsChain).len(), 1);
    assert!(locators::links_ending_with(&page, LinkFragment::Men).is_empty());
}

#[test]
fn text_nodes_skip_comments() {
    let page = Page::parse("<div id=r>one<!-- men --><b>two</b> three</div>");
    let root = page.find_by_id("r").unwrap();
    let texts: Vec<String> = TextNodes::new(&root).map(|n| text_nodes::text_of(&n)).collect();
    assert_eq!(texts, ["one", "two", " three"]);
}

#[test]
fn text_nodes_are_one_shot() {
    let page = Page::parse("<p id=r>a<i>b</i></p>");
    let root = page.find_by_id("r").unwrap();
    let mut walk = TextNodes::new(&root);
    assert_eq!(walk.by_ref().count(), 2);
    assert!(walk.next().is_none());
}

#[test]
fn rewrite_counts_changed_nodes_only() {
    let page = Page::parse("<p id=r>men<i>and</i> women</p>");
    let root = page.find_by_id("r").unwrap();
    let n = text_nodes::rewrite_text_nodes(&root, |t| t.replace("men", "larks"));
    // " women" contains "men" as well
    assert_eq!(n, 2);
    assert_eq!(dom::text_content(&root), "larksand wolarks");
}
