// src/specs/locators.rs
use markup5ever_rcdom::Handle;

use crate::config::consts::{
    CALLING_NOTES_HEADING, FORMATION_LABEL, PHRASES_ID, VARIANT_VIDEOS_LABEL,
};
use crate::core::dom::{self, Page};

/// Glossary-link fragments that carry gendered terminology.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LinkFragment {
    Men,
    Women,
    LadiesChain,
    GentsChain,
    RightHandLadiesChain,
    GrandLadiesChain,
    GrandGentsChain,
    OpenLadiesChain,
    OpenGentsChain,
    ThreeLadiesChain,
    Gypsy,
    DoubleGyp,
}

impl LinkFragment {
    pub fn suffix(self) -> &'static str {
        use LinkFragment::*;
        match self {
            Men => "#men",
            Women => "#women",
            LadiesChain => "#ladies-chain",
            GentsChain => "#gents-chain",
            RightHandLadiesChain => "#right-hand-ladies-chain",
            GrandLadiesChain => "#grand-ladies-chain",
            GrandGentsChain => "#grand-gents-chain",
            OpenLadiesChain => "#open-ladies-chain",
            OpenGentsChain => "#open-gents-chain",
            ThreeLadiesChain => "#three-ladies-chain",
            Gypsy => "#gypsy",
            DoubleGyp => "#double-gyp",
        }
    }
}

/// `a[href$="<suffix>"]`, document order.
pub fn links_ending_with(page: &Page, frag: LinkFragment) -> Vec<Handle> {
    let suffix = frag.suffix();
    page.find_all(|n| {
        dom::has_tag(n, "a") && dom::attr(n, "href").is_some_and(|h| h.ends_with(suffix))
    })
}

/// `#phrases`
pub fn phrases(page: &Page) -> Option<Handle> {
    page.find_by_id(PHRASES_ID)
}

/// Value cell following the first `<td>` whose text contains `label`.
pub fn value_cell_for(page: &Page, label: &str) -> Option<Handle> {
    let label_cell = page.find_first(|n| {
        dom::has_tag(n, "td") && dom::text_content(n).contains(label)
    })?;
    dom::next_element_sibling(&label_cell)
}

pub fn formation_cell(page: &Page) -> Option<Handle> {
    value_cell_for(page, FORMATION_LABEL)
}

pub fn variant_videos_cell(page: &Page) -> Option<Handle> {
    value_cell_for(page, VARIANT_VIDEOS_LABEL)
}

fn is_heading(n: &Handle) -> bool {
    matches!(dom::tag_name(n), Some("h1" | "h2" | "h3" | "h4" | "h5" | "h6"))
}

/// Parent of the first heading mentioning "Calling Notes".
pub fn calling_notes(page: &Page) -> Option<Handle> {
    let heading = page.find_first(|n| {
        is_heading(n) && dom::text_content(n).contains(CALLING_NOTES_HEADING)
    })?;
    dom::parent_element(&heading)
}

/// The revertible page regions, in snapshot order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Region {
    Phrases,
    FormationDetail,
    VariantVideos,
    CallingNotes,
}

impl Region {
    pub const ALL: [Region; 4] = [
        Region::Phrases,
        Region::FormationDetail,
        Region::VariantVideos,
        Region::CallingNotes,
    ];

    pub fn locate(self, page: &Page) -> Option<Handle> {
        match self {
            Region::Phrases => phrases(page),
            Region::FormationDetail => formation_cell(page),
            Region::VariantVideos => variant_videos_cell(page),
            Region::CallingNotes => calling_notes(page),
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Region::Phrases => "Phrases",
            Region::FormationDetail => "Formation detail",
            Region::VariantVideos => "Variant videos",
            Region::CallingNotes => "Calling notes",
        }
    }
}
