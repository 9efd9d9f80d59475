// tests/common/mod.rs
//
// Shared fixture: a trimmed-down Caller's Box dance page.
#![allow(dead_code)]

use cb_terms::config::options::{Options, RoleTerms};
use cb_terms::core::{dom, Page};
use cb_terms::specs::locators::{links_ending_with, LinkFragment};

pub const DANCE_PAGE: &str = r#"<!DOCTYPE html>
<html><head><title>Test Dance</title></head><body>
<table class="dance">
<tr><td>FormationDetail</td><td>Wave of four (MR, WL).</td></tr>
<tr><td>VariantVideos</td><td>Video with the men and women swapped</td></tr>
</table>
<div id="phrases">
<table>
<tr><td>A1</td><td><a href="/glossary#men">men</a> start, <a href="/glossary#ladies-chain">ladies chain</a> over and back</td></tr>
<tr><td>A2</td><td><a href="/glossary#gypsy">gypsy</a> right 1½ then hey (MR WL M1R W2L)</td></tr>
<tr><td>B1</td><td>Ladies promenade while the gent waits, roll away (W roll L, M side-step R)</td></tr>
<tr><td>B2</td><td>Corner trade 4 (<a href="/glossary#double-gyp">double gyp</a>) with <a href="/glossary#women">women</a></td></tr>
</table>
</div>
<div class="notes"><h2>Calling Notes</h2><p>Same gender pairs face across. Each woman takes the opposite gendered neighbor.</p></div>
</body></html>"#;

pub const CHAIN_PAGE: &str = r#"<!DOCTYPE html><html><body>
<a href="/glossary#ladies-chain">ladies chain</a>
<a href="/glossary#gents-chain">gents chain</a>
<a href="/glossary#right-hand-ladies-chain">right-hand ladies chain</a>
<a href="/glossary#grand-ladies-chain">grand ladies chain</a>
<a href="/glossary#grand-gents-chain">grand gents chain</a>
<a href="/glossary#open-ladies-chain">open ladies chain</a>
<a href="/glossary#open-gents-chain">open gents chain</a>
<a href="/glossary#three-ladies-chain">three ladies chain</a>
</body></html>"#;

pub fn options(enabled: bool, use_rsr: bool, roles: &str) -> Options {
    Options { enabled, use_rsr, role_terms: RoleTerms::parse(roles) }
}

pub fn birds() -> Options {
    options(true, true, "birds")
}

/// Text of the first link ending with `frag`.
pub fn link_text(page: &Page, frag: LinkFragment) -> String {
    let links = links_ending_with(page, frag);
    dom::text_content(links.first().expect("link on page"))
}

/// Text of the first element with this tag.
pub fn first_text(page: &Page, tag: &str) -> String {
    let el = page.find_first(|n| dom::has_tag(n, tag)).expect("element on page");
    dom::text_content(&el)
}
