// benches/substitute.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use cb_terms::config::options::{Options, RoleTerms};
use cb_terms::core::Page;
use cb_terms::rules::{self, micro};
use cb_terms::terms::TermMap;

/// A dance page with `rows` phrase rows, each carrying every kind of term.
fn synthetic_page(rows: usize) -> String {
    let mut html = String::from(
        "<html><body><table>\
         <tr><td>FormationDetail</td><td>Wave of four (MR, WL).</td></tr>\
         <tr><td>VariantVideos</td><td>Video with the men and women swapped</td></tr>\
         </table><div id=\"phrases\"><table>",
    );
    for i in 0..rows {
        html.push_str(&format!(
            "<tr><td>A{i}</td><td><a href=\"/g#men\">men</a> and \
             <a href=\"/g#women\">women</a> <a href=\"/g#ladies-chain\">ladies chain</a>, \
             <a href=\"/g#gypsy\">gypsy</a> right 1½, hey (MR WL M1R W2L), \
             the gent waits while the ladies roll (W roll L, M side-step R)</td></tr>"
        ));
    }
    html.push_str(
        "</table></div><div><h3>Calling Notes</h3>\
         <p>Same gender pairs; each woman faces a man.</p></div></body></html>",
    );
    html
}

fn bench_substitute(c: &mut Criterion) {
    let html = synthetic_page(64);
    let terms = TermMap::build(&Options {
        enabled: true,
        use_rsr: true,
        role_terms: RoleTerms::Birds,
    });

    c.bench_function("parse_page", |b| {
        b.iter(|| black_box(Page::parse(black_box(&html))))
    });

    c.bench_function("apply_all_64_rows", |b| {
        b.iter(|| {
            let page = Page::parse(black_box(&html));
            let report = rules::apply_all(&page, &terms);
            black_box(report.total())
        })
    });

    c.bench_function("rewrite_micro", |b| {
        let text = "hey (MR WL M1R W2L), roll away (W roll L, M side-step R)".repeat(16);
        b.iter(|| black_box(micro::rewrite_micro(black_box(&text), "L", "R", true)))
    });
}

criterion_group!(benches, bench_substitute);
criterion_main!(benches);
