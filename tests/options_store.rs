// tests/options_store.rs
//
// Options text format, defaults, and the file-backed store.
use std::cell::Cell;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;

use cb_terms::config::options::{Options, RoleTerms, StoredOptions};
use cb_terms::store::{ChangeFlag, FileStore, OptionsStore};

fn tmp_file(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("cb_terms_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p.push("options.txt");
    p
}

#[test]
fn defaults_fill_unset_keys() {
    let opts = Options::resolve(&StoredOptions::default());
    assert!(opts.enabled);
    assert!(opts.use_rsr);
    assert_eq!(opts.role_terms, RoleTerms::Birds);

    let opts = Options::resolve(&StoredOptions { use_rsr: Some(false), ..Default::default() });
    assert!(opts.enabled);
    assert!(!opts.use_rsr);
}

#[test]
fn parses_key_value_text() {
    let text = "# saved by the form\nenabled=0\nuseRSR = true\nroleTerms=lf\nbogus=1\n";
    let stored = StoredOptions::parse(text);
    assert_eq!(stored.enabled, Some(false));
    assert_eq!(stored.use_rsr, Some(true));
    assert_eq!(stored.role_terms.as_deref(), Some("lf"));

    let opts = Options::resolve(&stored);
    assert_eq!(opts.role_terms, RoleTerms::LeadFollow);
    assert_eq!(StoredOptions::parse(&opts.to_stored().to_text()), stored);
}

#[test]
fn unknown_role_selector_is_kept() {
    let opts = Options::resolve(&StoredOptions::parse("roleTerms=mw"));
    assert_eq!(opts.role_terms, RoleTerms::Other("mw".into()));
    assert_eq!(opts.role_terms.as_str(), "mw");
}

#[test]
fn missing_file_reads_as_unset() {
    let store = FileStore::new(tmp_file("missing"));
    assert_eq!(store.get().unwrap(), StoredOptions::default());
    assert_eq!(store.options().unwrap(), Options::default());
}

#[test]
fn unreadable_file_is_an_error() {
    // A directory where the file should be
    let path = tmp_file("dir");
    fs::create_dir_all(&path).unwrap();
    assert!(FileStore::new(&path).get().is_err());
}

#[test]
fn set_writes_and_notifies() {
    let store = FileStore::new(tmp_file("set"));
    let hits = Rc::new(Cell::new(0));
    let h = hits.clone();
    store.on_change(Box::new(move || h.set(h.get() + 1)));
    let flag = ChangeFlag::default();
    flag.watch(&store);

    let opts = Options { enabled: false, use_rsr: false, role_terms: RoleTerms::LadiesGents };
    store.set(&opts).unwrap();

    assert_eq!(hits.get(), 1);
    assert!(flag.take());
    assert!(!flag.take());
    assert_eq!(store.options().unwrap(), opts);
}
