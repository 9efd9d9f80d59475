// src/specs/mod.rs
//! # Page "specs"
//!
//! Where things live on a Caller's Box dance page. Every function here is a
//! fresh query over the live DOM; nothing is cached, and "not on this page"
//! is `None`, never an error. Pages vary in which sections they have.
//!
//! ## Page structure relied on
//! - a `#phrases` container holding the choreography
//! - a label/value table where a label cell reads `FormationDetail` or
//!   `VariantVideos`; the value is the next cell in the row
//! - a heading containing `Calling Notes`, whose parent holds the notes
//! - glossary links whose `href` ends in a fixed fragment (`#men`,
//!   `#ladies-chain`, `#double-gyp`, …)
//!
//! Rewriting lives in `crate::rules`; snapshots and revert in `crate::session`.
pub mod locators;

pub use locators::{Region, LinkFragment};
