// src/core/mod.rs

pub mod casing;
pub mod sanitize;
pub mod dom;
pub mod text_nodes;

pub use dom::Page;
pub use text_nodes::TextNodes;
