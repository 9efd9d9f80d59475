// src/gui/components/mod.rs
pub mod options_form;
pub mod page_bar;
pub mod preview;
pub mod terms_table;
