// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod rules;
pub mod session;
pub mod specs;
pub mod store;
pub mod terms;

pub mod gui;
