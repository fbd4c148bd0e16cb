//! Shared contracts for the portfolio site: domain types, static content
//! tables, translations, and the derivation logic the UI renders from.
//!
//! This crate has no DOM or WASM dependency, so everything in it runs
//! under plain `cargo test`.

pub mod data;
pub mod filter;
pub mod i18n;
pub mod types;
