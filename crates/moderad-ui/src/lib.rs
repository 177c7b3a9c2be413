#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Moderad dashboard UI.
//!
//! Yew front-end for the classified-ads moderation backend: listing queue with
//! filters and bulk decisions, per-listing detail with the moderation history,
//! and a read-only statistics view. Pure state transitions, the query codec,
//! validation and formatting all compile (and are tested) on native targets;
//! rendering and HTTP live behind `wasm32` gates.

pub mod core;
pub mod features;
pub mod i18n;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;
#[cfg(target_arch = "wasm32")]
mod services;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;
