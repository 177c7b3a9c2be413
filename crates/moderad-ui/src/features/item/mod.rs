//! Listing detail: gallery, seller info, history, and single-item decisions.

pub mod state;

#[cfg(target_arch = "wasm32")]
pub(crate) mod api;
#[cfg(target_arch = "wasm32")]
pub(crate) mod view;
