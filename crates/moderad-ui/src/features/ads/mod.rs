//! Listing queue: filters, pagination, facets, and the list page.

pub mod query;
pub mod state;

#[cfg(target_arch = "wasm32")]
pub(crate) mod api;
#[cfg(target_arch = "wasm32")]
pub(crate) mod view;
