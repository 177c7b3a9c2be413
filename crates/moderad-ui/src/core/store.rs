//! App-wide yewdux store slices.
//!
//! # Design
//! - Keep shared UI state in one store to avoid ad-hoc contexts.
//! - All mutations go through the pure transition functions on the slice
//!   structs so the workflows stay testable without a browser.

use crate::features::ads::state::AdsState;
use yewdux::store::Store;

/// Global application store for shared state.
#[derive(Clone, Debug, PartialEq, Store, Default)]
pub struct AppStore {
    /// Listing queue: page, filters, fetched page, facets, selection.
    pub ads: AdsState,
}
