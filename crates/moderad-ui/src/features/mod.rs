//! Feature modules: one directory per page-level concern.

pub mod ads;
pub mod item;
pub mod moderation;
pub mod stats;
