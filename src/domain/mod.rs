//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Domain types handed to callers
//! - `wire.rs` — Raw serde structs matching the Content Delivery API
//! - `convert.rs` — `From`/`TryFrom` conversions
//! - `client.rs` — Sub-client with HTTP-backed methods

pub mod entry;
pub mod post;
