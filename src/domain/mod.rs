//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains what it needs of:
//! - `mod.rs` — Rich domain types (validated, display-ready)
//! - `wire.rs` — Raw serde structs matching upstream responses
//! - `convert.rs` — `TryFrom` conversions with validation
//! - `store.rs` / `state.rs` — App-owned state containers with update methods
//! - `client.rs` — Sub-client with HTTP methods

pub mod market;
pub mod metrics;
pub mod sentiment;
pub mod tracker;
