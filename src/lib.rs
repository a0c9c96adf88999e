//! Gravity Four (workspace facade crate).
//!
//! A Connect-Four variant where the whole board can be rotated 90 degrees,
//! after which gravity reapplies and the pieces resettle. This package
//! keeps the `gravity_four::{core, adapter, types}` public API in one
//! place while the implementation lives in dedicated crates under
//! `crates/`.

pub use gravity_four_adapter as adapter;
pub use gravity_four_core as core;
pub use gravity_four_types as types;
