//! Ten-pin scorer (workspace facade crate).
//!
//! This package keeps the public `ten_pin::{core,types}` API stable while
//! the implementation lives in dedicated crates under `crates/`.

pub use ten_pin_core as core;
pub use ten_pin_types as types;
