//! Pixel Rooms (workspace facade crate).
//!
//! A top-down office game drawn one pixel at a time. The implementation lives
//! in dedicated crates under `crates/`; this package re-exports them as
//! `pixel_rooms::{types, raster, core, input, term}` and adds the binary's
//! configuration and logging setup.

pub mod config;
pub mod logging;

pub use pixel_rooms_core as core;
pub use pixel_rooms_input as input;
pub use pixel_rooms_raster as raster;
pub use pixel_rooms_term as term;
pub use pixel_rooms_types as types;
