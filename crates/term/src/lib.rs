//! Terminal presentation for the pixel rasterizer.
//!
//! Scenes are drawn into a [`raster::PixelBuffer`] with the rasterizer, then
//! composed into a cell framebuffer (two pixels per cell) that the
//! [`TerminalRenderer`] flushes with run-length diffing.
//!
//! - [`game_view`]: the playing scene
//! - [`menu_view`]: splash, menus, pause overlay, congratulations
//! - [`scene`]: per-phase dispatch and layer reuse
//! - [`present`]: half-block composition
//! - [`renderer`]: terminal I/O

pub mod fb;
pub mod game_view;
pub mod menu_view;
pub mod present;
pub mod renderer;
pub mod scene;

pub use pixel_rooms_core as core;
pub use pixel_rooms_raster as raster;
pub use pixel_rooms_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::GameView;
pub use menu_view::{MenuLayout, MenuView};
pub use present::{cell_to_pixel, compose_half_blocks, Viewport, HALF_BLOCK};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use scene::Scene;
