//! Software rasterization core
//!
//! Everything that turns geometry into pixels lives here. It has no
//! dependencies on the terminal, input, or game rules: a caller hands over a
//! [`PixelTarget`] and a [`Camera`] and gets deterministic pixels back.
//!
//! # Module Structure
//!
//! - [`buffer`]: `PixelBuffer` framebuffer and the `PixelTarget` read/write interface
//! - [`camera`]: world ⇄ screen mapping with pan and clamped zoom
//! - [`clip`]: Cohen–Sutherland line clipping with bitflag outcodes
//! - [`canvas`]: the rasterizer (lines, circles, rects, textures, flood fill, fan)
//! - [`texture`]: procedural brick / checker / stripes / dots patterns
//! - [`transform`]: rotate / scale / translate helpers
//! - [`minimap`]: grid down-sampler and block re-rasterizer
//! - [`text`]: screen-space labels handed to the presenter
//!
//! # Pipeline
//!
//! ```text
//! world coords ──Camera──▶ screen coords ──clip──▶ Bresenham / scanlines ──▶ set_pixel ──▶ PixelBuffer
//! ```
//!
//! # Example
//!
//! ```
//! use pixel_rooms_raster::{Camera, Canvas, PixelBuffer, PixelTarget, Space};
//! use pixel_rooms_raster::types::Rgba;
//!
//! let mut fb = PixelBuffer::new(16, 8);
//! let camera = Camera::new(16, 8);
//! let mut canvas = Canvas::new(&mut fb, &camera);
//! canvas.draw_line(0.0, 0.0, 5.0, 0.0, Rgba::WHITE, Space::Screen);
//!
//! assert_eq!(fb.count_rgb(Rgba::WHITE), 6);
//! assert_eq!(fb.color_at(5, 0), Some(Rgba::WHITE));
//! ```

pub use pixel_rooms_types as types;

pub mod buffer;
pub mod camera;
pub mod canvas;
pub mod clip;
pub mod minimap;
pub mod text;
pub mod texture;
pub mod transform;

pub use buffer::{PixelBuffer, PixelTarget};
pub use camera::{Camera, WorldBounds, ZoomConfig};
pub use canvas::{Canvas, Space};
pub use clip::{clip_line, compute_outcode, ClipRect, Outcode, Segment};
pub use minimap::{build_grid_sized, render_grid, Grid, MiniMap, MiniMapConfig};
pub use text::{Align, Label, TextLayer};
pub use texture::Texture;
pub use transform::{rotate_point, scale_point, translate_point};
