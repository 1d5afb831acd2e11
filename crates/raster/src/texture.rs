//! Procedural textures evaluated per pixel.
//!
//! A texture is a pure function of the local offset `(lx, ly)` inside the
//! filled rectangle. Phase always starts at the rectangle's own origin.

use crate::types::Rgba;

pub const BRICK_W: i32 = 16;
pub const BRICK_H: i32 = 8;
pub const MORTAR: i32 = 1;
pub const CHECKER_TILE: i32 = 8;
pub const STRIPE_BAND: i32 = 6;
pub const DOT_SPACING: i32 = 8;
pub const DOT_SIZE: i32 = 2;

const MORTAR_COLOR: Rgba = Rgba::rgb(100, 100, 100);
const BRICK_COLOR: Rgba = Rgba::rgb(160, 80, 60);
const CHECKER_LIGHT: Rgba = Rgba::rgb(200, 200, 200);
const CHECKER_DARK: Rgba = Rgba::rgb(100, 100, 100);
const STRIPE_LIGHT: Rgba = Rgba::rgb(180, 180, 100);
const STRIPE_DARK: Rgba = Rgba::rgb(140, 140, 80);
const DOT_COLOR: Rgba = Rgba::rgb(255, 255, 200);
const DOT_GROUND: Rgba = Rgba::rgb(100, 80, 60);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Texture {
    /// Running-bond bricks; odd courses shift by half a brick.
    Brick,
    /// Two-tone checkerboard.
    Checker,
    /// Horizontal bands.
    Stripes,
    /// Small bright squares on a dark ground.
    Dots,
}

impl Texture {
    pub fn color_at(self, lx: i32, ly: i32) -> Rgba {
        match self {
            Texture::Brick => brick(lx, ly),
            Texture::Checker => checker(lx, ly),
            Texture::Stripes => stripes(ly),
            Texture::Dots => dots(lx, ly),
        }
    }
}

fn brick(lx: i32, ly: i32) -> Rgba {
    let row = ly.div_euclid(BRICK_H);
    let offset = if row.rem_euclid(2) == 1 { BRICK_W / 2 } else { 0 };
    let bx = (lx + offset).rem_euclid(BRICK_W);
    let by = ly.rem_euclid(BRICK_H);
    if bx < MORTAR || by < MORTAR {
        MORTAR_COLOR
    } else {
        BRICK_COLOR
    }
}

fn checker(lx: i32, ly: i32) -> Rgba {
    if (lx.div_euclid(CHECKER_TILE) + ly.div_euclid(CHECKER_TILE)).rem_euclid(2) == 0 {
        CHECKER_LIGHT
    } else {
        CHECKER_DARK
    }
}

fn stripes(ly: i32) -> Rgba {
    if ly.div_euclid(STRIPE_BAND).rem_euclid(2) == 0 {
        STRIPE_LIGHT
    } else {
        STRIPE_DARK
    }
}

fn dots(lx: i32, ly: i32) -> Rgba {
    if lx.rem_euclid(DOT_SPACING) < DOT_SIZE && ly.rem_euclid(DOT_SPACING) < DOT_SIZE {
        DOT_COLOR
    } else {
        DOT_GROUND
    }
}
