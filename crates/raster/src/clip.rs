//! Cohen–Sutherland line clipping.
//!
//! Region codes in this module use screen orientation: `TOP` means above
//! `y_min`, `BOTTOM` means below `y_max`.
//!
//! ```text
//!         |        |
//!  1001   |  1000  |  1010
//! --------+--------+-------- y_min
//!  0001   |  0000  |  0010
//! --------+--------+-------- y_max
//!  0101   |  0100  |  0110
//!       x_min    x_max
//! ```

use bitflags::bitflags;

bitflags! {
    /// Which clip-rectangle boundaries a point violates.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Outcode: u8 {
        const LEFT = 1;
        const RIGHT = 2;
        const BOTTOM = 4;
        const TOP = 8;
    }
}

/// Inclusive clip rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipRect {
    pub x_min: f32,
    pub y_min: f32,
    pub x_max: f32,
    pub y_max: f32,
}

impl ClipRect {
    pub const fn new(x_min: f32, y_min: f32, x_max: f32, y_max: f32) -> Self {
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    /// The full pixel grid `[0, width-1] × [0, height-1]`.
    pub fn for_surface(width: u32, height: u32) -> Self {
        Self::new(0.0, 0.0, width as f32 - 1.0, height as f32 - 1.0)
    }
}

/// Line segment `(x0, y0) - (x1, y1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
}

impl Segment {
    pub const fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self { x0, y0, x1, y1 }
    }
}

pub fn compute_outcode(x: f32, y: f32, clip: &ClipRect) -> Outcode {
    let mut code = Outcode::empty();
    if x < clip.x_min {
        code |= Outcode::LEFT;
    } else if x > clip.x_max {
        code |= Outcode::RIGHT;
    }
    if y < clip.y_min {
        code |= Outcode::TOP;
    } else if y > clip.y_max {
        code |= Outcode::BOTTOM;
    }
    code
}

/// Clip `seg` against `clip`.
///
/// Returns `None` when no part of the segment is visible. Each iteration moves
/// one outside endpoint onto the first violated boundary (TOP, BOTTOM, RIGHT,
/// LEFT), so the loop ends after at most four moves per endpoint.
pub fn clip_line(seg: Segment, clip: &ClipRect) -> Option<Segment> {
    let Segment {
        mut x0,
        mut y0,
        mut x1,
        mut y1,
    } = seg;

    // NaN coordinates compare false against every boundary and would be
    // accepted as inside; nothing sensible can be drawn from them.
    if !(x0.is_finite() && y0.is_finite() && x1.is_finite() && y1.is_finite()) {
        return None;
    }

    let mut code0 = compute_outcode(x0, y0, clip);
    let mut code1 = compute_outcode(x1, y1, clip);

    loop {
        if (code0 | code1).is_empty() {
            return Some(Segment::new(x0, y0, x1, y1));
        }
        if code0.intersects(code1) {
            return None;
        }

        let out = if !code0.is_empty() { code0 } else { code1 };

        let (x, y) = if out.contains(Outcode::TOP) {
            (intersect_x(x0, y0, x1, y1, clip.y_min), clip.y_min)
        } else if out.contains(Outcode::BOTTOM) {
            (intersect_x(x0, y0, x1, y1, clip.y_max), clip.y_max)
        } else if out.contains(Outcode::RIGHT) {
            (clip.x_max, intersect_y(x0, y0, x1, y1, clip.x_max))
        } else {
            (clip.x_min, intersect_y(x0, y0, x1, y1, clip.x_min))
        };

        if out == code0 {
            x0 = x;
            y0 = y;
            code0 = compute_outcode(x0, y0, clip);
        } else {
            x1 = x;
            y1 = y;
            code1 = compute_outcode(x1, y1, clip);
        }
    }
}

/// X where the segment crosses horizontal line `y`; a horizontal segment keeps `x0`.
#[inline]
fn intersect_x(x0: f32, y0: f32, x1: f32, y1: f32, y: f32) -> f32 {
    if y1 == y0 {
        x0
    } else {
        x0 + (x1 - x0) * (y - y0) / (y1 - y0)
    }
}

/// Y where the segment crosses vertical line `x`; a vertical segment keeps `y0`.
#[inline]
fn intersect_y(x0: f32, y0: f32, x1: f32, y1: f32, x: f32) -> f32 {
    if x1 == x0 {
        y0
    } else {
        y0 + (y1 - y0) * (x - x0) / (x1 - x0)
    }
}
