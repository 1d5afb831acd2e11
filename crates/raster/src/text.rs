//! Text labels placed in screen pixel space.
//!
//! Glyph rasterization is not part of this crate. Scenes record where text
//! belongs and the presenter renders it with whatever font facility it has
//! (the terminal presenter uses terminal cells).

use crate::types::Rgba;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    /// Anchor x in screen pixels (left edge or center, see `align`).
    pub x: i32,
    /// Anchor y in screen pixels.
    pub y: i32,
    pub text: String,
    pub color: Rgba,
    pub bold: bool,
    pub align: Align,
}

/// Labels for one frame, in draw order (later labels win).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextLayer {
    labels: Vec<Label>,
}

impl TextLayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.labels.clear();
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn push(&mut self, x: i32, y: i32, text: impl Into<String>, color: Rgba) {
        self.labels.push(Label {
            x,
            y,
            text: text.into(),
            color,
            bold: false,
            align: Align::Left,
        });
    }

    pub fn push_centered(&mut self, x: i32, y: i32, text: impl Into<String>, color: Rgba, bold: bool) {
        self.labels.push(Label {
            x,
            y,
            text: text.into(),
            color,
            bold,
            align: Align::Center,
        });
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.labels.iter().any(|l| l.text.contains(needle))
    }
}
