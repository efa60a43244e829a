//! Cosmetic helpers
//!
//! Thin compositions over `SeededRandomSource` used by project tiles and the
//! hero particles. Each call consumes draws from the same stream as every
//! other operation on the source.

use serde::Serialize;

use super::source::SeededRandomSource;
use crate::constants::{JITTER_RANGE, PARTICLE_OFFSET_RANGE, ROTATION_RANGE};

/// A palette entry used to tint tiles
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct AccentColor {
    pub name: &'static str,
    /// Hex value, e.g. `#3B82F6`
    pub value: &'static str,
    /// CSS `rgb()` form with space-separated channels
    pub css: &'static str,
}

/// Fixed accent palette, in selection order
pub const ACCENT_COLORS: [AccentColor; 6] = [
    AccentColor {
        name: "electric-blue",
        value: "#3B82F6",
        css: "rgb(59 130 246)",
    },
    AccentColor {
        name: "mint",
        value: "#10B981",
        css: "rgb(16 185 129)",
    },
    AccentColor {
        name: "purple",
        value: "#8B5CF6",
        css: "rgb(139 92 246)",
    },
    AccentColor {
        name: "coral",
        value: "#F97316",
        css: "rgb(249 115 22)",
    },
    AccentColor {
        name: "pink",
        value: "#EC4899",
        css: "rgb(236 72 153)",
    },
    AccentColor {
        name: "lime",
        value: "#84CC16",
        css: "rgb(132 204 22)",
    },
];

/// 2D displacement in pixels
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl SeededRandomSource {
    /// One palette entry (one draw)
    pub fn accent_color(&mut self) -> &'static AccentColor {
        &ACCENT_COLORS[self.index_below(ACCENT_COLORS.len())]
    }

    /// Small tilt for a tile (one draw)
    pub fn rotation(&mut self) -> f64 {
        self.next_float(ROTATION_RANGE.0, ROTATION_RANGE.1)
    }

    /// Small positional wobble (two draws, x then y)
    pub fn jitter(&mut self) -> Offset {
        self.offset_in(JITTER_RANGE)
    }

    /// Particle scatter (two draws, x then y)
    pub fn particle_offset(&mut self) -> Offset {
        self.offset_in(PARTICLE_OFFSET_RANGE)
    }

    fn offset_in(&mut self, (min, max): (f64, f64)) -> Offset {
        let x = self.next_float(min, max);
        let y = self.next_float(min, max);
        Offset { x, y }
    }
}
