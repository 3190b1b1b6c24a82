use serde::{Deserialize, Serialize};

use crate::error::{ShotMapError, ShotMapResult};

/// Output surface size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    pub fn ensure_valid(self) -> ShotMapResult<Self> {
        if !self.is_valid() {
            return Err(ShotMapError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }
}

/// Point in Opta field space: `x` along the pitch length, `y` across it, both 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldPoint {
    pub x: f64,
    pub y: f64,
}

impl FieldPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Point in viewport pixels, origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Rectangular panel expressed in figure fractions.
///
/// Follows the plotting convention of `[left, bottom, width, height]` with the
/// origin at the bottom-left corner of the figure, so `bottom = 0.7` sits in the
/// upper part of the output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelRect {
    pub left: f64,
    pub bottom: f64,
    pub width: f64,
    pub height: f64,
}

impl PanelRect {
    #[must_use]
    pub const fn new(left: f64, bottom: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            bottom,
            width,
            height,
        }
    }

    /// Resolves a point given in panel fractions into viewport pixels.
    #[must_use]
    pub fn fraction_to_pixel(self, fx: f64, fy: f64, viewport: Viewport) -> PixelPoint {
        let figure_x = self.left + fx * self.width;
        let figure_y = self.bottom + fy * self.height;
        PixelPoint {
            x: figure_x * f64::from(viewport.width),
            y: (1.0 - figure_y) * f64::from(viewport.height),
        }
    }

    /// Pixel bounds as `(left, top, right, bottom)`.
    #[must_use]
    pub fn pixel_bounds(self, viewport: Viewport) -> (f64, f64, f64, f64) {
        let top_left = self.fraction_to_pixel(0.0, 1.0, viewport);
        let bottom_right = self.fraction_to_pixel(1.0, 0.0, viewport);
        (top_left.x, top_left.y, bottom_right.x, bottom_right.y)
    }
}
