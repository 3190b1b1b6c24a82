//! Field-space conventions and the vertical half-pitch projection.
//!
//! Source coordinates (`X`, `Y` in `[0, 1]`) follow the shot feed convention:
//! `X` runs along the pitch length from the shooting team's own goal line
//! (`0`) to the opponent's goal line (`1`), and `Y` runs across the width.
//! Scaling by 100 yields Opta field space, in which `y = 0` is the right
//! touchline when facing the attacking goal.
//!
//! The projection draws only the attacking half (`x` in `[50, 100]`) with the
//! attacking goal at the top of the panel: screen-up is `+x`, screen-right is
//! `-y` (so `y = 100` sits on the left edge).

use serde::{Deserialize, Serialize};

use crate::core::scale::LinearScale;
use crate::core::types::{FieldPoint, PanelRect, PixelPoint, Viewport};
use crate::error::{ShotMapError, ShotMapResult};

/// Upper bound of field-space axes.
pub const FIELD_SPAN: f64 = 100.0;
/// Field-space `x` of the halfway line.
pub const HALFWAY_X: f64 = 50.0;

/// Scales normalized source coordinates into field space.
#[must_use]
pub fn field_point_from_normalized(position_x: f64, position_y: f64) -> FieldPoint {
    FieldPoint::new(position_x * FIELD_SPAN, position_y * FIELD_SPAN)
}

impl FieldPoint {
    #[must_use]
    pub fn in_attacking_half(self) -> bool {
        self.x >= HALFWAY_X
    }
}

/// Physical pitch proportions used to keep the drawn half-pitch undistorted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PitchDimensions {
    pub length_m: f64,
    pub width_m: f64,
}

impl Default for PitchDimensions {
    fn default() -> Self {
        Self {
            length_m: 105.0,
            width_m: 68.0,
        }
    }
}

impl PitchDimensions {
    pub fn validate(self) -> ShotMapResult<Self> {
        for (value, name) in [(self.length_m, "length_m"), (self.width_m, "width_m")] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ShotMapError::InvalidConfig(format!(
                    "pitch `{name}` must be finite and > 0"
                )));
            }
        }
        Ok(self)
    }

    /// Width-over-height ratio of the vertical half-pitch.
    #[must_use]
    pub fn half_pitch_aspect(self) -> f64 {
        self.width_m / (0.5 * self.length_m)
    }
}

/// Pixel rectangle actually covered by the drawn half-pitch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PitchArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Maps field space onto the half-pitch drawn inside a panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HalfPitchProjection {
    area: PitchArea,
    horizontal: LinearScale,
    vertical: LinearScale,
}

impl HalfPitchProjection {
    /// Letterboxes the half-pitch into `panel`, centered, preserving its aspect.
    pub fn fit(
        panel: PanelRect,
        viewport: Viewport,
        dimensions: PitchDimensions,
    ) -> ShotMapResult<Self> {
        let viewport = viewport.ensure_valid()?;
        let dimensions = dimensions.validate()?;
        let (left, top, right, bottom) = panel.pixel_bounds(viewport);
        let panel_width = right - left;
        let panel_height = bottom - top;
        if !(panel_width > 0.0 && panel_height > 0.0) {
            return Err(ShotMapError::InvalidData(
                "pitch panel must have a positive pixel area".to_owned(),
            ));
        }

        let aspect = dimensions.half_pitch_aspect();
        let (width, height) = if panel_width / panel_height > aspect {
            (panel_height * aspect, panel_height)
        } else {
            (panel_width, panel_width / aspect)
        };
        let area = PitchArea {
            left: left + 0.5 * (panel_width - width),
            top: top + 0.5 * (panel_height - height),
            width,
            height,
        };

        // Screen-right is -y: y = 100 lands on the left edge.
        let horizontal = LinearScale::new(FIELD_SPAN, 0.0, area.left, area.left + area.width)?;
        // Screen-up is +x: the goal line (x = 100) lands on the top edge.
        let vertical = LinearScale::new(FIELD_SPAN, HALFWAY_X, area.top, area.top + area.height)?;

        Ok(Self {
            area,
            horizontal,
            vertical,
        })
    }

    #[must_use]
    pub fn area(self) -> PitchArea {
        self.area
    }

    #[must_use]
    pub fn project(self, point: FieldPoint) -> PixelPoint {
        PixelPoint::new(self.horizontal.map(point.y), self.vertical.map(point.x))
    }

    pub fn unproject(self, pixel: PixelPoint) -> ShotMapResult<FieldPoint> {
        Ok(FieldPoint::new(
            self.vertical.invert(pixel.y)?,
            self.horizontal.invert(pixel.x)?,
        ))
    }
}
