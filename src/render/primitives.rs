use serde::{Deserialize, Serialize};

use crate::core::PitchArea;
use crate::error::{ShotMapError, ShotMapResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Parses `#RRGGBB` (leading `#` optional).
    pub fn from_hex(hex: &str) -> ShotMapResult<Self> {
        let digits = hex.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ShotMapError::InvalidConfig(format!(
                "color `{hex}` must be in #RRGGBB form"
            )));
        }
        let channel = |range: std::ops::Range<usize>| -> ShotMapResult<f64> {
            u8::from_str_radix(&digits[range], 16)
                .map(|value| f64::from(value) / 255.0)
                .map_err(|e| ShotMapError::InvalidConfig(format!("color `{hex}`: {e}")))
        };
        Ok(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    #[must_use]
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }

    pub fn validate(self) -> ShotMapResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ShotMapError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FontWeight {
    Normal,
    Bold,
}

/// Draw command for one label in pixel space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub weight: FontWeight,
    pub color: Color,
    pub h_align: TextHAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            weight: FontWeight::Normal,
            color,
            h_align,
        }
    }

    #[must_use]
    pub fn bold(mut self) -> Self {
        self.weight = FontWeight::Bold;
        self
    }

    pub fn validate(&self) -> ShotMapResult<()> {
        if self.text.is_empty() {
            return Err(ShotMapError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ShotMapError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ShotMapError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Draw command for one circular scatter marker centered at `(x, y)`.
///
/// `area_pt2` follows the scatter convention of marker area in points squared.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerPrimitive {
    pub x: f64,
    pub y: f64,
    pub area_pt2: f64,
    pub fill: Color,
    pub edge: Color,
    pub edge_width: f64,
}

impl MarkerPrimitive {
    pub fn validate(self) -> ShotMapResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ShotMapError::InvalidData(
                "marker coordinates must be finite".to_owned(),
            ));
        }
        if !self.area_pt2.is_finite() || self.area_pt2 < 0.0 {
            return Err(ShotMapError::InvalidData(
                "marker area must be finite and >= 0".to_owned(),
            ));
        }
        if !self.edge_width.is_finite() || self.edge_width < 0.0 {
            return Err(ShotMapError::InvalidData(
                "marker edge width must be finite and >= 0".to_owned(),
            ));
        }
        self.fill.validate()?;
        self.edge.validate()
    }
}

/// Region where the backend draws the half-pitch markings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PitchPrimitive {
    pub area: PitchArea,
    pub pitch_color: Color,
    pub line_color: Color,
}

impl PitchPrimitive {
    pub fn validate(self) -> ShotMapResult<()> {
        let area = self.area;
        if !area.left.is_finite() || !area.top.is_finite() {
            return Err(ShotMapError::InvalidData(
                "pitch origin must be finite".to_owned(),
            ));
        }
        if !area.width.is_finite() || area.width <= 0.0 || !area.height.is_finite() || area.height <= 0.0
        {
            return Err(ShotMapError::InvalidData(
                "pitch area must be finite and > 0".to_owned(),
            ));
        }
        self.pitch_color.validate()?;
        self.line_color.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::Color;

    #[test]
    fn hex_colors_parse_into_unit_channels() {
        let color = Color::from_hex("#0C0D0E").expect("hex");
        assert!((color.red - 12.0 / 255.0).abs() <= 1e-12);
        assert!((color.green - 13.0 / 255.0).abs() <= 1e-12);
        assert!((color.blue - 14.0 / 255.0).abs() <= 1e-12);
        assert_eq!(color.alpha, 1.0);
    }

    #[test]
    fn malformed_hex_is_rejected() {
        assert!(Color::from_hex("#12345").is_err());
        assert!(Color::from_hex("#GG0000").is_err());
    }
}
