use serde::{Deserialize, Serialize};

use crate::commentary::CommentaryThresholds;
use crate::core::{PitchDimensions, Viewport};
use crate::error::{ShotMapError, ShotMapResult};
use crate::render::Color;

use super::{LegendStyle, MarkerStyle};

/// Colors shared by every part of the shot map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShotMapTheme {
    /// Figure and pitch background; also the fill of unscored shots.
    #[serde(with = "hex_color")]
    pub background: Color,
    #[serde(with = "hex_color")]
    pub font: Color,
    #[serde(with = "hex_color")]
    pub line: Color,
    /// Fill of scored shots and color of the stat values.
    #[serde(with = "hex_color")]
    pub goal_highlight: Color,
}

impl Default for ShotMapTheme {
    fn default() -> Self {
        Self {
            background: Color::rgb(12.0 / 255.0, 13.0 / 255.0, 14.0 / 255.0),
            font: Color::WHITE,
            line: Color::WHITE,
            goal_highlight: Color::RED,
        }
    }
}

impl ShotMapTheme {
    pub fn validate(self) -> ShotMapResult<Self> {
        for color in [self.background, self.font, self.line, self.goal_highlight] {
            color
                .validate()
                .map_err(|e| ShotMapError::InvalidConfig(format!("theme: {e}")))?;
        }
        Ok(self)
    }
}

/// Linear marker scaling shared by pitch markers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerScaling {
    /// Marker area (points²) per unit of xG. Presentation constant, not a physical unit.
    pub size_per_xg: f64,
    pub alpha: f64,
    pub edge_width: f64,
}

impl Default for MarkerScaling {
    fn default() -> Self {
        Self {
            size_per_xg: 300.0,
            alpha: 0.7,
            edge_width: 1.0,
        }
    }
}

/// Serializable setup of the whole shot-map pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShotMapConfig {
    #[serde(default = "default_viewport")]
    pub viewport: Viewport,
    #[serde(default)]
    pub theme: ShotMapTheme,
    #[serde(default)]
    pub marker: MarkerScaling,
    #[serde(default)]
    pub legend: LegendStyle,
    #[serde(default)]
    pub pitch: PitchDimensions,
    #[serde(default)]
    pub thresholds: CommentaryThresholds,
}

impl Default for ShotMapConfig {
    fn default() -> Self {
        Self {
            viewport: default_viewport(),
            theme: ShotMapTheme::default(),
            marker: MarkerScaling::default(),
            legend: LegendStyle::default(),
            pitch: PitchDimensions::default(),
            thresholds: CommentaryThresholds::default(),
        }
    }
}

impl ShotMapConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_theme(mut self, theme: ShotMapTheme) -> Self {
        self.theme = theme;
        self
    }

    #[must_use]
    pub fn with_marker_scaling(mut self, marker: MarkerScaling) -> Self {
        self.marker = marker;
        self
    }

    #[must_use]
    pub fn with_legend(mut self, legend: LegendStyle) -> Self {
        self.legend = legend;
        self
    }

    #[must_use]
    pub fn with_pitch_dimensions(mut self, pitch: PitchDimensions) -> Self {
        self.pitch = pitch;
        self
    }

    #[must_use]
    pub fn with_thresholds(mut self, thresholds: CommentaryThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn validate(&self) -> ShotMapResult<()> {
        self.viewport.ensure_valid()?;
        self.theme.validate()?;
        let marker = self.marker;
        if !marker.size_per_xg.is_finite() || marker.size_per_xg <= 0.0 {
            return Err(ShotMapError::InvalidConfig(
                "marker `size_per_xg` must be finite and > 0".to_owned(),
            ));
        }
        if !marker.alpha.is_finite() || !(0.0..=1.0).contains(&marker.alpha) {
            return Err(ShotMapError::InvalidConfig(
                "marker `alpha` must be finite and in [0, 1]".to_owned(),
            ));
        }
        if !marker.edge_width.is_finite() || marker.edge_width < 0.0 {
            return Err(ShotMapError::InvalidConfig(
                "marker `edge_width` must be finite and >= 0".to_owned(),
            ));
        }
        self.legend.validate()?;
        self.pitch.validate()?;
        self.thresholds.validate()?;
        Ok(())
    }

    /// Resolved pitch-marker style for the current theme.
    #[must_use]
    pub fn marker_style(&self) -> MarkerStyle {
        MarkerStyle {
            size_per_xg: self.marker.size_per_xg,
            alpha: self.marker.alpha,
            edge_width: self.marker.edge_width,
            goal_fill: self.theme.goal_highlight,
            void_fill: self.theme.background,
            edge: self.theme.line,
        }
    }

    pub fn from_json_str(input: &str) -> ShotMapResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ShotMapError::InvalidConfig(format!("failed to parse config json: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> ShotMapResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ShotMapError::InvalidConfig(format!("failed to serialize config: {e}")))
    }
}

/// 8 x 12 inch figure at 100 dpi.
fn default_viewport() -> Viewport {
    Viewport::new(800, 1200)
}

mod hex_color {
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::render::Color;

    pub fn serialize<S: Serializer>(color: &Color, serializer: S) -> Result<S::Ok, S::Error> {
        let channel = |value: f64| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
        serializer.serialize_str(&format!(
            "#{:02X}{:02X}{:02X}",
            channel(color.red),
            channel(color.green),
            channel(color.blue)
        ))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Color, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Color::from_hex(&hex).map_err(serde::de::Error::custom)
    }
}
