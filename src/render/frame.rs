use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::ShotMapResult;
use crate::render::{Color, MarkerPrimitive, PitchPrimitive, TextPrimitive};

/// Backend-agnostic scene for one shot-map draw pass.
///
/// Markers are listed in paint order; later markers draw on top.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub background: Color,
    pub pitch: Option<PitchPrimitive>,
    pub markers: Vec<MarkerPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport, background: Color) -> Self {
        Self {
            viewport,
            background,
            pitch: None,
            markers: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_pitch(mut self, pitch: PitchPrimitive) -> Self {
        self.pitch = Some(pitch);
        self
    }

    #[must_use]
    pub fn with_marker(mut self, marker: MarkerPrimitive) -> Self {
        self.markers.push(marker);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    pub fn validate(&self) -> ShotMapResult<()> {
        self.viewport.ensure_valid()?;
        self.background.validate()?;
        if let Some(pitch) = self.pitch {
            pitch.validate()?;
        }
        for marker in &self.markers {
            marker.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pitch.is_none() && self.markers.is_empty() && self.texts.is_empty()
    }
}
