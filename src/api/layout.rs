//! Static annotation geometry around the pitch.
//!
//! Panels are placed in figure fractions and anchors in panel fractions
//! (origin bottom-left); every anchor is also resolved to viewport pixels
//! (origin top-left). Nothing here depends on shot data.

use serde::{Deserialize, Serialize};

use crate::core::{PanelRect, PixelPoint, Viewport};
use crate::error::{ShotMapError, ShotMapResult};
use crate::render::{FontWeight, TextHAlign};

use super::MarkerFill;

pub const HEADER_PANEL: PanelRect = PanelRect::new(0.0, 0.7, 1.0, 0.2);
pub const PITCH_PANEL: PanelRect = PanelRect::new(0.05, 0.25, 0.9, 0.5);
pub const STAT_STRIP_PANEL: PanelRect = PanelRect::new(0.0, 0.2, 1.0, 0.05);

/// Number of entries in the stat strip (shots, goals, xG, xG/shot).
pub const STAT_COUNT: usize = 4;

const STAT_BASE_OFFSET: f64 = 0.25;
const STAT_STRIDE: f64 = 0.13;
const QUALITY_SWATCH_BASE_X: f64 = 0.37;
const QUALITY_SWATCH_STEP_X: f64 = 0.05;
const QUALITY_SWATCH_Y: f64 = 0.53;

/// Sizes of the legend swatches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendStyle {
    /// Graduated low-to-high xG scale, points².
    pub quality_swatch_sizes: Vec<f64>,
    pub outcome_swatch_size: f64,
    pub goal_swatch_alpha: f64,
    pub swatch_edge_width: f64,
}

impl Default for LegendStyle {
    fn default() -> Self {
        Self {
            quality_swatch_sizes: vec![100.0, 200.0, 300.0, 400.0, 500.0],
            outcome_swatch_size: 100.0,
            goal_swatch_alpha: 0.7,
            swatch_edge_width: 0.8,
        }
    }
}

impl LegendStyle {
    pub fn validate(&self) -> ShotMapResult<()> {
        if self.quality_swatch_sizes.is_empty() {
            return Err(ShotMapError::InvalidConfig(
                "legend needs at least one quality swatch".to_owned(),
            ));
        }
        for size in self
            .quality_swatch_sizes
            .iter()
            .chain(std::iter::once(&self.outcome_swatch_size))
        {
            if !size.is_finite() || *size <= 0.0 {
                return Err(ShotMapError::InvalidConfig(
                    "legend swatch sizes must be finite and > 0".to_owned(),
                ));
            }
        }
        if !self.goal_swatch_alpha.is_finite() || !(0.0..=1.0).contains(&self.goal_swatch_alpha) {
            return Err(ShotMapError::InvalidConfig(
                "legend `goal_swatch_alpha` must be in [0, 1]".to_owned(),
            ));
        }
        if !self.swatch_edge_width.is_finite() || self.swatch_edge_width < 0.0 {
            return Err(ShotMapError::InvalidConfig(
                "legend `swatch_edge_width` must be finite and >= 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Where and how a piece of text is placed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextAnchor {
    pub panel_x: f64,
    pub panel_y: f64,
    pub pixel: PixelPoint,
    pub font_size_px: f64,
    pub weight: FontWeight,
    pub h_align: TextHAlign,
}

/// Fixed caption with its anchor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaticLabel {
    pub text: String,
    pub anchor: TextAnchor,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LegendSwatch {
    pub panel_x: f64,
    pub panel_y: f64,
    pub pixel: PixelPoint,
    pub size: f64,
    pub fill: MarkerFill,
    pub alpha: f64,
    pub edge_width: f64,
}

/// Name and value anchors of one stat-strip entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatSlot {
    pub index: usize,
    pub name: TextAnchor,
    pub value: TextAnchor,
}

/// Every annotation placement of a shot map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShotMapLayout {
    pub viewport: Viewport,
    pub header: PanelRect,
    pub pitch: PanelRect,
    pub stat_strip: PanelRect,
    pub title: TextAnchor,
    pub subtitle: TextAnchor,
    pub low_quality_label: StaticLabel,
    pub high_quality_label: StaticLabel,
    pub quality_swatches: Vec<LegendSwatch>,
    pub goal_label: StaticLabel,
    pub goal_swatch: LegendSwatch,
    pub no_goal_label: StaticLabel,
    pub no_goal_swatch: LegendSwatch,
    pub stat_slots: Vec<StatSlot>,
}

/// Horizontal panel offset of stat slot `index`.
#[must_use]
pub fn stat_slot_offset(index: usize) -> f64 {
    STAT_BASE_OFFSET + index as f64 * STAT_STRIDE
}

/// Lays out the annotations for `stat_count` stat slots on `viewport`.
pub fn compose_layout(
    stat_count: usize,
    viewport: Viewport,
    legend: &LegendStyle,
) -> ShotMapResult<ShotMapLayout> {
    let viewport = viewport.ensure_valid()?;
    let header = HEADER_PANEL;
    let text = |panel: PanelRect, fx: f64, fy: f64, size: f64, weight, h_align| TextAnchor {
        panel_x: fx,
        panel_y: fy,
        pixel: panel.fraction_to_pixel(fx, fy, viewport),
        font_size_px: size,
        weight,
        h_align,
    };
    let label = |caption: &str, anchor: TextAnchor| StaticLabel {
        text: caption.to_owned(),
        anchor,
    };
    let swatch = |fx: f64, fy: f64, size: f64, fill: MarkerFill, alpha: f64| LegendSwatch {
        panel_x: fx,
        panel_y: fy,
        pixel: header.fraction_to_pixel(fx, fy, viewport),
        size,
        fill,
        alpha,
        edge_width: legend.swatch_edge_width,
    };

    let quality_swatches = legend
        .quality_swatch_sizes
        .iter()
        .enumerate()
        .map(|(i, size)| {
            let fx = QUALITY_SWATCH_BASE_X + (i + 1) as f64 * QUALITY_SWATCH_STEP_X;
            swatch(fx, QUALITY_SWATCH_Y, *size, MarkerFill::Void, 1.0)
        })
        .collect();

    let stat_slots = (0..stat_count)
        .map(|index| {
            let fx = stat_slot_offset(index);
            StatSlot {
                index,
                name: text(
                    STAT_STRIP_PANEL,
                    fx,
                    0.5,
                    20.0,
                    FontWeight::Bold,
                    TextHAlign::Left,
                ),
                value: text(
                    STAT_STRIP_PANEL,
                    fx,
                    0.0,
                    16.0,
                    FontWeight::Normal,
                    TextHAlign::Left,
                ),
            }
        })
        .collect();

    Ok(ShotMapLayout {
        viewport,
        header,
        pitch: PITCH_PANEL,
        stat_strip: STAT_STRIP_PANEL,
        title: text(header, 0.5, 0.85, 20.0, FontWeight::Bold, TextHAlign::Center),
        subtitle: text(header, 0.5, 0.7, 14.0, FontWeight::Bold, TextHAlign::Center),
        low_quality_label: label(
            "Low Quality Chance",
            text(header, 0.25, 0.5, 12.0, FontWeight::Normal, TextHAlign::Center),
        ),
        high_quality_label: label(
            "High Quality Chance",
            text(header, 0.75, 0.5, 12.0, FontWeight::Normal, TextHAlign::Center),
        ),
        quality_swatches,
        goal_label: label(
            "Goal",
            text(header, 0.45, 0.27, 10.0, FontWeight::Normal, TextHAlign::Right),
        ),
        goal_swatch: swatch(
            0.47,
            0.3,
            legend.outcome_swatch_size,
            MarkerFill::GoalHighlight,
            legend.goal_swatch_alpha,
        ),
        no_goal_label: label(
            "No Goal",
            text(header, 0.55, 0.27, 10.0, FontWeight::Normal, TextHAlign::Left),
        ),
        no_goal_swatch: swatch(
            0.53,
            0.3,
            legend.outcome_swatch_size,
            MarkerFill::Void,
            1.0,
        ),
        stat_slots,
    })
}
