use crate::error::ShotMapResult;
use crate::render::{Color, MarkerPrimitive, PitchPrimitive, RenderFrame, TextPrimitive};

use super::{LegendSwatch, MarkerFill, ShotMap, ShotMapConfig, StaticLabel, TextAnchor};

/// Materializes a shot map into pixel-space draw commands.
///
/// Paint order: header texts, legend swatches, pitch markers, stat strip.
pub fn build_render_frame(map: &ShotMap, config: &ShotMapConfig) -> ShotMapResult<RenderFrame> {
    config.validate()?;
    let theme = config.theme;
    let layout = &map.layout;

    let mut frame = RenderFrame::new(layout.viewport, theme.background).with_pitch(PitchPrimitive {
        area: map.pitch_area,
        pitch_color: theme.background,
        line_color: theme.line,
    });

    if !map.selection.player_name.trim().is_empty() {
        frame
            .texts
            .push(text_at(&map.selection.player_name, layout.title, theme.font));
    }
    frame
        .texts
        .push(text_at(&map.selection.subtitle(), layout.subtitle, theme.font));
    for label in [
        &layout.low_quality_label,
        &layout.high_quality_label,
        &layout.goal_label,
        &layout.no_goal_label,
    ] {
        frame.texts.push(static_text(label, theme.font));
    }

    let fill_of = |fill: MarkerFill| match fill {
        MarkerFill::GoalHighlight => theme.goal_highlight,
        MarkerFill::Void => theme.background,
    };
    for swatch in layout
        .quality_swatches
        .iter()
        .chain([&layout.goal_swatch, &layout.no_goal_swatch])
    {
        frame
            .markers
            .push(swatch_marker(swatch, fill_of(swatch.fill), theme.font));
    }

    for marker in &map.markers {
        frame.markers.push(MarkerPrimitive {
            x: marker.pixel.x,
            y: marker.pixel.y,
            area_pt2: marker.size,
            fill: marker.fill_color.with_alpha(marker.alpha),
            edge: marker.edge_color.with_alpha(marker.alpha),
            edge_width: marker.edge_width,
        });
    }

    for (slot, entry) in layout.stat_slots.iter().zip(map.stats.strip_entries()) {
        frame.texts.push(text_at(entry.label, slot.name, theme.font));
        frame
            .texts
            .push(text_at(&entry.formatted_value(), slot.value, theme.goal_highlight));
    }

    Ok(frame)
}

fn text_at(text: &str, anchor: TextAnchor, color: Color) -> TextPrimitive {
    let mut primitive = TextPrimitive::new(
        text,
        anchor.pixel.x,
        anchor.pixel.y,
        anchor.font_size_px,
        color,
        anchor.h_align,
    );
    primitive.weight = anchor.weight;
    primitive
}

fn static_text(label: &StaticLabel, color: Color) -> TextPrimitive {
    text_at(&label.text, label.anchor, color)
}

fn swatch_marker(swatch: &LegendSwatch, fill: Color, edge: Color) -> MarkerPrimitive {
    MarkerPrimitive {
        x: swatch.pixel.x,
        y: swatch.pixel.y,
        area_pt2: swatch.size,
        fill: fill.with_alpha(swatch.alpha),
        edge: edge.with_alpha(swatch.alpha),
        edge_width: swatch.edge_width,
    }
}
