use shotmap_rs::api::{League, Season, ShotMap, ShotMapConfig, ShotMapSelection, build_render_frame};
use shotmap_rs::core::{RawShot, Viewport};
use shotmap_rs::render::{
    Color, FontWeight, MarkerPrimitive, NullRenderer, RenderFrame, Renderer, TextHAlign,
    TextPrimitive,
};

fn selection(name: &str) -> ShotMapSelection {
    ShotMapSelection::new(League::Bundesliga, Season::new("2023").expect("season"), name)
}

fn sample_map(config: &ShotMapConfig) -> ShotMap {
    let shots = vec![
        RawShot::new(0.9, 0.5, 0.45, "Goal", "2023"),
        RawShot::new(0.82, 0.3, 0.07, "SavedShot", "2023"),
        RawShot::new(0.76, 0.65, 0.03, "MissedShots", "2023"),
    ];
    ShotMap::build(selection("Harry Kane"), &shots, config).expect("build")
}

#[test]
fn frame_lists_header_legend_markers_and_stat_strip() {
    let config = ShotMapConfig::default();
    let map = sample_map(&config);
    let frame = build_render_frame(&map, &config).expect("frame");

    frame.validate().expect("valid frame");
    assert_eq!(frame.viewport, Viewport::new(800, 1200));
    assert_eq!(frame.background, config.theme.background);
    assert_eq!(frame.pitch.expect("pitch").area, map.pitch_area);
    assert_eq!(frame.markers.len(), 7 + 3);

    let texts: Vec<&str> = frame.texts.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(
        texts,
        vec![
            "Harry Kane",
            "All shots in the Bundesliga 2023 season",
            "Low Quality Chance",
            "High Quality Chance",
            "Goal",
            "No Goal",
            "Shots",
            "3",
            "Goals",
            "1",
            "xG",
            "0.55",
            "xG/Shot",
            "0.18",
        ]
    );
}

#[test]
fn title_and_stat_values_use_the_theme() {
    let config = ShotMapConfig::default();
    let frame = build_render_frame(&sample_map(&config), &config).expect("frame");

    let title = &frame.texts[0];
    assert_eq!(title.weight, FontWeight::Bold);
    assert_eq!(title.h_align, TextHAlign::Center);
    assert_eq!(title.font_size_px, 20.0);
    assert_eq!(title.color, config.theme.font);

    let value = frame
        .texts
        .iter()
        .find(|t| t.text == "0.55")
        .expect("xG value");
    assert_eq!(value.color, config.theme.goal_highlight);
    assert_eq!(value.font_size_px, 16.0);
}

#[test]
fn pitch_markers_follow_legend_swatches_in_paint_order() {
    let config = ShotMapConfig::default();
    let map = sample_map(&config);
    let frame = build_render_frame(&map, &config).expect("frame");

    let pitch_markers: &[MarkerPrimitive] = &frame.markers[7..];
    let goal = pitch_markers[0];
    assert_eq!(goal.fill, config.theme.goal_highlight.with_alpha(0.7));
    assert_eq!(goal.edge, config.theme.line.with_alpha(0.7));
    assert!((goal.area_pt2 - 135.0).abs() <= 1e-9);
    assert_eq!(goal.x, map.markers[0].pixel.x);
    assert_eq!(goal.y, map.markers[0].pixel.y);

    let miss = pitch_markers[2];
    assert_eq!(miss.fill, config.theme.background.with_alpha(0.7));

    let swatch_sizes: Vec<f64> = frame.markers[..5].iter().map(|m| m.area_pt2).collect();
    assert_eq!(swatch_sizes, vec![100.0, 200.0, 300.0, 400.0, 500.0]);
}

#[test]
fn empty_player_name_skips_the_title() {
    let config = ShotMapConfig::default();
    let map = ShotMap::build(selection(""), &[], &config).expect("build");
    let frame = build_render_frame(&map, &config).expect("frame");

    assert_eq!(frame.texts.len(), 1 + 4 + 8);
    assert_eq!(frame.markers.len(), 7);
    frame.validate().expect("valid frame");
}

#[test]
fn null_renderer_rejects_invalid_frames() {
    let mut renderer = NullRenderer::default();
    let frame = RenderFrame::new(Viewport::new(800, 1200), Color::WHITE).with_text(TextPrimitive::new(
        "",
        10.0,
        10.0,
        12.0,
        Color::WHITE,
        TextHAlign::Left,
    ));

    assert!(renderer.render(&frame).is_err());
    assert_eq!(renderer.frames_rendered, 0);

    let ok = RenderFrame::new(Viewport::new(800, 1200), Color::WHITE);
    assert!(ok.is_empty());
    renderer.render(&ok).expect("empty frame renders");
    assert_eq!(renderer.frames_rendered, 1);
}
