mod data_source;
mod engine;
mod engine_config;
mod json_contract;
mod layout;
mod player_directory;
mod render_frame_builder;
mod selection;
mod shot_geometry;
mod shot_map;

pub use data_source::{ShotDataSource, StaticShotDataSource};
pub use engine::ShotMapEngine;
pub use engine_config::{MarkerScaling, ShotMapConfig, ShotMapTheme};
pub use json_contract::{SHOT_MAP_JSON_SCHEMA_V1, ShotMapJsonContractV1};
pub use layout::{
    HEADER_PANEL, LegendStyle, LegendSwatch, PITCH_PANEL, STAT_COUNT, STAT_STRIP_PANEL,
    ShotMapLayout, StatSlot, StaticLabel, TextAnchor, compose_layout, stat_slot_offset,
};
pub use player_directory::{PlayerDirectory, PlayerEntry, PlayerId, RawPlayer};
pub use render_frame_builder::build_render_frame;
pub use selection::{League, SUPPORTED_SEASONS, Season, ShotMapSelection};
pub use shot_geometry::{MarkerFill, MarkerSpec, MarkerStyle, map_shot, map_shots};
pub use shot_map::ShotMap;
