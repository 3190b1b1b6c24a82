pub mod normalize;
pub mod pitch;
pub mod scale;
pub mod season_filter;
pub mod shot;
pub mod stats;
pub mod types;

pub use normalize::{
    DroppedRecord, NormalizedShots, RawShot, RawValue, RecordError, normalize_shot,
    normalize_shots, parse_raw_shots,
};
pub use pitch::{HalfPitchProjection, PitchArea, PitchDimensions, field_point_from_normalized};
pub use scale::LinearScale;
pub use season_filter::filter_season;
pub use shot::{SeasonId, ShotContext, ShotOutcome, ShotRecord};
pub use stats::{SeasonStats, StatEntry, StatValue};
pub use types::{FieldPoint, PanelRect, PixelPoint, Viewport};
