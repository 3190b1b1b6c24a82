mod frame;
mod null_renderer;
mod primitives;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{
    Color, FontWeight, MarkerPrimitive, PitchPrimitive, TextHAlign, TextPrimitive,
};

use crate::error::ShotMapResult;

/// Contract implemented by any drawing backend.
///
/// Backends receive a fully materialized `RenderFrame`, so drawing code stays
/// isolated from shot aggregation and layout logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ShotMapResult<()>;
}
