//! shotmap-rs: per-player expected-goals shot maps.
//!
//! The crate turns a fetched batch of raw shot entries into everything a
//! presentation layer needs: season aggregates, one marker per shot on a
//! vertical half-pitch, fixed legend/title/stat-strip geometry, and
//! threshold-based commentary. Drawing itself stays behind the
//! [`render::Renderer`] trait.

pub mod api;
pub mod commentary;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ShotMap, ShotMapConfig, ShotMapEngine};
pub use error::{ShotMapError, ShotMapResult};
