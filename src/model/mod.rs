//! Serde-deserializable document model of an SWF movie.
//!
//! Enums use serde's external tagging (`{"Solid": {...}}`, `"ShowFrame"`), fixed-point values
//! serialize as their raw epsilon integers.

pub mod avm1;
pub mod basic;
pub mod button;
pub mod display;
pub mod morph_shape;
pub mod movie;
pub mod shape;
pub mod sound;
pub mod tags;
pub mod text;

pub use basic::{ColorTransform, ColorTransformWithAlpha, Matrix, Rect, SRgb8, StraightSRgba8, Vector2D};
pub use movie::{CompressionMethod, Header, Movie};
pub use tags::Tag;
