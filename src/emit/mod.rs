//! Encoders from the document model to SWF bytes.
//!
//! Record encoders are `pub(crate)`; the public surface is the movie and tag entry points.

mod avm1;
mod basic;
mod button;
mod display;
mod gradient;
mod morph_shape;
mod movie;
mod shape;
mod sound;
mod tags;
mod text;

pub use movie::{emit_movie, write_movie};
pub use tags::{emit_tag, write_tag, write_tag_string};
