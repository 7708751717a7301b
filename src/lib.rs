//! Byte-exact SWF movie emitter.
//!
//! Build a [`model::Movie`] (or deserialize one from JSON) and pass it to [`emit_movie`].
//! Individual tags can be encoded with [`emit_tag`]; callers managing their own buffer use
//! [`write_movie`], [`write_tag`] and [`write_tag_string`] on a [`WriteStream`].

#![forbid(unsafe_code)]

pub mod emit;
pub mod foundation;
pub mod io;
pub mod model;

pub use emit::{emit_movie, emit_tag, write_movie, write_tag, write_tag_string};
pub use foundation::error::{EmitError, EmitResult};
pub use foundation::fixed::{Sfixed8P8, Sfixed16P16, Ufixed8P8, Ufixed16P16};
pub use io::stream::WriteStream;
pub use model::{CompressionMethod, Movie, Tag};
