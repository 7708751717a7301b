use std::io::Write as _;

use flate2::Compression;
use flate2::write::ZlibEncoder;

use crate::emit::basic::write_rect;
use crate::emit::tags::write_tag_string;
use crate::foundation::error::{EmitError, EmitResult, count_as};
use crate::io::stream::WriteStream;
use crate::model::movie::{CompressionMethod, Header, Movie};

/// Signature, version byte and the u32 uncompressed file length.
const SIGNATURE_SIZE: usize = 8;

/// Encodes a complete movie file.
#[tracing::instrument(skip(movie), fields(swf_version = movie.header.swf_version, tags = movie.tags.len()))]
pub fn emit_movie(movie: &Movie, compression: CompressionMethod) -> EmitResult<Vec<u8>> {
    let mut stream = WriteStream::new();
    write_movie(&mut stream, movie, compression)?;
    Ok(stream.into_bytes())
}

pub fn write_movie(stream: &mut WriteStream, movie: &Movie, compression: CompressionMethod) -> EmitResult<()> {
    let mut payload = WriteStream::new();
    write_header(&mut payload, &movie.header)?;
    write_tag_string(&mut payload, &movie.tags, movie.header.swf_version)?;

    let file_length: u32 = count_as(SIGNATURE_SIZE + payload.byte_position(), "movie bytes")?;
    tracing::debug!(?compression, file_length, "encoded movie payload");

    stream.write_bytes(&compression.signature());
    stream.write_u8(movie.header.swf_version);
    stream.write_u32_le(file_length);
    match compression {
        CompressionMethod::None => stream.write_stream(&payload),
        CompressionMethod::Deflate => {
            let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
            encoder.write_all(&payload.into_bytes())?;
            let compressed = encoder.finish()?;
            tracing::debug!(compressed = compressed.len(), "deflated movie payload");
            stream.write_bytes(&compressed);
        }
        CompressionMethod::Lzma => return Err(EmitError::not_implemented("LZMA movie compression")),
    }
    Ok(())
}

fn write_header(stream: &mut WriteStream, value: &Header) -> EmitResult<()> {
    write_rect(stream, &value.frame_size)?;
    stream.write_ufixed8p8_le(value.frame_rate);
    stream.write_u16_le(value.frame_count);
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/emit/movie.rs"]
mod tests;
