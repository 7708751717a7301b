use crate::foundation::error::{EmitError, EmitResult, count_as};
use crate::io::stream::WriteStream;
use crate::model::sound::{AudioCodingFormat, SoundInfo, SoundType};

pub(crate) fn audio_coding_format_code(value: AudioCodingFormat) -> u8 {
    match value {
        AudioCodingFormat::UncompressedNativeEndian => 0,
        AudioCodingFormat::Adpcm => 1,
        AudioCodingFormat::Mp3 => 2,
        AudioCodingFormat::UncompressedLittleEndian => 3,
        AudioCodingFormat::Nellymoser16 => 4,
        AudioCodingFormat::Nellymoser8 => 5,
        AudioCodingFormat::Nellymoser => 6,
        AudioCodingFormat::Speex => 11,
    }
}

/// Nominal rates are accepted alongside the exact ones (5512, 11025, ...).
pub(crate) fn sound_rate_code(hz: u32) -> EmitResult<u8> {
    match hz {
        5500 | 5512 => Ok(0),
        11000 | 11025 => Ok(1),
        22000 | 22050 => Ok(2),
        44000 | 44100 => Ok(3),
        other => Err(EmitError::unexpected_variant(format!("sound rate {other}"))),
    }
}

pub(crate) fn sound_size_bit(bits: u8) -> EmitResult<u8> {
    match bits {
        8 => Ok(0),
        16 => Ok(1),
        other => Err(EmitError::unexpected_variant(format!("sound size {other}"))),
    }
}

/// Low nibble shared by DefineSound and both SoundStreamHead bytes: `rate << 2 | size << 1 | type`.
pub(crate) fn sound_format_bits(rate: u32, size: u8, sound_type: SoundType) -> EmitResult<u8> {
    Ok(sound_rate_code(rate)? << 2 | sound_size_bit(size)? << 1 | u8::from(sound_type == SoundType::Stereo))
}

pub(crate) fn write_sound_info(stream: &mut WriteStream, value: &SoundInfo) -> EmitResult<()> {
    let flags = u8::from(value.in_point.is_some())
        | u8::from(value.out_point.is_some()) << 1
        | u8::from(value.loop_count.is_some()) << 2
        | u8::from(value.envelope_records.is_some()) << 3
        | u8::from(value.sync_no_multiple) << 4
        | u8::from(value.sync_stop) << 5;
    stream.write_u8(flags);

    if let Some(in_point) = value.in_point {
        stream.write_u32_le(in_point);
    }
    if let Some(out_point) = value.out_point {
        stream.write_u32_le(out_point);
    }
    if let Some(loop_count) = value.loop_count {
        stream.write_u16_le(loop_count);
    }
    if let Some(envelope) = &value.envelope_records {
        stream.write_u8(count_as(envelope.len(), "sound envelope records")?);
        for record in envelope {
            stream.write_u32_le(record.pos44);
            stream.write_u16_le(record.left_level);
            stream.write_u16_le(record.right_level);
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/emit/sound.rs"]
mod tests;
