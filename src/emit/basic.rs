use crate::foundation::error::EmitResult;
use crate::foundation::fixed::Sfixed16P16;
use crate::io::bit_count::{min_signed_bit_count, signed_bit_count};
use crate::io::stream::WriteStream;
use crate::model::basic::{ColorTransform, ColorTransformWithAlpha, Matrix, Rect, SRgb8, StraightSRgba8};

pub(crate) fn write_rect(stream: &mut WriteStream, value: &Rect) -> EmitResult<()> {
    let fields = [value.x_min, value.x_max, value.y_min, value.y_max];
    let nbits = min_signed_bit_count(fields.iter().map(|&v| i64::from(v)))?;
    stream.write_bits_unsigned(5, nbits)?;
    for field in fields {
        stream.write_bits_signed(nbits, field)?;
    }
    stream.align();
    Ok(())
}

/// Scale and rotate pairs are optional; the translation pair is always present.
pub(crate) fn write_matrix(stream: &mut WriteStream, value: &Matrix) -> EmitResult<()> {
    let has_scale = value.scale_x != Sfixed16P16::ONE || value.scale_y != Sfixed16P16::ONE;
    stream.write_bool_bit(has_scale);
    if has_scale {
        write_fixed_pair(stream, value.scale_x, value.scale_y)?;
    }

    let has_rotate = value.rotate_skew0 != Sfixed16P16::ZERO || value.rotate_skew1 != Sfixed16P16::ZERO;
    stream.write_bool_bit(has_rotate);
    if has_rotate {
        write_fixed_pair(stream, value.rotate_skew0, value.rotate_skew1)?;
    }

    let nbits = min_signed_bit_count([i64::from(value.translate_x), i64::from(value.translate_y)])?;
    stream.write_bits_unsigned(5, nbits)?;
    stream.write_bits_signed(nbits, value.translate_x)?;
    stream.write_bits_signed(nbits, value.translate_y)?;
    stream.align();
    Ok(())
}

fn write_fixed_pair(stream: &mut WriteStream, a: Sfixed16P16, b: Sfixed16P16) -> EmitResult<()> {
    let nbits = min_signed_bit_count([i64::from(a.epsilons), i64::from(b.epsilons)])?;
    stream.write_bits_unsigned(5, nbits)?;
    stream.write_bits_signed(nbits, a.epsilons)?;
    stream.write_bits_signed(nbits, b.epsilons)?;
    Ok(())
}

pub(crate) fn write_s_rgb8(stream: &mut WriteStream, value: SRgb8) {
    stream.write_bytes(&[value.r, value.g, value.b]);
}

pub(crate) fn write_straight_s_rgba8(stream: &mut WriteStream, value: StraightSRgba8) {
    stream.write_bytes(&[value.r, value.g, value.b, value.a]);
}

pub(crate) fn write_color_transform(stream: &mut WriteStream, value: &ColorTransform) -> EmitResult<()> {
    let mult = [value.red_mult, value.green_mult, value.blue_mult].map(|m| m.epsilons);
    let add = [value.red_add, value.green_add, value.blue_add];
    write_color_transform_fields(stream, &mult, &add)
}

pub(crate) fn write_color_transform_with_alpha(
    stream: &mut WriteStream,
    value: &ColorTransformWithAlpha,
) -> EmitResult<()> {
    let mult = [value.red_mult, value.green_mult, value.blue_mult, value.alpha_mult].map(|m| m.epsilons);
    let add = [value.red_add, value.green_add, value.blue_add, value.alpha_add];
    write_color_transform_fields(stream, &mult, &add)
}

/// Shared layout: presence bits, a 4-bit width over the written terms, multipliers, then offsets.
fn write_color_transform_fields(stream: &mut WriteStream, mult: &[i16], add: &[i16]) -> EmitResult<()> {
    let has_mult = mult.iter().any(|&m| m != 1 << 8);
    let has_add = add.iter().any(|&a| a != 0);

    let mut nbits = 0;
    if has_mult {
        nbits = nbits.max(min_signed_bit_count(mult.iter().map(|&v| i64::from(v)))?);
    }
    if has_add {
        nbits = nbits.max(min_signed_bit_count(add.iter().map(|&v| i64::from(v)))?);
    }

    stream.write_bool_bit(has_add);
    stream.write_bool_bit(has_mult);
    stream.write_bits_unsigned(4, nbits)?;
    if has_mult {
        for &m in mult {
            stream.write_bits_signed(nbits, i32::from(m))?;
        }
    }
    if has_add {
        for &a in add {
            stream.write_bits_signed(nbits, i32::from(a))?;
        }
    }
    stream.align();
    Ok(())
}

/// Width of a single signed field, with a floor for record formats that cannot encode zero bits.
pub(crate) fn signed_bits_at_least(floor: u32, values: &[i32]) -> EmitResult<u32> {
    let mut nbits = floor;
    for &v in values {
        nbits = nbits.max(signed_bit_count(i64::from(v))?);
    }
    Ok(nbits)
}

#[cfg(test)]
#[path = "../../tests/unit/emit/basic.rs"]
mod tests;
