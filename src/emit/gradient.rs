use crate::emit::basic::{write_s_rgb8, write_straight_s_rgba8};
use crate::foundation::error::{EmitError, EmitResult};
use crate::io::stream::WriteStream;
use crate::model::morph_shape::MorphGradient;
use crate::model::shape::{ColorSpace, Gradient, GradientSpread};

const MAX_STOPS: usize = 0x0f;

fn spread_code(value: GradientSpread) -> u8 {
    match value {
        GradientSpread::Pad => 0,
        GradientSpread::Reflect => 1,
        GradientSpread::Repeat => 2,
    }
}

fn color_space_code(value: ColorSpace) -> u8 {
    match value {
        ColorSpace::SRgb => 0,
        ColorSpace::LinearRgb => 1,
    }
}

fn gradient_flags(spread: GradientSpread, color_space: ColorSpace, count: usize) -> EmitResult<u8> {
    if count > MAX_STOPS {
        return Err(EmitError::inconsistent(format!(
            "gradient has {count} stops, at most {MAX_STOPS} are encodable"
        )));
    }
    Ok((spread_code(spread) << 6) | (color_space_code(color_space) << 4) | count as u8)
}

pub(crate) fn write_gradient(stream: &mut WriteStream, value: &Gradient, with_alpha: bool) -> EmitResult<()> {
    stream.write_u8(gradient_flags(value.spread, value.color_space, value.colors.len())?);
    for stop in &value.colors {
        stream.write_u8(stop.ratio);
        if with_alpha {
            write_straight_s_rgba8(stream, stop.color);
        } else {
            write_s_rgb8(stream, stop.color.rgb());
        }
    }
    Ok(())
}

/// Morph gradients always carry alpha; start and end stops are interleaved.
pub(crate) fn write_morph_gradient(stream: &mut WriteStream, value: &MorphGradient) -> EmitResult<()> {
    stream.write_u8(gradient_flags(value.spread, value.color_space, value.colors.len())?);
    for stop in &value.colors {
        stream.write_u8(stop.ratio);
        write_straight_s_rgba8(stream, stop.color);
        stream.write_u8(stop.morph_ratio);
        write_straight_s_rgba8(stream, stop.morph_color);
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/emit/gradient.rs"]
mod tests;
