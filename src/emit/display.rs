use crate::emit::avm1::write_action_string;
use crate::emit::basic::write_straight_s_rgba8;
use crate::foundation::error::{EmitError, EmitResult, count_as};
use crate::foundation::fixed::{Sfixed8P8, Sfixed16P16};
use crate::io::stream::WriteStream;
use crate::model::display::{BlendMode, ClipAction, ClipEventFlags, Filter, FilterColorStop, GradientFilter};

pub(crate) fn blend_mode_code(value: BlendMode) -> u8 {
    match value {
        BlendMode::Normal => 0,
        BlendMode::Layer => 2,
        BlendMode::Multiply => 3,
        BlendMode::Screen => 4,
        BlendMode::Lighten => 5,
        BlendMode::Darken => 6,
        BlendMode::Difference => 7,
        BlendMode::Add => 8,
        BlendMode::Subtract => 9,
        BlendMode::Invert => 10,
        BlendMode::Alpha => 11,
        BlendMode::Erase => 12,
        BlendMode::Overlay => 13,
        BlendMode::Hardlight => 14,
    }
}

pub(crate) fn write_blend_mode(stream: &mut WriteStream, value: BlendMode) {
    stream.write_u8(blend_mode_code(value));
}

pub(crate) fn write_filter_list(stream: &mut WriteStream, filters: &[Filter]) -> EmitResult<()> {
    stream.write_u8(count_as(filters.len(), "filters")?);
    for filter in filters {
        write_filter(stream, filter)?;
    }
    Ok(())
}

pub(crate) fn write_filter(stream: &mut WriteStream, value: &Filter) -> EmitResult<()> {
    match value {
        Filter::DropShadow(f) => {
            stream.write_u8(0);
            write_straight_s_rgba8(stream, f.color);
            write_blur_pair(stream, f.blur_x, f.blur_y);
            stream.write_sfixed16p16_le(f.angle);
            stream.write_sfixed16p16_le(f.distance);
            stream.write_sfixed8p8_le(f.strength);
            stream.write_u8(shadow_flags(f.inner, f.knockout, f.composite_source, f.passes)?);
        }
        Filter::Blur(f) => {
            stream.write_u8(1);
            write_blur_pair(stream, f.blur_x, f.blur_y);
            stream.write_u8(checked_passes(f.passes, 5)? << 3);
        }
        Filter::Glow(f) => {
            stream.write_u8(2);
            write_straight_s_rgba8(stream, f.color);
            write_blur_pair(stream, f.blur_x, f.blur_y);
            stream.write_sfixed8p8_le(f.strength);
            stream.write_u8(shadow_flags(f.inner, f.knockout, f.composite_source, f.passes)?);
        }
        Filter::Bevel(f) => {
            stream.write_u8(3);
            write_straight_s_rgba8(stream, f.shadow_color);
            write_straight_s_rgba8(stream, f.highlight_color);
            write_blur_pair(stream, f.blur_x, f.blur_y);
            write_bevel_tail(
                stream,
                f.angle,
                f.distance,
                f.strength,
                bevel_flags(f.inner, f.knockout, f.composite_source, f.on_top, f.passes)?,
            );
        }
        Filter::GradientGlow(f) => {
            stream.write_u8(4);
            write_gradient_filter(stream, f)?;
        }
        Filter::Convolution(f) => {
            stream.write_u8(5);
            let expected = usize::from(f.matrix_width) * usize::from(f.matrix_height);
            if f.matrix.len() != expected {
                return Err(EmitError::inconsistent(format!(
                    "convolution matrix has {} coefficients, expected {expected}",
                    f.matrix.len()
                )));
            }
            stream.write_u8(f.matrix_width);
            stream.write_u8(f.matrix_height);
            stream.write_f32_le(f.divisor);
            stream.write_f32_le(f.bias);
            for &coefficient in &f.matrix {
                stream.write_f32_le(coefficient);
            }
            write_straight_s_rgba8(stream, f.default_color);
            stream.write_u8(u8::from(f.preserve_alpha) | u8::from(f.clamp) << 1);
        }
        Filter::ColorMatrix(f) => {
            stream.write_u8(6);
            for &coefficient in &f.matrix {
                stream.write_f32_le(coefficient);
            }
        }
        Filter::GradientBevel(f) => {
            stream.write_u8(7);
            write_gradient_filter(stream, f)?;
        }
    }
    Ok(())
}

fn write_blur_pair(stream: &mut WriteStream, blur_x: Sfixed16P16, blur_y: Sfixed16P16) {
    stream.write_sfixed16p16_le(blur_x);
    stream.write_sfixed16p16_le(blur_y);
}

fn write_bevel_tail(
    stream: &mut WriteStream,
    angle: Sfixed16P16,
    distance: Sfixed16P16,
    strength: Sfixed8P8,
    flags: u8,
) {
    stream.write_sfixed16p16_le(angle);
    stream.write_sfixed16p16_le(distance);
    stream.write_sfixed8p8_le(strength);
    stream.write_u8(flags);
}

/// Colors first, then ratios, each list prefixed by one shared count.
fn write_gradient_filter(stream: &mut WriteStream, value: &GradientFilter) -> EmitResult<()> {
    stream.write_u8(count_as(value.gradient.len(), "gradient filter stops")?);
    for &FilterColorStop { color, .. } in &value.gradient {
        write_straight_s_rgba8(stream, color);
    }
    for stop in &value.gradient {
        stream.write_u8(stop.ratio);
    }
    write_blur_pair(stream, value.blur_x, value.blur_y);
    write_bevel_tail(
        stream,
        value.angle,
        value.distance,
        value.strength,
        bevel_flags(value.inner, value.knockout, value.composite_source, value.on_top, value.passes)?,
    );
    Ok(())
}

/// Pass counts share their byte with flags and must fit in `width` bits.
fn checked_passes(passes: u8, width: u32) -> EmitResult<u8> {
    if u32::from(passes) >> width != 0 {
        return Err(EmitError::range(format!("filter passes {passes} do not fit in {width} bits")));
    }
    Ok(passes)
}

fn shadow_flags(inner: bool, knockout: bool, composite_source: bool, passes: u8) -> EmitResult<u8> {
    Ok(checked_passes(passes, 5)?
        | u8::from(composite_source) << 5
        | u8::from(knockout) << 6
        | u8::from(inner) << 7)
}

fn bevel_flags(inner: bool, knockout: bool, composite_source: bool, on_top: bool, passes: u8) -> EmitResult<u8> {
    Ok(checked_passes(passes, 4)? | u8::from(on_top) << 4 | shadow_flags(inner, knockout, composite_source, 0)?)
}

/// Clip handler list: reserved word, event union, handlers, then a zero event word.
///
/// Events are 16 bits wide before SWF 6 and 32 bits from SWF 6 on.
pub(crate) fn write_clip_actions(stream: &mut WriteStream, value: &[ClipAction], swf_version: u8) -> EmitResult<()> {
    let extended = swf_version >= 6;
    stream.write_u16_le(0);

    let union = value
        .iter()
        .fold(ClipEventFlags::default(), |acc, handler| acc.union(handler.events));
    write_clip_event_flags(stream, &union, extended);

    for handler in value {
        write_clip_event_flags(stream, &handler.events, extended);
        let mut body = WriteStream::new();
        if handler.events.key_press {
            let key_code = handler
                .key_code
                .ok_or_else(|| EmitError::missing_field("clip_action.key_code"))?;
            body.write_u8(key_code);
        }
        write_action_string(&mut body, &handler.actions)?;
        stream.write_u32_le(count_as(body.byte_position(), "clip action bytes")?);
        stream.write_stream(&body);
    }

    if extended {
        stream.write_u32_le(0);
    } else {
        stream.write_u16_le(0);
    }
    Ok(())
}

fn write_clip_event_flags(stream: &mut WriteStream, value: &ClipEventFlags, extended: bool) {
    let flags = value
        .bits()
        .iter()
        .enumerate()
        .fold(0u32, |acc, (bit, &set)| acc | u32::from(set) << bit);
    if extended {
        stream.write_u32_le(flags);
    } else {
        stream.write_u16_le((flags & 0xffff) as u16);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/emit/display.rs"]
mod tests;
