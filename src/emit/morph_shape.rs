use crate::emit::basic::{write_matrix, write_straight_s_rgba8};
use crate::emit::gradient::write_morph_gradient;
use crate::emit::shape::{
    StrokeFlags, StyleChangeFlags, bitmap_fill_code, style_index_bits, write_edge_bits, write_end_of_records,
    write_list_length, write_move_to, write_style_indices,
};
use crate::foundation::error::{EmitError, EmitResult};
use crate::io::stream::WriteStream;
use crate::model::morph_shape::{
    MorphFillStyle, MorphLineStyle, MorphShape, MorphShapeRecord, MorphShapeStyles,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum MorphShapeVersion {
    MorphShape1 = 1,
    MorphShape2 = 2,
}

impl MorphShapeVersion {
    pub(crate) fn tag_code(self) -> u16 {
        match self {
            Self::MorphShape1 => 46,
            Self::MorphShape2 => 84,
        }
    }
}

/// Writes the end-edges offset, then the start outline and the end outline.
pub(crate) fn write_morph_shape(
    stream: &mut WriteStream,
    value: &MorphShape,
    version: MorphShapeVersion,
) -> EmitResult<()> {
    let mut start = WriteStream::new();
    let (fill_bits, line_bits) = write_morph_shape_styles(&mut start, &value.initial_styles, version)?;
    write_start_records(&mut start, &value.records, fill_bits, line_bits, version)?;
    start.align();

    let mut end = WriteStream::new();
    // The end outline never changes styles.
    end.write_bits_unsigned(4, 0)?;
    end.write_bits_unsigned(4, 0)?;
    write_end_records(&mut end, &value.records)?;
    end.align();

    let offset = u32::try_from(start.byte_position())
        .map_err(|_| EmitError::inconsistent("morph shape start outline exceeds u32 bytes"))?;
    stream.write_u32_le(offset);
    stream.write_stream(&start);
    stream.write_stream(&end);
    Ok(())
}

fn write_morph_shape_styles(
    stream: &mut WriteStream,
    value: &MorphShapeStyles,
    version: MorphShapeVersion,
) -> EmitResult<(u32, u32)> {
    write_list_length(stream, value.fill.len(), true)?;
    for fill in &value.fill {
        write_morph_fill_style(stream, fill)?;
    }
    write_list_length(stream, value.line.len(), true)?;
    for line in &value.line {
        match version {
            MorphShapeVersion::MorphShape1 => write_morph_line_style1(stream, line)?,
            MorphShapeVersion::MorphShape2 => write_morph_line_style2(stream, line)?,
        }
    }
    style_index_bits(stream, value.fill.len(), value.line.len())
}

fn write_start_records(
    stream: &mut WriteStream,
    records: &[MorphShapeRecord],
    mut fill_bits: u32,
    mut line_bits: u32,
    version: MorphShapeVersion,
) -> EmitResult<()> {
    for record in records {
        match record {
            MorphShapeRecord::Edge(edge) => {
                stream.write_bool_bit(true);
                write_edge_bits(stream, edge.delta, edge.control_delta)?;
            }
            MorphShapeRecord::StyleChange(change) => {
                stream.write_bool_bit(false);
                StyleChangeFlags {
                    move_to: change.move_to.is_some(),
                    left_fill: change.left_fill.is_some(),
                    right_fill: change.right_fill.is_some(),
                    line_style: change.line_style.is_some(),
                    new_styles: change.new_styles.is_some(),
                }
                .write(stream)?;
                if let Some(move_to) = change.move_to {
                    write_move_to(stream, move_to)?;
                }
                write_style_indices(
                    stream,
                    change.left_fill,
                    change.right_fill,
                    change.line_style,
                    fill_bits,
                    line_bits,
                )?;
                if let Some(styles) = &change.new_styles {
                    (fill_bits, line_bits) = write_morph_shape_styles(stream, styles, version)?;
                }
            }
        }
    }
    write_end_of_records(stream)
}

/// Replays the record list with end-state geometry; only move-to style changes survive.
fn write_end_records(stream: &mut WriteStream, records: &[MorphShapeRecord]) -> EmitResult<()> {
    for record in records {
        match record {
            MorphShapeRecord::Edge(edge) => {
                stream.write_bool_bit(true);
                write_edge_bits(stream, edge.morph_delta, edge.morph_control_delta)?;
            }
            MorphShapeRecord::StyleChange(change) => {
                if change.move_to.is_none() {
                    continue;
                }
                let morph_move_to = change
                    .morph_move_to
                    .ok_or_else(|| EmitError::missing_field("morph_move_to"))?;
                stream.write_bool_bit(false);
                StyleChangeFlags {
                    move_to: true,
                    ..StyleChangeFlags::default()
                }
                .write(stream)?;
                write_move_to(stream, morph_move_to)?;
            }
        }
    }
    write_end_of_records(stream)
}

fn write_morph_fill_style(stream: &mut WriteStream, value: &MorphFillStyle) -> EmitResult<()> {
    match value {
        MorphFillStyle::Bitmap(bitmap) => {
            stream.write_u8(bitmap_fill_code(bitmap.repeating, bitmap.smoothed));
            stream.write_u16_le(bitmap.bitmap_id);
            write_matrix(stream, &bitmap.matrix)?;
            write_matrix(stream, &bitmap.morph_matrix)?;
        }
        MorphFillStyle::FocalGradient(focal) => {
            stream.write_u8(0x13);
            write_matrix(stream, &focal.matrix)?;
            write_matrix(stream, &focal.morph_matrix)?;
            write_morph_gradient(stream, &focal.gradient)?;
            stream.write_sfixed8p8_le(focal.focal_point);
            stream.write_sfixed8p8_le(focal.morph_focal_point);
        }
        MorphFillStyle::LinearGradient(linear) => {
            stream.write_u8(0x10);
            write_matrix(stream, &linear.matrix)?;
            write_matrix(stream, &linear.morph_matrix)?;
            write_morph_gradient(stream, &linear.gradient)?;
        }
        MorphFillStyle::RadialGradient(radial) => {
            stream.write_u8(0x12);
            write_matrix(stream, &radial.matrix)?;
            write_matrix(stream, &radial.morph_matrix)?;
            write_morph_gradient(stream, &radial.gradient)?;
        }
        MorphFillStyle::Solid(solid) => {
            stream.write_u8(0x00);
            write_straight_s_rgba8(stream, solid.color);
            write_straight_s_rgba8(stream, solid.morph_color);
        }
    }
    Ok(())
}

fn write_morph_line_style1(stream: &mut WriteStream, value: &MorphLineStyle) -> EmitResult<()> {
    let MorphFillStyle::Solid(solid) = &value.fill else {
        return Err(EmitError::inconsistent("morph line style 1 requires a solid fill"));
    };
    stream.write_u16_le(value.width);
    stream.write_u16_le(value.morph_width);
    write_straight_s_rgba8(stream, solid.color);
    write_straight_s_rgba8(stream, solid.morph_color);
    Ok(())
}

fn write_morph_line_style2(stream: &mut WriteStream, value: &MorphLineStyle) -> EmitResult<()> {
    stream.write_u16_le(value.width);
    stream.write_u16_le(value.morph_width);
    StrokeFlags::from(value).write(stream);
    match &value.fill {
        MorphFillStyle::Solid(solid) => {
            write_straight_s_rgba8(stream, solid.color);
            write_straight_s_rgba8(stream, solid.morph_color);
        }
        fill => write_morph_fill_style(stream, fill)?,
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/emit/morph_shape.rs"]
mod tests;
