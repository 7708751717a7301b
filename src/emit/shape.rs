use crate::emit::basic::{signed_bits_at_least, write_matrix, write_s_rgb8, write_straight_s_rgba8};
use crate::emit::gradient::write_gradient;
use crate::foundation::error::{EmitError, EmitResult};
use crate::io::bit_count::{min_signed_bit_count, unsigned_bit_count};
use crate::io::stream::WriteStream;
use crate::model::basic::Vector2D;
use crate::model::morph_shape::MorphLineStyle;
use crate::model::shape::{
    CapStyle, FillStyle, Glyph, JoinStyle, LineStyle, Shape, ShapeRecord, ShapeStyles, StyleChange,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum ShapeVersion {
    Shape1 = 1,
    Shape2 = 2,
    Shape3 = 3,
    Shape4 = 4,
}

impl ShapeVersion {
    pub(crate) fn tag_code(self) -> u16 {
        match self {
            Self::Shape1 => 2,
            Self::Shape2 => 22,
            Self::Shape3 => 32,
            Self::Shape4 => 83,
        }
    }

    fn extended_lists(self) -> bool {
        self >= Self::Shape2
    }

    fn with_alpha(self) -> bool {
        self >= Self::Shape3
    }
}

/// Lowest version able to encode every style table of `shape`, nested tables included.
pub(crate) fn min_shape_version(shape: &Shape) -> ShapeVersion {
    shape
        .records
        .iter()
        .filter_map(|record| match record {
            ShapeRecord::StyleChange(StyleChange {
                new_styles: Some(styles),
                ..
            }) => Some(styles_min_version(styles)),
            _ => None,
        })
        .fold(styles_min_version(&shape.initial_styles), Ord::max)
}

fn styles_min_version(styles: &ShapeStyles) -> ShapeVersion {
    let mut version = ShapeVersion::Shape1;
    if styles.fill.len() >= 0xff || styles.line.len() >= 0xff {
        version = ShapeVersion::Shape2;
    }
    for fill in &styles.fill {
        if !fill_is_opaque(fill) {
            version = version.max(ShapeVersion::Shape3);
        }
    }
    for line in &styles.line {
        if StrokeFlags::from(line).is_line_style2() {
            version = version.max(ShapeVersion::Shape4);
        } else if !fill_is_opaque(&line.fill) {
            version = version.max(ShapeVersion::Shape3);
        }
    }
    version
}

fn fill_is_opaque(fill: &FillStyle) -> bool {
    match fill {
        FillStyle::Solid(solid) => solid.color.is_opaque(),
        FillStyle::LinearGradient(g) | FillStyle::RadialGradient(g) => {
            g.gradient.colors.iter().all(|stop| stop.color.is_opaque())
        }
        FillStyle::FocalGradient(g) => g.gradient.colors.iter().all(|stop| stop.color.is_opaque()),
        FillStyle::Bitmap(_) => true,
    }
}

pub(crate) fn write_shape(stream: &mut WriteStream, value: &Shape, version: ShapeVersion) -> EmitResult<()> {
    let (fill_bits, line_bits) = write_shape_styles(stream, &value.initial_styles, version)?;
    write_shape_records(stream, &value.records, fill_bits, line_bits, version)?;
    stream.align();
    Ok(())
}

/// Glyphs reference a single implicit fill style and no line style.
pub(crate) fn write_glyph(stream: &mut WriteStream, value: &Glyph) -> EmitResult<()> {
    const FILL_BITS: u32 = 1;
    const LINE_BITS: u32 = 0;
    stream.write_bits_unsigned(4, FILL_BITS)?;
    stream.write_bits_unsigned(4, LINE_BITS)?;
    write_shape_records(stream, &value.records, FILL_BITS, LINE_BITS, ShapeVersion::Shape1)?;
    stream.align();
    Ok(())
}

/// Writes both style tables and the 4+4 bit index widths. Returns `(fill_bits, line_bits)`.
fn write_shape_styles(
    stream: &mut WriteStream,
    value: &ShapeStyles,
    version: ShapeVersion,
) -> EmitResult<(u32, u32)> {
    write_list_length(stream, value.fill.len(), version.extended_lists())?;
    for fill in &value.fill {
        write_fill_style(stream, fill, version.with_alpha())?;
    }
    write_list_length(stream, value.line.len(), version.extended_lists())?;
    for line in &value.line {
        if version < ShapeVersion::Shape4 {
            write_line_style1(stream, line, version.with_alpha())?;
        } else {
            write_line_style2(stream, line)?;
        }
    }
    style_index_bits(stream, value.fill.len(), value.line.len())
}

/// Style indices are 1-based (0 means "no style"), so the widest index is the table length.
pub(crate) fn style_index_bits(stream: &mut WriteStream, fills: usize, lines: usize) -> EmitResult<(u32, u32)> {
    let fill_bits = unsigned_bit_count(list_len_u32(fills)?)?;
    let line_bits = unsigned_bit_count(list_len_u32(lines)?)?;
    stream.write_bits_unsigned(4, fill_bits)?;
    stream.write_bits_unsigned(4, line_bits)?;
    Ok((fill_bits, line_bits))
}

fn list_len_u32(len: usize) -> EmitResult<u32> {
    u32::try_from(len).map_err(|_| EmitError::inconsistent(format!("style list too long: {len}")))
}

fn write_shape_records(
    stream: &mut WriteStream,
    records: &[ShapeRecord],
    mut fill_bits: u32,
    mut line_bits: u32,
    version: ShapeVersion,
) -> EmitResult<()> {
    for record in records {
        match record {
            ShapeRecord::Edge(edge) => {
                stream.write_bool_bit(true);
                write_edge_bits(stream, edge.delta, edge.control_delta)?;
            }
            ShapeRecord::StyleChange(change) => {
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
                    (fill_bits, line_bits) = write_shape_styles(stream, styles, version)?;
                }
            }
        }
    }
    write_end_of_records(stream)
}

#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct StyleChangeFlags {
    pub(crate) move_to: bool,
    pub(crate) left_fill: bool,
    pub(crate) right_fill: bool,
    pub(crate) line_style: bool,
    pub(crate) new_styles: bool,
}

impl StyleChangeFlags {
    /// All-clear flags would read back as the end-of-shape record.
    pub(crate) fn write(self, stream: &mut WriteStream) -> EmitResult<()> {
        let bits = u32::from(self.move_to)
            | u32::from(self.left_fill) << 1
            | u32::from(self.right_fill) << 2
            | u32::from(self.line_style) << 3
            | u32::from(self.new_styles) << 4;
        if bits == 0 {
            return Err(EmitError::inconsistent("style change record has no fields"));
        }
        stream.write_bits_unsigned(5, bits)
    }
}

pub(crate) fn write_style_indices(
    stream: &mut WriteStream,
    left_fill: Option<u32>,
    right_fill: Option<u32>,
    line_style: Option<u32>,
    fill_bits: u32,
    line_bits: u32,
) -> EmitResult<()> {
    if let Some(left) = left_fill {
        stream.write_bits_unsigned(fill_bits, left)?;
    }
    if let Some(right) = right_fill {
        stream.write_bits_unsigned(fill_bits, right)?;
    }
    if let Some(line) = line_style {
        stream.write_bits_unsigned(line_bits, line)?;
    }
    Ok(())
}

pub(crate) fn write_move_to(stream: &mut WriteStream, value: Vector2D) -> EmitResult<()> {
    let nbits = min_signed_bit_count([i64::from(value.x), i64::from(value.y)])?;
    stream.write_bits_unsigned(5, nbits)?;
    stream.write_bits_signed(nbits, value.x)?;
    stream.write_bits_signed(nbits, value.y)
}

pub(crate) fn write_end_of_records(stream: &mut WriteStream) -> EmitResult<()> {
    stream.write_bits_unsigned(6, 0)
}

/// Edge body after the leading "is edge" bit.
///
/// `delta` is the total displacement; a curve is split into its control and anchor halves.
pub(crate) fn write_edge_bits(
    stream: &mut WriteStream,
    delta: Vector2D,
    control_delta: Option<Vector2D>,
) -> EmitResult<()> {
    match control_delta {
        Some(control) => {
            let anchor = Vector2D::new(delta.x - control.x, delta.y - control.y);
            let nbits = signed_bits_at_least(2, &[control.x, control.y, anchor.x, anchor.y])?;
            stream.write_bool_bit(false);
            stream.write_bits_unsigned(4, nbits - 2)?;
            stream.write_bits_signed(nbits, control.x)?;
            stream.write_bits_signed(nbits, control.y)?;
            stream.write_bits_signed(nbits, anchor.x)?;
            stream.write_bits_signed(nbits, anchor.y)?;
        }
        None => {
            let nbits = signed_bits_at_least(2, &[delta.x, delta.y])?;
            stream.write_bool_bit(true);
            stream.write_bits_unsigned(4, nbits - 2)?;
            let is_general = delta.x != 0 && delta.y != 0;
            stream.write_bool_bit(is_general);
            if is_general {
                stream.write_bits_signed(nbits, delta.x)?;
                stream.write_bits_signed(nbits, delta.y)?;
            } else if delta.x == 0 {
                stream.write_bool_bit(true);
                stream.write_bits_signed(nbits, delta.y)?;
            } else {
                stream.write_bool_bit(false);
                stream.write_bits_signed(nbits, delta.x)?;
            }
        }
    }
    Ok(())
}

/// Style list count: one byte, or `0xFF` followed by a `u16` when extended lists are allowed.
pub(crate) fn write_list_length(stream: &mut WriteStream, len: usize, extended: bool) -> EmitResult<()> {
    if len < 0xff {
        stream.write_u8(len as u8);
        return Ok(());
    }
    if !extended {
        return Err(EmitError::inconsistent(format!(
            "style list of {len} entries needs an extended count"
        )));
    }
    let len = u16::try_from(len)
        .map_err(|_| EmitError::inconsistent(format!("style list too long: {len}")))?;
    stream.write_u8(0xff);
    stream.write_u16_le(len);
    Ok(())
}

pub(crate) fn bitmap_fill_code(repeating: bool, smoothed: bool) -> u8 {
    0x40 | u8::from(!repeating) | u8::from(!smoothed) << 1
}

pub(crate) fn write_fill_style(stream: &mut WriteStream, value: &FillStyle, with_alpha: bool) -> EmitResult<()> {
    match value {
        FillStyle::Bitmap(bitmap) => {
            stream.write_u8(bitmap_fill_code(bitmap.repeating, bitmap.smoothed));
            stream.write_u16_le(bitmap.bitmap_id);
            write_matrix(stream, &bitmap.matrix)?;
        }
        FillStyle::FocalGradient(focal) => {
            stream.write_u8(0x13);
            write_matrix(stream, &focal.matrix)?;
            write_gradient(stream, &focal.gradient, with_alpha)?;
            stream.write_sfixed8p8_le(focal.focal_point);
        }
        FillStyle::LinearGradient(linear) => {
            stream.write_u8(0x10);
            write_matrix(stream, &linear.matrix)?;
            write_gradient(stream, &linear.gradient, with_alpha)?;
        }
        FillStyle::RadialGradient(radial) => {
            stream.write_u8(0x12);
            write_matrix(stream, &radial.matrix)?;
            write_gradient(stream, &radial.gradient, with_alpha)?;
        }
        FillStyle::Solid(solid) => {
            stream.write_u8(0x00);
            if with_alpha {
                write_straight_s_rgba8(stream, solid.color);
            } else {
                write_s_rgb8(stream, solid.color.rgb());
            }
        }
    }
    Ok(())
}

fn write_line_style1(stream: &mut WriteStream, value: &LineStyle, with_alpha: bool) -> EmitResult<()> {
    let FillStyle::Solid(solid) = &value.fill else {
        return Err(EmitError::inconsistent("line style 1 requires a solid fill"));
    };
    stream.write_u16_le(value.width);
    if with_alpha {
        write_straight_s_rgba8(stream, solid.color);
    } else {
        write_s_rgb8(stream, solid.color.rgb());
    }
    Ok(())
}

fn write_line_style2(stream: &mut WriteStream, value: &LineStyle) -> EmitResult<()> {
    stream.write_u16_le(value.width);
    StrokeFlags::from(value).write(stream);
    match &value.fill {
        FillStyle::Solid(solid) => write_straight_s_rgba8(stream, solid.color),
        fill => write_fill_style(stream, fill, true)?,
    }
    Ok(())
}

/// Stroke options shared by shape and morph line styles.
#[derive(Clone, Copy, Debug)]
pub(crate) struct StrokeFlags {
    pub(crate) start_cap: CapStyle,
    pub(crate) end_cap: CapStyle,
    pub(crate) join: JoinStyle,
    pub(crate) no_h_scale: bool,
    pub(crate) no_v_scale: bool,
    pub(crate) no_close: bool,
    pub(crate) pixel_hinting: bool,
    pub(crate) has_fill: bool,
}

impl StrokeFlags {
    /// True when the line style 1 encoding would lose information.
    pub(crate) fn is_line_style2(self) -> bool {
        self.start_cap != CapStyle::Round
            || self.end_cap != CapStyle::Round
            || self.join != JoinStyle::Round
            || self.no_h_scale
            || self.no_v_scale
            || self.no_close
            || self.pixel_hinting
            || self.has_fill
    }

    pub(crate) fn bits(self) -> u16 {
        u16::from(self.pixel_hinting)
            | u16::from(self.no_v_scale) << 1
            | u16::from(self.no_h_scale) << 2
            | u16::from(self.has_fill) << 3
            | u16::from(join_code(self.join)) << 4
            | u16::from(cap_code(self.start_cap)) << 6
            | u16::from(cap_code(self.end_cap)) << 8
            | u16::from(self.no_close) << 10
    }

    /// Flags word, then the miter limit for miter joins.
    pub(crate) fn write(self, stream: &mut WriteStream) {
        stream.write_u16_le(self.bits());
        if let JoinStyle::Miter { limit } = self.join {
            stream.write_sfixed8p8_le(limit);
        }
    }
}

impl From<&LineStyle> for StrokeFlags {
    fn from(value: &LineStyle) -> Self {
        Self {
            start_cap: value.start_cap,
            end_cap: value.end_cap,
            join: value.join,
            no_h_scale: value.no_h_scale,
            no_v_scale: value.no_v_scale,
            no_close: value.no_close,
            pixel_hinting: value.pixel_hinting,
            has_fill: !matches!(value.fill, FillStyle::Solid(_)),
        }
    }
}

impl From<&MorphLineStyle> for StrokeFlags {
    fn from(value: &MorphLineStyle) -> Self {
        use crate::model::morph_shape::MorphFillStyle;
        Self {
            start_cap: value.start_cap,
            end_cap: value.end_cap,
            join: value.join,
            no_h_scale: value.no_h_scale,
            no_v_scale: value.no_v_scale,
            no_close: value.no_close,
            pixel_hinting: value.pixel_hinting,
            has_fill: !matches!(value.fill, MorphFillStyle::Solid(_)),
        }
    }
}

fn join_code(value: JoinStyle) -> u8 {
    match value {
        JoinStyle::Round => 0,
        JoinStyle::Bevel => 1,
        JoinStyle::Miter { .. } => 2,
    }
}

fn cap_code(value: CapStyle) -> u8 {
    match value {
        CapStyle::Round => 0,
        CapStyle::None => 1,
        CapStyle::Square => 2,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/emit/shape.rs"]
mod tests;
