//! Static text, dynamic text fields and font definitions.

use crate::emit::basic::{write_matrix, write_rect, write_s_rgb8, write_straight_s_rgba8};
use crate::emit::shape::write_glyph;
use crate::foundation::error::{EmitError, EmitResult, count_as};
use crate::io::bit_count::{signed_bit_count, unsigned_bit_count};
use crate::io::stream::WriteStream;
use crate::model::shape::Glyph;
use crate::model::tags::{
    CsmTextSettings, DefineDynamicText, DefineFont, DefineFont4, DefineFontAlignZones, DefineFontInfo,
    DefineFontName, DefineGlyphFont, DefineText,
};
use crate::model::text::{
    CsmTableHint, FontAlignmentZone, FontLayout, GridFitting, LanguageCode, TextAlignment, TextRecord,
    TextRenderer,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum TextVersion {
    Text1 = 1,
    Text2 = 2,
}

impl TextVersion {
    pub(crate) fn tag_code(self) -> u16 {
        match self {
            Self::Text1 => 11,
            Self::Text2 => 33,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum FontVersion {
    Font2,
    Font3,
}

impl FontVersion {
    pub(crate) fn tag_code(self) -> u16 {
        match self {
            Self::Font2 => 48,
            Self::Font3 => 75,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum FontInfoVersion {
    FontInfo1,
    FontInfo2,
}

impl FontInfoVersion {
    pub(crate) fn tag_code(self) -> u16 {
        match self {
            Self::FontInfo1 => 13,
            Self::FontInfo2 => 62,
        }
    }
}

pub(crate) fn language_code(value: LanguageCode) -> u8 {
    match value {
        LanguageCode::Auto => 0,
        LanguageCode::Latin => 1,
        LanguageCode::Japanese => 2,
        LanguageCode::Korean => 3,
        LanguageCode::SimplifiedChinese => 4,
        LanguageCode::TraditionalChinese => 5,
    }
}

fn grid_fitting_code(value: GridFitting) -> u8 {
    match value {
        GridFitting::None => 0,
        GridFitting::Pixel => 1,
        GridFitting::SubPixel => 2,
    }
}

fn text_renderer_code(value: TextRenderer) -> u8 {
    match value {
        TextRenderer::Normal => 0,
        TextRenderer::Advanced => 1,
    }
}

fn csm_table_hint_code(value: CsmTableHint) -> u8 {
    match value {
        CsmTableHint::Thin => 0,
        CsmTableHint::Medium => 1,
        CsmTableHint::Thick => 2,
    }
}

fn text_alignment_code(value: TextAlignment) -> u8 {
    match value {
        TextAlignment::Left => 0,
        TextAlignment::Right => 1,
        TextAlignment::Center => 2,
        TextAlignment::Justify => 3,
    }
}

/// Glyph entry widths shared by every record of a DefineText body.
fn glyph_entry_bits(records: &[TextRecord]) -> EmitResult<(u32, u32)> {
    let mut index_bits = 0;
    let mut advance_bits = 0;
    for entry in records.iter().flat_map(|record| &record.entries) {
        index_bits = index_bits.max(unsigned_bit_count(entry.index)?);
        advance_bits = advance_bits.max(signed_bit_count(i64::from(entry.advance))?);
    }
    Ok((index_bits, advance_bits))
}

pub(crate) fn write_define_text(stream: &mut WriteStream, value: &DefineText) -> EmitResult<TextVersion> {
    let has_alpha = value
        .records
        .iter()
        .any(|record| record.color.is_some_and(|color| !color.is_opaque()));
    let version = if has_alpha {
        TextVersion::Text2
    } else {
        TextVersion::Text1
    };

    stream.write_u16_le(value.id);
    write_rect(stream, &value.bounds)?;
    write_matrix(stream, &value.matrix)?;
    let (index_bits, advance_bits) = glyph_entry_bits(&value.records)?;
    // Bit counts never exceed 32.
    stream.write_u8(index_bits as u8);
    stream.write_u8(advance_bits as u8);
    for record in &value.records {
        write_text_record(stream, record, has_alpha, index_bits, advance_bits)?;
    }
    stream.write_u8(0);
    Ok(version)
}

pub(crate) fn write_text_record(
    stream: &mut WriteStream,
    value: &TextRecord,
    with_alpha: bool,
    index_bits: u32,
    advance_bits: u32,
) -> EmitResult<()> {
    let font = value.font_id.zip(value.font_size);
    let has_offset_x = value.offset_x != 0;
    let has_offset_y = value.offset_y != 0;

    // The high bit marks a text record; a zero byte ends the list.
    stream.write_u8(
        0x80 | u8::from(font.is_some()) << 3
            | u8::from(value.color.is_some()) << 2
            | u8::from(has_offset_y) << 1
            | u8::from(has_offset_x),
    );
    if let Some((font_id, _)) = font {
        stream.write_u16_le(font_id);
    }
    if let Some(color) = value.color {
        if with_alpha {
            write_straight_s_rgba8(stream, color);
        } else {
            write_s_rgb8(stream, color.rgb());
        }
    }
    if has_offset_x {
        stream.write_i16_le(value.offset_x);
    }
    if has_offset_y {
        stream.write_i16_le(value.offset_y);
    }
    if let Some((_, font_size)) = font {
        stream.write_u16_le(font_size);
    }

    stream.write_u8(count_as(value.entries.len(), "glyph entries")?);
    for entry in &value.entries {
        stream.write_bits_unsigned(index_bits, entry.index)?;
        stream.write_bits_signed(advance_bits, entry.advance)?;
    }
    stream.align();
    Ok(())
}

pub(crate) fn write_define_dynamic_text(stream: &mut WriteStream, value: &DefineDynamicText) -> EmitResult<()> {
    stream.write_u16_le(value.id);
    write_rect(stream, &value.bounds)?;

    // A font reference is only meaningful with a size.
    let font_id = value.font_size.and(value.font_id);
    let font_class = value.font_size.and(value.font_class.as_deref());
    let has_font = font_id.is_some();
    let has_font_class = font_class.is_some();
    let has_layout = value.align != TextAlignment::Left
        || value.margin_left != 0
        || value.margin_right != 0
        || value.indent != 0
        || value.leading != 0;

    let flags = u16::from(has_font)
        | u16::from(value.max_length.is_some()) << 1
        | u16::from(value.color.is_some()) << 2
        | u16::from(value.readonly) << 3
        | u16::from(value.password) << 4
        | u16::from(value.multiline) << 5
        | u16::from(value.word_wrap) << 6
        | u16::from(value.text.is_some()) << 7
        | u16::from(value.use_glyph_font) << 8
        | u16::from(value.html) << 9
        | u16::from(value.was_static) << 10
        | u16::from(value.border) << 11
        | u16::from(value.no_select) << 12
        | u16::from(has_layout) << 13
        | u16::from(value.auto_size) << 14
        | u16::from(has_font_class) << 15;
    stream.write_u16_le(flags);

    if let Some(font_id) = font_id {
        stream.write_u16_le(font_id);
    }
    if let Some(font_class) = font_class {
        stream.write_c_string(font_class);
    }
    if let Some(font_size) = value.font_size.filter(|_| has_font || has_font_class) {
        stream.write_u16_le(font_size);
    }
    if let Some(color) = value.color {
        write_straight_s_rgba8(stream, color);
    }
    if let Some(max_length) = value.max_length {
        stream.write_u16_le(max_length);
    }
    if has_layout {
        stream.write_u8(text_alignment_code(value.align));
        stream.write_u16_le(value.margin_left);
        stream.write_u16_le(value.margin_right);
        stream.write_u16_le(value.indent);
        stream.write_i16_le(value.leading);
    }
    stream.write_c_string(value.variable_name.as_deref().unwrap_or(""));
    if let Some(text) = &value.text {
        stream.write_c_string(text);
    }
    Ok(())
}

pub(crate) fn write_csm_text_settings(stream: &mut WriteStream, value: &CsmTextSettings) {
    stream.write_u16_le(value.text_id);
    stream.write_u8(grid_fitting_code(value.fitting) << 3 | text_renderer_code(value.renderer) << 6);
    stream.write_f32_le(value.thickness);
    stream.write_f32_le(value.sharpness);
    stream.write_u8(0);
}

/// Length-prefixed NUL-terminated font name.
fn write_font_name(stream: &mut WriteStream, name: &str) -> EmitResult<()> {
    stream.write_u8(count_as(name.len() + 1, "font name bytes")?);
    stream.write_c_string(name);
    Ok(())
}

/// DefineFont2 (1024 em square) or DefineFont3 (20480 em square).
pub(crate) fn write_define_font(stream: &mut WriteStream, value: &DefineFont) -> EmitResult<FontVersion> {
    let version = match value.em_square_size {
        1024 => FontVersion::Font2,
        20480 => FontVersion::Font3,
        other => return Err(EmitError::unexpected_variant(format!("em square size {other}"))),
    };

    stream.write_u16_le(value.id);

    let mut offset_glyphs = WriteStream::new();
    let wide_offsets = match &value.glyphs {
        Some(glyphs) => write_offset_glyphs(&mut offset_glyphs, glyphs)?,
        None => false,
    };
    let layout = value.glyphs.as_ref().and(value.layout.as_ref());
    // Code units are always written on 16 bits.
    let wide_codes = true;

    stream.write_u8(
        u8::from(value.is_bold)
            | u8::from(value.is_italic) << 1
            | u8::from(wide_codes) << 2
            | u8::from(wide_offsets) << 3
            | u8::from(value.is_ansi) << 4
            | u8::from(value.is_small) << 5
            | u8::from(value.is_shift_jis) << 6
            | u8::from(layout.is_some()) << 7,
    );
    stream.write_u8(language_code(value.language));
    write_font_name(stream, &value.font_name)?;

    let Some(glyphs) = &value.glyphs else {
        // Device fonts end after an empty glyph count.
        stream.write_u16_le(0);
        return Ok(version);
    };

    stream.write_u16_le(count_as(glyphs.len(), "font glyphs")?);
    stream.write_stream(&offset_glyphs);

    let code_units = value
        .code_units
        .as_ref()
        .ok_or_else(|| EmitError::missing_field("define_font.code_units"))?;
    if code_units.len() != glyphs.len() {
        return Err(EmitError::inconsistent(format!(
            "font has {} glyphs but {} code units",
            glyphs.len(),
            code_units.len()
        )));
    }
    for &code_unit in code_units {
        stream.write_u16_le(code_unit);
    }

    if let Some(layout) = layout {
        write_font_layout(stream, layout, glyphs.len())?;
    }
    Ok(version)
}

/// Writes the offset table (glyph starts, then the code table offset) and the glyphs.
///
/// Returns whether 32-bit offsets were needed.
fn write_offset_glyphs(stream: &mut WriteStream, glyphs: &[Glyph]) -> EmitResult<bool> {
    let mut glyph_stream = WriteStream::new();
    let mut starts = Vec::with_capacity(glyphs.len() + 1);
    for glyph in glyphs {
        starts.push(glyph_stream.byte_position());
        write_glyph(&mut glyph_stream, glyph)?;
    }
    starts.push(glyph_stream.byte_position());

    let narrow_table = starts.len() * 2;
    let wide = narrow_table + glyph_stream.byte_position() > usize::from(u16::MAX);
    let table_size = if wide { starts.len() * 4 } else { narrow_table };
    for start in starts {
        if wide {
            stream.write_u32_le(count_as(table_size + start, "font glyph bytes")?);
        } else {
            stream.write_u16_le(count_as(table_size + start, "font glyph bytes")?);
        }
    }
    stream.write_stream(&glyph_stream);
    Ok(wide)
}

fn write_font_layout(stream: &mut WriteStream, value: &FontLayout, glyph_count: usize) -> EmitResult<()> {
    if value.advances.len() != glyph_count || value.bounds.len() != glyph_count {
        return Err(EmitError::inconsistent(format!(
            "font layout has {} advances and {} bounds for {glyph_count} glyphs",
            value.advances.len(),
            value.bounds.len()
        )));
    }
    stream.write_u16_le(value.ascent);
    stream.write_u16_le(value.descent);
    stream.write_u16_le(value.leading);
    for &advance in &value.advances {
        stream.write_u16_le(advance);
    }
    for bounds in &value.bounds {
        write_rect(stream, bounds)?;
    }
    stream.write_u16_le(count_as(value.kerning.len(), "kerning records")?);
    for record in &value.kerning {
        stream.write_u16_le(record.left);
        stream.write_u16_le(record.right);
        stream.write_i16_le(record.adjustment);
    }
    Ok(())
}

pub(crate) fn write_define_font4(stream: &mut WriteStream, value: &DefineFont4) {
    stream.write_u16_le(value.id);
    stream.write_u8(
        u8::from(value.is_bold) | u8::from(value.is_italic) << 1 | u8::from(value.data.is_some()) << 2,
    );
    stream.write_c_string(&value.font_name);
    if let Some(data) = &value.data {
        stream.write_bytes(data);
    }
}

pub(crate) fn write_define_font_info(stream: &mut WriteStream, value: &DefineFontInfo) -> EmitResult<FontInfoVersion> {
    let version = if value.language == LanguageCode::Auto {
        FontInfoVersion::FontInfo1
    } else {
        FontInfoVersion::FontInfo2
    };
    let wide_codes = version == FontInfoVersion::FontInfo2 || value.code_units.iter().any(|&unit| unit > 0xff);

    stream.write_u16_le(value.font_id);
    write_font_name(stream, &value.font_name)?;
    stream.write_u8(
        u8::from(wide_codes)
            | u8::from(value.is_bold) << 1
            | u8::from(value.is_italic) << 2
            | u8::from(value.is_ansi) << 3
            | u8::from(value.is_shift_jis) << 4
            | u8::from(value.is_small) << 5,
    );
    if version == FontInfoVersion::FontInfo2 {
        stream.write_u8(language_code(value.language));
    }
    for &unit in &value.code_units {
        if wide_codes {
            stream.write_u16_le(unit);
        } else {
            stream.write_u8((unit & 0xff) as u8);
        }
    }
    Ok(version)
}

pub(crate) fn write_define_font_align_zones(stream: &mut WriteStream, value: &DefineFontAlignZones) -> EmitResult<()> {
    stream.write_u16_le(value.font_id);
    stream.write_u8(csm_table_hint_code(value.csm_table_hint) << 6);
    for zone in &value.zones {
        write_font_alignment_zone(stream, zone)?;
    }
    Ok(())
}

fn write_font_alignment_zone(stream: &mut WriteStream, value: &FontAlignmentZone) -> EmitResult<()> {
    stream.write_u8(count_as(value.data.len(), "alignment zone entries")?);
    for data in &value.data {
        stream.write_f16_le(data.origin);
        stream.write_f16_le(data.size);
    }
    stream.write_u8(u8::from(value.has_x) | u8::from(value.has_y) << 1);
    Ok(())
}

pub(crate) fn write_define_font_name(stream: &mut WriteStream, value: &DefineFontName) {
    stream.write_u16_le(value.font_id);
    stream.write_c_string(&value.name);
    stream.write_c_string(&value.copyright);
}

/// DefineFont (version 1): a u16 offset table followed by glyph shapes.
pub(crate) fn write_define_glyph_font(stream: &mut WriteStream, value: &DefineGlyphFont) -> EmitResult<()> {
    stream.write_u16_le(value.id);
    let table_size = value.glyphs.len() * 2;
    let mut glyph_stream = WriteStream::new();
    for glyph in &value.glyphs {
        stream.write_u16_le(count_as(table_size + glyph_stream.byte_position(), "glyph font bytes")?);
        write_glyph(&mut glyph_stream, glyph)?;
    }
    stream.write_stream(&glyph_stream);
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/emit/text.rs"]
mod tests;
