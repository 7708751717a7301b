use crate::model::basic::{Rect, StraightSRgba8};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum LanguageCode {
    #[default]
    Auto,
    Latin,
    Japanese,
    Korean,
    SimplifiedChinese,
    TraditionalChinese,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum GridFitting {
    #[default]
    None,
    Pixel,
    SubPixel,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum TextRenderer {
    #[default]
    Normal,
    Advanced,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum CsmTableHint {
    #[default]
    Thin,
    Medium,
    Thick,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum TextAlignment {
    #[default]
    Left,
    Right,
    Center,
    Justify,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// A run of glyphs sharing font, color and baseline.
pub struct TextRecord {
    /// Font id and size are only written when both are present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_id: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<StraightSRgba8>,
    #[serde(default)]
    pub offset_x: i16,
    #[serde(default)]
    pub offset_y: i16,
    pub entries: Vec<GlyphEntry>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GlyphEntry {
    pub index: u32,
    pub advance: i32,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FontAlignmentZone {
    pub data: Vec<FontAlignmentZoneData>,
    #[serde(default)]
    pub has_x: bool,
    #[serde(default)]
    pub has_y: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Stored as half-precision floats.
pub struct FontAlignmentZoneData {
    pub origin: f32,
    pub size: f32,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FontLayout {
    pub ascent: u16,
    pub descent: u16,
    pub leading: u16,
    /// One entry per glyph.
    pub advances: Vec<u16>,
    /// One entry per glyph.
    pub bounds: Vec<Rect>,
    #[serde(default)]
    pub kerning: Vec<KerningRecord>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct KerningRecord {
    pub left: u16,
    pub right: u16,
    pub adjustment: i16,
}
