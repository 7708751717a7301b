use crate::model::avm1::Action;
use crate::model::basic::{ColorTransform, ColorTransformWithAlpha, Matrix, Rect, SRgb8, StraightSRgba8};
use crate::model::button::{ButtonCondAction, ButtonRecord, ButtonSound};
use crate::model::display::{BlendMode, ClipAction, Filter};
use crate::model::morph_shape::MorphShape;
use crate::model::shape::{Glyph, Shape};
use crate::model::sound::{AudioCodingFormat, SoundInfo, SoundType};
use crate::model::text::{
    CsmTableHint, FontAlignmentZone, FontLayout, GridFitting, LanguageCode, TextAlignment,
    TextRecord, TextRenderer,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A top-level (or sprite-level) record of the movie.
///
/// Versioned tags are unversioned here: the encoder picks the lowest version able to
/// represent the content.
pub enum Tag {
    CsmTextSettings(CsmTextSettings),
    DefineBinaryData(DefineBinaryData),
    DefineBitmap(DefineBitmap),
    DefineButton(DefineButton),
    DefineButtonColorTransform(DefineButtonColorTransform),
    DefineButtonSound(DefineButtonSound),
    DefineDynamicText(DefineDynamicText),
    DefineFont(DefineFont),
    DefineFont4(DefineFont4),
    DefineFontAlignZones(DefineFontAlignZones),
    DefineFontInfo(DefineFontInfo),
    DefineFontName(DefineFontName),
    DefineGlyphFont(DefineGlyphFont),
    DefineJpegTables(DefineJpegTables),
    DefineMorphShape(DefineMorphShape),
    DefineSceneAndFrameLabelData(DefineSceneAndFrameLabelData),
    DefineShape(DefineShape),
    DefineSound(DefineSound),
    DefineSprite(DefineSprite),
    DefineText(DefineText),
    DefineVideoStream(DefineVideoStream),
    DoAbc(DoAbc),
    DoAction(DoAction),
    DoInitAction(DoInitAction),
    EnableDebugger(EnableDebugger),
    ExportAssets(ExportAssets),
    FileAttributes(FileAttributes),
    FrameLabel(FrameLabel),
    ImportAssets(ImportAssets),
    Metadata(Metadata),
    PlaceObject(PlaceObject),
    Protect(Protect),
    /// Complete pre-encoded tag, header included. Written verbatim.
    Raw(RawTag),
    /// Pre-encoded body under a fresh header.
    RawBody(RawBodyTag),
    RemoveObject(RemoveObject),
    ScriptLimits(ScriptLimits),
    SetBackgroundColor(SetBackgroundColor),
    ShowFrame,
    SoundStreamBlock(SoundStreamBlock),
    SoundStreamHead(SoundStreamHead),
    StartSound(StartSound),
    StartSound2(StartSound2),
    SymbolClass(SymbolClass),
    Telemetry(Telemetry),
    VideoFrame(VideoFrame),
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CsmTextSettings {
    pub text_id: u16,
    #[serde(default)]
    pub renderer: TextRenderer,
    #[serde(default)]
    pub fitting: GridFitting,
    pub thickness: f32,
    pub sharpness: f32,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DefineBinaryData {
    pub id: u16,
    pub data: Vec<u8>,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Bitmap payload; `media_type` selects the tag code.
pub struct DefineBitmap {
    pub id: u16,
    pub width: u16,
    pub height: u16,
    pub media_type: String,
    pub data: Vec<u8>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DefineButton {
    pub id: u16,
    #[serde(default)]
    pub track_as_menu: bool,
    pub records: Vec<ButtonRecord>,
    #[serde(default)]
    pub actions: Vec<ButtonCondAction>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DefineButtonColorTransform {
    pub button_id: u16,
    pub transform: ColorTransform,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DefineButtonSound {
    pub button_id: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub over_up_to_idle: Option<ButtonSound>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idle_to_over_up: Option<ButtonSound>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub over_up_to_over_down: Option<ButtonSound>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub over_down_to_over_up: Option<ButtonSound>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Editable text field.
pub struct DefineDynamicText {
    pub id: u16,
    pub bounds: Rect,
    pub word_wrap: bool,
    pub multiline: bool,
    pub password: bool,
    pub readonly: bool,
    pub auto_size: bool,
    pub no_select: bool,
    pub border: bool,
    pub was_static: bool,
    pub html: bool,
    pub use_glyph_font: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_id: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<StraightSRgba8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u16>,
    pub align: TextAlignment,
    pub margin_left: u16,
    pub margin_right: u16,
    pub indent: u16,
    pub leading: i16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variable_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Font definition encoded as DefineFont2, or DefineFont3 for a 20480 em square.
pub struct DefineFont {
    pub id: u16,
    pub font_name: String,
    #[serde(default)]
    pub is_bold: bool,
    #[serde(default)]
    pub is_italic: bool,
    #[serde(default)]
    pub is_ansi: bool,
    #[serde(default)]
    pub is_small: bool,
    #[serde(default)]
    pub is_shift_jis: bool,
    #[serde(default)]
    pub language: LanguageCode,
    /// 1024 or 20480.
    pub em_square_size: u32,
    /// Absent for device fonts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub glyphs: Option<Vec<Glyph>>,
    /// One UTF-16 code unit per glyph.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_units: Option<Vec<u16>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<FontLayout>,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Compact font format (CFF) font.
pub struct DefineFont4 {
    pub id: u16,
    pub font_name: String,
    #[serde(default)]
    pub is_bold: bool,
    #[serde(default)]
    pub is_italic: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<u8>>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DefineFontAlignZones {
    pub font_id: u16,
    #[serde(default)]
    pub csm_table_hint: CsmTableHint,
    pub zones: Vec<FontAlignmentZone>,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DefineFontInfo {
    pub font_id: u16,
    pub font_name: String,
    #[serde(default)]
    pub is_bold: bool,
    #[serde(default)]
    pub is_italic: bool,
    #[serde(default)]
    pub is_ansi: bool,
    #[serde(default)]
    pub is_shift_jis: bool,
    #[serde(default)]
    pub is_small: bool,
    #[serde(default)]
    pub language: LanguageCode,
    pub code_units: Vec<u16>,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DefineFontName {
    pub font_id: u16,
    pub name: String,
    #[serde(default)]
    pub copyright: String,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Glyph-only font (DefineFont).
pub struct DefineGlyphFont {
    pub id: u16,
    pub glyphs: Vec<Glyph>,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DefineJpegTables {
    pub data: Vec<u8>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DefineMorphShape {
    pub id: u16,
    pub bounds: Rect,
    pub morph_bounds: Rect,
    /// Both edge bounds select the version 2 encoding.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edge_bounds: Option<Rect>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub morph_edge_bounds: Option<Rect>,
    #[serde(default)]
    pub has_scaling_strokes: bool,
    #[serde(default)]
    pub has_non_scaling_strokes: bool,
    pub shape: MorphShape,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DefineSceneAndFrameLabelData {
    pub scenes: Vec<Scene>,
    pub labels: Vec<Label>,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Scene {
    pub offset: u32,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Label {
    pub frame: u32,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DefineShape {
    pub id: u16,
    pub bounds: Rect,
    /// Selects the version 4 encoding.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edge_bounds: Option<Rect>,
    #[serde(default)]
    pub has_fill_winding: bool,
    #[serde(default)]
    pub has_non_scaling_strokes: bool,
    #[serde(default)]
    pub has_scaling_strokes: bool,
    pub shape: Shape,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DefineSound {
    pub id: u16,
    pub format: AudioCodingFormat,
    /// Hz: 5500, 11000, 22000 or 44000.
    pub sound_rate: u32,
    /// Bits per sample: 8 or 16.
    pub sound_size: u8,
    #[serde(default)]
    pub sound_type: SoundType,
    pub sample_count: u32,
    pub data: Vec<u8>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DefineSprite {
    pub id: u16,
    pub frame_count: u16,
    pub tags: Vec<Tag>,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DefineText {
    pub id: u16,
    pub bounds: Rect,
    #[serde(default)]
    pub matrix: Matrix,
    pub records: Vec<TextRecord>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum VideoCodec {
    SorensonH263,
    Screen,
    Vp6,
    Vp6Alpha,
    ScreenV2,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum VideoDeblocking {
    #[default]
    PacketValue,
    Off,
    Level1,
    Level2,
    Level3,
    Level4,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DefineVideoStream {
    pub id: u16,
    pub frame_count: u16,
    pub width: u16,
    pub height: u16,
    #[serde(default)]
    pub deblocking: VideoDeblocking,
    #[serde(default)]
    pub use_smoothing: bool,
    pub codec: VideoCodec,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// ActionScript 3 bytecode. The header form (code 82) is used when `header` is present.
pub struct DoAbc {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<AbcHeader>,
    pub data: Vec<u8>,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AbcHeader {
    pub flags: u32,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DoAction {
    pub actions: Vec<Action>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DoInitAction {
    pub sprite_id: u16,
    pub actions: Vec<Action>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EnableDebugger {
    /// MD5-hashed password; empty when the debugger is unprotected.
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct NamedId {
    pub id: u16,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ExportAssets {
    pub assets: Vec<NamedId>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FileAttributes {
    pub use_network: bool,
    pub use_relative_urls: bool,
    pub no_cross_domain_caching: bool,
    pub use_as3: bool,
    pub has_metadata: bool,
    pub use_gpu: bool,
    pub use_direct_blit: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameLabel {
    pub name: String,
    #[serde(default)]
    pub is_anchor: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ImportAssets {
    pub url: String,
    pub assets: Vec<NamedId>,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Metadata {
    pub metadata: String,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Display-list insertion or update. The lowest sufficient PlaceObject version is chosen.
pub struct PlaceObject {
    pub is_update: bool,
    pub depth: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub character_id: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matrix: Option<Matrix>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_transform: Option<ColorTransformWithAlpha>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ratio: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clip_depth: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<Filter>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blend_mode: Option<BlendMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bitmap_cache: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<StraightSRgba8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clip_actions: Option<Vec<ClipAction>>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Protect {
    /// MD5-hashed password, omitted from the body when empty.
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RawTag {
    pub data: Vec<u8>,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RawBodyTag {
    pub code: u16,
    pub data: Vec<u8>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RemoveObject {
    pub depth: u16,
    /// Present selects RemoveObject (code 5), absent RemoveObject2 (code 28).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub character_id: Option<u16>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ScriptLimits {
    pub max_recursion_depth: u16,
    pub script_timeout: u16,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SetBackgroundColor {
    pub color: SRgb8,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SoundStreamBlock {
    pub data: Vec<u8>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Stream format declaration; the header version is derived from the stream format.
pub struct SoundStreamHead {
    pub playback_sound_type: SoundType,
    /// Bits per sample: 8 or 16.
    pub playback_sound_size: u8,
    /// Hz: 5500, 11000, 22000 or 44000.
    pub playback_sound_rate: u32,
    pub stream_format: AudioCodingFormat,
    pub stream_sound_type: SoundType,
    pub stream_sound_size: u8,
    pub stream_sound_rate: u32,
    pub stream_sample_count: u16,
    /// Only written for MP3 streams.
    #[serde(default)]
    pub latency_seek: i16,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StartSound {
    pub sound_id: u16,
    #[serde(default)]
    pub sound_info: SoundInfo,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StartSound2 {
    pub sound_class_name: String,
    #[serde(default)]
    pub sound_info: SoundInfo,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SymbolClass {
    pub symbols: Vec<NamedId>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Telemetry {
    /// SHA-256 of the password, when telemetry is protected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<Vec<u8>>,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct VideoFrame {
    pub stream_id: u16,
    pub frame: u16,
    pub data: Vec<u8>,
}
