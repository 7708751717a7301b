//! Tag framing and per-tag body encoders.
//!
//! Every body is encoded into its own buffer first: the header needs the body length, and
//! versioned tags only know their code once the body encoder has picked a version.

use crate::emit::avm1::write_action_string;
use crate::emit::basic::{
    write_color_transform, write_color_transform_with_alpha, write_matrix, write_rect, write_s_rgb8,
    write_straight_s_rgba8,
};
use crate::emit::button::{write_button_sound, write_define_button};
use crate::emit::display::{write_blend_mode, write_clip_actions, write_filter_list};
use crate::emit::morph_shape::{MorphShapeVersion, write_morph_shape};
use crate::emit::shape::{ShapeVersion, min_shape_version, write_shape};
use crate::emit::sound::{audio_coding_format_code, sound_format_bits, write_sound_info};
use crate::emit::text::{
    write_csm_text_settings, write_define_dynamic_text, write_define_font, write_define_font4,
    write_define_font_align_zones, write_define_font_info, write_define_font_name, write_define_glyph_font,
    write_define_text,
};
use crate::foundation::error::{EmitError, EmitResult, count_as};
use crate::io::stream::WriteStream;
use crate::model::sound::AudioCodingFormat;
use crate::model::tags::{
    DefineBitmap, DefineButtonSound, DefineMorphShape, DefineSceneAndFrameLabelData, DefineShape, DefineSound,
    DefineVideoStream, DoAbc, NamedId, PlaceObject, SoundStreamHead, Tag, VideoCodec, VideoDeblocking,
};

/// Codes whose consumers expect the 6-byte header regardless of length.
const LONG_HEADER_CODES: [u16; 7] = [
    6,  // DefineBits
    19, // SoundStreamBlock
    20, // DefineBitsLossless
    21, // DefineBitsJPEG2
    35, // DefineBitsJPEG3
    36, // DefineBitsLossless2
    90, // DefineBitsJPEG4
];

const SHORT_LENGTH_MAX: usize = 0x3f;

/// Encodes a single tag (header included).
#[tracing::instrument(skip(tag))]
pub fn emit_tag(tag: &Tag, swf_version: u8) -> EmitResult<Vec<u8>> {
    let mut stream = WriteStream::new();
    write_tag(&mut stream, tag, swf_version)?;
    Ok(stream.into_bytes())
}

/// Writes every tag, then the end-of-tags marker.
pub fn write_tag_string(stream: &mut WriteStream, tags: &[Tag], swf_version: u8) -> EmitResult<()> {
    for tag in tags {
        write_tag(stream, tag, swf_version)?;
    }
    stream.write_u16_le(0);
    Ok(())
}

pub fn write_tag(stream: &mut WriteStream, tag: &Tag, swf_version: u8) -> EmitResult<()> {
    if let Tag::Raw(raw) = tag {
        stream.write_bytes(&raw.data);
        return Ok(());
    }
    let mut body = WriteStream::new();
    let code = write_tag_body(&mut body, tag, swf_version)?;
    write_tag_header(stream, code, body.byte_position())?;
    stream.write_stream(&body);
    Ok(())
}

pub(crate) fn write_tag_header(stream: &mut WriteStream, code: u16, len: usize) -> EmitResult<()> {
    if code > 0x3ff {
        return Err(EmitError::range(format!("tag code {code} does not fit in 10 bits")));
    }
    let leading_nonzero = len > 0 || code & 0b11 != 0;
    let short = len < SHORT_LENGTH_MAX && !LONG_HEADER_CODES.contains(&code) && leading_nonzero;
    tracing::trace!(code, len, short, "tag header");
    if short {
        stream.write_u16_le(code << 6 | len as u16);
    } else {
        stream.write_u16_le(code << 6 | SHORT_LENGTH_MAX as u16);
        stream.write_u32_le(count_as(len, "tag body bytes")?);
    }
    Ok(())
}

/// Writes the body of `tag` and returns the tag code matching the encoding used.
fn write_tag_body(body: &mut WriteStream, tag: &Tag, swf_version: u8) -> EmitResult<u16> {
    let code = match tag {
        Tag::CsmTextSettings(t) => {
            write_csm_text_settings(body, t);
            74
        }
        Tag::DefineBinaryData(t) => {
            body.write_u16_le(t.id);
            body.write_u32_le(0);
            body.write_bytes(&t.data);
            87
        }
        Tag::DefineBitmap(t) => write_define_bitmap(body, t)?,
        Tag::DefineButton(t) => write_define_button(body, t)?.tag_code(),
        Tag::DefineButtonColorTransform(t) => {
            body.write_u16_le(t.button_id);
            write_color_transform(body, &t.transform)?;
            23
        }
        Tag::DefineButtonSound(t) => {
            write_define_button_sound(body, t)?;
            17
        }
        Tag::DefineDynamicText(t) => {
            write_define_dynamic_text(body, t)?;
            37
        }
        Tag::DefineFont(t) => write_define_font(body, t)?.tag_code(),
        Tag::DefineFont4(t) => {
            write_define_font4(body, t);
            91
        }
        Tag::DefineFontAlignZones(t) => {
            write_define_font_align_zones(body, t)?;
            73
        }
        Tag::DefineFontInfo(t) => write_define_font_info(body, t)?.tag_code(),
        Tag::DefineFontName(t) => {
            write_define_font_name(body, t);
            88
        }
        Tag::DefineGlyphFont(t) => {
            write_define_glyph_font(body, t)?;
            10
        }
        Tag::DefineJpegTables(t) => {
            body.write_bytes(&t.data);
            8
        }
        Tag::DefineMorphShape(t) => write_define_morph_shape(body, t)?.tag_code(),
        Tag::DefineSceneAndFrameLabelData(t) => {
            write_define_scene_and_frame_label_data(body, t)?;
            86
        }
        Tag::DefineShape(t) => write_define_shape(body, t)?.tag_code(),
        Tag::DefineSound(t) => {
            write_define_sound(body, t)?;
            14
        }
        Tag::DefineSprite(t) => {
            body.write_u16_le(t.id);
            body.write_u16_le(t.frame_count);
            write_tag_string(body, &t.tags, swf_version)?;
            39
        }
        Tag::DefineText(t) => write_define_text(body, t)?.tag_code(),
        Tag::DefineVideoStream(t) => {
            write_define_video_stream(body, t);
            60
        }
        Tag::DoAbc(t) => write_do_abc(body, t),
        Tag::DoAction(t) => {
            write_action_string(body, &t.actions)?;
            12
        }
        Tag::DoInitAction(t) => {
            body.write_u16_le(t.sprite_id);
            write_action_string(body, &t.actions)?;
            59
        }
        Tag::EnableDebugger(t) => {
            if swf_version < 6 {
                body.write_c_string(&t.password);
                58
            } else {
                body.write_u16_le(0);
                body.write_c_string(&t.password);
                64
            }
        }
        Tag::ExportAssets(t) => {
            write_named_ids(body, &t.assets)?;
            56
        }
        Tag::FileAttributes(t) => {
            let flags = u32::from(t.use_network)
                | u32::from(t.use_relative_urls) << 1
                | u32::from(t.no_cross_domain_caching) << 2
                | u32::from(t.use_as3) << 3
                | u32::from(t.has_metadata) << 4
                | u32::from(t.use_gpu) << 5
                | u32::from(t.use_direct_blit) << 6;
            body.write_u32_le(flags);
            69
        }
        Tag::FrameLabel(t) => {
            body.write_c_string(&t.name);
            if t.is_anchor {
                body.write_u8(1);
            }
            43
        }
        Tag::ImportAssets(t) => {
            body.write_c_string(&t.url);
            let code = if swf_version < 8 {
                57
            } else {
                // Reserved bytes of ImportAssets2.
                body.write_u8(1);
                body.write_u8(0);
                71
            };
            write_named_ids(body, &t.assets)?;
            code
        }
        Tag::Metadata(t) => {
            body.write_c_string(&t.metadata);
            77
        }
        Tag::PlaceObject(t) => write_place_object(body, t, swf_version)?.tag_code(),
        Tag::Protect(t) => {
            if !t.password.is_empty() {
                body.write_c_string(&t.password);
            }
            24
        }
        Tag::Raw(raw) => {
            return Err(EmitError::unexpected_variant(format!(
                "raw tag ({} bytes) has no body",
                raw.data.len()
            )));
        }
        Tag::RawBody(t) => {
            body.write_bytes(&t.data);
            t.code
        }
        Tag::RemoveObject(t) => match t.character_id {
            Some(character_id) => {
                body.write_u16_le(character_id);
                body.write_u16_le(t.depth);
                5
            }
            None => {
                body.write_u16_le(t.depth);
                28
            }
        },
        Tag::ScriptLimits(t) => {
            body.write_u16_le(t.max_recursion_depth);
            body.write_u16_le(t.script_timeout);
            65
        }
        Tag::SetBackgroundColor(t) => {
            write_s_rgb8(body, t.color);
            9
        }
        Tag::ShowFrame => 1,
        Tag::SoundStreamBlock(t) => {
            body.write_bytes(&t.data);
            19
        }
        Tag::SoundStreamHead(t) => write_sound_stream_head(body, t)?,
        Tag::StartSound(t) => {
            body.write_u16_le(t.sound_id);
            write_sound_info(body, &t.sound_info)?;
            15
        }
        Tag::StartSound2(t) => {
            body.write_c_string(&t.sound_class_name);
            write_sound_info(body, &t.sound_info)?;
            89
        }
        Tag::SymbolClass(t) => {
            write_named_ids(body, &t.symbols)?;
            76
        }
        Tag::Telemetry(t) => {
            body.write_u16_le(0);
            if let Some(password) = &t.password {
                body.write_bytes(password);
            }
            93
        }
        Tag::VideoFrame(t) => {
            body.write_u16_le(t.stream_id);
            body.write_u16_le(t.frame);
            body.write_bytes(&t.data);
            61
        }
    };
    Ok(code)
}

fn write_named_ids(body: &mut WriteStream, value: &[NamedId]) -> EmitResult<()> {
    body.write_u16_le(count_as(value.len(), "named ids")?);
    for NamedId { id, name } in value {
        body.write_u16_le(*id);
        body.write_c_string(name);
    }
    Ok(())
}

/// The media type selects the DefineBits variant; the payload is written as is.
fn write_define_bitmap(body: &mut WriteStream, value: &DefineBitmap) -> EmitResult<u16> {
    let code = match value.media_type.as_str() {
        "image/x-partial-jpeg" => 6,
        "image/x-swf-bmp" => 20,
        "image/jpeg" | "image/gif" | "image/png" => 21,
        "image/x-ajpeg" => 35,
        "image/x-swf-abmp" => 36,
        other => return Err(EmitError::unexpected_variant(format!("bitmap media type {other:?}"))),
    };
    body.write_u16_le(value.id);
    body.write_bytes(&value.data);
    Ok(code)
}

fn write_define_button_sound(body: &mut WriteStream, value: &DefineButtonSound) -> EmitResult<()> {
    body.write_u16_le(value.button_id);
    for sound in [
        &value.over_up_to_idle,
        &value.idle_to_over_up,
        &value.over_up_to_over_down,
        &value.over_down_to_over_up,
    ] {
        write_button_sound(body, sound.as_ref())?;
    }
    Ok(())
}

fn write_define_shape(body: &mut WriteStream, value: &DefineShape) -> EmitResult<ShapeVersion> {
    let version = if value.edge_bounds.is_some() {
        ShapeVersion::Shape4
    } else {
        min_shape_version(&value.shape)
    };

    body.write_u16_le(value.id);
    write_rect(body, &value.bounds)?;
    if version == ShapeVersion::Shape4 {
        write_rect(body, value.edge_bounds.as_ref().unwrap_or(&value.bounds))?;
        body.write_u8(
            u8::from(value.has_scaling_strokes)
                | u8::from(value.has_non_scaling_strokes) << 1
                | u8::from(value.has_fill_winding) << 2,
        );
    }
    write_shape(body, &value.shape, version)?;
    Ok(version)
}

fn write_define_morph_shape(body: &mut WriteStream, value: &DefineMorphShape) -> EmitResult<MorphShapeVersion> {
    body.write_u16_le(value.id);
    write_rect(body, &value.bounds)?;
    write_rect(body, &value.morph_bounds)?;

    let version = match (&value.edge_bounds, &value.morph_edge_bounds) {
        (Some(edge_bounds), Some(morph_edge_bounds)) => {
            write_rect(body, edge_bounds)?;
            write_rect(body, morph_edge_bounds)?;
            body.write_u8(u8::from(value.has_scaling_strokes) | u8::from(value.has_non_scaling_strokes) << 1);
            MorphShapeVersion::MorphShape2
        }
        _ => MorphShapeVersion::MorphShape1,
    };
    write_morph_shape(body, &value.shape, version)?;
    Ok(version)
}

fn write_define_scene_and_frame_label_data(
    body: &mut WriteStream,
    value: &DefineSceneAndFrameLabelData,
) -> EmitResult<()> {
    body.write_u32_leb128(count_as(value.scenes.len(), "scenes")?);
    for scene in &value.scenes {
        body.write_u32_leb128(scene.offset);
        body.write_c_string(&scene.name);
    }
    body.write_u32_leb128(count_as(value.labels.len(), "frame labels")?);
    for label in &value.labels {
        body.write_u32_leb128(label.frame);
        body.write_c_string(&label.name);
    }
    Ok(())
}

fn write_define_sound(body: &mut WriteStream, value: &DefineSound) -> EmitResult<()> {
    body.write_u16_le(value.id);
    body.write_u8(
        audio_coding_format_code(value.format) << 4
            | sound_format_bits(value.sound_rate, value.sound_size, value.sound_type)?,
    );
    body.write_u32_le(value.sample_count);
    body.write_bytes(&value.data);
    Ok(())
}

/// SoundStreamHead (18) only declares ADPCM and MP3 streams of 16-bit samples; other
/// streams use SoundStreamHead2 (45).
fn write_sound_stream_head(body: &mut WriteStream, value: &SoundStreamHead) -> EmitResult<u16> {
    let code = match value.stream_format {
        AudioCodingFormat::Adpcm | AudioCodingFormat::Mp3 if value.stream_sound_size == 16 => 18,
        _ => 45,
    };
    body.write_u8(sound_format_bits(
        value.playback_sound_rate,
        value.playback_sound_size,
        value.playback_sound_type,
    )?);
    body.write_u8(
        audio_coding_format_code(value.stream_format) << 4
            | sound_format_bits(value.stream_sound_rate, value.stream_sound_size, value.stream_sound_type)?,
    );
    body.write_u16_le(value.stream_sample_count);
    if value.stream_format == AudioCodingFormat::Mp3 {
        body.write_i16_le(value.latency_seek);
    }
    Ok(code)
}

fn write_define_video_stream(body: &mut WriteStream, value: &DefineVideoStream) {
    let deblocking = match value.deblocking {
        VideoDeblocking::PacketValue => 0u8,
        VideoDeblocking::Off => 1,
        VideoDeblocking::Level1 => 2,
        VideoDeblocking::Level2 => 3,
        VideoDeblocking::Level3 => 4,
        VideoDeblocking::Level4 => 5,
    };
    let codec = match value.codec {
        VideoCodec::SorensonH263 => 2u8,
        VideoCodec::Screen => 3,
        VideoCodec::Vp6 => 4,
        VideoCodec::Vp6Alpha => 5,
        VideoCodec::ScreenV2 => 6,
    };
    body.write_u16_le(value.id);
    body.write_u16_le(value.frame_count);
    body.write_u16_le(value.width);
    body.write_u16_le(value.height);
    body.write_u8(deblocking << 1 | u8::from(value.use_smoothing));
    body.write_u8(codec);
}

fn write_do_abc(body: &mut WriteStream, value: &DoAbc) -> u16 {
    match &value.header {
        Some(header) => {
            body.write_u32_le(header.flags);
            body.write_c_string(&header.name);
            body.write_bytes(&value.data);
            82
        }
        None => {
            body.write_bytes(&value.data);
            72
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum PlaceObjectVersion {
    PlaceObject1 = 1,
    PlaceObject2 = 2,
    PlaceObject3 = 3,
}

impl PlaceObjectVersion {
    pub(crate) fn tag_code(self) -> u16 {
        match self {
            Self::PlaceObject1 => 4,
            Self::PlaceObject2 => 26,
            Self::PlaceObject3 => 70,
        }
    }
}

pub(crate) fn min_place_object_version(value: &PlaceObject) -> PlaceObjectVersion {
    let needs_version3 = value.filters.is_some()
        || value.blend_mode.is_some()
        || value.bitmap_cache.is_some()
        || value.class_name.is_some()
        || value.visible.is_some()
        || value.background_color.is_some();
    if needs_version3 {
        return PlaceObjectVersion::PlaceObject3;
    }
    let needs_version2 = value.is_update
        || value.character_id.is_none()
        || value.matrix.is_none()
        || value.color_transform.is_some_and(|cx| cx.uses_alpha())
        || value.ratio.is_some()
        || value.name.is_some()
        || value.clip_depth.is_some()
        || value.clip_actions.is_some();
    if needs_version2 {
        PlaceObjectVersion::PlaceObject2
    } else {
        PlaceObjectVersion::PlaceObject1
    }
}

fn write_place_object(body: &mut WriteStream, value: &PlaceObject, swf_version: u8) -> EmitResult<PlaceObjectVersion> {
    let version = min_place_object_version(value);
    if version == PlaceObjectVersion::PlaceObject1 {
        let (Some(character_id), Some(matrix)) = (value.character_id, &value.matrix) else {
            return Err(EmitError::missing_field("place_object.character_id"));
        };
        body.write_u16_le(character_id);
        body.write_u16_le(value.depth);
        write_matrix(body, matrix)?;
        if let Some(color_transform) = &value.color_transform {
            write_color_transform(body, &color_transform.without_alpha())?;
        }
        return Ok(version);
    }

    let flags = u16::from(value.is_update)
        | u16::from(value.character_id.is_some()) << 1
        | u16::from(value.matrix.is_some()) << 2
        | u16::from(value.color_transform.is_some()) << 3
        | u16::from(value.ratio.is_some()) << 4
        | u16::from(value.name.is_some()) << 5
        | u16::from(value.clip_depth.is_some()) << 6
        | u16::from(value.clip_actions.is_some()) << 7
        | u16::from(value.filters.is_some()) << 8
        | u16::from(value.blend_mode.is_some()) << 9
        | u16::from(value.bitmap_cache.is_some()) << 10
        | u16::from(value.class_name.is_some()) << 11
        | u16::from(value.visible.is_some()) << 13
        | u16::from(value.background_color.is_some()) << 14;
    if version == PlaceObjectVersion::PlaceObject3 {
        body.write_u16_le(flags);
    } else {
        body.write_u8((flags & 0xff) as u8);
    }
    body.write_u16_le(value.depth);
    if let Some(class_name) = &value.class_name {
        body.write_c_string(class_name);
    }
    if let Some(character_id) = value.character_id {
        body.write_u16_le(character_id);
    }
    if let Some(matrix) = &value.matrix {
        write_matrix(body, matrix)?;
    }
    if let Some(color_transform) = &value.color_transform {
        write_color_transform_with_alpha(body, color_transform)?;
    }
    if let Some(ratio) = value.ratio {
        body.write_u16_le(ratio);
    }
    if let Some(name) = &value.name {
        body.write_c_string(name);
    }
    if let Some(clip_depth) = value.clip_depth {
        body.write_u16_le(clip_depth);
    }
    if let Some(filters) = &value.filters {
        write_filter_list(body, filters)?;
    }
    if let Some(blend_mode) = value.blend_mode {
        write_blend_mode(body, blend_mode);
    }
    if let Some(bitmap_cache) = value.bitmap_cache {
        body.write_u8(u8::from(bitmap_cache));
    }
    if let Some(visible) = value.visible {
        body.write_u8(u8::from(visible));
    }
    if let Some(background_color) = value.background_color {
        write_straight_s_rgba8(body, background_color);
    }
    if let Some(clip_actions) = &value.clip_actions {
        write_clip_actions(body, clip_actions, swf_version)?;
    }
    Ok(version)
}

#[cfg(test)]
#[path = "../../tests/unit/emit/tags.rs"]
mod tests;
