use super::*;
use crate::model::basic::{Matrix, Rect, StraightSRgba8};
use crate::model::text::{FontAlignmentZoneData, GlyphEntry};

fn font(em_square_size: u32, glyphs: Option<Vec<Glyph>>, code_units: Option<Vec<u16>>) -> DefineFont {
    DefineFont {
        id: 1,
        font_name: "A".to_string(),
        is_bold: false,
        is_italic: false,
        is_ansi: false,
        is_small: false,
        is_shift_jis: false,
        language: LanguageCode::Auto,
        em_square_size,
        glyphs,
        code_units,
        layout: None,
    }
}

#[test]
fn static_text_record() {
    let text = DefineText {
        id: 1,
        bounds: Rect::default(),
        matrix: Matrix::default(),
        records: vec![TextRecord {
            font_id: Some(1),
            font_size: Some(240),
            color: Some(StraightSRgba8::opaque(0, 0, 0)),
            offset_x: 10,
            offset_y: 0,
            entries: vec![
                GlyphEntry { index: 0, advance: 100 },
                GlyphEntry { index: 1, advance: 120 },
            ],
        }],
    };
    let mut s = WriteStream::new();
    let version = write_define_text(&mut s, &text).unwrap();
    assert_eq!(version, TextVersion::Text1);
    assert_eq!(version.tag_code(), 11);
    assert_eq!(
        s.into_bytes(),
        vec![
            0x01, 0x00, 0x00, 0x00, // id, bounds, matrix
            0x01, 0x08, // index and advance widths
            0x8d, 0x01, 0x00, 0x00, 0x00, 0x00, 0x0a, 0x00, 0xf0, 0x00, // record header
            0x02, 0x32, 0x5e, 0x00, // glyph entries
            0x00,
        ]
    );
}

#[test]
fn translucent_text_needs_version_2() {
    let text = DefineText {
        id: 1,
        bounds: Rect::default(),
        matrix: Matrix::default(),
        records: vec![TextRecord {
            font_id: None,
            font_size: None,
            color: Some(StraightSRgba8 { r: 1, g: 2, b: 3, a: 4 }),
            offset_x: 0,
            offset_y: -1,
            entries: vec![],
        }],
    };
    let mut s = WriteStream::new();
    assert_eq!(write_define_text(&mut s, &text).unwrap(), TextVersion::Text2);
    assert_eq!(
        s.into_bytes(),
        vec![0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x86, 1, 2, 3, 4, 0xff, 0xff, 0x00, 0x00]
    );
}

#[test]
fn dynamic_text_ignores_font_without_size() {
    let text = DefineDynamicText {
        id: 1,
        font_id: Some(2),
        variable_name: Some("v".to_string()),
        text: Some("hi".to_string()),
        ..DefineDynamicText::default()
    };
    let mut s = WriteStream::new();
    write_define_dynamic_text(&mut s, &text).unwrap();
    assert_eq!(
        s.into_bytes(),
        vec![0x01, 0x00, 0x00, 0x80, 0x00, b'v', 0x00, b'h', b'i', 0x00]
    );
}

#[test]
fn dynamic_text_with_font_and_layout() {
    let text = DefineDynamicText {
        id: 1,
        font_id: Some(2),
        font_size: Some(240),
        color: Some(StraightSRgba8::opaque(9, 8, 7)),
        align: TextAlignment::Center,
        ..DefineDynamicText::default()
    };
    let mut s = WriteStream::new();
    write_define_dynamic_text(&mut s, &text).unwrap();
    assert_eq!(
        s.into_bytes(),
        vec![
            0x01, 0x00, 0x00, // id, bounds
            0x05, 0x20, // flags
            0x02, 0x00, 0xf0, 0x00, // font, size
            9, 8, 7, 0xff, // color
            0x02, 0, 0, 0, 0, 0, 0, 0, 0, // layout
            0x00, // variable name
        ]
    );
}

#[test]
fn csm_settings_pack_renderer_and_fitting() {
    let settings = CsmTextSettings {
        text_id: 1,
        renderer: TextRenderer::Advanced,
        fitting: GridFitting::SubPixel,
        thickness: 0.0,
        sharpness: 0.0,
    };
    let mut s = WriteStream::new();
    write_csm_text_settings(&mut s, &settings);
    assert_eq!(s.into_bytes(), vec![0x01, 0x00, 0x50, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
}

#[test]
fn font_with_one_glyph() {
    let mut s = WriteStream::new();
    let version = write_define_font(&mut s, &font(1024, Some(vec![Glyph::default()]), Some(vec![0x41]))).unwrap();
    assert_eq!(version, FontVersion::Font2);
    assert_eq!(version.tag_code(), 48);
    assert_eq!(
        s.into_bytes(),
        vec![
            0x01, 0x00, 0x04, 0x00, // id, flags, language
            0x02, b'A', 0x00, // name
            0x01, 0x00, // glyph count
            0x04, 0x00, 0x06, 0x00, // offsets
            0x10, 0x00, // glyph
            0x41, 0x00, // code unit
        ]
    );
}

#[test]
fn font_layout_follows_code_units() {
    let mut value = font(1024, Some(vec![Glyph::default()]), Some(vec![0x41]));
    value.layout = Some(FontLayout {
        ascent: 1,
        descent: 2,
        leading: 3,
        advances: vec![500],
        bounds: vec![Rect::default()],
        kerning: vec![],
    });
    let mut s = WriteStream::new();
    write_define_font(&mut s, &value).unwrap();
    let bytes = s.into_bytes();
    assert_eq!(bytes[2], 0x84);
    assert_eq!(
        &bytes[17..],
        &[0x01, 0x00, 0x02, 0x00, 0x03, 0x00, 0xf4, 0x01, 0x00, 0x00, 0x00]
    );

    value.layout.as_mut().unwrap().advances.clear();
    let err = write_define_font(&mut WriteStream::new(), &value).unwrap_err();
    assert!(matches!(err, EmitError::Inconsistent(_)), "{err:?}");
}

#[test]
fn device_font_has_no_glyph_table() {
    let mut value = font(20480, None, None);
    value.layout = Some(FontLayout {
        ascent: 1,
        descent: 1,
        leading: 1,
        advances: vec![],
        bounds: vec![],
        kerning: vec![],
    });
    let mut s = WriteStream::new();
    assert_eq!(write_define_font(&mut s, &value).unwrap(), FontVersion::Font3);
    assert_eq!(s.into_bytes(), vec![0x01, 0x00, 0x04, 0x00, 0x02, b'A', 0x00, 0x00, 0x00]);
}

#[test]
fn font_errors() {
    let err = write_define_font(&mut WriteStream::new(), &font(2048, None, None)).unwrap_err();
    assert!(matches!(err, EmitError::UnexpectedVariant(_)), "{err:?}");

    let err = write_define_font(&mut WriteStream::new(), &font(1024, Some(vec![Glyph::default()]), None)).unwrap_err();
    assert!(matches!(err, EmitError::MissingField(_)), "{err:?}");

    let err = write_define_font(&mut WriteStream::new(), &font(1024, Some(vec![Glyph::default()]), Some(vec![])))
        .unwrap_err();
    assert!(matches!(err, EmitError::Inconsistent(_)), "{err:?}");
}

#[test]
fn cff_font() {
    let value = DefineFont4 {
        id: 1,
        font_name: "F".to_string(),
        is_bold: true,
        is_italic: false,
        data: Some(vec![1, 2]),
    };
    let mut s = WriteStream::new();
    write_define_font4(&mut s, &value);
    assert_eq!(s.into_bytes(), vec![0x01, 0x00, 0x05, b'F', 0x00, 1, 2]);
}

#[test]
fn font_info_code_width() {
    let mut info = DefineFontInfo {
        font_id: 1,
        font_name: "A".to_string(),
        is_bold: true,
        is_italic: false,
        is_ansi: false,
        is_shift_jis: false,
        is_small: false,
        language: LanguageCode::Auto,
        code_units: vec![0x41, 0x42],
    };
    let mut s = WriteStream::new();
    assert_eq!(write_define_font_info(&mut s, &info).unwrap(), FontInfoVersion::FontInfo1);
    assert_eq!(s.into_bytes(), vec![0x01, 0x00, 0x02, b'A', 0x00, 0x02, 0x41, 0x42]);

    info.language = LanguageCode::Latin;
    let mut s = WriteStream::new();
    let version = write_define_font_info(&mut s, &info).unwrap();
    assert_eq!(version.tag_code(), 62);
    assert_eq!(
        s.into_bytes(),
        vec![0x01, 0x00, 0x02, b'A', 0x00, 0x03, 0x01, 0x41, 0x00, 0x42, 0x00]
    );
}

#[test]
fn align_zones_use_half_floats() {
    let zones = DefineFontAlignZones {
        font_id: 1,
        csm_table_hint: CsmTableHint::Medium,
        zones: vec![FontAlignmentZone {
            data: vec![FontAlignmentZoneData { origin: 1.0, size: 0.5 }],
            has_x: true,
            has_y: false,
        }],
    };
    let mut s = WriteStream::new();
    write_define_font_align_zones(&mut s, &zones).unwrap();
    assert_eq!(s.into_bytes(), vec![0x01, 0x00, 0x40, 0x01, 0x00, 0x3c, 0x00, 0x38, 0x01]);
}

#[test]
fn font_name_and_glyph_font() {
    let mut s = WriteStream::new();
    write_define_font_name(
        &mut s,
        &DefineFontName {
            font_id: 1,
            name: "N".to_string(),
            copyright: String::new(),
        },
    );
    assert_eq!(s.into_bytes(), vec![0x01, 0x00, b'N', 0x00, 0x00]);

    let glyph_font = DefineGlyphFont {
        id: 2,
        glyphs: vec![Glyph::default(), Glyph::default()],
    };
    let mut s = WriteStream::new();
    write_define_glyph_font(&mut s, &glyph_font).unwrap();
    assert_eq!(
        s.into_bytes(),
        vec![0x02, 0x00, 0x04, 0x00, 0x06, 0x00, 0x10, 0x00, 0x10, 0x00]
    );
}
