use super::*;
use crate::foundation::fixed::Sfixed8P8;

fn bytes(write: impl FnOnce(&mut WriteStream) -> EmitResult<()>) -> Vec<u8> {
    let mut s = WriteStream::new();
    write(&mut s).unwrap();
    s.into_bytes()
}

#[test]
fn stage_sized_rect() {
    let rect = Rect {
        x_min: 0,
        x_max: 11000,
        y_min: 0,
        y_max: 8000,
    };
    assert_eq!(
        bytes(|s| write_rect(s, &rect)),
        vec![0x78, 0x00, 0x05, 0x5f, 0x00, 0x00, 0x0f, 0xa0, 0x00]
    );
}

#[test]
fn empty_rect_is_one_byte() {
    assert_eq!(bytes(|s| write_rect(s, &Rect::default())), vec![0x00]);
}

#[test]
fn identity_matrix_keeps_translation_header() {
    assert_eq!(bytes(|s| write_matrix(s, &Matrix::default())), vec![0x00]);
}

#[test]
fn translation_only_matrix() {
    assert_eq!(bytes(|s| write_matrix(s, &Matrix::translate(1, -1))), vec![0x04, 0xe0]);
}

#[test]
fn scaled_matrix() {
    let matrix = Matrix {
        scale_x: Sfixed16P16::from_value(2.0),
        scale_y: Sfixed16P16::from_value(2.0),
        ..Matrix::default()
    };
    assert_eq!(
        bytes(|s| write_matrix(s, &matrix)),
        vec![0xcd, 0x00, 0x00, 0x20, 0x00, 0x00, 0x00]
    );
}

#[test]
fn rotated_matrix_with_translation() {
    let matrix = Matrix {
        rotate_skew1: Sfixed16P16::ONE,
        translate_x: 100,
        translate_y: -100,
        ..Matrix::default()
    };
    assert_eq!(
        bytes(|s| write_matrix(s, &matrix)),
        vec![0x64, 0x00, 0x00, 0x20, 0x00, 0x08, 0x64, 0x9c]
    );
}

#[test]
fn colors_are_plain_bytes() {
    assert_eq!(
        bytes(|s| {
            write_s_rgb8(s, SRgb8 { r: 1, g: 2, b: 3 });
            write_straight_s_rgba8(s, StraightSRgba8::opaque(4, 5, 6));
            Ok(())
        }),
        vec![1, 2, 3, 4, 5, 6, 0xff]
    );
}

#[test]
fn identity_color_transform_is_one_byte() {
    assert_eq!(bytes(|s| write_color_transform(s, &ColorTransform::default())), vec![0x00]);
    assert_eq!(
        bytes(|s| write_color_transform_with_alpha(s, &ColorTransformWithAlpha::default())),
        vec![0x00]
    );
}

#[test]
fn additive_only_color_transform() {
    let ct = ColorTransform {
        red_add: -1,
        ..ColorTransform::default()
    };
    assert_eq!(bytes(|s| write_color_transform(s, &ct)), vec![0x86, 0x00]);
}

#[test]
fn alpha_multiplier_only() {
    let ct = ColorTransformWithAlpha {
        alpha_mult: Sfixed8P8::from_epsilons(128),
        ..ColorTransformWithAlpha::default()
    };
    assert_eq!(
        bytes(|s| write_color_transform_with_alpha(s, &ct)),
        vec![0x69, 0x00, 0x40, 0x10, 0x02, 0x00]
    );
}

#[test]
fn multiplier_and_offset_share_one_width() {
    let ct = ColorTransformWithAlpha {
        red_mult: Sfixed8P8::from_epsilons(128),
        blue_add: 10,
        ..ColorTransformWithAlpha::default()
    };
    assert_eq!(
        bytes(|s| write_color_transform_with_alpha(s, &ct)),
        vec![0xe8, 0x80, 0x40, 0x10, 0x04, 0x00, 0x00, 0x00, 0x00, 0xa0, 0x00]
    );
}

#[test]
fn signed_floor_applies_to_zero_values() {
    assert_eq!(signed_bits_at_least(2, &[0, 0]).unwrap(), 2);
    assert_eq!(signed_bits_at_least(2, &[-100, 3]).unwrap(), 8);
}
