use super::*;

fn f16_be(value: f32) -> Vec<u8> {
    let mut s = WriteStream::new();
    s.write_f16_be(value);
    s.into_bytes()
}

#[test]
fn bits_are_packed_msb_first() {
    let mut s = WriteStream::new();
    s.write_bool_bit(true);
    s.write_bits_unsigned(3, 0b010).unwrap();
    s.write_bits_unsigned(6, 0b110011).unwrap();
    assert_eq!(s.byte_position(), 1);
    s.align();
    assert_eq!(s.into_bytes(), vec![0b1010_1100, 0b1100_0000]);
}

#[test]
fn signed_bits_use_twos_complement() {
    let mut s = WriteStream::new();
    s.write_bits_signed(4, -1).unwrap();
    s.write_bits_signed(4, -8).unwrap();
    s.write_bits_signed(8, 127).unwrap();
    s.write_bits_signed(32, i32::MIN).unwrap();
    assert_eq!(s.into_bytes(), vec![0xf8, 0x7f, 0x80, 0x00, 0x00, 0x00]);
}

#[test]
fn zero_width_writes_nothing() {
    let mut s = WriteStream::new();
    s.write_bits_unsigned(0, 0).unwrap();
    s.write_bits_signed(0, 0).unwrap();
    assert!(s.is_aligned());
    assert!(s.into_bytes().is_empty());
}

#[test]
fn values_that_do_not_fit_are_rejected() {
    let mut s = WriteStream::new();
    assert!(matches!(
        s.write_bits_unsigned(3, 8),
        Err(EmitError::Range(_))
    ));
    assert!(matches!(s.write_bits_signed(3, 4), Err(EmitError::Range(_))));
    assert!(matches!(s.write_bits_signed(3, -5), Err(EmitError::Range(_))));
    assert!(matches!(s.write_bits_signed(0, 1), Err(EmitError::Range(_))));
    assert!(matches!(
        s.write_bits_unsigned(33, 0),
        Err(EmitError::Range(_))
    ));
    s.write_bits_unsigned(32, u32::MAX).unwrap();
}

#[test]
fn align_is_idempotent() {
    let mut s = WriteStream::new();
    s.write_bool_bit(true);
    s.align();
    assert_eq!(s.byte_position(), 1);
    s.align();
    assert_eq!(s.byte_position(), 1);
    assert_eq!(s.to_bytes(), vec![0x80]);
}

#[test]
fn byte_writes_align_first_and_position_excludes_pending_bits() {
    let mut s = WriteStream::new();
    s.write_u8(0x12);
    s.write_bits_unsigned(2, 0b11).unwrap();
    assert_eq!(s.byte_position(), 1);
    s.write_u16_le(0xabcd);
    assert_eq!(s.byte_position(), 4);
    assert_eq!(s.into_bytes(), vec![0x12, 0xc0, 0xcd, 0xab]);
}

#[test]
fn to_bytes_is_repeatable() {
    let mut s = WriteStream::new();
    s.write_u8(1);
    s.write_bits_unsigned(4, 0xf).unwrap();
    assert_eq!(s.to_bytes(), vec![0x01, 0xf0]);
    assert_eq!(s.to_bytes(), vec![0x01, 0xf0]);
    s.write_bits_unsigned(4, 0x1).unwrap();
    assert_eq!(s.to_bytes(), vec![0x01, 0xf1]);
}

#[test]
fn fixed_width_integers_and_floats() {
    let mut s = WriteStream::new();
    s.write_i16_le(-2);
    s.write_u32_le(0x0102_0304);
    s.write_u32_be(0x0102_0304);
    s.write_i32_le(-1);
    s.write_f32_le(1.0);
    s.write_f32_be(1.0);
    assert_eq!(
        s.into_bytes(),
        vec![
            0xfe, 0xff, 0x04, 0x03, 0x02, 0x01, 0x01, 0x02, 0x03, 0x04, 0xff, 0xff, 0xff, 0xff,
            0x00, 0x00, 0x80, 0x3f, 0x3f, 0x80, 0x00, 0x00,
        ]
    );

    let mut s = WriteStream::new();
    s.write_f64_le(1.0);
    assert_eq!(s.into_bytes(), vec![0, 0, 0, 0, 0, 0, 0xf0, 0x3f]);
}

#[test]
fn fixed_point_writes_epsilons() {
    let mut s = WriteStream::new();
    s.write_sfixed8p8_le(Sfixed8P8::from_value(-1.0));
    s.write_ufixed8p8_le(Ufixed8P8::from_value(24.0));
    s.write_sfixed16p16_le(Sfixed16P16::ONE);
    s.write_ufixed16p16_le(Ufixed16P16::from_epsilons(0x8000));
    assert_eq!(
        s.into_bytes(),
        vec![
            0x00, 0xff, 0x00, 0x18, 0x00, 0x00, 0x01, 0x00, 0x00, 0x80, 0x00, 0x00
        ]
    );
}

#[test]
fn c_string_is_nul_terminated_utf8() {
    let mut s = WriteStream::new();
    s.write_c_string("hé");
    s.write_c_string("");
    assert_eq!(s.into_bytes(), vec![b'h', 0xc3, 0xa9, 0x00, 0x00]);
}

#[test]
fn leb128_encoding() {
    let cases: [(u32, &[u8]); 5] = [
        (0, &[0x00]),
        (127, &[0x7f]),
        (128, &[0x80, 0x01]),
        (300, &[0xac, 0x02]),
        (u32::MAX, &[0xff, 0xff, 0xff, 0xff, 0x0f]),
    ];
    for (input, expected) in cases {
        let mut s = WriteStream::new();
        s.write_u32_leb128(input);
        assert_eq!(s.into_bytes(), expected, "input {input}");
    }
}

#[test]
fn splicing_copies_the_finalized_substream() {
    let mut child = WriteStream::new();
    child.write_u8(0xaa);
    child.write_bool_bit(true);

    let mut parent = WriteStream::new();
    parent.write_bits_unsigned(1, 1).unwrap();
    parent.write_stream(&child);
    assert_eq!(parent.byte_position(), 3);
    assert_eq!(parent.into_bytes(), vec![0x80, 0xaa, 0x80]);
}

#[test]
fn float16_table() {
    assert_eq!(f16_be(-0.0), vec![0x80, 0x00]);
    assert_eq!(f16_be(0.0), vec![0x00, 0x00]);
    assert_eq!(f16_be(1.0), vec![0x3c, 0x00]);
    assert_eq!(f16_be(-1.0), vec![0xbc, 0x00]);
    assert_eq!(f16_be(0.5), vec![0x38, 0x00]);
    assert_eq!(f16_be(2.0), vec![0x40, 0x00]);
    assert_eq!(f16_be(1.59375), vec![0x3e, 0x60]);
    assert_eq!(f16_be(1.0 + 2f32.powi(-10)), vec![0x3c, 0x01]);
    assert_eq!(f16_be(2f32.powi(15)), vec![0x78, 0x00]);
    assert_eq!(f16_be(65504.0), vec![0x7b, 0xff]);
    assert_eq!(f16_be(2f32.powi(-14)), vec![0x04, 0x00]);
    assert_eq!(f16_be(2f32.powi(-24)), vec![0x00, 0x01]);
}

#[test]
fn float16_clamps_to_infinity_and_collapses_nan() {
    assert_eq!(f16_be(65536.0), vec![0x7c, 0x00]);
    assert_eq!(f16_be(f32::INFINITY), f16_be(65536.0));
    assert_eq!(f16_be(f32::NEG_INFINITY), vec![0xfc, 0x00]);
    assert_eq!(f16_be(f32::NAN), vec![0xff, 0xff]);
}

#[test]
fn float16_le_swaps_bytes() {
    let mut s = WriteStream::new();
    s.write_f16_le(1.0);
    assert_eq!(s.into_bytes(), vec![0x00, 0x3c]);
}
