use std::io::Read as _;

use super::*;
use crate::foundation::fixed::Ufixed8P8;
use crate::model::basic::Rect;
use crate::model::tags::Tag;

fn one_frame() -> Movie {
    Movie {
        header: Header {
            swf_version: 10,
            frame_size: Rect::default(),
            frame_rate: Ufixed8P8::from_epsilons(24 << 8),
            frame_count: 1,
        },
        tags: vec![Tag::ShowFrame],
    }
}

const PAYLOAD: [u8; 9] = [0x00, 0x00, 0x18, 0x01, 0x00, 0x40, 0x00, 0x00, 0x00];

#[test]
fn uncompressed_movie() {
    let bytes = emit_movie(&one_frame(), CompressionMethod::None).unwrap();
    let mut expected = vec![b'F', b'W', b'S', 0x0a, 0x11, 0x00, 0x00, 0x00];
    expected.extend_from_slice(&PAYLOAD);
    assert_eq!(bytes, expected);
}

#[test]
fn deflated_movie_keeps_uncompressed_length() {
    let bytes = emit_movie(&one_frame(), CompressionMethod::Deflate).unwrap();
    assert_eq!(&bytes[..8], &[b'C', b'W', b'S', 0x0a, 0x11, 0x00, 0x00, 0x00]);

    let mut decoder = flate2::read::ZlibDecoder::new(&bytes[8..]);
    let mut payload = Vec::new();
    decoder.read_to_end(&mut payload).unwrap();
    assert_eq!(payload, PAYLOAD);
}

#[test]
fn lzma_is_not_implemented() {
    let err = emit_movie(&one_frame(), CompressionMethod::Lzma).unwrap_err();
    assert!(matches!(err, EmitError::NotImplemented(_)), "{err:?}");
}

#[test]
fn encoding_is_deterministic() {
    let movie = one_frame();
    for compression in [CompressionMethod::None, CompressionMethod::Deflate] {
        assert_eq!(
            emit_movie(&movie, compression).unwrap(),
            emit_movie(&movie, compression).unwrap()
        );
    }
}

#[test]
fn write_movie_appends_to_existing_stream() {
    let mut s = WriteStream::new();
    s.write_u8(0xaa);
    write_movie(&mut s, &one_frame(), CompressionMethod::None).unwrap();
    let bytes = s.into_bytes();
    assert_eq!(bytes[0], 0xaa);
    assert_eq!(&bytes[1..4], b"FWS");
}
