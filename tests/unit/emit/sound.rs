use super::*;
use crate::model::sound::SoundEnvelope;

#[test]
fn nominal_and_exact_rates_share_codes() {
    for (hz, code) in [(5500, 0), (5512, 0), (11025, 1), (22000, 2), (44100, 3)] {
        assert_eq!(sound_rate_code(hz).unwrap(), code, "{hz} Hz");
    }
    let err = sound_rate_code(48000).unwrap_err();
    assert!(matches!(err, EmitError::UnexpectedVariant(_)), "{err:?}");
}

#[test]
fn sample_size_is_one_bit() {
    assert_eq!(sound_size_bit(8).unwrap(), 0);
    assert_eq!(sound_size_bit(16).unwrap(), 1);
    assert!(sound_size_bit(12).is_err());
}

#[test]
fn format_nibble() {
    assert_eq!(sound_format_bits(44100, 16, SoundType::Stereo).unwrap(), 0x0f);
    assert_eq!(sound_format_bits(11025, 8, SoundType::Mono).unwrap(), 0x04);
}

#[test]
fn coding_format_codes() {
    assert_eq!(audio_coding_format_code(AudioCodingFormat::Mp3), 2);
    assert_eq!(audio_coding_format_code(AudioCodingFormat::Nellymoser), 6);
    assert_eq!(audio_coding_format_code(AudioCodingFormat::Speex), 11);
}

#[test]
fn plain_sound_info_is_one_byte() {
    let mut s = WriteStream::new();
    write_sound_info(&mut s, &SoundInfo::default()).unwrap();
    assert_eq!(s.into_bytes(), vec![0x00]);
}

#[test]
fn sound_info_fields_follow_flag_order() {
    let info = SoundInfo {
        sync_stop: true,
        sync_no_multiple: false,
        in_point: Some(1),
        out_point: Some(2),
        loop_count: Some(3),
        envelope_records: Some(vec![SoundEnvelope {
            pos44: 4,
            left_level: 5,
            right_level: 6,
        }]),
    };
    let mut s = WriteStream::new();
    write_sound_info(&mut s, &info).unwrap();
    assert_eq!(
        s.into_bytes(),
        vec![
            0x2f, // stop | in | out | loops | envelope
            1, 0, 0, 0, // in
            2, 0, 0, 0, // out
            3, 0, // loops
            1, 4, 0, 0, 0, 5, 0, 6, 0, // envelope
        ]
    );
}

#[test]
fn in_point_alone_sets_bit_0() {
    let info = SoundInfo {
        in_point: Some(1),
        ..SoundInfo::default()
    };
    let mut s = WriteStream::new();
    write_sound_info(&mut s, &info).unwrap();
    assert_eq!(s.into_bytes(), vec![0x01, 1, 0, 0, 0]);
}

#[test]
fn out_point_alone_sets_bit_1() {
    let info = SoundInfo {
        out_point: Some(7),
        ..SoundInfo::default()
    };
    let mut s = WriteStream::new();
    write_sound_info(&mut s, &info).unwrap();
    assert_eq!(s.into_bytes(), vec![0x02, 7, 0, 0, 0]);
}

#[test]
fn loops_alone_set_bit_2() {
    let info = SoundInfo {
        loop_count: Some(2),
        ..SoundInfo::default()
    };
    let mut s = WriteStream::new();
    write_sound_info(&mut s, &info).unwrap();
    assert_eq!(s.into_bytes(), vec![0x04, 2, 0]);
}

#[test]
fn envelope_alone_sets_bit_3() {
    let info = SoundInfo {
        sync_no_multiple: true,
        envelope_records: Some(vec![]),
        ..SoundInfo::default()
    };
    let mut s = WriteStream::new();
    write_sound_info(&mut s, &info).unwrap();
    assert_eq!(s.into_bytes(), vec![0x18, 0]);
}
