use super::*;
use crate::foundation::error::EmitError;
use crate::model::basic::StraightSRgba8;
use crate::model::morph_shape::MorphColorStop;
use crate::model::shape::ColorStop;

fn two_stop(spread: GradientSpread, color_space: ColorSpace) -> Gradient {
    Gradient {
        spread,
        color_space,
        colors: vec![
            ColorStop {
                ratio: 0,
                color: StraightSRgba8 { r: 255, g: 0, b: 0, a: 128 },
            },
            ColorStop {
                ratio: 255,
                color: StraightSRgba8::opaque(0, 0, 255),
            },
        ],
    }
}

#[test]
fn rgb_gradient_drops_alpha() {
    let mut s = WriteStream::new();
    write_gradient(&mut s, &two_stop(GradientSpread::Pad, ColorSpace::SRgb), false).unwrap();
    assert_eq!(s.into_bytes(), vec![0x02, 0, 255, 0, 0, 255, 0, 0, 255]);
}

#[test]
fn rgba_gradient_packs_spread_and_color_space() {
    let mut s = WriteStream::new();
    write_gradient(&mut s, &two_stop(GradientSpread::Repeat, ColorSpace::LinearRgb), true).unwrap();
    assert_eq!(
        s.into_bytes(),
        vec![0x92, 0, 255, 0, 0, 128, 255, 0, 0, 255, 255]
    );
}

#[test]
fn too_many_stops_are_rejected() {
    let mut gradient = two_stop(GradientSpread::Pad, ColorSpace::SRgb);
    gradient.colors = vec![gradient.colors[0]; 16];
    let err = write_gradient(&mut WriteStream::new(), &gradient, true).unwrap_err();
    assert!(matches!(err, EmitError::Inconsistent(_)), "{err:?}");
}

#[test]
fn morph_stops_are_interleaved() {
    let gradient = MorphGradient {
        spread: GradientSpread::Reflect,
        color_space: ColorSpace::SRgb,
        colors: vec![MorphColorStop {
            ratio: 10,
            color: StraightSRgba8::opaque(1, 2, 3),
            morph_ratio: 20,
            morph_color: StraightSRgba8 { r: 4, g: 5, b: 6, a: 7 },
        }],
    };
    let mut s = WriteStream::new();
    write_morph_gradient(&mut s, &gradient).unwrap();
    assert_eq!(
        s.into_bytes(),
        vec![0x41, 10, 1, 2, 3, 0xff, 20, 4, 5, 6, 7]
    );
}
