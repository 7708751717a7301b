use crate::foundation::fixed::{Sfixed8P8, Sfixed16P16};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Axis-aligned rectangle in twips.
pub struct Rect {
    pub x_min: i32,
    pub x_max: i32,
    pub y_min: i32,
    pub y_max: i32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Integer 2D offset in twips.
pub struct Vector2D {
    pub x: i32,
    pub y: i32,
}

impl Vector2D {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Opaque sRGB color.
pub struct SRgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// sRGB color with straight (non-premultiplied) alpha.
pub struct StraightSRgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl StraightSRgba8 {
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    pub fn is_opaque(self) -> bool {
        self.a == 0xff
    }

    pub fn rgb(self) -> SRgb8 {
        SRgb8 {
            r: self.r,
            g: self.g,
            b: self.b,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// 2D affine transform.
///
/// Scale and skew are 16.16 fixed point, translation is in twips.
pub struct Matrix {
    #[serde(default = "one_16p16")]
    pub scale_x: Sfixed16P16,
    #[serde(default = "one_16p16")]
    pub scale_y: Sfixed16P16,
    #[serde(default)]
    pub rotate_skew0: Sfixed16P16,
    #[serde(default)]
    pub rotate_skew1: Sfixed16P16,
    #[serde(default)]
    pub translate_x: i32,
    #[serde(default)]
    pub translate_y: i32,
}

impl Default for Matrix {
    fn default() -> Self {
        Self {
            scale_x: Sfixed16P16::ONE,
            scale_y: Sfixed16P16::ONE,
            rotate_skew0: Sfixed16P16::ZERO,
            rotate_skew1: Sfixed16P16::ZERO,
            translate_x: 0,
            translate_y: 0,
        }
    }
}

impl Matrix {
    pub fn translate(x: i32, y: i32) -> Self {
        Self {
            translate_x: x,
            translate_y: y,
            ..Self::default()
        }
    }
}

fn one_16p16() -> Sfixed16P16 {
    Sfixed16P16::ONE
}

fn one_8p8() -> Sfixed8P8 {
    Sfixed8P8::ONE
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// RGB color transform: `channel * mult + add`.
pub struct ColorTransform {
    #[serde(default = "one_8p8")]
    pub red_mult: Sfixed8P8,
    #[serde(default = "one_8p8")]
    pub green_mult: Sfixed8P8,
    #[serde(default = "one_8p8")]
    pub blue_mult: Sfixed8P8,
    #[serde(default)]
    pub red_add: i16,
    #[serde(default)]
    pub green_add: i16,
    #[serde(default)]
    pub blue_add: i16,
}

impl Default for ColorTransform {
    fn default() -> Self {
        Self {
            red_mult: Sfixed8P8::ONE,
            green_mult: Sfixed8P8::ONE,
            blue_mult: Sfixed8P8::ONE,
            red_add: 0,
            green_add: 0,
            blue_add: 0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// RGBA color transform: `channel * mult + add`.
pub struct ColorTransformWithAlpha {
    #[serde(default = "one_8p8")]
    pub red_mult: Sfixed8P8,
    #[serde(default = "one_8p8")]
    pub green_mult: Sfixed8P8,
    #[serde(default = "one_8p8")]
    pub blue_mult: Sfixed8P8,
    #[serde(default = "one_8p8")]
    pub alpha_mult: Sfixed8P8,
    #[serde(default)]
    pub red_add: i16,
    #[serde(default)]
    pub green_add: i16,
    #[serde(default)]
    pub blue_add: i16,
    #[serde(default)]
    pub alpha_add: i16,
}

impl Default for ColorTransformWithAlpha {
    fn default() -> Self {
        Self {
            red_mult: Sfixed8P8::ONE,
            green_mult: Sfixed8P8::ONE,
            blue_mult: Sfixed8P8::ONE,
            alpha_mult: Sfixed8P8::ONE,
            red_add: 0,
            green_add: 0,
            blue_add: 0,
            alpha_add: 0,
        }
    }
}

impl ColorTransformWithAlpha {
    pub fn is_identity(&self) -> bool {
        *self == Self::default()
    }

    /// True when the alpha channel is touched, i.e. the transform needs the alpha encoding.
    pub fn uses_alpha(&self) -> bool {
        self.alpha_mult != Sfixed8P8::ONE || self.alpha_add != 0
    }

    pub fn without_alpha(&self) -> ColorTransform {
        ColorTransform {
            red_mult: self.red_mult,
            green_mult: self.green_mult,
            blue_mult: self.blue_mult,
            red_add: self.red_add,
            green_add: self.green_add,
            blue_add: self.blue_add,
        }
    }
}
