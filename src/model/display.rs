use crate::foundation::fixed::{Sfixed8P8, Sfixed16P16};
use crate::model::avm1::Action;
use crate::model::basic::StraightSRgba8;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum BlendMode {
    #[default]
    Normal,
    Layer,
    Multiply,
    Screen,
    Lighten,
    Darken,
    Difference,
    Add,
    Subtract,
    Invert,
    Alpha,
    Erase,
    Overlay,
    Hardlight,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Bitmap effect applied to a display object or button record.
pub enum Filter {
    Bevel(BevelFilter),
    Blur(BlurFilter),
    ColorMatrix(ColorMatrixFilter),
    Convolution(ConvolutionFilter),
    DropShadow(DropShadowFilter),
    Glow(GlowFilter),
    GradientBevel(GradientFilter),
    GradientGlow(GradientFilter),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BlurFilter {
    pub blur_x: Sfixed16P16,
    pub blur_y: Sfixed16P16,
    pub passes: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DropShadowFilter {
    pub color: StraightSRgba8,
    pub blur_x: Sfixed16P16,
    pub blur_y: Sfixed16P16,
    pub angle: Sfixed16P16,
    pub distance: Sfixed16P16,
    pub strength: Sfixed8P8,
    #[serde(default)]
    pub inner: bool,
    #[serde(default)]
    pub knockout: bool,
    #[serde(default)]
    pub composite_source: bool,
    pub passes: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GlowFilter {
    pub color: StraightSRgba8,
    pub blur_x: Sfixed16P16,
    pub blur_y: Sfixed16P16,
    pub strength: Sfixed8P8,
    #[serde(default)]
    pub inner: bool,
    #[serde(default)]
    pub knockout: bool,
    #[serde(default)]
    pub composite_source: bool,
    pub passes: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BevelFilter {
    pub shadow_color: StraightSRgba8,
    pub highlight_color: StraightSRgba8,
    pub blur_x: Sfixed16P16,
    pub blur_y: Sfixed16P16,
    pub angle: Sfixed16P16,
    pub distance: Sfixed16P16,
    pub strength: Sfixed8P8,
    #[serde(default)]
    pub inner: bool,
    #[serde(default)]
    pub knockout: bool,
    #[serde(default)]
    pub composite_source: bool,
    #[serde(default)]
    pub on_top: bool,
    pub passes: u8,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Shared layout of the gradient glow and gradient bevel filters.
pub struct GradientFilter {
    pub gradient: Vec<FilterColorStop>,
    pub blur_x: Sfixed16P16,
    pub blur_y: Sfixed16P16,
    pub angle: Sfixed16P16,
    pub distance: Sfixed16P16,
    pub strength: Sfixed8P8,
    #[serde(default)]
    pub inner: bool,
    #[serde(default)]
    pub knockout: bool,
    #[serde(default)]
    pub composite_source: bool,
    #[serde(default)]
    pub on_top: bool,
    pub passes: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FilterColorStop {
    pub ratio: u8,
    pub color: StraightSRgba8,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ConvolutionFilter {
    pub matrix_width: u8,
    pub matrix_height: u8,
    pub divisor: f32,
    pub bias: f32,
    /// Row-major, `matrix_width * matrix_height` coefficients.
    pub matrix: Vec<f32>,
    pub default_color: StraightSRgba8,
    #[serde(default)]
    pub clamp: bool,
    #[serde(default)]
    pub preserve_alpha: bool,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ColorMatrixFilter {
    pub matrix: [f32; 20],
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Sprite event mask. The last three events only exist in the 32-bit (SWF 6+) encoding.
pub struct ClipEventFlags {
    pub load: bool,
    pub enter_frame: bool,
    pub unload: bool,
    pub mouse_move: bool,
    pub mouse_down: bool,
    pub mouse_up: bool,
    pub key_down: bool,
    pub key_up: bool,
    pub data: bool,
    pub initialize: bool,
    pub press: bool,
    pub release: bool,
    pub release_outside: bool,
    pub roll_over: bool,
    pub roll_out: bool,
    pub drag_over: bool,
    pub drag_out: bool,
    pub key_press: bool,
    pub construct: bool,
}

impl ClipEventFlags {
    /// Events in wire bit order (bit 0 first).
    pub fn bits(&self) -> [bool; 19] {
        [
            self.load,
            self.enter_frame,
            self.unload,
            self.mouse_move,
            self.mouse_down,
            self.mouse_up,
            self.key_down,
            self.key_up,
            self.data,
            self.initialize,
            self.press,
            self.release,
            self.release_outside,
            self.roll_over,
            self.roll_out,
            self.drag_over,
            self.drag_out,
            self.key_press,
            self.construct,
        ]
    }

    pub fn union(self, other: Self) -> Self {
        Self {
            load: self.load || other.load,
            enter_frame: self.enter_frame || other.enter_frame,
            unload: self.unload || other.unload,
            mouse_move: self.mouse_move || other.mouse_move,
            mouse_down: self.mouse_down || other.mouse_down,
            mouse_up: self.mouse_up || other.mouse_up,
            key_down: self.key_down || other.key_down,
            key_up: self.key_up || other.key_up,
            data: self.data || other.data,
            initialize: self.initialize || other.initialize,
            press: self.press || other.press,
            release: self.release || other.release,
            release_outside: self.release_outside || other.release_outside,
            roll_over: self.roll_over || other.roll_over,
            roll_out: self.roll_out || other.roll_out,
            drag_over: self.drag_over || other.drag_over,
            drag_out: self.drag_out || other.drag_out,
            key_press: self.key_press || other.key_press,
            construct: self.construct || other.construct,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// An event handler attached to a placed sprite.
pub struct ClipAction {
    pub events: ClipEventFlags,
    /// Required when `events.key_press` is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_code: Option<u8>,
    pub actions: Vec<Action>,
}
