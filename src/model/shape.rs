use crate::foundation::fixed::Sfixed8P8;
use crate::model::basic::{Matrix, StraightSRgba8, Vector2D};

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// A vector outline: an initial style table and a record stream.
pub struct Shape {
    pub initial_styles: ShapeStyles,
    pub records: Vec<ShapeRecord>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Fill and line style tables. Style indices in records are 1-based into these lists.
pub struct ShapeStyles {
    #[serde(default)]
    pub fill: Vec<FillStyle>,
    #[serde(default)]
    pub line: Vec<LineStyle>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum ShapeRecord {
    Edge(Edge),
    StyleChange(StyleChange),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// A straight or quadratic edge, relative to the current pen position.
///
/// `delta` is the total displacement. For curves, `control_delta` is the offset of the control
/// point and the anchor is reached with `delta - control_delta`.
pub struct Edge {
    pub delta: Vector2D,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_delta: Option<Vector2D>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StyleChange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub move_to: Option<Vector2D>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left_fill: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right_fill: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_style: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_styles: Option<ShapeStyles>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum FillStyle {
    Bitmap(BitmapFill),
    FocalGradient(FocalGradientFill),
    LinearGradient(GradientFill),
    RadialGradient(GradientFill),
    Solid(SolidFill),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SolidFill {
    pub color: StraightSRgba8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BitmapFill {
    pub bitmap_id: u16,
    pub matrix: Matrix,
    pub repeating: bool,
    pub smoothed: bool,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GradientFill {
    pub matrix: Matrix,
    pub gradient: Gradient,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FocalGradientFill {
    pub matrix: Matrix,
    pub gradient: Gradient,
    pub focal_point: Sfixed8P8,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Gradient {
    #[serde(default)]
    pub spread: GradientSpread,
    #[serde(default)]
    pub color_space: ColorSpace,
    pub colors: Vec<ColorStop>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ColorStop {
    pub ratio: u8,
    pub color: StraightSRgba8,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum GradientSpread {
    #[default]
    Pad,
    Reflect,
    Repeat,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ColorSpace {
    #[default]
    SRgb,
    LinearRgb,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Stroke style. Any non-default cap/join/flag/fill requires the version 4 encoding.
pub struct LineStyle {
    pub width: u16,
    #[serde(default)]
    pub start_cap: CapStyle,
    #[serde(default)]
    pub end_cap: CapStyle,
    #[serde(default)]
    pub join: JoinStyle,
    #[serde(default)]
    pub no_h_scale: bool,
    #[serde(default)]
    pub no_v_scale: bool,
    #[serde(default)]
    pub no_close: bool,
    #[serde(default)]
    pub pixel_hinting: bool,
    pub fill: FillStyle,
}

impl LineStyle {
    /// A round-capped, round-joined solid stroke.
    pub fn solid(width: u16, color: StraightSRgba8) -> Self {
        Self {
            width,
            start_cap: CapStyle::Round,
            end_cap: CapStyle::Round,
            join: JoinStyle::Round,
            no_h_scale: false,
            no_v_scale: false,
            no_close: false,
            pixel_hinting: false,
            fill: FillStyle::Solid(SolidFill { color }),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum CapStyle {
    None,
    #[default]
    Round,
    Square,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum JoinStyle {
    Bevel,
    #[default]
    Round,
    Miter { limit: Sfixed8P8 },
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// A font glyph outline. Glyphs use a single implicit fill style and no line styles.
pub struct Glyph {
    pub records: Vec<ShapeRecord>,
}
