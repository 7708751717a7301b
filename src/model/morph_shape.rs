use crate::foundation::fixed::Sfixed8P8;
use crate::model::basic::{Matrix, StraightSRgba8, Vector2D};
use crate::model::shape::{CapStyle, ColorSpace, GradientSpread, JoinStyle};

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Two synchronized outlines (start and end state) sharing one style table.
pub struct MorphShape {
    pub initial_styles: MorphShapeStyles,
    pub records: Vec<MorphShapeRecord>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MorphShapeStyles {
    #[serde(default)]
    pub fill: Vec<MorphFillStyle>,
    #[serde(default)]
    pub line: Vec<MorphLineStyle>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum MorphShapeRecord {
    Edge(MorphEdge),
    StyleChange(MorphStyleChange),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Edge with independent start (`delta`) and end (`morph_delta`) geometry.
pub struct MorphEdge {
    pub delta: Vector2D,
    pub morph_delta: Vector2D,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_delta: Option<Vector2D>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub morph_control_delta: Option<Vector2D>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Style change for the start outline. Only `morph_move_to` is replayed in the end outline.
pub struct MorphStyleChange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub move_to: Option<Vector2D>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub morph_move_to: Option<Vector2D>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left_fill: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right_fill: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_style: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_styles: Option<MorphShapeStyles>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum MorphFillStyle {
    Bitmap(MorphBitmapFill),
    FocalGradient(MorphFocalGradientFill),
    LinearGradient(MorphGradientFill),
    RadialGradient(MorphGradientFill),
    Solid(MorphSolidFill),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MorphSolidFill {
    pub color: StraightSRgba8,
    pub morph_color: StraightSRgba8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MorphBitmapFill {
    pub bitmap_id: u16,
    pub matrix: Matrix,
    pub morph_matrix: Matrix,
    pub repeating: bool,
    pub smoothed: bool,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MorphGradientFill {
    pub matrix: Matrix,
    pub morph_matrix: Matrix,
    pub gradient: MorphGradient,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MorphFocalGradientFill {
    pub matrix: Matrix,
    pub morph_matrix: Matrix,
    pub gradient: MorphGradient,
    pub focal_point: Sfixed8P8,
    pub morph_focal_point: Sfixed8P8,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MorphGradient {
    #[serde(default)]
    pub spread: GradientSpread,
    #[serde(default)]
    pub color_space: ColorSpace,
    pub colors: Vec<MorphColorStop>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MorphColorStop {
    pub ratio: u8,
    pub color: StraightSRgba8,
    pub morph_ratio: u8,
    pub morph_color: StraightSRgba8,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MorphLineStyle {
    pub width: u16,
    pub morph_width: u16,
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
    pub fill: MorphFillStyle,
}
