use crate::model::avm1::Action;
use crate::model::basic::{ColorTransformWithAlpha, Matrix};
use crate::model::display::{BlendMode, Filter};
use crate::model::sound::SoundInfo;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A character shown in one or more button states.
pub struct ButtonRecord {
    #[serde(default)]
    pub state_up: bool,
    #[serde(default)]
    pub state_over: bool,
    #[serde(default)]
    pub state_down: bool,
    #[serde(default)]
    pub state_hit_test: bool,
    pub character_id: u16,
    pub depth: u16,
    #[serde(default)]
    pub matrix: Matrix,
    /// Mandatory in the version 2 encoding.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_transform: Option<ColorTransformWithAlpha>,
    #[serde(default)]
    pub filters: Vec<Filter>,
    #[serde(default)]
    pub blend_mode: BlendMode,
}

impl ButtonRecord {
    /// True when the record carries nothing that needs the version 2 encoding.
    pub fn is_version1_compatible(&self) -> bool {
        self.color_transform.is_none_or(|cx| cx.is_identity())
            && self.filters.is_empty()
            && self.blend_mode == BlendMode::Normal
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// State transitions (and optional key press) triggering a button action.
pub struct ButtonCond {
    pub idle_to_over_up: bool,
    pub over_up_to_idle: bool,
    pub over_up_to_over_down: bool,
    pub over_down_to_over_up: bool,
    pub over_down_to_out_down: bool,
    pub out_down_to_over_down: bool,
    pub out_down_to_idle: bool,
    pub idle_to_over_down: bool,
    pub over_down_to_idle: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_press: Option<u8>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ButtonCondAction {
    /// Absent only for the single action of a version 1 button.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditions: Option<ButtonCond>,
    pub actions: Vec<Action>,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ButtonSound {
    pub sound_id: u16,
    #[serde(default)]
    pub sound_info: SoundInfo,
}
