use crate::emit::avm1::write_action_string;
use crate::emit::basic::{write_color_transform_with_alpha, write_matrix};
use crate::emit::display::{write_blend_mode, write_filter_list};
use crate::emit::sound::write_sound_info;
use crate::foundation::error::{EmitError, EmitResult, count_as};
use crate::io::stream::WriteStream;
use crate::model::button::{ButtonCond, ButtonCondAction, ButtonRecord, ButtonSound};
use crate::model::display::BlendMode;
use crate::model::tags::DefineButton;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum ButtonVersion {
    Button1 = 1,
    Button2 = 2,
}

impl ButtonVersion {
    pub(crate) fn tag_code(self) -> u16 {
        match self {
            Self::Button1 => 7,
            Self::Button2 => 34,
        }
    }
}

/// Version 1 holds a single unconditional action list and plain records only.
pub(crate) fn min_button_version(value: &DefineButton) -> ButtonVersion {
    let needs_version2 = value.track_as_menu
        || !value.records.iter().all(ButtonRecord::is_version1_compatible)
        || value.actions.len() != 1
        || value.actions.iter().any(|action| action.conditions.is_some());
    if needs_version2 {
        ButtonVersion::Button2
    } else {
        ButtonVersion::Button1
    }
}

/// Writes a DefineButton / DefineButton2 body (id included) and returns the version used.
pub(crate) fn write_define_button(stream: &mut WriteStream, value: &DefineButton) -> EmitResult<ButtonVersion> {
    let version = min_button_version(value);
    stream.write_u16_le(value.id);

    let mut records = WriteStream::new();
    write_button_records(&mut records, &value.records, version)?;

    match version {
        ButtonVersion::Button1 => {
            stream.write_stream(&records);
            let actions = value.actions.first().map(|cond| cond.actions.as_slice()).unwrap_or(&[]);
            write_action_string(stream, actions)?;
        }
        ButtonVersion::Button2 => {
            stream.write_u8(u8::from(value.track_as_menu));
            if value.actions.is_empty() {
                stream.write_u16_le(0);
                stream.write_stream(&records);
            } else {
                // The offset counts its own two bytes.
                stream.write_u16_le(count_as(records.byte_position() + 2, "button record bytes")?);
                stream.write_stream(&records);
                write_button2_cond_actions(stream, &value.actions)?;
            }
        }
    }
    Ok(version)
}

fn write_button_records(stream: &mut WriteStream, records: &[ButtonRecord], version: ButtonVersion) -> EmitResult<()> {
    for record in records {
        write_button_record(stream, record, version)?;
    }
    stream.write_u8(0);
    Ok(())
}

pub(crate) fn write_button_record(
    stream: &mut WriteStream,
    value: &ButtonRecord,
    version: ButtonVersion,
) -> EmitResult<()> {
    let extended = version >= ButtonVersion::Button2;
    let has_filters = extended && !value.filters.is_empty();
    let has_blend_mode = extended && value.blend_mode != BlendMode::Normal;

    stream.write_u8(
        u8::from(value.state_up)
            | u8::from(value.state_over) << 1
            | u8::from(value.state_down) << 2
            | u8::from(value.state_hit_test) << 3
            | u8::from(has_filters) << 4
            | u8::from(has_blend_mode) << 5,
    );
    stream.write_u16_le(value.character_id);
    stream.write_u16_le(value.depth);
    write_matrix(stream, &value.matrix)?;

    if extended {
        let color_transform = value
            .color_transform
            .as_ref()
            .ok_or_else(|| EmitError::missing_field("button_record.color_transform"))?;
        write_color_transform_with_alpha(stream, color_transform)?;
        if has_filters {
            write_filter_list(stream, &value.filters)?;
        }
        if has_blend_mode {
            write_blend_mode(stream, value.blend_mode);
        }
    }
    Ok(())
}

/// Each entry is prefixed by its byte size; the last entry gets a zero size.
fn write_button2_cond_actions(stream: &mut WriteStream, value: &[ButtonCondAction]) -> EmitResult<()> {
    for (index, cond_action) in value.iter().enumerate() {
        let mut entry = WriteStream::new();
        write_button2_cond_action(&mut entry, cond_action)?;
        let is_last = index + 1 == value.len();
        let size = if is_last {
            0
        } else {
            // Size includes the size field itself.
            count_as(entry.byte_position() + 2, "button condition action bytes")?
        };
        stream.write_u16_le(size);
        stream.write_stream(&entry);
    }
    Ok(())
}

fn write_button2_cond_action(stream: &mut WriteStream, value: &ButtonCondAction) -> EmitResult<()> {
    let conditions = value
        .conditions
        .as_ref()
        .ok_or_else(|| EmitError::missing_field("button_cond_action.conditions"))?;
    write_button_cond(stream, conditions);
    write_action_string(stream, &value.actions)
}

pub(crate) fn write_button_cond(stream: &mut WriteStream, value: &ButtonCond) {
    let key_code = u16::from(value.key_press.unwrap_or(0) & 0x7f);
    let flags = u16::from(value.idle_to_over_up)
        | u16::from(value.over_up_to_idle) << 1
        | u16::from(value.over_up_to_over_down) << 2
        | u16::from(value.over_down_to_over_up) << 3
        | u16::from(value.over_down_to_out_down) << 4
        | u16::from(value.out_down_to_over_down) << 5
        | u16::from(value.out_down_to_idle) << 6
        | u16::from(value.idle_to_over_down) << 7
        | u16::from(value.over_down_to_idle) << 8
        | key_code << 9;
    stream.write_u16_le(flags);
}

/// An absent sound is a zero id.
pub(crate) fn write_button_sound(stream: &mut WriteStream, value: Option<&ButtonSound>) -> EmitResult<()> {
    match value {
        None => stream.write_u16_le(0),
        Some(sound) => {
            if sound.sound_id == 0 {
                return Err(EmitError::inconsistent("button sound id 0 is reserved for no sound"));
            }
            stream.write_u16_le(sound.sound_id);
            write_sound_info(stream, &sound.sound_info)?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/emit/button.rs"]
mod tests;
