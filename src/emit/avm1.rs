//! AVM1 action encoder.
//!
//! Each action is an opcode byte, followed by a `u16` length and a body when the body is
//! non-empty. Actions owning nested blocks (`DefineFunction`, `DefineFunction2`, `Try`, `With`)
//! store the block sizes in their body and the blocks right after it, outside the length.

use crate::foundation::error::{EmitError, EmitResult, count_as};
use crate::io::stream::WriteStream;
use crate::model::avm1::{Action, CatchTarget, GetUrl2Method, Try, Value};

/// Writes a block followed by the `End` action.
pub(crate) fn write_action_string(stream: &mut WriteStream, actions: &[Action]) -> EmitResult<()> {
    write_action_block(stream, actions)?;
    stream.write_u8(0x00);
    Ok(())
}

/// Writes a sequence of actions, resolving `Jump`/`If` action offsets to byte offsets.
fn write_action_block(stream: &mut WriteStream, actions: &[Action]) -> EmitResult<()> {
    // First pass: encode with placeholder branches to learn every action's position.
    let mut encoded = Vec::with_capacity(actions.len());
    let mut starts = Vec::with_capacity(actions.len());
    let mut total = 0usize;
    for action in actions {
        let mut action_stream = WriteStream::new();
        write_action(&mut action_stream, action, 0)?;
        starts.push(total);
        total += action_stream.byte_position();
        encoded.push(action_stream);
    }

    for (index, (action, action_stream)) in actions.iter().zip(&encoded).enumerate() {
        let branch = match action {
            Action::Jump(branch) | Action::If(branch) => branch,
            _ => {
                stream.write_stream(action_stream);
                continue;
            }
        };
        let end = starts[index] + action_stream.byte_position();
        let target = index as i64 + 1 + i64::from(branch.offset);
        if target < 0 {
            return Err(EmitError::inconsistent(format!(
                "branch at action {index} targets before the start of its block"
            )));
        }
        let target_byte = starts.get(target as usize).copied().unwrap_or(total);
        let byte_offset = i16::try_from(target_byte as i64 - end as i64).map_err(|_| {
            EmitError::inconsistent(format!("branch at action {index} does not fit in i16"))
        })?;
        tracing::trace!(index, target, byte_offset, "resolved branch");
        write_action(stream, action, byte_offset)?;
    }
    Ok(())
}

fn write_action(stream: &mut WriteStream, action: &Action, branch_offset: i16) -> EmitResult<()> {
    let mut body = WriteStream::new();
    let mut blocks = WriteStream::new();
    write_action_body(&mut body, &mut blocks, action, branch_offset)?;

    stream.write_u8(action_code(action));
    if body.byte_position() > 0 {
        stream.write_u16_le(count_as(body.byte_position(), "action body bytes")?);
    }
    stream.write_stream(&body);
    stream.write_stream(&blocks);
    Ok(())
}

fn write_action_body(
    body: &mut WriteStream,
    blocks: &mut WriteStream,
    action: &Action,
    branch_offset: i16,
) -> EmitResult<()> {
    match action {
        Action::ConstantPool(pool) => {
            body.write_u16_le(count_as(pool.constant_pool.len(), "constant pool entries")?);
            for constant in &pool.constant_pool {
                body.write_c_string(constant);
            }
        }
        Action::DefineFunction(function) => {
            body.write_c_string(&function.name);
            body.write_u16_le(count_as(function.parameters.len(), "function parameters")?);
            for parameter in &function.parameters {
                body.write_c_string(parameter);
            }
            write_nested_block(body, blocks, &function.body)?;
        }
        Action::DefineFunction2(function) => {
            body.write_c_string(&function.name);
            body.write_u16_le(count_as(function.parameters.len(), "function parameters")?);
            body.write_u8(function.register_count);
            let flags = u16::from(function.preload_this)
                | u16::from(function.suppress_this) << 1
                | u16::from(function.preload_arguments) << 2
                | u16::from(function.suppress_arguments) << 3
                | u16::from(function.preload_super) << 4
                | u16::from(function.suppress_super) << 5
                | u16::from(function.preload_root) << 6
                | u16::from(function.preload_parent) << 7
                | u16::from(function.preload_global) << 8;
            body.write_u16_le(flags);
            for parameter in &function.parameters {
                body.write_u8(parameter.register);
                body.write_c_string(&parameter.name);
            }
            write_nested_block(body, blocks, &function.body)?;
        }
        Action::GetUrl(get_url) => {
            body.write_c_string(&get_url.url);
            body.write_c_string(&get_url.target);
        }
        Action::GetUrl2(get_url2) => {
            let method = match get_url2.method {
                GetUrl2Method::None => 0u8,
                GetUrl2Method::Get => 1,
                GetUrl2Method::Post => 2,
            };
            body.write_u8(
                u8::from(get_url2.load_variables) | u8::from(get_url2.load_target) << 1 | method << 6,
            );
        }
        Action::GotoFrame(goto) => body.write_u16_le(goto.frame),
        Action::GotoFrame2(goto) => {
            let has_bias = goto.scene_bias != 0;
            body.write_u8(u8::from(has_bias) | u8::from(goto.play) << 1);
            if has_bias {
                body.write_u16_le(goto.scene_bias);
            }
        }
        Action::GotoLabel(goto) => body.write_c_string(&goto.label),
        Action::If(_) | Action::Jump(_) => body.write_i16_le(branch_offset),
        Action::Push(push) => {
            for value in &push.values {
                write_push_value(body, value);
            }
        }
        Action::SetTarget(set_target) => body.write_c_string(&set_target.target_name),
        Action::StoreRegister(store) => body.write_u8(store.register),
        Action::Try(try_action) => write_try(body, blocks, try_action)?,
        Action::WaitForFrame(wait) => {
            body.write_u16_le(wait.frame);
            body.write_u8(wait.skip_count);
        }
        Action::WaitForFrame2(wait) => body.write_u8(wait.skip_count),
        Action::With(with) => write_nested_block(body, blocks, &with.with)?,
        Action::Unknown(unknown) => body.write_bytes(&unknown.data),
        // No body.
        Action::Add
        | Action::Add2
        | Action::And
        | Action::AsciiToChar
        | Action::BitAnd
        | Action::BitLShift
        | Action::BitOr
        | Action::BitRShift
        | Action::BitURShift
        | Action::BitXor
        | Action::Call
        | Action::CallFunction
        | Action::CallMethod
        | Action::CastOp
        | Action::CharToAscii
        | Action::CloneSprite
        | Action::Decrement
        | Action::DefineLocal
        | Action::DefineLocal2
        | Action::Delete
        | Action::Delete2
        | Action::Divide
        | Action::EndDrag
        | Action::Enumerate
        | Action::Enumerate2
        | Action::Equals
        | Action::Equals2
        | Action::Extends
        | Action::FsCommand2
        | Action::GetMember
        | Action::GetProperty
        | Action::GetTime
        | Action::GetVariable
        | Action::Greater
        | Action::ImplementsOp
        | Action::Increment
        | Action::InitArray
        | Action::InitObject
        | Action::InstanceOf
        | Action::Less
        | Action::Less2
        | Action::MbAsciiToChar
        | Action::MbCharToAscii
        | Action::MbStringExtract
        | Action::MbStringLength
        | Action::Modulo
        | Action::Multiply
        | Action::NewMethod
        | Action::NewObject
        | Action::NextFrame
        | Action::Not
        | Action::Or
        | Action::Play
        | Action::Pop
        | Action::PreviousFrame
        | Action::PushDuplicate
        | Action::RandomNumber
        | Action::Return
        | Action::SetMember
        | Action::SetProperty
        | Action::SetTarget2
        | Action::SetVariable
        | Action::StackSwap
        | Action::StartDrag
        | Action::Stop
        | Action::StopSounds
        | Action::StrictEquals
        | Action::StringAdd
        | Action::StringEquals
        | Action::StringExtract
        | Action::StringGreater
        | Action::StringLength
        | Action::StringLess
        | Action::Subtract
        | Action::TargetPath
        | Action::Throw
        | Action::ToInteger
        | Action::ToNumber
        | Action::ToString
        | Action::ToggleQuality
        | Action::Trace
        | Action::TypeOf => {}
    }
    Ok(())
}

/// Encodes `actions` as an independent block: its size goes into `body`, its bytes into `blocks`.
fn write_nested_block(body: &mut WriteStream, blocks: &mut WriteStream, actions: &[Action]) -> EmitResult<()> {
    let mut block = WriteStream::new();
    write_action_block(&mut block, actions)?;
    body.write_u16_le(count_as(block.byte_position(), "nested action block bytes")?);
    blocks.write_stream(&block);
    Ok(())
}

fn write_try(body: &mut WriteStream, blocks: &mut WriteStream, value: &Try) -> EmitResult<()> {
    let catch_in_register = matches!(value.catch_target, Some(CatchTarget::Register(_)));
    body.write_u8(
        u8::from(value.catch.is_some())
            | u8::from(value.finally.is_some()) << 1
            | u8::from(catch_in_register) << 2,
    );

    let mut try_block = WriteStream::new();
    write_action_block(&mut try_block, &value.r#try)?;
    let mut catch_block = WriteStream::new();
    if let Some(catch) = &value.catch {
        write_action_block(&mut catch_block, catch)?;
    }
    let mut finally_block = WriteStream::new();
    if let Some(finally) = &value.finally {
        write_action_block(&mut finally_block, finally)?;
    }

    body.write_u16_le(count_as(try_block.byte_position(), "try block bytes")?);
    body.write_u16_le(count_as(catch_block.byte_position(), "catch block bytes")?);
    body.write_u16_le(count_as(finally_block.byte_position(), "finally block bytes")?);

    match &value.catch_target {
        Some(CatchTarget::Register(register)) => body.write_u8(*register),
        Some(CatchTarget::Variable(name)) => body.write_c_string(name),
        None => return Err(EmitError::missing_field("try.catch_target")),
    }

    blocks.write_stream(&try_block);
    blocks.write_stream(&catch_block);
    blocks.write_stream(&finally_block);
    Ok(())
}

fn write_push_value(stream: &mut WriteStream, value: &Value) {
    match value {
        Value::String(s) => {
            stream.write_u8(0);
            stream.write_c_string(s);
        }
        Value::Float32(f) => {
            stream.write_u8(1);
            stream.write_f32_le(*f);
        }
        Value::Null => stream.write_u8(2),
        Value::Undefined => stream.write_u8(3),
        Value::Register(r) => {
            stream.write_u8(4);
            stream.write_u8(*r);
        }
        Value::Boolean(b) => {
            stream.write_u8(5);
            stream.write_u8(u8::from(*b));
        }
        Value::Float64(f) => {
            stream.write_u8(6);
            stream.write_f64_le(*f);
        }
        Value::Int32(i) => {
            stream.write_u8(7);
            stream.write_i32_le(*i);
        }
        Value::Constant(index) => match u8::try_from(*index) {
            Ok(short) => {
                stream.write_u8(8);
                stream.write_u8(short);
            }
            Err(_) => {
                stream.write_u8(9);
                stream.write_u16_le(*index);
            }
        },
    }
}

fn action_code(action: &Action) -> u8 {
    match action {
        Action::Add => 0x0a,
        Action::Add2 => 0x47,
        Action::And => 0x10,
        Action::AsciiToChar => 0x33,
        Action::BitAnd => 0x60,
        Action::BitLShift => 0x63,
        Action::BitOr => 0x61,
        Action::BitRShift => 0x64,
        Action::BitURShift => 0x65,
        Action::BitXor => 0x62,
        Action::Call => 0x9e,
        Action::CallFunction => 0x3d,
        Action::CallMethod => 0x52,
        Action::CastOp => 0x2b,
        Action::CharToAscii => 0x32,
        Action::CloneSprite => 0x24,
        Action::ConstantPool(_) => 0x88,
        Action::Decrement => 0x51,
        Action::DefineFunction(_) => 0x9b,
        Action::DefineFunction2(_) => 0x8e,
        Action::DefineLocal => 0x3c,
        Action::DefineLocal2 => 0x41,
        Action::Delete => 0x3a,
        Action::Delete2 => 0x3b,
        Action::Divide => 0x0d,
        Action::EndDrag => 0x28,
        Action::Enumerate => 0x46,
        Action::Enumerate2 => 0x55,
        Action::Equals => 0x0e,
        Action::Equals2 => 0x49,
        Action::Extends => 0x69,
        Action::FsCommand2 => 0x2d,
        Action::GetMember => 0x4e,
        Action::GetProperty => 0x22,
        Action::GetTime => 0x34,
        Action::GetUrl(_) => 0x83,
        Action::GetUrl2(_) => 0x9a,
        Action::GetVariable => 0x1c,
        Action::GotoFrame(_) => 0x81,
        Action::GotoFrame2(_) => 0x9f,
        Action::GotoLabel(_) => 0x8c,
        Action::Greater => 0x67,
        Action::If(_) => 0x9d,
        Action::ImplementsOp => 0x2c,
        Action::Increment => 0x50,
        Action::InitArray => 0x42,
        Action::InitObject => 0x43,
        Action::InstanceOf => 0x54,
        Action::Jump(_) => 0x99,
        Action::Less => 0x0f,
        Action::Less2 => 0x48,
        Action::MbAsciiToChar => 0x37,
        Action::MbCharToAscii => 0x36,
        Action::MbStringExtract => 0x35,
        Action::MbStringLength => 0x31,
        Action::Modulo => 0x3f,
        Action::Multiply => 0x0c,
        Action::NewMethod => 0x53,
        Action::NewObject => 0x40,
        Action::NextFrame => 0x04,
        Action::Not => 0x12,
        Action::Or => 0x11,
        Action::Play => 0x06,
        Action::Pop => 0x17,
        Action::PreviousFrame => 0x05,
        Action::Push(_) => 0x96,
        Action::PushDuplicate => 0x4c,
        Action::RandomNumber => 0x30,
        Action::Return => 0x3e,
        Action::SetMember => 0x4f,
        Action::SetProperty => 0x23,
        Action::SetTarget(_) => 0x8b,
        Action::SetTarget2 => 0x20,
        Action::SetVariable => 0x1d,
        Action::StackSwap => 0x4d,
        Action::StartDrag => 0x27,
        Action::Stop => 0x07,
        Action::StopSounds => 0x09,
        Action::StoreRegister(_) => 0x87,
        Action::StrictEquals => 0x66,
        Action::StringAdd => 0x21,
        Action::StringEquals => 0x13,
        Action::StringExtract => 0x15,
        Action::StringGreater => 0x68,
        Action::StringLength => 0x14,
        Action::StringLess => 0x29,
        Action::Subtract => 0x0b,
        Action::TargetPath => 0x45,
        Action::Throw => 0x2a,
        Action::ToInteger => 0x18,
        Action::ToNumber => 0x4a,
        Action::ToString => 0x4b,
        Action::ToggleQuality => 0x08,
        Action::Trace => 0x26,
        Action::Try(_) => 0x8f,
        Action::TypeOf => 0x44,
        Action::WaitForFrame(_) => 0x8a,
        Action::WaitForFrame2(_) => 0x8d,
        Action::With(_) => 0x94,
        Action::Unknown(unknown) => unknown.code,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/emit/avm1.rs"]
mod tests;
