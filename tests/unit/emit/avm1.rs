use super::*;
use crate::model::avm1::{
    Branch, ConstantPool, DefineFunction, DefineFunction2, GetUrl2, GotoFrame2, Parameter, Push, UnknownAction, With,
};

fn encode(actions: &[Action]) -> EmitResult<Vec<u8>> {
    let mut s = WriteStream::new();
    write_action_string(&mut s, actions)?;
    Ok(s.into_bytes())
}

fn jump(offset: i32) -> Action {
    Action::Jump(Branch { offset })
}

#[test]
fn empty_string_is_end_action() {
    assert_eq!(encode(&[]).unwrap(), vec![0x00]);
}

#[test]
fn short_actions_have_no_length() {
    assert_eq!(encode(&[Action::Play, Action::Stop]).unwrap(), vec![0x06, 0x07, 0x00]);
}

#[test]
fn backward_jump_counts_its_own_bytes() {
    let actions = [Action::Push(Push::default()), jump(-1)];
    assert_eq!(
        encode(&actions).unwrap(),
        vec![0x96, 0x99, 0x02, 0x00, 0xfb, 0xff, 0x00]
    );
}

#[test]
fn forward_branch_skips_actions() {
    let actions = [Action::If(Branch { offset: 1 }), Action::Play, Action::Stop];
    assert_eq!(
        encode(&actions).unwrap(),
        vec![0x9d, 0x02, 0x00, 0x01, 0x00, 0x06, 0x07, 0x00]
    );
}

#[test]
fn branch_may_target_the_end_of_its_block() {
    assert_eq!(encode(&[jump(0)]).unwrap(), vec![0x99, 0x02, 0x00, 0x00, 0x00, 0x00]);
}

#[test]
fn branch_before_block_start_is_rejected() {
    let err = encode(&[jump(-2)]).unwrap_err();
    assert!(matches!(err, EmitError::Inconsistent(_)), "{err:?}");
}

#[test]
fn push_value_tags() {
    let push = Action::Push(Push {
        values: vec![
            Value::String("a".to_string()),
            Value::Int32(1),
            Value::Constant(3),
            Value::Constant(300),
            Value::Boolean(true),
            Value::Null,
            Value::Register(2),
        ],
    });
    assert_eq!(
        encode(&[push]).unwrap(),
        vec![
            0x96, 0x12, 0x00, // header
            0x00, b'a', 0x00, // string
            0x07, 0x01, 0x00, 0x00, 0x00, // int
            0x08, 0x03, // short constant
            0x09, 0x2c, 0x01, // long constant
            0x05, 0x01, // boolean
            0x02, // null
            0x04, 0x02, // register
            0x00,
        ]
    );
}

#[test]
fn function_body_follows_the_action() {
    let function = Action::DefineFunction(DefineFunction {
        name: "f".to_string(),
        parameters: vec!["x".to_string()],
        body: vec![jump(0)],
    });
    assert_eq!(
        encode(&[function]).unwrap(),
        vec![
            0x9b, 0x08, 0x00, b'f', 0x00, 0x01, 0x00, b'x', 0x00, 0x05, 0x00, // header
            0x99, 0x02, 0x00, 0x00, 0x00, // body, resolved locally
            0x00,
        ]
    );
}

#[test]
fn try_catch_sizes() {
    let action = Action::Try(Try {
        r#try: vec![Action::Throw],
        catch: Some(vec![Action::Pop]),
        catch_target: Some(CatchTarget::Variable("e".to_string())),
        finally: None,
    });
    assert_eq!(
        encode(&[action]).unwrap(),
        vec![
            0x8f, 0x09, 0x00, 0x01, 0x01, 0x00, 0x01, 0x00, 0x00, 0x00, b'e', 0x00, // header
            0x2a, 0x17, // try, catch
            0x00,
        ]
    );
}

#[test]
fn catch_in_register() {
    let action = Action::Try(Try {
        r#try: vec![],
        catch: Some(vec![]),
        catch_target: Some(CatchTarget::Register(3)),
        finally: Some(vec![Action::Stop]),
    });
    assert_eq!(
        encode(&[action]).unwrap(),
        vec![0x8f, 0x08, 0x00, 0x07, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x03, 0x07, 0x00]
    );
}

#[test]
fn catch_without_target_is_rejected() {
    let action = Action::Try(Try {
        r#try: vec![],
        catch: Some(vec![]),
        catch_target: None,
        finally: None,
    });
    let err = encode(&[action]).unwrap_err();
    assert!(matches!(err, EmitError::MissingField(_)), "{err:?}");
}

#[test]
fn goto_frame2_and_unknown_actions() {
    let actions = [
        Action::GotoFrame2(GotoFrame2 {
            play: true,
            scene_bias: 0,
        }),
        Action::Unknown(UnknownAction {
            code: 0xaa,
            data: vec![1, 2],
        }),
    ];
    assert_eq!(
        encode(&actions).unwrap(),
        vec![0x9f, 0x01, 0x00, 0x02, 0xaa, 0x02, 0x00, 0x01, 0x02, 0x00]
    );
}

#[test]
fn finally_only_try_still_needs_a_catch_target() {
    let action = Action::Try(Try {
        r#try: vec![Action::Stop],
        catch: None,
        catch_target: None,
        finally: Some(vec![Action::Play]),
    });
    let err = encode(&[action]).unwrap_err();
    assert!(matches!(err, EmitError::MissingField(_)), "{err:?}");
}

#[test]
fn define_function2_flags_and_register_params() {
    let function = Action::DefineFunction2(DefineFunction2 {
        name: "f".to_string(),
        register_count: 3,
        preload_this: true,
        suppress_this: false,
        preload_arguments: false,
        suppress_arguments: true,
        preload_super: false,
        suppress_super: false,
        preload_root: false,
        preload_parent: false,
        preload_global: true,
        parameters: vec![
            Parameter {
                register: 1,
                name: "a".to_string(),
            },
            Parameter {
                register: 0,
                name: "b".to_string(),
            },
        ],
        body: vec![Action::Stop],
    });
    assert_eq!(
        encode(&[function]).unwrap(),
        vec![
            0x8e, 0x0f, 0x00, // header
            b'f', 0x00, // name
            0x02, 0x00, // parameter count
            0x03, // register count
            0x09, 0x01, // this | suppress arguments | global
            0x01, b'a', 0x00, 0x00, b'b', 0x00, // params
            0x01, 0x00, // body size
            0x07, // body
            0x00,
        ]
    );
}

#[test]
fn with_block_follows_the_action() {
    let with = Action::With(With {
        with: vec![Action::Play, Action::Stop],
    });
    assert_eq!(
        encode(&[with]).unwrap(),
        vec![0x94, 0x02, 0x00, 0x02, 0x00, 0x06, 0x07, 0x00]
    );
}

#[test]
fn constant_pool_strings() {
    let pool = Action::ConstantPool(ConstantPool {
        constant_pool: vec!["a".to_string(), "bc".to_string()],
    });
    assert_eq!(
        encode(&[pool]).unwrap(),
        vec![0x88, 0x07, 0x00, 0x02, 0x00, b'a', 0x00, b'b', b'c', 0x00, 0x00]
    );
}

#[test]
fn get_url2_method_and_load_bits() {
    let post_to_target = Action::GetUrl2(GetUrl2 {
        method: GetUrl2Method::Post,
        load_target: true,
        load_variables: false,
    });
    let get_variables = Action::GetUrl2(GetUrl2 {
        method: GetUrl2Method::Get,
        load_target: false,
        load_variables: true,
    });
    assert_eq!(
        encode(&[post_to_target, get_variables]).unwrap(),
        vec![0x9a, 0x01, 0x00, 0x82, 0x9a, 0x01, 0x00, 0x41, 0x00]
    );
}

#[test]
fn float_push_values_are_little_endian() {
    let push = Action::Push(Push {
        values: vec![Value::Float32(1.5), Value::Float64(1.5), Value::Undefined],
    });
    assert_eq!(
        encode(&[push]).unwrap(),
        vec![
            0x96, 0x0f, 0x00, // header
            0x01, 0x00, 0x00, 0xc0, 0x3f, // f32
            0x06, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xf8, 0x3f, // f64
            0x03, // undefined
            0x00,
        ]
    );
}
