//! AVM1 bytecode as a list of typed actions.
//!
//! Branches (`Jump`, `If`) count their offset in actions, relative to the action following the
//! branch. The encoder turns them into byte offsets.

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Action {
    Add,
    Add2,
    And,
    AsciiToChar,
    BitAnd,
    BitLShift,
    BitOr,
    BitRShift,
    BitURShift,
    BitXor,
    Call,
    CallFunction,
    CallMethod,
    CastOp,
    CharToAscii,
    CloneSprite,
    ConstantPool(ConstantPool),
    Decrement,
    DefineFunction(DefineFunction),
    DefineFunction2(DefineFunction2),
    DefineLocal,
    DefineLocal2,
    Delete,
    Delete2,
    Divide,
    EndDrag,
    Enumerate,
    Enumerate2,
    Equals,
    Equals2,
    Extends,
    FsCommand2,
    GetMember,
    GetProperty,
    GetTime,
    GetUrl(GetUrl),
    GetUrl2(GetUrl2),
    GetVariable,
    GotoFrame(GotoFrame),
    GotoFrame2(GotoFrame2),
    GotoLabel(GotoLabel),
    Greater,
    If(Branch),
    ImplementsOp,
    Increment,
    InitArray,
    InitObject,
    InstanceOf,
    Jump(Branch),
    Less,
    Less2,
    MbAsciiToChar,
    MbCharToAscii,
    MbStringExtract,
    MbStringLength,
    Modulo,
    Multiply,
    NewMethod,
    NewObject,
    NextFrame,
    Not,
    Or,
    Play,
    Pop,
    PreviousFrame,
    Push(Push),
    PushDuplicate,
    RandomNumber,
    Return,
    SetMember,
    SetProperty,
    SetTarget(SetTarget),
    SetTarget2,
    SetVariable,
    StackSwap,
    StartDrag,
    Stop,
    StopSounds,
    StoreRegister(StoreRegister),
    StrictEquals,
    StringAdd,
    StringEquals,
    StringExtract,
    StringGreater,
    StringLength,
    StringLess,
    Subtract,
    TargetPath,
    Throw,
    ToInteger,
    ToNumber,
    ToString,
    ToggleQuality,
    Trace,
    Try(Try),
    TypeOf,
    WaitForFrame(WaitForFrame),
    WaitForFrame2(WaitForFrame2),
    With(With),
    /// Passthrough for opcodes this model does not name.
    Unknown(UnknownAction),
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ConstantPool {
    pub constant_pool: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DefineFunction {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub parameters: Vec<String>,
    pub body: Vec<Action>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DefineFunction2 {
    #[serde(default)]
    pub name: String,
    pub register_count: u8,
    #[serde(default)]
    pub preload_this: bool,
    #[serde(default)]
    pub suppress_this: bool,
    #[serde(default)]
    pub preload_arguments: bool,
    #[serde(default)]
    pub suppress_arguments: bool,
    #[serde(default)]
    pub preload_super: bool,
    #[serde(default)]
    pub suppress_super: bool,
    #[serde(default)]
    pub preload_root: bool,
    #[serde(default)]
    pub preload_parent: bool,
    #[serde(default)]
    pub preload_global: bool,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    pub body: Vec<Action>,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Parameter {
    /// 0 when the parameter is not bound to a register.
    pub register: u8,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GetUrl {
    pub url: String,
    pub target: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum GetUrl2Method {
    #[default]
    None,
    Get,
    Post,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GetUrl2 {
    pub method: GetUrl2Method,
    pub load_target: bool,
    pub load_variables: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GotoFrame {
    pub frame: u16,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GotoFrame2 {
    pub play: bool,
    pub scene_bias: u16,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GotoLabel {
    pub label: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Relative branch target, counted in actions from the action after the branch.
///
/// `0` targets the next action, `-1` the branch itself.
pub struct Branch {
    pub offset: i32,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Push {
    pub values: Vec<Value>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Value {
    Boolean(bool),
    Constant(u16),
    String(String),
    Float32(f32),
    Float64(f64),
    Int32(i32),
    Null,
    Register(u8),
    Undefined,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SetTarget {
    pub target_name: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StoreRegister {
    pub register: u8,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Try {
    pub r#try: Vec<Action>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catch: Option<Vec<Action>>,
    /// Required, even when there is no `catch` block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catch_target: Option<CatchTarget>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finally: Option<Vec<Action>>,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum CatchTarget {
    Register(u8),
    Variable(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct WaitForFrame {
    pub frame: u16,
    pub skip_count: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct WaitForFrame2 {
    pub skip_count: u8,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct With {
    pub with: Vec<Action>,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UnknownAction {
    pub code: u8,
    #[serde(default)]
    pub data: Vec<u8>,
}
