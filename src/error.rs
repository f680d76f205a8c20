//! 注册表统一错误类型：注册、查找、构造与反序列化共用一个枚举。
use crate::schema::ParamKind;

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// 普通注册路径不允许使用保留 kind
    #[error("reserved keyword for kind \"{kind}\"")]
    ReservedKind { kind: String },
    #[error("{name} already present under kind \"{kind}\"")]
    DuplicateRegistration { kind: String, name: String },
    #[error("nothing registered under \"{kind}\"")]
    UnknownKind { kind: String },
    #[error("no \"{name}\" registered under \"{kind}\"")]
    UnknownName { kind: String, name: String },
    #[error("configuration for kind \"{kind}\" has no \"name\" field")]
    MissingNameField { kind: String },
    #[error("configuration for kind \"{kind}\" has a non-string \"name\" field: {value}")]
    InvalidNameField {
        kind: String,
        value: serde_json::Value,
    },
    #[error("unsupported kind for param {param} of {constructor}: {param_kind}")]
    UnsupportedParameterKind {
        constructor: String,
        param: String,
        param_kind: ParamKind,
    },
    #[error("no class found for \"{name}\"")]
    UnknownClass { name: String },
    /// register_class_ref 未给出名字，且构造器不具备身份能力
    #[error("{type_name} is not Registrable; an explicit class name is required")]
    NotRegistrable { type_name: String },
    #[error("missing required argument \"{param}\"")]
    MissingArgument { param: String },
    #[error("invalid value for argument \"{param}\": {source}")]
    InvalidArgument {
        param: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("argument \"{param}\" must be {expected}")]
    ArgumentKind {
        param: String,
        expected: &'static str,
    },
    #[error("{constructor} did not produce a {expected}")]
    InstanceType {
        constructor: String,
        expected: &'static str,
    },
    #[error("malformed type envelope: {0}")]
    MalformedEnvelope(String),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    /// 构造器自身返回的错误，原样透传
    #[error(transparent)]
    Construct(anyhow::Error),
}

impl RegistryError {
    /// 构造器错误：若内部本就是 RegistryError（参数提取失败），则解包还原。
    pub(crate) fn from_constructor(err: anyhow::Error) -> Self {
        match err.downcast::<RegistryError>() {
            Ok(inner) => inner,
            Err(other) => RegistryError::Construct(other),
        }
    }
}

pub type Result<T = ()> = std::result::Result<T, RegistryError>;
