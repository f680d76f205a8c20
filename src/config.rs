use serde::Deserialize;

/// How `instantiate` reports configuration fields the target constructor does not accept.
/// Neither policy turns superfluous fields into an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuperfluousPolicy {
    #[default]
    Warn,
    Silent,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    pub superfluous: SuperfluousPolicy,
}

/// 保留 kind：仅供身份能力（类型全名 -> 构造器）使用
pub const CLASS_MAP: &str = "class_map";

/// 配置中用于选择构造器的字段名
pub const NAME_FIELD: &str = "name";
