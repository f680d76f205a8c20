//! 配置与构造参数。
//!
//! `Config` 是调用方提供的、已解析好的 JSON 映射（注册表从不就地修改它）；
//! `Args` 是合并后交给构造器的具名参数，除 JSON 值外还可携带进程内对象。
use std::{any::Any, collections::BTreeMap, fmt, sync::Arc};

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{RegistryError, Result};

/// Externally supplied configuration mapping.
pub type Config = serde_json::Map<String, Value>;

/// One named argument.
#[derive(Clone)]
pub enum Field {
    Json(Value),
    /// 进程内对象（例如交给模型的预处理器实例），不可序列化
    Object(Arc<dyn Any + Send + Sync>),
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Json(v) => write!(f, "{v}"),
            Field::Object(_) => write!(f, "<object>"),
        }
    }
}

impl From<Value> for Field {
    fn from(v: Value) -> Self {
        Field::Json(v)
    }
}

/// Named arguments passed to a constructor. Also used for explicit overrides.
#[derive(Clone, Debug, Default)]
pub struct Args {
    fields: BTreeMap<String, Field>,
}

impl Args {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &Config) -> Self {
        let fields = config
            .iter()
            .map(|(k, v)| (k.clone(), Field::Json(v.clone())))
            .collect();
        Self { fields }
    }

    /// Builder form of [`Args::insert`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Builder form of [`Args::insert_object`].
    pub fn with_object<T: Any + Send + Sync>(mut self, key: impl Into<String>, value: T) -> Self {
        self.insert_object(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Field> {
        self.fields.insert(key.into(), Field::Json(value.into()))
    }

    pub fn insert_object<T: Any + Send + Sync>(
        &mut self,
        key: impl Into<String>,
        value: T,
    ) -> Option<Field> {
        self.fields.insert(key.into(), Field::Object(Arc::new(value)))
    }

    /// Right-biased merge: fields of `other` replace same-named fields of `self`.
    pub fn merge(&mut self, other: Args) {
        self.fields.extend(other.fields);
    }

    pub fn get(&self, key: &str) -> Option<&Field> {
        self.fields.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<Field> {
        self.fields.remove(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Field)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub(crate) fn retain(&mut self, mut f: impl FnMut(&str, &Field) -> bool) {
        self.fields.retain(|k, v| f(k.as_str(), &*v));
    }

    /// Remove a required JSON argument and deserialize it.
    pub fn take<T: DeserializeOwned>(&mut self, key: &str) -> Result<T> {
        self.take_opt(key)?
            .ok_or_else(|| RegistryError::MissingArgument {
                param: key.to_string(),
            })
    }

    /// Remove an optional JSON argument and deserialize it.
    pub fn take_opt<T: DeserializeOwned>(&mut self, key: &str) -> Result<Option<T>> {
        match self.fields.remove(key) {
            None => Ok(None),
            Some(Field::Json(v)) => serde_json::from_value(v)
                .map(Some)
                .map_err(|source| RegistryError::InvalidArgument {
                    param: key.to_string(),
                    source,
                }),
            Some(Field::Object(_)) => Err(RegistryError::ArgumentKind {
                param: key.to_string(),
                expected: "a configuration value",
            }),
        }
    }

    /// Remove a required in-process object argument and downcast it.
    pub fn take_object<T: Any + Clone>(&mut self, key: &str) -> Result<T> {
        match self.fields.remove(key) {
            None => Err(RegistryError::MissingArgument {
                param: key.to_string(),
            }),
            Some(Field::Object(obj)) => {
                obj.downcast_ref::<T>()
                    .cloned()
                    .ok_or_else(|| RegistryError::ArgumentKind {
                        param: key.to_string(),
                        expected: std::any::type_name::<T>(),
                    })
            }
            Some(Field::Json(_)) => Err(RegistryError::ArgumentKind {
                param: key.to_string(),
                expected: "an in-process object",
            }),
        }
    }

    /// JSON view of the arguments; objects become `null`.
    pub fn to_config(&self) -> Config {
        self.fields
            .iter()
            .map(|(k, v)| {
                let v = match v {
                    Field::Json(v) => v.clone(),
                    Field::Object(_) => Value::Null,
                };
                (k.clone(), v)
            })
            .collect()
    }
}

impl From<Config> for Args {
    fn from(config: Config) -> Self {
        let fields = config
            .into_iter()
            .map(|(k, v)| (k, Field::Json(v)))
            .collect();
        Self { fields }
    }
}
