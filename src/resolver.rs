use std::borrow::Cow;

use serde_json::Value;

use crate::{
    args::Config,
    config::NAME_FIELD,
    constructor::ConstructorRef,
    error::{RegistryError, Result},
    store::RegistryStore,
};

/// What to look up inside a kind: a plain name, or a configuration whose
/// `name` field holds it.
#[derive(Debug, Clone, Copy)]
pub enum Selector<'a> {
    Name(&'a str),
    Config(&'a Config),
}

impl<'a> From<&'a str> for Selector<'a> {
    fn from(name: &'a str) -> Self {
        Selector::Name(name)
    }
}

impl<'a> From<&'a String> for Selector<'a> {
    fn from(name: &'a String) -> Self {
        Selector::Name(name)
    }
}

impl<'a> From<&'a Config> for Selector<'a> {
    fn from(config: &'a Config) -> Self {
        Selector::Config(config)
    }
}

impl<'a> Selector<'a> {
    pub(crate) fn name(&self, kind: &str) -> Result<&'a str> {
        match *self {
            Selector::Name(name) => Ok(name),
            Selector::Config(config) => match config.get(NAME_FIELD) {
                Some(Value::String(name)) => Ok(name),
                Some(other) => Err(RegistryError::InvalidNameField {
                    kind: kind.to_string(),
                    value: other.clone(),
                }),
                None => Err(RegistryError::MissingNameField {
                    kind: kind.to_string(),
                }),
            },
        }
    }

    /// Configuration view: a plain name becomes `{"name": name}`.
    pub(crate) fn to_config(self) -> Cow<'a, Config> {
        match self {
            Selector::Name(name) => {
                let mut config = Config::new();
                config.insert(NAME_FIELD.to_string(), Value::String(name.to_string()));
                Cow::Owned(config)
            }
            Selector::Config(config) => Cow::Borrowed(config),
        }
    }
}

impl RegistryStore {
    /// Find the constructor registered under `kind` for a name or a configuration.
    pub fn lookup<'a>(&self, kind: &str, selector: impl Into<Selector<'a>>) -> Result<ConstructorRef> {
        let name = selector.into().name(kind)?;
        let bucket = self.bucket(kind).ok_or_else(|| RegistryError::UnknownKind {
            kind: kind.to_string(),
        })?;
        bucket
            .get(name)
            .cloned()
            .ok_or_else(|| RegistryError::UnknownName {
                kind: kind.to_string(),
                name: name.to_string(),
            })
    }
}
