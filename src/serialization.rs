//! Type-tagged envelopes: `{"__type__": <qualified identity>, "__data__": {...}}`.
//!
//! The tag is resolved through `class_map`, so anything registered there (explicitly or
//! by an ordinary kind/name registration) can be rebuilt from persisted field data.
use std::any::Any;

use serde::Serialize;
use serde_json::Value;

use crate::{
    args::{Args, Config},
    constructor::{ConstructorRef, Instance},
    error::{RegistryError, Result},
    identity::Registrable,
    instantiate::downcast_instance,
    store::RegistryStore,
};

pub const TYPE_TAG: &str = "__type__";
pub const DATA_TAG: &str = "__data__";

/// Wrap field data with its type tag.
pub fn append_type(type_name: &str, data: Config) -> Value {
    let mut envelope = Config::new();
    envelope.insert(TYPE_TAG.to_string(), Value::String(type_name.to_string()));
    envelope.insert(DATA_TAG.to_string(), Value::Object(data));
    Value::Object(envelope)
}

/// Split an envelope into its type tag and field data.
pub fn split_envelope(envelope: &Value) -> Result<(&str, &Config)> {
    let obj = envelope
        .as_object()
        .ok_or_else(|| RegistryError::MalformedEnvelope("envelope is not an object".into()))?;
    let type_name = obj
        .get(TYPE_TAG)
        .and_then(Value::as_str)
        .ok_or_else(|| RegistryError::MalformedEnvelope(format!("missing string field {TYPE_TAG}")))?;
    let data = obj
        .get(DATA_TAG)
        .and_then(Value::as_object)
        .ok_or_else(|| RegistryError::MalformedEnvelope(format!("missing object field {DATA_TAG}")))?;
    Ok((type_name, data))
}

/// A [`Registrable`] value whose serde representation is its constructor's field data.
pub trait Serializable: Registrable + Serialize {
    fn to_envelope(&self) -> Result<Value> {
        match serde_json::to_value(self)? {
            Value::Object(data) => Ok(append_type(Self::type_name(), data)),
            other => Err(RegistryError::MalformedEnvelope(format!(
                "{} serialized to a non-object: {other}",
                Self::type_name()
            ))),
        }
    }
}

impl RegistryStore {
    /// Rebuild a value from an envelope produced by [`Serializable::to_envelope`] or [`append_type`].
    pub fn deserialize(&self, envelope: &Value) -> Result<Instance> {
        self.deserialize_resolved(envelope).map(|(_, instance)| instance)
    }

    pub fn deserialize_as<T: Any>(&self, envelope: &Value) -> Result<T> {
        let (ctor, instance) = self.deserialize_resolved(envelope)?;
        downcast_instance(ctor.as_ref(), instance)
    }

    fn deserialize_resolved(&self, envelope: &Value) -> Result<(ConstructorRef, Instance)> {
        let (type_name, data) = split_envelope(envelope)?;
        let ctor = self.lookup_class_ref(type_name)?;
        let instance = self.instantiate(ctor.as_ref(), data, &[], Args::new())?;
        Ok((ctor, instance))
    }
}
