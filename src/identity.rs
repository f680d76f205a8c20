//! 身份能力：类型全名、class_map 自注册与按全名反查。
use std::any::Any;

use crate::{
    args::Args,
    config::CLASS_MAP,
    constructor::{constructor_of, ConstructorRef, Instance},
    error::{RegistryError, Result},
    schema::Signature,
    store::RegistryStore,
};

/// A type that can be named by its qualified identity and built from named arguments.
///
/// Usually implemented with `#[mmg_registry::registrable]`.
pub trait Registrable: Any + Send + Sync + Sized {
    /// Canonical qualified identity, `module::path::Type`.
    fn type_name() -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Identity of this value's type.
    fn get_name(&self) -> &'static str {
        Self::type_name()
    }

    fn signature() -> Signature;

    fn from_args(args: Args) -> anyhow::Result<Self>;
}

/// Qualified identity of a value's type, the same key `class_map` uses.
///
/// Type-erased [`Instance`]s are named through [`RegistryStore::identity_of`].
pub fn get_name<T: Registrable>(_value: &T) -> &'static str {
    T::type_name()
}

impl RegistryStore {
    /// Insert `ctor` into `class_map` under `name`, or under its own identity when
    /// `name` is `None`. Without a name the constructor must be [`Registrable`].
    pub fn register_class_ref(&mut self, ctor: ConstructorRef, name: Option<&str>) -> Result<ConstructorRef> {
        let key = match name {
            Some(name) => name.to_string(),
            None if ctor.is_registrable() => ctor.type_name().to_string(),
            None => {
                return Err(RegistryError::NotRegistrable {
                    type_name: ctor.type_name().to_string(),
                })
            }
        };
        tracing::debug!(class = %key, constructor = %ctor.type_name(), "registered class ref");
        self.insert_class(key, ctor.clone());
        Ok(ctor)
    }

    /// `register_class_ref` for a [`Registrable`] type under its own identity.
    pub fn register_type<T: Registrable>(&mut self) -> ConstructorRef {
        let ctor = constructor_of::<T>();
        tracing::debug!(class = %T::type_name(), "registered class ref");
        self.insert_class(T::type_name().to_string(), ctor.clone());
        ctor
    }

    /// Qualified identity of a constructed value, found through the constructor that
    /// registered its runtime type in `class_map`. `None` when no such constructor
    /// declares that type (closure constructors never do).
    pub fn identity_of(&self, instance: &Instance) -> Option<&str> {
        let id = Any::type_id(&**instance);
        self.identities.get(&id).map(|ctor| ctor.type_name())
    }

    pub fn lookup_class_ref(&self, name: &str) -> Result<ConstructorRef> {
        self.bucket(CLASS_MAP)
            .and_then(|b| b.get(name))
            .cloned()
            .ok_or_else(|| RegistryError::UnknownClass {
                name: name.to_string(),
            })
    }
}
