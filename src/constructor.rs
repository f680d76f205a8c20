use std::{
    any::{Any, TypeId},
    fmt,
    marker::PhantomData,
    sync::Arc,
};

use crate::{args::Args, identity::Registrable, schema::Signature};

/// A constructed value. Downcast with [`crate::instantiate::downcast_instance`] or the `*_as` helpers.
pub type Instance = Box<dyn Any + Send + Sync>;

/// 构造器：可按具名参数调用，并声明自身参数表。
pub trait Construct: Send + Sync + 'static {
    /// Qualified identity of the constructed type, used as the `class_map` key.
    fn type_name(&self) -> &str;
    fn signature(&self) -> &Signature;
    /// Whether the constructed type carries the [`Registrable`] identity capability.
    fn is_registrable(&self) -> bool {
        false
    }
    /// Runtime type of the values this constructor returns, when known statically.
    fn instance_type(&self) -> Option<TypeId> {
        None
    }
    fn construct(&self, args: Args) -> anyhow::Result<Instance>;
}

impl fmt::Debug for dyn Construct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Construct({})", self.type_name())
    }
}

pub type ConstructorRef = Arc<dyn Construct>;

type BuildFn = dyn Fn(Args) -> anyhow::Result<Instance> + Send + Sync;

/// Constructor backed by a closure and an explicitly declared signature.
pub struct FnConstructor {
    type_name: String,
    signature: Signature,
    build: Box<BuildFn>,
}

impl FnConstructor {
    pub fn new<F>(type_name: impl Into<String>, signature: Signature, build: F) -> Self
    where
        F: Fn(Args) -> anyhow::Result<Instance> + Send + Sync + 'static,
    {
        Self {
            type_name: type_name.into(),
            signature,
            build: Box::new(build),
        }
    }

    pub fn into_ref(self) -> ConstructorRef {
        Arc::new(self)
    }
}

impl Construct for FnConstructor {
    fn type_name(&self) -> &str {
        &self.type_name
    }
    fn signature(&self) -> &Signature {
        &self.signature
    }
    fn construct(&self, args: Args) -> anyhow::Result<Instance> {
        (self.build)(args)
    }
}

/// Constructor of a [`Registrable`] type.
pub struct TypeConstructor<T> {
    signature: Signature,
    _ty: PhantomData<fn() -> T>,
}

impl<T: Registrable> TypeConstructor<T> {
    pub fn new() -> Self {
        Self {
            signature: T::signature(),
            _ty: PhantomData,
        }
    }
}

impl<T: Registrable> Default for TypeConstructor<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Registrable> Construct for TypeConstructor<T> {
    fn type_name(&self) -> &str {
        T::type_name()
    }
    fn signature(&self) -> &Signature {
        &self.signature
    }
    fn is_registrable(&self) -> bool {
        true
    }
    fn instance_type(&self) -> Option<TypeId> {
        Some(TypeId::of::<T>())
    }
    fn construct(&self, args: Args) -> anyhow::Result<Instance> {
        Ok(Box::new(T::from_args(args)?))
    }
}

pub fn constructor_of<T: Registrable>() -> ConstructorRef {
    Arc::new(TypeConstructor::<T>::new())
}
