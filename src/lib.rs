pub mod args;
pub mod config;
pub mod constructor;
pub mod error;
pub mod identity;
pub mod instantiate;
pub mod registrar;
pub mod registry;
pub mod resolver;
pub mod schema;
pub mod serialization;
pub mod store;

// 允许在本 crate 内通过 `mmg_registry::...` 自引用（供 proc-macro 展开使用）
extern crate self as mmg_registry;

pub mod prelude {
    pub use crate::args::{Args, Config, Field};
    pub use crate::constructor::{Construct, ConstructorRef, FnConstructor, Instance};
    pub use crate::error::{RegistryError, Result};
    pub use crate::identity::Registrable;
    pub use crate::instantiate::{instantiate, instantiate_as};
    pub use crate::resolver::Selector;
    pub use crate::schema::{ParamKind, Signature};
    pub use crate::serialization::Serializable;
    pub use crate::store::{Registry, RegistryStore};
}

pub use registry_macros::*;

// 宏展开所需的内部再导出，不对业务暴露
#[doc(hidden)]
pub mod __private {
    pub use anyhow;
    pub use inventory;
}
