//! 定义期静态注册：由 `#[registrable]` 通过 inventory 收集，`discover()` 时回放到 store。
use crate::{constructor::ConstructorRef, error::Result, store::RegistryStore};

/// `(kind, name)` registration submitted at definition time.
pub struct Registration {
    pub kind: &'static str,
    pub name: &'static str,
    pub constructor: fn() -> ConstructorRef,
}

inventory::collect!(Registration);

/// Self-registration into `class_map`. `name: None` uses the type's own identity.
pub struct ClassRegistration {
    pub name: Option<&'static str>,
    pub constructor: fn() -> ConstructorRef,
}

inventory::collect!(ClassRegistration);

/// Iterate all kind/name registrations
pub fn registrations() -> Vec<&'static Registration> {
    inventory::iter::<Registration>.into_iter().collect()
}

pub fn class_registrations() -> Vec<&'static ClassRegistration> {
    inventory::iter::<ClassRegistration>.into_iter().collect()
}

impl RegistryStore {
    /// Build a store from every statically submitted registration.
    ///
    /// Class refs go in first, then kind/name registrations; the first reserved-kind
    /// or duplicate error aborts discovery.
    pub fn discover() -> Result<Self> {
        let mut store = RegistryStore::new();
        store.discover_into()?;
        Ok(store)
    }

    /// Replay static registrations into an existing store.
    pub fn discover_into(&mut self) -> Result<()> {
        let classes = class_registrations();
        for reg in &classes {
            self.register_class_ref((reg.constructor)(), reg.name)?;
        }
        let regs = registrations();
        for reg in &regs {
            self.load(reg.kind, reg.name)?.register((reg.constructor)())?;
        }
        tracing::debug!(classes = classes.len(), registrations = regs.len(), "discovered static registrations");
        Ok(())
    }
}
