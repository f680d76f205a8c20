use crate::{
    config::CLASS_MAP,
    constructor::ConstructorRef,
    error::{RegistryError, Result},
    store::RegistryStore,
};

/// Pending `(kind, name)` registration returned by [`RegistryStore::load`].
pub struct Loader<'a> {
    store: &'a mut RegistryStore,
    kind: String,
    name: String,
}

impl RegistryStore {
    /// Prepare a registration under `(kind, name)`. Fails at once for the reserved kind.
    pub fn load(&mut self, kind: &str, name: &str) -> Result<Loader<'_>> {
        if kind == CLASS_MAP {
            return Err(RegistryError::ReservedKind {
                kind: kind.to_string(),
            });
        }
        Ok(Loader {
            store: self,
            kind: kind.to_string(),
            name: name.to_string(),
        })
    }

    /// `load(kind, name)` followed by [`Loader::register`].
    pub fn register(&mut self, kind: &str, name: &str, ctor: ConstructorRef) -> Result<ConstructorRef> {
        self.load(kind, name)?.register(ctor)
    }
}

impl Loader<'_> {
    /// Record the constructor and return it unchanged.
    ///
    /// Every ordinary registration is also written into `class_map` under the
    /// constructor's qualified identity, so it can be found by
    /// [`RegistryStore::lookup_class_ref`] as well.
    pub fn register(self, ctor: ConstructorRef) -> Result<ConstructorRef> {
        let Loader { store, kind, name } = self;
        if store.contains(&kind, &name) {
            return Err(RegistryError::DuplicateRegistration { kind, name });
        }
        let type_name = ctor.type_name().to_string();
        store.insert_class(type_name.clone(), ctor.clone());
        tracing::debug!(kind = %kind, name = %name, constructor = %type_name, "registered constructor");
        store.bucket_mut(&kind).insert(name, ctor.clone());
        Ok(ctor)
    }
}
