use std::{any::TypeId, collections::HashMap, ops::Deref, sync::Arc};

use crate::{
    config::{RegistryConfig, CLASS_MAP},
    constructor::ConstructorRef,
};

pub(crate) type Bucket = HashMap<String, ConstructorRef>;

/// `kind -> (name -> constructor)`, plus the reserved `class_map` bucket keyed by
/// qualified type identity.
///
/// Writes need `&mut self`; once registration is done, [`RegistryStore::freeze`] turns
/// the store into a shareable read-only [`Registry`].
#[derive(Default)]
pub struct RegistryStore {
    pub(crate) buckets: HashMap<String, Bucket>,
    // 运行时类型 -> class_map 中的构造器，用于擦除类型后的身份反查
    pub(crate) identities: HashMap<TypeId, ConstructorRef>,
    pub(crate) cfg: RegistryConfig,
}

impl RegistryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(cfg: RegistryConfig) -> Self {
        Self {
            buckets: HashMap::new(),
            identities: HashMap::new(),
            cfg,
        }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.cfg
    }

    pub(crate) fn bucket(&self, kind: &str) -> Option<&Bucket> {
        self.buckets.get(kind)
    }

    pub(crate) fn bucket_mut(&mut self, kind: &str) -> &mut Bucket {
        self.buckets.entry(kind.to_string()).or_default()
    }

    /// Insert into `class_map`, overwriting any previous entry under `key`.
    pub(crate) fn insert_class(&mut self, key: String, ctor: ConstructorRef) {
        if let Some(id) = ctor.instance_type() {
            self.identities.insert(id, ctor.clone());
        }
        self.bucket_mut(CLASS_MAP).insert(key, ctor);
    }

    /// Registered kinds, excluding `class_map`, sorted.
    pub fn kinds(&self) -> Vec<&str> {
        let mut out: Vec<&str> = self
            .buckets
            .keys()
            .map(String::as_str)
            .filter(|k| *k != CLASS_MAP)
            .collect();
        out.sort_unstable();
        out
    }

    /// Names registered under `kind`, sorted. Empty for unknown kinds.
    pub fn names(&self, kind: &str) -> Vec<&str> {
        let mut out: Vec<&str> = self
            .bucket(kind)
            .map(|b| b.keys().map(String::as_str).collect())
            .unwrap_or_default();
        out.sort_unstable();
        out
    }

    pub fn contains(&self, kind: &str, name: &str) -> bool {
        self.bucket(kind).is_some_and(|b| b.contains_key(name))
    }

    /// 结束写阶段：冻结为只读、可跨线程共享的注册表
    pub fn freeze(self) -> Registry {
        Registry {
            inner: Arc::new(self),
        }
    }
}

/// Frozen registry. Cheap to clone, safe to read from many threads.
#[derive(Clone)]
pub struct Registry {
    inner: Arc<RegistryStore>,
}

impl Deref for Registry {
    type Target = RegistryStore;
    fn deref(&self) -> &RegistryStore {
        &self.inner
    }
}
