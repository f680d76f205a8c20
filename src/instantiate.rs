use std::any::Any;

use serde_json::Value;
use smallvec::SmallVec;

use crate::{
    args::{Args, Config, Field},
    config::{SuperfluousPolicy, NAME_FIELD},
    constructor::{Construct, ConstructorRef, Instance},
    error::{RegistryError, Result},
    resolver::Selector,
    store::RegistryStore,
};

/// Merge `config` with `overrides` (overrides win), check the constructor's declared
/// parameters and call it with the fields it accepts.
///
/// Fields the constructor does not declare are dropped. Those not listed in
/// `unused_keys` are reported in a single warning; they never cause an error.
pub fn instantiate(
    ctor: &dyn Construct,
    config: &Config,
    unused_keys: &[&str],
    overrides: Args,
) -> Result<Instance> {
    instantiate_with(SuperfluousPolicy::Warn, ctor, config, unused_keys, overrides)
}

/// [`instantiate`] followed by a downcast to `T`.
pub fn instantiate_as<T: Any>(
    ctor: &dyn Construct,
    config: &Config,
    unused_keys: &[&str],
    overrides: Args,
) -> Result<T> {
    let instance = instantiate(ctor, config, unused_keys, overrides)?;
    downcast_instance(ctor, instance)
}

pub fn downcast_instance<T: Any>(ctor: &dyn Construct, instance: Instance) -> Result<T> {
    instance
        .downcast::<T>()
        .map(|b| *b)
        .map_err(|_| RegistryError::InstanceType {
            constructor: ctor.type_name().to_string(),
            expected: std::any::type_name::<T>(),
        })
}

pub(crate) fn instantiate_with(
    policy: SuperfluousPolicy,
    ctor: &dyn Construct,
    config: &Config,
    unused_keys: &[&str],
    overrides: Args,
) -> Result<Instance> {
    let mut merged = Args::from_config(config);
    merged.merge(overrides);

    let signature = ctor.signature();
    signature.validate(ctor.type_name())?;

    // catch-all：整包传入，不做过滤
    if !signature.accepts_arbitrary_fields() {
        let mut superfluous: SmallVec<[(String, Field); 4]> = SmallVec::new();
        merged.retain(|key, field| {
            if signature.accepts(key) {
                return true;
            }
            if !unused_keys.contains(&key) {
                superfluous.push((key.to_string(), field.clone()));
            }
            false
        });
        if !superfluous.is_empty() && policy == SuperfluousPolicy::Warn {
            tracing::warn!(
                constructor = %ctor.type_name(),
                superfluous = %render_fields(&superfluous),
                "superfluous configuration fields"
            );
        }
    }

    ctor.construct(merged).map_err(RegistryError::from_constructor)
}

fn render_fields(fields: &[(String, Field)]) -> String {
    let parts: Vec<String> = fields
        .iter()
        .map(|(k, v)| format!("{}: {v:?}", Value::String(k.clone())))
        .collect();
    format!("{{{}}}", parts.join(", "))
}

impl RegistryStore {
    /// Look up `selector` under `kind` and instantiate it from the configuration.
    /// A plain name is treated as `{"name": name}`; the `name` field is always an
    /// expected unused key.
    pub fn construct<'a>(
        &self,
        kind: &str,
        selector: impl Into<Selector<'a>>,
        unused_keys: &[&str],
        overrides: Args,
    ) -> Result<Instance> {
        self.construct_resolved(kind, selector.into(), unused_keys, overrides)
            .map(|(_, instance)| instance)
    }

    /// [`RegistryStore::construct`] followed by a downcast to `T`.
    pub fn construct_as<'a, T: Any>(
        &self,
        kind: &str,
        selector: impl Into<Selector<'a>>,
        unused_keys: &[&str],
        overrides: Args,
    ) -> Result<T> {
        let (ctor, instance) = self.construct_resolved(kind, selector.into(), unused_keys, overrides)?;
        downcast_instance(ctor.as_ref(), instance)
    }

    fn construct_resolved(
        &self,
        kind: &str,
        selector: Selector<'_>,
        unused_keys: &[&str],
        overrides: Args,
    ) -> Result<(ConstructorRef, Instance)> {
        let config = selector.to_config();
        let ctor = self.lookup(kind, Selector::Config(&*config))?;
        let mut unused: SmallVec<[&str; 4]> = unused_keys.iter().copied().collect();
        unused.push(NAME_FIELD);
        let instance = instantiate_with(self.cfg.superfluous, ctor.as_ref(), &config, &unused, overrides)?;
        Ok((ctor, instance))
    }

    /// [`instantiate`] honoring this store's superfluous-field policy.
    pub fn instantiate(
        &self,
        ctor: &dyn Construct,
        config: &Config,
        unused_keys: &[&str],
        overrides: Args,
    ) -> Result<Instance> {
        instantiate_with(self.cfg.superfluous, ctor, config, unused_keys, overrides)
    }
}
