use std::sync::Arc;

use mmg_registry::prelude::*;
use serde_json::json;

fn store_with_model() -> (RegistryStore, ConstructorRef) {
    let mut store = RegistryStore::new();
    let ctor = FnConstructor::new("models::Regression", Signature::new(), |_args: Args| {
        Ok(Box::new(()) as Instance)
    })
    .into_ref();
    store.register("model", "regression", ctor.clone()).expect("register");
    (store, ctor)
}

fn config(v: serde_json::Value) -> Config {
    v.as_object().cloned().expect("object")
}

#[test]
fn name_and_config_resolve_to_identical_constructor() {
    let (store, ctor) = store_with_model();
    let by_name = store.lookup("model", "regression").expect("by name");
    let cfg = config(json!({"name": "regression", "input_dim": 784}));
    let by_config = store.lookup("model", &cfg).expect("by config");
    assert!(Arc::ptr_eq(&by_name, &by_config));
    assert!(Arc::ptr_eq(&ctor, &by_config));
}

#[test]
fn unknown_kind_and_unknown_name_are_distinct() {
    let (store, _) = store_with_model();
    let err = store.lookup("trainer", "regression").expect_err("kind");
    assert!(matches!(err, RegistryError::UnknownKind { ref kind } if kind == "trainer"));
    assert!(err.to_string().contains("trainer"));

    let err = store.lookup("model", "dlrm").expect_err("name");
    match err {
        RegistryError::UnknownName { kind, name } => {
            assert_eq!(kind, "model");
            assert_eq!(name, "dlrm");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn config_without_name_field_fails() {
    let (store, _) = store_with_model();
    let cfg = config(json!({"input_dim": 784}));
    let err = store.lookup("model", &cfg).expect_err("missing name");
    assert!(matches!(err, RegistryError::MissingNameField { ref kind } if kind == "model"));

    let cfg = config(json!({"name": 7}));
    let err = store.lookup("model", &cfg).expect_err("non-string name");
    assert!(matches!(err, RegistryError::InvalidNameField { .. }));
}

#[test]
fn lookup_does_not_touch_the_configuration() {
    let (store, _) = store_with_model();
    let cfg = config(json!({"name": "regression", "extra": [1, 2]}));
    let before = cfg.clone();
    store.lookup("model", &cfg).expect("lookup");
    assert_eq!(cfg, before);
}
