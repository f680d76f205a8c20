use std::sync::Arc;

use mmg_registry::prelude::*;

fn ctor(type_name: &str) -> ConstructorRef {
    FnConstructor::new(type_name, Signature::new().param("a"), |mut args: Args| {
        let a: i64 = args.take("a")?;
        Ok(Box::new(a) as Instance)
    })
    .into_ref()
}

#[test]
fn duplicate_name_in_same_kind_is_rejected() {
    let mut store = RegistryStore::new();
    store.register("model", "dlrm", ctor("models::Dlrm")).expect("first");
    let err = store
        .register("model", "dlrm", ctor("models::Other"))
        .expect_err("duplicate");
    match err {
        RegistryError::DuplicateRegistration { kind, name } => {
            assert_eq!(kind, "model");
            assert_eq!(name, "dlrm");
        }
        other => panic!("unexpected error: {other}"),
    }
    // 原注册保持不变
    let found = store.lookup("model", "dlrm").expect("lookup");
    assert_eq!(found.type_name(), "models::Dlrm");
}

#[test]
fn same_name_under_different_kinds_is_independent() {
    let mut store = RegistryStore::new();
    store.register("model", "dlrm", ctor("models::Dlrm")).expect("model");
    store.register("trainer", "dlrm", ctor("trainers::Dlrm")).expect("trainer");
    assert_eq!(store.lookup("model", "dlrm").unwrap().type_name(), "models::Dlrm");
    assert_eq!(store.lookup("trainer", "dlrm").unwrap().type_name(), "trainers::Dlrm");
    assert_eq!(store.kinds(), vec!["model", "trainer"]);
}

#[test]
fn reserved_kind_is_rejected_before_registration() {
    let mut store = RegistryStore::new();
    let err = store.load("class_map", "anything").err().expect("reserved");
    assert!(matches!(err, RegistryError::ReservedKind { ref kind } if kind == "class_map"));
    assert!(err.to_string().contains("class_map"));
    assert!(store.kinds().is_empty());
}

#[test]
fn register_returns_the_same_constructor() {
    let mut store = RegistryStore::new();
    let original = ctor("models::Dlrm");
    let returned = store
        .load("model", "dlrm")
        .and_then(|l| l.register(original.clone()))
        .expect("register");
    assert!(Arc::ptr_eq(&original, &returned));
    assert!(Arc::ptr_eq(&original, &store.lookup("model", "dlrm").unwrap()));
}

#[test]
fn ordinary_registration_also_fills_class_map() {
    let mut store = RegistryStore::new();
    let original = ctor("models::Dlrm");
    store.register("model", "dlrm", original.clone()).expect("register");
    let by_identity = store.lookup_class_ref("models::Dlrm").expect("class ref");
    assert!(Arc::ptr_eq(&original, &by_identity));
    assert!(!store.kinds().contains(&"class_map"));
    assert!(store.contains("model", "dlrm"));
    assert_eq!(store.names("model"), vec!["dlrm"]);
    assert!(store.names("trainer").is_empty());
}
