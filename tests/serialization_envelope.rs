use mmg_registry::{
    prelude::*,
    serialization::{append_type, split_envelope, DATA_TAG, TYPE_TAG},
};
use serde_json::json;

#[mmg_registry::registrable]
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
struct AggregatorState {
    round: u32,
    #[param(default)]
    workers: Vec<String>,
}

impl Serializable for AggregatorState {}

#[mmg_registry::registrable]
#[derive(Debug, PartialEq, serde::Serialize)]
struct Message {
    sender: String,
    receiver: String,
    #[param(default)]
    results: serde_json::Value,
}

impl Serializable for Message {}

#[test]
fn envelope_carries_type_tag_and_fields() {
    let state = AggregatorState {
        round: 7,
        workers: vec!["w0".into(), "w1".into()],
    };
    let envelope = state.to_envelope().expect("envelope");
    assert_eq!(envelope[TYPE_TAG], json!(AggregatorState::type_name()));
    assert_eq!(envelope[DATA_TAG], json!({"round": 7, "workers": ["w0", "w1"]}));

    let store = RegistryStore::discover().expect("discover");
    let back: AggregatorState = store.deserialize_as(&envelope).expect("rebuild");
    assert_eq!(back, state);
}

#[test]
fn heterogeneous_envelopes_rebuild_by_tag() {
    let store = RegistryStore::discover().expect("discover");
    let persisted = vec![
        append_type(Message::type_name(), json!({"sender": "a", "receiver": "b"}).as_object().cloned().unwrap()),
        append_type(AggregatorState::type_name(), json!({"round": 1}).as_object().cloned().unwrap()),
    ];
    let rebuilt: Vec<Instance> = persisted
        .iter()
        .map(|e| store.deserialize(e).expect("rebuild"))
        .collect();
    let msg = rebuilt[0].downcast_ref::<Message>().expect("message");
    assert_eq!(msg.sender, "a");
    assert_eq!(msg.results, serde_json::Value::Null);
    let state = rebuilt[1].downcast_ref::<AggregatorState>().expect("state");
    assert_eq!(state.round, 1);
    assert!(state.workers.is_empty());
}

#[test]
fn kind_registrations_are_reachable_by_tag() {
    let mut store = RegistryStore::new();
    let ctor = FnConstructor::new("strategies::FedAvg", Signature::new().param("rounds"), |mut args: Args| {
        let rounds: u32 = args.take("rounds")?;
        Ok(Box::new(rounds) as Instance)
    });
    store.register("aggregator", "fed_avg", ctor.into_ref()).unwrap();
    let envelope = append_type("strategies::FedAvg", json!({"rounds": 5}).as_object().cloned().unwrap());
    let rounds: u32 = store.deserialize_as(&envelope).expect("rebuild");
    assert_eq!(rounds, 5);
}

#[test]
fn malformed_and_unknown_envelopes_fail() {
    let store = RegistryStore::discover().expect("discover");
    for bad in [
        json!(42),
        json!({"__data__": {}}),
        json!({"__type__": 1, "__data__": {}}),
        json!({"__type__": AggregatorState::type_name(), "__data__": [1]}),
    ] {
        assert!(split_envelope(&bad).is_err(), "{bad}");
        let err = store.deserialize(&bad).expect_err("malformed");
        assert!(matches!(err, RegistryError::MalformedEnvelope(_)), "{err}");
    }
    let err = store
        .deserialize(&json!({"__type__": "nowhere::Thing", "__data__": {}}))
        .expect_err("unknown");
    assert!(matches!(err, RegistryError::UnknownClass { .. }));
}
