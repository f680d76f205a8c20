use mmg_registry::prelude::*;

#[mmg_registry::registrable]
struct Loss {
    r#type: String,
    #[param(rest)]
    options: Args,
}

fn main() {
    let sig = Loss::signature();
    assert_eq!(sig.params()[0].name, "type");
    let cfg = serde_json::json!({"type": "mse", "reduction": "mean"});
    let loss: Loss = mmg_registry::instantiate::instantiate_as(
        &mmg_registry::constructor::TypeConstructor::<Loss>::new(),
        cfg.as_object().unwrap(),
        &[],
        Args::new(),
    )
    .unwrap();
    assert_eq!(loss.r#type, "mse");
    assert!(loss.options.contains("reduction"));
}
