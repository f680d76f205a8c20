use mmg_registry::prelude::*;

#[mmg_registry::registrable(kind = "worker", name = "min")]
struct Worker {
    #[param(default = 2)]
    threads: u8,
}

fn main() {
    let store = RegistryStore::discover().unwrap();
    let w: Worker = store.construct_as("worker", "min", &[], Args::new()).unwrap();
    assert_eq!(w.threads, 2);
}
