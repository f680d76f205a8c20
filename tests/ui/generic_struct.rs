#[mmg_registry::registrable]
struct Holder<T> {
    value: T,
}

fn main() {}
