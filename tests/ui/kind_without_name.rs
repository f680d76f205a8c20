#[mmg_registry::registrable(kind = "model")]
struct Unnamed {
    width: u32,
}

fn main() {}
