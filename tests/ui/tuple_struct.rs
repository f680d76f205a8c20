#[mmg_registry::registrable]
struct Pair(u32, u32);

fn main() {}
