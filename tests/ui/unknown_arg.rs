#[mmg_registry::registrable(flavor = "vanilla")]
struct Flavored {
    scoops: u32,
}

fn main() {}
