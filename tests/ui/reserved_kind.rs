#[mmg_registry::registrable(kind = "class_map", name = "shadow")]
struct Shadow {
    depth: u32,
}

fn main() {}
