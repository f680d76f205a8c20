#[mmg_registry::registrable]
struct Conflict {
    #[param(default, object)]
    value: u32,
}

fn main() {}
