#[mmg_registry::registrable]
struct Open {
    #[param(rest)]
    first: mmg_registry::args::Args,
    #[param(rest)]
    second: mmg_registry::args::Args,
}

fn main() {}
