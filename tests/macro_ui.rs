//! Expansion checks for #[registrable]

#[test]
fn ui_registrable_happy_min_ok() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/happy_min.rs");
}

#[test]
fn ui_registrable_raw_ident_and_catch_all_ok() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/raw_ident_rest.rs");
}

#[test]
fn ui_registrable_reserved_kind_fails() {
    let t = trybuild::TestCases::new();
    t.compile_fail("tests/ui/reserved_kind.rs");
}

#[test]
fn ui_registrable_kind_without_name_fails() {
    let t = trybuild::TestCases::new();
    t.compile_fail("tests/ui/kind_without_name.rs");
}

#[test]
fn ui_registrable_unknown_arg_fails() {
    let t = trybuild::TestCases::new();
    t.compile_fail("tests/ui/unknown_arg.rs");
}

#[test]
fn ui_registrable_shape_errors_fail() {
    let t = trybuild::TestCases::new();
    t.compile_fail("tests/ui/tuple_struct.rs");
    t.compile_fail("tests/ui/generic_struct.rs");
}

#[test]
fn ui_registrable_param_errors_fail() {
    let t = trybuild::TestCases::new();
    t.compile_fail("tests/ui/double_rest.rs");
    t.compile_fail("tests/ui/conflicting_param.rs");
}
