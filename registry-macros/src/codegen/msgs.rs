// Centralized compile-time diagnostic strings for the macro codegen layer.

pub(super) const ERR_TARGET: &str = "#[registrable] only supports structs with named fields";
pub(super) const ERR_NAMED_FIELDS: &str =
    "#[registrable] requires named fields; tuple and unit structs have no parameter names";
pub(super) const ERR_GENERICS: &str = "#[registrable] does not support generic structs";
pub(super) const ERR_KIND_NAME_PAIR: &str =
    "#[registrable] needs both `kind` and `name`, or neither";
pub(super) const ERR_UNKNOWN_ARG: &str =
    "unsupported #[registrable] argument; expected `kind`, `name` or `class`";
pub(super) const ERR_RESERVED_KIND: &str = "kind \"class_map\" is reserved";
pub(super) const ERR_DUP_ARG: &str = "#[registrable] argument given more than once";

pub(super) const ERR_PARAM_UNKNOWN: &str =
    "unsupported #[param] option; expected `default`, `default = expr`, `object` or `rest`";
pub(super) const ERR_PARAM_CONFLICT: &str = "a field takes at most one #[param] option";
pub(super) const ERR_REST_DUP: &str = "only one field may be #[param(rest)]";
