//! `#[registrable]`：为具名字段结构体生成参数表、按名取参、类型身份与静态注册。
use proc_macro::TokenStream;

mod codegen;

/// Make a struct constructible from configuration.
///
/// ```ignore
/// #[mmg_registry::registrable(kind = "model", name = "regression")]
/// struct RegressionNet {
///     input_dim: u32,
///     #[param(default = 10)]
///     output_dim: u32,
///     #[param(object)]
///     preprocessor: std::sync::Arc<Preprocessor>,
/// }
/// ```
///
/// Field options (`#[param(...)]`):
/// - `default` / `default = expr`: value used when the field is absent
/// - `object`: taken from an in-process object override instead of JSON
/// - `rest`: catch-all `Args` receiving every remaining field
///
/// Without `kind`/`name` the type is only self-registered into `class_map`.
/// `class = "..."` overrides the `class_map` key. Place this attribute above any derives.
#[proc_macro_attribute]
pub fn registrable(args: TokenStream, input: TokenStream) -> TokenStream {
    codegen::entrypoint(args, input)
}
