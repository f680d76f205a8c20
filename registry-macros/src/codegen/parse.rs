use super::msgs::{
    ERR_DUP_ARG, ERR_KIND_NAME_PAIR, ERR_PARAM_CONFLICT, ERR_PARAM_UNKNOWN, ERR_RESERVED_KIND,
    ERR_UNKNOWN_ARG,
};
use syn::{meta::ParseNestedMeta, Attribute, Expr, LitStr};

// 低层解析：属性参数与字段选项

#[derive(Default)]
pub struct RegistrableArgs {
    pub kind: Option<LitStr>,
    pub name: Option<LitStr>,
    pub class: Option<LitStr>,
}

impl RegistrableArgs {
    pub fn parse(&mut self, meta: ParseNestedMeta) -> syn::Result<()> {
        let slot = if meta.path.is_ident("kind") {
            &mut self.kind
        } else if meta.path.is_ident("name") {
            &mut self.name
        } else if meta.path.is_ident("class") {
            &mut self.class
        } else {
            return Err(meta.error(ERR_UNKNOWN_ARG));
        };
        if slot.is_some() {
            return Err(meta.error(ERR_DUP_ARG));
        }
        *slot = Some(meta.value()?.parse()?);
        Ok(())
    }

    pub fn validate(&self) -> syn::Result<()> {
        match (&self.kind, &self.name) {
            (Some(kind), Some(_)) if kind.value() == "class_map" => {
                Err(syn::Error::new(kind.span(), ERR_RESERVED_KIND))
            }
            (Some(_), Some(_)) | (None, None) => Ok(()),
            (Some(lit), None) | (None, Some(lit)) => {
                Err(syn::Error::new(lit.span(), ERR_KIND_NAME_PAIR))
            }
        }
    }
}

pub enum FieldMode {
    Required,
    Default,
    DefaultExpr(Box<Expr>),
    Object,
    Rest,
}

#[inline]
pub fn is_param_attr(a: &Attribute) -> bool {
    a.path().is_ident("param")
}

/// 解析字段上的 #[param(...)]；无该属性即为必填参数
pub fn parse_field_mode(attrs: &[Attribute]) -> syn::Result<FieldMode> {
    let mut mode: Option<FieldMode> = None;
    for attr in attrs.iter().filter(|a| is_param_attr(a)) {
        attr.parse_nested_meta(|meta| {
            let next = if meta.path.is_ident("default") {
                if meta.input.peek(syn::Token![=]) {
                    FieldMode::DefaultExpr(Box::new(meta.value()?.parse()?))
                } else {
                    FieldMode::Default
                }
            } else if meta.path.is_ident("object") {
                FieldMode::Object
            } else if meta.path.is_ident("rest") {
                FieldMode::Rest
            } else {
                return Err(meta.error(ERR_PARAM_UNKNOWN));
            };
            if mode.is_some() {
                return Err(meta.error(ERR_PARAM_CONFLICT));
            }
            mode = Some(next);
            Ok(())
        })?;
    }
    Ok(mode.unwrap_or(FieldMode::Required))
}
