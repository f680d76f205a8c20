//! Declared parameter schema of a constructor.
//!
//! Rust has no runtime signature inspection, so every constructor carries an explicit
//! [`Signature`]. The `#[registrable]` macro derives one from struct fields; hand-written
//! constructors build it with the builder methods below.
use std::fmt;

use crate::error::{RegistryError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamKind {
    PositionalOnly,
    PositionalOrKeyword,
    VarPositional,
    KeywordOnly,
    VarKeyword,
}

impl ParamKind {
    /// Only parameters addressable by name work with merge-by-name construction.
    pub fn is_supported(self) -> bool {
        !matches!(self, ParamKind::PositionalOnly | ParamKind::VarPositional)
    }
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ParamKind::PositionalOnly => "positional-only",
            ParamKind::PositionalOrKeyword => "positional-or-keyword",
            ParamKind::VarPositional => "variadic-positional",
            ParamKind::KeywordOnly => "keyword-only",
            ParamKind::VarKeyword => "variadic-keyword",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub name: String,
    pub kind: ParamKind,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Signature {
    params: Vec<Param>,
}

impl Signature {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, kind: ParamKind) -> Self {
        self.params.push(Param {
            name: name.into(),
            kind,
        });
        self
    }

    /// Positional-or-keyword parameter.
    pub fn param(self, name: impl Into<String>) -> Self {
        self.with(name, ParamKind::PositionalOrKeyword)
    }
    pub fn keyword_only(self, name: impl Into<String>) -> Self {
        self.with(name, ParamKind::KeywordOnly)
    }
    pub fn positional_only(self, name: impl Into<String>) -> Self {
        self.with(name, ParamKind::PositionalOnly)
    }
    pub fn var_positional(self, name: impl Into<String>) -> Self {
        self.with(name, ParamKind::VarPositional)
    }
    pub fn var_keyword(self, name: impl Into<String>) -> Self {
        self.with(name, ParamKind::VarKeyword)
    }

    pub fn params(&self) -> &[Param] {
        &self.params
    }

    /// 是否声明了 catch-all 关键字参数
    pub fn accepts_arbitrary_fields(&self) -> bool {
        self.params.iter().any(|p| p.kind == ParamKind::VarKeyword)
    }

    /// Whether `field` names a declared parameter. Variadic parameters do not count:
    /// their own names are not field names.
    pub fn accepts(&self, field: &str) -> bool {
        self.params.iter().any(|p| {
            p.name == field && matches!(p.kind, ParamKind::PositionalOrKeyword | ParamKind::KeywordOnly)
        })
    }

    /// Reject positional-only and variadic-positional parameters.
    pub fn validate(&self, constructor: &str) -> Result<()> {
        match self.params.iter().find(|p| !p.kind.is_supported()) {
            Some(p) => Err(RegistryError::UnsupportedParameterKind {
                constructor: constructor.to_string(),
                param: p.name.clone(),
                param_kind: p.kind,
            }),
            None => Ok(()),
        }
    }
}
