//! Expression language driving per-frame animation parameters.
//!
//! A small boolean/arithmetic grammar: `compile` runs the tokenizer and
//! recursive-descent parser once, the resulting [`Expression`] is immutable
//! and is re-evaluated every tick against the caller's
//! [`VariantMap`](crate::vars::VariantMap). Submodules keep the concerns
//! separate:
//!
//! - [`token`] scans the source string into operator/literal tokens.
//! - [`parser`] builds the owned [`Expr`] tree.
//! - `eval` walks that tree bottom-up against a variable map.

mod eval;
mod parser;
pub mod token;

pub use parser::{BinaryOp, Expr, UnaryOp};
pub use token::{Token, Tokenizer};

use crate::error::ExprError;
use crate::value::Variant;
use crate::vars::VariantMap;

/// A compiled, reusable expression. Construction parses the source exactly
/// once; evaluation is read-only, so one Expression may be evaluated from
/// multiple threads against different maps.
#[derive(Clone, Debug)]
pub struct Expression {
    source: String,
    ast: Expr,
}

impl Expression {
    pub fn compile(source: &str) -> Result<Self, ExprError> {
        let ast = parser::parse(source)?;
        Ok(Self {
            source: source.to_string(),
            ast,
        })
    }

    pub fn eval(&self, vars: &VariantMap) -> Result<Variant, ExprError> {
        eval::eval(&self.ast, vars)
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn ast(&self) -> &Expr {
        &self.ast
    }
}
