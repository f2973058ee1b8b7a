//! Error types for expression handling and graph loading.

use thiserror::Error;

/// Expression tokenizer/parser/evaluator failures. These are local and
/// recoverable: they abort one expression evaluation, not the graph tick.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExprError {
    /// Tokenizer or parser rejection, with the byte offset of the offender.
    #[error("syntax error at offset {pos}: {msg}")]
    Syntax { pos: usize, msg: String },

    /// Identifier not present in the supplied VariantMap.
    #[error("unresolved identifier '{0}'")]
    UnresolvedIdentifier(String),

    /// Operator applied to operands it does not accept.
    #[error("type mismatch: expected {expected}, got {got}")]
    TypeMismatch {
        expected: &'static str,
        got: &'static str,
    },

    /// Division by exact zero (integer or float).
    #[error("division by zero")]
    DivisionByZero,
}

/// Graph-description rejections. Fatal to the load: no partially built tree
/// is ever returned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphLoadError {
    #[error("malformed graph description: {0}")]
    Json(String),

    #[error("unknown node type '{0}'")]
    UnknownNodeType(String),

    #[error("node '{id}': {kind} node cannot have {got} children")]
    BadArity {
        id: String,
        kind: &'static str,
        got: usize,
    },

    #[error("node '{id}': empty animation resource")]
    EmptyResource { id: String },

    #[error("node '{id}': end frame {end} precedes start frame {start}")]
    InvalidRange { id: String, start: f64, end: f64 },
}
