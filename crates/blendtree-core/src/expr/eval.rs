//! Bottom-up evaluation of compiled expressions against a VariantMap.

use crate::error::ExprError;
use crate::value::Variant;
use crate::vars::VariantMap;

use super::parser::{BinaryOp, Expr, UnaryOp};

pub(crate) fn eval(expr: &Expr, vars: &VariantMap) -> Result<Variant, ExprError> {
    match expr {
        Expr::Literal(v) => Ok(v.clone()),
        Expr::Ident(name) => vars
            .lookup(name)
            .cloned()
            .ok_or_else(|| ExprError::UnresolvedIdentifier(name.clone())),
        Expr::Unary { op, operand } => {
            let v = eval(operand, vars)?;
            match op {
                UnaryOp::Not => Ok(Variant::Bool(!v.is_truthy())),
                UnaryOp::Neg => match v {
                    Variant::Int(i) => Ok(Variant::Int(i.wrapping_neg())),
                    Variant::Float(f) => Ok(Variant::Float(-f)),
                    other => Err(type_mismatch("a number", &other)),
                },
            }
        }
        Expr::Binary { op, lhs, rhs } => {
            let l = eval(lhs, vars)?;
            let r = eval(rhs, vars)?;
            apply_binary(*op, &l, &r)
        }
    }
}

fn apply_binary(op: BinaryOp, l: &Variant, r: &Variant) -> Result<Variant, ExprError> {
    match op {
        BinaryOp::Or => Ok(Variant::Bool(l.is_truthy() || r.is_truthy())),
        BinaryOp::And => Ok(Variant::Bool(l.is_truthy() && r.is_truthy())),
        BinaryOp::Equal => Ok(Variant::Bool(equals(l, r))),
        BinaryOp::NotEqual => Ok(Variant::Bool(!equals(l, r))),
        BinaryOp::LessThan => Ok(Variant::Bool(ordered(l, r, |a, b| a < b))),
        BinaryOp::LessThanEqual => Ok(Variant::Bool(ordered(l, r, |a, b| a <= b))),
        BinaryOp::GreaterThan => Ok(Variant::Bool(ordered(l, r, |a, b| a > b))),
        BinaryOp::GreaterThanEqual => Ok(Variant::Bool(ordered(l, r, |a, b| a >= b))),
        BinaryOp::Add => numeric(l, r, |a, b| Ok(a + b), |a, b| Ok(a.wrapping_add(b))),
        BinaryOp::Sub => numeric(l, r, |a, b| Ok(a - b), |a, b| Ok(a.wrapping_sub(b))),
        BinaryOp::Mul => numeric(l, r, |a, b| Ok(a * b), |a, b| Ok(a.wrapping_mul(b))),
        BinaryOp::Div => numeric(
            l,
            r,
            |a, b| {
                if b == 0.0 {
                    Err(ExprError::DivisionByZero)
                } else {
                    Ok(a / b)
                }
            },
            |a, b| {
                if b == 0 {
                    Err(ExprError::DivisionByZero)
                } else {
                    Ok(a.wrapping_div(b))
                }
            },
        ),
    }
}

/// Arithmetic dispatch: int stays int when both sides are ints, any float
/// operand promotes both sides to float, anything else is a type mismatch.
fn numeric(
    l: &Variant,
    r: &Variant,
    float_op: impl Fn(f64, f64) -> Result<f64, ExprError>,
    int_op: impl Fn(i64, i64) -> Result<i64, ExprError>,
) -> Result<Variant, ExprError> {
    if let (Variant::Int(a), Variant::Int(b)) = (l, r) {
        return int_op(*a, *b).map(Variant::Int);
    }
    let a = l.as_float().ok_or_else(|| type_mismatch("a number", l))?;
    let b = r.as_float().ok_or_else(|| type_mismatch("a number", r))?;
    float_op(a, b).map(Variant::Float)
}

/// Two numerics compare numerically after promotion; otherwise both sides
/// coerce to their native truthiness.
fn equals(l: &Variant, r: &Variant) -> bool {
    match (l, r) {
        (Variant::Int(a), Variant::Int(b)) => a == b,
        _ => match (l.as_float(), r.as_float()) {
            (Some(a), Some(b)) => a == b,
            _ => l.is_truthy() == r.is_truthy(),
        },
    }
}

fn ordered(l: &Variant, r: &Variant, cmp: impl Fn(f64, f64) -> bool) -> bool {
    match (l.as_float(), r.as_float()) {
        (Some(a), Some(b)) => cmp(a, b),
        _ => cmp(l.is_truthy() as u8 as f64, r.is_truthy() as u8 as f64),
    }
}

fn type_mismatch(expected: &'static str, got: &Variant) -> ExprError {
    ExprError::TypeMismatch {
        expected,
        got: got.kind().name(),
    }
}
