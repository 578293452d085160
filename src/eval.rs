use log::trace;

use crate::{
    errors::err::*,
    source_pos::{Span, Spanned},
    syntax::{
        operators::{BinOp, OpKind, UnOp},
        shunting_yard::{Rpn, SpannedRpn},
    },
};

/// Runs a postfix sequence on a value stack. Every value remembers the span
/// of the sub-expression it came from, which is what leftover operands get
/// reported against.
pub fn eval_postfix(postfix: &[SpannedRpn<'_>]) -> EvalResult<i64> {
    let mut values: Vec<Spanned<i64>> = Vec::with_capacity(postfix.len());

    for item in postfix {
        let at = |kind| ExpressionError::new(kind, item.span.clone());
        match item.elem {
            Rpn::Num(n) => {
                let value = n.parse::<i64>().map_err(|_| at(ErrorKind::LiteralOutOfRange))?;
                values.push(Spanned::new(value, item.span.clone()));
            }
            Rpn::Op(op) => match op.kind {
                OpKind::Unary(un) => {
                    let operand = values.pop().ok_or_else(|| at(ErrorKind::MissingUnaryOperand))?;
                    let value = apply_unary(un, operand.elem).map_err(at)?;
                    values.push(Spanned::new(value, cover(&item.span, &operand.span)));
                }
                OpKind::Binary(bin) => {
                    let (right, left) = match (values.pop(), values.pop()) {
                        (Some(right), Some(left)) => (right, left),
                        _ => return Err(at(ErrorKind::MissingBinaryOperands)),
                    };
                    let value = apply_binary(bin, left.elem, right.elem).map_err(at)?;
                    values.push(Spanned::new(value, cover(&left.span, &right.span)));
                }
            },
            // an unclosed `(` kept by the lenient paren policy sits where a
            // binary operator would
            Rpn::LParen => {
                if values.len() < 2 {
                    return Err(at(ErrorKind::MissingBinaryOperands));
                }
                return Err(at(ErrorKind::UnknownBinaryOperator('(')));
            }
        }
        trace!("{} => {:?}", item.elem, values.iter().map(|v| v.elem).collect::<Vec<_>>());
    }

    match values.len() {
        0 => Err(ExpressionError::new(ErrorKind::EmptyExpression, 0..0)),
        1 => Ok(values[0].elem),
        _ => Err(ExpressionError::new(
            ErrorKind::LeftoverOperands,
            values[1].span.clone(),
        )),
    }
}

fn cover(a: &Span, b: &Span) -> Span {
    a.start.min(b.start)..a.end.max(b.end)
}

pub fn apply_unary(op: UnOp, operand: i64) -> Result<i64, ErrorKind> {
    match op {
        UnOp::Not => Ok((operand == 0) as i64),
        UnOp::Incr => operand.checked_add(1).ok_or(ErrorKind::Overflow),
        UnOp::Decr => operand.checked_sub(1).ok_or(ErrorKind::Overflow),
        UnOp::Neg => operand.checked_neg().ok_or(ErrorKind::Overflow),
    }
}

pub fn apply_binary(op: BinOp, left: i64, right: i64) -> Result<i64, ErrorKind> {
    let checked = |value: Option<i64>| value.ok_or(ErrorKind::Overflow);
    match op {
        BinOp::Add => checked(left.checked_add(right)),
        BinOp::Sub => checked(left.checked_sub(right)),
        BinOp::Mul => checked(left.checked_mul(right)),
        BinOp::Div if right == 0 => Err(ErrorKind::DivisionByZero),
        BinOp::Div => checked(left.checked_div(right)),
        BinOp::Rem if right == 0 => Err(ErrorKind::DivisionByZero),
        BinOp::Rem => checked(left.checked_rem(right)),
        BinOp::Pow => pow(left, right),
        BinOp::EqEq => Ok((left == right) as i64),
        BinOp::NotEq => Ok((left != right) as i64),
        BinOp::GT => Ok((left > right) as i64),
        BinOp::LT => Ok((left < right) as i64),
        BinOp::GTE => Ok((left >= right) as i64),
        BinOp::LTE => Ok((left <= right) as i64),
        BinOp::And => Ok((left != 0 && right != 0) as i64),
        BinOp::Or => Ok((left != 0 || right != 0) as i64),
    }
}

/// Exact integer power. A negative exponent yields the real result truncated
/// toward zero, so only bases 1 and -1 survive it and 0 divides by zero.
pub fn pow(base: i64, exp: i64) -> Result<i64, ErrorKind> {
    match base {
        0 if exp < 0 => Err(ErrorKind::DivisionByZero),
        0 if exp == 0 => Ok(1),
        0 => Ok(0),
        1 => Ok(1),
        -1 if exp % 2 == 0 => Ok(1),
        -1 => Ok(-1),
        _ if exp < 0 => Ok(0),
        _ => u32::try_from(exp)
            .ok()
            .and_then(|exp| base.checked_pow(exp))
            .ok_or(ErrorKind::Overflow),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::ParenPolicy, syntax::lexer::Lexer, syntax::shunting_yard::to_postfix};
    use pretty_assertions::assert_eq;

    fn run(source: &str) -> EvalResult<i64> {
        let tokens = Lexer::new(source).tokenize()?;
        eval_postfix(&to_postfix(&tokens, ParenPolicy::Lenient)?)
    }

    fn failure(source: &str) -> (ErrorKind, usize) {
        let err = run(source).unwrap_err();
        (err.kind, err.position())
    }

    #[test]
    fn arithmetic() {
        assert_eq!(run("1 + 2 * 3"), Ok(7));
        assert_eq!(run("(1 + 2) * 3"), Ok(9));
        assert_eq!(run("7 / 2"), Ok(3));
        assert_eq!(run("-7 / 2"), Ok(-3));
        assert_eq!(run("-7 % 3"), Ok(-1));
        assert_eq!(run("7 % -3"), Ok(1));
        assert_eq!(run("2 ^ 3 ^ 2"), Ok(512));
    }

    #[test]
    fn logic_and_comparison() {
        assert_eq!(run("3 > 2 && 2 > 1"), Ok(1));
        assert_eq!(run("0 || 5"), Ok(1));
        assert_eq!(run("0 && 5"), Ok(0));
        assert_eq!(run("4 <= 4 == 1"), Ok(1));
        assert_eq!(run("1 != 1"), Ok(0));
        assert_eq!(run("!7"), Ok(0));
        assert_eq!(run("!0"), Ok(1));
    }

    #[test]
    fn increment_decrement() {
        assert_eq!(run("++4"), Ok(5));
        assert_eq!(run("--4 * 2"), Ok(6));
        assert_eq!(run("- -3"), Ok(3));
    }

    #[test]
    fn power_rules() {
        assert_eq!(pow(2, 10), Ok(1024));
        assert_eq!(pow(-2, 3), Ok(-8));
        assert_eq!(pow(5, 0), Ok(1));
        assert_eq!(pow(0, 0), Ok(1));
        assert_eq!(pow(2, -1), Ok(0));
        assert_eq!(pow(-3, -2), Ok(0));
        assert_eq!(pow(1, -5), Ok(1));
        assert_eq!(pow(-1, -5), Ok(-1));
        assert_eq!(pow(-1, i64::MAX - 1), Ok(1));
        assert_eq!(pow(0, -1), Err(ErrorKind::DivisionByZero));
        assert_eq!(pow(2, 63), Err(ErrorKind::Overflow));
        assert_eq!(pow(3, i64::MAX), Err(ErrorKind::Overflow));
        assert_eq!(run("-2 ^ 2"), Ok(4));
    }

    #[test]
    fn division_by_zero() {
        assert_eq!(failure("10/0"), (ErrorKind::DivisionByZero, 2));
        assert_eq!(failure("10 % (3 - 3)"), (ErrorKind::DivisionByZero, 3));
    }

    #[test]
    fn overflow() {
        assert_eq!(failure("9223372036854775807 + 1"), (ErrorKind::Overflow, 20));
        assert_eq!(failure("99999999999999999999"), (ErrorKind::LiteralOutOfRange, 0));
        assert_eq!(run("-9223372036854775807 - 1"), Ok(i64::MIN));
        assert_eq!(failure("(-9223372036854775807 - 1) / -1"), (ErrorKind::Overflow, 27));
    }

    #[test]
    fn stack_underflow() {
        assert_eq!(failure("1 +"), (ErrorKind::MissingBinaryOperands, 2));
        assert_eq!(failure("!"), (ErrorKind::MissingUnaryOperand, 0));
    }

    #[test]
    fn unclosed_paren_in_postfix() {
        assert_eq!(failure("(1 + 2"), (ErrorKind::MissingBinaryOperands, 0));
        assert_eq!(failure("(1 + 2) * (3"), (ErrorKind::UnknownBinaryOperator('('), 10));
        assert_eq!(failure("2 * (3"), (ErrorKind::UnknownBinaryOperator('('), 4));
    }

    #[test]
    fn leftover_operands() {
        assert_eq!(failure("(1)(2)"), (ErrorKind::LeftoverOperands, 4));
        assert_eq!(failure("5--3"), (ErrorKind::LeftoverOperands, 1));
        assert_eq!(failure(""), (ErrorKind::EmptyExpression, 0));
        assert_eq!(failure("()"), (ErrorKind::EmptyExpression, 0));
    }
}
