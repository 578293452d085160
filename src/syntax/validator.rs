use crate::{
    errors::err::*,
    syntax::tokens::{Delimiter, SpannedTok, Token},
};

/// Rejects token sequences with an obviously broken structure. Checks run
/// token by token from the left and the first failure wins. Parenthesis
/// balance and missing operands are left to the later stages.
pub fn validate(tokens: &[SpannedTok<'_>]) -> EvalResult<()> {
    for (i, tok) in tokens.iter().enumerate() {
        let prev = i.checked_sub(1).and_then(|j| tokens.get(j));
        let next = tokens.get(i + 1);
        let fail = |kind, at: &SpannedTok<'_>| Err(ExpressionError::new(kind, at.span.clone()));

        if i == 0 {
            if let Token::Delimiter(Delimiter::RParen) = tok.elem {
                return fail(ErrorKind::LeadingClosingParen, tok);
            }
            if tok.elem.is_binary_op() {
                return fail(ErrorKind::LeadingBinaryOperator, tok);
            }
        }
        if let Some(prev) = prev {
            if tok.elem.is_binary_op() && prev.elem.is_binary_op() {
                return fail(ErrorKind::ConsecutiveBinaryOperators, tok);
            }
            if tok.elem.is_num() && prev.elem.is_num() {
                return fail(ErrorKind::ConsecutiveOperands, tok);
            }
        }
        if let Some(next) = next {
            if tok.elem.is_unary_op() && next.elem.is_binary_op() {
                return fail(ErrorKind::UnaryBeforeBinary, next);
            }
        }
    }
    Ok(())
}
