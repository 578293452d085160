use std::fmt;

use log::trace;

use crate::{
    config::ParenPolicy,
    errors::err::*,
    syntax::{
        operators::Operator,
        tokens::{Delimiter, Span, Spanned, SpannedTok, Token},
    },
};

/// An element of a postfix sequence. Only the lenient paren policy lets an
/// unclosed `(` through, and the evaluator rejects it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Rpn<'a> {
    Num(&'a str),
    Op(&'static Operator),
    LParen,
}

pub type SpannedRpn<'a> = Spanned<Rpn<'a>>;

impl fmt::Display for Rpn<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rpn::Num(n) => f.write_str(n),
            Rpn::Op(op) => write!(f, "{}", op),
            Rpn::LParen => f.write_str("("),
        }
    }
}

enum Pending {
    LParen,
    Op(&'static Operator),
}

pub fn to_postfix<'a>(tokens: &[SpannedTok<'a>], parens: ParenPolicy) -> EvalResult<Vec<SpannedRpn<'a>>> {
    let mut output: Vec<SpannedRpn<'a>> = Vec::with_capacity(tokens.len());
    let mut operators: Vec<Spanned<Pending>> = vec![];

    for tok in tokens {
        match tok.elem {
            Token::Num(n) => output.push(Spanned::new(Rpn::Num(n), tok.span.clone())),
            Token::Delimiter(Delimiter::LParen) => {
                operators.push(Spanned::new(Pending::LParen, tok.span.clone()))
            }
            Token::Delimiter(Delimiter::RParen) => {
                close_paren(&mut output, &mut operators, tok.span.clone(), parens)?
            }
            Token::Op(op) => {
                while let Some(Spanned {
                    elem: Pending::Op(top),
                    span,
                }) = operators.last()
                {
                    if !top.has_bigger_prec(op) {
                        break;
                    }
                    output.push(Spanned::new(Rpn::Op(*top), span.clone()));
                    operators.pop();
                }
                operators.push(Spanned::new(Pending::Op(op), tok.span.clone()));
            }
        }
    }

    while let Some(Spanned { elem, span }) = operators.pop() {
        match elem {
            Pending::Op(op) => output.push(Spanned::new(Rpn::Op(op), span)),
            Pending::LParen => match parens {
                ParenPolicy::Strict => {
                    return Err(ExpressionError::new(ErrorKind::UnclosedOpeningParen, span))
                }
                ParenPolicy::Lenient => {
                    trace!("keeping unclosed parenthesis at {}", span.start);
                    output.push(Spanned::new(Rpn::LParen, span))
                }
            },
        }
    }
    Ok(output)
}

fn close_paren<'a>(
    output: &mut Vec<SpannedRpn<'a>>,
    operators: &mut Vec<Spanned<Pending>>,
    span: Span,
    parens: ParenPolicy,
) -> EvalResult<()> {
    while let Some(pending) = operators.pop() {
        match pending.elem {
            Pending::LParen => return Ok(()),
            Pending::Op(op) => output.push(Spanned::new(Rpn::Op(op), pending.span)),
        }
    }
    match parens {
        ParenPolicy::Strict => Err(ExpressionError::new(ErrorKind::UnmatchedClosingParen, span)),
        ParenPolicy::Lenient => {
            trace!("ignoring unmatched parenthesis at {}", span.start);
            Ok(())
        }
    }
}
