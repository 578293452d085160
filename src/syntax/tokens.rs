use std::fmt;

use super::operators::Operator;
pub use crate::source_pos::{Span, Spanned};

pub type SpannedTok<'a> = Spanned<Token<'a>>;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Token<'a> {
    Op(&'static Operator),

    // Literals stay as source slices until evaluation, so overflow is reported there
    Num(&'a str),

    Delimiter(Delimiter),
}

impl Token<'_> {
    pub fn is_num(&self) -> bool {
        matches!(self, Token::Num(_))
    }

    pub fn is_binary_op(&self) -> bool {
        matches!(self, Token::Op(op) if op.is_infix())
    }

    pub fn is_unary_op(&self) -> bool {
        matches!(self, Token::Op(op) if op.is_prefix())
    }

    /// Whether a `-` found right after this token negates instead of subtracting.
    pub fn expects_operand(&self) -> bool {
        matches!(self, Token::Op(_) | Token::Delimiter(Delimiter::LParen))
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Op(op) => write!(f, "{}", op),
            Token::Num(n) => f.write_str(n),
            Token::Delimiter(Delimiter::LParen) => f.write_str("("),
            Token::Delimiter(Delimiter::RParen) => f.write_str(")"),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Delimiter {
    LParen,
    RParen,
}

impl TryFrom<char> for Delimiter {
    type Error = ();
    fn try_from(value: char) -> Result<Self, Self::Error> {
        Ok(match value {
            '(' => Delimiter::LParen,
            ')' => Delimiter::RParen,
            _ => return Err(()),
        })
    }
}
