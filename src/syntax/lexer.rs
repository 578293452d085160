use std::{iter::Peekable, str::CharIndices};

use log::trace;

use crate::{
    errors::err::*,
    syntax::{
        operators::lookup,
        tokens::{Delimiter, Spanned, SpannedTok, Token},
    },
};

pub struct Lexer<'a> {
    source: &'a str,
    chars: Peekable<CharIndices<'a>>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
        }
    }

    pub fn tokenize(mut self) -> EvalResult<Vec<SpannedTok<'a>>> {
        let mut tokens: Vec<SpannedTok<'a>> = vec![];
        while let Some((pos, char)) = self.next() {
            match char {
                c if c.is_ascii_whitespace() => (),
                c if c.is_ascii_digit() => tokens.push(self.num(pos)),
                c => match Delimiter::try_from(c) {
                    Ok(delimiter) => tokens.push(SpannedTok {
                        elem: Token::Delimiter(delimiter),
                        span: pos..pos + 1,
                    }),
                    Err(()) => {
                        let prefix = tokens.last().map_or(true, |tok| tok.elem.expects_operand());
                        tokens.push(self.operator(pos, c, prefix)?)
                    }
                },
            }
        }
        trace!("lexed {:?} into {} tokens", self.source, tokens.len());
        Ok(tokens)
    }

    fn num(&mut self, start: usize) -> SpannedTok<'a> {
        let mut length = 1;
        while self.next_if(|c| c.is_ascii_digit()).is_some() {
            length += 1
        }
        let span = start..start + length;
        Spanned {
            elem: Token::Num(&self.source[span.clone()]),
            span,
        }
    }

    /// Two-character operators win over their one-character prefix, so `<=`
    /// never lexes as `<` followed by `=`.
    fn operator(&mut self, start: usize, first: char, prefix: bool) -> EvalResult<SpannedTok<'a>> {
        if let Some(&(next, second)) = self.peek() {
            let end = next + second.len_utf8();
            if let Some(op) = lookup(&self.source[start..end], prefix) {
                self.next();
                return Ok(Spanned {
                    elem: Token::Op(op),
                    span: start..end,
                });
            }
        }
        let span = start..start + first.len_utf8();
        match lookup(&self.source[span.clone()], prefix) {
            Some(op) => Ok(Spanned {
                elem: Token::Op(op),
                span,
            }),
            None => Err(ExpressionError::new(ErrorKind::UnexpectedChar(first), span)),
        }
    }

    pub fn next_if(&mut self, predicate: impl Fn(char) -> bool) -> Option<(usize, char)> {
        if predicate(self.peek()?.1) {
            return self.next();
        }
        None
    }

    fn peek(&mut self) -> Option<&(usize, char)> {
        self.chars.peek()
    }
}

impl Iterator for Lexer<'_> {
    type Item = (usize, char);
    fn next(&mut self) -> Option<(usize, char)> {
        self.chars.next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::operators::{BinOp, OpKind, UnOp};
    use pretty_assertions::assert_eq;

    fn lex(source: &str) -> Vec<String> {
        Lexer::new(source)
            .tokenize()
            .unwrap()
            .into_iter()
            .map(|tok| tok.elem.to_string())
            .collect()
    }

    fn kinds(source: &str) -> Vec<OpKind> {
        Lexer::new(source)
            .tokenize()
            .unwrap()
            .into_iter()
            .filter_map(|tok| match tok.elem {
                Token::Op(op) => Some(op.kind),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn numbers_are_coalesced() {
        let tokens = Lexer::new("  123+4").tokenize().unwrap();
        assert_eq!(
            tokens,
            vec![
                Spanned::new(Token::Num("123"), 2..5),
                Spanned::new(Token::Op(&crate::syntax::operators::BINARY_OPERATOR_TABLE["+"]), 5..6),
                Spanned::new(Token::Num("4"), 6..7),
            ]
        );
    }

    #[test]
    fn two_char_operators() {
        assert_eq!(
            lex("1>=2<=3==4!=5&&6||7"),
            vec!["1", ">=", "2", "<=", "3", "==", "4", "!=", "5", "&&", "6", "||", "7"]
        );
        assert_eq!(lex("++1 --2"), vec!["++", "1", "--", "2"]);
    }

    #[test]
    fn unary_minus_lookback() {
        assert_eq!(
            kinds("-5 - 3"),
            vec![OpKind::Unary(UnOp::Neg), OpKind::Binary(BinOp::Sub)]
        );
        assert_eq!(
            kinds("2*(-3)"),
            vec![OpKind::Binary(BinOp::Mul), OpKind::Unary(UnOp::Neg)]
        );
        assert_eq!(
            kinds("(1)-2"),
            vec![OpKind::Binary(BinOp::Sub)]
        );
        assert_eq!(
            kinds("1 - - 2"),
            vec![OpKind::Binary(BinOp::Sub), OpKind::Unary(UnOp::Neg)]
        );
        assert_eq!(lex("-(1)"), vec!["neg", "(", "1", ")"]);
    }

    #[test]
    fn adjacent_minuses_lex_as_decrement() {
        assert_eq!(kinds("5--3"), vec![OpKind::Unary(UnOp::Decr)]);
    }

    #[test]
    fn unexpected_char() {
        let err = Lexer::new("1 + a").tokenize().unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnexpectedChar('a'));
        assert_eq!(err.position(), 4);

        let err = Lexer::new("1 = 1").tokenize().unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnexpectedChar('='));
        assert_eq!(err.position(), 2);

        let err = Lexer::new("1 & 1").tokenize().unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnexpectedChar('&'));
    }

    #[test]
    fn empty_source() {
        assert_eq!(Lexer::new(" \t ").tokenize().unwrap(), vec![]);
    }
}
