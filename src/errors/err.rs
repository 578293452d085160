use thiserror::Error;

use crate::source_pos::Span;

pub type EvalResult<T> = Result<T, ExpressionError>;

/// The single error type handed back to callers. It pairs what went wrong
/// with the span of the token that was being processed when it happened.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} @ char: {}", .span.start)]
pub struct ExpressionError {
    pub kind: ErrorKind,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ErrorKind {
    // tokenizer
    #[error("Unexpected character '{0}'")]
    UnexpectedChar(char),

    // validator
    #[error("Expression can't start with a closing parenthesis")]
    LeadingClosingParen,
    #[error("Expression can't start with a binary operator")]
    LeadingBinaryOperator,
    #[error("Two binary operators in a row")]
    ConsecutiveBinaryOperators,
    #[error("Two operands in a row")]
    ConsecutiveOperands,
    #[error("A unary operand can't be followed by a binary operator")]
    UnaryBeforeBinary,

    // converter, strict parenthesis policy only
    #[error("Unmatched closing parenthesis")]
    UnmatchedClosingParen,
    #[error("Unclosed opening parenthesis")]
    UnclosedOpeningParen,

    // evaluator
    #[error("Integer literal out of range")]
    LiteralOutOfRange,
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Integer overflow")]
    Overflow,
    #[error("Missing operand for unary operator")]
    MissingUnaryOperand,
    #[error("Missing operands for binary operator")]
    MissingBinaryOperands,
    #[error("Unknown binary operator: {0}")]
    UnknownBinaryOperator(char),
    #[error("Expression evaluation error: leftover operands")]
    LeftoverOperands,
    #[error("Expression evaluation error: no operands")]
    EmptyExpression,
}

impl ExpressionError {
    pub fn new(kind: ErrorKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// 0-based character index into the evaluated expression.
    pub fn position(&self) -> usize {
        self.span.start
    }

    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    /// Renders `source` with a caret line under the offending span.
    pub fn render(&self, source: &str) -> String {
        let start = self.span.start.min(source.len());
        let width = self.span.end.saturating_sub(start).max(1);
        format!("{}\n{}{}", source, " ".repeat(start), "^".repeat(width))
    }
}
