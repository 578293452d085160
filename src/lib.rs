//! Integer expression evaluator for arithmetic, comparison and logical
//! operators.
//!
//! Evaluation is a straight pipeline: the [`Lexer`](syntax::Lexer) turns the
//! source into tokens, [`validate`](syntax::validate) rejects malformed
//! sequences, [`to_postfix`](syntax::to_postfix) runs the shunting yard and
//! [`eval_postfix`](eval::eval_postfix) reduces the result on a value stack.
//! Every stage reports failures as an [`ExpressionError`] pointing back into
//! the source.
//!
//! ```
//! assert_eq!(mathlogic::evaluate("1 + 2 * 3"), Ok(7));
//! assert_eq!(mathlogic::evaluate("2 ^ 3 ^ 2"), Ok(512));
//! ```

pub mod config;
pub mod errors;
pub mod eval;
pub mod source_pos;
pub mod syntax;

use log::debug;

pub use config::{Config, ParenPolicy};
pub use errors::{ErrorKind, EvalResult, ExpressionError};
use syntax::{Lexer, SpannedRpn, SpannedTok};

/// Evaluates `expression` with the default configuration.
pub fn evaluate(expression: &str) -> EvalResult<i64> {
    Evaluator::default().evaluate(expression)
}

/// Holds the configuration shared by every evaluation. It keeps no state
/// between calls, so one instance can serve any number of threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator {
    config: Config,
}

impl Evaluator {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn tokenize<'a>(&self, expression: &'a str) -> EvalResult<Vec<SpannedTok<'a>>> {
        Lexer::new(expression).tokenize()
    }

    /// Tokenizes, validates and converts `expression` to postfix order.
    pub fn to_postfix<'a>(&self, expression: &'a str) -> EvalResult<Vec<SpannedRpn<'a>>> {
        let tokens = self.tokenize(expression)?;
        syntax::validate(&tokens)?;
        let postfix = syntax::to_postfix(&tokens, self.config.parens)?;
        debug!(
            "{:?} in postfix: {}",
            expression,
            postfix
                .iter()
                .map(|item| item.elem.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        );
        Ok(postfix)
    }

    pub fn evaluate(&self, expression: &str) -> EvalResult<i64> {
        let result = self
            .to_postfix(expression)
            .and_then(|postfix| eval::eval_postfix(&postfix));
        match &result {
            Ok(value) => debug!("{:?} evaluated to {}", expression, value),
            Err(err) => debug!("{:?} failed: {}", expression, err),
        }
        result
    }
}
