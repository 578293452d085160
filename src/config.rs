/// How the converter treats parentheses that have no partner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParenPolicy {
    /// `(1 + 2` and `1 + 2)` are errors.
    Strict,
    /// A stray `)` is skipped. Unclosed `(` are left in the postfix output
    /// and fail evaluation as if they were a binary operator.
    Lenient,
}

impl Default for ParenPolicy {
    fn default() -> Self {
        ParenPolicy::Strict
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    pub parens: ParenPolicy,
}

impl Config {
    pub fn with_parens(mut self, parens: ParenPolicy) -> Self {
        self.parens = parens;
        self
    }
}
