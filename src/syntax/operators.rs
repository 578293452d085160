use phf::phf_map;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Assoc {
    Right,
    Left,
}

impl Assoc {
    pub fn is_left(&self) -> bool {
        self == &Assoc::Left
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Arity {
    Unary,
    Binary,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Pow,
    EqEq,
    NotEq,
    GT,
    LT,
    GTE,
    LTE,
    And,
    Or,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum UnOp {
    Not,
    Incr,
    Decr,
    Neg,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum OpKind {
    Unary(UnOp),
    Binary(BinOp),
}

/// One row of the precedence table. Ranks go from 1 (`||`) to 8 (prefix
/// operators).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Operator {
    pub sym: &'static str,
    pub kind: OpKind,
    pub prec: u8,
    pub assoc: Assoc,
}

impl Operator {
    /// Whether `self`, sitting on the operator stack, must be emitted before
    /// `op` is pushed.
    pub fn has_bigger_prec(&self, op: &Operator) -> bool {
        self.prec > op.prec || (self.prec == op.prec && op.is_left_assoc())
    }

    pub fn arity(&self) -> Arity {
        match self.kind {
            OpKind::Unary(_) => Arity::Unary,
            OpKind::Binary(_) => Arity::Binary,
        }
    }

    pub fn is_infix(&self) -> bool {
        self.arity() == Arity::Binary
    }

    pub fn is_prefix(&self) -> bool {
        self.arity() == Arity::Unary
    }

    pub fn is_left_assoc(&self) -> bool {
        self.assoc.is_left()
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            // keeps `1 - 2` and `1 neg 2` apart in postfix dumps
            OpKind::Unary(UnOp::Neg) => write!(f, "neg"),
            _ => write!(f, "{}", self.sym),
        }
    }
}

/// Finds the operator spelled `sym`. A handful of symbols exist both as a
/// prefix and an infix operator (only `-` today); `prefix` picks which table
/// is tried first, the other one serves as a fallback.
pub fn lookup(sym: &str, prefix: bool) -> Option<&'static Operator> {
    if prefix {
        UNARY_OPERATOR_TABLE
            .get(sym)
            .or_else(|| BINARY_OPERATOR_TABLE.get(sym))
    } else {
        BINARY_OPERATOR_TABLE
            .get(sym)
            .or_else(|| UNARY_OPERATOR_TABLE.get(sym))
    }
}

pub static BINARY_OPERATOR_TABLE: phf::Map<&'static str, Operator> = phf_map! {
    "||" => Operator {
        sym: "||",
        kind: OpKind::Binary(BinOp::Or),
        prec: 1,
        assoc: Assoc::Left,
    },
    "&&" => Operator {
        sym: "&&",
        kind: OpKind::Binary(BinOp::And),
        prec: 2,
        assoc: Assoc::Left,
    },
    "==" => Operator {
        sym: "==",
        kind: OpKind::Binary(BinOp::EqEq),
        prec: 3,
        assoc: Assoc::Left,
    },
    "!=" => Operator {
        sym: "!=",
        kind: OpKind::Binary(BinOp::NotEq),
        prec: 3,
        assoc: Assoc::Left,
    },
    ">" => Operator {
        sym: ">",
        kind: OpKind::Binary(BinOp::GT),
        prec: 4,
        assoc: Assoc::Left,
    },
    ">=" => Operator {
        sym: ">=",
        kind: OpKind::Binary(BinOp::GTE),
        prec: 4,
        assoc: Assoc::Left,
    },
    "<" => Operator {
        sym: "<",
        kind: OpKind::Binary(BinOp::LT),
        prec: 4,
        assoc: Assoc::Left,
    },
    "<=" => Operator {
        sym: "<=",
        kind: OpKind::Binary(BinOp::LTE),
        prec: 4,
        assoc: Assoc::Left,
    },
    "+" => Operator {
        sym: "+",
        kind: OpKind::Binary(BinOp::Add),
        prec: 5,
        assoc: Assoc::Left,
    },
    "-" => Operator {
        sym: "-",
        kind: OpKind::Binary(BinOp::Sub),
        prec: 5,
        assoc: Assoc::Left,
    },
    "*" => Operator {
        sym: "*",
        kind: OpKind::Binary(BinOp::Mul),
        prec: 6,
        assoc: Assoc::Left,
    },
    "/" => Operator {
        sym: "/",
        kind: OpKind::Binary(BinOp::Div),
        prec: 6,
        assoc: Assoc::Left,
    },
    "%" => Operator {
        sym: "%",
        kind: OpKind::Binary(BinOp::Rem),
        prec: 6,
        assoc: Assoc::Left,
    },
    "^" => Operator {
        sym: "^",
        kind: OpKind::Binary(BinOp::Pow),
        prec: 7,
        assoc: Assoc::Right,
    },
};

pub static UNARY_OPERATOR_TABLE: phf::Map<&'static str, Operator> = phf_map! {
    "!" => Operator {
        sym: "!",
        kind: OpKind::Unary(UnOp::Not),
        prec: 8,
        assoc: Assoc::Right,
    },
    "++" => Operator {
        sym: "++",
        kind: OpKind::Unary(UnOp::Incr),
        prec: 8,
        assoc: Assoc::Right,
    },
    "--" => Operator {
        sym: "--",
        kind: OpKind::Unary(UnOp::Decr),
        prec: 8,
        assoc: Assoc::Right,
    },
    "-" => Operator {
        sym: "-",
        kind: OpKind::Unary(UnOp::Neg),
        prec: 8,
        assoc: Assoc::Right,
    },
};
