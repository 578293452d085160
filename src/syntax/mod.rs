pub mod lexer;

pub mod operators;

pub mod shunting_yard;

pub mod tokens;

pub mod validator;

pub use lexer::*;
pub use operators::{Arity, Assoc, BinOp, OpKind, Operator, UnOp};
pub use shunting_yard::*;
pub use tokens::*;
pub use validator::validate;
