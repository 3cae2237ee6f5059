pub mod op;

pub use op::{Associativity, BinOpKind, FuncKind, Precedence, UnaryOpKind};
