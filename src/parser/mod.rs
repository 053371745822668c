//! Parser for the circuit notation

mod grammar;
pub mod lexer;

pub use grammar::parse;
