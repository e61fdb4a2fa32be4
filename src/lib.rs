mod ast;
mod error;
mod interpreter;
mod lexer;
mod parser;
mod token;

pub use ast::{ASTNode, BinaryOperator};
pub use error::{Error, EvalError, LexError, ParseError, Result};
pub use interpreter::{Interpreter, Variables};
pub use lexer::{Lexer, tokenize};
pub use parser::{MAX_DEPTH, Parser, parse};
pub use token::{Token, TokenKind};

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub result: i32,
    pub variables: Variables,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Result: {}", self.result)?;
        let mut vars: Vec<_> = self.variables.iter().collect();
        vars.sort_by_key(|(name, _)| *name);
        for (name, value) in vars {
            writeln!(f, "{name} = {value}")?;
        }
        Ok(())
    }
}

pub fn execute(statement: &str) -> Result<Outcome> {
    let mut interpreter = Interpreter::new();
    let result = interpreter.run(statement)?;
    Ok(Outcome {
        result,
        variables: interpreter.into_variables(),
    })
}
