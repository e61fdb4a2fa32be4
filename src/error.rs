use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown character `{character}` at position {position}")]
pub struct LexError {
    pub character: char,
    pub position: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unexpected token {found} at position {position}, expected {expected}")]
    UnexpectedToken {
        found: String,
        expected: String,
        position: usize,
    },
    #[error("unexpected factor {found} at position {position}")]
    UnexpectedFactor { found: String, position: usize },
    #[error("expected identifier in assignment, found {found} at position {position}")]
    ExpectedIdentifier { found: String, position: usize },
    #[error("expression nested deeper than {limit} levels at position {position}")]
    NestingTooDeep { limit: usize, position: usize },
    #[error("integer literal `{literal}` at position {position} is out of range")]
    IntegerOutOfRange { literal: String, position: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("integer overflow evaluating {left} {op} {right}")]
    Overflow { left: i32, op: char, right: i32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("lex error: {0}")]
    Lex(#[from] LexError),
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("runtime error: {0}")]
    Eval(#[from] EvalError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lex_error_message() {
        let err = LexError {
            character: '&',
            position: 6,
        };
        assert_eq!(err.to_string(), "unknown character `&` at position 6");
    }

    #[test]
    fn test_wrapped_messages() {
        let err: Error = ParseError::UnexpectedToken {
            found: "`+`".to_string(),
            expected: "`=`".to_string(),
            position: 2,
        }
        .into();
        assert_eq!(
            err.to_string(),
            "parse error: unexpected token `+` at position 2, expected `=`"
        );

        let err: Error = EvalError::DivisionByZero.into();
        assert_eq!(err.to_string(), "runtime error: division by zero");
    }
}
