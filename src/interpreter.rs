use std::collections::HashMap;

use crate::ast::{ASTNode, BinaryOperator};
use crate::error::{EvalError, Result};
use crate::parser;

pub type Variables = HashMap<String, i32>;

impl ASTNode {
    /// Reading a variable that was never assigned yields 0 and leaves `vars` untouched.
    pub fn eval(&self, vars: &mut Variables) -> Result<i32, EvalError> {
        match self {
            ASTNode::Number(value) => Ok(*value),
            ASTNode::Variable(name) => Ok(vars.get(name).copied().unwrap_or_default()),
            ASTNode::BinaryOp { op, left, right } => {
                let left_val = left.eval(vars)?;
                let right_val = right.eval(vars)?;
                apply(*op, left_val, right_val)
            }
            ASTNode::Assignment { name, expr } => {
                let val = expr.eval(vars)?;
                tracing::debug!(name = %name, value = val, "assign");
                vars.insert(name.clone(), val);
                Ok(val)
            }
        }
    }
}

fn apply(op: BinaryOperator, left: i32, right: i32) -> Result<i32, EvalError> {
    let result = match op {
        BinaryOperator::Add => left.checked_add(right),
        BinaryOperator::Subtract => left.checked_sub(right),
        BinaryOperator::Multiply => left.checked_mul(right),
        BinaryOperator::Divide => {
            if right == 0 {
                return Err(EvalError::DivisionByZero);
            }
            // Rust integer division already truncates toward zero.
            left.checked_div(right)
        }
    };
    result.ok_or(EvalError::Overflow {
        left,
        op: op.symbol(),
        right,
    })
}

pub struct Interpreter {
    variables: Variables,
}

impl Interpreter {
    pub fn new() -> Self {
        Interpreter {
            variables: HashMap::new(),
        }
    }

    pub fn with_variables(variables: Variables) -> Self {
        Interpreter { variables }
    }

    pub fn interpret(&mut self, node: &ASTNode) -> Result<i32> {
        Ok(node.eval(&mut self.variables)?)
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub fn run(&mut self, source: &str) -> Result<i32> {
        let tree = parser::parse(source)?;
        self.interpret(&tree)
    }

    pub fn variables(&self) -> &Variables {
        &self.variables
    }

    pub fn into_variables(self) -> Variables {
        self.variables
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
