use std::fmt;

use crate::token::TokenKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOperator {
    pub fn additive(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus => Some(BinaryOperator::Add),
            TokenKind::Minus => Some(BinaryOperator::Subtract),
            _ => None,
        }
    }

    pub fn multiplicative(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Multiply => Some(BinaryOperator::Multiply),
            TokenKind::Divide => Some(BinaryOperator::Divide),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            BinaryOperator::Add => '+',
            BinaryOperator::Subtract => '-',
            BinaryOperator::Multiply => '*',
            BinaryOperator::Divide => '/',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ASTNode {
    Number(i32),
    Variable(String),
    BinaryOp {
        op: BinaryOperator,
        left: Box<ASTNode>,
        right: Box<ASTNode>,
    },
    Assignment {
        name: String,
        expr: Box<ASTNode>,
    },
}

impl ASTNode {
    pub fn binary(op: BinaryOperator, left: ASTNode, right: ASTNode) -> Self {
        ASTNode::BinaryOp {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn assignment(name: impl Into<String>, expr: ASTNode) -> Self {
        ASTNode::Assignment {
            name: name.into(),
            expr: Box::new(expr),
        }
    }
}

impl fmt::Display for ASTNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ASTNode::Number(value) => write!(f, "{value}"),
            ASTNode::Variable(name) => write!(f, "{name}"),
            ASTNode::BinaryOp { op, left, right } => {
                write!(f, "({left} {} {right})", op.symbol())
            }
            ASTNode::Assignment { name, expr } => write!(f, "{name} = {expr}"),
        }
    }
}
