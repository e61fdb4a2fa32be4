use crate::ast::{ASTNode, BinaryOperator};
use crate::error::{Error, ParseError, Result};
use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};

/// Deepest expression tree, and deepest parenthesis nesting, the parser accepts.
pub const MAX_DEPTH: usize = 256;

// A parsed subexpression and the height of its tree.
type Subtree = (ASTNode, usize);

pub struct Parser {
    lexer: Lexer,
    current_token: Token,
    nesting: usize,
}

impl Parser {
    pub fn new(mut lexer: Lexer) -> Result<Self> {
        let current_token = lexer.next_token()?;
        Ok(Parser {
            lexer,
            current_token,
            nesting: 0,
        })
    }

    fn eat(&mut self, kind: TokenKind) -> Result<()> {
        if self.current_token.kind == kind {
            self.current_token = self.lexer.next_token()?;
            Ok(())
        } else {
            Err(ParseError::UnexpectedToken {
                found: self.current_token.describe(),
                expected: kind.to_string(),
                position: self.current_token.position,
            }
            .into())
        }
    }

    fn too_deep(position: usize) -> Error {
        ParseError::NestingTooDeep {
            limit: MAX_DEPTH,
            position,
        }
        .into()
    }

    /// Parses exactly one statement. Tokens after the terminating `;` are not examined
    /// beyond the single lookahead read when `;` is consumed.
    pub fn parse(&mut self) -> Result<ASTNode> {
        self.statement()
    }

    fn statement(&mut self) -> Result<ASTNode> {
        if self.current_token.kind != TokenKind::Identifier {
            return Err(ParseError::ExpectedIdentifier {
                found: self.current_token.describe(),
                position: self.current_token.position,
            }
            .into());
        }

        let name = std::mem::take(&mut self.current_token.value);
        self.eat(TokenKind::Identifier)?;
        self.eat(TokenKind::Assign)?;
        let (expr, _) = self.expr()?;
        self.eat(TokenKind::Semicolon)?;
        Ok(ASTNode::assignment(name, expr))
    }

    fn expr(&mut self) -> Result<Subtree> {
        let (mut node, mut depth) = self.term()?;

        while let Some(op) = BinaryOperator::additive(self.current_token.kind) {
            let position = self.current_token.position;
            self.eat(self.current_token.kind)?;
            let (right, right_depth) = self.term()?;
            depth = depth.max(right_depth) + 1;
            if depth > MAX_DEPTH {
                return Err(Self::too_deep(position));
            }
            node = ASTNode::binary(op, node, right);
        }

        Ok((node, depth))
    }

    fn term(&mut self) -> Result<Subtree> {
        let (mut node, mut depth) = self.factor()?;

        while let Some(op) = BinaryOperator::multiplicative(self.current_token.kind) {
            let position = self.current_token.position;
            self.eat(self.current_token.kind)?;
            let (right, right_depth) = self.factor()?;
            depth = depth.max(right_depth) + 1;
            if depth > MAX_DEPTH {
                return Err(Self::too_deep(position));
            }
            node = ASTNode::binary(op, node, right);
        }

        Ok((node, depth))
    }

    fn factor(&mut self) -> Result<Subtree> {
        match self.current_token.kind {
            TokenKind::Number => {
                let value = self.current_token.value.parse::<i32>().map_err(|_| {
                    ParseError::IntegerOutOfRange {
                        literal: self.current_token.value.clone(),
                        position: self.current_token.position,
                    }
                })?;
                self.eat(TokenKind::Number)?;
                Ok((ASTNode::Number(value), 1))
            }
            TokenKind::Identifier => {
                let name = std::mem::take(&mut self.current_token.value);
                self.eat(TokenKind::Identifier)?;
                Ok((ASTNode::Variable(name), 1))
            }
            TokenKind::LParen => {
                if self.nesting >= MAX_DEPTH {
                    return Err(Self::too_deep(self.current_token.position));
                }
                self.eat(TokenKind::LParen)?;
                self.nesting += 1;
                let subtree = self.expr()?;
                self.nesting -= 1;
                self.eat(TokenKind::RParen)?;
                Ok(subtree)
            }
            _ => Err(ParseError::UnexpectedFactor {
                found: self.current_token.describe(),
                position: self.current_token.position,
            }
            .into()),
        }
    }
}

#[tracing::instrument(level = "debug", skip_all)]
pub fn parse(input: &str) -> Result<ASTNode> {
    let mut parser = Parser::new(Lexer::new(input))?;
    let tree = parser.parse()?;
    tracing::debug!(%tree, "parsed statement");
    Ok(tree)
}
