//! Recursive-descent condition parser

use super::lexer::{Lexer, Token, TokenKind};
use crate::ast::{Expression, Operator, UnaryOperator};
use crate::error::ParseError;
use crate::types::Value;

/// Deepest nesting a condition may use. Parentheses, list brackets, `not`,
/// unary `-` and each extra operand of an `and`/`or`/comparison chain count
/// as one level.
pub const MAX_NESTING_DEPTH: usize = 100;

/// Parses condition strings into [`Expression`] trees
pub struct ConditionParser<'a> {
    source: &'a str,
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
}

impl<'a> ConditionParser<'a> {
    /// Parse a condition from a string
    pub fn parse(source: &'a str) -> Result<Expression, ParseError> {
        if source.trim().is_empty() {
            return Err(ParseError::new("empty condition", source, 0));
        }

        let tokens = Lexer::new(source).tokenize()?;
        let mut parser = ConditionParser {
            source,
            tokens,
            pos: 0,
            depth: 0,
        };

        let expr = parser.parse_or()?;
        match parser.peek() {
            TokenKind::Eof => Ok(expr),
            other => Err(parser.error(format!("unexpected {}", describe(other)))),
        }
    }

    fn peek(&self) -> &TokenKind {
        // tokenize() always ends with Eof, and advance() never steps past it
        &self.tokens[self.pos].kind
    }

    fn peek_next(&self) -> &TokenKind {
        let idx = (self.pos + 1).min(self.tokens.len() - 1);
        &self.tokens[idx].kind
    }

    fn advance(&mut self) -> TokenKind {
        let kind = self.tokens[self.pos].kind.clone();
        if kind != TokenKind::Eof {
            self.pos += 1;
        }
        kind
    }

    fn error(&self, message: impl Into<String>) -> ParseError {
        ParseError::new(message, self.source, self.tokens[self.pos].offset)
    }

    fn expect(&mut self, expected: TokenKind) -> Result<(), ParseError> {
        if *self.peek() == expected {
            self.advance();
            Ok(())
        } else {
            Err(self.error(format!(
                "expected {}, found {}",
                describe(&expected),
                describe(self.peek())
            )))
        }
    }

    /// Go one nesting level deeper, failing past [`MAX_NESTING_DEPTH`]
    fn enter(&mut self) -> Result<(), ParseError> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(self.error(format!(
                "condition nested too deeply (limit {})",
                MAX_NESTING_DEPTH
            )));
        }
        self.depth += 1;
        Ok(())
    }

    fn parse_or(&mut self) -> Result<Expression, ParseError> {
        let base = self.depth;
        let mut left = self.parse_and()?;
        while *self.peek() == TokenKind::Or {
            self.advance();
            self.enter()?;
            let right = self.parse_and()?;
            left = Expression::binary(left, Operator::Or, right);
        }
        self.depth = base;
        Ok(left)
    }

    fn parse_and(&mut self) -> Result<Expression, ParseError> {
        let base = self.depth;
        let mut left = self.parse_not()?;
        while *self.peek() == TokenKind::And {
            self.advance();
            self.enter()?;
            let right = self.parse_not()?;
            left = Expression::binary(left, Operator::And, right);
        }
        self.depth = base;
        Ok(left)
    }

    fn parse_not(&mut self) -> Result<Expression, ParseError> {
        if *self.peek() == TokenKind::Not {
            self.advance();
            self.enter()?;
            let operand = self.parse_not()?;
            self.depth -= 1;
            return Ok(Expression::unary(UnaryOperator::Not, operand));
        }
        self.parse_comparison()
    }

    /// Comparisons chain: `a < b <= c` becomes `a < b and b <= c`
    fn parse_comparison(&mut self) -> Result<Expression, ParseError> {
        let base = self.depth;
        let mut left = self.parse_unary()?;
        let mut chained: Option<Expression> = None;

        while let Some(op) = self.comparison_operator() {
            self.enter()?;
            let right = self.parse_unary()?;
            let link = Expression::binary(left, op, right.clone());
            chained = Some(match chained {
                Some(prev) => Expression::binary(prev, Operator::And, link),
                None => link,
            });
            left = right;
        }

        self.depth = base;
        Ok(chained.unwrap_or(left))
    }

    /// Consume a comparison or membership operator if one is next
    fn comparison_operator(&mut self) -> Option<Operator> {
        let op = match self.peek() {
            TokenKind::EqEq => Operator::Eq,
            TokenKind::NotEq => Operator::Ne,
            TokenKind::Lt => Operator::Lt,
            TokenKind::Le => Operator::Le,
            TokenKind::Gt => Operator::Gt,
            TokenKind::Ge => Operator::Ge,
            TokenKind::In => Operator::In,
            TokenKind::Not if *self.peek_next() == TokenKind::In => {
                self.advance();
                Operator::NotIn
            }
            _ => return None,
        };
        self.advance();
        Some(op)
    }

    fn parse_unary(&mut self) -> Result<Expression, ParseError> {
        if *self.peek() == TokenKind::Minus {
            self.advance();
            self.enter()?;
            let operand = self.parse_unary()?;
            self.depth -= 1;
            // Fold negative number literals
            if let Expression::Literal(Value::Number(n)) = operand {
                return Ok(Expression::literal(-n));
            }
            return Ok(Expression::unary(UnaryOperator::Negate, operand));
        }
        self.parse_primary()
    }

    fn parse_primary(&mut self) -> Result<Expression, ParseError> {
        match self.peek().clone() {
            TokenKind::Number(n) => {
                self.advance();
                Ok(Expression::literal(n))
            }
            TokenKind::True => {
                self.advance();
                Ok(Expression::literal(true))
            }
            TokenKind::False => {
                self.advance();
                Ok(Expression::literal(false))
            }
            TokenKind::Ident(name) => {
                self.advance();
                match self.peek() {
                    TokenKind::LParen => {
                        Err(self.error(format!("function calls are not permitted ('{}')", name)))
                    }
                    TokenKind::Dot => {
                        Err(self.error(format!("attribute access is not permitted ('{}')", name)))
                    }
                    TokenKind::LBracket => {
                        Err(self.error(format!("subscripts are not permitted ('{}')", name)))
                    }
                    _ => Ok(Expression::variable(name)),
                }
            }
            TokenKind::LParen => {
                self.advance();
                self.enter()?;
                let expr = self.parse_or()?;
                self.expect(TokenKind::RParen)?;
                self.depth -= 1;
                Ok(expr)
            }
            TokenKind::LBracket => {
                self.advance();
                self.enter()?;
                let list = self.parse_list()?;
                self.depth -= 1;
                Ok(list)
            }
            other => Err(self.error(format!("unexpected {}", describe(&other)))),
        }
    }

    /// Parse list items after the opening bracket. A trailing comma is allowed.
    fn parse_list(&mut self) -> Result<Expression, ParseError> {
        let mut items = Vec::new();
        loop {
            if *self.peek() == TokenKind::RBracket {
                self.advance();
                return Ok(Expression::list(items));
            }
            items.push(self.parse_or()?);
            match self.peek() {
                TokenKind::Comma => {
                    self.advance();
                }
                TokenKind::RBracket => {}
                other => {
                    return Err(self.error(format!("expected ',' or ']', found {}", describe(other))))
                }
            }
        }
    }
}

fn describe(kind: &TokenKind) -> String {
    match kind {
        TokenKind::Number(n) => format!("number {}", n),
        TokenKind::Ident(name) => format!("name '{}'", name),
        TokenKind::True => "'True'".to_string(),
        TokenKind::False => "'False'".to_string(),
        TokenKind::And => "'and'".to_string(),
        TokenKind::Or => "'or'".to_string(),
        TokenKind::Not => "'not'".to_string(),
        TokenKind::In => "'in'".to_string(),
        TokenKind::EqEq => "'=='".to_string(),
        TokenKind::NotEq => "'!='".to_string(),
        TokenKind::Lt => "'<'".to_string(),
        TokenKind::Le => "'<='".to_string(),
        TokenKind::Gt => "'>'".to_string(),
        TokenKind::Ge => "'>='".to_string(),
        TokenKind::Minus => "'-'".to_string(),
        TokenKind::LParen => "'('".to_string(),
        TokenKind::RParen => "')'".to_string(),
        TokenKind::LBracket => "'['".to_string(),
        TokenKind::RBracket => "']'".to_string(),
        TokenKind::Comma => "','".to_string(),
        TokenKind::Dot => "'.'".to_string(),
        TokenKind::Eof => "end of condition".to_string(),
    }
}
