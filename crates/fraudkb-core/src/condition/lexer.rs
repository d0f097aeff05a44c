//! Condition tokenizer

use crate::error::ParseError;

/// Token kinds produced by the [`Lexer`]
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    Number(f64),
    Ident(String),
    True,
    False,
    And,
    Or,
    Not,
    In,
    EqEq,
    NotEq,
    Lt,
    Le,
    Gt,
    Ge,
    Minus,
    LParen,
    RParen,
    LBracket,
    RBracket,
    Comma,
    Dot,
    Eof,
}

/// A token with its byte offset in the source
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub offset: usize,
}

/// Splits a condition string into tokens
pub struct Lexer<'a> {
    source: &'a str,
    chars: Vec<(usize, char)>,
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().collect(),
            pos: 0,
        }
    }

    /// Tokenize the whole input. The last token is always `Eof`.
    pub fn tokenize(mut self) -> Result<Vec<Token>, ParseError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let done = token.kind == TokenKind::Eof;
            tokens.push(token);
            if done {
                return Ok(tokens);
            }
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).map(|(_, c)| *c)
    }

    fn peek_at(&self, ahead: usize) -> Option<char> {
        self.chars.get(self.pos + ahead).map(|(_, c)| *c)
    }

    fn offset(&self) -> usize {
        self.chars
            .get(self.pos)
            .map(|(i, _)| *i)
            .unwrap_or(self.source.len())
    }

    fn error(&self, message: impl Into<String>, offset: usize) -> ParseError {
        ParseError::new(message, self.source, offset)
    }

    fn next_token(&mut self) -> Result<Token, ParseError> {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.pos += 1;
        }

        let offset = self.offset();
        let c = match self.peek() {
            Some(c) => c,
            None => {
                return Ok(Token {
                    kind: TokenKind::Eof,
                    offset,
                })
            }
        };

        let kind = match c {
            '0'..='9' => return self.number(offset),
            '.' if matches!(self.peek_at(1), Some('0'..='9')) => return self.number(offset),
            c if c.is_alphabetic() || c == '_' => return Ok(self.word(offset)),
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '[' => TokenKind::LBracket,
            ']' => TokenKind::RBracket,
            ',' => TokenKind::Comma,
            '.' => TokenKind::Dot,
            '-' => TokenKind::Minus,
            '=' if self.peek_at(1) == Some('=') => {
                self.pos += 1;
                TokenKind::EqEq
            }
            '!' if self.peek_at(1) == Some('=') => {
                self.pos += 1;
                TokenKind::NotEq
            }
            '!' => TokenKind::Not,
            '<' if self.peek_at(1) == Some('=') => {
                self.pos += 1;
                TokenKind::Le
            }
            '<' => TokenKind::Lt,
            '>' if self.peek_at(1) == Some('=') => {
                self.pos += 1;
                TokenKind::Ge
            }
            '>' => TokenKind::Gt,
            '&' if self.peek_at(1) == Some('&') => {
                self.pos += 1;
                TokenKind::And
            }
            '|' if self.peek_at(1) == Some('|') => {
                self.pos += 1;
                TokenKind::Or
            }
            '=' => return Err(self.error("assignment is not permitted, use '=='", offset)),
            '"' | '\'' => return Err(self.error("string literals are not supported", offset)),
            other => return Err(self.error(format!("unexpected character '{}'", other), offset)),
        };
        self.pos += 1;

        Ok(Token { kind, offset })
    }

    fn number(&mut self, offset: usize) -> Result<Token, ParseError> {
        let start = self.pos;
        while matches!(self.peek(), Some('0'..='9' | '_')) {
            self.pos += 1;
        }
        if self.peek() == Some('.') && !matches!(self.peek_at(1), Some(c) if c.is_alphabetic() || c == '_')
        {
            self.pos += 1;
            while matches!(self.peek(), Some('0'..='9' | '_')) {
                self.pos += 1;
            }
        }
        if matches!(self.peek(), Some('e' | 'E')) {
            let sign = usize::from(matches!(self.peek_at(1), Some('+' | '-')));
            if matches!(self.peek_at(1 + sign), Some('0'..='9')) {
                self.pos += 1 + sign;
                while matches!(self.peek(), Some('0'..='9')) {
                    self.pos += 1;
                }
            }
        }

        let text: String = self.chars[start..self.pos]
            .iter()
            .map(|(_, c)| *c)
            .filter(|c| *c != '_')
            .collect();

        if matches!(self.peek(), Some(c) if c.is_alphabetic() || c == '_') {
            return Err(self.error(format!("invalid number literal '{}'", text), offset));
        }

        text.parse::<f64>()
            .map(|n| Token {
                kind: TokenKind::Number(n),
                offset,
            })
            .map_err(|_| self.error(format!("invalid number literal '{}'", text), offset))
    }

    fn word(&mut self, offset: usize) -> Token {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_alphanumeric() || c == '_') {
            self.pos += 1;
        }
        let text: String = self.chars[start..self.pos].iter().map(|(_, c)| *c).collect();

        let kind = match text.as_str() {
            "and" => TokenKind::And,
            "or" => TokenKind::Or,
            "not" => TokenKind::Not,
            "in" => TokenKind::In,
            "True" | "true" => TokenKind::True,
            "False" | "false" => TokenKind::False,
            _ => TokenKind::Ident(text),
        };

        Token { kind, offset }
    }
}
