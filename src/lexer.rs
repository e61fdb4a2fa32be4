use crate::error::LexError;
use crate::token::{Token, TokenKind};

// C `isspace`: ASCII whitespace plus vertical tab.
fn is_space(ch: char) -> bool {
    ch.is_ascii_whitespace() || ch == '\x0b'
}

pub struct Lexer {
    text: Vec<char>,
    pos: usize,
    current_char: Option<char>,
    finished: bool,
}

impl Lexer {
    pub fn new(text: &str) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let current_char = chars.first().copied();
        Lexer {
            text: chars,
            pos: 0,
            current_char,
            finished: false,
        }
    }

    fn advance(&mut self) {
        self.pos += 1;
        self.current_char = self.text.get(self.pos).copied();
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char {
            if is_space(ch) {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn take_while(&mut self, accept: impl Fn(char) -> bool) -> String {
        let mut result = String::new();
        while let Some(ch) = self.current_char {
            if accept(ch) {
                result.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        result
    }

    /// Calling this again after `End` keeps returning `End`. An unknown character
    /// is not consumed, so the same error is reported until the caller gives up.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace();

        let start = self.pos;
        let Some(ch) = self.current_char else {
            return Ok(Token::end(self.text.len()));
        };

        let token = if ch.is_ascii_alphabetic() {
            let id = self.take_while(|c| c.is_ascii_alphanumeric());
            Token::new(TokenKind::Identifier, id, start)
        } else if ch.is_ascii_digit() {
            let digits = self.take_while(|c| c.is_ascii_digit());
            Token::new(TokenKind::Number, digits, start)
        } else {
            let kind = match ch {
                '+' => TokenKind::Plus,
                '-' => TokenKind::Minus,
                '*' => TokenKind::Multiply,
                '/' => TokenKind::Divide,
                '=' => TokenKind::Assign,
                '(' => TokenKind::LParen,
                ')' => TokenKind::RParen,
                ';' => TokenKind::Semicolon,
                _ => {
                    return Err(LexError {
                        character: ch,
                        position: start,
                    });
                }
            };
            self.advance();
            Token::new(kind, ch, start)
        };

        tracing::trace!(kind = ?token.kind, value = %token.value, position = start, "token");
        Ok(token)
    }
}

impl Iterator for Lexer {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.next_token() {
            Ok(token) if token.kind == TokenKind::End => {
                self.finished = true;
                None
            }
            Ok(token) => Some(Ok(token)),
            Err(err) => {
                self.finished = true;
                Some(Err(err))
            }
        }
    }
}

impl std::iter::FusedIterator for Lexer {}

pub fn tokenize(text: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(text).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn kinds(text: &str) -> Vec<TokenKind> {
        tokenize(text)
            .unwrap()
            .into_iter()
            .map(|token| token.kind)
            .collect()
    }

    #[test]
    fn test_number_token() {
        let mut lexer = Lexer::new("123");
        assert_eq!(
            lexer.next_token().unwrap(),
            Token::new(TokenKind::Number, "123", 0)
        );
    }

    #[test]
    fn test_operators() {
        assert_eq!(
            kinds("+ - * /"),
            vec![
                TokenKind::Plus,
                TokenKind::Minus,
                TokenKind::Multiply,
                TokenKind::Divide
            ]
        );
    }

    #[test]
    fn test_punctuation() {
        assert_eq!(
            kinds("= ( ) ;"),
            vec![
                TokenKind::Assign,
                TokenKind::LParen,
                TokenKind::RParen,
                TokenKind::Semicolon
            ]
        );
    }

    #[test]
    fn test_identifier() {
        let mut lexer = Lexer::new("x123 total");
        assert_eq!(
            lexer.next_token().unwrap(),
            Token::new(TokenKind::Identifier, "x123", 0)
        );
        assert_eq!(
            lexer.next_token().unwrap(),
            Token::new(TokenKind::Identifier, "total", 5)
        );
    }

    #[test]
    fn test_digits_then_letters_split() {
        let tokens = tokenize("12ab").unwrap();
        assert_eq!(tokens[0], Token::new(TokenKind::Number, "12", 0));
        assert_eq!(tokens[1], Token::new(TokenKind::Identifier, "ab", 2));
    }

    #[test]
    fn test_full_statement() {
        assert_eq!(
            kinds("x = 2 + 3 * (4 - 1);"),
            vec![
                TokenKind::Identifier,
                TokenKind::Assign,
                TokenKind::Number,
                TokenKind::Plus,
                TokenKind::Number,
                TokenKind::Multiply,
                TokenKind::LParen,
                TokenKind::Number,
                TokenKind::Minus,
                TokenKind::Number,
                TokenKind::RParen,
                TokenKind::Semicolon,
            ]
        );
    }

    #[test]
    fn test_whitespace_handling() {
        let mut lexer = Lexer::new("  \t\n  123  \n ");
        assert_eq!(
            lexer.next_token().unwrap(),
            Token::new(TokenKind::Number, "123", 6)
        );
        assert_eq!(lexer.next_token().unwrap(), Token::end(13));

        let mut lexer = Lexer::new("\x0b1\x0c\r;");
        assert_eq!(
            lexer.next_token().unwrap(),
            Token::new(TokenKind::Number, "1", 1)
        );
        assert_eq!(
            lexer.next_token().unwrap(),
            Token::new(TokenKind::Semicolon, ";", 4)
        );
        assert_eq!(lexer.next_token().unwrap(), Token::end(5));
    }

    #[test]
    fn test_end_is_idempotent() {
        let mut lexer = Lexer::new("x");
        lexer.next_token().unwrap();
        for _ in 0..3 {
            assert_eq!(lexer.next_token().unwrap(), Token::end(1));
        }
    }

    #[test]
    fn test_empty_input() {
        let mut lexer = Lexer::new("");
        assert_eq!(lexer.next_token().unwrap(), Token::end(0));
        assert!(tokenize("   ").unwrap().is_empty());
    }

    #[test]
    fn test_invalid_character() {
        let mut lexer = Lexer::new("x = 2 & 3;");
        for _ in 0..3 {
            lexer.next_token().unwrap();
        }
        assert_eq!(
            lexer.next_token(),
            Err(LexError {
                character: '&',
                position: 6
            })
        );
    }

    #[test]
    fn test_underscore_is_not_an_identifier_character() {
        assert_eq!(
            tokenize("my_var"),
            Err(LexError {
                character: '_',
                position: 2
            })
        );
    }

    #[test]
    fn test_iterator_stops_after_error() {
        let mut lexer = Lexer::new("a @ b");
        assert!(matches!(lexer.next(), Some(Ok(_))));
        assert!(matches!(lexer.next(), Some(Err(_))));
        assert!(lexer.next().is_none());
        assert!(lexer.next().is_none());
    }
}
