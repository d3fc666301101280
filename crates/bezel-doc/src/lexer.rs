use crate::error::ParseError;

// ── Token ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Literals
    Ident(String),
    Str(String),
    Number(f64),
    // Punctuation
    Colon,
    LBrace,
    RBrace,
    // Sentinel
    Eof,
}

/// A token together with the 1-based position of its first character.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenWithPos {
    pub token: Token,
    pub line: usize,
    pub col: usize,
}

// ── Lexer ─────────────────────────────────────────────────────────────────

pub struct Lexer<'s> {
    src: &'s str,
    pos: usize,
    line: usize,
    col: usize,
}

impl<'s> Lexer<'s> {
    pub fn new(src: &'s str) -> Self {
        Self { src, pos: 0, line: 1, col: 1 }
    }

    pub fn tokenize(mut self) -> Result<Vec<TokenWithPos>, ParseError> {
        let mut tokens = Vec::new();
        loop {
            self.skip_whitespace_and_comments();
            let (line, col) = (self.line, self.col);
            let token = self.next_token()?;
            let eof = token == Token::Eof;
            tokens.push(TokenWithPos { token, line, col });
            if eof {
                break;
            }
        }
        Ok(tokens)
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.src[self.pos..].chars().next()?;
        self.pos += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        Some(ch)
    }

    fn err(&self, msg: impl Into<String>) -> ParseError {
        ParseError::new(msg, self.line, self.col)
    }

    fn skip_whitespace_and_comments(&mut self) {
        loop {
            while matches!(self.peek(), Some(c) if c.is_whitespace()) {
                self.advance();
            }
            // skip `//` line comments
            if self.src[self.pos..].starts_with("//") {
                while !matches!(self.peek(), None | Some('\n')) {
                    self.advance();
                }
            } else {
                break;
            }
        }
    }

    fn next_token(&mut self) -> Result<Token, ParseError> {
        let ch = match self.peek() {
            None => return Ok(Token::Eof),
            Some(c) => c,
        };

        match ch {
            ':' => { self.advance(); Ok(Token::Colon) }
            '{' => { self.advance(); Ok(Token::LBrace) }
            '}' => { self.advance(); Ok(Token::RBrace) }
            '"' => self.lex_string(),
            c if c.is_ascii_digit() || c == '-' => self.lex_number(),
            c if c.is_alphabetic() || c == '_' => Ok(self.lex_ident()),
            other => Err(self.err(format!("unexpected character {:?}", other))),
        }
    }

    fn lex_string(&mut self) -> Result<Token, ParseError> {
        self.advance(); // consume opening `"`
        let mut s = String::new();
        loop {
            match self.advance() {
                None => return Err(self.err("unterminated string literal")),
                Some('"') => break,
                Some('\\') => {
                    match self.advance() {
                        Some('n')  => s.push('\n'),
                        Some('t')  => s.push('\t'),
                        Some('"')  => s.push('"'),
                        Some('\\') => s.push('\\'),
                        Some(c)    => s.push(c),
                        None => return Err(self.err("unterminated escape sequence")),
                    }
                }
                Some(c) => s.push(c),
            }
        }
        Ok(Token::Str(s))
    }

    fn lex_number(&mut self) -> Result<Token, ParseError> {
        let start = self.pos;
        if self.peek() == Some('-') {
            self.advance();
        }
        while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            self.advance();
        }
        if self.peek() == Some('.') {
            self.advance();
            while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
                self.advance();
            }
        }
        let s = &self.src[start..self.pos];
        s.parse::<f64>()
            .map(Token::Number)
            .map_err(|_| self.err(format!("invalid number {:?}", s)))
    }

    fn lex_ident(&mut self) -> Token {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_alphanumeric() || c == '_') {
            self.advance();
        }
        Token::Ident(self.src[start..self.pos].to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(src: &str) -> Vec<Token> {
        Lexer::new(src).tokenize().unwrap().into_iter().map(|t| t.token).collect()
    }

    #[test]
    fn punctuation_and_literals() {
        assert_eq!(
            kinds(r#"Pair { Gradient: -45 BackColor1: "Red" }"#),
            vec![
                Token::Ident("Pair".into()),
                Token::LBrace,
                Token::Ident("Gradient".into()),
                Token::Colon,
                Token::Number(-45.0),
                Token::Ident("BackColor1".into()),
                Token::Colon,
                Token::Str("Red".into()),
                Token::RBrace,
                Token::Eof,
            ]
        );
    }

    #[test]
    fn positions_track_lines_and_columns() {
        let toks = Lexer::new("A {\n  Radius: 4\n}").tokenize().unwrap();
        let radius = &toks[2];
        assert_eq!(radius.token, Token::Ident("Radius".into()));
        assert_eq!((radius.line, radius.col), (2, 3));
        let close = &toks[5];
        assert_eq!(close.token, Token::RBrace);
        assert_eq!((close.line, close.col), (3, 1));
    }

    #[test]
    fn comments_are_skipped() {
        assert_eq!(kinds("// header\nA // tail"), vec![Token::Ident("A".into()), Token::Eof]);
    }

    #[test]
    fn string_escapes() {
        assert_eq!(kinds(r#""a\"b\\c""#), vec![Token::Str("a\"b\\c".into()), Token::Eof]);
    }

    #[test]
    fn unterminated_string_reports_position() {
        let err = Lexer::new("A {\n \"oops").tokenize().unwrap_err();
        assert_eq!(err.line, 2);
    }

    #[test]
    fn unexpected_character() {
        assert!(Lexer::new("A { # }").tokenize().is_err());
    }
}
