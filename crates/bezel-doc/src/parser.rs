use crate::ast::{Document, Item, Node, Prop, Value};
use crate::error::ParseError;
use crate::lexer::{Lexer, Token, TokenWithPos};

// ── Parser ────────────────────────────────────────────────────────────────

pub struct Parser {
    tokens: Vec<TokenWithPos>,
    pos: usize,
}

impl Parser {
    pub fn new(tokens: Vec<TokenWithPos>) -> Self {
        Self { tokens, pos: 0 }
    }

    fn current_pos(&self) -> (usize, usize) {
        self.tokens
            .get(self.pos)
            .map(|t| (t.line, t.col))
            .or_else(|| self.tokens.last().map(|t| (t.line, t.col)))
            .unwrap_or((1, 1))
    }

    fn peek(&self) -> &Token {
        self.tokens.get(self.pos).map(|t| &t.token).unwrap_or(&Token::Eof)
    }

    /// Look at the token `offset` positions ahead of current without consuming.
    fn peek_ahead(&self, offset: usize) -> &Token {
        self.tokens.get(self.pos + offset).map(|t| &t.token).unwrap_or(&Token::Eof)
    }

    fn advance(&mut self) -> Token {
        let tok = self.tokens.get(self.pos)
            .map(|t| t.token.clone())
            .unwrap_or(Token::Eof);
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        tok
    }

    fn err(&self, msg: impl Into<String>) -> ParseError {
        let (line, col) = self.current_pos();
        ParseError::new(msg, line, col)
    }

    fn expect_ident(&mut self) -> Result<String, ParseError> {
        let (line, col) = self.current_pos();
        match self.advance() {
            Token::Ident(s) => Ok(s),
            tok => Err(ParseError::new(format!("expected identifier, got {:?}", tok), line, col)),
        }
    }

    // ── Document ──────────────────────────────────────────────────────────

    pub fn parse_document(&mut self) -> Result<Document, ParseError> {
        let root = self.parse_node()?;
        match self.peek() {
            Token::Eof => Ok(Document { root }),
            tok => Err(self.err(format!("unexpected {:?} after the root node", tok))),
        }
    }

    // ── Node ──────────────────────────────────────────────────────────────

    fn parse_node(&mut self) -> Result<Node, ParseError> {
        let name = self.expect_ident()?;
        if self.peek() != &Token::LBrace {
            return Err(self.err(format!("expected '{{' after {:?}", name)));
        }
        let items = self.parse_block()?;
        Ok(Node { name, items })
    }

    // ── Block ─────────────────────────────────────────────────────────────

    /// Parse `{ item* }` where each item is either a `key: value` property
    /// or a nested node.
    ///
    /// Disambiguation: when we see `Ident`, we look one token ahead:
    /// - `Ident ":"` → property
    /// - `Ident <anything else>` → nested node
    fn parse_block(&mut self) -> Result<Vec<Item>, ParseError> {
        self.advance(); // consume `{`
        let mut items = Vec::new();

        loop {
            match self.peek() {
                Token::RBrace => { self.advance(); break; }
                Token::Eof    => return Err(self.err("unclosed '{' block")),
                Token::Ident(_) => {
                    if self.peek_ahead(1) == &Token::Colon {
                        items.push(Item::Prop(self.parse_prop()?));
                    } else {
                        items.push(Item::Node(self.parse_node()?));
                    }
                }
                tok => {
                    return Err(self.err(format!(
                        "unexpected {:?} inside block, expected a property (key: value) or a node name",
                        tok
                    )));
                }
            }
        }

        Ok(items)
    }

    // ── Prop ──────────────────────────────────────────────────────────────

    fn parse_prop(&mut self) -> Result<Prop, ParseError> {
        let key = self.expect_ident()?;
        self.advance(); // consume `:`
        let value = self.parse_value()?;
        Ok(Prop { key, value })
    }

    // ── Value ─────────────────────────────────────────────────────────────

    fn parse_value(&mut self) -> Result<Value, ParseError> {
        let (line, col) = self.current_pos();
        match self.advance() {
            Token::Str(s)    => Ok(Value::Str(s)),
            Token::Number(n) => Ok(Value::Number(n)),
            Token::Ident(s)  => Ok(Value::Ident(s)),
            tok => Err(ParseError::new(format!("expected a value, got {:?}", tok), line, col)),
        }
    }
}

// ── Public parse entry point ──────────────────────────────────────────────

/// Parse a style document source string into a [`Document`].
pub fn parse_str(src: &str) -> Result<Document, ParseError> {
    let tokens = Lexer::new(src).tokenize()?;
    Parser::new(tokens).parse_document()
}
