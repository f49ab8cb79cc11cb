
use std::iter::Peekable;
use std::str::CharIndices;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum KeyValueError {
    #[error("Unexpected end of input at byte {0}")]
    UnexpectedEof(usize),
    #[error("Unexpected '{found}' at byte {pos}")]
    Unexpected { found: char, pos: usize },
    #[error("Unterminated string starting at byte {0}")]
    UnterminatedString(usize),
}

pub type Result<T> = std::result::Result<T, KeyValueError>;

/// A node of the product info tree.
///
/// Leaves carry a string value, sections carry an ordered list of children. Keys may repeat
/// within a section. Lookups never fail on a missing path; they return `None` instead, so
/// accessors can be chained freely.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct KeyValue {
    pub name: String,
    pub value: Option<String>,
    pub children: Vec<KeyValue>,
}

impl KeyValue {
    pub fn leaf(name: &str, value: &str) -> KeyValue {
        KeyValue { name: name.to_string(), value: Some(value.to_string()), children: vec![] }
    }

    pub fn section(name: &str, children: Vec<KeyValue>) -> KeyValue {
        KeyValue { name: name.to_string(), value: None, children }
    }

    /// First child with the given name, compared ASCII case-insensitively
    pub fn get(&self, key: &str) -> Option<&KeyValue> {
        self.children.iter().find(|c| c.name.eq_ignore_ascii_case(key))
    }

    pub fn path(&self, keys: &[&str]) -> Option<&KeyValue> {
        keys.iter().try_fold(self, |kv, key| kv.get(key))
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn str_at(&self, keys: &[&str]) -> Option<&str> {
        self.path(keys).and_then(KeyValue::value)
    }

    /// Children of the node at `keys`, or an empty slice if there is no such node
    pub fn children_at(&self, keys: &[&str]) -> &[KeyValue] {
        self.path(keys).map(|kv| kv.children.as_slice()).unwrap_or(&[])
    }

    /// Parse a document in the text KeyValues format, returning its single root node.
    pub fn parse(text: &str) -> Result<KeyValue> {
        let mut lexer = Lexer::new(text);

        let root = match lexer.next_token()? {
            Some((_, Token::Str(name))) => parse_pair(&mut lexer, name)?,
            Some((pos, token)) => return Err(token.unexpected(pos)),
            None => return Err(KeyValueError::UnexpectedEof(text.len())),
        };

        match lexer.next_token()? {
            None => Ok(root),
            Some((pos, Token::Str(s))) => {
                Err(KeyValueError::Unexpected { found: s.chars().next().unwrap_or('"'), pos })
            }
            Some((pos, token)) => Err(token.unexpected(pos)),
        }
    }
}

fn parse_pair(lexer: &mut Lexer, name: String) -> Result<KeyValue> {
    match lexer.next_token()? {
        Some((_, Token::Str(value))) => {
            Ok(KeyValue { name, value: Some(value), children: vec![] })
        }
        Some((_, Token::Open)) => {
            Ok(KeyValue { name, value: None, children: parse_children(lexer)? })
        }
        Some((pos, token)) => Err(token.unexpected(pos)),
        None => Err(KeyValueError::UnexpectedEof(lexer.len)),
    }
}

fn parse_children(lexer: &mut Lexer) -> Result<Vec<KeyValue>> {
    let mut children = vec![];

    loop {
        match lexer.next_token()? {
            Some((_, Token::Close)) => return Ok(children),
            Some((_, Token::Str(name))) => children.push(parse_pair(lexer, name)?),
            Some((pos, token)) => return Err(token.unexpected(pos)),
            None => return Err(KeyValueError::UnexpectedEof(lexer.len)),
        }
    }
}

#[derive(Debug)]
enum Token {
    Open,
    Close,
    Str(String),
}

impl Token {
    fn unexpected(&self, pos: usize) -> KeyValueError {
        let found = match self {
            Token::Open => '{',
            Token::Close => '}',
            Token::Str(_) => '"',
        };
        KeyValueError::Unexpected { found, pos }
    }
}

struct Lexer<'a> {
    chars: Peekable<CharIndices<'a>>,
    len: usize,
}

impl<'a> Lexer<'a> {
    fn new(text: &'a str) -> Lexer<'a> {
        Lexer { chars: text.char_indices().peekable(), len: text.len() }
    }

    fn next_token(&mut self) -> Result<Option<(usize, Token)>> {
        while let Some(&(pos, c)) = self.chars.peek() {
            match c {
                c if c.is_whitespace() => {
                    self.chars.next();
                }
                '/' if self.comment_ahead() => self.skip_line(),
                // Platform conditionals such as [$WIN32] are not evaluated
                '[' => self.skip_conditional(pos)?,
                '{' => {
                    self.chars.next();
                    return Ok(Some((pos, Token::Open)));
                }
                '}' => {
                    self.chars.next();
                    return Ok(Some((pos, Token::Close)));
                }
                '"' => {
                    self.chars.next();
                    return Ok(Some((pos, Token::Str(self.quoted(pos)?))));
                }
                _ => return Ok(Some((pos, Token::Str(self.unquoted())))),
            }
        }

        Ok(None)
    }

    fn comment_ahead(&self) -> bool {
        let mut ahead = self.chars.clone();
        ahead.next();
        matches!(ahead.next(), Some((_, '/')))
    }

    fn skip_line(&mut self) {
        for (_, c) in self.chars.by_ref() {
            if c == '\n' {
                break;
            }
        }
    }

    fn skip_conditional(&mut self, start: usize) -> Result<()> {
        for (_, c) in self.chars.by_ref() {
            if c == ']' {
                return Ok(());
            }
        }
        Err(KeyValueError::UnexpectedEof(start))
    }

    fn quoted(&mut self, start: usize) -> Result<String> {
        let mut s = String::new();

        while let Some((_, c)) = self.chars.next() {
            match c {
                '"' => return Ok(s),
                '\\' => match self.chars.next() {
                    Some((_, 'n')) => s.push('\n'),
                    Some((_, 't')) => s.push('\t'),
                    Some((_, '\\')) => s.push('\\'),
                    Some((_, '"')) => s.push('"'),
                    Some((_, other)) => {
                        s.push('\\');
                        s.push(other);
                    }
                    None => break,
                },
                _ => s.push(c),
            }
        }

        Err(KeyValueError::UnterminatedString(start))
    }

    fn unquoted(&mut self) -> String {
        let mut s = String::new();

        while let Some(&(_, c)) = self.chars.peek() {
            if c.is_whitespace() || matches!(c, '{' | '}' | '"') {
                break;
            }
            s.push(c);
            self.chars.next();
        }

        s
    }
}
