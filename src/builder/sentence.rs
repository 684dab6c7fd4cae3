//! The sentence grammar.
//!
//! Sentences are read in two phases: a token pass over the raw characters, and a recursive descent over the tokens.
//! Connectives, loosest first: `<=>`, `=>` (right-associative), `|`, `&`, `~`.
//! The spellings `==>`, `<==>`, and `||` are accepted as written by some sources.

use crate::{
    structures::{expression::Expression, symbol::Symbol},
    types::err::ParseError,
};

/// Parses a single sentence.
///
/// ```rust
/// # use ermine_kb::builder::parse_sentence;
/// let sentence = parse_sentence("A & B => C").unwrap();
/// assert_eq!(format!("{sentence}"), "(A & B) => C");
/// ```
pub fn parse_sentence(text: &str) -> Result<Expression, ParseError> {
    let tokens = lex(text)?;
    if tokens.is_empty() {
        return Err(ParseError::Empty);
    }

    let mut parser = Parser { tokens, cursor: 0 };
    let expression = parser.iff()?;

    match parser.cursor == parser.tokens.len() {
        true => Ok(expression),
        false => Err(ParseError::TrailingInput),
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
enum Token {
    Sym(Symbol),
    Not,
    And,
    Or,
    Implies,
    Iff,
    Open,
    Close,
}

impl Token {
    /// A representative character, for error reports.
    fn glyph(&self) -> char {
        match self {
            Token::Sym(symbol) => symbol.name().chars().next().unwrap_or('?'),
            Token::Not => '~',
            Token::And => '&',
            Token::Or => '|',
            Token::Implies => '=',
            Token::Iff => '<',
            Token::Open => '(',
            Token::Close => ')',
        }
    }
}

fn lex(text: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut characters = text.chars().peekable();

    while let Some(character) = characters.next() {
        match character {
            c if c.is_whitespace() => {}

            c if c.is_alphabetic() => {
                let mut name = String::from(c);
                while let Some(next) = characters.peek() {
                    if next.is_alphanumeric() || *next == '_' {
                        name.push(*next);
                        characters.next();
                    } else {
                        break;
                    }
                }
                let symbol = Symbol::new(name).map_err(|_| ParseError::UnexpectedCharacter(c))?;
                tokens.push(Token::Sym(symbol));
            }

            '~' => tokens.push(Token::Not),

            '&' => tokens.push(Token::And),

            '|' => {
                if characters.peek() == Some(&'|') {
                    characters.next();
                }
                tokens.push(Token::Or);
            }

            '=' => {
                while characters.peek() == Some(&'=') {
                    characters.next();
                }
                match characters.next() {
                    Some('>') => tokens.push(Token::Implies),
                    Some(other) => return Err(ParseError::UnexpectedCharacter(other)),
                    None => return Err(ParseError::UnexpectedEnd),
                }
            }

            '<' => {
                match characters.next() {
                    Some('=') => {}
                    Some(other) => return Err(ParseError::UnexpectedCharacter(other)),
                    None => return Err(ParseError::UnexpectedEnd),
                }
                while characters.peek() == Some(&'=') {
                    characters.next();
                }
                match characters.next() {
                    Some('>') => tokens.push(Token::Iff),
                    Some(other) => return Err(ParseError::UnexpectedCharacter(other)),
                    None => return Err(ParseError::UnexpectedEnd),
                }
            }

            '(' => tokens.push(Token::Open),
            ')' => tokens.push(Token::Close),

            other => return Err(ParseError::UnexpectedCharacter(other)),
        }
    }

    Ok(tokens)
}

struct Parser {
    tokens: Vec<Token>,
    cursor: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.cursor)
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.cursor).cloned();
        if token.is_some() {
            self.cursor += 1;
        }
        token
    }

    fn iff(&mut self) -> Result<Expression, ParseError> {
        let mut expression = self.implies()?;
        while self.peek() == Some(&Token::Iff) {
            self.advance();
            expression = Expression::iff(expression, self.implies()?);
        }
        Ok(expression)
    }

    fn implies(&mut self) -> Result<Expression, ParseError> {
        let antecedent = self.or()?;
        match self.peek() {
            Some(Token::Implies) => {
                self.advance();
                // Right-associative.
                Ok(Expression::implies(antecedent, self.implies()?))
            }
            _ => Ok(antecedent),
        }
    }

    fn or(&mut self) -> Result<Expression, ParseError> {
        let mut expression = self.and()?;
        while self.peek() == Some(&Token::Or) {
            self.advance();
            expression = Expression::or(expression, self.and()?);
        }
        Ok(expression)
    }

    fn and(&mut self) -> Result<Expression, ParseError> {
        let mut expression = self.unary()?;
        while self.peek() == Some(&Token::And) {
            self.advance();
            expression = Expression::and(expression, self.unary()?);
        }
        Ok(expression)
    }

    fn unary(&mut self) -> Result<Expression, ParseError> {
        match self.peek() {
            Some(Token::Not) => {
                self.advance();
                Ok(self.unary()?.negate())
            }
            _ => self.atom(),
        }
    }

    fn atom(&mut self) -> Result<Expression, ParseError> {
        match self.advance() {
            Some(Token::Sym(symbol)) => Ok(Expression::Symbol(symbol)),

            Some(Token::Open) => {
                let expression = self.iff()?;
                match self.advance() {
                    Some(Token::Close) => Ok(expression),
                    _ => Err(ParseError::MissingParenthesis),
                }
            }

            Some(other) => Err(ParseError::UnexpectedCharacter(other.glyph())),
            None => Err(ParseError::UnexpectedEnd),
        }
    }
}
