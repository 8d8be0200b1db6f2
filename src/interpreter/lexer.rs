use logos::Logos;

use crate::{ast::Operator, error::ParseError};

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `=`
    #[token("=")]
    Equals,
    /// `?`
    #[token("?")]
    Question,
    /// Integer literal tokens, such as `42`. The original text is kept so
    /// the printer can reproduce it unchanged.
    #[regex(r"[0-9]+", |lex| lex.slice().to_string())]
    Integer(String),
    /// Symbol tokens; variable names such as `x` or `rate2`.
    #[regex(r"[a-zA-Z][a-zA-Z0-9]*", |lex| lex.slice().to_string())]
    Symbol(String),
    /// `# Comments.`
    #[regex(r"#[^\n\r]*", logos::skip)]
    Comment,
    /// Tabs and feeds.
    #[regex(r"[ \t\f]+", logos::skip)]
    Ignored,
}

impl Token {
    /// Maps an operator token to its [`Operator`].
    ///
    /// Returns `None` for literals and symbols; the token grammar makes the
    /// three classes mutually exclusive.
    /// ## Example
    /// ```
    /// use repol::{ast::Operator, interpreter::lexer::Token};
    ///
    /// assert_eq!(Token::Plus.operator(), Some(Operator::Add));
    /// assert_eq!(Token::Symbol("x".to_string()).operator(), None);
    /// ```
    #[must_use]
    pub const fn operator(&self) -> Option<Operator> {
        match self {
            Self::Plus => Some(Operator::Add),
            Self::Minus => Some(Operator::Sub),
            Self::Star => Some(Operator::Mul),
            Self::Slash => Some(Operator::Div),
            Self::Percent => Some(Operator::Mod),
            Self::Equals => Some(Operator::Assign),
            Self::Question => Some(Operator::Ternary),
            _ => None,
        }
    }
}

/// Tokenizes a single input line.
///
/// Whitespace and `#` comments are skipped. Tokens are returned in input
/// order, each paired with `line_number` so later stages can report errors
/// against the source.
///
/// # Parameters
/// - `line`: The raw input line.
/// - `line_number`: The 1-based number of `line` within its source.
///
/// # Returns
/// The tokens of the line, left to right.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` if the line contains a character
/// sequence that is not part of any token.
///
/// ## Example
/// ```
/// use repol::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("a 1 + # comment", 1).unwrap();
///
/// assert_eq!(tokens.len(), 3);
/// assert_eq!(tokens[2].0, Token::Plus);
/// ```
pub fn tokenize(line: &str, line_number: usize) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(line);

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, line_number));
        } else {
            let slice = lexer.slice();
            return Err(ParseError::UnexpectedToken { token: slice.to_string(),
                                                     line:  line_number, });
        }
    }

    Ok(tokens)
}
