#[derive(Debug)]
/// Represents all errors that can occur while tokenizing a line or building
/// a parse tree from its token stack.
pub enum ParseError {
    /// The parser was invoked on an empty token stack.
    ///
    /// Callers skip lines that produce no tokens, so this error indicates a
    /// bug in the caller rather than bad user input.
    EmptyInput,
    /// Found a token that is not an operator, an integer or a symbol.
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The token stack ran out while an operand was still expected.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "Error: Cannot parse an empty expression."),

            Self::UnexpectedToken { token, line } => {
                write!(f, "Error on line {line}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Error on line {line}: Unexpected end of input.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
