#[derive(Debug)]
/// Represents all errors that can occur while evaluating a parse tree.
pub enum RuntimeError {
    /// Tried to read an undefined variable.
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The left operand of an assignment was not a variable.
    InvalidLValue {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted division or modulo by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Arithmetic operation overflowed.
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An integer literal was too large to be represented safely.
    LiteralTooLarge {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Encountered an operator in a position it cannot appear in.
    UnknownOperation {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name, line } => {
                write!(f, "Error on line {line}: Unknown variable '{name}'.")
            },

            Self::InvalidLValue { line } => write!(f, "Error on line {line}: Invalid l-value."),

            Self::DivisionByZero { line } => write!(f, "Error on line {line}: Division by zero."),

            Self::Overflow { line } => write!(f,
                                              "Error on line {line}: Integer overflow while trying to compute result."),

            Self::LiteralTooLarge { line } => {
                write!(f, "Error on line {line}: Literal is too large.")
            },

            Self::UnknownOperation { line } => {
                write!(f, "Error on line {line}: Unknown operation.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
