#[derive(Debug)]
/// Represents all errors that can occur while reading a symbol table
/// bootstrap file.
pub enum TableError {
    /// A symbol name does not start with a letter.
    InvalidSymbolName {
        /// The offending name.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A line does not hold a `name value` pair.
    MalformedEntry {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for TableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidSymbolName { name, line } => {
                write!(f, "Error on line {line}: Invalid symbol name '{name}'.")
            },

            Self::MalformedEntry { line } => write!(f,
                                                    "Error on line {line}: Symbol table line contains incorrect format."),
        }
    }
}

impl std::error::Error for TableError {}
