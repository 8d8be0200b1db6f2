/// Represents an operator appearing in a postfix expression.
///
/// Operators cover arithmetic, assignment and conditional selection. `Alt`
/// never appears in source input; the parser synthesizes it to bundle the
/// two branches of a ternary expression into a single child node.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Operator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Modulo (`%`)
    Mod,
    /// Assignment (`=`)
    Assign,
    /// Conditional selection (`?`)
    Ternary,
    /// Branch bundle of a ternary (`:`), synthesized by the parser.
    Alt,
}

impl Operator {
    /// Returns the canonical textual symbol used when printing the
    /// operator.
    /// ## Example
    /// ```
    /// use repol::ast::Operator;
    ///
    /// assert_eq!(Operator::Add.symbol(), "+");
    /// assert_eq!(Operator::Ternary.symbol(), "?");
    /// ```
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Assign => "=",
            Self::Ternary => "?",
            Self::Alt => ":",
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A node of the parse tree built from one postfix expression.
///
/// Leaves keep the literal token text they were built from so the printer
/// can reproduce the input unchanged. Interior nodes own both of their
/// child subtrees through `Box`, so dropping the root frees the whole tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// An integer literal leaf.
    Integer {
        /// The literal token text.
        text: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A variable reference leaf.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// An operator applied to two operands.
    ///
    /// For `Operator::Ternary`, `right` is always a `Binary` node carrying
    /// `Operator::Alt` whose `left` and `right` hold the true and false
    /// branches.
    Binary {
        /// The operator.
        op:    Operator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use repol::ast::Expr;
    ///
    /// let expr = Expr::Variable { name: "x".to_string(),
    ///                             line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Integer { line, .. }
            | Self::Variable { line, .. }
            | Self::Binary { line, .. } => *line,
        }
    }
}
