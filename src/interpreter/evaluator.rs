use crate::{
    ast::{Expr, Operator},
    error::RuntimeError,
    interpreter::symtab::SymbolTable,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state: the symbol table that is
/// consulted and mutated while evaluating expressions.
///
/// ## Usage
///
/// A `Context` is created once and reused across all lines of a session,
/// so assignments made by one expression are visible to the next.
pub struct Context {
    symbols: SymbolTable,
}

#[allow(clippy::new_without_default)]
impl Context {
    /// Creates a new evaluation context with an empty symbol table.
    #[must_use]
    pub fn new() -> Self {
        Self { symbols: SymbolTable::new() }
    }

    /// Creates a context whose symbol table is pre-populated, typically
    /// from a bootstrap file.
    #[must_use]
    pub const fn with_table(symbols: SymbolTable) -> Self {
        Self { symbols }
    }

    /// Returns the symbol table of this context.
    #[must_use]
    pub const fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Evaluates a parse tree and returns the resulting value.
    ///
    /// This is the main entry point for evaluation. The evaluator
    /// dispatches on the node variant: integer leaves are converted from
    /// their stored text, variable leaves are resolved through the symbol
    /// table, and interior nodes evaluate their operands recursively. The
    /// first error anywhere in the recursion aborts the whole evaluation;
    /// exactly one error surfaces per expression.
    ///
    /// # Parameters
    /// - `expr`: The root of a well-formed parse tree.
    ///
    /// # Returns
    /// The evaluated value.
    ///
    /// # Errors
    /// - `RuntimeError::LiteralTooLarge` if an integer literal exceeds the
    ///   64-bit range.
    /// - `RuntimeError::UnknownVariable` if a read resolves no variable.
    /// - Any error produced by the operator-specific evaluation paths.
    ///
    /// ## Example
    /// ```
    /// use repol::interpreter::{evaluator::Context, lexer::tokenize, parser::parse};
    ///
    /// let mut tokens = tokenize("2 3 *", 1).unwrap();
    /// let tree = parse(&mut tokens).unwrap();
    ///
    /// let mut context = Context::new();
    /// assert_eq!(context.eval(&tree).unwrap(), 6);
    /// ```
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<i64> {
        match expr {
            Expr::Integer { text, line } => {
                text.parse()
                    .map_err(|_| RuntimeError::LiteralTooLarge { line: *line })
            },

            Expr::Variable { name, line } => {
                self.symbols
                    .get(name)
                    .ok_or_else(|| RuntimeError::UnknownVariable { name: name.clone(),
                                                                   line: *line, })
            },

            Expr::Binary { op: Operator::Assign,
                           left,
                           right,
                           line, } => self.eval_assignment(left, right, *line),

            Expr::Binary { op: Operator::Ternary,
                           left,
                           right,
                           line, } => self.eval_ternary(left, right, *line),

            Expr::Binary { op, left, right, line } => {
                let left_value = self.eval(left)?;
                let right_value = self.eval(right)?;

                Self::eval_arithmetic(*op, left_value, right_value, *line)
            },
        }
    }

    /// Evaluates an assignment.
    ///
    /// The left child must be a variable leaf. The right child is
    /// evaluated first; only a successful evaluation touches the table.
    /// Assigning to a name that does not exist yet creates it, and
    /// assignment is the only way a variable comes into existence during
    /// evaluation; a plain read of a missing name stays an error.
    fn eval_assignment(&mut self, left: &Expr, right: &Expr, line: usize) -> EvalResult<i64> {
        let Expr::Variable { name, .. } = left else {
            return Err(RuntimeError::InvalidLValue { line });
        };

        let value = self.eval(right)?;
        self.symbols.set(name, value);

        Ok(value)
    }

    /// Evaluates a conditional selection.
    ///
    /// A nonzero test selects the true branch, zero the false branch. Only
    /// the selected branch is evaluated, so assignments in the other
    /// branch never run.
    fn eval_ternary(&mut self, test: &Expr, alternatives: &Expr, line: usize) -> EvalResult<i64> {
        let Expr::Binary { op: Operator::Alt,
                           left,
                           right,
                           .. } = alternatives
        else {
            return Err(RuntimeError::UnknownOperation { line });
        };

        let test_value = self.eval(test)?;

        if test_value == 0 {
            self.eval(right)
        } else {
            self.eval(left)
        }
    }

    /// Applies an arithmetic operator to two evaluated operands.
    ///
    /// All arithmetic is checked: a zero right operand of `/` or `%` is
    /// reported as `DivisionByZero`, and any out-of-range result
    /// (including `i64::MIN / -1`) as `Overflow`.
    fn eval_arithmetic(op: Operator, left: i64, right: i64, line: usize) -> EvalResult<i64> {
        use Operator::{Add, Div, Mod, Mul, Sub};

        match op {
            Add => left.checked_add(right).ok_or(RuntimeError::Overflow { line }),
            Sub => left.checked_sub(right).ok_or(RuntimeError::Overflow { line }),
            Mul => left.checked_mul(right).ok_or(RuntimeError::Overflow { line }),
            Div => {
                if right == 0 {
                    return Err(RuntimeError::DivisionByZero { line });
                }

                left.checked_div(right).ok_or(RuntimeError::Overflow { line })
            },
            Mod => {
                if right == 0 {
                    return Err(RuntimeError::DivisionByZero { line });
                }

                left.checked_rem(right).ok_or(RuntimeError::Overflow { line })
            },
            _ => Err(RuntimeError::UnknownOperation { line }),
        }
    }
}
