use crate::{
    ast::{Expr, Operator},
    error::ParseError,
    interpreter::lexer::Token,
};

/// Result type used by the parser.
pub type ParseResult<T> = Result<T, ParseError>;

/// The parser's working storage: tokens paired with their source line.
///
/// Tokens are pushed in input order, so popping from the end scans the
/// expression right to left.
pub type TokenStack = Vec<(Token, usize)>;

/// Builds a parse tree from a stack of postfix tokens.
///
/// Each pop yields the next token scanning the expression from the end, so
/// operators are seen before their operands and every operand is parsed by
/// a recursive call. The tree that comes back is always well-formed: every
/// interior node has two children, and a ternary's right child is the
/// synthetic branch bundle holding its true and false branches.
///
/// Tokens left on the stack once the tree is complete are ignored.
///
/// # Parameters
/// - `tokens`: The token stack for one expression.
///
/// # Returns
/// The root of the parse tree.
///
/// # Errors
/// - `ParseError::EmptyInput` if the stack is empty. Callers skip lines
///   without tokens, so hitting this signals caller misuse, not bad input.
/// - `ParseError::UnexpectedEndOfInput` if an operator is missing one of
///   its operands.
///
/// ## Example
/// ```
/// use repol::interpreter::{lexer::tokenize, parser::parse};
///
/// let mut tokens = tokenize("1 2 +", 1).unwrap();
/// let tree = parse(&mut tokens).unwrap();
///
/// assert_eq!(tree.line_number(), 1);
/// ```
pub fn parse(tokens: &mut TokenStack) -> ParseResult<Expr> {
    if tokens.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    parse_expression(tokens, 0)
}

/// Parses one operand by popping the stack.
///
/// `parent_line` is the line of the enclosing operator; an exhausted stack
/// is reported against it so the error points at something visible.
fn parse_expression(tokens: &mut TokenStack, parent_line: usize) -> ParseResult<Expr> {
    let Some((token, line)) = tokens.pop() else {
        return Err(ParseError::UnexpectedEndOfInput { line: parent_line });
    };

    match token {
        Token::Integer(text) => Ok(Expr::Integer { text, line }),

        Token::Symbol(name) => Ok(Expr::Variable { name, line }),

        token => match token.operator() {
            Some(Operator::Ternary) => parse_ternary(tokens, line),

            Some(op) => {
                let right = parse_expression(tokens, line)?;
                let left = parse_expression(tokens, line)?;

                Ok(Expr::Binary { op,
                                  left: Box::new(left),
                                  right: Box::new(right),
                                  line })
            },

            None => Err(ParseError::UnexpectedToken { token: format!("{token:?}"),
                                                      line }),
        },
    }
}

/// Parses the three operands of a ternary and bundles its branches.
///
/// Popping right to left yields the false branch first, then the true
/// branch, then the test expression. The two branches are wrapped into an
/// `Operator::Alt` interior node so the ternary node itself stays binary.
fn parse_ternary(tokens: &mut TokenStack, line: usize) -> ParseResult<Expr> {
    let false_branch = parse_expression(tokens, line)?;
    let true_branch = parse_expression(tokens, line)?;
    let test = parse_expression(tokens, line)?;

    let alternatives = Expr::Binary { op:    Operator::Alt,
                                      left:  Box::new(true_branch),
                                      right: Box::new(false_branch),
                                      line };

    Ok(Expr::Binary { op:    Operator::Ternary,
                      left:  Box::new(test),
                      right: Box::new(alternatives),
                      line })
}
