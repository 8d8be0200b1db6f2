use crate::ast::Expr;

/// Renders a parse tree as fully parenthesized infix text.
///
/// Leaves print their original token text; every operator application is
/// wrapped in parentheses, so operator precedence never has to be
/// reconstructed. A ternary renders as `(test?(true:false))` because its
/// branch bundle is an interior node of its own.
///
/// # Parameters
/// - `expr`: The root of a well-formed parse tree.
///
/// # Returns
/// The infix rendering of the tree.
///
/// ## Example
/// ```
/// use repol::interpreter::{lexer::tokenize, parser::parse, printer::render_infix};
///
/// let mut tokens = tokenize("a b + 10 *", 1).unwrap();
/// let tree = parse(&mut tokens).unwrap();
///
/// assert_eq!(render_infix(&tree), "((a+b)*10)");
/// ```
#[must_use]
pub fn render_infix(expr: &Expr) -> String {
    let mut rendered = String::new();
    write_infix(&mut rendered, expr);

    rendered
}

fn write_infix(out: &mut String, expr: &Expr) {
    match expr {
        Expr::Integer { text, .. } => out.push_str(text),

        Expr::Variable { name, .. } => out.push_str(name),

        Expr::Binary { op, left, right, .. } => {
            out.push('(');
            write_infix(out, left);
            out.push_str(op.symbol());
            write_infix(out, right);
            out.push(')');
        },
    }
}
