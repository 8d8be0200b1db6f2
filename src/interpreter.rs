/// The evaluator module executes parse trees and computes results.
///
/// The evaluator walks a parse tree recursively, performs the arithmetic,
/// assignment and conditional operations, and manages variable state. It is
/// the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates parse tree nodes, performing all supported operations.
/// - Resolves and mutates variables through the symbol table.
/// - Reports runtime errors such as division by zero or undefined
///   variables.
pub mod evaluator;
/// The lexer module tokenizes one input line for further parsing.
///
/// The lexer (tokenizer) reads the raw line and produces the sequence of
/// tokens the parser consumes as its stack. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into classified tokens.
/// - Skips whitespace and `#` comments.
/// - Reports lexical errors for input that matches no token.
pub mod lexer;
/// The parser module builds a parse tree from a stack of tokens.
///
/// The parser pops the token stack produced by the lexer and reduces it
/// recursively into a tree. Because tokens are pushed in input order, each
/// pop scans the expression from the end, which is exactly the order a
/// postfix expression wants to be consumed in.
///
/// # Responsibilities
/// - Converts tokens into tree nodes.
/// - Bundles ternary branches into a synthetic interior node.
/// - Reports structural errors with location info.
pub mod parser;
/// The printer module renders parse trees as infix text.
///
/// # Responsibilities
/// - Produces the fully parenthesized infix form of a tree.
pub mod printer;
/// The symtab module holds variable state.
///
/// Variables are bound to 64-bit integer values. The table is created
/// empty or from a bootstrap file and then mutated by assignment
/// expressions during evaluation.
///
/// # Responsibilities
/// - Provides lookup and create-or-overwrite binding of variables.
/// - Parses the bootstrap `name value` file format.
/// - Exposes iteration for table dumps.
pub mod symtab;
