use std::fs;

use repol::{
    error::ParseError,
    eval_source,
    interpreter::{
        evaluator::Context, lexer::tokenize, parser::parse, printer::render_infix,
        symtab::SymbolTable,
    },
};

fn assert_success(src: &str) {
    if let Err(e) = eval_source(src) {
        panic!("Script failed: {e}");
    }
}

fn assert_failure(src: &str) {
    if eval_source(src).is_ok() {
        panic!("Script succeeded but was expected to fail: {src}")
    }
}

fn assert_value(src: &str, expected: i64) {
    match eval_source(src) {
        Ok(Some(value)) => assert_eq!(value, expected, "Script: {src}"),
        Ok(None) => panic!("Script produced no value: {src}"),
        Err(e) => panic!("Script failed: {src}\nError: {e}"),
    }
}

fn assert_rendered(src: &str, expected: &str) {
    let mut tokens = tokenize(src, 1).unwrap();
    let tree = parse(&mut tokens).unwrap();

    assert_eq!(render_infix(&tree), expected, "Script: {src}");
}

#[test]
fn basic_arithmetic() {
    assert_value("1 2 +", 3);
    assert_value("8 5 -", 3);
    assert_value("7 9 *", 63);
    assert_value("10 2 /", 5);
    assert_value("7 3 %", 1);
}

#[test]
fn nested_arithmetic_matches_infix_evaluation() {
    // ((1+2)*3)
    assert_value("1 2 + 3 *", 9);
    // ((10-4)/(1+2))
    assert_value("10 4 - 1 2 + /", 2);
    // ((2*3)%(2+2))
    assert_value("2 3 * 2 2 + %", 2);
}

#[test]
fn division_truncates_toward_zero() {
    assert_value("7 2 /", 3);
    // ((0-7)/2)
    assert_value("0 7 - 2 /", -3);
}

#[test]
fn assignment_creates_and_overwrites() {
    assert_value("x 5 =", 5);
    assert_value("x 5 =\nx", 5);
    assert_value("x 5 =\nx 9 =\nx", 9);
    assert_value("x 5 =\nx 2 +", 7);
}

#[test]
fn assignment_chains_through_the_table() {
    // (x=(y=3)) defines both variables.
    assert_value("x y 3 = =\nx", 3);
    assert_value("x y 3 = =\ny", 3);
}

#[test]
fn ternary_selects_by_test_value() {
    assert_value("1 2 3 ?", 2);
    assert_value("0 2 3 ?", 3);
    // ((1+1)?(10:20)) — any nonzero test selects the true branch.
    assert_value("1 1 + 10 20 ?", 10);
}

#[test]
fn ternary_only_evaluates_the_taken_branch() {
    assert_value("1 x 5 = y 9 = ?\nx", 5);
    assert_failure("1 x 5 = y 9 = ?\ny");
    assert_value("0 x 5 = y 9 = ?\ny", 9);
    assert_failure("0 x 5 = y 9 = ?\nx");
}

#[test]
fn rendering_is_fully_parenthesized_infix() {
    assert_rendered("a b + 10 *", "((a+b)*10)");
    assert_rendered("x 5 =", "(x=5)");
    assert_rendered("a 1 2 ?", "(a?(1:2))");
    assert_rendered("1 2 3 ? 4 +", "((1?(2:3))+4)");
    assert_rendered("007", "007");
}

#[test]
fn pure_reads_are_idempotent() {
    let table = SymbolTable::from_source("a 6\nb 7").unwrap();
    let mut context = Context::with_table(table);

    let mut tokens = tokenize("a b *", 1).unwrap();
    let tree = parse(&mut tokens).unwrap();

    assert_eq!(context.eval(&tree).unwrap(), 42);
    assert_eq!(context.eval(&tree).unwrap(), 42);
    assert_eq!(context.symbols().len(), 2);
}

#[test]
fn division_and_modulo_by_zero_are_errors() {
    assert_failure("5 0 /");
    assert_failure("5 0 %");
    assert_value("0 5 /", 0);
}

#[test]
fn unknown_variable_is_an_error() {
    assert_failure("z");
    assert_failure("z 1 +");
}

#[test]
fn illegal_token_is_an_error() {
    assert_failure("5 @ +");
    assert_failure("1 2 &");
}

#[test]
fn missing_operand_is_an_error() {
    assert_failure("2 +");
    assert_failure("?");
    assert_failure("1 2 ?");
}

#[test]
fn invalid_assignment_target_is_an_error() {
    assert_failure("5 x =");
    assert_failure("1 2 + 3 =");
}

#[test]
fn literal_and_arithmetic_overflow_are_errors() {
    assert_value("9223372036854775807", i64::MAX);
    assert_failure("9223372036854775808");
    assert_failure("9223372036854775807 1 +");
    assert_failure("9223372036854775807 2 *");
}

#[test]
fn comments_and_blank_lines_are_skipped() {
    assert_value("3 4 + # trailing comment", 7);
    assert_value("# whole line comment\n\n5", 5);
    assert!(eval_source("# nothing but a comment").unwrap().is_none());
    assert!(eval_source("").unwrap().is_none());
}

#[test]
fn parsing_an_empty_stack_reports_empty_input() {
    let mut tokens = Vec::new();

    assert!(matches!(parse(&mut tokens), Err(ParseError::EmptyInput)));
}

#[test]
fn bootstrap_table_populates_variables() {
    let table = SymbolTable::from_source("x 5\ny 10\n# comment line\nz -4").unwrap();
    let mut context = Context::with_table(table);

    let mut tokens = tokenize("x y + z +", 1).unwrap();
    let tree = parse(&mut tokens).unwrap();

    assert_eq!(context.eval(&tree).unwrap(), 11);
}

#[test]
fn malformed_bootstrap_entries_are_rejected() {
    assert!(SymbolTable::from_source("5x 3").is_err());
    assert!(SymbolTable::from_source("x").is_err());
    assert!(SymbolTable::from_source("x five").is_err());
    assert!(SymbolTable::from_source("x 5\n\ny 6").is_err());
}

#[test]
fn example_script_works() {
    let script = fs::read_to_string("tests/example.post").expect("missing file");
    assert_value(&script, 1);
}

#[test]
fn interpreter_recovers_after_an_error() {
    // A failed line leaves earlier assignments intact when driven line by
    // line, the way the REPL does it.
    let mut context = Context::new();

    assert!(repol::eval_line(&mut context, "x 5 =", 1).is_ok());
    assert!(repol::eval_line(&mut context, "x 0 /", 2).is_err());
    assert_eq!(context.symbols().get("x"), Some(5));

    let evaluation = repol::eval_line(&mut context, "x 1 +", 3).unwrap().unwrap();
    assert_eq!(evaluation.value, 6);
}

#[test]
fn successful_prefix_of_a_failing_line_still_mutates() {
    // ((x=2)+(1/0)) assigns x before the division fails.
    let mut context = Context::new();

    assert!(repol::eval_line(&mut context, "x 2 = 1 0 / +", 1).is_err());
    assert_eq!(context.symbols().get("x"), Some(2));
}

#[test]
fn whole_scripts_report_the_first_failure() {
    assert_success("x 1 =\ny 2 =\nx y +");
    assert_failure("x 1 =\nbroken\nx");
}
