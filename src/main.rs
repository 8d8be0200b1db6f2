use std::{
    fs,
    io::{self, BufRead, Write},
    path::PathBuf,
    process,
};

use clap::Parser;
use repol::{
    eval_line,
    interpreter::{evaluator::Context, symtab::SymbolTable},
};

/// repol is an interactive interpreter for postfix (reverse Polish
/// notation) integer expressions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to a symbol table file used to pre-define variables, one
    /// `name value` pair per line.
    table: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    let mut context = match args.table {
        Some(path) => {
            let source = fs::read_to_string(&path).unwrap_or_else(|_| {
                             eprintln!("Failed to read the symbol table file '{}'. Perhaps this file does not exist?",
                                       path.display());
                             process::exit(1);
                         });

            let table = SymbolTable::from_source(&source).unwrap_or_else(|e| {
                            eprintln!("{e}");
                            process::exit(1);
                        });

            let context = Context::with_table(table);
            dump_table(context.symbols());
            context
        },
        None => Context::new(),
    };

    println!("Enter postfix expressions (CTRL-D to exit):");
    prompt();

    for (index, line) in io::stdin().lock().lines().enumerate() {
        let Ok(line) = line else {
            break;
        };

        match eval_line(&mut context, &line, index + 1) {
            Ok(Some(evaluation)) => println!("{} = {}", evaluation.infix, evaluation.value),
            Ok(None) => {},
            Err(e) => eprintln!("{e}"),
        }

        prompt();
    }

    dump_table(context.symbols());
}

/// Prints the contents of the symbol table, sorted by name.
fn dump_table(symbols: &SymbolTable) {
    println!("\nSYMBOL TABLE:");

    let mut entries: Vec<_> = symbols.iter().collect();
    entries.sort_unstable();

    for (name, value) in entries {
        println!("\tName: {name}, Value: {value}");
    }
}

fn prompt() {
    print!("> ");
    let _ = io::stdout().flush();
}
