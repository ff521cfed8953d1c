//! sqlbind CLI - tokenize and bind SQL statements from the command line.

use std::io::{self, BufRead, Write};

use clap::{Parser, Subcommand};
use sqlbind::{bound_stmt, bound_stmt_verbose, debug_print_tokens, set_log, tokenize, BindOptions};

#[derive(Parser)]
#[command(name = "sqlbind", version, about = "SQL tokenizer and bind-variable canonicalizer")]
struct Cli {
    /// Enable advisory debug logging.
    #[arg(long, global = true)]
    log: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Produce the canonical ("bound") form of a statement.
    Bind {
        stmt: Vec<String>,
        #[arg(long)]
        strip_hints: bool,
        #[arg(long)]
        no_normalize_numbers: bool,
        #[arg(long)]
        no_normalize_partitions: bool,
        #[arg(long)]
        verbose: bool,
    },
    /// Print the parallel token/kind sequence for a statement.
    Tokenize { stmt: Vec<String> },
    /// Print one line per token: right-aligned kind, quoted payload.
    DebugTokens { stmt: Vec<String> },
}

fn main() {
    let cli = Cli::parse();
    env_logger::init();
    if cli.log {
        set_log(true);
    }

    match cli.command {
        Some(Command::Bind {
            stmt,
            strip_hints,
            no_normalize_numbers,
            no_normalize_partitions,
            verbose,
        }) => {
            let opts = BindOptions {
                normalize_numbers_in_ident: !no_normalize_numbers,
                normalize_partition_names: !no_normalize_partitions,
                strip_hints,
            };
            bind_and_print(&stmt.join(" "), opts, verbose);
        }
        Some(Command::Tokenize { stmt }) => print_tokens(&stmt.join(" ")),
        Some(Command::DebugTokens { stmt }) => debug_print_tokens(&stmt.join(" ")),
        None => run_repl(),
    }
}

fn bind_and_print(stmt: &str, opts: BindOptions, verbose: bool) {
    if verbose {
        let result = bound_stmt_verbose(stmt, opts);
        println!("{}", result.canonical);
        println!("replaced literals: {}", result.num_replaced_literals);
        for (value, kind) in result.replaced_values.iter().zip(result.replaced_kinds.iter()) {
            println!("  {kind}: {value:?}");
        }
    } else {
        println!("{}", bound_stmt(stmt, opts));
    }
}

fn print_tokens(stmt: &str) {
    let stream = tokenize(stmt);
    for t in stream.tokens() {
        println!("{:>7}  {:?}", t.kind.to_string(), t.text);
    }
}

fn run_repl() {
    println!("sqlbind v{}", env!("CARGO_PKG_VERSION"));
    println!("Enter SQL statements (Ctrl+D to exit):\n");

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("sql> ");
        stdout.flush().unwrap();

        let mut input = String::new();
        match stdin.lock().read_line(&mut input) {
            Ok(0) => break,
            Ok(_) => {
                let stmt = input.trim();
                if stmt.is_empty() {
                    continue;
                }
                if stmt.eq_ignore_ascii_case("quit") || stmt.eq_ignore_ascii_case("exit") {
                    break;
                }
                println!("{}", bound_stmt(stmt, BindOptions::default()));
            }
            Err(e) => {
                eprintln!("Error reading input: {e}");
                break;
            }
        }
    }
}
