//! Command-line interface for the `sift` text filter language.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use comfy_table::{Table, presets::UTF8_FULL_CONDENSED};
use sift_expr::Expression;

mod filters;

#[derive(Parser)]
#[command(name = "sift")]
#[command(about = "Boolean text filters - parse, test, and inspect filter queries")]
/// Top-level CLI options.
struct Cli {
    #[command(subcommand)]
    /// Subcommand to execute.
    command: Commands,
}

#[derive(Subcommand)]
/// Supported `sift` subcommands.
enum Commands {
    /// Parse a query and print its expression tree
    Parse {
        /// Filter query
        query: String,

        /// Stem leaf terms after parsing
        #[arg(long)]
        stem: bool,

        /// Output the tree as JSON
        #[arg(long)]
        json: bool,
    },

    /// Test whether a block of text matches a query
    Test {
        /// Filter query
        query: String,

        /// Text to test against
        text: String,

        /// Stem leaf terms after parsing
        #[arg(long)]
        stem: bool,
    },

    /// Print the positive terms a query references
    Terms {
        /// Filter query
        query: String,

        /// Stem leaf terms after parsing
        #[arg(long)]
        stem: bool,
    },

    /// List the built-in demo filters and their extracted terms
    Filters,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Parse { query, stem, json } => cmd_parse(&query, stem, json),
        Commands::Test { query, text, stem } => cmd_test(&query, &text, stem),
        Commands::Terms { query, stem } => cmd_terms(&query, stem),
        Commands::Filters => cmd_filters(),
    }
}

/// Compiles a query, printing a caret diagnostic on failure.
fn compile(query: &str, stem: bool) -> Result<Expression, ExitCode> {
    Expression::new(query, stem).map_err(|err| {
        eprintln!("{}", err.format_with_context());
        ExitCode::from(2)
    })
}

/// Prints the parsed tree, indented or as JSON.
fn cmd_parse(query: &str, stem: bool, json: bool) -> ExitCode {
    let filter = match compile(query, stem) {
        Ok(filter) => filter,
        Err(code) => return code,
    };

    if json {
        match serde_json::to_string_pretty(filter.tree()) {
            Ok(rendered) => println!("{rendered}"),
            Err(err) => {
                eprintln!("error: {err}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        print!("{}", filter.tree());
    }

    ExitCode::SUCCESS
}

/// Evaluates the query against the text; exit code 1 on no match.
fn cmd_test(query: &str, text: &str, stem: bool) -> ExitCode {
    let filter = match compile(query, stem) {
        Ok(filter) => filter,
        Err(code) => return code,
    };

    if filter.test(text) {
        println!("match");
        ExitCode::SUCCESS
    } else {
        println!("no match");
        ExitCode::FAILURE
    }
}

/// Prints the flattened positive terms, one per line.
fn cmd_terms(query: &str, stem: bool) -> ExitCode {
    let filter = match compile(query, stem) {
        Ok(filter) => filter,
        Err(code) => return code,
    };

    for term in filter.flatten() {
        println!("{term}");
    }

    ExitCode::SUCCESS
}

/// Parses every built-in demo filter and tabulates names, terms, and queries.
fn cmd_filters() -> ExitCode {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["Name", "Terms", "Query"]);

    for filter in filters::DEMO_FILTERS {
        let compiled = match Expression::new(filter.query, false) {
            Ok(compiled) => compiled,
            Err(err) => {
                eprintln!("{}: {}", filter.name, err.format_with_context());
                return ExitCode::FAILURE;
            }
        };

        table.add_row(vec![
            filter.name.to_string(),
            compiled.flatten().join(" "),
            filter.query.to_string(),
        ]);
    }

    println!("{table}");
    ExitCode::SUCCESS
}
