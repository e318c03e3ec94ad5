//! Command-line interface for exprtree.
//!
//! Usage:
//!   exprtree [EXPRESSION] [--format text|json] [--narrate]
//!            [--no-tokens] [--no-tree] [--no-steps] [--no-rules]
//!
//! Without EXPRESSION the expression is read from stdin.

use std::{
    io::{self, Read},
    process,
};

use clap::{Arg, ArgAction, ArgMatches, Command};
use exprtree::{
    compile_expression, format_error,
    report::report::{render_rules, render_steps, render_tree, to_json, token_table},
    Compilation,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let matches = Command::new("exprtree")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Parse an arithmetic expression and show its tokens, tree and derivation")
        .arg(
            Arg::new("expression")
                .help("Expression to parse, read from stdin when omitted")
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format")
                .value_parser(["text", "json"])
                .default_value("text"),
        )
        .arg(
            Arg::new("narrate")
                .long("narrate")
                .short('n')
                .help("Describe each parsing step in plain English")
                .action(ArgAction::SetTrue),
        )
        .arg(section_toggle("no-tokens", "Hide the token table"))
        .arg(section_toggle("no-tree", "Hide the syntax tree"))
        .arg(section_toggle("no-steps", "Hide the parsing steps"))
        .arg(section_toggle("no-rules", "Hide the grammar rules used"))
        .get_matches();

    let expression = match matches.get_one::<String>("expression") {
        Some(expression) => expression.clone(),
        None => {
            let mut buffer = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut buffer) {
                eprintln!("Error: failed to read stdin: {}", e);
                process::exit(1);
            }
            buffer
        }
    };
    let expression = expression.trim();
    debug!(expression, "read expression");

    let compilation = match compile_expression(expression) {
        Ok(compilation) => compilation,
        Err(e) => {
            eprint!("{}", format_error(&e, expression));
            process::exit(1);
        }
    };

    match matches.get_one::<String>("format").map(String::as_str) {
        Some("json") => print_json(expression, &compilation),
        _ => print_text(&compilation, &matches),
    }
}

fn section_toggle(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .help(help)
        .action(ArgAction::SetTrue)
}

fn print_text(compilation: &Compilation, matches: &ArgMatches) {
    let mut sections = vec![];

    if !matches.get_flag("no-tokens") {
        sections.push(format!("Tokens\n{}", token_table(&compilation.tokens)));
    }
    if !matches.get_flag("no-tree") {
        sections.push(format!(
            "Syntax tree\n{}",
            render_tree(&compilation.output.tree)
        ));
    }
    if !matches.get_flag("no-steps") {
        sections.push(format!(
            "Parsing steps\n{}",
            render_steps(&compilation.output.steps, matches.get_flag("narrate"))
        ));
    }
    if !matches.get_flag("no-rules") {
        sections.push(format!(
            "Grammar rules used\n{}",
            render_rules(&compilation.output.rules)
        ));
    }

    print!("{}", sections.join("\n"));
}

fn print_json(expression: &str, compilation: &Compilation) {
    let report = to_json(expression, &compilation.tokens, &compilation.output);
    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error: failed to serialize report: {}", e);
            process::exit(1);
        }
    }
}
