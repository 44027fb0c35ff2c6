//! Command-line interface for pbxtok
//! This binary spells tokens and derives object identifiers for pbxproj-style project files.
//!
//! Usage:
//!   pbxtok quote [TOKEN]... [--json]   - Escape tokens for project-file output
//!   pbxtok hash [VALUE]... [--json]    - MD5 digest and object ID for values
//!
//! With no positional arguments, each line of stdin is treated as one input.

use clap::{Arg, ArgAction, ArgMatches, Command};
use pbxtok::pbx::ident::{md5_hex, object_id};
use pbxtok::pbx::quote::{escape, needs_quoting};
use serde::Serialize;
use std::io::BufRead;

#[derive(Serialize)]
struct QuoteRecord {
    token: String,
    escaped: String,
    quoted: bool,
}

#[derive(Serialize)]
struct HashRecord {
    input: String,
    md5: String,
    object_id: String,
}

fn main() {
    let matches = Command::new("pbxtok")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Quoting and identifier helpers for pbxproj-style project files")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("quote")
                .about("Escape tokens for project-file output")
                .arg(
                    Arg::new("token")
                        .help("Tokens to escape (lines of stdin when absent)")
                        .num_args(0..),
                )
                .arg(json_flag()),
        )
        .subcommand(
            Command::new("hash")
                .about("MD5 digest and 24-character object ID for values")
                .arg(
                    Arg::new("value")
                        .help("Values to hash (lines of stdin when absent)")
                        .num_args(0..),
                )
                .arg(json_flag()),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("quote", sub)) => handle_quote_command(sub),
        Some(("hash", sub)) => handle_hash_command(sub),
        _ => unreachable!("subcommand is required"),
    }
}

fn json_flag() -> Arg {
    Arg::new("json")
        .long("json")
        .help("Emit results as a JSON array")
        .action(ArgAction::SetTrue)
}

/// Handle the quote command
fn handle_quote_command(matches: &ArgMatches) {
    let tokens = gather_inputs(matches, "token");

    if matches.get_flag("json") {
        let records: Vec<QuoteRecord> = tokens
            .iter()
            .map(|token| QuoteRecord {
                token: token.clone(),
                escaped: escape(token),
                quoted: needs_quoting(token),
            })
            .collect();
        print_json(&records);
    } else {
        for token in &tokens {
            println!("{}", escape(token));
        }
    }
}

/// Handle the hash command
fn handle_hash_command(matches: &ArgMatches) {
    let values = gather_inputs(matches, "value");

    if matches.get_flag("json") {
        let records: Vec<HashRecord> = values
            .iter()
            .map(|value| HashRecord {
                input: value.clone(),
                md5: md5_hex(value),
                object_id: object_id(value),
            })
            .collect();
        print_json(&records);
    } else {
        for value in &values {
            println!("{} {}", md5_hex(value), object_id(value));
        }
    }
}

/// Positional arguments when given, otherwise one input per stdin line.
fn gather_inputs(matches: &ArgMatches, id: &str) -> Vec<String> {
    match matches.get_many::<String>(id) {
        Some(values) => values.cloned().collect(),
        None => read_stdin_lines(),
    }
}

fn read_stdin_lines() -> Vec<String> {
    let stdin = std::io::stdin();
    stdin
        .lock()
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .unwrap_or_else(|e| {
            eprintln!("Failed to read stdin: {}", e);
            std::process::exit(1);
        })
}

fn print_json<T: Serialize>(records: &T) {
    let rendered = serde_json::to_string_pretty(records).unwrap_or_else(|e| {
        eprintln!("Failed to render JSON: {}", e);
        std::process::exit(1);
    });
    println!("{}", rendered);
}
