//! Command-line interface for regmap
//! This binary dumps the tokens of a regmap source, or parses it and renders the declaration tree.
//!
//! Usage:
//!   regmap tokens [`<path>`] [--format simple|json]                          - Dump the token stream
//!   regmap tree [`<path>`] [--format json|yaml|treeviz] [--config `<file>`] [--debug] - Render the tree
//!
//! Without a path, the source is read from standard input. `tree` layers a
//! `regmap.toml` from the working directory over the built-in configuration.

use clap::{Arg, ArgAction, ArgMatches, Command};
use std::io;
use std::path::Path;
use std::process;

use regmap::regmap::config::{Loader, RegmapConfig};
use regmap::regmap::driver::{parse, read_source};
use regmap::regmap::error::LoadError;
use regmap::regmap::formats::{tokens_json, tokens_simple, FormatRegistry};
use regmap::regmap::lexer::Lexer;

fn main() {
    let matches = Command::new("regmap")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting and parsing regmap register map descriptions")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("tokens")
                .about("Print every token of the source, one per line")
                .arg(
                    Arg::new("path")
                        .help("Path to the regmap file (default: standard input)")
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format: simple or json")
                        .default_value("simple"),
                ),
        )
        .subcommand(
            Command::new("tree")
                .about("Parse the source and print the declaration tree")
                .arg(
                    Arg::new("path")
                        .help("Path to the regmap file (default: standard input)")
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format: json, yaml or treeviz (default from config)"),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .help("TOML file layered over the built-in defaults"),
                )
                .arg(
                    Arg::new("debug")
                        .long("debug")
                        .short('d')
                        .help("Log tokens and declarations on stderr")
                        .action(ArgAction::SetTrue),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("tokens", tokens_matches)) => handle_tokens_command(tokens_matches),
        Some(("tree", tree_matches)) => handle_tree_command(tree_matches),
        _ => unreachable!(),
    }
}

/// Install the stderr subscriber. `RUST_LOG` wins over the flag.
fn init_tracing(debug: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let default_level = if debug { "regmap=debug" } else { "regmap=warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(true))
        .with(filter)
        .init();
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("{}", message);
    process::exit(1);
}

/// Handle the tokens command
fn handle_tokens_command(matches: &ArgMatches) {
    init_tracing(false);
    let path = matches.get_one::<String>("path").map(Path::new);
    let source = read_source(path).unwrap_or_else(|e| fail(e));
    let format = matches
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("simple");

    match format {
        "simple" => {
            // Streaming: tokens before a lexical error are still printed
            for result in Lexer::new(&source) {
                match result {
                    Ok(token) => print!("{}", tokens_simple(std::slice::from_ref(&token))),
                    Err(e) => fail(e),
                }
            }
        }
        "json" => {
            let tokens = Lexer::new(&source)
                .collect::<Result<Vec<_>, _>>()
                .unwrap_or_else(|e| fail(e));
            let output = tokens_json(&tokens).unwrap_or_else(|e| fail(e));
            println!("{}", output);
        }
        other => {
            eprintln!("Format '{}' not supported for tokens", other);
            eprintln!("Available formats for tokens: simple, json");
            process::exit(1);
        }
    }
}

fn load_config(matches: &ArgMatches) -> RegmapConfig {
    let mut loader = Loader::new().with_local_file(".");
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader
            .with_format(format)
            .unwrap_or_else(|e| fail(format!("Configuration error: {}", e)));
    }
    loader
        .build()
        .unwrap_or_else(|e| fail(format!("Configuration error: {}", e)))
}

/// Handle the tree command
fn handle_tree_command(matches: &ArgMatches) {
    let debug = matches.get_flag("debug");
    init_tracing(debug);
    let config = load_config(matches);

    let path = matches.get_one::<String>("path").map(Path::new);
    let spec = parse(path, debug).unwrap_or_else(|e| {
        report_load_error(&e, config.diagnostics.source_context);
        process::exit(1);
    });

    let registry = FormatRegistry::with_json_indent(config.output.indent);
    let output = registry
        .serialize(&spec, &config.output.format)
        .unwrap_or_else(|e| {
            eprintln!("{}", e);
            eprintln!("Available formats: {}", registry.list_formats().join(", "));
            process::exit(1);
        });

    if output.ends_with('\n') {
        print!("{}", output);
    } else {
        println!("{}", output);
    }
}

fn report_load_error(err: &LoadError, show_context: bool) {
    if show_context {
        eprintln!("{}", err.with_source_context());
    } else {
        eprintln!("{}", err);
    }
}
