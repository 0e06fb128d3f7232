//! `smalljson` CLI — minify, pretty-print, validate and query JSON documents.
//!
//! ## Usage
//!
//! ```sh
//! # Canonical (minified, key-ordered) form, stdin → stdout
//! echo '{ "b": 1, "a": [true] }' | smalljson minify
//!
//! # Pretty-print a file into another file
//! smalljson pretty --indent 4 -i data.json -o data.pretty.json
//!
//! # Validate only
//! smalljson check -i data.json
//!
//! # Extract a node by dotted path (array positions are numbers)
//! smalljson get users.0.email -i data.json
//! ```

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use smalljson_core::{ParseOptions, Value, DEFAULT_MAX_DEPTH};
use std::io::{self, Read};

#[derive(Parser)]
#[command(
    name = "smalljson",
    version,
    about = "Minify, pretty-print, validate and query JSON"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Input/output options shared by every subcommand.
#[derive(Args)]
struct Io {
    /// Input file (reads from stdin if omitted)
    #[arg(short, long)]
    input: Option<String>,
    /// Output file (writes to stdout if omitted)
    #[arg(short, long)]
    output: Option<String>,
    /// Maximum nesting depth of arrays and objects
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the canonical minified form
    Minify {
        #[command(flatten)]
        io: Io,
    },
    /// Print an indented form
    Pretty {
        #[command(flatten)]
        io: Io,
        /// Spaces per nesting level
        #[arg(long, default_value_t = 2)]
        indent: usize,
    },
    /// Parse only; print `ok` if the document is valid
    Check {
        #[command(flatten)]
        io: Io,
    },
    /// Print the node at a dotted path such as `users.0.email`
    Get {
        /// Dot-separated path; numeric segments index arrays
        path: String,
        #[command(flatten)]
        io: Io,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Minify { io } => {
            let doc = read_document(&io)?;
            write_output(io.output.as_deref(), &smalljson_core::encode(&doc))?;
        }
        Commands::Pretty { io, indent } => {
            let doc = read_document(&io)?;
            write_output(
                io.output.as_deref(),
                &smalljson_core::encode_pretty(&doc, indent),
            )?;
        }
        Commands::Check { io } => {
            read_document(&io)?;
            write_output(io.output.as_deref(), "ok")?;
        }
        Commands::Get { path, io } => {
            let doc = read_document(&io)?;
            let node = lookup(&doc, &path)?;
            write_output(io.output.as_deref(), &node.to_string())?;
        }
    }

    Ok(())
}

/// Read the input and parse it with the configured depth limit.
fn read_document(io: &Io) -> Result<Value> {
    let text = read_input(io.input.as_deref())?;
    let options = ParseOptions {
        max_depth: io.max_depth,
    };
    let source = io.input.as_deref().unwrap_or("<stdin>");
    smalljson_core::parse_with(&text, &options)
        .with_context(|| format!("Failed to parse JSON from {}", source))
}

/// Walk a dotted path. A numeric segment indexes an array; anything else is an
/// object key. An empty path addresses the root.
fn lookup<'v>(root: &'v Value, path: &str) -> Result<&'v Value> {
    let mut node = root;
    if path.is_empty() {
        return Ok(node);
    }
    for segment in path.split('.') {
        node = match (node, segment.parse::<usize>()) {
            (Value::Array(_), Ok(index)) => node.at(index),
            _ => node.at(segment),
        }
        .with_context(|| format!("Path segment '{}' not found in '{}'", segment, path))?;
    }
    Ok(node)
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
