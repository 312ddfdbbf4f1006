// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Scadgen Team

//! Scadgen CLI

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use scadgen::dsl::*;
use scadgen::{export_scad, render_with_globals, Expr, SourceListing, Value};

#[derive(Parser)]
#[command(name = "scadgen")]
#[command(about = "Scadgen - generate OpenSCAD source from Rust builders", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Emit the built-in demo model as OpenSCAD source
    Demo {
        /// Output .scad file (stdout when omitted)
        #[arg(short, long, value_name = "FILE")]
        output: Option<String>,

        /// Global assignment prepended to the output, repeatable
        #[arg(short, long = "set", value_name = "KEY=VALUE")]
        set: Vec<String>,

        /// Embed this generator's source as a comment header
        #[arg(long)]
        source_comment: bool,
    },

    /// Show version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Demo {
            output,
            set,
            source_comment,
        } => demo_command(output.as_deref(), set, *source_comment, cli.verbose),
        Commands::Version => {
            println!("Scadgen v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn demo_command(
    output: Option<&str>,
    set: &[String],
    source_comment: bool,
    verbose: bool,
) -> Result<()> {
    let globals = set
        .iter()
        .map(|pair| parse_global(pair))
        .collect::<Result<Vec<_>>>()?;
    let global_refs: Vec<(&str, Value)> = globals
        .iter()
        .map(|(key, value)| (key.as_str(), value.clone()))
        .collect();

    let model = demo_model();
    if verbose {
        println!("Demo tree resolves to root call: {}", model.resolve().name());
    }

    match output {
        Some(path) => {
            let listing = source_comment.then_some(SourceListing {
                label: "src/bin/cli.rs",
                text: include_str!("cli.rs"),
            });
            export_scad(model, path, &global_refs, listing)?;
            println!("{} wrote {}", "ok:".green().bold(), path);
        }
        None => {
            println!("{}", render_with_globals(model, &global_refs));
        }
    }

    Ok(())
}

/// A small bracket: a centered base plate with two mounting holes drilled
/// out and a boss merged on top. Exercises primitives, both boolean
/// operators, chaining, and the directional helpers.
fn demo_model() -> Expr {
    let plate = centered_cube(40.0, 40.0, 6.0, [Axis::X, Axis::Y]);

    let hole = cylinder((10.0, 2.5)).kwarg("$fn", 48) >> down(2.0);
    let holes = (hole.clone() >> left(14.0)) + (hole >> right(14.0));

    let boss = cylinder((8.0, 6.0)).kwarg("$fn", 64) >> up(6.0);

    Expr::from((plate - holes) + boss)
}

fn parse_global(pair: &str) -> Result<(String, Value)> {
    let (key, raw) = pair
        .split_once('=')
        .ok_or_else(|| anyhow!("Invalid --set value (expected KEY=VALUE): {}", pair))?;

    let value = if let Ok(n) = raw.parse::<i64>() {
        Value::Int(n)
    } else if let Ok(x) = raw.parse::<f64>() {
        Value::Float(x)
    } else if let Ok(b) = raw.parse::<bool>() {
        Value::Bool(b)
    } else {
        Value::Str(raw.to_string())
    };

    Ok((key.to_string(), value))
}
