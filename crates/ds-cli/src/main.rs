//! docsmith — render a JSDoc block for the declaration under a cursor
//! line, or compute the prefix that continues an open comment.
//!
//! A stand-in for an editor host: source text and a line number go in,
//! formatted text and an insertion line come out. Reads stdin when no
//! file is given.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "docsmith",
    about = "Generate JSDoc blocks for the declaration under a cursor line"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a documentation block for the declaration at (or one line
    /// below) the cursor line
    Block {
        /// Source file. If omitted, reads from stdin.
        file: Option<PathBuf>,

        /// 1-based cursor line
        #[arg(short, long, default_value_t = 1)]
        line: u32,

        /// Use the plural @returns keyword
        #[arg(long)]
        returns: bool,

        /// Emit insertion line, content, and declaration as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the prefix that continues the comment found on LINE
    Continue {
        /// Text of the previous line, indentation included
        line: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    match Cli::parse().command {
        Command::Block {
            file,
            line,
            returns,
            json,
        } => block(file.as_deref(), line, returns, json),
        Command::Continue { line } => {
            println!("{}", ds_jsdoc::continuation_prefix(&line));
            Ok(())
        }
    }
}

fn block(file: Option<&Path>, line: u32, returns: bool, json: bool) -> Result<()> {
    let source = read_source(file)?;

    let Some(mut decl) = ds_parser::extract(&source, line)? else {
        anyhow::bail!("no declaration at line {line} or the line below it");
    };
    decl.returns.returns = returns;

    let content = ds_jsdoc::render(&decl);
    if json {
        let payload = serde_json::json!({
            "line": decl.location.line,
            "content": content,
            "declaration": decl,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        println!("{content}");
    }
    Ok(())
}

fn read_source(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            Ok(buffer)
        }
    }
}
