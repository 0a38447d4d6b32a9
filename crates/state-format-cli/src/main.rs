//! `statefmt` CLI — exercise the inspector state codec from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Display label for a transport-JSON value (stdin → stdout)
//! echo '[1,2,3]' | statefmt label
//!
//! # Editable text for a transport-JSON value
//! echo '{"foo":"__inspector_infinity__"}' | statefmt edit
//!
//! # Parse edited text back to transport JSON
//! echo '{"foo":Infinity}' | statefmt submit
//!
//! # File to file
//! statefmt edit -i value.json -o value.edit
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use state_format::{format_inspector_state_value, to_edit, to_submit, StateValue};
use std::io::{self, Read};

#[derive(Parser)]
#[command(
    name = "statefmt",
    version,
    about = "Inspector state value formatting and edit round-trip CLI"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the tree-row display label for a transport-JSON value
    Label {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Produce the editable text for a transport-JSON value
    Edit {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Parse edited text back into pretty-printed transport JSON
    Submit {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Label { input, output } => {
            let value = read_value(input.as_deref())?;
            let label = format_inspector_state_value(&value);
            write_output(output.as_deref(), &label.to_string())?;
        }
        Commands::Edit { input, output } => {
            let value = read_value(input.as_deref())?;
            let text = to_edit(&value).context("Failed to produce editable text")?;
            write_output(output.as_deref(), &text)?;
        }
        Commands::Submit { input, output } => {
            let text = read_input(input.as_deref())?;
            let value = to_submit(&text).context("Failed to parse edited text")?;
            let json = value.to_json().context("Failed to serialize value")?;
            let pretty = serde_json::to_string_pretty(&json)?;
            write_output(output.as_deref(), &pretty)?;
        }
    }

    Ok(())
}

/// Read transport JSON from a file or stdin and convert it to a state value.
fn read_value(path: Option<&str>) -> Result<StateValue> {
    let raw = read_input(path)?;
    let json: serde_json::Value =
        serde_json::from_str(raw.trim()).context("Input is not valid JSON")?;
    StateValue::from_json(&json).context("Failed to convert input to a state value")
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
