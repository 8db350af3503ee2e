//! `json2xml` CLI — convert a JSON file into typed XML.
//!
//! ## Usage
//!
//! ```sh
//! # Convert with the default two-space indent
//! json2xml data.json data.xml
//!
//! # Four-space indent, with an XML declaration
//! json2xml --indent 4 --declaration data.json data.xml
//!
//! # Tabs, or a single-line document
//! json2xml --tabs data.json data.xml
//! json2xml --compact data.json data.xml
//!
//! # Show what is happening on stderr
//! json2xml -vv data.json data.xml
//! ```
//!
//! Running without both paths prints usage and exits successfully. Failures
//! are reported on stderr as `Error: ...` with exit code 1.

use anyhow::Context;
use clap::{ArgAction, CommandFactory, Parser};
use json2xml_core::{Json2XmlError, SerializeOptions};
use serde_json::Value;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, info};

mod error;
mod logging;

use error::CliError;

#[derive(Parser, Debug)]
#[command(
    name = "json2xml",
    version,
    about = "Convert a JSON document into typed XML"
)]
struct Cli {
    /// Input JSON file
    input: Option<PathBuf>,

    /// Output XML file (overwritten if it exists)
    output: Option<PathBuf>,

    /// Spaces per indentation level
    #[arg(long, value_name = "N", default_value_t = 2)]
    indent: usize,

    /// Indent with tabs instead of spaces
    #[arg(long, conflicts_with = "indent")]
    tabs: bool,

    /// Write everything on one line without indentation
    #[arg(long, conflicts_with_all = ["indent", "tabs"])]
    compact: bool,

    /// Start the document with an XML declaration
    #[arg(long)]
    declaration: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn serialize_options(&self) -> SerializeOptions {
        let base = if self.compact {
            SerializeOptions::compact()
        } else if self.tabs {
            SerializeOptions::tabs()
        } else {
            SerializeOptions::spaces(self.indent)
        };
        SerializeOptions {
            declaration: self.declaration,
            ..base
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose);

    let (Some(input), Some(output)) = (cli.input.as_deref(), cli.output.as_deref()) else {
        println!("{}", Cli::command().render_help());
        return ExitCode::SUCCESS;
    };

    let options = cli.serialize_options();
    debug!(input = %input.display(), output = %output.display(), ?options);

    match run(input, output, &options) {
        Ok(()) => {
            println!("XML written to {}", output.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            debug!(error = ?err, "conversion failed");
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(input: &Path, output: &Path, options: &SerializeOptions) -> Result<(), CliError> {
    let json = read_input(input)?;

    let value: Value = serde_json::from_str(&json).map_err(|source| CliError::InvalidJson {
        path: input.to_path_buf(),
        source,
    })?;

    let tree = json2xml_core::encode_document(&value).map_err(|source| {
        CliError::InvalidDocument {
            path: input.to_path_buf(),
            source,
        }
    })?;
    info!(elements = tree.node_count(), "encoded {}", input.display());

    // Serialize before touching the output so a rejected document leaves no file behind.
    let xml = json2xml_core::serialize_with(&tree, options).map_err(|source| match source {
        Json2XmlError::InvalidXmlChar { .. } => CliError::InvalidDocument {
            path: input.to_path_buf(),
            source,
        },
        other => CliError::Unexpected(anyhow::Error::new(other).context("Failed to serialize XML")),
    })?;

    write_output(output, &xml)?;
    Ok(())
}

fn read_input(path: &Path) -> Result<String, CliError> {
    match std::fs::read_to_string(path) {
        Ok(json) => {
            debug!(bytes = json.len(), "read {}", path.display());
            Ok(json)
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            Err(CliError::InputNotFound(path.to_path_buf()))
        }
        Err(err) => Err(anyhow::Error::new(err)
            .context(format!("Failed to read file: {}", path.display()))
            .into()),
    }
}

fn write_output(path: &Path, xml: &str) -> anyhow::Result<()> {
    std::fs::write(path, xml).with_context(|| format!("Failed to write file: {}", path.display()))?;
    info!(bytes = xml.len(), "wrote {}", path.display());
    Ok(())
}
