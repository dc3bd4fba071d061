//! doxybind — convert Doxygen XML class descriptions into headers of
//! docstring constants for the Python binding.
//!
//! For each `*class*` XML file in the input directory, emits one `*_docs.h`
//! header holding a `const char*` constant per documented member. Outputs
//! record the input's mtime on their first line so unchanged files are left
//! untouched across runs.

mod ident;
mod model;
mod parser;
mod render;
mod stale;
mod text;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "doxybind",
    about = "Generate docstring-constant headers from Doxygen XML output"
)]
struct Cli {
    /// Directory containing Doxygen XML output
    input_dir: PathBuf,

    /// Destination directory for generated headers
    output_dir: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if !cli.input_dir.exists() {
        // Docs not generated yet — must never fail the surrounding build
        eprintln!("-- /!\\ Unable to build doc files (generate XML Doxygen files first)");
        return Ok(());
    }

    fs::create_dir_all(&cli.output_dir).with_context(|| {
        format!(
            "failed to create output directory: {}",
            cli.output_dir.display()
        )
    })?;

    let mut inputs: Vec<PathBuf> = fs::read_dir(&cli.input_dir)
        .with_context(|| format!("failed to read directory: {}", cli.input_dir.display()))?
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| {
            path.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.contains("class"))
        })
        .collect();
    // Sort for deterministic processing order
    inputs.sort();

    for input in &inputs {
        process_file(input, &cli.output_dir)?;
    }

    Ok(())
}

/// Parse one class-description file and write its header, unless the
/// existing output is already current.
fn process_file(input: &Path, output_dir: &Path) -> Result<()> {
    let xml_name = input
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();

    let content =
        fs::read_to_string(input).with_context(|| format!("failed to read {}", input.display()))?;
    let doc = parser::parse(&content)
        .with_context(|| format!("failed to parse {}", input.display()))?;

    let out_path = output_dir.join(output_name(&doc.source_file));

    let marker = stale::marker_line(input)?;
    if stale::is_current(stale::recorded_marker(&out_path).as_deref(), &marker) {
        return Ok(());
    }

    let mut output = String::new();
    output.push_str(&marker);
    output.push('\n');
    output.push_str("// This file has been generated by doxybind\n");
    output.push_str(&format!("// From XML file: {}\n\n", xml_name));

    for member in &doc.members {
        let doc_id = ident::anchor_id(member, &doc.source_file);
        output.push_str(&render::render_member(member, &doc_id));
    }

    fs::write(&out_path, &output)
        .with_context(|| format!("failed to write {}", out_path.display()))?;

    Ok(())
}

/// Derive the generated header name from the class's declared source file.
/// `tubex_Tube.h` → `tubex_py_Tube_docs.h`
fn output_name(source_file: &str) -> String {
    source_file
        .replace(".h", "_docs.h")
        .replace("tubex_", "tubex_py_")
}
