//! Draftsmith CLI library
//!
//! This module contains the core CLI logic for the Draftsmith code generator.

pub mod error_adapter;

mod args;
mod config;
mod report;

pub use args::Args;

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use log::info;

use draftsmith::{CodeGenerator, DraftsmithError};

/// Run the Draftsmith CLI application, printing the summary to stdout.
///
/// # Errors
///
/// See [`run_with_output`].
pub fn run(args: &Args) -> Result<(), DraftsmithError> {
    let stdout = io::stdout();
    run_with_output(args, &mut stdout.lock())
}

/// Run the Draftsmith CLI application, writing the summary to `out`.
///
/// This resolves the input drawing, reports what was found, and writes one
/// Java file per class into the output directory.
///
/// # Errors
///
/// Returns `DraftsmithError` for:
/// - A missing input file (checked before anything is read)
/// - Configuration loading errors
/// - Malformed drawing markup
/// - File I/O errors
pub fn run_with_output(args: &Args, out: &mut impl Write) -> Result<(), DraftsmithError> {
    info!(
        input_path = args.input,
        output_dir = args.output_dir;
        "Processing drawing"
    );

    let input = Path::new(&args.input);
    if !input.exists() {
        return Err(DraftsmithError::MissingInput(PathBuf::from(&args.input)));
    }

    let app_config = config::load_config(args.config.as_ref())?;

    writeln!(out, "Parsing model: {}", args.input)?;
    let source = fs::read_to_string(input)?;

    let generator = CodeGenerator::new(app_config);
    let model = generator.resolve(&source)?;
    report::write_model_summary(out, &model)?;

    writeln!(out)?;
    writeln!(out, "Generating Java code to: {}", args.output_dir)?;

    let output_dir = Path::new(&args.output_dir);
    fs::create_dir_all(output_dir)?;

    let sources = generator.emit(&model);
    for source in &sources {
        fs::write(output_dir.join(source.file_name()), source.contents())?;
        writeln!(out, "  Generated: {}", source.file_name())?;
    }

    writeln!(out)?;
    writeln!(out, "Done! Generated {} Java files.", sources.len())?;

    info!(files = sources.len(); "Sources generated successfully");

    Ok(())
}
