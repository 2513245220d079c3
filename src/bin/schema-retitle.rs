//! Schema Retitle CLI
//!
//! Command-line interface for rewriting schema display names in generated
//! API description documents.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use schema_retitle::{
    load_document_auto, preview_document, render_document, separator_mapper, transform_document,
    write_document, GeneratorSettings, Outcome, PreviewEntry, TransformOptions, TransformReport,
};

#[derive(Parser)]
#[command(name = "schema-retitle")]
#[command(about = "Rewrite schema display names in generated API documents")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rewrite schema names in a document and emit the result
    Apply {
        /// Document source: file path or URL (http:// or https://)
        document: String,

        /// Nested-name separator to replace in canonical names
        #[arg(long, default_value = "+")]
        separator: String,

        /// Replacement for the separator
        #[arg(long, default_value = ".")]
        replacement: String,

        /// Also rename value-like and text schemas (skipped by default)
        #[arg(long)]
        include_value_types: bool,

        /// Output file (stdout if not specified)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Show what a rewrite would change, without modifying anything
    Preview {
        /// Document source: file path or URL (http:// or https://)
        document: String,

        /// Nested-name separator to replace in canonical names
        #[arg(long, default_value = "+")]
        separator: String,

        /// Replacement for the separator
        #[arg(long, default_value = ".")]
        replacement: String,

        /// Also rename value-like and text schemas (skipped by default)
        #[arg(long)]
        include_value_types: bool,

        /// Output results as JSON (for automation)
        #[arg(long)]
        json: bool,

        /// Only show schemas that would change
        #[arg(long, short)]
        quiet: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Apply {
            document,
            separator,
            replacement,
            include_value_types,
            output,
            pretty,
        } => run_apply(
            &document,
            &separator,
            &replacement,
            include_value_types,
            output,
            pretty,
        ),

        Commands::Preview {
            document,
            separator,
            replacement,
            include_value_types,
            json,
            quiet,
        } => run_preview(
            &document,
            &separator,
            &replacement,
            include_value_types,
            json,
            quiet,
        ),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(code) => ExitCode::from(code),
    }
}

fn build_settings(separator: &str, replacement: &str, include_value_types: bool) -> GeneratorSettings {
    let mut settings = GeneratorSettings::new();
    settings.add_display_names(
        separator_mapper(separator, replacement),
        TransformOptions::new().include_value_types(include_value_types),
    );
    settings
}

fn run_apply(
    source: &str,
    separator: &str,
    replacement: &str,
    include_value_types: bool,
    output: Option<PathBuf>,
    pretty: bool,
) -> Result<(), u8> {
    let mut document = load_document_auto(source).map_err(|e| {
        eprintln!("Error: {}", e);
        e.exit_code() as u8
    })?;

    let settings = build_settings(separator, replacement, include_value_types);
    transform_document(&mut document, &settings).map_err(|e| {
        eprintln!("Error: {}", e);
        e.exit_code() as u8
    })?;

    match output {
        Some(path) => {
            write_document(&path, &document, pretty).map_err(|e| {
                eprintln!("Error: {}", e);
                e.exit_code() as u8
            })?;
        }
        None => {
            println!("{}", render_document(&document, pretty));
        }
    }

    Ok(())
}

fn run_preview(
    source: &str,
    separator: &str,
    replacement: &str,
    include_value_types: bool,
    json: bool,
    quiet: bool,
) -> Result<(), u8> {
    let document = load_document_auto(source).map_err(|e| {
        eprintln!("Error: {}", e);
        e.exit_code() as u8
    })?;

    let settings = build_settings(separator, replacement, include_value_types);
    let entries = preview_document(&document, &settings).map_err(|e| {
        eprintln!("Error: {}", e);
        e.exit_code() as u8
    })?;

    let mut report = TransformReport::default();
    for entry in &entries {
        match entry.outcome {
            Outcome::Transformed => report.transformed += 1,
            Outcome::SkippedValueType => report.skipped_value_types += 1,
            Outcome::SkippedUnidentified => report.skipped_unidentified += 1,
        }
    }

    if json {
        let output = serde_json::json!({
            "schemas": entries,
            "report": report,
        });
        println!("{}", serde_json::to_string_pretty(&output).unwrap());
        return Ok(());
    }

    if !quiet {
        println!("Previewing {} ...\n", source);
    }

    for entry in &entries {
        match entry.outcome {
            Outcome::Transformed => print_change(entry),
            Outcome::SkippedValueType => {
                if !quiet {
                    println!("  \x1b[33m-\x1b[0m {} (value type)", entry.name);
                }
            }
            Outcome::SkippedUnidentified => {
                if !quiet {
                    println!("  \x1b[33m-\x1b[0m {} (unidentified)", entry.name);
                }
            }
        }
    }

    println!(
        "\n\x1b[32m✓\x1b[0m {} schemas: {} retitled, {} value types skipped, {} unidentified",
        report.total(),
        report.transformed,
        report.skipped_value_types,
        report.skipped_unidentified
    );

    Ok(())
}

fn print_change(entry: &PreviewEntry) {
    match entry.after.as_deref() {
        Some(after) => println!("  \x1b[32m~\x1b[0m {} -> {}", entry.before, after),
        None => println!("  \x1b[32m~\x1b[0m {} -> (cleared)", entry.before),
    }
}
