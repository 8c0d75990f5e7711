//! CLI argument parsing for mercato.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Default brief file path, relative to the working directory.
pub const DEFAULT_BRIEF_FILE: &str = "brief.yaml";

/// Mercato: prompt builder for Italian market-analysis briefs.
///
/// A brief is a YAML file describing the business context and the desired
/// output shape. `mercato build` renders it into a ready-to-paste prompt
/// for a conversational AI tool.
#[derive(Parser, Debug)]
#[command(name = "mercato")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for mercato.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a brief file with default values.
    ///
    /// Refuses to overwrite an existing brief unless --force is given.
    Init(InitArgs),

    /// Show the brief's current fields.
    Show(ShowArgs),

    /// Set one brief field by name.
    ///
    /// Free-text fields accept any value; enum fields (stage, tone, detail,
    /// format) reject values outside their closed sets.
    Set(SetArgs),

    /// Focus selection commands.
    ///
    /// List the analysis focus catalog or toggle a selection.
    Focus(FocusCommand),

    /// Assemble the prompt from the brief.
    ///
    /// Prints the prompt to stdout, or writes it to a file with --output.
    Build(BuildArgs),
}

/// Arguments for the `init` command.
#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Path of the brief file to create.
    #[arg(long, default_value = DEFAULT_BRIEF_FILE)]
    pub file: PathBuf,

    /// Overwrite an existing brief file.
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `show` command.
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Path of the brief file.
    #[arg(long, default_value = DEFAULT_BRIEF_FILE)]
    pub file: PathBuf,
}

/// Arguments for the `set` command.
#[derive(Parser, Debug)]
pub struct SetArgs {
    /// Field name (e.g., industry, tone, format).
    pub field: String,

    /// New value. Empty string clears a free-text field.
    pub value: String,

    /// Path of the brief file.
    #[arg(long, default_value = DEFAULT_BRIEF_FILE)]
    pub file: PathBuf,
}

/// Focus subcommands.
#[derive(Parser, Debug)]
pub struct FocusCommand {
    #[command(subcommand)]
    pub action: FocusAction,
}

/// Available focus actions.
#[derive(Subcommand, Debug)]
pub enum FocusAction {
    /// List the focus catalog with active markers.
    List(FocusListArgs),

    /// Toggle a focus selection.
    ///
    /// Toggling `all` selects the full catalog; removing the last explicit
    /// focus also falls back to `all`.
    Toggle(FocusToggleArgs),
}

/// Arguments for the `focus list` command.
#[derive(Parser, Debug)]
pub struct FocusListArgs {
    /// Path of the brief file.
    #[arg(long, default_value = DEFAULT_BRIEF_FILE)]
    pub file: PathBuf,
}

/// Arguments for the `focus toggle` command.
#[derive(Parser, Debug)]
pub struct FocusToggleArgs {
    /// Focus identifier to toggle, or "all".
    pub id: String,

    /// Path of the brief file.
    #[arg(long, default_value = DEFAULT_BRIEF_FILE)]
    pub file: PathBuf,
}

/// Arguments for the `build` command.
#[derive(Parser, Debug)]
pub struct BuildArgs {
    /// Path of the brief file.
    #[arg(long, default_value = DEFAULT_BRIEF_FILE)]
    pub file: PathBuf,

    /// Write the prompt to a file instead of stdout.
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Emit a JSON object with the prompt and the resolved focus list.
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
