use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "codescribe")]
#[command(about = "A tool to manage code snippets")]
#[command(long_about = "CodeScribe is a command-line tool to help programmers organize and manage their code snippets.")]
#[command(version)]
pub struct Cli {
    /// Snippet database file (defaults to the platform data directory)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Configuration file (defaults to the platform config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Show debug logging
    #[arg(long, short = 'v', global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create a new code snippet
    Create(SnippetArgs),

    /// Copy a snippet to the clipboard
    Copy(CopyArgs),

    /// Edit a snippet
    Edit(EditArgs),

    /// List all saved snippets with IDs
    List(ListArgs),

    /// Search snippets by title, description or tags
    Search(SearchArgs),

    /// Print a single snippet
    Show(ShowArgs),
}

/// Field values given on the command line. With none of them set the
/// interactive form opens instead.
#[derive(Args, Default)]
pub struct SnippetArgs {
    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    /// Comma-separated tags
    #[arg(long)]
    pub tags: Option<String>,

    /// Snippet body
    #[arg(long, conflicts_with = "code_file")]
    pub code: Option<String>,

    /// Read the snippet body from a file
    #[arg(long)]
    pub code_file: Option<PathBuf>,

    #[arg(long)]
    pub language: Option<String>,
}

impl SnippetArgs {
    /// true when no field flag was passed
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.tags.is_none()
            && self.code.is_none()
            && self.code_file.is_none()
            && self.language.is_none()
    }
}

#[derive(Parser)]
pub struct CopyArgs {
    /// ID of the snippet to copy
    pub id: i64,
}

#[derive(Parser)]
pub struct EditArgs {
    /// ID of the snippet to edit
    pub id: i64,

    #[command(flatten)]
    pub fields: SnippetArgs,
}

#[derive(Parser, Default)]
pub struct ListArgs {
    /// Filter snippets by programming language
    #[arg(long)]
    pub language: Option<String>,

    /// Print a table instead of the interactive picker
    #[arg(long, default_value_t = false)]
    pub plain: bool,

    /// Output as JSON
    #[arg(long, default_value_t = false, conflicts_with = "plain")]
    pub json: bool,
}

#[derive(Parser)]
pub struct SearchArgs {
    /// Case-sensitive text to look for in title, description and tags
    pub keyword: String,

    /// Output as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Parser)]
pub struct ShowArgs {
    /// ID of the snippet to print
    pub id: i64,

    /// Output as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}
