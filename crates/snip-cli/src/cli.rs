use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Save, search, and run code snippets from the command line
#[derive(Parser)]
#[command(name = "snip")]
#[command(version)]
#[command(about = "Save, search, and retrieve code snippets from the command line")]
pub struct Cli {
    /// Base directory for snippet storage (overrides SNIP_HOME)
    #[arg(short, long, global = true)]
    pub dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new snippet (reads the code from stdin)
    Add {
        /// Snippet name
        name: String,

        /// Language for syntax highlighting and the file extension
        #[arg(short, long, default_value = "text")]
        language: String,

        /// Tag for the snippet (repeatable)
        #[arg(short, long = "tag")]
        tags: Vec<String>,
    },

    /// Display a snippet
    Get {
        /// Snippet name
        name: String,

        /// Also copy the code to the clipboard
        #[arg(short, long)]
        copy: bool,
    },

    /// List saved snippets
    List {
        /// Only show snippets in this language
        #[arg(short, long)]
        language: Option<String>,

        /// Only show snippets carrying this tag
        #[arg(short, long)]
        tag: Option<String>,
    },

    /// Search snippets by name, language, or tag
    Search {
        /// Search query (case-insensitive substring)
        query: String,
    },

    /// Delete a snippet
    Delete {
        /// Snippet name
        name: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Export a snippet's code to a file
    Export {
        /// Snippet name
        name: String,

        /// Destination path (default: snippet name plus its extension)
        dest: Option<PathBuf>,
    },

    /// Import a file as a new snippet
    Import {
        /// File to import
        file: PathBuf,

        /// Snippet name (default: the file name without extension)
        #[arg(short, long)]
        name: Option<String>,

        /// Language (default: detected from the file extension)
        #[arg(short, long)]
        language: Option<String>,

        /// Tag for the snippet (repeatable)
        #[arg(short, long = "tag")]
        tags: Vec<String>,
    },

    /// Execute a snippet with its interpreter
    Run {
        /// Snippet name
        name: String,

        /// Arguments passed through to the snippet
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Print the snippet storage directory
    Path,

    /// Edit a snippet's code or metadata
    Edit {
        /// Snippet name
        name: String,

        /// Change the snippet's language
        #[arg(short, long)]
        language: Option<String>,

        /// Replace all tags (repeatable)
        #[arg(short, long = "tag")]
        tags: Vec<String>,

        /// Add a tag, keeping existing ones (repeatable)
        #[arg(long = "add-tag")]
        add_tags: Vec<String>,

        /// Remove a tag (repeatable)
        #[arg(long = "remove-tag")]
        remove_tags: Vec<String>,
    },
}
