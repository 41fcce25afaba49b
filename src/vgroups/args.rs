use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "vg")]
#[command(about = "Tag scene objects and group them into query-driven Views", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Scene file to operate on
    #[arg(long, env = "VG_SCENE", global = true, default_value = "scene.json")]
    pub scene: PathBuf,

    /// Directory holding config.json
    #[arg(long, env = "VG_CONFIG_DIR", global = true)]
    pub config_dir: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add, remove and list tags
    #[command(subcommand)]
    Tag(TagCommands),

    /// Replace the selection with the named objects (none clears it)
    Select { objects: Vec<String> },

    /// Pick tags, then act on every object carrying them
    #[command(subcommand)]
    Palette(PaletteCommands),

    /// Create, edit and inspect Views
    #[command(subcommand)]
    #[command(alias = "v")]
    View(ViewCommands),

    /// Explicit View membership
    #[command(subcommand)]
    Member(MemberCommands),

    /// Toggle visibility, render visibility or selection of a View
    #[command(subcommand)]
    #[command(alias = "vis")]
    Visibility(VisibilityCommands),

    /// Check, explain and run queries
    #[command(subcommand)]
    #[command(alias = "q")]
    Query(QueryCommands),

    /// Get or set configuration
    Config {
        /// Configuration key (hide-membership-tags, tag-sort, palette-mode)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum TagCommands {
    /// Add a tag to objects (default: the selection)
    Add { tag: String, objects: Vec<String> },

    /// Remove a tag from objects (default: the selection)
    #[command(alias = "rm")]
    Remove { tag: String, objects: Vec<String> },

    /// List tags with usage counts (default: the whole scene)
    #[command(alias = "ls")]
    List { objects: Vec<String> },
}

#[derive(Subcommand, Debug)]
pub enum PaletteCommands {
    /// Pick or unpick a tag
    Toggle { tag: String },

    /// Hide objects carrying the picked tags
    Hide,

    /// Show objects carrying the picked tags
    Show,

    /// Flip visibility of objects carrying the picked tags
    Flip,

    /// Select objects carrying the picked tags
    Select,

    /// Add the picked tags to objects (default: the selection)
    Add { objects: Vec<String> },

    /// Remove the picked tags from objects (default: the selection)
    #[command(alias = "rm")]
    Remove { objects: Vec<String> },
}

#[derive(Subcommand, Debug)]
pub enum ViewCommands {
    /// Create a View and make it active
    Add { name: String },

    /// Delete a View (default: the active one)
    #[command(alias = "rm")]
    Delete { number: Option<usize> },

    /// Set a View's query (empty string clears it)
    Query {
        query: String,

        /// View number (default: the active one)
        #[arg(long)]
        view: Option<usize>,
    },

    /// Validate the query and refresh the object count
    Apply { number: Option<usize> },

    /// List Views
    #[command(alias = "ls")]
    List,

    /// List the objects in a View
    Show { number: Option<usize> },

    /// Make a View active
    Use { number: usize },
}

#[derive(Subcommand, Debug)]
pub enum MemberCommands {
    /// Add objects to a View (default: the selection)
    Add {
        objects: Vec<String>,

        /// View number (default: the active one)
        #[arg(long)]
        view: Option<usize>,
    },

    /// Remove objects from a View (default: the selection)
    #[command(alias = "rm")]
    Remove {
        objects: Vec<String>,

        /// View number (default: the active one)
        #[arg(long)]
        view: Option<usize>,
    },

    /// Drop every explicit member of a View
    Clear { number: Option<usize> },
}

#[derive(Subcommand, Debug)]
pub enum VisibilityCommands {
    /// Hide the View's objects if all are visible, otherwise show them
    Toggle { number: Option<usize> },

    /// Same, for render visibility
    Render { number: Option<usize> },

    /// Select or deselect the View's objects and their children
    Select { number: Option<usize> },
}

#[derive(Subcommand, Debug)]
pub enum QueryCommands {
    /// Check a query for errors
    Validate { query: String },

    /// Show how a query groups
    Explain { query: String },

    /// List the objects matching a query
    Match { query: String },
}
