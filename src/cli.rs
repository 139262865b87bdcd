use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "kitshelf", version, about = "Startup kit and script catalog")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        help = "Catalog source (catalog.json, a directory containing it, or `builtin`)"
    )]
    pub catalog: Option<String>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Filter kits (or scripts) by facets and free text.
    Search {
        query: Option<String>,
        #[arg(long, help = "Search scripts instead of kits")]
        scripts: bool,
        #[arg(long, help = "Category name, or `featured` for featured items")]
        category: Option<String>,
        #[arg(long, default_value = "all", help = "all, free, pro or best")]
        tier: String,
        #[arg(long = "language", help = "Language filter; repeat to allow several")]
        languages: Vec<String>,
    },
    /// Script languages with counts.
    Languages,
    /// Categories with counts.
    Categories {
        #[arg(long)]
        scripts: bool,
    },
    /// Details of one kit or script.
    Show {
        id: String,
        #[arg(long)]
        scripts: bool,
        #[arg(long, value_enum, help = "Script section to print")]
        tab: Option<ScriptTab>,
    },
    /// Folder structure of a kit.
    Tree {
        kit: String,
        #[arg(long = "expand", help = "Folder path to expand; repeatable")]
        expand: Vec<String>,
        #[arg(long)]
        expand_all: bool,
        #[arg(long)]
        search: Option<String>,
        #[arg(long, help = "Path to mark as selected")]
        select: Option<String>,
        #[arg(long, help = "Print the plain-text outline instead of rows")]
        summary: bool,
    },
    /// Preview one file or folder of a kit.
    File { kit: String, path: String },
    /// Browser sandbox link for a kit's repository.
    Sandbox { kit: String },
    /// Rank kits against answers given as flags.
    Recommend {
        #[arg(long)]
        product: Option<String>,
        #[arg(long)]
        level: Option<String>,
        #[arg(long)]
        team: Option<String>,
        #[arg(long)]
        timeline: Option<String>,
        #[arg(long)]
        priority: Option<String>,
        #[arg(long = "tech")]
        tech: Vec<String>,
    },
    /// Interactive quiz read from stdin, one answer per line.
    Quiz,
    /// Check the catalog for duplicate ids and malformed trees.
    Validate,
}

#[derive(Clone, Copy, Debug, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ScriptTab {
    Readme,
    Code,
    Requirements,
    Usage,
}
