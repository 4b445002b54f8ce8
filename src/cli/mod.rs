use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "brochure")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file (defaults to <config dir>/brochure/config.toml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Where the business profile and site URL come from
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Business profile in TOML (defaults to the built-in sample)
    #[arg(long, value_name = "FILE")]
    pub profile: Option<PathBuf>,

    /// Canonical URL the site is published at
    #[arg(long, env = "BROCHURE_SITE_URL", value_name = "URL")]
    pub site_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SchemaKind {
    /// Local business listing
    Business,
    /// FAQ page
    Faq,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the site and write it to a directory
    Build {
        #[command(flatten)]
        source: SourceArgs,

        /// Output directory
        #[arg(short, long, value_name = "DIRECTORY")]
        out: Option<PathBuf>,

        /// Also write site.tar.gz
        #[arg(long)]
        archive: bool,
    },

    /// Print the rendered page to stdout
    Render {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Print the structured-data documents
    Schema {
        #[command(flatten)]
        source: SourceArgs,

        /// Only print one document
        #[arg(long, value_enum)]
        kind: Option<SchemaKind>,
    },

    /// Check that structured data matches the visible page
    Check {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Serve the generated site locally for preview
    Serve {
        #[command(flatten)]
        source: SourceArgs,

        /// Address to listen on
        #[arg(long, value_name = "ADDR")]
        addr: Option<String>,
    },

    /// Show version information
    Version,
}
