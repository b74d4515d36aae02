use clap::builder::NonEmptyStringValueParser;
use clap::{ArgAction, Parser};

use crate::lookup::LookupOptions;

/// Find an executable by searching a list of directories, like a shell does with PATH.
#[derive(Debug, Parser)]
#[command(name = "path-lookup", version)]
pub struct Args {
    /// File name of the executable to look for
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    pub name: String,

    /// Directories to search, separated by the platform path separator
    pub path: String,

    /// Print every match instead of only the first one
    #[arg(short, long)]
    pub all: bool,

    /// Extension to try after the bare name (repeatable)
    #[arg(short = 'e', long = "ext", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// Expand a leading `~` in path entries to the home directory
    #[arg(long)]
    pub expand_tilde: bool,

    /// Log more to stderr (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl From<&Args> for LookupOptions {
    fn from(args: &Args) -> LookupOptions {
        LookupOptions::default()
            .with_extensions(args.extensions.iter().cloned())
            .with_tilde_expansion(args.expand_tilde)
    }
}
