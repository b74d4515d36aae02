use std::io::Write;

use anyhow::Context;

pub mod cli;
mod error;
mod executable;
mod lookup;
mod path_list;

pub use error::LookupError;
pub use executable::is_executable;
pub use lookup::{lookup_all, lookup_executable, Lookup, LookupOptions};
pub use path_list::PathList;

/// Runs one lookup and writes the result to `output`.
///
/// Returns whether anything was found. When nothing was, `Not found` is
/// written instead.
pub fn run<W: Write>(args: &cli::Args, output: &mut W) -> anyhow::Result<bool> {
    let lookup = Lookup::new(LookupOptions::from(args));
    let found = if args.all {
        lookup.find_all(&args.name, &args.path)
    } else {
        lookup
            .find(&args.name, &args.path)
            .map(|found| found.into_iter().collect::<Vec<_>>())
    }
    .with_context(|| format!("cannot look up `{}`", args.name))?;

    if found.is_empty() {
        writeln!(output, "Not found")?;
        return Ok(false);
    }
    for path in &found {
        writeln!(output, "{}", path.display())?;
    }
    Ok(true)
}

#[cfg(all(test, unix))]
fn run_test_with_args(args: &[&str]) -> anyhow::Result<(bool, String)> {
    use clap::Parser;

    let args = cli::Args::try_parse_from(std::iter::once("path-lookup").chain(args.iter().copied()))?;
    let mut output = Vec::new();
    let found = run(&args, &mut output)?;
    Ok((found, String::from_utf8(output)?))
}
