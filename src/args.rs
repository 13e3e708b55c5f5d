use std::path::PathBuf;

use clap::Parser;

/// Translates begin/end toy programs into C++.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// Source file; stdin when no source is given.
    pub source: Option<PathBuf>,
    /// Translate this text instead of a file.
    #[clap(short, long, conflicts_with = "source")]
    pub eval: Option<String>,
    /// Translate the built-in sample program.
    #[clap(long, conflicts_with_all = ["source", "eval"])]
    pub demo: bool,
    /// Write the translation here instead of stdout.
    #[clap(short, long)]
    pub output: Option<PathBuf>,
    /// Print the token stream instead of translating.
    #[clap(long)]
    pub tokens: bool,
}
