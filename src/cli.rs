use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gmemo", version)]
#[command(about = "Summarize text in three lines with Gemini and copy it as a memo", long_about = None)]
pub struct Cli {
    /// API key file (defaults to GEMINI_API_KEY.txt next to the executable)
    #[arg(long, global = true, value_name = "PATH")]
    pub key_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Summarize once without the interactive window
    Summarize {
        /// Text to summarize; '-' reads stdin, omitted opens $EDITOR
        text: Option<String>,

        /// Print the memo to stdout instead of copying it
        #[arg(short, long)]
        print: bool,
    },
}
