use clap::Parser;
use std::path::PathBuf;

use crate::count::DEFAULT_CHUNK_SIZE;
use crate::input::DEFAULT_INPUT_PATH;

#[derive(Parser, Debug)]
#[command(
    name = "wordtally",
    about = "Count word frequencies across lines of text",
    version,
    long_about = None
)]
pub struct Args {
    /// Input text file; the built-in sample text is used when it does not exist
    #[arg(short, long, env = "INPUT_FILE", default_value = DEFAULT_INPUT_PATH)]
    pub input: PathBuf,

    /// Number of most frequent words to display
    #[arg(short, long, default_value_t = 20)]
    pub top: usize,

    /// Number of rows of the word frequency distribution to display
    #[arg(long, default_value_t = 10)]
    pub histogram: usize,

    /// Treat Unicode letters and digits as word characters instead of ASCII only
    #[arg(long)]
    pub unicode: bool,

    /// Number of worker threads
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// Lines handed to a worker at a time
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
    pub chunk_size: usize,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Write the built-in sample text to the input path
    #[arg(long)]
    pub init: bool,
}
