use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;
use tracing::info;

use crate::stats::InputSource;

pub const DEFAULT_INPUT_PATH: &str = "data/sample.txt";

// Sample corpus used when no input file is present
const SAMPLE_TEXT: &str = include_str!("../sample_text.txt");

pub fn sample_lines() -> Vec<&'static str> {
    SAMPLE_TEXT
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Picks the input file when it exists, otherwise the embedded sample corpus.
pub fn resolve_input(path: &Path) -> InputSource {
    if path.is_file() {
        info!(action = "resolve", component = "input", file_path = ?path, "Reading input from file");
        InputSource::File(path.to_path_buf())
    } else {
        info!(action = "resolve", component = "input", file_path = ?path, "Input file not found, using sample text data");
        InputSource::Sample
    }
}

pub fn open_input(path: &Path) -> Result<BufReader<File>> {
    let file =
        File::open(path).with_context(|| format!("Failed to open input file {:?}", path))?;
    Ok(BufReader::new(file))
}

pub fn init_sample_file(path: &Path) -> Result<()> {
    if path.exists() {
        anyhow::bail!(
            "{} already exists. Remove it first if you want to reinitialize.",
            path.display()
        );
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {:?}", parent))?;
    }

    fs::write(path, SAMPLE_TEXT)
        .with_context(|| format!("Failed to write sample text to {:?}", path))?;
    println!("Created {} with sample text", path.display());

    Ok(())
}
