use anyhow::{Context, Result};
use serde::Serialize;
use std::fmt;
use std::time::Instant;
use tracing::info;

use crate::count::{self, CancelToken, CountOptions};
use crate::input;
use crate::normalize::{Normalizer, WordClass};
use crate::stats::{AnalysisResult, HistogramEntry, InputSource, RankedEntry};
use crate::utils::format_number;
use crate::Args;

const RULE_WIDTH: usize = 60;

pub fn analyze_corpus(args: &Args, cancel: &CancelToken) -> Result<AnalysisResult> {
    let total_start_time = Instant::now();
    info!(
        action = "start",
        component = "analysis",
        "Starting word count analysis"
    );

    let class = if args.unicode {
        WordClass::Unicode
    } else {
        WordClass::Ascii
    };
    let normalizer = Normalizer::new(class).context("Failed to compile word pattern")?;
    let options = CountOptions {
        workers: args.workers.unwrap_or_else(count::default_workers),
        chunk_size: args.chunk_size,
    };

    let source = input::resolve_input(&args.input);
    let (table, lines) = match &source {
        InputSource::File(path) => {
            let reader = input::open_input(path)?;
            count::count_reader(reader, &normalizer, options, cancel)
                .with_context(|| format!("Failed to count words in {:?}", path))?
        }
        InputSource::Sample => {
            let lines = input::sample_lines();
            let table = count::count_parallel(&lines, &normalizer, options, cancel)
                .context("Failed to count words in sample text")?;
            (table, lines.len())
        }
    };

    let report = table.report();

    info!(
        action = "complete",
        component = "analysis",
        input_lines = lines,
        unique_words = report.unique_words,
        total_occurrences = report.total_occurrences,
        duration_ms = total_start_time.elapsed().as_millis(),
        "Analysis completed successfully"
    );

    Ok(AnalysisResult {
        source,
        lines,
        report,
    })
}

fn source_label(source: &InputSource) -> String {
    match source {
        InputSource::File(path) => path.display().to_string(),
        InputSource::Sample => "built-in sample text".to_string(),
    }
}

fn write_report<W: fmt::Write>(
    out: &mut W,
    result: &AnalysisResult,
    top: usize,
    histogram: usize,
) -> fmt::Result {
    let report = &result.report;
    let heavy = "=".repeat(RULE_WIDTH);
    let light = "-".repeat(RULE_WIDTH);

    writeln!(out, "\n{heavy}")?;
    writeln!(out, "WORD COUNT RESULTS")?;
    writeln!(out, "{heavy}")?;
    writeln!(
        out,
        "Source: {} ({} lines)",
        source_label(&result.source),
        format_number(result.lines as u64)
    )?;
    writeln!(out, "Total unique words: {}", format_number(report.unique_words))?;
    writeln!(
        out,
        "Total word occurrences: {}",
        format_number(report.total_occurrences)
    )?;

    let ranked = report.top(top);
    let word_width = ranked
        .iter()
        .map(|entry| entry.word.chars().count())
        .max()
        .unwrap_or(0)
        .max("word".len());

    writeln!(out, "\nTop {} most frequent words:", ranked.len())?;
    writeln!(out, "{light}")?;
    writeln!(out, "{:<word_width$}  count", "word")?;
    for entry in ranked {
        writeln!(
            out,
            "{:<word_width$}  {}",
            entry.word,
            format_number(entry.count)
        )?;
    }

    writeln!(out, "\nWord frequency distribution:")?;
    writeln!(out, "{light}")?;
    writeln!(out, "{:<10}  words_with_this_frequency", "count")?;
    for entry in report.top_histogram(histogram) {
        writeln!(
            out,
            "{:<10}  {}",
            format_number(entry.count),
            format_number(entry.words)
        )?;
    }

    Ok(())
}

pub fn render_report(result: &AnalysisResult, top: usize, histogram: usize) -> Result<String> {
    let mut out = String::new();
    write_report(&mut out, result, top, histogram).context("Failed to render report")?;
    Ok(out)
}

pub fn print_report(result: &AnalysisResult, args: &Args) -> Result<()> {
    print!("{}", render_report(result, args.top, args.histogram)?);
    Ok(())
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    source: &'a InputSource,
    lines: usize,
    unique_words: u64,
    total_occurrences: u64,
    top_words: &'a [RankedEntry],
    frequency_distribution: &'a [HistogramEntry],
}

pub fn render_json_report(result: &AnalysisResult, top: usize, histogram: usize) -> Result<String> {
    let report = &result.report;
    let json = JsonReport {
        source: &result.source,
        lines: result.lines,
        unique_words: report.unique_words,
        total_occurrences: report.total_occurrences,
        top_words: report.top(top),
        frequency_distribution: report.top_histogram(histogram),
    };
    serde_json::to_string_pretty(&json).context("Failed to serialize report")
}

pub fn print_json_report(result: &AnalysisResult, args: &Args) -> Result<()> {
    println!("{}", render_json_report(result, args.top, args.histogram)?);
    Ok(())
}
