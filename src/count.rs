use rayon::prelude::*;
use std::io::BufRead;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, info};

use crate::normalize::Normalizer;
use crate::stats::FrequencyTable;

pub const DEFAULT_CHUNK_SIZE: usize = 1024;

#[derive(Error, Debug)]
pub enum CountError {
    #[error("word count cancelled")]
    Cancelled,

    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

/// Shared flag that stops pending chunk work once set.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountOptions {
    pub workers: usize,
    pub chunk_size: usize,
}

impl Default for CountOptions {
    fn default() -> Self {
        Self {
            workers: default_workers(),
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

pub fn default_workers() -> usize {
    let cpu_count = num_cpus::get();
    std::cmp::min(cpu_count, 8)
}

/// Counts every word in a single pass on the calling thread.
pub fn count_sequential<S: AsRef<str>>(lines: &[S], normalizer: &Normalizer) -> FrequencyTable {
    normalizer.words(lines).collect()
}

/// Counts words across a dedicated pool of `options.workers` threads.
///
/// Each worker folds its chunks into a private table; the partial tables are
/// merged once every chunk is done.
pub fn count_parallel<S>(
    lines: &[S],
    normalizer: &Normalizer,
    options: CountOptions,
    cancel: &CancelToken,
) -> Result<FrequencyTable, CountError>
where
    S: AsRef<str> + Sync,
{
    let start_time = Instant::now();
    info!(
        action = "start",
        component = "word_count",
        line_count = lines.len(),
        worker_count = options.workers,
        chunk_size = options.chunk_size,
        word_class = ?normalizer.class(),
        "Starting parallel word count"
    );

    let pool = build_pool(options.workers)?;
    let table = pool.install(|| count_chunks(lines, normalizer, options.chunk_size, cancel))?;

    info!(
        action = "complete",
        component = "word_count",
        unique_words = table.unique_words(),
        total_occurrences = table.total_occurrences(),
        duration_ms = start_time.elapsed().as_millis(),
        "Word count completed"
    );
    Ok(table)
}

/// Streams lines from `reader` in batches, counting each batch in parallel.
///
/// Returns the merged table and the number of non-blank lines seen.
pub fn count_reader<R: BufRead>(
    reader: R,
    normalizer: &Normalizer,
    options: CountOptions,
    cancel: &CancelToken,
) -> Result<(FrequencyTable, usize), CountError> {
    let start_time = Instant::now();
    let batch_size = options
        .chunk_size
        .max(1)
        .saturating_mul(options.workers.max(1));
    info!(
        action = "start",
        component = "stream_count",
        worker_count = options.workers,
        batch_size = batch_size,
        "Starting streaming word count"
    );

    let pool = build_pool(options.workers)?;
    let mut table = FrequencyTable::new();
    let mut batch: Vec<String> = Vec::with_capacity(batch_size.min(DEFAULT_CHUNK_SIZE));
    let mut line_count = 0usize;

    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        batch.push(line);
        line_count += 1;

        if batch.len() == batch_size {
            let partial =
                pool.install(|| count_chunks(&batch, normalizer, options.chunk_size, cancel))?;
            table = table.merge(partial);
            batch.clear();
            debug!(
                action = "batch",
                component = "stream_count",
                line_count = line_count,
                "Merged batch"
            );
        }
    }

    if cancel.is_cancelled() {
        return Err(CountError::Cancelled);
    }
    if !batch.is_empty() {
        let partial =
            pool.install(|| count_chunks(&batch, normalizer, options.chunk_size, cancel))?;
        table = table.merge(partial);
    }

    info!(
        action = "complete",
        component = "stream_count",
        line_count = line_count,
        unique_words = table.unique_words(),
        total_occurrences = table.total_occurrences(),
        duration_ms = start_time.elapsed().as_millis(),
        "Streaming word count completed"
    );
    Ok((table, line_count))
}

fn build_pool(workers: usize) -> Result<rayon::ThreadPool, CountError> {
    Ok(rayon::ThreadPoolBuilder::new()
        .num_threads(workers.max(1))
        .thread_name(|i| format!("wordtally-{i}"))
        .build()?)
}

fn count_chunks<S>(
    lines: &[S],
    normalizer: &Normalizer,
    chunk_size: usize,
    cancel: &CancelToken,
) -> Result<FrequencyTable, CountError>
where
    S: AsRef<str> + Sync,
{
    if cancel.is_cancelled() {
        return Err(CountError::Cancelled);
    }

    let partials: Vec<FrequencyTable> = lines
        .par_chunks(chunk_size.max(1))
        .try_fold(FrequencyTable::new, |mut acc, chunk| {
            if cancel.is_cancelled() {
                return Err(CountError::Cancelled);
            }
            for word in normalizer.words(chunk) {
                acc.add(word);
            }
            Ok(acc)
        })
        .collect::<Result<Vec<_>, CountError>>()?;

    debug!(
        action = "merge",
        component = "word_count",
        partial_tables = partials.len(),
        "Merging partial tables"
    );

    // Merge all results from fold operations
    Ok(partials
        .into_iter()
        .fold(FrequencyTable::new(), FrequencyTable::merge))
}
