pub mod args;
pub mod count;
pub mod input;
pub mod normalize;
pub mod report;
pub mod stats;
pub mod tokenize;
pub mod utils;

pub use args::Args;
pub use count::{count_parallel, count_reader, count_sequential, CancelToken, CountError, CountOptions};
pub use input::init_sample_file;
pub use normalize::{Normalizer, WordClass};
pub use report::analyze_corpus;
pub use stats::{AnalysisResult, FrequencyTable, HistogramEntry, RankedEntry, WordCountReport};
pub use tokenize::tokenize;
