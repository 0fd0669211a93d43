use serde::Serialize;
use std::collections::HashMap;
use std::path::PathBuf;

/// Occurrence counts per normalized word.
///
/// Every key maps to a count of at least 1. The running total of occurrences is
/// kept alongside the map so it never needs recomputing from the input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<String, u64>,
    total: u64,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, word: String) {
        self.add_count(word, 1);
    }

    fn add_count(&mut self, word: String, count: u64) {
        *self.counts.entry(word).or_insert(0) += count;
        self.total += count;
    }

    /// Folds another partial table into this one by summing shared keys.
    ///
    /// Associative and commutative, so partial tables may be merged in any order.
    pub fn merge(self, other: FrequencyTable) -> FrequencyTable {
        // Drain the smaller table into the larger one.
        let (mut into, from) = if self.counts.len() >= other.counts.len() {
            (self, other)
        } else {
            (other, self)
        };
        for (word, count) in from.counts {
            into.add_count(word, count);
        }
        into
    }

    pub fn get(&self, word: &str) -> Option<u64> {
        self.counts.get(word).copied()
    }

    pub fn unique_words(&self) -> u64 {
        self.counts.len() as u64
    }

    pub fn total_occurrences(&self) -> u64 {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(word, count)| (word.as_str(), *count))
    }

    /// Every word with its count, by count descending then word ascending.
    pub fn ranked(&self) -> Vec<RankedEntry> {
        let mut ranked: Vec<RankedEntry> = self
            .counts
            .iter()
            .map(|(word, count)| RankedEntry {
                word: word.clone(),
                count: *count,
            })
            .collect();
        ranked.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
        ranked
    }

    /// How many distinct words share each count, by count descending.
    pub fn histogram(&self) -> Vec<HistogramEntry> {
        let mut by_count: HashMap<u64, u64> = HashMap::new();
        for count in self.counts.values() {
            *by_count.entry(*count).or_insert(0) += 1;
        }

        let mut histogram: Vec<HistogramEntry> = by_count
            .into_iter()
            .map(|(count, words)| HistogramEntry { count, words })
            .collect();
        histogram.sort_by(|a, b| b.count.cmp(&a.count));
        histogram
    }

    pub fn report(&self) -> WordCountReport {
        WordCountReport {
            unique_words: self.unique_words(),
            total_occurrences: self.total_occurrences(),
            ranked: self.ranked(),
            histogram: self.histogram(),
        }
    }
}

impl FromIterator<String> for FrequencyTable {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        let mut table = FrequencyTable::new();
        for word in iter {
            table.add(word);
        }
        table
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedEntry {
    pub word: String,
    pub count: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HistogramEntry {
    /// An occurrence count.
    pub count: u64,
    /// Number of distinct words that occur exactly `count` times.
    pub words: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WordCountReport {
    pub unique_words: u64,
    pub total_occurrences: u64,
    pub ranked: Vec<RankedEntry>,
    pub histogram: Vec<HistogramEntry>,
}

impl WordCountReport {
    pub fn top(&self, k: usize) -> &[RankedEntry] {
        &self.ranked[..k.min(self.ranked.len())]
    }

    pub fn top_histogram(&self, k: usize) -> &[HistogramEntry] {
        &self.histogram[..k.min(self.histogram.len())]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "path", rename_all = "snake_case")]
pub enum InputSource {
    File(PathBuf),
    Sample,
}

#[derive(Debug, Serialize)]
pub struct AnalysisResult {
    pub source: InputSource,
    pub lines: usize,
    pub report: WordCountReport,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(words: &[&str]) -> FrequencyTable {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn entry(word: &str, count: u64) -> RankedEntry {
        RankedEntry {
            word: word.to_string(),
            count,
        }
    }

    #[test]
    fn counts_and_totals() {
        let t = table(&["a", "a", "b"]);
        assert_eq!(t.get("a"), Some(2));
        assert_eq!(t.get("b"), Some(1));
        assert_eq!(t.get("c"), None);
        assert_eq!(t.unique_words(), 2);
        assert_eq!(t.total_occurrences(), 3);
    }

    #[test]
    fn total_matches_sum_of_counts() {
        let t = table(&["x", "y", "x", "z", "x", "y"]);
        let sum: u64 = t.iter().map(|(_, c)| c).sum();
        assert_eq!(t.total_occurrences(), sum);
        assert_eq!(sum, 6);
    }

    #[test]
    fn ranked_breaks_ties_by_word() {
        let t = table(&["pear", "apple", "fig", "pear", "apple", "kiwi", "pear"]);
        assert_eq!(
            t.ranked(),
            vec![entry("pear", 3), entry("apple", 2), entry("fig", 1), entry("kiwi", 1)]
        );
    }

    #[test]
    fn histogram_groups_by_count() {
        let t = table(&["a", "a", "b", "c", "c", "d", "e", "e", "e"]);
        assert_eq!(
            t.histogram(),
            vec![
                HistogramEntry { count: 3, words: 1 },
                HistogramEntry { count: 2, words: 2 },
                HistogramEntry { count: 1, words: 2 },
            ]
        );
    }

    #[test]
    fn merge_sums_shared_keys() {
        let left = table(&["a", "b", "b"]);
        let right = table(&["b", "c"]);
        let merged = left.clone().merge(right.clone());
        assert_eq!(merged, table(&["a", "b", "b", "b", "c"]));
        assert_eq!(right.merge(left), merged);
    }

    #[test]
    fn merge_with_empty_is_identity() {
        let t = table(&["a", "b", "b"]);
        assert_eq!(t.clone().merge(FrequencyTable::new()), t);
        assert_eq!(FrequencyTable::new().merge(t.clone()), t);
    }

    #[test]
    fn report_truncation() {
        let report = table(&["a", "a", "b"]).report();
        assert_eq!(report.top(1), &[entry("a", 2)]);
        assert_eq!(report.top(50).len(), 2);
        assert_eq!(
            report.top_histogram(10),
            &[
                HistogramEntry { count: 2, words: 1 },
                HistogramEntry { count: 1, words: 1 }
            ]
        );
        assert!(report.top(0).is_empty());
    }

    #[test]
    fn empty_table_reports_nothing() {
        let report = FrequencyTable::new().report();
        assert_eq!(report.unique_words, 0);
        assert_eq!(report.total_occurrences, 0);
        assert!(report.ranked.is_empty());
        assert!(report.histogram.is_empty());
        assert!(report.top(20).is_empty());
    }
}
