use regex::Regex;

use crate::tokenize::tokenize;

/// Which characters count as part of a word.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WordClass {
    /// `[A-Za-z0-9_]`; every other character, including all non-ASCII, is stripped.
    #[default]
    Ascii,
    /// The regex engine's Unicode `\w`: letters, marks, digits and connector punctuation.
    Unicode,
}

impl WordClass {
    fn non_word_pattern(self) -> &'static str {
        match self {
            WordClass::Ascii => r"[^0-9A-Za-z_]",
            WordClass::Unicode => r"\W",
        }
    }
}

/// Turns raw tokens into normalized words: non-word characters removed, then lowercased.
#[derive(Debug, Clone)]
pub struct Normalizer {
    class: WordClass,
    non_word: Regex,
}

impl Normalizer {
    pub fn new(class: WordClass) -> Result<Self, regex::Error> {
        Ok(Self {
            class,
            non_word: Regex::new(class.non_word_pattern())?,
        })
    }

    pub fn class(&self) -> WordClass {
        self.class
    }

    /// Normalizes a single raw token. Returns `None` when nothing is left after stripping.
    pub fn normalize(&self, token: &str) -> Option<String> {
        let stripped = self.non_word.replace_all(token, "");
        if stripped.is_empty() {
            return None;
        }

        let word = match self.class {
            WordClass::Ascii => stripped.to_ascii_lowercase(),
            WordClass::Unicode => stripped.to_lowercase(),
        };
        Some(word)
    }

    /// Lazily yields the normalized words of one line.
    pub fn line_words<'a>(&'a self, line: &'a str) -> impl Iterator<Item = String> + 'a {
        tokenize(line).filter_map(move |token| self.normalize(token))
    }

    /// Lazily yields the normalized words of every line, in input order.
    pub fn words<'a, I, S>(&'a self, lines: I) -> impl Iterator<Item = String> + 'a
    where
        I: IntoIterator<Item = &'a S> + 'a,
        I::IntoIter: 'a,
        S: AsRef<str> + ?Sized + 'a,
    {
        lines
            .into_iter()
            .flat_map(move |line| self.line_words(line.as_ref()))
    }
}
