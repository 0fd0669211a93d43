/// Space, tab, newline, vertical tab, form feed and carriage return.
///
/// Other Unicode spaces (NBSP, EM SPACE, ...) stay inside tokens and are
/// stripped later as non-word characters.
pub fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Splits a line into raw word candidates on runs of separator characters.
///
/// Leading, trailing and repeated separators never produce empty tokens, and an
/// empty line yields nothing. Tokens borrow from `line`.
pub fn tokenize(line: &str) -> impl Iterator<Item = &str> {
    line.split(is_separator).filter(|token| !token.is_empty())
}
