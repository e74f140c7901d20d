//! Input line cleaning.

/// A trimmed, non-empty line of feature file text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputLine<'a> {
    /// 1-based line number in the original file.
    pub number: usize,
    /// The trimmed text. Never empty.
    pub text: &'a str,
}

impl<'a> InputLine<'a> {
    /// Create a line. Returns `None` when the text is blank after trimming.
    pub fn new(number: usize, raw: &'a str) -> Option<Self> {
        let text = raw.trim();
        if text.is_empty() {
            None
        } else {
            Some(Self { number, text })
        }
    }

    /// The whitespace-separated tokens of the line.
    pub fn tokens(&self) -> Vec<&'a str> {
        self.text.split_whitespace().collect()
    }
}

/// Trim every line of `source` and drop the blank ones.
///
/// `\n`, `\r\n` and a lone `\r` all end a line.
pub fn clean_lines(source: &str) -> Vec<InputLine<'_>> {
    source
        .split('\n')
        .flat_map(|line| line.strip_suffix('\r').unwrap_or(line).split('\r'))
        .enumerate()
        .filter_map(|(idx, raw)| InputLine::new(idx + 1, raw))
        .collect()
}
