use crate::constants::TOKEN_SEPARATOR;

/// In-memory copy of a WD input document: an ordered list of lines.
///
/// Lines are stored verbatim. The line count and order never change;
/// an edit replaces exactly one line, and only edited lines are ever
/// re-tokenized, so untouched text survives byte for byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
    trailing_newline: bool,
}

impl Document {
    /// Split raw file text into lines, remembering whether the text
    /// ended with a newline so `render` can reproduce it.
    pub fn parse(text: &str) -> Self {
        Self {
            lines: text.lines().map(str::to_owned).collect(),
            trailing_newline: text.ends_with('\n'),
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    /// Whitespace-tokenized view of one line's token at `token_index`.
    /// `None` when either index is out of range.
    pub fn token(&self, line_index: usize, token_index: usize) -> Option<&str> {
        self.lines
            .get(line_index)?
            .split_whitespace()
            .nth(token_index)
    }

    /// Replace one token and rebuild the line with the canonical
    /// separator. Returns `false` (leaving the document untouched)
    /// when either index is out of range.
    pub fn replace_token(&mut self, line_index: usize, token_index: usize, value: &str) -> bool {
        let Some(line) = self.lines.get_mut(line_index) else {
            return false;
        };
        let mut tokens: Vec<&str> = line.split_whitespace().collect();
        let Some(slot) = tokens.get_mut(token_index) else {
            return false;
        };
        *slot = value;
        *line = tokens.join(TOKEN_SEPARATOR);
        true
    }

    /// Full document text, with the original trailing-newline state.
    pub fn render(&self) -> String {
        let mut text = self.lines.join("\n");
        if self.trailing_newline {
            text.push('\n');
        }
        text
    }
}
