use regex::RegexSet;

use crate::error::{FameError, Result};

/// Exclusion filter over the tracked-file list, built once before any file
/// is scanned. Exact mode matches whole paths; regex mode excludes a path
/// when any pattern matches anywhere in it.
#[derive(Debug)]
pub enum ExcludeFilter {
    Exact(Vec<String>),
    Patterns(RegexSet),
}

impl ExcludeFilter {
    /// Build a filter from a comma-separated exclusion list. A comma
    /// preceded by a backslash is a literal comma, not a separator; the
    /// backslash itself cannot be escaped. Empty segments are dropped, so
    /// an empty list excludes nothing.
    pub fn parse(list: &str, regex_mode: bool) -> Result<Self> {
        let entries = split_escaped_commas(list);

        if regex_mode {
            let set = RegexSet::new(&entries)
                .map_err(|e| FameError::Config(format!("invalid exclusion pattern: {e}")))?;
            Ok(ExcludeFilter::Patterns(set))
        } else {
            Ok(ExcludeFilter::Exact(entries))
        }
    }

    pub fn is_excluded(&self, path: &str) -> bool {
        match self {
            ExcludeFilter::Exact(entries) => entries.iter().any(|e| e == path),
            ExcludeFilter::Patterns(set) => set.is_match(path),
        }
    }

    /// Lazily yield the paths that survive the filter, in input order.
    pub fn filter<'a, I>(&'a self, paths: I) -> impl Iterator<Item = &'a str>
    where
        I: IntoIterator<Item = &'a str> + 'a,
    {
        paths.into_iter().filter(move |p| !self.is_excluded(p))
    }
}

/// Split on commas not preceded by a backslash, unescaping `\,` in the
/// resulting entries.
fn split_escaped_commas(list: &str) -> Vec<String> {
    let mut entries = Vec::new();
    let mut current = String::new();
    let mut chars = list.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\\' && chars.peek() == Some(&',') {
            current.push(',');
            chars.next();
        } else if c == ',' {
            entries.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }
    entries.push(current);

    entries.retain(|e| !e.is_empty());
    entries
}
