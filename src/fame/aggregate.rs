use crate::error::{FameError, Result};
use crate::model::{AuthorMap, StatKey, Totals};
use crate::util::ext_key;
use regex::Regex;
use std::collections::BTreeMap;

/// Fold one file's line-porcelain blame stream into the author map. Every
/// line prefixed `author ` attributes one source line; the metadata lines
/// around it (`author-mail`, `author-time`, ...) don't carry the prefix and
/// are ignored.
pub fn aggregate_blame(stats: &mut AuthorMap, path: &str, blame: &str, bytype: bool) {
    for line in blame.lines() {
        let Some(author) = line.strip_prefix("author ") else {
            continue;
        };

        let entry = stats.entry(author.to_string()).or_default();
        entry.loc += 1;
        entry.files.insert(path.to_string());

        if bytype {
            let exts = entry.by_extension.get_or_insert_with(BTreeMap::new);
            *exts.entry(ext_key(path).to_string()).or_insert(0) += 1;
        }
    }
}

/// Merge shortlog commit counts into the author map. Blame and shortlog
/// must report byte-identical display names for an author's rows to merge;
/// a name that only shows up here gets an entry with no lines or files.
pub fn reconcile_commits(stats: &mut AuthorMap, shortlog: &str) -> Result<()> {
    let line_re = Regex::new(r"^\s*(\d+)\s+(.*?)\s+<([^>]*)>$")
        .map_err(|e| FameError::Parse(e.to_string()))?;

    for line in shortlog.lines() {
        let Some(caps) = line_re.captures(line) else {
            continue;
        };
        let count: u64 = caps[1].parse().unwrap_or(0);
        stats.entry(caps[2].to_string()).or_default().commits += count;
    }

    Ok(())
}

/// Sum each statistic across all authors. Collection-valued statistics
/// contribute their cardinality, so a file touched by three authors counts
/// three times toward the `files` total.
pub fn compute_totals(stats: &AuthorMap) -> Totals {
    StatKey::ALL
        .iter()
        .map(|&key| {
            let sum = stats.values().map(|s| s.stat(key).magnitude()).sum();
            (key.as_str(), sum)
        })
        .collect()
}
