use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::error::FameError;

pub const SCHEMA_VERSION: u32 = 1;

/// Per-author statistics keyed by the display name git blame reports.
/// Insertion order is first appearance, which the report relies on for
/// stable tie-breaks.
pub type AuthorMap = IndexMap<String, AuthorStats>;

/// Column totals keyed by statistic name; the map keeps keys in sorted
/// order, which is also the order the `Total` block prints in.
pub type Totals = BTreeMap<&'static str, u64>;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthorStats {
    pub loc: u64,
    pub files: BTreeSet<String>,
    pub commits: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub by_extension: Option<BTreeMap<String, u64>>,
}

impl AuthorStats {
    pub fn stat(&self, key: StatKey) -> StatValue<'_> {
        match key {
            StatKey::Loc => StatValue::Count(self.loc),
            StatKey::Commits => StatValue::Count(self.commits),
            StatKey::Files => StatValue::Collection(&self.files),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatKey {
    Loc,
    Commits,
    Files,
}

impl StatKey {
    pub const ALL: [StatKey; 3] = [StatKey::Loc, StatKey::Commits, StatKey::Files];

    pub fn as_str(self) -> &'static str {
        match self {
            StatKey::Loc => "loc",
            StatKey::Commits => "commits",
            StatKey::Files => "files",
        }
    }
}

impl std::str::FromStr for StatKey {
    type Err = FameError;

    fn from_str(s: &str) -> std::result::Result<Self, FameError> {
        match s {
            "loc" => Ok(StatKey::Loc),
            "commits" => Ok(StatKey::Commits),
            "files" => Ok(StatKey::Files),
            other => Err(FameError::Config(format!(
                "unrecognized sort key '{other}' (expected loc, commits, or files)"
            ))),
        }
    }
}

/// A statistic is either a plain count or a sized collection; sorting and
/// totals both compare through the same magnitude.
#[derive(Debug, Clone, Copy)]
pub enum StatValue<'a> {
    Count(u64),
    Collection(&'a BTreeSet<String>),
}

impl StatValue<'_> {
    pub fn magnitude(&self) -> u64 {
        match self {
            StatValue::Count(n) => *n,
            StatValue::Collection(set) => set.len() as u64,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FameEntry {
    pub author: String,
    pub loc: u64,
    pub commits: u64,
    pub files: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub by_extension: Option<BTreeMap<String, u64>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FameTotals {
    pub loc: u64,
    pub commits: u64,
    pub files: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FameOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub repository_path: String,
    pub sort: String,
    pub totals: FameTotals,
    pub entries: Vec<FameEntry>,
}
