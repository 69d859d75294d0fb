use crate::git::GitRepo;
use crate::model::{
    AuthorMap, AuthorStats, FameEntry, FameOutput, FameTotals, StatKey, Totals, SCHEMA_VERSION,
};
use anyhow::Result;
use chrono::Utc;

const DIST_WIDTH: usize = 12;

/// Authors in report order: descending by the chosen statistic, ties kept
/// in first-appearance order (the sort is stable).
pub fn sorted_authors<'a>(stats: &'a AuthorMap, sort: StatKey) -> Vec<(&'a str, &'a AuthorStats)> {
    let mut authors: Vec<_> = stats.iter().map(|(name, s)| (name.as_str(), s)).collect();
    authors.sort_by_key(|(_, s)| std::cmp::Reverse(s.stat(sort).magnitude()));
    authors
}

pub fn render_totals(totals: &Totals) -> String {
    totals
        .iter()
        .map(|(key, value)| format!("Total {key}: {value}\n"))
        .collect()
}

/// Render the distribution table. Pure: the same statistics, sort key, and
/// terminal width always produce byte-identical output.
pub fn render_table(stats: &AuthorMap, totals: &Totals, sort: StatKey, term_width: usize) -> String {
    let authors = sorted_authors(stats, sort);

    let digits = |n: u64| n.to_string().len();
    let mut name_w = authors
        .iter()
        .map(|(name, _)| name.chars().count())
        .max()
        .unwrap_or(0)
        .max(6);
    let loc_w = authors.iter().map(|(_, s)| digits(s.loc)).max().unwrap_or(0).max(3);
    let coms_w = authors.iter().map(|(_, s)| digits(s.commits)).max().unwrap_or(0).max(4);
    let fils_w = authors
        .iter()
        .map(|(_, s)| digits(s.files.len() as u64))
        .max()
        .unwrap_or(0)
        .max(4);

    // Only the name column gives way on narrow terminals; the numeric
    // columns keep their widths, and the name keeps its header minimum so
    // the rules stay aligned.
    let fixed = loc_w + coms_w + fils_w + DIST_WIDTH + 5 * 3 + 3;
    name_w = name_w.min(term_width.saturating_sub(fixed)).max(6);

    let header = [
        format!("{:<name_w$}", "Author"),
        format!("{:>loc_w$}", "loc"),
        format!("{:>coms_w$}", "coms"),
        format!("{:>fils_w$}", "fils"),
        " distribution ".to_string(),
    ];
    let cell_widths: Vec<usize> = [name_w, loc_w, coms_w, fils_w, DIST_WIDTH + 2]
        .iter()
        .map(|w| w + 2)
        .collect();

    let loc_total = totals.get("loc").copied().unwrap_or(0);
    let commits_total = totals.get("commits").copied().unwrap_or(0);
    let files_total = totals.get("files").copied().unwrap_or(0);

    let mut out = String::new();
    let border = rule(&cell_widths, '-');
    out.push_str(&border);
    out.push('\n');
    out.push_str(&format!(
        "| {} | {} | {} | {} | {} |\n",
        header[0], header[1], header[2], header[3], header[4]
    ));
    out.push_str(&rule(&cell_widths, '='));
    out.push('\n');

    for (name, s) in &authors {
        let shown: String = name.chars().take(name_w + 1).collect();
        let files = s.files.len() as u64;
        let dist = format!(
            "{:>4.1}/{:>4.1}/{:>4.1}",
            share(s.loc, loc_total),
            share(s.commits, commits_total),
            share(files, files_total),
        )
        .replace("100.0", " 100");

        out.push_str(&format!(
            "| {shown:<width$}| {:>loc_w$} | {:>coms_w$} | {:>fils_w$} | {dist} |\n",
            s.loc,
            s.commits,
            files,
            width = name_w + 1,
        ));
    }

    out.push_str(&border);
    out.push('\n');
    out
}

/// Per-author extension breakdown, one line per author in report order,
/// extensions ordered by line count descending then name.
pub fn render_breakdown(stats: &AuthorMap, sort: StatKey) -> String {
    let mut out = String::new();
    for (name, s) in sorted_authors(stats, sort) {
        let Some(exts) = &s.by_extension else {
            continue;
        };
        let mut pairs: Vec<_> = exts.iter().collect();
        pairs.sort_by(|a, b| b.1.cmp(a.1).then(a.0.cmp(b.0)));

        let cells: Vec<String> = pairs.iter().map(|(ext, n)| format!("{ext}: {n}")).collect();
        out.push_str(&format!("{name}: {}\n", cells.join(", ")));
    }
    out
}

pub fn output_json(
    stats: &AuthorMap,
    totals: &Totals,
    sort: StatKey,
    repo: &GitRepo,
) -> Result<()> {
    let output = FameOutput {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        repository_path: repo.path().to_string_lossy().to_string(),
        sort: sort.as_str().to_string(),
        totals: FameTotals {
            loc: totals.get("loc").copied().unwrap_or(0),
            commits: totals.get("commits").copied().unwrap_or(0),
            files: totals.get("files").copied().unwrap_or(0),
        },
        entries: fame_entries(stats, sort),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

pub fn output_ndjson(stats: &AuthorMap, sort: StatKey) -> Result<()> {
    for entry in fame_entries(stats, sort) {
        println!("{}", serde_json::to_string(&entry)?);
    }
    Ok(())
}

fn fame_entries(stats: &AuthorMap, sort: StatKey) -> Vec<FameEntry> {
    sorted_authors(stats, sort)
        .into_iter()
        .map(|(name, s)| FameEntry {
            author: name.to_string(),
            loc: s.loc,
            commits: s.commits,
            files: s.files.len() as u64,
            by_extension: s.by_extension.clone(),
        })
        .collect()
}

fn share(value: u64, total: u64) -> f64 {
    100.0 * value as f64 / total.max(1) as f64
}

fn rule(cell_widths: &[usize], line: char) -> String {
    let runs: Vec<String> = cell_widths
        .iter()
        .map(|w| line.to_string().repeat(*w))
        .collect();
    format!("+{}+", runs.join("+"))
}
