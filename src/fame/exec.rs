use crate::cli::Cli;
use crate::git::{BlameOutcome, GitRepo};
use crate::model::{AuthorMap, StatKey};
use crate::select::ExcludeFilter;
use anyhow::Context;
use indicatif::{ProgressBar, ProgressStyle};

use super::{aggregate_blame, compute_totals, reconcile_commits};
use super::{output_json, output_ndjson, render_breakdown, render_table, render_totals};

pub fn exec(cli: Cli) -> anyhow::Result<()> {
    // Configuration is validated before any repository I/O happens.
    let sort: StatKey = cli.sort.parse()?;
    let filter = ExcludeFilter::parse(&cli.exclude_files, cli.regex)?;

    let repo = GitRepo::open(cli.gitdir.as_ref()).context("Failed to open git repository")?;
    let files = repo.list_files().context("Failed to list tracked files")?;
    let kept: Vec<&str> = filter.filter(files.iter().map(|f| f.as_str())).collect();

    let pb = if cli.silent_progress {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(kept.len() as u64)
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} Blame {wide_bar} {pos}/{len}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let mut stats = AuthorMap::new();
    for path in &kept {
        match repo.blame_file(path, cli.ignore_whitespace) {
            BlameOutcome::Stream(text) => aggregate_blame(&mut stats, path, &text, cli.bytype),
            // one unreadable file must not abort the scan
            BlameOutcome::Failed(_) => {}
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    let shortlog = repo.shortlog().context("Failed to summarize commits")?;
    reconcile_commits(&mut stats, &shortlog)?;

    let totals = compute_totals(&stats);

    if cli.json {
        output_json(&stats, &totals, sort, &repo)?;
    } else if cli.ndjson {
        output_ndjson(&stats, sort)?;
    } else {
        print!("{}", render_totals(&totals));
        print!("{}", render_table(&stats, &totals, sort, crate::util::term_width()));
        if cli.bytype {
            print!("{}", render_breakdown(&stats, sort));
        }
    }

    Ok(())
}
