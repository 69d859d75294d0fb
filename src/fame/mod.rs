pub mod aggregate;
pub mod exec;
pub mod output;

pub use aggregate::{aggregate_blame, compute_totals, reconcile_commits};
pub use exec::exec;
pub use output::{
    output_json, output_ndjson, render_breakdown, render_table, render_totals, sorted_authors,
};
