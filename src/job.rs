use std::fmt::{Display, Write as _};
use std::path::PathBuf;

use anyhow::Result;

use crate::classify::monochrome::rule_breakdown;
use crate::classify::{classify_monochromes, classify_no_liners, explain_monochrome};
use crate::config::{JobConfig, MONOCHROMES_FILE, NOLINERS_FILE};
use crate::data::loader::load_catalog;
use crate::data::model::{Catalog, UnsigRecord};
use crate::output::write_ids;

// ---------------------------------------------------------------------------
// Job pipelines: load → classify → write
// ---------------------------------------------------------------------------

/// What a finished job did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobSummary {
    /// Records in the catalog.
    pub scanned: usize,
    /// Identifiers written.
    pub matched: usize,
    /// File the identifiers were written to.
    pub output: PathBuf,
}

/// Write the ascending ids of every monochrome unsig to `monochromes.json`.
pub fn run_monochromes(config: &JobConfig) -> Result<JobSummary> {
    let catalog = load(config)?;

    if let Some(id) = &config.inspect_id {
        if let Some(record) = catalog.get(id) {
            print!("{}", describe_record(id, record));
        } else {
            log::debug!("Unsig {id} not in catalog, nothing to inspect");
        }
    }

    let ids = classify_monochromes(&catalog)?;
    for (rule, count) in rule_breakdown(&catalog) {
        log::debug!("{count} monochromes via {rule} rule");
    }

    finish(config, MONOCHROMES_FILE, catalog.len(), &ids)
}

/// Write the ids of every no-liner, in catalog order, to `noliners.json`.
///
/// A malformed multiplier anywhere fails the job before anything is written.
pub fn run_noliners(config: &JobConfig) -> Result<JobSummary> {
    let catalog = load(config)?;
    let ids = classify_no_liners(&catalog)?;
    finish(config, NOLINERS_FILE, catalog.len(), &ids)
}

fn load(config: &JobConfig) -> Result<Catalog> {
    let path = config.catalog_path();
    let catalog = load_catalog(&path)?;
    log::info!("Loaded {} unsigs from {}", catalog.len(), path.display());
    Ok(catalog)
}

fn finish(config: &JobConfig, file_name: &str, scanned: usize, ids: &[u64]) -> Result<JobSummary> {
    let output = config.output_path(file_name);
    write_ids(&output, ids)?;
    log::info!("Wrote {} of {scanned} ids to {}", ids.len(), output.display());
    Ok(JobSummary {
        scanned,
        matched: ids.len(),
        output,
    })
}

// ---------------------------------------------------------------------------
// Inspection
// ---------------------------------------------------------------------------

/// Human-readable dump of a record's layer sequences.
pub fn describe_record(id: &str, record: &UnsigRecord) -> String {
    let mut out = String::new();
    let Some(props) = &record.properties else {
        let _ = writeln!(out, "\nUnsig #{id} has no properties");
        return out;
    };

    let _ = writeln!(out, "\nAnalyzing Unsig #{id}:");
    if let Some(n) = record.num_props {
        let _ = writeln!(out, "Layers: {n}");
    }
    let _ = writeln!(out, "Colors: {}", list(props.colors.as_deref()));
    let _ = writeln!(out, "Distributions: {}", list(props.distributions.as_deref()));
    let _ = writeln!(out, "Multipliers: {}", list(props.multipliers.as_deref()));
    let _ = writeln!(out, "Rotations: {}", list(props.rotations.as_deref()));
    match explain_monochrome(record) {
        Some(rule) => {
            let _ = writeln!(out, "Monochrome: yes ({rule})");
        }
        None => {
            let _ = writeln!(out, "Monochrome: no");
        }
    }
    out
}

fn list<T: Display>(values: Option<&[T]>) -> String {
    let items: Vec<String> = values.unwrap_or_default().iter().map(T::to_string).collect();
    format!("[{}]", items.join(", "))
}
