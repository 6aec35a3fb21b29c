mod sources;

pub mod export;
pub mod extract;
pub mod fetch;
pub mod model;
pub mod table;

pub use export::ExportPaths;
pub use model::{CandidateProfile, Cell, Column};
pub use sources::{CandidateRecord, CANDIDATES};
pub use table::Table;

use crate::config::Settings;
use crate::http::*;
use crate::tui::{banner, Progress};
use serde_json::Value;
use std::path::Path;
use tracing::{debug, error, info, trace};

// scrape
// ----------------------------------------------------------------------------

/// Fetch every candidate's Hoja de Vida, then export the flattened table as XLSX & CSV
/// into `settings.output_dir`, stamped with the local time of the run.
///
/// A candidate that cannot be fetched still gets a row (source columns only); only failing
/// to write the output ends the run with an error.
pub async fn scrape(
    http_client: &HttpClient,
    settings: &Settings,
    candidates: &[CandidateRecord],
    tui: bool,
) -> anyhow::Result<CandidateReport> {
    if tui {
        println!("{}", banner("HOJAS DE VIDA - CANDIDATOS JNE"));
        println!("Total candidates to process: {}\n", candidates.len());
    }

    let (table, failures) = collect(http_client, settings, candidates, tui).await?;

    let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S").to_string();
    let dir = crate::fs::ensure_dir(&settings.output_dir).await?;
    let paths = export::write(&table, &dir, &stamp).await.map_err(|err| {
        error!("failed to write candidate table to {:?}, error({err})", dir);
        err
    })?;

    let report = CandidateReport {
        table,
        failures,
        paths,
    };

    if tui {
        println!("\n{}", report.summary());
    } else {
        info!(
            "candidate table written: {} rows, {} columns, {} failures",
            report.table.len(),
            report.table.columns().len(),
            report.failures.len()
        );
    }

    Ok(report)
}

/// Fetch & flatten each candidate in order, pausing `settings.delay` between requests.
///
/// Returns the table together with the candidates whose fetch failed.
pub async fn collect(
    http_client: &HttpClient,
    settings: &Settings,
    candidates: &[CandidateRecord],
    tui: bool,
) -> anyhow::Result<(Table, Vec<CandidateRecord>)> {
    let time = std::time::Instant::now();
    let progress = Progress::new(candidates.len(), tui)?;

    let mut rows = Vec::with_capacity(candidates.len());
    let mut failures = Vec::new();

    for (i, candidate) in candidates.iter().enumerate() {
        let label = format!("{} ({})", candidate.persona, candidate.partido);
        info!("processing {}/{}: {label}", i + 1, candidates.len());
        progress.working(format!("processing {}/{}: {label}", i + 1, candidates.len()));

        let url = candidate.url(&settings.candidate_url);
        let document =
            match fetch::fetch_hoja_vida(http_client, &url, settings.candidate_timeout).await {
                Ok(document) => {
                    trace!("Hoja de Vida fetched for {label}");
                    progress.succeed(label);
                    document
                }
                Err(err) => {
                    error!("failed to fetch Hoja de Vida for {label}, error({err})");
                    progress.fail(format!("{label}: {err}"));
                    failures.push(*candidate);
                    Value::Null
                }
            };

        rows.push(extract::row(candidate, &document));

        if !settings.delay.is_zero() {
            tokio::time::sleep(settings.delay).await;
        }
    }

    progress.finish();
    debug!(
        "{} Hojas de Vida collected, {} failed, {}",
        rows.len(),
        failures.len(),
        crate::time_elapsed(time)
    );

    Ok((Table::new(rows), failures))
}

// report
// ----------------------------------------------------------------------------

/// Outcome of a candidate run.
#[derive(Debug)]
pub struct CandidateReport {
    pub table: Table,
    pub failures: Vec<CandidateRecord>,
    pub paths: ExportPaths,
}

impl CandidateReport {
    pub fn xlsx_path(&self) -> &Path {
        &self.paths.xlsx
    }

    pub fn csv_path(&self) -> &Path {
        &self.paths.csv
    }

    /// Console summary: output files, table shape, parties & candidates per position.
    pub fn summary(&self) -> String {
        let mut lines = vec![
            format!("[OK] Excel file saved as: {}", self.paths.xlsx.display()),
            format!("[OK] CSV file saved as: {}", self.paths.csv.display()),
            format!("[OK] Total rows: {}", self.table.len()),
            format!("[OK] Total columns: {}", self.table.columns().len()),
        ];
        if !self.failures.is_empty() {
            lines.push(format!("[!!] Failed fetches: {}", self.failures.len()));
        }

        lines.push(String::new());
        lines.push("--- Summary ---".to_string());
        lines.push(format!("Parties: {}", self.table.distinct(Column::Partido)));
        lines.push(format!("Candidates: {}", self.table.len()));
        lines.push(String::new());
        lines.push("Candidates by position:".to_string());
        for (position, count) in self.table.value_counts(Column::Candidatura) {
            lines.push(format!("  {position:<20} {count}"));
        }

        lines.join("\n")
    }
}
