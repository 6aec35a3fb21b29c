mod sources;

pub mod download;
pub mod scan;
pub mod sniff;

pub use download::{download_symbol, fetch_symbol, SavedIcon, SymbolBody};
pub use scan::scan;
pub use sniff::{sniff, ImageFormat};
pub use sources::{simplify, symbol_url, PartySymbolEntry, PARTY_SYMBOLS};

use crate::config::Settings;
use crate::http::*;
use crate::tui::{banner, Progress};
use std::path::PathBuf;
use tracing::{debug, error, info, warn};

// scrape
// ----------------------------------------------------------------------------

/// Download every party symbol into `settings.icon_dir`, pausing `settings.delay` between
/// requests.
///
/// Failed downloads & entries without a symbol ID are counted, not raised; only failing to
/// create the output directory ends the run with an error.
pub async fn scrape(
    http_client: &HttpClient,
    settings: &Settings,
    entries: &[PartySymbolEntry],
    tui: bool,
) -> anyhow::Result<SymbolReport> {
    let time = std::time::Instant::now();

    if tui {
        println!(
            "{}\n",
            banner("DESCARGA DE ICONOS DE PARTIDOS POLITICOS - ELECCIONES PERU 2026")
        );
    }

    let dir = crate::fs::ensure_dir(&settings.icon_dir).await?;
    let progress = Progress::new(entries.len(), tui)?;
    let mut report = SymbolReport {
        dir,
        ..SymbolReport::default()
    };

    for entry in entries {
        let id = match entry.id_simbolo {
            Some(id) => id,
            None => {
                warn!("{}: symbol ID not configured", entry.partido);
                progress.skip(format!("{}: ID no configurado", entry.partido));
                report.missing_id.push(*entry);
                continue;
            }
        };

        info!("downloading {} (ID: {id})", entry.partido);
        progress.working(format!("downloading {} (ID: {id}) ...", entry.partido));

        let url = symbol_url(&settings.symbol_url, id);
        match download_symbol(
            http_client,
            &url,
            entry,
            &report.dir,
            settings.symbol_timeout,
        )
        .await
        {
            Ok(icon) => {
                let name = icon
                    .path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_default();
                progress.succeed(format!("saved: {name} ({:.1} KB)", icon.size_kb()));
                report.saved.push(icon);
            }
            Err(err) => {
                error!("failed to download symbol for {}, error({err})", entry.partido);
                progress.fail(format!("{}: {err}", entry.partido));
                report.failed.push(*entry);
            }
        }

        if !settings.delay.is_zero() {
            tokio::time::sleep(settings.delay).await;
        }
    }

    progress.finish();
    debug!("symbols collected, {}", crate::time_elapsed(time));

    if tui {
        println!("\n{}", report.summary());
    } else {
        info!(
            "symbols downloaded: {}, failed: {}, missing ID: {}",
            report.saved.len(),
            report.failed.len(),
            report.missing_id.len()
        );
    }

    Ok(report)
}

// report
// ----------------------------------------------------------------------------

/// Outcome of a symbol run.
#[derive(Debug, Default)]
pub struct SymbolReport {
    /// Absolute output directory.
    pub dir: PathBuf,
    pub saved: Vec<SavedIcon>,
    pub failed: Vec<PartySymbolEntry>,
    pub missing_id: Vec<PartySymbolEntry>,
}

impl SymbolReport {
    /// Console summary: counts, output directory & a hint on finding missing IDs.
    pub fn summary(&self) -> String {
        let bar = "=".repeat(70);
        let mut lines = vec![
            bar.clone(),
            "RESUMEN:".to_string(),
            format!("  ✓ Descargados: {}", self.saved.len()),
            format!("  ✗ Fallidos: {}", self.failed.len()),
            format!("  ⚠ Sin ID: {}", self.missing_id.len()),
            format!("  Ubicación: {}", self.dir.display()),
            bar,
        ];

        if !self.failed.is_empty() || !self.missing_id.is_empty() {
            lines.push(String::new());
            lines.push("AYUDA:".to_string());
            lines.push("  Para encontrar IDs faltantes, puedes:".to_string());
            lines.push("  1. Visitar: https://plataformaelectoral.jne.gob.pe/".to_string());
            lines.push("  2. Buscar el partido y encontrar su símbolo".to_string());
            lines.push("  3. O ejecutar `simbolos --scan` para una búsqueda automática".to_string());
        }

        lines.join("\n")
    }
}
