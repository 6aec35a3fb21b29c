use super::download::fetch_symbol;
use super::sources::symbol_url;
use crate::config::Settings;
use crate::http::*;
use crate::tui::banner;
use std::ops::RangeInclusive;
use std::path::Path;
use tracing::{debug, error, info, trace};

/// IDs probed when no range is given.
pub const DEFAULT_RANGE: RangeInclusive<u32> = 2800..=3100;

/// Probe every symbol ID in `range`, saving each accepted body as `simbolo_{id}.png` in
/// `dir` for manual inspection.
///
/// This fires one request per ID, so it is only reached on explicit request. Failed
/// probes, and failed writes, are skipped. Returns the IDs that answered with an image.
pub async fn scan(
    http_client: &HttpClient,
    settings: &Settings,
    range: RangeInclusive<u32>,
    dir: &Path,
    tui: bool,
) -> anyhow::Result<Vec<u32>> {
    let time = std::time::Instant::now();
    let dir = crate::fs::ensure_dir(dir).await?;

    if tui {
        println!("{}", banner("BUSQUEDA DE SIMBOLOS"));
        println!(
            "scanning symbol IDs {}-{} (this can take several minutes)\n",
            range.start(),
            range.end()
        );
    }
    info!("scanning symbol IDs {}-{}", range.start(), range.end());

    let mut found = Vec::new();
    for id in range {
        let url = symbol_url(&settings.symbol_url, id);

        match fetch_symbol(http_client, &url, settings.scan_timeout).await {
            Ok(body) => {
                if tui {
                    println!("✓ found ID {id} ({} bytes)", body.bytes.len());
                }
                info!("found symbol ID {id} ({} bytes)", body.bytes.len());
                found.push(id);

                let path = dir.join(format!("simbolo_{id}.png"));
                if let Err(err) = crate::fs::write_file(&path, &body.bytes).await {
                    error!("failed to save symbol {id} to {:?}, error({err})", path);
                }
            }
            Err(err) => trace!("no symbol at ID {id}, error({err})"),
        }

        if id % 10 == 0 {
            if tui {
                println!("  ... probed up to {id}");
            }
            debug!("probed up to {id}");
        }

        if !settings.scan_delay.is_zero() {
            tokio::time::sleep(settings.scan_delay).await;
        }
    }

    if tui {
        println!("\n✓ found {} symbols: {:?}", found.len(), found);
    }
    info!(
        "found {} symbols: {:?}, {}",
        found.len(),
        found,
        crate::time_elapsed(time)
    );

    Ok(found)
}
