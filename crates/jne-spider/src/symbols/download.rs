use super::sniff::{sniff, ImageFormat};
use super::sources::PartySymbolEntry;
use crate::error::SpiderError;
use crate::http::*;
use reqwest::header::CONTENT_TYPE;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, trace};

/// Bodies of this size or smaller are placeholders, not images.
pub const MIN_BODY_LEN: usize = 100;

/// An accepted symbol response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolBody {
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl SymbolBody {
    pub fn format(&self) -> ImageFormat {
        sniff(&self.content_type, &self.bytes)
    }
}

/// A symbol written to disk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SavedIcon {
    pub path: PathBuf,
    pub format: ImageFormat,
    pub size: usize,
}

impl SavedIcon {
    pub fn size_kb(&self) -> f64 {
        self.size as f64 / 1024.0
    }
}

/// GET a symbol, accepting only a `200 OK` with a body over [`MIN_BODY_LEN`] bytes.
pub async fn fetch_symbol(
    http_client: &HttpClient,
    url: &str,
    timeout: Duration,
) -> Result<SymbolBody, SpiderError> {
    trace!("fetching symbol from {url}");
    let response = http_client.get(url).timeout(timeout).send().await?;

    let status = response.status();
    if status != reqwest::StatusCode::OK {
        return Err(SpiderError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let bytes = response.bytes().await?.to_vec();

    if bytes.len() <= MIN_BODY_LEN {
        return Err(SpiderError::EmptyBody {
            len: bytes.len(),
            url: url.to_string(),
        });
    }

    Ok(SymbolBody {
        content_type,
        bytes,
    })
}

/// Download the symbol of `entry` from `url` into `dir`, as `{stem}.{extension}`.
///
/// An existing file of the same name is overwritten.
pub async fn download_symbol(
    http_client: &HttpClient,
    url: &str,
    entry: &PartySymbolEntry,
    dir: &Path,
    timeout: Duration,
) -> Result<SavedIcon, SpiderError> {
    let body = fetch_symbol(http_client, url, timeout).await?;
    let format = body.format();
    let path = dir.join(format!("{}.{}", entry.file_stem(), format.extension()));
    crate::fs::write_file(&path, &body.bytes).await?;

    debug!("symbol for {} saved to {:?}", entry.partido, path);

    Ok(SavedIcon {
        path,
        format,
        size: body.bytes.len(),
    })
}
