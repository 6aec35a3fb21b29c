use thiserror::Error;

/// Errors raised while fetching from the JNE endpoints or writing spider output.
///
/// Per-entry fetch errors are logged and downgraded by the scrapers; only output errors
/// (`Io`, `Csv`, `Xlsx`) end a run.
#[derive(Debug, Error)]
pub enum SpiderError {
    /// Transport failure, including timeouts.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with an unsuccessful status code.
    #[error("unexpected response status: {status} at {url}")]
    Status { status: u16, url: String },

    /// The server answered 200 but the body is too small to be an image.
    #[error("empty response body ({len} bytes) at {url}")]
    EmptyBody { len: usize, url: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("XLSX error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    /// An environment variable holds a value that cannot be parsed.
    #[error("invalid configuration value for {key}: {value:?}")]
    Config { key: &'static str, value: String },
}
