/// Candidate disclosure records ("Hoja de Vida") from the [JNE electoral platform API].
///
/// [JNE electoral platform API]: https://plataformaelectoral.jne.gob.pe/
pub mod candidates;

/// Party ballot symbols from the [JNE public registry].
///
/// [JNE public registry]: https://sroppublico.jne.gob.pe/
pub mod symbols;

pub mod config;
pub mod error;
pub mod fs;
pub(crate) mod tui;

pub use config::Settings;
pub use error::SpiderError;

/// Shortcut for required API elements.
pub mod http {
    pub use dotenv::var;
    pub use reqwest::Client as HttpClient;
}

use http::HttpClient;

/// Build the HTTP client shared by every spider.
///
/// The JNE endpoints serve certificates that do not validate, so certificate checks are
/// switched off; timeouts are set per request.
pub fn build_client(settings: &Settings) -> Result<HttpClient, SpiderError> {
    let client = reqwest::ClientBuilder::new()
        .user_agent(&settings.user_agent)
        .danger_accept_invalid_certs(true)
        .build()?;
    Ok(client)
}

/// Format the elapsed time since `time`, for debug logs.
pub(crate) fn time_elapsed(time: std::time::Instant) -> String {
    format!(
        "\x1b[38;5;208melapsed time: {} ms\x1b[0m",
        time.elapsed().as_millis()
    )
}
