use crate::error::SpiderError;
use crate::http::var;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

pub const CANDIDATE_URL: &str = "https://apiplataformaelectoral8.jne.gob.pe/api/v1/candidato/hoja-vida";
pub const SYMBOL_URL: &str = "https://sroppublico.jne.gob.pe/Consulta/Simbolo/GetSimbolo";
pub const USER_AGENT: &str = concat!("jne-spider/", env!("CARGO_PKG_VERSION"));

/// Runtime settings for both spiders.
///
/// Defaults match the public JNE endpoints; every value can be overridden from the
/// environment (or a `.env` file), and the binaries override some of them again from
/// command line flags.
///
/// | variable                  | field               | default           |
/// |---------------------------|---------------------|-------------------|
/// | `JNE_CANDIDATE_URL`       | `candidate_url`     | [`CANDIDATE_URL`] |
/// | `JNE_SYMBOL_URL`          | `symbol_url`        | [`SYMBOL_URL`]    |
/// | `JNE_OUTPUT_DIR`          | `output_dir`        | `.`               |
/// | `JNE_ICON_DIR`            | `icon_dir`          | `iconos_partidos` |
/// | `JNE_DELAY_MS`            | `delay`             | 500               |
/// | `JNE_TIMEOUT_SECS`        | `candidate_timeout` | 10                |
/// | `JNE_SYMBOL_TIMEOUT_SECS` | `symbol_timeout`    | 15                |
/// | `JNE_SCAN_DELAY_MS`       | `scan_delay`        | 200               |
/// | `JNE_SCAN_TIMEOUT_SECS`   | `scan_timeout`      | 5                 |
/// | `USER_AGENT`              | `user_agent`        | [`USER_AGENT`]    |
#[derive(Clone, Debug)]
pub struct Settings {
    /// Hoja de Vida endpoint, queried with `?idHojaVida={id}`.
    pub candidate_url: String,

    /// Symbol endpoint, queried with `/{id}`.
    pub symbol_url: String,

    /// Directory for the spreadsheet outputs.
    pub output_dir: PathBuf,

    /// Directory for the downloaded symbols.
    pub icon_dir: PathBuf,

    /// Pause between two consecutive requests.
    pub delay: Duration,
    pub candidate_timeout: Duration,
    pub symbol_timeout: Duration,

    /// Pause & timeout used by the symbol ID scanner, which probes many more IDs.
    pub scan_delay: Duration,
    pub scan_timeout: Duration,

    pub user_agent: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            candidate_url: CANDIDATE_URL.to_string(),
            symbol_url: SYMBOL_URL.to_string(),
            output_dir: PathBuf::from("."),
            icon_dir: PathBuf::from("iconos_partidos"),
            delay: Duration::from_millis(500),
            candidate_timeout: Duration::from_secs(10),
            symbol_timeout: Duration::from_secs(15),
            scan_delay: Duration::from_millis(200),
            scan_timeout: Duration::from_secs(5),
            user_agent: USER_AGENT.to_string(),
        }
    }
}

impl Settings {
    /// Read settings from environment variables, falling back to the defaults.
    ///
    /// Call `dotenv::dotenv()` beforehand to pick up a `.env` file.
    pub fn from_env() -> Result<Self, SpiderError> {
        Self::from_lookup(|key| var(key).ok())
    }

    /// Like [`Settings::from_env`], reading each variable through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SpiderError> {
        let mut settings = Self::default();

        if let Some(url) = lookup("JNE_CANDIDATE_URL") {
            settings.candidate_url = url;
        }
        if let Some(url) = lookup("JNE_SYMBOL_URL") {
            settings.symbol_url = url;
        }
        if let Some(dir) = lookup("JNE_OUTPUT_DIR") {
            settings.output_dir = PathBuf::from(dir);
        }
        if let Some(dir) = lookup("JNE_ICON_DIR") {
            settings.icon_dir = PathBuf::from(dir);
        }
        if let Some(ms) = parse(&lookup, "JNE_DELAY_MS")? {
            settings.delay = Duration::from_millis(ms);
        }
        if let Some(secs) = parse(&lookup, "JNE_TIMEOUT_SECS")? {
            settings.candidate_timeout = Duration::from_secs(secs);
        }
        if let Some(secs) = parse(&lookup, "JNE_SYMBOL_TIMEOUT_SECS")? {
            settings.symbol_timeout = Duration::from_secs(secs);
        }
        if let Some(ms) = parse(&lookup, "JNE_SCAN_DELAY_MS")? {
            settings.scan_delay = Duration::from_millis(ms);
        }
        if let Some(secs) = parse(&lookup, "JNE_SCAN_TIMEOUT_SECS")? {
            settings.scan_timeout = Duration::from_secs(secs);
        }
        if let Some(agent) = lookup("USER_AGENT") {
            settings.user_agent = agent;
        }

        Ok(settings)
    }
}

fn parse<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<T>, SpiderError> {
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| SpiderError::Config { key, value }),
        None => Ok(None),
    }
}
