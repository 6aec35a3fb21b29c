#![allow(dead_code)]

use httpmock::MockServer;
use jne_spider::Settings;
use serde_json::Value;
use std::path::Path;
use std::time::Duration;

pub const CANDIDATE_PATH: &str = "/api/v1/candidato/hoja-vida";
pub const SYMBOL_PATH: &str = "/Consulta/Simbolo/GetSimbolo";

/// Settings pointing at `server`, writing under `dir`, without pauses between requests.
pub fn settings(server: &MockServer, dir: &Path) -> Settings {
    Settings {
        candidate_url: server.url(CANDIDATE_PATH),
        symbol_url: server.url(SYMBOL_PATH),
        output_dir: dir.join("out"),
        icon_dir: dir.join("iconos_partidos"),
        delay: Duration::ZERO,
        scan_delay: Duration::ZERO,
        ..Settings::default()
    }
}

/// Reads a `.json` fixture from `path`.
pub async fn read_json(path: impl AsRef<Path>) -> Value {
    let file = tokio::fs::read(path).await.unwrap();
    serde_json::from_slice(&file).unwrap()
}

/// A fake PNG, big enough to be accepted.
pub fn png(len: usize) -> Vec<u8> {
    let mut bytes = b"\x89PNG\r\n\x1a\n".to_vec();
    bytes.resize(len, 0);
    bytes
}

/// A fake JPEG, big enough to be accepted.
pub fn jpeg(len: usize) -> Vec<u8> {
    let mut bytes = b"\xff\xd8\xff\xe0".to_vec();
    bytes.resize(len, 0);
    bytes
}
