use crate::error::SpiderError;
use crate::http::*;
use serde_json::Value;
use std::time::Duration;
use tracing::trace;

/// GET a Hoja de Vida document from `url`.
///
/// Non-2xx statuses are errors; the body is returned as raw JSON, since the document
/// shape varies from one candidate to the next.
pub async fn fetch_hoja_vida(
    http_client: &HttpClient,
    url: &str,
    timeout: Duration,
) -> Result<Value, SpiderError> {
    trace!("fetching Hoja de Vida from {url}");
    let response = http_client.get(url).timeout(timeout).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(SpiderError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    let body = response.bytes().await?;
    let document: Value = serde_json::from_slice(&body)?;
    trace!("Hoja de Vida parsed, {} bytes", body.len());

    Ok(document)
}
