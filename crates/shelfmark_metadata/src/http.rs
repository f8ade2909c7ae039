//! Shared HTTP plumbing for bibliographic sources.

use reqwest::{Client, StatusCode};
use shelfmark_error::{HttpError, MetadataError, MetadataErrorKind, ShelfmarkResult};
use std::time::Duration;
use tracing::debug;

/// Build a client whose every request is bounded by `timeout`.
pub(crate) fn client_with_timeout(timeout: Duration) -> ShelfmarkResult<Client> {
    Client::builder()
        .timeout(timeout)
        .user_agent(concat!("shelfmark/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| HttpError::new(format!("Failed to build HTTP client: {}", e)).into())
}

/// GET `url` with query parameters and return the body of a 200 response.
pub(crate) async fn get_text(
    client: &Client,
    source_name: &str,
    url: &str,
    query: &[(&str, &str)],
) -> ShelfmarkResult<String> {
    debug!(source = source_name, url, "Sending bibliographic lookup");

    let response = client.get(url).query(query).send().await.map_err(|e| {
        MetadataError::new(MetadataErrorKind::Http {
            source_name: source_name.to_string(),
            message: e.to_string(),
        })
    })?;

    let status = response.status();
    if status != StatusCode::OK {
        return Err(MetadataError::new(MetadataErrorKind::Status {
            source_name: source_name.to_string(),
            status_code: status.as_u16(),
        })
        .into());
    }

    response.text().await.map_err(|e| {
        MetadataError::new(MetadataErrorKind::Http {
            source_name: source_name.to_string(),
            message: format!("Failed to read body: {}", e),
        })
        .into()
    })
}
