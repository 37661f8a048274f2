use serde::de::DeserializeOwned;

use crate::data_source::SourceError;
use crate::http_client::{HttpClient, HttpRequest};

/// Performs `request` and decodes the JSON body into `T`.
///
/// Transport failures, non-2xx statuses and undecodable bodies map to
/// distinct [`SourceError`] kinds.
pub fn fetch_json<T: DeserializeOwned>(
    client: &dyn HttpClient,
    request: HttpRequest,
) -> Result<T, SourceError> {
    tracing::debug!(url = %request.url, "requesting");

    let response = client
        .execute(request)
        .map_err(|e| SourceError::transport(e.message()))?;

    tracing::debug!(status = response.status, bytes = response.body.len(), "response received");

    if !response.is_success() {
        return Err(SourceError::status(response.status));
    }

    serde_json::from_str(&response.body)
        .map_err(|e| SourceError::decode(format!("failed to decode response body: {e}")))
}
