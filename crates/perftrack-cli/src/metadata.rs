use std::fmt::{Display, Formatter};

use serde::Serialize;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::error::CliError;

/// Request identifier (UUID v4) attached to every command response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RequestId(Uuid);

impl RequestId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Display for RequestId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

/// Response metadata printed ahead of the command payload.
///
/// Field order is fixed to keep JSON output stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metadata {
    pub request_id: RequestId,
    pub generated_at: String,
    pub latency_ms: u64,
}

impl Metadata {
    pub fn new(latency_ms: u64) -> Result<Self, CliError> {
        Ok(Self {
            request_id: RequestId::new_v4(),
            generated_at: OffsetDateTime::now_utc().format(&Rfc3339)?,
            latency_ms,
        })
    }
}

/// Command output wrapper: metadata plus the command-specific payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope<T> {
    pub meta: Metadata,
    pub data: T,
}

impl<T> Envelope<T> {
    pub fn new(meta: Metadata, data: T) -> Self {
        Self { meta, data }
    }
}
