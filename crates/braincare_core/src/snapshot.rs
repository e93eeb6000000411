//! Versioned JSON envelopes for slot payloads.
//!
//! # Responsibility
//! - Encode a full in-memory snapshot as `{ "schema_version": N, "data": ... }`.
//! - Decode, check the version and run a caller-supplied validation step.
//!
//! # Invariants
//! - The version lives inside the payload, never in the slot name.
//! - Payloads from another schema version are rejected, not migrated.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Serialize)]
struct EnvelopeRef<'a, T> {
    schema_version: u32,
    data: &'a T,
}

#[derive(Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Deserialize)]
struct VersionProbe {
    schema_version: u32,
}

#[derive(Debug)]
pub enum SnapshotError {
    Malformed(serde_json::Error),
    VersionMismatch { found: u32, expected: u32 },
    Invalid(String),
}

impl Display for SnapshotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Malformed(err) => write!(f, "malformed snapshot: {err}"),
            Self::VersionMismatch { found, expected } => write!(
                f,
                "snapshot schema version {found} does not match expected {expected}"
            ),
            Self::Invalid(message) => write!(f, "invalid snapshot data: {message}"),
        }
    }
}

impl Error for SnapshotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Malformed(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for SnapshotError {
    fn from(value: serde_json::Error) -> Self {
        Self::Malformed(value)
    }
}

impl SnapshotError {
    /// Short stable code for log lines.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Malformed(_) => "malformed",
            Self::VersionMismatch { .. } => "version_mismatch",
            Self::Invalid(_) => "invalid",
        }
    }
}

/// Serializes `data` under `schema_version`.
pub fn encode_snapshot<T: Serialize>(
    schema_version: u32,
    data: &T,
) -> Result<String, SnapshotError> {
    Ok(serde_json::to_string(&EnvelopeRef {
        schema_version,
        data,
    })?)
}

/// Decodes a payload written by [`encode_snapshot`].
///
/// The version is checked before the body is decoded, so a payload of
/// another version reports `VersionMismatch` even when its shape changed.
pub fn decode_snapshot<T, V>(
    raw: &str,
    expected_version: u32,
    validate: V,
) -> Result<T, SnapshotError>
where
    T: DeserializeOwned,
    V: FnOnce(&T) -> Result<(), String>,
{
    let probe: VersionProbe = serde_json::from_str(raw)?;
    if probe.schema_version != expected_version {
        return Err(SnapshotError::VersionMismatch {
            found: probe.schema_version,
            expected: expected_version,
        });
    }

    let envelope: Envelope<T> = serde_json::from_str(raw)?;
    validate(&envelope.data).map_err(SnapshotError::Invalid)?;
    Ok(envelope.data)
}
