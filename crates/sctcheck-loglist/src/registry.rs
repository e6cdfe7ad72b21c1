//! The immutable log registry

use crate::log_list::{LogList, LogState, TemporalInterval};
use crate::{Error, Result};
use chrono::Duration;
use sctcheck_crypto::{sha256, signing_scheme_for_spki_der, SigningScheme, VerificationKey};
use sctcheck_types::{DerPublicKey, LogId};
use std::collections::HashMap;

/// A CT log known to the registry
#[derive(Debug, Clone)]
pub struct Log {
    /// SHA-256 of `key`
    pub id: LogId,
    /// DER SubjectPublicKeyInfo
    pub key: DerPublicKey,
    /// Scheme implied by the key type
    pub scheme: SigningScheme,
    /// Maximum merge delay
    pub mmd: Duration,
    pub description: String,
    pub operator: Option<String>,
    pub url: Option<String>,
    pub state: Option<LogState>,
    pub temporal_interval: Option<TemporalInterval>,
}

impl Log {
    /// Create a log from its key, deriving the log ID and signing scheme
    pub fn new(description: impl Into<String>, key: DerPublicKey, mmd: Duration) -> Result<Self> {
        let description = description.into();
        let scheme =
            signing_scheme_for_spki_der(key.as_bytes()).map_err(|source| Error::InvalidKey {
                description: description.clone(),
                source,
            })?;

        Ok(Self {
            id: LogId::from(sha256(key.as_bytes())),
            key,
            scheme,
            mmd,
            description,
            operator: None,
            url: None,
            state: None,
            temporal_interval: None,
        })
    }

    /// Key for verifying this log's signatures with the given scheme
    pub fn verification_key(&self, scheme: SigningScheme) -> VerificationKey {
        VerificationKey::new(self.key.as_bytes().to_vec(), scheme)
    }

    #[allow(clippy::too_many_arguments)]
    fn from_list(
        operator: &str,
        description: Option<&str>,
        declared_id: LogId,
        key: &DerPublicKey,
        url: &str,
        mmd_seconds: u64,
        state: Option<&LogState>,
        temporal_interval: Option<&TemporalInterval>,
    ) -> Result<Self> {
        let description = description.unwrap_or(url).to_string();
        let mmd = i64::try_from(mmd_seconds)
            .ok()
            .and_then(Duration::try_seconds)
            .ok_or_else(|| Error::InvalidMmd(description.clone()))?;

        let mut log = Log::new(description, key.clone(), mmd)?;
        if log.id != declared_id {
            return Err(Error::LogIdMismatch {
                description: log.description,
                declared: declared_id,
                computed: log.id,
            });
        }

        log.operator = Some(operator.to_string());
        log.url = Some(url.to_string());
        log.state = state.cloned();
        log.temporal_interval = temporal_interval.cloned();
        Ok(log)
    }
}

/// An immutable index of CT logs keyed by log ID
///
/// Built once, then only read. Lookups need no locking, so a single registry
/// can be shared by reference across any number of concurrent verifications.
#[derive(Debug, Clone, Default)]
pub struct LogRegistry {
    logs: HashMap<LogId, Log>,
}

impl LogRegistry {
    /// Build a registry from already-constructed logs
    ///
    /// Fails if two logs share an identifier.
    pub fn from_logs(logs: impl IntoIterator<Item = Log>) -> Result<Self> {
        let mut map = HashMap::new();
        for log in logs {
            if map.contains_key(&log.id) {
                return Err(Error::DuplicateLog(log.id));
            }
            map.insert(log.id, log);
        }
        Ok(Self { logs: map })
    }

    /// Build a registry from every log in a parsed log list
    ///
    /// Logs are included whatever their state; retired or rejected logs can
    /// still be looked up so callers may apply their own state policy.
    pub fn from_log_list(list: &LogList) -> Result<Self> {
        let mut logs = Vec::with_capacity(list.log_count());

        for operator in &list.operators {
            for entry in &operator.logs {
                logs.push(Log::from_list(
                    &operator.name,
                    entry.description.as_deref(),
                    entry.log_id,
                    &entry.key,
                    &entry.url,
                    entry.mmd,
                    entry.state.as_ref(),
                    entry.temporal_interval.as_ref(),
                )?);
            }
            for entry in &operator.tiled_logs {
                logs.push(Log::from_list(
                    &operator.name,
                    entry.description.as_deref(),
                    entry.log_id,
                    &entry.key,
                    &entry.submission_url,
                    entry.mmd,
                    entry.state.as_ref(),
                    entry.temporal_interval.as_ref(),
                )?);
            }
        }

        let registry = Self::from_logs(logs)?;
        tracing::debug!(
            "built log registry with {} logs from list version {:?}",
            registry.len(),
            list.version
        );
        Ok(registry)
    }

    /// Parse a log list from JSON and build a registry from it
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_log_list(&LogList::from_json(json)?)
    }

    /// Load a log list file and build a registry from it
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        Self::from_log_list(&LogList::from_file(path)?)
    }

    /// Look up a log by identifier
    pub fn find_by_id(&self, id: &LogId) -> Option<&Log> {
        self.logs.get(id)
    }

    pub fn len(&self) -> usize {
        self.logs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.logs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Log> {
        self.logs.values()
    }
}
