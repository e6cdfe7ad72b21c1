//! Log list v3 JSON model
//!
//! Mirrors the schema of the public CT log lists
//! (`https://www.gstatic.com/ct/log_list/v3/log_list.json` and its Apple
//! counterpart). Unknown fields are ignored so newer lists keep parsing.

use crate::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sctcheck_types::{DerPublicKey, LogId, Sha256Hash};

/// A complete log list
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LogList {
    /// Version string of the list itself
    #[serde(default)]
    pub version: Option<String>,

    /// When the list was published
    #[serde(default)]
    pub log_list_timestamp: Option<DateTime<Utc>>,

    /// Log operators and their logs
    #[serde(default)]
    pub operators: Vec<Operator>,
}

/// An organisation running one or more logs
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Operator {
    pub name: String,

    #[serde(default)]
    pub email: Vec<String>,

    /// RFC 6962 logs
    #[serde(default)]
    pub logs: Vec<LogEntry>,

    /// Static CT API (tiled) logs
    #[serde(default)]
    pub tiled_logs: Vec<TiledLogEntry>,
}

/// An RFC 6962 log as it appears in the list
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LogEntry {
    #[serde(default)]
    pub description: Option<String>,

    /// Base64 SHA-256 of `key`
    pub log_id: LogId,

    /// Base64 DER SubjectPublicKeyInfo
    pub key: DerPublicKey,

    /// Base URL of the RFC 6962 API
    pub url: String,

    /// Maximum merge delay in seconds
    pub mmd: u64,

    #[serde(default)]
    pub state: Option<LogState>,

    #[serde(default)]
    pub temporal_interval: Option<TemporalInterval>,

    /// "test" for test logs, absent for production logs
    #[serde(default)]
    pub log_type: Option<String>,
}

/// A tiled log as it appears in the list
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TiledLogEntry {
    #[serde(default)]
    pub description: Option<String>,

    pub log_id: LogId,

    pub key: DerPublicKey,

    pub submission_url: String,

    #[serde(default)]
    pub monitoring_url: Option<String>,

    pub mmd: u64,

    #[serde(default)]
    pub state: Option<LogState>,

    #[serde(default)]
    pub temporal_interval: Option<TemporalInterval>,

    #[serde(default)]
    pub log_type: Option<String>,
}

/// Lifecycle state of a log, tagged by name in the JSON
/// (`{"usable": {"timestamp": "..."}}`)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogState {
    Pending {
        timestamp: DateTime<Utc>,
    },
    Qualified {
        timestamp: DateTime<Utc>,
    },
    Usable {
        timestamp: DateTime<Utc>,
    },
    ReadOnly {
        timestamp: DateTime<Utc>,
        final_tree_head: FinalTreeHead,
    },
    Retired {
        timestamp: DateTime<Utc>,
    },
    Rejected {
        timestamp: DateTime<Utc>,
    },
}

impl LogState {
    /// When the log entered this state
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            LogState::Pending { timestamp }
            | LogState::Qualified { timestamp }
            | LogState::Usable { timestamp }
            | LogState::ReadOnly { timestamp, .. }
            | LogState::Retired { timestamp }
            | LogState::Rejected { timestamp } => *timestamp,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            LogState::Pending { .. } => "pending",
            LogState::Qualified { .. } => "qualified",
            LogState::Usable { .. } => "usable",
            LogState::ReadOnly { .. } => "readonly",
            LogState::Retired { .. } => "retired",
            LogState::Rejected { .. } => "rejected",
        }
    }
}

/// Last tree head of a frozen log
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FinalTreeHead {
    pub sha256_root_hash: Sha256Hash,
    pub tree_size: u64,
}

/// Range of certificate expiry times a log accepts
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TemporalInterval {
    pub start_inclusive: DateTime<Utc>,
    pub end_exclusive: DateTime<Utc>,
}

impl TemporalInterval {
    pub fn contains(&self, time: DateTime<Utc>) -> bool {
        time >= self.start_inclusive && time < self.end_exclusive
    }
}

impl LogList {
    /// Parse a log list from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a log list from a file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(Error::Io)?;
        Self::from_json(&json)
    }

    /// Total number of logs across all operators, tiled logs included
    pub fn log_count(&self) -> usize {
        self.operators
            .iter()
            .map(|op| op.logs.len() + op.tiled_logs.len())
            .sum()
    }
}
