//! Players Key File
//!
//! Typed view of `players.json`: a JSON object keyed by player name, each
//! value holding a public address and a nested BLS key bundle. The bundle
//! fields are opaque hex strings; no curve-level validation happens here.

use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Key file error types
#[derive(Debug, Error)]
pub enum KeyfileError {
    #[error("failed to read players file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("players file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("players file must be a JSON object keyed by player name")]
    NotAnObject,

    #[error("invalid record for player {player}: {source}")]
    InvalidRecord {
        player: String,
        #[source]
        source: serde_json::Error,
    },
}

/// BLS key bundle for one player: G1/G2 public key coordinates plus the
/// private scalar, all hex-encoded.
#[derive(Debug, Clone, Deserialize)]
pub struct BlsKeyBundle {
    pub g1_x: String,
    pub g1_y: String,
    pub g2_x_0: String,
    pub g2_x_1: String,
    pub g2_y_0: String,
    pub g2_y_1: String,
    pub priv_key: String,
}

/// One player's entry in the key file
#[derive(Debug, Clone, Deserialize)]
pub struct PlayerRecord {
    /// EOA public address (`pub` in the file)
    #[serde(rename = "pub")]
    pub pub_address: String,
    pub bls: BlsKeyBundle,
}

/// Parse a players document, keeping file-declaration order.
///
/// Any record with a missing or malformed field fails the whole parse with
/// the offending player's name, before any record is handed to a caller.
pub fn parse_players(data: &str) -> Result<Vec<(String, PlayerRecord)>, KeyfileError> {
    let doc: serde_json::Value = serde_json::from_str(data)?;
    let entries = doc.as_object().ok_or(KeyfileError::NotAnObject)?;

    let mut players = Vec::with_capacity(entries.len());
    for (name, value) in entries {
        let record: PlayerRecord =
            serde_json::from_value(value.clone()).map_err(|e| KeyfileError::InvalidRecord {
                player: name.clone(),
                source: e,
            })?;
        players.push((name.clone(), record));
    }

    Ok(players)
}

/// Load and parse a players file from disk.
pub fn load_players(path: &Path) -> Result<Vec<(String, PlayerRecord)>, KeyfileError> {
    let data = fs::read_to_string(path).map_err(|e| KeyfileError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_players(&data)
}
