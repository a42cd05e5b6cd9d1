//! keyseed - BN254 Key Tooling
//!
//! Two standalone utilities around a local BLS key-management server:
//!
//! 1. **Hex Converter** - Converts hex-encoded curve coordinates and
//!    scalars to decimal strings for display.
//! 2. **DB Populator** - Reads a `players.json` key file and registers
//!    each player's key pair against the server's REST endpoint, printing
//!    every request in curl form before it runs.
//!
//! The units are independent; no data flows between them. The key server
//! itself (and its database) is out of scope here.

pub mod api;
pub mod config;
pub mod convert;
pub mod error;
pub mod keyfile;
pub mod logging;
pub mod populate;

// Re-exports: Hex converter
pub use convert::{hex_to_decimal, ConvertError};

// Re-exports: Players file
pub use keyfile::{load_players, parse_players, BlsKeyBundle, KeyfileError, PlayerRecord};

// Re-exports: API client
pub use api::{ApiError, KeyApiClient, KeySubmitter, RequestPayload, SubmitOutcome, DEFAULT_URL};

// Re-exports: Populator
pub use populate::{PlayerOutcome, PopulateError, PopulateReport};

// Re-exports: Configuration and errors
pub use config::{Config, ConfigError};
pub use error::KeyseedError;
