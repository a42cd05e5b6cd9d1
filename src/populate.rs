//! Database Populator
//!
//! Seeds the key server with every player in a players file, one POST per
//! player, in file-declaration order. Each request is printed in curl form
//! before it runs, so the output doubles as a reviewable script; with
//! dry-run the printing happens without any network traffic.
//!
//! A request that fails (transport error or non-2xx response) is recorded
//! and iteration continues with the next player. A record that fails to
//! parse aborts the run before any request is issued.

use std::path::Path;
use thiserror::Error;
use tracing::{info, warn};

use crate::api::{render_curl, ApiError, KeySubmitter, RequestPayload};
use crate::keyfile::{self, KeyfileError, PlayerRecord};

/// Populate error types. Request failures are not errors at this level;
/// they land in the report instead.
#[derive(Debug, Error)]
pub enum PopulateError {
    #[error(transparent)]
    Keyfile(#[from] KeyfileError),

    #[error("failed to encode payload for player {player}: {source}")]
    Encode {
        player: String,
        #[source]
        source: serde_json::Error,
    },
}

/// What happened to one player's request
#[derive(Debug)]
pub enum PlayerOutcome {
    /// The server answered; 2xx or not, its response is kept verbatim
    Submitted { status: u16, body: String },
    /// The request never got an answer
    TransportFailed(ApiError),
    /// Dry run, nothing sent
    Skipped,
}

/// Per-player outcomes of a populate run, in submission order
#[derive(Debug, Default)]
pub struct PopulateReport {
    pub outcomes: Vec<(String, PlayerOutcome)>,
}

impl PopulateReport {
    /// Players whose request got a 2xx response
    pub fn succeeded(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, o)| matches!(o, PlayerOutcome::Submitted { status, .. } if (200..300).contains(status)))
            .count()
    }

    /// Players whose request failed in transit or was rejected
    pub fn failed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, o)| match o {
                PlayerOutcome::Submitted { status, .. } => !(200..300).contains(status),
                PlayerOutcome::TransportFailed(_) => true,
                PlayerOutcome::Skipped => false,
            })
            .count()
    }
}

/// Load a players file and submit every record.
pub async fn run<S>(
    submitter: &S,
    path: &Path,
    base_url: &str,
    dry_run: bool,
) -> Result<PopulateReport, PopulateError>
where
    S: KeySubmitter + ?Sized,
{
    let players = keyfile::load_players(path)?;
    run_players(submitter, &players, base_url, dry_run).await
}

/// Submit already-parsed player records, in the order given.
pub async fn run_players<S>(
    submitter: &S,
    players: &[(String, PlayerRecord)],
    base_url: &str,
    dry_run: bool,
) -> Result<PopulateReport, PopulateError>
where
    S: KeySubmitter + ?Sized,
{
    println!("# Commands to populate the database with player data");
    println!("# Run these commands after starting the web server");
    println!();

    let mut report = PopulateReport::default();

    for (name, record) in players {
        println!("# Adding {}'s key pair", name);

        let payload = RequestPayload::from(record);
        let cmd = render_curl(base_url, &payload).map_err(|e| PopulateError::Encode {
            player: name.clone(),
            source: e,
        })?;
        println!("{}", cmd);

        if dry_run {
            println!();
            report.outcomes.push((name.clone(), PlayerOutcome::Skipped));
            continue;
        }

        println!("\nExecuting command...");
        match submitter.submit_key(&payload).await {
            Ok(outcome) => {
                if !outcome.body.is_empty() {
                    println!("{}", outcome.body);
                }
                if outcome.is_success() {
                    info!(
                        target: "keyseed::populate",
                        player = %name,
                        status = outcome.status,
                        "key pair submitted"
                    );
                } else {
                    warn!(
                        target: "keyseed::populate",
                        player = %name,
                        status = outcome.status,
                        body = %outcome.body,
                        "server rejected key pair"
                    );
                }
                report.outcomes.push((
                    name.clone(),
                    PlayerOutcome::Submitted {
                        status: outcome.status,
                        body: outcome.body,
                    },
                ));
            }
            Err(e) => {
                warn!(target: "keyseed::populate", player = %name, error = %e, "request failed");
                report
                    .outcomes
                    .push((name.clone(), PlayerOutcome::TransportFailed(e)));
            }
        }
        println!();
    }

    info!(
        target: "keyseed::populate",
        players = report.outcomes.len(),
        succeeded = report.succeeded(),
        failed = report.failed(),
        "populate run complete"
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{MockKeySubmitter, SubmitOutcome};
    use crate::keyfile::parse_players;
    use mockall::Sequence;
    use std::env;
    use std::fs;

    fn two_players() -> Vec<(String, PlayerRecord)> {
        let bundle = r#"{"g1_x":"1","g1_y":"2","g2_x_0":"3","g2_x_1":"4","g2_y_0":"5","g2_y_1":"6","priv_key":"7"}"#;
        let data = format!(
            r#"{{"alice":{{"pub":"0xA1","bls":{b}}},"bob":{{"pub":"0xB2","bls":{b}}}}}"#,
            b = bundle
        );
        parse_players(&data).unwrap()
    }

    fn ok_outcome() -> SubmitOutcome {
        SubmitOutcome {
            status: 200,
            body: String::new(),
        }
    }

    fn encode_failure() -> ApiError {
        ApiError::Encode(serde_json::from_str::<i32>("x").unwrap_err())
    }

    #[tokio::test]
    async fn test_submits_in_file_order() {
        let players = two_players();
        let mut mock = MockKeySubmitter::new();
        let mut seq = Sequence::new();

        mock.expect_submit_key()
            .withf(|p| p.eoa_address == "0xA1")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(ok_outcome()));
        mock.expect_submit_key()
            .withf(|p| p.eoa_address == "0xB2")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(ok_outcome()));

        let report = run_players(&mock, &players, "http://localhost:8080", false)
            .await
            .unwrap();

        assert_eq!(report.outcomes.len(), 2);
        assert_eq!(report.succeeded(), 2);
        assert_eq!(report.failed(), 0);
    }

    #[tokio::test]
    async fn test_first_failure_does_not_stop_second() {
        let players = two_players();
        let mut mock = MockKeySubmitter::new();
        let mut seq = Sequence::new();

        mock.expect_submit_key()
            .withf(|p| p.eoa_address == "0xA1")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Err(encode_failure()));
        mock.expect_submit_key()
            .withf(|p| p.eoa_address == "0xB2")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(ok_outcome()));

        let report = run_players(&mock, &players, "http://localhost:8080", false)
            .await
            .unwrap();

        assert_eq!(report.outcomes.len(), 2);
        assert!(matches!(
            report.outcomes[0].1,
            PlayerOutcome::TransportFailed(_)
        ));
        assert!(matches!(
            report.outcomes[1].1,
            PlayerOutcome::Submitted { status: 200, .. }
        ));
        assert_eq!(report.succeeded(), 1);
        assert_eq!(report.failed(), 1);
    }

    #[tokio::test]
    async fn test_server_rejection_counts_as_failed() {
        let players = two_players();
        let mut mock = MockKeySubmitter::new();

        mock.expect_submit_key().times(2).returning(|_| {
            Ok(SubmitOutcome {
                status: 500,
                body: "boom".to_string(),
            })
        });

        let report = run_players(&mock, &players, "http://localhost:8080", false)
            .await
            .unwrap();

        assert_eq!(report.succeeded(), 0);
        assert_eq!(report.failed(), 2);
    }

    #[tokio::test]
    async fn test_dry_run_sends_nothing() {
        let players = two_players();
        let mut mock = MockKeySubmitter::new();
        mock.expect_submit_key().times(0);

        let report = run_players(&mock, &players, "http://localhost:8080", true)
            .await
            .unwrap();

        assert_eq!(report.outcomes.len(), 2);
        assert!(report
            .outcomes
            .iter()
            .all(|(_, o)| matches!(o, PlayerOutcome::Skipped)));
        assert_eq!(report.succeeded(), 0);
        assert_eq!(report.failed(), 0);
    }

    #[tokio::test]
    async fn test_bad_record_aborts_before_any_request() {
        // First record is fine, second is missing its bls bundle; nothing
        // may be submitted for either.
        let bundle = r#"{"g1_x":"1","g1_y":"2","g2_x_0":"3","g2_x_1":"4","g2_y_0":"5","g2_y_1":"6","priv_key":"7"}"#;
        let data = format!(
            r#"{{"alice":{{"pub":"0xA1","bls":{b}}},"bob":{{"pub":"0xB2"}}}}"#,
            b = bundle
        );
        let path = env::temp_dir().join("keyseed_test_bad_record.json");
        fs::write(&path, data).unwrap();

        let mut mock = MockKeySubmitter::new();
        mock.expect_submit_key().times(0);

        let err = run(&mock, &path, "http://localhost:8080", false)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            PopulateError::Keyfile(KeyfileError::InvalidRecord { .. })
        ));

        fs::remove_file(&path).ok();
    }

    #[tokio::test]
    async fn test_missing_file_aborts() {
        let mock = MockKeySubmitter::new();
        let err = run(
            &mock,
            Path::new("/nonexistent/players.json"),
            "http://localhost:8080",
            false,
        )
        .await
        .unwrap_err();
        assert!(matches!(
            err,
            PopulateError::Keyfile(KeyfileError::Io { .. })
        ));
    }
}
