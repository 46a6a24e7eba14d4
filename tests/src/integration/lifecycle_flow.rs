//! # Lifecycle Flow
//!
//! Drives transitions end to end through the command pipeline against the
//! scripted command executor: submission, confirmation wait, result query,
//! and the status checks around them.

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use tokio_util::sync::CancellationToken;

    use shared_types::{MockCommandExecutor, ValidatorState};
    use vo_lifecycle::{LifecycleConfig, LifecycleError, ValidatorLifecycle};
    use vo_tx_pipeline::PipelineError;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn validator_json(status: &str) -> Vec<u8> {
        format!(r#"{{"status":"{status}","rank":"12","streak":"4"}}"#).into_bytes()
    }

    fn status_json(height: u64) -> Vec<u8> {
        format!(r#"{{"SyncInfo":{{"latest_block_height":"{height}"}}}}"#).into_bytes()
    }

    fn receipt_json(hash: &str) -> Vec<u8> {
        format!(r#"{{"txhash":"{hash}","code":0}}"#).into_bytes()
    }

    fn result_json(hash: &str, code: u32, raw_log: &str) -> Vec<u8> {
        format!(
            r#"{{"txhash":"{hash}","code":{code},"height":"101","raw_log":"{raw_log}"}}"#
        )
        .into_bytes()
    }

    fn lifecycle_with(
        mock: Arc<MockCommandExecutor>,
    ) -> ValidatorLifecycle<MockCommandExecutor> {
        ValidatorLifecycle::new(mock, LifecycleConfig::for_testing())
    }

    fn stub_keyring(mock: &MockCommandExecutor) {
        mock.stub_output("keys show", br#"{"address":"vo1operator"}"#.to_vec());
    }

    // =============================================================================
    // FLOW TESTS
    // =============================================================================

    /// Pause then unpause in sequence against one executor: each transition
    /// sees the state the previous one left behind.
    #[tokio::test(start_paused = true)]
    async fn test_pause_then_unpause_sequence() {
        let mock = Arc::new(MockCommandExecutor::new());
        stub_keyring(&mock);

        // Pause: precondition ACTIVE, postcondition PAUSED.
        mock.stub_output("query validator", validator_json("ACTIVE"));
        mock.stub_output("query validator", validator_json("PAUSED"));
        // Unpause: precondition PAUSED, re-read lands on ACTIVE.
        mock.stub_output("query validator", validator_json("PAUSED"));
        mock.stub_output("query validator", validator_json("ACTIVE"));

        mock.stub_output("tx validator pause", receipt_json("AAAA"));
        mock.stub_output("tx validator unpause", receipt_json("BBBB"));
        mock.stub_output("status", status_json(100));
        mock.stub_output("status", status_json(101));
        mock.stub_output("status", status_json(101));
        mock.stub_output("status", status_json(102));
        mock.stub_output("query tx AAAA", result_json("AAAA", 0, ""));
        mock.stub_output("query tx BBBB", result_json("BBBB", 0, ""));

        let lifecycle = lifecycle_with(mock.clone());
        let cancel = CancellationToken::new();

        lifecycle.pause(&cancel).await.unwrap();
        lifecycle.unpause(&cancel).await.unwrap();

        assert_eq!(mock.calls_matching("tx validator pause"), 1);
        assert_eq!(mock.calls_matching("tx validator unpause"), 1);
    }

    /// A precondition failure is cheap: nothing is submitted and no
    /// confirmation wait happens.
    #[tokio::test]
    async fn test_precondition_failure_never_touches_the_chain() {
        let mock = Arc::new(MockCommandExecutor::new());
        stub_keyring(&mock);
        mock.stub_output("query validator", validator_json("JAILED"));

        let lifecycle = lifecycle_with(mock.clone());
        let err = lifecycle
            .activate(&CancellationToken::new())
            .await
            .unwrap_err();

        match err {
            LifecycleError::MismatchStatus { expected, current } => {
                assert_eq!(expected, ValidatorState::Inactive);
                assert_eq!(current, ValidatorState::Jailed);
            }
            other => panic!("unexpected variant: {other:?}"),
        }
        assert_eq!(mock.calls_matching("tx validator"), 0);
        assert_eq!(mock.calls_matching("status"), 0);
    }

    /// A stalled chain turns into a bounded timeout, not a hang.
    #[tokio::test(start_paused = true)]
    async fn test_stalled_chain_times_out_within_budget() {
        let mock = Arc::new(MockCommandExecutor::new());
        stub_keyring(&mock);
        mock.stub_output("query validator", validator_json("ACTIVE"));
        mock.stub_output("tx validator pause", receipt_json("AAAA"));
        mock.stub_output("status", status_json(100));

        let config = LifecycleConfig::for_testing();
        let budget = config.pipeline.confirm_budget();
        let lifecycle = ValidatorLifecycle::new(mock.clone(), config);

        let started = tokio::time::Instant::now();
        let err = lifecycle
            .pause(&CancellationToken::new())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            LifecycleError::Pipeline(PipelineError::Timeout { budget_secs: 3 })
        ));
        assert!(started.elapsed() >= budget);
        assert!(started.elapsed() < budget + Duration::from_secs(1));
        // The result was never queried for an unconfirmed transaction.
        assert_eq!(mock.calls_matching("query tx"), 0);
    }

    /// Operator interrupt during the confirmation wait is reported as
    /// cancellation, not as a network timeout.
    #[tokio::test(start_paused = true)]
    async fn test_interrupt_during_confirmation_wait() {
        let mock = Arc::new(MockCommandExecutor::new());
        stub_keyring(&mock);
        mock.stub_output("query validator", validator_json("ACTIVE"));
        mock.stub_output("tx validator pause", receipt_json("AAAA"));
        mock.stub_output("status", status_json(100));

        let mut config = LifecycleConfig::for_testing();
        config.pipeline.block_interval_secs = 600;
        let lifecycle = ValidatorLifecycle::new(mock, config);

        let cancel = CancellationToken::new();
        let trigger = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(300)).await;
            trigger.cancel();
        });

        let err = lifecycle.pause(&cancel).await.unwrap_err();
        assert!(matches!(
            err,
            LifecycleError::Pipeline(PipelineError::Cancelled)
        ));
    }

    /// A chain-rejected transaction carries its hash, code, and log all the
    /// way out.
    #[tokio::test(start_paused = true)]
    async fn test_rejection_carries_full_context() {
        let mock = Arc::new(MockCommandExecutor::new());
        stub_keyring(&mock);
        mock.stub_output("query validator", validator_json("INACTIVE"));
        mock.stub_output("tx validator activate", receipt_json("CCCC"));
        mock.stub_output("status", status_json(100));
        mock.stub_output("status", status_json(101));
        mock.stub_output(
            "query tx CCCC",
            result_json("CCCC", 7, "validator is jailed"),
        );

        let lifecycle = lifecycle_with(mock);
        let err = lifecycle
            .activate(&CancellationToken::new())
            .await
            .unwrap_err();

        match err {
            LifecycleError::Pipeline(PipelineError::Transaction {
                hash,
                code,
                raw_log,
            }) => {
                assert_eq!(hash, "CCCC");
                assert_eq!(code, 7);
                assert_eq!(raw_log, "validator is jailed");
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    /// Status reads do not disturb state: two reads with no transaction in
    /// between agree.
    #[tokio::test]
    async fn test_repeated_status_reads_agree() {
        let mock = Arc::new(MockCommandExecutor::new());
        stub_keyring(&mock);
        mock.stub_output("query validator", validator_json("WAITING"));

        let lifecycle = lifecycle_with(mock.clone());
        let first = lifecycle.status().await.unwrap();
        let second = lifecycle.status().await.unwrap();

        assert_eq!(first, second);
        assert_eq!(first.state, ValidatorState::Waiting);
        assert_eq!(first.rank, 12);
        assert_eq!(first.streak, 4);
        assert_eq!(mock.calls_matching("tx validator"), 0);
    }
}
