//! # Genesis Acquisition Flow
//!
//! Exercises the full join-time protocol: chunked fetch, mirror
//! comparison, and checksum verification against the mock fetcher.

#[cfg(test)]
mod tests {
    use base64::engine::general_purpose::STANDARD as BASE64;
    use base64::Engine;
    use sha2::{Digest, Sha256};
    use tokio_util::sync::CancellationToken;

    use vo_genesis_sync::{
        GenesisSyncConfig, GenesisSyncError, GenesisSyncService, MockFetcher,
    };

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    /// A realistic multi-kilobyte genesis split into fixed-size chunks.
    fn large_genesis() -> Vec<u8> {
        let accounts: Vec<String> = (0..64)
            .map(|i| format!(r#"{{"address":"vo1acct{i:04}","amount":"{}"}}"#, i * 1000))
            .collect();
        format!(
            r#"{{"chain_id":"mainnet-1","app_state":{{"accounts":[{}]}}}}"#,
            accounts.join(",")
        )
        .into_bytes()
    }

    /// Stub the chunked endpoint with `document` split into `chunk_size`
    /// pieces, and the relay endpoints with consistent data. Returns the
    /// chunk count.
    fn stub_seed_host(
        mock: &MockFetcher,
        config: &GenesisSyncConfig,
        document: &[u8],
        chunk_size: usize,
    ) -> usize {
        let chunks: Vec<&[u8]> = document.chunks(chunk_size).collect();
        for (i, chunk) in chunks.iter().enumerate() {
            let encoded = BASE64.encode(chunk);
            mock.stub(
                &config.chunk_url(i as u64),
                format!(
                    r#"{{"result":{{"chunk":"{i}","total":"{}","data":"{encoded}"}}}}"#,
                    chunks.len()
                ),
            );
        }
        mock.stub(&config.genesis_url(), document.to_vec());
        let digest = hex::encode(Sha256::digest(document));
        mock.stub(
            &config.checksum_url(),
            format!(r#"{{"checksum":"0x{digest}"}}"#),
        );
        chunks.len()
    }

    // =============================================================================
    // FLOW TESTS
    // =============================================================================

    #[tokio::test]
    async fn test_multi_chunk_join_roundtrip() {
        let config = GenesisSyncConfig::for_testing();
        let mock = MockFetcher::new();
        let document = large_genesis();
        let chunk_count = stub_seed_host(&mock, &config, &document, 256);
        assert!(chunk_count > 1, "fixture must exercise reassembly");

        let service = GenesisSyncService::new(config, mock);
        let verified = service.acquire(&CancellationToken::new()).await.unwrap();

        assert_eq!(verified.as_bytes(), document.as_slice());
    }

    #[tokio::test]
    async fn test_single_tampered_chunk_fails_the_mirror_check() {
        let config = GenesisSyncConfig::for_testing();
        let mock = MockFetcher::new();
        let document = large_genesis();
        let chunk_count = stub_seed_host(&mock, &config, &document, 256);

        // Queue a tampered middle chunk behind the honest one: same size,
        // different bytes.
        let tampered = BASE64.encode(vec![b'!'; 256]);
        mock.stub(
            &config.chunk_url(2),
            format!(
                r#"{{"result":{{"chunk":"2","total":"{chunk_count}","data":"{tampered}"}}}}"#
            ),
        );

        let service = GenesisSyncService::new(config, mock);
        // First acquisition consumes the honest chunk 2 and succeeds.
        assert!(service.acquire(&CancellationToken::new()).await.is_ok());
        // Second acquisition gets the tampered chunk and must not return a
        // document.
        let err = service
            .acquire(&CancellationToken::new())
            .await
            .unwrap_err();
        assert!(matches!(err, GenesisSyncError::MirrorMismatch { .. }));
    }

    #[tokio::test]
    async fn test_checksum_from_different_document_rejects() {
        let config = GenesisSyncConfig::for_testing();
        let mock = MockFetcher::new();
        let document = large_genesis();
        stub_seed_host(&mock, &config, &document, 512);

        // Replace the checksum with one computed over different content.
        let mut other = document.clone();
        other.push(b'\n');
        let wrong = hex::encode(Sha256::digest(&other));
        mock.stub(
            &config.checksum_url(),
            format!(r#"{{"checksum":"0x{wrong}"}}"#),
        );
        let service = GenesisSyncService::new(config.clone(), mock);

        // Honest checksum first, then the wrong one.
        assert!(service.acquire(&CancellationToken::new()).await.is_ok());
        let err = service
            .acquire(&CancellationToken::new())
            .await
            .unwrap_err();
        match err {
            GenesisSyncError::ChecksumMismatch {
                published,
                computed,
            } => {
                assert_eq!(published, wrong);
                assert_eq!(computed, hex::encode(Sha256::digest(&document)));
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_spec_example_chunks_reassemble_to_abc() {
        let config = GenesisSyncConfig::for_testing();
        let mock = MockFetcher::new();
        mock.stub(
            &config.chunk_url(0),
            r#"{"result":{"chunk":"0","total":"3","data":"QQ=="}}"#,
        );
        mock.stub(
            &config.chunk_url(1),
            r#"{"result":{"chunk":"1","total":"3","data":"Qg=="}}"#,
        );
        mock.stub(
            &config.chunk_url(2),
            r#"{"result":{"chunk":"2","total":"3","data":"Qw=="}}"#,
        );
        mock.stub(&config.genesis_url(), b"ABC".to_vec());
        mock.stub(
            &config.checksum_url(),
            format!(r#"{{"checksum":"0x{}"}}"#, hex::encode(Sha256::digest(b"ABC"))),
        );

        let service = GenesisSyncService::new(config, mock);
        let verified = service.acquire(&CancellationToken::new()).await.unwrap();
        assert_eq!(verified.as_bytes(), b"ABC");
    }
}
