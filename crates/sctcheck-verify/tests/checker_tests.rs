//! Source fallback and reason precedence of the evidence checker

mod common;

use base64::Engine;
use chrono::{DateTime, Duration, TimeZone, Utc};
use common::{flip_signature_bit, millis, registry, t0, TestLog, TestPki};
use rstest::rstest;
use sctcheck_loglist::{Log, LogRegistry};
use sctcheck_types::{DerPublicKey, LogId};
use sctcheck_verify::{
    CertificateChain, ConnectionEvidence, EvidenceChecker, EvidenceSourceKind, FailureReason,
    InclusionStatus, MerkleLeafBuilder, SctVerifier, SerializedSct, VerificationOutcome,
};

fn now() -> DateTime<Utc> {
    t0() + Duration::hours(1)
}

fn failed(reason: FailureReason, source: EvidenceSourceKind) -> VerificationOutcome {
    VerificationOutcome::Failed {
        reason,
        source: Some(source),
    }
}

#[test]
fn test_no_connection_state() {
    let log = TestLog::new("log");
    let registry = registry(&[&log]);
    let checker = EvidenceChecker::new(SctVerifier::new(&registry));

    assert_eq!(
        checker.check_connection_evidence_at(None, now()),
        VerificationOutcome::Failed {
            reason: FailureReason::NoConnectionState,
            source: None
        }
    );
}

#[test]
fn test_empty_chain_ignores_scts() {
    let log = TestLog::new("log");
    let registry = registry(&[&log]);
    let pki = TestPki::new();
    let sct = log.sign_chain_sct(&pki.chain(pki.leaf()), millis(t0()));

    let evidence = ConnectionEvidence::new(CertificateChain::default())
        .with_handshake_scts(vec![sct.clone()])
        .with_ocsp_scts(vec![sct]);
    let checker = EvidenceChecker::new(SctVerifier::new(&registry));

    assert_eq!(
        checker.check_connection_evidence_at(Some(&evidence), now()),
        VerificationOutcome::Failed {
            reason: FailureReason::NoPeerCertificates,
            source: None
        }
    );
}

#[test]
fn test_all_sources_empty() {
    let log = TestLog::new("log");
    let registry = registry(&[&log]);
    let pki = TestPki::new();
    let evidence = ConnectionEvidence::new(pki.chain(pki.leaf()));
    let checker = EvidenceChecker::new(SctVerifier::new(&registry));

    let outcome = checker.check_connection_evidence_at(Some(&evidence), now());
    assert_eq!(
        outcome,
        failed(FailureReason::NoEvidenceFound, EvidenceSourceKind::Ocsp)
    );
}

#[rstest]
#[case::handshake(EvidenceSourceKind::Handshake)]
#[case::embedded(EvidenceSourceKind::Embedded)]
#[case::ocsp(EvidenceSourceKind::Ocsp)]
fn test_each_source_alone_verifies(#[case] kind: EvidenceSourceKind) {
    let log = TestLog::new("log");
    let registry = registry(&[&log]);
    let pki = TestPki::new();
    let timestamp = millis(t0());

    let evidence = match kind {
        EvidenceSourceKind::Embedded => {
            ConnectionEvidence::new(pki.chain(pki.leaf_with_embedded(&[(&log, timestamp)])))
        }
        EvidenceSourceKind::Handshake => {
            let chain = pki.chain(pki.leaf());
            let sct = log.sign_chain_sct(&chain, timestamp);
            ConnectionEvidence::new(chain).with_handshake_scts(vec![sct])
        }
        EvidenceSourceKind::Ocsp => {
            let chain = pki.chain(pki.leaf());
            let sct = log.sign_chain_sct(&chain, timestamp);
            ConnectionEvidence::new(chain).with_ocsp_scts(vec![sct])
        }
    };

    let checker = EvidenceChecker::new(SctVerifier::new(&registry));
    match checker.check_connection_evidence_at(Some(&evidence), now()) {
        VerificationOutcome::Verified(verified) => {
            assert_eq!(verified.source, Some(kind));
            assert_eq!(verified.log_id, log.id());
        }
        other => panic!("expected success, got {:?}", other),
    }
}

#[test]
fn test_first_success_short_circuits() {
    let first = TestLog::new("first");
    let second = TestLog::new("second");
    let registry = registry(&[&first, &second]);
    let pki = TestPki::new();
    let chain = pki.chain(pki.leaf());
    let timestamp = millis(t0());

    let evidence = ConnectionEvidence::new(chain.clone())
        .with_handshake_scts(vec![
            first.sign_chain_sct(&chain, timestamp),
            second.sign_chain_sct(&chain, timestamp),
        ])
        .with_ocsp_scts(vec![second.sign_chain_sct(&chain, timestamp)]);

    let checker = EvidenceChecker::new(SctVerifier::new(&registry));
    let verified = checker
        .check_connection_evidence_at(Some(&evidence), now())
        .into_result()
        .unwrap();
    assert_eq!(verified.log_id, first.id());
    assert_eq!(verified.source, Some(EvidenceSourceKind::Handshake));
}

#[test]
fn test_bit_flip_only_affects_that_sct() {
    let a = TestLog::new("a");
    let b = TestLog::new("b");
    let registry = registry(&[&a, &b]);
    let pki = TestPki::new();
    let chain = pki.chain(pki.leaf());
    let timestamp = millis(t0());
    let broken = flip_signature_bit(&a.sign_chain_sct(&chain, timestamp));
    let good = b.sign_chain_sct(&chain, timestamp);
    let checker = EvidenceChecker::new(SctVerifier::new(&registry));

    // Same source
    let evidence = ConnectionEvidence::new(chain.clone())
        .with_handshake_scts(vec![broken.clone(), good.clone()]);
    let verified = checker
        .check_connection_evidence_at(Some(&evidence), now())
        .into_result()
        .unwrap();
    assert_eq!(verified.log_id, b.id());

    // Across sources
    let evidence = ConnectionEvidence::new(chain.clone())
        .with_handshake_scts(vec![broken.clone()])
        .with_ocsp_scts(vec![good.clone()]);
    let verified = checker
        .check_connection_evidence_at(Some(&evidence), now())
        .into_result()
        .unwrap();
    assert_eq!(verified.source, Some(EvidenceSourceKind::Ocsp));

    assert!(!checker.verify_one_at(EvidenceSourceKind::Handshake, &broken, &chain, now()));
    assert!(checker.verify_one_at(EvidenceSourceKind::Handshake, &good, &chain, now()));
}

#[test]
fn test_unknown_log_then_success() {
    let trusted = TestLog::new("trusted");
    let stranger = TestLog::new("stranger");
    let registry = registry(&[&trusted]);
    let pki = TestPki::new();
    let chain = pki.chain(pki.leaf());
    let timestamp = millis(t0());
    let checker = EvidenceChecker::new(SctVerifier::new(&registry));

    let evidence = ConnectionEvidence::new(chain.clone()).with_handshake_scts(vec![
        stranger.sign_chain_sct(&chain, timestamp),
        trusted.sign_chain_sct(&chain, timestamp),
    ]);
    assert!(checker
        .check_connection_evidence_at(Some(&evidence), now())
        .is_verified());

    let evidence = ConnectionEvidence::new(chain.clone())
        .with_handshake_scts(vec![stranger.sign_chain_sct(&chain, timestamp)])
        .with_ocsp_scts(vec![trusted.sign_chain_sct(&chain, timestamp)]);
    assert!(checker
        .check_connection_evidence_at(Some(&evidence), now())
        .is_verified());
}

#[test]
fn test_embedded_without_issuer_falls_through_to_ocsp() {
    let log = TestLog::new("log");
    let registry = registry(&[&log]);
    let pki = TestPki::new();
    let timestamp = millis(t0());
    let leaf = pki.leaf_with_embedded(&[(&log, timestamp)]);
    let lone = CertificateChain::new(vec![leaf]);
    let checker = EvidenceChecker::new(SctVerifier::new(&registry));

    // Embedded alone fails for want of an issuer
    let evidence = ConnectionEvidence::new(lone.clone());
    let outcome = checker.check_connection_evidence_at(Some(&evidence), now());
    assert_eq!(outcome.reason(), Some(&FailureReason::NoEvidenceFound));

    // ...and is skipped in favour of a good OCSP SCT
    let evidence = ConnectionEvidence::new(lone.clone())
        .with_ocsp_scts(vec![log.sign_chain_sct(&lone, timestamp)]);
    let verified = checker
        .check_connection_evidence_at(Some(&evidence), now())
        .into_result()
        .unwrap();
    assert_eq!(verified.source, Some(EvidenceSourceKind::Ocsp));

    let embedded = SerializedSct::new(vec![0; 8]);
    assert!(!checker.verify_one_at(EvidenceSourceKind::Embedded, &embedded, &lone, now()));
}

#[test]
fn test_embedded_without_issuer_reports_chain_build_failure() {
    let log = TestLog::new("log");
    let registry = registry(&[&log]);
    let pki = TestPki::new();
    let leaf = pki.leaf_with_embedded(&[(&log, millis(t0()))]);
    let lone = ConnectionEvidence::new(CertificateChain::new(vec![leaf]));
    let checker = EvidenceChecker::new(SctVerifier::new(&registry));

    let result = checker.check_source_at(EvidenceSourceKind::Embedded, &lone, now());
    assert!(matches!(result, Err(FailureReason::ChainBuildFailure(_))));

    // The same SCTs verify once the issuer is present
    let full = ConnectionEvidence::new(pki.chain(lone.chain.leaf().unwrap().clone()));
    assert!(checker
        .check_source_at(EvidenceSourceKind::Embedded, &full, now())
        .is_ok());
}

#[test]
fn test_garbage_embedded_list_is_malformed() {
    let log = TestLog::new("log");
    let registry = registry(&[&log]);
    let pki = TestPki::new();
    let evidence = ConnectionEvidence::new(pki.chain(pki.leaf()))
        .with_embedded_scts(vec![SerializedSct::new(vec![1, 2, 3])]);
    let checker = EvidenceChecker::new(SctVerifier::new(&registry));

    assert!(matches!(
        checker.check_source_at(EvidenceSourceKind::Embedded, &evidence, now()),
        Err(FailureReason::MalformedSct(_))
    ));
}

/// Precedence rule: the last source tried always supplies the reported
/// reason, even a bare "no evidence" hiding an earlier concrete failure.
#[test]
fn test_last_recorded_reason_wins_across_sources() {
    let log = TestLog::new("log");
    let registry = registry(&[&log]);
    let pki = TestPki::new();
    let chain = pki.chain(pki.leaf());
    let timestamp = millis(t0());
    let broken = flip_signature_bit(&log.sign_chain_sct(&chain, timestamp));
    let checker = EvidenceChecker::new(SctVerifier::new(&registry));

    let evidence = ConnectionEvidence::new(chain.clone()).with_handshake_scts(vec![broken.clone()]);
    assert_eq!(
        checker.check_connection_evidence_at(Some(&evidence), now()),
        failed(FailureReason::NoEvidenceFound, EvidenceSourceKind::Ocsp)
    );

    let evidence = ConnectionEvidence::new(chain.clone()).with_ocsp_scts(vec![broken]);
    assert_eq!(
        checker.check_connection_evidence_at(Some(&evidence), now()),
        failed(
            FailureReason::SignatureMismatch(log.id()),
            EvidenceSourceKind::Ocsp
        )
    );
}

#[test]
fn test_last_failure_within_source_wins() {
    let log = TestLog::new("log");
    let stranger = TestLog::new("stranger");
    let registry = registry(&[&log]);
    let pki = TestPki::new();
    let chain = pki.chain(pki.leaf());
    let timestamp = millis(t0());
    let broken = flip_signature_bit(&log.sign_chain_sct(&chain, timestamp));
    let unknown = stranger.sign_chain_sct(&chain, timestamp);
    let checker = EvidenceChecker::new(SctVerifier::new(&registry));

    let evidence = ConnectionEvidence::new(chain.clone())
        .with_ocsp_scts(vec![broken.clone(), unknown.clone()]);
    assert_eq!(
        checker.check_connection_evidence_at(Some(&evidence), now()),
        failed(
            FailureReason::UnknownLog(stranger.id()),
            EvidenceSourceKind::Ocsp
        )
    );

    let evidence = ConnectionEvidence::new(chain).with_ocsp_scts(vec![unknown, broken]);
    assert_eq!(
        checker.check_connection_evidence_at(Some(&evidence), now()),
        failed(
            FailureReason::SignatureMismatch(log.id()),
            EvidenceSourceKind::Ocsp
        )
    );
}

#[test]
fn test_stale_sct_everywhere() {
    let log = TestLog::new("log");
    let registry = registry(&[&log]);
    let pki = TestPki::new();
    let chain = pki.chain(pki.leaf());
    let sct = log.sign_chain_sct(&chain, millis(t0()));
    let evidence = ConnectionEvidence::new(chain).with_ocsp_scts(vec![sct]);
    let checker = EvidenceChecker::new(SctVerifier::new(&registry));

    assert_eq!(
        checker.check_connection_evidence_at(Some(&evidence), t0() + Duration::hours(25)),
        failed(
            FailureReason::InclusionFailedStale(log.id()),
            EvidenceSourceKind::Ocsp
        )
    );
}

#[test]
fn test_embedded_scts_read_from_leaf() {
    let a = TestLog::new("a");
    let b = TestLog::new("b");
    let registry = registry(&[&b]);
    let pki = TestPki::new();
    let timestamp = millis(t0());
    let chain = pki.chain(pki.leaf_with_embedded(&[(&a, timestamp), (&b, timestamp)]));
    let checker = EvidenceChecker::new(SctVerifier::new(&registry));

    let verified = checker
        .check_connection_evidence_at(Some(&ConnectionEvidence::new(chain.clone())), now())
        .into_result()
        .unwrap();
    assert_eq!(verified.source, Some(EvidenceSourceKind::Embedded));
    assert_eq!(verified.log_id, b.id());

    // An embedded SCT does not verify as a handshake SCT for the same chain
    let scts = sctcheck_verify::embedded_scts(chain.leaf().unwrap()).unwrap();
    assert_eq!(scts.len(), 2);
    assert!(checker.verify_one_at(EvidenceSourceKind::Embedded, &scts[1], &chain, now()));
    assert!(!checker.verify_one_at(EvidenceSourceKind::Handshake, &scts[1], &chain, now()));
}

#[test]
fn test_verify_one_wrappers() {
    let log = TestLog::new("log");
    let registry = registry(&[&log]);
    let pki = TestPki::new();
    let chain = pki.chain(pki.leaf());
    let sct = log.sign_chain_sct(&chain, millis(Utc::now()));
    let checker = EvidenceChecker::new(SctVerifier::new(&registry));

    assert!(checker.verify_handshake_sct(&sct, &chain));
    assert!(checker.verify_ocsp_sct(&sct, &chain));
    assert!(!checker.verify_embedded_sct(&sct, &chain));
    assert!(!checker.verify_handshake_sct(&sct, &CertificateChain::default()));
}

#[test]
fn test_embedded_sct_requires_extension_on_leaf() {
    let log = TestLog::new("log");
    let registry = registry(&[&log]);
    let pki = TestPki::new();
    let chain = pki.chain(pki.leaf());
    // Signed over the precert form of a leaf that never had SCTs embedded
    let leaf = MerkleLeafBuilder::build_for_embedded_sct(
        chain.leaf().unwrap(),
        chain.issuer().unwrap(),
    )
    .unwrap();
    let sct = log.sign_sct(&leaf, millis(t0()));
    let checker = EvidenceChecker::new(SctVerifier::new(&registry));

    let supplied = ConnectionEvidence::new(chain.clone()).with_embedded_scts(vec![sct.clone()]);
    assert!(checker
        .check_source_at(EvidenceSourceKind::Embedded, &supplied, now())
        .is_ok());
    assert!(!checker.verify_one_at(EvidenceSourceKind::Embedded, &sct, &chain, now()));
    assert!(!checker.verify_embedded_sct(&sct, &chain));
}

// Fulcio certificate from a sigstore-conformance bundle, its intermediate and
// the key of the log that embedded its SCT
const SIGSTORE_LEAF: &str = "\
    MIIIGTCCB5+gAwIBAgIUBPWs4OPN1kte0mUMGZrZ6ozMVRkwCgYIKoZIzj0EAwMwNzEVMBMGA1UE\
    ChMMc2lnc3RvcmUuZGV2MR4wHAYDVQQDExVzaWdzdG9yZS1pbnRlcm1lZGlhdGUwHhcNMjMwNzEy\
    MTU1NjM1WhcNMjMwNzEyMTYwNjM1WjAAMFkwEwYHKoZIzj0CAQYIKoZIzj0DAQcDQgAEVr33uVAP\
    A1SpA5w/mmBF9ariW8E7oizIQKqiYfxwSb1zftqZZX045y3tPbRkIWe+t7MUYliQknQ954rDDEAS\
    nKOCBr4wgga6MA4GA1UdDwEB/wQEAwIHgDATBgNVHSUEDDAKBggrBgEFBQcDAzAdBgNVHQ4EFgQU\
    x2TNZkruHC2aCdyIXscI8N/8q2owHwYDVR0jBBgwFoAU39Ppz1YkEZb5qNjpKFWixi4YZD8wgaUG\
    A1UdEQEB/wSBmjCBl4aBlGh0dHBzOi8vZ2l0aHViLmNvbS9zaWdzdG9yZS1jb25mb3JtYW5jZS9l\
    eHRyZW1lbHktZGFuZ2Vyb3VzLXB1YmxpYy1vaWRjLWJlYWNvbi8uZ2l0aHViL3dvcmtmbG93cy9l\
    eHRyZW1lbHktZGFuZ2Vyb3VzLW9pZGMtYmVhY29uLnltbEByZWZzL2hlYWRzL21haW4wOQYKKwYB\
    BAGDvzABAQQraHR0cHM6Ly90b2tlbi5hY3Rpb25zLmdpdGh1YnVzZXJjb250ZW50LmNvbTAfBgor\
    BgEEAYO/MAECBBF3b3JrZmxvd19kaXNwYXRjaDA2BgorBgEEAYO/MAEDBChhZjc4NWI2ZDNiMGZh\
    MGMwYWExMzA1ZmFlZTdjZTYwMzZlOGQ5MGM0MC0GCisGAQQBg78wAQQEH0V4dHJlbWVseSBkYW5n\
    ZXJvdXMgT0lEQyBiZWFjb24wSQYKKwYBBAGDvzABBQQ7c2lnc3RvcmUtY29uZm9ybWFuY2UvZXh0\
    cmVtZWx5LWRhbmdlcm91cy1wdWJsaWMtb2lkYy1iZWFjb24wHQYKKwYBBAGDvzABBgQPcmVmcy9o\
    ZWFkcy9tYWluMDsGCisGAQQBg78wAQgELQwraHR0cHM6Ly90b2tlbi5hY3Rpb25zLmdpdGh1YnVz\
    ZXJjb250ZW50LmNvbTCBpgYKKwYBBAGDvzABCQSBlwyBlGh0dHBzOi8vZ2l0aHViLmNvbS9zaWdz\
    dG9yZS1jb25mb3JtYW5jZS9leHRyZW1lbHktZGFuZ2Vyb3VzLXB1YmxpYy1vaWRjLWJlYWNvbi8u\
    Z2l0aHViL3dvcmtmbG93cy9leHRyZW1lbHktZGFuZ2Vyb3VzLW9pZGMtYmVhY29uLnltbEByZWZz\
    L2hlYWRzL21haW4wOAYKKwYBBAGDvzABCgQqDChhZjc4NWI2ZDNiMGZhMGMwYWExMzA1ZmFlZTdj\
    ZTYwMzZlOGQ5MGM0MB0GCisGAQQBg78wAQsEDwwNZ2l0aHViLWhvc3RlZDBeBgorBgEEAYO/MAEM\
    BFAMTmh0dHBzOi8vZ2l0aHViLmNvbS9zaWdzdG9yZS1jb25mb3JtYW5jZS9leHRyZW1lbHktZGFu\
    Z2Vyb3VzLXB1YmxpYy1vaWRjLWJlYWNvbjA4BgorBgEEAYO/MAENBCoMKGFmNzg1YjZkM2IwZmEw\
    YzBhYTEzMDVmYWVlN2NlNjAzNmU4ZDkwYzQwHwYKKwYBBAGDvzABDgQRDA9yZWZzL2hlYWRzL21h\
    aW4wGQYKKwYBBAGDvzABDwQLDAk2MzI1OTY4OTcwNwYKKwYBBAGDvzABEAQpDCdodHRwczovL2dp\
    dGh1Yi5jb20vc2lnc3RvcmUtY29uZm9ybWFuY2UwGQYKKwYBBAGDvzABEQQLDAkxMzE4MDQ1NjMw\
    gaYGCisGAQQBg78wARIEgZcMgZRodHRwczovL2dpdGh1Yi5jb20vc2lnc3RvcmUtY29uZm9ybWFu\
    Y2UvZXh0cmVtZWx5LWRhbmdlcm91cy1wdWJsaWMtb2lkYy1iZWFjb24vLmdpdGh1Yi93b3JrZmxv\
    d3MvZXh0cmVtZWx5LWRhbmdlcm91cy1vaWRjLWJlYWNvbi55bWxAcmVmcy9oZWFkcy9tYWluMDgG\
    CisGAQQBg78wARMEKgwoYWY3ODViNmQzYjBmYTBjMGFhMTMwNWZhZWU3Y2U2MDM2ZThkOTBjNDAh\
    BgorBgEEAYO/MAEUBBMMEXdvcmtmbG93X2Rpc3BhdGNoMIGBBgorBgEEAYO/MAEVBHMMcWh0dHBz\
    Oi8vZ2l0aHViLmNvbS9zaWdzdG9yZS1jb25mb3JtYW5jZS9leHRyZW1lbHktZGFuZ2Vyb3VzLXB1\
    YmxpYy1vaWRjLWJlYWNvbi9hY3Rpb25zL3J1bnMvNTUzMzc0MTQ5Ny9hdHRlbXB0cy8xMIGKBgor\
    BgEEAdZ5AgQCBHwEegB4AHYA3T0wasbHETJjGR4cmWc3AqJKXrjePK3/h4pygC8p7o4AAAGJStGT\
    CwAABAMARzBFAiBCA4jZQP4CwMiWoeS7WMW46QkI4e7OsNH3yVhf5wdBvgIhAPJYxdsi9NqOXVZs\
    EUtCup8m1m/2zG39FTGlgE0MorDFMAoGCCqGSM49BAMDA2gAMGUCMEYWRwI5QJeOwNCuV4tnZ0n5\
    QNlUlP0BtX5V2ZTQLqcQbWtneC7tLptiYgr0Z62UDQIxAO6ItXAH+sbZcsbj08xr3GApM6hjvyTA\
    l39pS3Y3sZwAz8lfQDHNL4eALEo1heAYVg==";

const SIGSTORE_INTERMEDIATE: &str = "\
    MIICGjCCAaGgAwIBAgIUALnViVfnU0brJasmRkHrn/UnfaQwCgYIKoZIzj0EAwMwKjEVMBMGA1UE\
    ChMMc2lnc3RvcmUuZGV2MREwDwYDVQQDEwhzaWdzdG9yZTAeFw0yMjA0MTMyMDA2MTVaFw0zMTEw\
    MDUxMzU2NThaMDcxFTATBgNVBAoTDHNpZ3N0b3JlLmRldjEeMBwGA1UEAxMVc2lnc3RvcmUtaW50\
    ZXJtZWRpYXRlMHYwEAYHKoZIzj0CAQYFK4EEACIDYgAE8RVS/ysH+NOvuDZyPIZtilgUF9NlarYp\
    Ad9HP1vBBH1U5CV77LSS7s0ZiH4nE7Hv7ptS6LvvR/STk798LVgMzLlJ4HeIfF3tHSaexLcYpSAS\
    r1kS0N/RgBJz/9jWCiXno3sweTAOBgNVHQ8BAf8EBAMCAQYwEwYDVR0lBAwwCgYIKwYBBQUHAwMw\
    EgYDVR0TAQH/BAgwBgEB/wIBADAdBgNVHQ4EFgQU39Ppz1YkEZb5qNjpKFWixi4YZD8wHwYDVR0j\
    BBgwFoAUWMAeX5FFpWapesyQoZMi0CrFxfowCgYIKoZIzj0EAwMDZwAwZAIwPCsQK4DYiZYDPIaD\
    i5HFKnfxXx6ASSVmERfsynYBiX2X6SJRnZU84/9DZdnFvvxmAjBOt6QpBlc4J/0DxvkTCqpclvzi\
    L6BCCPnjdlIB3Pu3BxsPmygUY7Ii2zbdCdliiow=";

const CTFE_2022_KEY: &str = "\
    MFkwEwYHKoZIzj0CAQYIKoZIzj0DAQcDQgAEiPSlFi0CmFTfEjCUqF9HuCEcYXNKAaYalIJmBZ8y\
    yezPjTqhxrKBpMnaocVtLJBI1eM3uXnQzQGAJdJ4gs9Fyw==";

const CTFE_2022_LOG_ID: &str = "3T0wasbHETJjGR4cmWc3AqJKXrjePK3/h4pygC8p7o4=";

fn decode_base64(data: &str) -> Vec<u8> {
    base64::engine::general_purpose::STANDARD.decode(data).unwrap()
}

fn sigstore_evidence() -> ConnectionEvidence {
    ConnectionEvidence::new(CertificateChain::from_der([
        decode_base64(SIGSTORE_LEAF),
        decode_base64(SIGSTORE_INTERMEDIATE),
    ]))
}

fn ctfe_2022(key: Vec<u8>) -> Log {
    Log::new("sigstore ctfe 2022", DerPublicKey::new(key), Duration::hours(24)).unwrap()
}

/// 2023-07-12T15:56:35.979Z
fn sigstore_sct_time() -> DateTime<Utc> {
    Utc.timestamp_millis_opt(1_689_177_395_979).unwrap()
}

#[test]
fn test_recorded_sigstore_certificate() {
    let log = ctfe_2022(decode_base64(CTFE_2022_KEY));
    assert_eq!(log.id, LogId::from_base64(CTFE_2022_LOG_ID).unwrap());
    let registry = LogRegistry::from_logs([log.clone()]).unwrap();
    let checker = EvidenceChecker::new(SctVerifier::new(&registry));

    let verified = checker
        .check_connection_evidence_at(
            Some(&sigstore_evidence()),
            sigstore_sct_time() + Duration::hours(1),
        )
        .into_result()
        .unwrap();

    assert_eq!(verified.source, Some(EvidenceSourceKind::Embedded));
    assert_eq!(verified.log_id, log.id);
    assert_eq!(verified.log_description, "sigstore ctfe 2022");
    assert_eq!(verified.timestamp, sigstore_sct_time());
    assert_eq!(
        verified.inclusion,
        InclusionStatus::PendingWithinMmd {
            age: Duration::hours(1)
        }
    );
}

#[test]
fn test_recorded_sigstore_certificate_wrong_log_key() {
    let other_key = TestLog::new("other").log.key.into_bytes();
    let now = sigstore_sct_time() + Duration::hours(1);

    // A different key under the real log ID fails the signature
    let mut impostor = ctfe_2022(other_key.clone());
    impostor.id = LogId::from_base64(CTFE_2022_LOG_ID).unwrap();
    let registry = LogRegistry::from_logs([impostor]).unwrap();
    let checker = EvidenceChecker::new(SctVerifier::new(&registry));
    assert_eq!(
        checker.check_source_at(EvidenceSourceKind::Embedded, &sigstore_evidence(), now),
        Err(FailureReason::SignatureMismatch(
            LogId::from_base64(CTFE_2022_LOG_ID).unwrap()
        ))
    );

    // Under its own ID the log is simply not the one that issued the SCT
    let registry = LogRegistry::from_logs([ctfe_2022(other_key)]).unwrap();
    let checker = EvidenceChecker::new(SctVerifier::new(&registry));
    assert_eq!(
        checker.check_source_at(EvidenceSourceKind::Embedded, &sigstore_evidence(), now),
        Err(FailureReason::UnknownLog(
            LogId::from_base64(CTFE_2022_LOG_ID).unwrap()
        ))
    );
    assert!(!checker
        .check_connection_evidence_at(Some(&sigstore_evidence()), now)
        .is_verified());
}
