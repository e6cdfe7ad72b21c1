//! sctcheck command line client
//!
//! Verifies the Certificate Transparency evidence for a certificate chain
//! against a log list, and classifies certificates by validation level.

use chrono::{DateTime, Utc};
use sctcheck_certlevel::validation_level_der;
use sctcheck_client::HttpInclusionProver;
use sctcheck_loglist::LogRegistry;
use sctcheck_verify::{
    parse_sct_list, CertificateChain, ConnectionEvidence, EvidenceChecker, InclusionStatus,
    SctVerifier, SerializedSct, VerificationOutcome,
};

use std::env;
use std::fs;
use std::process;

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage(&args[0]);
        process::exit(1);
    }

    let command = &args[1];
    let result = match command.as_str() {
        "verify" => verify(&args[2..]),
        "level" => level(&args[2..]),
        _ => {
            eprintln!("Unknown command: {}", command);
            print_usage(&args[0]);
            process::exit(1);
        }
    };

    match result {
        Ok(true) => process::exit(0),
        Ok(false) => process::exit(2),
        Err(e) => {
            eprintln!("Operation failed:\n{}", e);
            process::exit(1);
        }
    }
}

fn print_usage(program: &str) {
    eprintln!("Usage:");
    eprintln!("  {} verify --log-list FILE --chain PEM [--tls-scts FILE] [--ocsp-scts FILE] [--at RFC3339] [--fetch-proofs]", program);
    eprintln!("  {} level --cert PEM", program);
}

/// Value of the flag at `args[*i]`, advancing past it
fn flag_value(args: &[String], i: &mut usize) -> CliResult<String> {
    let flag = &args[*i];
    *i += 1;
    args.get(*i)
        .cloned()
        .ok_or_else(|| format!("Missing value for {}", flag).into())
}

/// Read a binary `SignedCertificateTimestampList` as sent in TLS or OCSP
fn read_sct_list(path: &str) -> CliResult<Vec<SerializedSct>> {
    let bytes = fs::read(path).map_err(|e| format!("failed to read {}: {}", path, e))?;
    Ok(parse_sct_list(&bytes)?)
}

fn verify(args: &[String]) -> CliResult<bool> {
    let mut log_list: Option<String> = None;
    let mut chain_path: Option<String> = None;
    let mut tls_scts: Option<String> = None;
    let mut ocsp_scts: Option<String> = None;
    let mut at: Option<DateTime<Utc>> = None;
    let mut fetch_proofs = false;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--log-list" => log_list = Some(flag_value(args, &mut i)?),
            "--chain" => chain_path = Some(flag_value(args, &mut i)?),
            "--tls-scts" => tls_scts = Some(flag_value(args, &mut i)?),
            "--ocsp-scts" => ocsp_scts = Some(flag_value(args, &mut i)?),
            "--at" => {
                let value = flag_value(args, &mut i)?;
                let time = DateTime::parse_from_rfc3339(&value)
                    .map_err(|e| format!("invalid --at time {}: {}", value, e))?;
                at = Some(time.with_timezone(&Utc));
            }
            "--fetch-proofs" => fetch_proofs = true,
            other => return Err(format!("Unknown argument: {}", other).into()),
        }
        i += 1;
    }

    let log_list = log_list.ok_or("Missing required --log-list")?;
    let chain_path = chain_path.ok_or("Missing required --chain")?;

    let registry = LogRegistry::from_file(&log_list)?;
    eprintln!("Loaded {} logs from {}", registry.len(), log_list);

    let pem = fs::read_to_string(&chain_path)
        .map_err(|e| format!("failed to read {}: {}", chain_path, e))?;
    let mut evidence = ConnectionEvidence::new(CertificateChain::from_pem(&pem)?);
    if let Some(path) = tls_scts {
        evidence = evidence.with_handshake_scts(read_sct_list(&path)?);
    }
    if let Some(path) = ocsp_scts {
        evidence = evidence.with_ocsp_scts(read_sct_list(&path)?);
    }

    let prover = if fetch_proofs {
        Some(HttpInclusionProver::new()?)
    } else {
        None
    };
    let mut verifier = SctVerifier::new(&registry);
    if let Some(prover) = &prover {
        verifier = verifier.with_prover(prover);
    }

    let checker = EvidenceChecker::new(verifier);
    let now = at.unwrap_or_else(Utc::now);
    match checker.check_connection_evidence_at(Some(&evidence), now) {
        VerificationOutcome::Verified(sct) => {
            let source = sct.source.map(|s| s.to_string()).unwrap_or_default();
            println!("verified: {} SCT from {} ({})", source, sct.log_description, sct.log_id);
            println!("  timestamp: {}", sct.timestamp.to_rfc3339());
            match sct.inclusion {
                InclusionStatus::Proven { tree_size } => {
                    println!("  inclusion: proven in tree of size {}", tree_size)
                }
                InclusionStatus::PendingWithinMmd { age } => println!(
                    "  inclusion: not proven, {}s old and within the log's MMD",
                    age.num_seconds()
                ),
            }
            Ok(true)
        }
        VerificationOutcome::Failed { reason, source } => {
            match source {
                Some(source) => println!("not verified: {} (last source: {})", reason, source),
                None => println!("not verified: {}", reason),
            }
            Ok(false)
        }
    }
}

fn level(args: &[String]) -> CliResult<bool> {
    let mut cert_path: Option<String> = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--cert" => cert_path = Some(flag_value(args, &mut i)?),
            other => return Err(format!("Unknown argument: {}", other).into()),
        }
        i += 1;
    }

    let cert_path = cert_path.ok_or("Missing required --cert")?;
    let pem = fs::read_to_string(&cert_path)
        .map_err(|e| format!("failed to read {}: {}", cert_path, e))?;
    let chain = CertificateChain::from_pem(&pem)?;
    let leaf = chain
        .leaf()
        .ok_or_else(|| format!("no certificate in {}", cert_path))?;

    println!("{}", validation_level_der(leaf)?);
    Ok(true)
}
