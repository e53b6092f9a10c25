use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use storage_commitment::{CommitmentKey, CommitmentValidator, VerifierConfig, decode_fields};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Decode a storage commitment script and report whether it verifies.
#[derive(Debug, Parser)]
#[command(name = "commitment_inspect", version)]
struct Args {
    /// Hex encoded locking script fields.
    script: String,

    /// Hex encoded SEC1 public key of the host.
    #[arg(long, env = "COMMITMENT_PUBLIC_KEY")]
    public_key: String,

    /// TOML verifier config; defaults are used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => VerifierConfig::load_from(path)?,
        None => VerifierConfig::default(),
    };

    let script = hex::decode(args.script.trim()).context("script is not hex")?;
    let key = CommitmentKey::from_hex(&args.public_key)?;
    info!(bytes = script.len(), protocol_tag = %config.protocol_tag, "inspecting commitment");

    match decode_fields(&script) {
        Ok(fields) => {
            for (index, field) in fields.iter().enumerate() {
                println!("field {index:>2} ({:>3} bytes): {}", field.len(), printable(field));
            }
        }
        Err(err) => println!("decode failed: {err}"),
    }

    let validator = CommitmentValidator::new(config);
    match validator.evaluate_script(&script, &key) {
        Ok(commitment) => {
            println!("valid: {} until {} ({} bytes)", commitment.url, commitment.expiry, commitment.file_size);
        }
        Err(err) => {
            println!("invalid [{:?}]: {err}", err.kind());
            std::process::exit(1);
        }
    }

    Ok(())
}

fn printable(field: &[u8]) -> String {
    match std::str::from_utf8(field) {
        Ok(text) if !text.is_empty() && text.chars().all(|c| !c.is_control()) => text.to_string(),
        _ => format!("0x{}", hex::encode(field)),
    }
}
