//! swapgate-guard CLI
//!
//! Validates one transaction envelope (JSON) against the allowlist policy and
//! reports the verdict through the exit code:
//! - 0: approved, safe to hand to the signer
//! - 1: rejected
//! - 2: config or input error

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use swapgate_core::error::{Result, SwapGateError};
use swapgate_core::protocol::envelope::TransactionEnvelope;
use swapgate_guard::config;
use swapgate_guard::obs::metrics::GateMetrics;
use swapgate_guard::policy::{AllowlistPolicy, InstructionValidator, TransferMonitor, ValidationResult};
use swapgate_guard::GuardState;

#[derive(Parser, Debug)]
#[command(name = "swapgate-guard", about = "Pre-signing allowlist gate for swap transactions")]
struct Cli {
    /// Policy file (YAML). Defaults to the built-in swap allowlist.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Transaction envelope (JSON). Reads stdin when omitted.
    #[arg(long)]
    tx: Option<PathBuf>,

    /// Print decision metrics to stderr after validating.
    #[arg(long)]
    metrics: bool,
}

fn main() -> ExitCode {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(ValidationResult::Approved) => {
            println!("APPROVED");
            ExitCode::SUCCESS
        }
        Ok(ValidationResult::Rejected(r)) => {
            println!("REJECTED {} index={} reason={}", r.program_id, r.index, r.reason);
            ExitCode::from(1)
        }
        Err(e) => {
            eprintln!("error [{}]: {e}", e.code().as_str());
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> Result<ValidationResult> {
    let (validator, metrics) = build_validator(cli)?;
    let raw = read_envelope(cli)?;
    let tx = TransactionEnvelope::from_json(&raw)?.into_transaction()?;

    let result = validator.validate(&tx);
    if cli.metrics {
        eprint!("{}", metrics.render());
    }
    Ok(result)
}

fn build_validator(cli: &Cli) -> Result<(Arc<InstructionValidator>, Arc<GateMetrics>)> {
    match &cli.config {
        Some(path) => {
            let path = path.to_string_lossy();
            let cfg = config::load_from_file(&path)?;
            let state = GuardState::new(cfg)?;
            Ok((state.validator(), state.metrics()))
        }
        None => {
            tracing::info!("no --config given; using built-in swap allowlist");
            let metrics = Arc::new(GateMetrics::default());
            let validator = InstructionValidator::new(
                Arc::new(AllowlistPolicy::swap_default()?),
                TransferMonitor::default(),
            )
            .with_metrics(Arc::clone(&metrics));
            Ok((Arc::new(validator), metrics))
        }
    }
}

fn read_envelope(cli: &Cli) -> Result<String> {
    match &cli.tx {
        Some(path) => std::fs::read_to_string(path).map_err(|e| {
            SwapGateError::BadRequest(format!("read tx failed ({}): {e}", path.display()))
        }),
        None => {
            let mut s = String::new();
            std::io::stdin()
                .read_to_string(&mut s)
                .map_err(|e| SwapGateError::BadRequest(format!("read stdin failed: {e}")))?;
            Ok(s)
        }
    }
}
