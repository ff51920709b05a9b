use std::{
    io,
    process::ExitCode,
    time::{Duration, Instant},
};

use auditor::{connection, report, run_audit, AuditError, AuditOptions};
use clap::{ArgAction, Parser};
use common::config::AppConfig;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const ABOUT: &str = "zk-block-soundness — verify and log block integrity with checksum analysis \
(useful for Aztec/Zama and general Web3 state validation).";

#[derive(Parser, Debug)]
#[command(version, about = ABOUT, long_about = None)]
struct Args {
    /// EVM RPC URL (default from RPC_URL)
    #[arg(long)]
    rpc: Option<String>,

    /// Block number to analyze (default: latest)
    #[arg(long)]
    block: Option<u64>,

    /// RPC timeout in seconds (default: 30)
    #[arg(long)]
    timeout: Option<u64>,

    /// Output results as JSON
    #[arg(long)]
    json: bool,

    /// Log verbosity on stderr (-v info, -vv debug)
    #[arg(short, action = ArgAction::Count)]
    v: u8,
}

fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

async fn run(args: Args, started: Instant) -> Result<(), AuditError> {
    let cfg = AppConfig::load().map_err(|e| AuditError::Config(e.to_string()))?;
    let rpc_url = cfg.resolve_rpc_url(args.rpc);
    let timeout = Duration::from_secs(cfg.resolve_timeout(args.timeout));
    debug!(%rpc_url, ?timeout, "Resolved settings");

    let provider = connection::connect(&rpc_url, timeout).await?;

    let options = AuditOptions {
        rpc_url,
        target: args.block.into(),
        json: args.json,
    };
    let mut stdout = io::stdout().lock();
    run_audit(&provider, &options, &mut stdout, started).await?;
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let started = Instant::now();
    let args = Args::parse();
    init_tracing(args.v);

    match run(args, started).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!("{:?}", e);
            report::write_failure(&mut io::stdout(), &e);
            ExitCode::from(e.exit_code())
        }
    }
}
