use std::{io::Write, time::Duration};

use chrono::{DateTime, SecondsFormat, Utc};
use common::networks::network_name;
use providers::ChainProvider;
use serde::Serialize;
use tracing::debug;

use crate::{AuditError, BlockReport, BlockTarget};

pub const TOOL_NAME: &str = "zk-block-soundness";

/// Machine readable form of one run, printed after the text report with `--json`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JsonReport {
    pub rpc: String,
    pub chain_id: Option<u64>,
    pub block_details: BlockReport,
    pub elapsed_seconds: f64,
    pub timestamp_utc: String,
}

impl JsonReport {
    /// Assembles the document. The chain id is asked for again here; a failure leaves it `null`.
    pub async fn collect<P: ChainProvider + ?Sized>(
        provider: &P,
        rpc: &str,
        block_details: BlockReport,
        elapsed: Duration,
        now: DateTime<Utc>,
    ) -> Self {
        let chain_id = match provider.chain_id().await {
            Ok(id) => Some(id),
            Err(e) => {
                debug!("Chain id unavailable for JSON output: {:?}", e);
                None
            }
        };

        Self {
            rpc: rpc.to_owned(),
            chain_id,
            block_details,
            elapsed_seconds: round2(elapsed.as_secs_f64()),
            timestamp_utc: utc_timestamp(now),
        }
    }

    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Invocation time, ISO-8601 with microseconds and a `Z` suffix.
pub fn utc_timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Block production time, ISO-8601 to the second.
pub fn block_time(timestamp: u64) -> String {
    i64::try_from(timestamp)
        .ok()
        .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0))
        .map(|dt| format!("{}Z", dt.format("%Y-%m-%dT%H:%M:%S")))
        .unwrap_or_else(|| format!("{}Z", timestamp))
}

pub fn write_header<W: Write>(
    out: &mut W,
    now: DateTime<Utc>,
    rpc: &str,
) -> Result<(), AuditError> {
    writeln!(out, "🕒 Timestamp: {}", utc_timestamp(now))?;
    writeln!(out, "🔧 {}", TOOL_NAME)?;
    writeln!(out, "🔗 RPC: {}", rpc)?;
    Ok(())
}

pub fn write_chain_id<W: Write>(
    out: &mut W,
    chain_id: &eyre::Result<u64>,
) -> Result<(), AuditError> {
    match chain_id {
        Ok(id) => writeln!(out, "🧭 Chain ID: {} ({})", id, network_name(*id))?,
        Err(_) => writeln!(out, "⚠️ Could not fetch chain ID.")?,
    }
    Ok(())
}

pub fn write_target<W: Write>(out: &mut W, target: BlockTarget) -> Result<(), AuditError> {
    writeln!(out, "🧱 Analyzing block: {}", target)?;
    Ok(())
}

pub fn write_block<W: Write>(out: &mut W, report: &BlockReport) -> Result<(), AuditError> {
    writeln!(out, "📦 Block #{}", report.number)?;
    writeln!(out, "⏰ Timestamp: {}", block_time(report.timestamp))?;
    writeln!(out, "🔹 Block hash: {}", report.hash)?;
    writeln!(out, "🔸 Integrity checksum: {}", report.checksum)?;
    writeln!(out, "📊 Transactions: {}", report.transaction_count)?;
    Ok(())
}

pub fn write_elapsed<W: Write>(out: &mut W, elapsed: Duration) -> Result<(), AuditError> {
    writeln!(out, "⏱️ Completed in {:.2}s", elapsed.as_secs_f64())?;
    Ok(())
}

/// Terminal error line. Write failures are ignored since the process is exiting anyway.
pub fn write_failure<W: Write>(out: &mut W, err: &AuditError) {
    let _ = writeln!(out, "❌ {}", err);
}
