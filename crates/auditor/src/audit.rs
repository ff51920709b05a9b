use std::{io::Write, time::Instant};

use chrono::Utc;
use providers::ChainProvider;
use tracing::{info, warn};

use crate::{
    fetcher::fetch_block_details,
    report::{self, JsonReport},
    AuditError, BlockReport, BlockTarget,
};

#[derive(Debug, Clone)]
pub struct AuditOptions {
    pub rpc_url: String,
    pub target: BlockTarget,
    pub json: bool,
}

/// Runs everything after the connection check: banner, chain id, block fetch and report.
///
/// `started` is the moment the program began; elapsed time is measured from it.
pub async fn run_audit<P, W>(
    provider: &P,
    options: &AuditOptions,
    out: &mut W,
    started: Instant,
) -> Result<BlockReport, AuditError>
where
    P: ChainProvider + ?Sized,
    W: Write,
{
    report::write_header(out, Utc::now(), &options.rpc_url)?;

    let chain_id = provider.chain_id().await;
    match &chain_id {
        Ok(id) => info!("Chain id {}", id),
        Err(e) => warn!("Could not fetch chain id: {:?}", e),
    }
    report::write_chain_id(out, &chain_id)?;

    report::write_target(out, options.target)?;

    let details = fetch_block_details(provider, options.target).await?;
    report::write_block(out, &details)?;

    let elapsed = started.elapsed();
    report::write_elapsed(out, elapsed)?;

    if options.json {
        let doc = JsonReport::collect(
            provider,
            &options.rpc_url,
            details.clone(),
            elapsed,
            Utc::now(),
        )
        .await;
        let text = doc
            .to_pretty_json()
            .map_err(|e| AuditError::Output(e.into()))?;
        writeln!(out, "{}", text)?;
    }

    out.flush()?;
    Ok(details)
}
