use thiserror::Error;

/// Terminal failures of a single audit run.
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("Invalid RPC URL format. Must start with 'http' or 'https'.")]
    InvalidRpcUrl(String),

    #[error("RPC connection failed. Check your RPC_URL or --rpc argument.")]
    ConnectionFailed(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Error fetching block details: {0}")]
    BlockFetch(String),

    #[error("Failed writing report: {0}")]
    Output(#[from] std::io::Error),
}

impl AuditError {
    pub fn exit_code(&self) -> u8 {
        match self {
            AuditError::InvalidRpcUrl(_)
            | AuditError::ConnectionFailed(_)
            | AuditError::Config(_)
            | AuditError::Output(_) => 1,
            AuditError::BlockFetch(_) => 2,
        }
    }
}
