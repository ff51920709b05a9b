pub const UNKNOWN_NETWORK: &str = "Unknown Network";

/// Human readable name for the chain ids the tool knows about.
pub fn network_name(chain_id: u64) -> &'static str {
    match chain_id {
        1 => "Ethereum Mainnet",
        5 => "Goerli Testnet",
        11155111 => "Sepolia Testnet",
        137 => "Polygon Mainnet",
        42161 => "Arbitrum One",
        10 => "Optimism Mainnet",
        8453 => "Base Mainnet",
        _ => UNKNOWN_NETWORK,
    }
}
