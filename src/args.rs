use clap::Parser;

use crate::config::constants::DEFAULT_MAX_CALLS_PER_BATCH;

#[derive(Parser, Debug, Clone)]
#[command(about = "Batch read-only contract calls through Multicall2")]
pub struct Args {
    #[arg(long, env = "HTTP_BIND", default_value = "0.0.0.0:8080")]
    pub bind: String,

    /// JSON-RPC endpoint of the chain node
    #[arg(long, env = "RPC_URL")]
    pub rpc_url: String,

    #[arg(long, env = "MAX_CALLS_PER_BATCH", default_value_t = DEFAULT_MAX_CALLS_PER_BATCH)]
    pub max_calls: usize,

    #[arg(long = "allowed-origins", env = "ALLOWED_ORIGINS", default_value = "")]
    allowed_origins_from_env: String,
}

impl Args {
    pub fn from_env() -> Self {
        Self::parse()
    }

    pub fn allowed_origins(&self) -> Vec<String> {
        self.allowed_origins_from_env
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }
}
