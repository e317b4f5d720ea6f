use std::sync::Arc;

use alloy::providers::DynProvider;

use crate::args::Args;
use crate::domain::MulticallError;
use crate::infra::ChainCaller;
use crate::services::multicaller::MultiCaller;

pub struct AppState<C = DynProvider> {
    pub multicaller: MultiCaller<C>,
    pub max_calls: usize,
}

impl AppState<DynProvider> {
    pub async fn build(args: &Args) -> Result<Arc<Self>, MulticallError> {
        let multicaller = MultiCaller::connect(&args.rpc_url).await?;
        Ok(Self::new(multicaller, args.max_calls))
    }
}

impl<C: ChainCaller> AppState<C> {
    pub fn new(multicaller: MultiCaller<C>, max_calls: usize) -> Arc<Self> {
        Arc::new(Self {
            multicaller,
            max_calls,
        })
    }
}
