use std::sync::Arc;

use alloy::primitives::Address;
use axum::{extract::State, Json};
use serde::Serialize;

use crate::{app_state::AppState, infra::ChainCaller};

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ChainResponse {
    pub chain_id: u64,
    pub multicall: Address,
}

pub async fn get_chain<C: ChainCaller + 'static>(
    State(state): State<Arc<AppState<C>>>,
) -> Json<ChainResponse> {
    Json(ChainResponse {
        chain_id: state.multicaller.network().chain_id(),
        multicall: state.multicaller.multicall_address(),
    })
}
