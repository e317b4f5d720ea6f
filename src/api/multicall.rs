use std::sync::Arc;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::{
    api::block::{resolve_or_latest, BlockParam},
    app_error::AppError,
    app_state::AppState,
    domain::{Call, ResultSet},
    infra::ChainCaller,
};

#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CallRequest {
    name: String,
    target: String,
    call_data: String,
}

#[derive(Deserialize, Clone, Debug)]
pub struct MulticallRequest {
    calls: Vec<CallRequest>,

    #[serde(default)]
    block: Option<BlockParam>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct MulticallResponse {
    pub chain_id: u64,
    pub results: ResultSet,
}

pub async fn multicall<C: ChainCaller + 'static>(
    State(state): State<Arc<AppState<C>>>,
    Json(body): Json<MulticallRequest>,
) -> Result<Json<MulticallResponse>, AppError> {
    if body.calls.len() > state.max_calls {
        return Err(AppError::TooManyCalls(body.calls.len(), state.max_calls));
    }

    let block = resolve_or_latest(body.block.as_ref())?;

    let calls = body
        .calls
        .into_iter()
        .map(|call| Call::from_hex(call.name, &call.target, &call.call_data))
        .collect::<Result<Vec<Call>, _>>()?;

    let results = state.multicaller.execute(&calls, block).await?;

    Ok(Json(MulticallResponse {
        chain_id: state.multicaller.network().chain_id(),
        results,
    }))
}
