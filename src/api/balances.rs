use std::{collections::HashMap, sync::Arc};

use alloy::{eips::BlockNumberOrTag, primitives::Address};
use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::{
    api::block::parse_block,
    app_error::AppError,
    app_state::AppState,
    infra::ChainCaller,
    services::balances,
};

#[derive(Deserialize, Debug)]
pub struct BalancesQuery {
    /// comma separated token addresses
    tokens: String,
    block: Option<String>,
}

#[derive(Serialize, Debug)]
pub struct BalancesResponse {
    pub balances: HashMap<Address, String>,
}

pub async fn get_balances<C: ChainCaller + 'static>(
    Path(owner): Path<Address>,
    Query(query): Query<BalancesQuery>,
    State(state): State<Arc<AppState<C>>>,
) -> Result<Json<BalancesResponse>, AppError> {
    let tokens = query
        .tokens
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<Address>()
                .map_err(|err| AppError::BadRequest(format!("invalid token {s}: {err}")))
        })
        .collect::<Result<Vec<Address>, AppError>>()?;

    if tokens.is_empty() {
        return Err(AppError::BadRequest("tokens should not be empty".into()));
    }

    if tokens.len() > state.max_calls {
        return Err(AppError::TooManyCalls(tokens.len(), state.max_calls));
    }

    let block = match query.block.as_deref() {
        Some(raw) => parse_block(raw)?,
        None => BlockNumberOrTag::Latest,
    };

    let balances = balances::get_balances(&state.multicaller, &tokens, owner, block).await?;

    Ok(Json(BalancesResponse { balances }))
}
