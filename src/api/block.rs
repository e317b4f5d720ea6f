use std::str::FromStr;

use alloy::eips::BlockNumberOrTag;
use serde::Deserialize;

use crate::app_error::AppError;

/// Block selector accepted from clients: a decimal number, or anything
/// `BlockNumberOrTag` parses ("latest", "finalized", "0x12ab", ...).
#[derive(Deserialize, Debug, Clone)]
#[serde(untagged)]
pub enum BlockParam {
    Number(u64),
    Tag(String),
}

impl BlockParam {
    pub fn resolve(&self) -> Result<BlockNumberOrTag, AppError> {
        match self {
            BlockParam::Number(number) => Ok(BlockNumberOrTag::Number(*number)),
            BlockParam::Tag(tag) => parse_block(tag),
        }
    }
}

pub fn parse_block(raw: &str) -> Result<BlockNumberOrTag, AppError> {
    if let Ok(number) = raw.parse::<u64>() {
        return Ok(BlockNumberOrTag::Number(number));
    }

    BlockNumberOrTag::from_str(raw)
        .map_err(|err| AppError::BadRequest(format!("invalid block {raw}: {err}")))
}

pub fn resolve_or_latest(block: Option<&BlockParam>) -> Result<BlockNumberOrTag, AppError> {
    block.map_or(Ok(BlockNumberOrTag::Latest), BlockParam::resolve)
}
