use crate::domain::EvmNetwork;
use alloy::primitives::{address, Address};

pub fn get_multicall_address(network: &EvmNetwork) -> Address {
    match network {
        EvmNetwork::Eth => address!("0x5BA1e12693Dc8F9c48aAD8770482f4739bEeD696"),
        EvmNetwork::Polygon => address!("0xed386Fe855C1EFf2f843B910923Dd8846E45C5A4"),
        EvmNetwork::Avalanche => address!("0x29b6603d17b9d8f021ecb8845b6fd06e1adf89de"),
    }
}
