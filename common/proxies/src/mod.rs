#![no_std]

pub mod proxy_interest_strategy;
pub mod proxy_liquidity_hub;
