#![no_std]

pub const SECONDS_PER_YEAR: u64 = 31_536_000;

pub const RAY: u128 = 1_000_000_000_000_000_000_000_000_000;
pub const RAY_PRECISION: usize = 27;

/// Unit of the common base currency used by prices, values and health factors
pub const WAD: u128 = 1_000_000_000_000_000_000;
pub const WAD_PRECISION: usize = 18;

pub const BPS: usize = 10_000; // 100%
pub const BPS_PRECISION: usize = 4;

/// Largest underlying precision an asset can be listed with
pub const MAX_ASSET_DECIMALS: usize = 18;

/// Risk premium ceiling, 1000% of the drawn rate
pub const MAX_RISK_PREMIUM: usize = 100_000;

/// Liquidity fee ceiling (100%)
pub const MAX_LIQUIDITY_FEE: usize = BPS;

/// Smallest debt value, in WAD base units, a partial liquidation may leave behind
pub const MIN_LEFTOVER_BASE: u128 = 1_000 * WAD;

pub const ASSET_ID_START: u32 = 1;
