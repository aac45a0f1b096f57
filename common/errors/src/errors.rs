#![no_std]

// Amount validation
pub static ERROR_INVALID_ADD_AMOUNT: &[u8] = b"Invalid add amount.";

pub static ERROR_INVALID_SUPPLY_AMOUNT: &[u8] = b"Invalid supply amount.";

pub static ERROR_INVALID_DRAW_AMOUNT: &[u8] = b"Invalid draw amount.";

pub static ERROR_INVALID_RESTORE_AMOUNT: &[u8] = b"Invalid restore amount.";

pub static ERROR_INVALID_REMOVE_AMOUNT: &[u8] = b"Invalid remove amount.";

pub static ERROR_INVALID_WITHDRAW_AMOUNT: &[u8] = b"Invalid withdraw amount.";

pub static ERROR_INVALID_SHARES_AMOUNT: &[u8] = b"Invalid shares amount.";

pub static ERROR_INVALID_FEE_SHARES: &[u8] = b"Invalid fee shares.";

pub static ERROR_INVALID_RISK_PREMIUM: &[u8] = b"Invalid risk premium.";

pub static ERROR_INVALID_PAYMENT: &[u8] = b"Payment token does not match the asset underlying.";

// Addresses
pub static ERROR_INVALID_FROM_ADDRESS: &[u8] = b"Invalid from address.";

pub static ERROR_INVALID_TO_ADDRESS: &[u8] = b"Invalid to address.";

// Listing and configuration
pub static ERROR_INVALID_ASSET_DECIMALS: &[u8] = b"Invalid asset decimals.";

pub static ERROR_INVALID_ASSET_ADDRESS: &[u8] = b"Invalid asset address.";

pub static ERROR_INVALID_IR_STRATEGY: &[u8] = b"Invalid interest rate strategy.";

pub static ERROR_INVALID_FEE_RECEIVER: &[u8] = b"Invalid fee receiver.";

pub static ERROR_INVALID_LIQUIDITY_FEE: &[u8] = b"Invalid liquidity fee.";

pub static ERROR_INVALID_SPOKE: &[u8] = b"Invalid spoke.";

pub static ERROR_INVALID_LIQUIDATION_CONFIG: &[u8] = b"Invalid liquidation config.";

pub static ERROR_INVALID_DYNAMIC_RESERVE_CONFIG: &[u8] = b"Invalid dynamic reserve config.";

pub static ERROR_INVALID_INTEREST_RATE_DATA: &[u8] = b"Invalid interest rate data.";

// Policy
pub static ERROR_SPOKE_NOT_ACTIVE: &[u8] = b"Spoke not active.";

pub static ERROR_SPOKE_NOT_LISTED: &[u8] = b"Spoke not listed.";

pub static ERROR_ASSET_NOT_ACTIVE: &[u8] = b"Asset not active.";

pub static ERROR_ASSET_PAUSED: &[u8] = b"Asset paused.";

pub static ERROR_ASSET_FROZEN: &[u8] = b"Asset frozen.";

pub static ERROR_ASSET_NOT_LISTED: &[u8] = b"Asset not listed.";

// Capacity and economic boundaries, raised with the boundary value appended
pub static ERROR_SUPPLY_CAP_EXCEEDED: &[u8] = b"Supply cap exceeded: ";

pub static ERROR_DRAW_CAP_EXCEEDED: &[u8] = b"Draw cap exceeded: ";

pub static ERROR_NOT_AVAILABLE_LIQUIDITY: &[u8] = b"Not available liquidity: ";

pub static ERROR_SUPPLIED_AMOUNT_EXCEEDED: &[u8] = b"Supplied amount exceeded: ";

pub static ERROR_SURPLUS_AMOUNT_RESTORED: &[u8] = b"Surplus amount restored: ";

// Liquidation
pub static ERROR_MUST_NOT_LEAVE_DUST: &[u8] = b"Liquidation must not leave dust.";

pub static ERROR_INVALID_DEBT_TO_COVER: &[u8] = b"Invalid debt to cover.";

pub static ERROR_SELF_LIQUIDATION: &[u8] = b"Self liquidation is not allowed.";

pub static ERROR_RESERVE_NOT_LISTED: &[u8] = b"Reserve not listed.";

pub static ERROR_RESERVE_PAUSED: &[u8] = b"Reserve paused.";

pub static ERROR_HEALTH_FACTOR_NOT_BELOW_THRESHOLD: &[u8] =
    b"Health factor not below liquidation threshold.";

pub static ERROR_COLLATERAL_CANNOT_BE_LIQUIDATED: &[u8] = b"Collateral cannot be liquidated.";

pub static ERROR_SPECIFIED_CURRENCY_NOT_BORROWED_BY_USER: &[u8] =
    b"Specified currency not borrowed by user.";

// Interest strategy
pub static ERROR_ONLY_HUB: &[u8] = b"Endpoint can only be called by the hub.";
