use multiversx_sc::types::{TestAddress, TestSCAddress};
use multiversx_sc_scenario::imports::{MxscPath, TestTokenIdentifier};

pub const SECONDS_PER_YEAR: u64 = 31_536_000;
pub const SECONDS_PER_DAY: u64 = 86_400;

pub const RAY: u128 = 1_000_000_000_000_000_000_000_000_000;
pub const WAD: u128 = 1_000_000_000_000_000_000;

// Yearly rate curve, RAY based
pub const R_MAX: u128 = 2 * RAY; // 200%
pub const R_BASE: u128 = RAY / 100; // 1%
pub const R_SLOPE1: u128 = 4 * RAY / 100; // 4%
pub const R_SLOPE2: u128 = 10 * RAY / 100; // 10%
pub const R_SLOPE3: u128 = 3 * RAY; // 300%
pub const U_MID: u128 = 45 * RAY / 100; // 45%
pub const U_OPTIMAL: u128 = 80 * RAY / 100; // 80%

pub const LIQUIDITY_FEE: u64 = 1_000; // 10%

pub const CLOSE_FACTOR: u128 = WAD; // 1.0
pub const HEALTH_FACTOR_FOR_MAX_BONUS: u128 = WAD / 10 * 8; // 0.8
pub const LIQUIDATION_BONUS_FACTOR: u64 = 4_000; // 40%
pub const TARGET_HEALTH_FACTOR: u128 = WAD; // 1.0

pub const COLLATERAL_FACTOR: u64 = 8_000; // 80%
pub const MAX_LIQUIDATION_BONUS: u64 = 12_000; // 120%
pub const LIQUIDATION_FEE: u64 = 1_000; // 10% of the bonus

pub const USDC_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("USDC-abcdef");
pub const USDC_DECIMALS: usize = 6;

pub const XOXNO_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("XOXNO-abcdef");
pub const XOXNO_DECIMALS: usize = 6;

pub const OTHER_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("OTHER-abcdef");

pub const USDC_ASSET_ID: u32 = 1;
pub const XOXNO_ASSET_ID: u32 = 2;

pub const OWNER_ADDRESS: TestAddress = TestAddress::new("owner");
pub const SPOKE_ADDRESS: TestAddress = TestAddress::new("spoke");
pub const CAPPED_SPOKE_ADDRESS: TestAddress = TestAddress::new("capped-spoke");
pub const TREASURY_ADDRESS: TestAddress = TestAddress::new("treasury");
pub const USER_ADDRESS: TestAddress = TestAddress::new("user");
pub const LIQUIDATOR_ADDRESS: TestAddress = TestAddress::new("liquidator");
pub const STRANGER_ADDRESS: TestAddress = TestAddress::new("stranger");

pub const LIQUIDITY_HUB_ADDRESS: TestSCAddress = TestSCAddress::new("liquidity-hub");
pub const INTEREST_STRATEGY_ADDRESS: TestSCAddress = TestSCAddress::new("interest-strategy");
pub const SECOND_STRATEGY_ADDRESS: TestSCAddress = TestSCAddress::new("second-strategy");

pub const LIQUIDITY_HUB_PATH: MxscPath = MxscPath::new("output/liquidity-hub.mxsc.json");
pub const INTEREST_STRATEGY_PATH: MxscPath =
    MxscPath::new("../interest_strategy/output/interest-strategy.mxsc.json");
