#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// Aggregate ledger state of a listed asset.
///
/// Precisions:
/// - shares, liquidity and premium shares use the asset decimals.
/// - `drawn_index` and `drawn_rate` (per second) are RAY based.
/// - `premium_offset` and `realized_premium` are underlying values kept at RAY precision.
/// - `risk_premium` is BPS based.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct AssetData<M: ManagedTypeApi> {
    pub underlying: EgldOrEsdtTokenIdentifier<M>,
    pub decimals: usize,
    pub supplied_shares: ManagedDecimal<M, NumDecimals>,
    pub available_liquidity: ManagedDecimal<M, NumDecimals>,
    pub drawn_shares: ManagedDecimal<M, NumDecimals>,
    pub drawn_index: ManagedDecimal<M, NumDecimals>,
    pub drawn_rate: ManagedDecimal<M, NumDecimals>,
    pub risk_premium: ManagedDecimal<M, NumDecimals>,
    pub premium_shares: ManagedDecimal<M, NumDecimals>,
    pub premium_offset: ManagedDecimal<M, NumDecimals>,
    pub realized_premium: ManagedDecimal<M, NumDecimals>,
    pub last_update_timestamp: u64,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct AssetConfig<M: ManagedTypeApi> {
    /// Spoke credited with the liquidity fee shares minted on accrual.
    pub fee_receiver: ManagedAddress<M>,
    /// Share of accrued interest kept as protocol fee (BPS).
    pub liquidity_fee: ManagedDecimal<M, NumDecimals>,
    /// Contract answering `calculateInterestRate` for this asset.
    pub ir_strategy: ManagedAddress<M>,
    pub active: bool,
    pub paused: bool,
    pub frozen: bool,
}

impl<M: ManagedTypeApi> AssetConfig<M> {
    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    #[inline]
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// New liquidity and new debt are only accepted by a live, unfrozen asset.
    #[inline]
    pub fn accepts_new_positions(&self) -> bool {
        self.active && !self.paused && !self.frozen
    }
}

/// Mirror of a spoke's position on one asset. Same precisions as `AssetData`.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct SpokeAccount<M: ManagedTypeApi> {
    pub supplied_shares: ManagedDecimal<M, NumDecimals>,
    pub drawn_shares: ManagedDecimal<M, NumDecimals>,
    pub premium_shares: ManagedDecimal<M, NumDecimals>,
    pub premium_offset: ManagedDecimal<M, NumDecimals>,
    pub realized_premium: ManagedDecimal<M, NumDecimals>,
    pub risk_premium: ManagedDecimal<M, NumDecimals>,
    pub last_update_timestamp: u64,
}

impl<M: ManagedTypeApi> SpokeAccount<M> {
    pub fn new(decimals: usize, ray_precision: usize, bps_precision: usize, timestamp: u64) -> Self {
        let zero = ManagedDecimal::from_raw_units(BigUint::zero(), decimals);
        let ray_zero = ManagedDecimal::from_raw_units(BigUint::zero(), ray_precision);
        SpokeAccount {
            supplied_shares: zero.clone(),
            drawn_shares: zero.clone(),
            premium_shares: zero,
            premium_offset: ray_zero.clone(),
            realized_premium: ray_zero,
            risk_premium: ManagedDecimal::from_raw_units(BigUint::zero(), bps_precision),
            last_update_timestamp: timestamp,
        }
    }

    pub fn has_debt(&self) -> bool {
        self.drawn_shares.into_raw_units() > &BigUint::zero()
            || self.realized_premium.into_raw_units() > &BigUint::zero()
    }
}

/// Per asset x spoke limits. Caps are raw underlying units, `None` means uncapped.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct SpokeConfig<M: ManagedTypeApi> {
    pub supply_cap: Option<BigUint<M>>,
    pub draw_cap: Option<BigUint<M>>,
    pub active: bool,
}

/// Liquidation curve of a spoke. Health factors are WAD based, the bonus factor is BPS based.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct LiquidationConfig<M: ManagedTypeApi> {
    /// Health factor a liquidation restores the position toward.
    pub close_factor: ManagedDecimal<M, NumDecimals>,
    /// At or below this health factor the maximum bonus applies.
    pub health_factor_for_max_bonus: ManagedDecimal<M, NumDecimals>,
    /// Portion of the bonus range removed at the liquidation threshold.
    pub liquidation_bonus_factor: ManagedDecimal<M, NumDecimals>,
    /// Liquidation threshold; positions at or above it are safe.
    pub target_health_factor: ManagedDecimal<M, NumDecimals>,
}

/// Collateral parameters of an asset as seen by one spoke. All BPS based.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct DynamicReserveConfig<M: ManagedTypeApi> {
    pub collateral_factor: ManagedDecimal<M, NumDecimals>,
    /// Total bonus multiplier, 100% meaning no bonus.
    pub max_liquidation_bonus: ManagedDecimal<M, NumDecimals>,
    pub liquidation_fee: ManagedDecimal<M, NumDecimals>,
}

/// Piecewise linear rate model. Rates and utilization points are RAY based, yearly rates.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct InterestRateData<M: ManagedTypeApi> {
    pub max_borrow_rate: ManagedDecimal<M, NumDecimals>,
    pub base_borrow_rate: ManagedDecimal<M, NumDecimals>,
    pub slope1: ManagedDecimal<M, NumDecimals>,
    pub slope2: ManagedDecimal<M, NumDecimals>,
    pub slope3: ManagedDecimal<M, NumDecimals>,
    pub mid_utilization: ManagedDecimal<M, NumDecimals>,
    pub optimal_utilization: ManagedDecimal<M, NumDecimals>,
}

/// Outcome of sizing a liquidation against the close factor.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub enum DebtToTarget<M: ManagedTypeApi> {
    /// Debt amount (debt asset decimals) bringing the position to the close factor.
    Reachable(ManagedDecimal<M, NumDecimals>),
    /// The bonus outweighs the collateral factor; no repayment reaches the close factor.
    Unreachable,
}

impl<M: ManagedTypeApi> DebtToTarget<M> {
    pub fn is_reachable(&self) -> bool {
        matches!(self, DebtToTarget::Reachable(_))
    }
}

/// Inputs of the close factor sizing. Values and prices are WAD based.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct DebtToTargetParams<M: ManagedTypeApi> {
    pub total_debt_value: ManagedDecimal<M, NumDecimals>,
    pub health_factor: ManagedDecimal<M, NumDecimals>,
    pub close_factor: ManagedDecimal<M, NumDecimals>,
    pub liquidation_bonus: ManagedDecimal<M, NumDecimals>,
    pub collateral_factor: ManagedDecimal<M, NumDecimals>,
    pub debt_asset_price: ManagedDecimal<M, NumDecimals>,
    pub debt_asset_decimals: usize,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct MaxDebtParams<M: ManagedTypeApi> {
    pub debt_reserve_balance: ManagedDecimal<M, NumDecimals>,
    pub debt_to_cover: ManagedDecimal<M, NumDecimals>,
    pub debt_to_target: DebtToTarget<M>,
    pub debt_asset_price: ManagedDecimal<M, NumDecimals>,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct AvailableCollateralParams<M: ManagedTypeApi> {
    pub collateral_reserve_balance: ManagedDecimal<M, NumDecimals>,
    pub collateral_asset_price: ManagedDecimal<M, NumDecimals>,
    pub debt_to_liquidate: ManagedDecimal<M, NumDecimals>,
    pub debt_asset_price: ManagedDecimal<M, NumDecimals>,
    pub liquidation_bonus: ManagedDecimal<M, NumDecimals>,
    pub liquidation_fee: ManagedDecimal<M, NumDecimals>,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct CollateralToLiquidate<M: ManagedTypeApi> {
    /// Total collateral seized, bonus included.
    pub collateral_to_liquidate: ManagedDecimal<M, NumDecimals>,
    pub collateral_to_liquidator: ManagedDecimal<M, NumDecimals>,
    pub liquidation_fee_amount: ManagedDecimal<M, NumDecimals>,
    /// Debt repaid, reduced when the collateral balance caps the seizure.
    pub debt_to_liquidate: ManagedDecimal<M, NumDecimals>,
}

/// Everything the hub needs to settle a liquidation requested by a spoke.
/// Balances are raw units of the respective asset, values and prices raw WAD.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct LiquidationCall<M: ManagedTypeApi> {
    pub collateral_asset_id: u32,
    pub debt_asset_id: u32,
    pub user: ManagedAddress<M>,
    pub liquidator: ManagedAddress<M>,
    pub debt_to_cover: BigUint<M>,
    pub user_collateral_balance: BigUint<M>,
    pub user_debt_balance: BigUint<M>,
    pub health_factor: BigUint<M>,
    pub total_debt_value: BigUint<M>,
    pub collateral_asset_price: BigUint<M>,
    pub debt_asset_price: BigUint<M>,
    pub using_as_collateral: bool,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct LiquidationResult<M: ManagedTypeApi> {
    pub debt_restored: ManagedDecimal<M, NumDecimals>,
    pub premium_restored: ManagedDecimal<M, NumDecimals>,
    pub collateral_to_liquidator: ManagedDecimal<M, NumDecimals>,
    pub liquidation_fee_amount: ManagedDecimal<M, NumDecimals>,
    pub fee_shares: ManagedDecimal<M, NumDecimals>,
    pub liquidation_bonus: ManagedDecimal<M, NumDecimals>,
    pub is_position_closed: bool,
}
