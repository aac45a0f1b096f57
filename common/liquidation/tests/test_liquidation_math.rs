use common_liquidation::LiquidationMathModule;
use common_math::SharedMathModule;
use common_structs::{AvailableCollateralParams, DebtToTarget, DebtToTargetParams, MaxDebtParams};
use multiversx_sc::types::{BigUint, ManagedDecimal};
use multiversx_sc_scenario::api::StaticApi;

pub struct LiquidationTester;

impl multiversx_sc::contract_base::ContractBase for LiquidationTester {
    type Api = StaticApi;
}

impl SharedMathModule for LiquidationTester {}
impl LiquidationMathModule for LiquidationTester {}

const WAD: u128 = 1_000_000_000_000_000_000;
const UNIT: u64 = 1_000_000;

fn wad(raw: u128) -> ManagedDecimal<StaticApi, usize> {
    ManagedDecimal::from_raw_units(BigUint::from(raw), 18)
}

fn bps(raw: u64) -> ManagedDecimal<StaticApi, usize> {
    ManagedDecimal::from_raw_units(BigUint::from(raw), 4)
}

fn tokens(whole: u64) -> ManagedDecimal<StaticApi, usize> {
    ManagedDecimal::from_raw_units(BigUint::from(whole) * BigUint::from(UNIT), 6)
}

fn raw_tokens(whole: u64) -> BigUint<StaticApi> {
    BigUint::from(whole) * BigUint::from(UNIT)
}

fn bonus_at(tester: &LiquidationTester, health_factor: u128) -> ManagedDecimal<StaticApi, usize> {
    tester.calculate_variable_liquidation_bonus(
        &wad(WAD / 10 * 8),
        &bps(4_000),
        &wad(health_factor),
        &bps(12_000),
        &wad(WAD),
    )
}

#[test]
fn test_bonus_is_max_at_or_below_max_bonus_health_factor() {
    let tester = LiquidationTester;

    assert_eq!(bonus_at(&tester, WAD / 10 * 8).into_raw_units(), &BigUint::from(12_000u64));
    assert_eq!(bonus_at(&tester, WAD / 2).into_raw_units(), &BigUint::from(12_000u64));
}

#[test]
fn test_bonus_is_min_at_threshold() {
    let tester = LiquidationTester;

    // 100% + 20% * (100% - 40%)
    assert_eq!(bonus_at(&tester, WAD).into_raw_units(), &BigUint::from(11_200u64));
}

#[test]
fn test_bonus_interpolates_between_bounds() {
    let tester = LiquidationTester;

    assert_eq!(bonus_at(&tester, WAD / 10 * 9).into_raw_units(), &BigUint::from(11_600u64));
}

#[test]
fn test_bonus_without_bonus_range() {
    let tester = LiquidationTester;

    let bonus = tester.calculate_variable_liquidation_bonus(
        &wad(WAD / 10 * 8),
        &bps(4_000),
        &wad(WAD / 10 * 9),
        &bps(10_000),
        &wad(WAD),
    );
    assert_eq!(bonus.into_raw_units(), &BigUint::from(10_000u64));
}

fn debt_to_target_params(
    health_factor: u128,
    liquidation_bonus: u64,
) -> DebtToTargetParams<StaticApi> {
    DebtToTargetParams {
        total_debt_value: wad(10_000 * WAD),
        health_factor: wad(health_factor),
        close_factor: wad(WAD),
        liquidation_bonus: bps(liquidation_bonus),
        collateral_factor: bps(8_000),
        debt_asset_price: wad(WAD),
        debt_asset_decimals: 6,
    }
}

#[test]
fn test_debt_to_restore_close_factor() {
    let tester = LiquidationTester;

    // 10_000 * (1.0 - 0.9) / (1.0 - 1.1 * 0.8), rounded up
    let target =
        tester.calculate_debt_to_restore_close_factor(&debt_to_target_params(WAD / 10 * 9, 11_000));

    match target {
        DebtToTarget::Reachable(amount) => {
            assert_eq!(amount.into_raw_units(), &BigUint::from(8_333_333_334u64));
            assert_eq!(amount.scale(), 6);
        },
        DebtToTarget::Unreachable => panic!("close factor should be reachable"),
    }
}

#[test]
fn test_debt_to_restore_close_factor_unreachable() {
    let tester = LiquidationTester;

    // 1.25 * 0.8 = 1.0, repaying never lifts the health factor to the close factor
    let target =
        tester.calculate_debt_to_restore_close_factor(&debt_to_target_params(WAD / 10 * 9, 12_500));

    assert!(!target.is_reachable());
}

#[test]
fn test_debt_to_restore_close_factor_already_met() {
    let tester = LiquidationTester;

    let target = tester.calculate_debt_to_restore_close_factor(&debt_to_target_params(WAD, 11_000));

    match target {
        DebtToTarget::Reachable(amount) => assert_eq!(amount.into_raw_units(), &BigUint::zero()),
        DebtToTarget::Unreachable => panic!("close factor should be reachable"),
    }
}

#[test]
fn test_max_debt_is_bounded_by_cover() {
    let tester = LiquidationTester;

    let max_debt = tester.calculate_max_debt_to_liquidate(&MaxDebtParams {
        debt_reserve_balance: tokens(10_000),
        debt_to_cover: tokens(5_000),
        debt_to_target: DebtToTarget::Reachable(tokens(8_000)),
        debt_asset_price: wad(WAD),
    });

    assert_eq!(max_debt.into_raw_units(), &raw_tokens(5_000));
}

#[test]
fn test_max_debt_is_bounded_by_close_factor() {
    let tester = LiquidationTester;

    let max_debt = tester.calculate_max_debt_to_liquidate(&MaxDebtParams {
        debt_reserve_balance: tokens(10_000),
        debt_to_cover: tokens(10_000),
        debt_to_target: DebtToTarget::Reachable(tokens(6_000)),
        debt_asset_price: wad(WAD),
    });

    assert_eq!(max_debt.into_raw_units(), &raw_tokens(6_000));
}

#[test]
fn test_max_debt_ignores_unreachable_target() {
    let tester = LiquidationTester;

    let max_debt = tester.calculate_max_debt_to_liquidate(&MaxDebtParams {
        debt_reserve_balance: tokens(10_000),
        debt_to_cover: tokens(10_000),
        debt_to_target: DebtToTarget::Unreachable,
        debt_asset_price: wad(WAD),
    });

    assert_eq!(max_debt.into_raw_units(), &raw_tokens(10_000));
}

#[test]
fn test_max_debt_closes_dust_when_covered() {
    let tester = LiquidationTester;

    // leftover worth 500 is below the 1_000 floor
    let max_debt = tester.calculate_max_debt_to_liquidate(&MaxDebtParams {
        debt_reserve_balance: tokens(1_500),
        debt_to_cover: tokens(1_500),
        debt_to_target: DebtToTarget::Reachable(tokens(1_000)),
        debt_asset_price: wad(WAD),
    });

    assert_eq!(max_debt.into_raw_units(), &raw_tokens(1_500));
}

#[test]
#[should_panic]
fn test_max_debt_rejects_dust_when_not_covered() {
    let tester = LiquidationTester;

    tester.calculate_max_debt_to_liquidate(&MaxDebtParams {
        debt_reserve_balance: tokens(1_500),
        debt_to_cover: tokens(1_000),
        debt_to_target: DebtToTarget::Reachable(tokens(1_000)),
        debt_asset_price: wad(WAD),
    });
}

fn collateral_params(
    collateral_balance: u64,
    debt_to_liquidate: u64,
) -> AvailableCollateralParams<StaticApi> {
    AvailableCollateralParams {
        collateral_reserve_balance: tokens(collateral_balance),
        collateral_asset_price: wad(WAD),
        debt_to_liquidate: tokens(debt_to_liquidate),
        debt_asset_price: wad(WAD),
        liquidation_bonus: bps(12_000),
        liquidation_fee: bps(1_000),
    }
}

#[test]
fn test_collateral_split_with_fee() {
    let tester = LiquidationTester;

    let result = tester.calculate_available_collateral_to_liquidate(&collateral_params(10_000, 5_000));

    assert_eq!(result.collateral_to_liquidate.into_raw_units(), &raw_tokens(6_000));
    assert_eq!(result.collateral_to_liquidator.into_raw_units(), &raw_tokens(5_900));
    assert_eq!(result.liquidation_fee_amount.into_raw_units(), &raw_tokens(100));
    assert_eq!(result.debt_to_liquidate.into_raw_units(), &raw_tokens(5_000));
}

#[test]
fn test_collateral_capped_by_balance_reduces_debt() {
    let tester = LiquidationTester;

    let result = tester.calculate_available_collateral_to_liquidate(&collateral_params(3_000, 5_000));

    assert_eq!(result.collateral_to_liquidate.into_raw_units(), &raw_tokens(3_000));
    assert_eq!(result.debt_to_liquidate.into_raw_units(), &raw_tokens(2_500));
    assert_eq!(result.liquidation_fee_amount.into_raw_units(), &raw_tokens(50));
    assert_eq!(result.collateral_to_liquidator.into_raw_units(), &raw_tokens(2_950));
}

#[test]
#[should_panic]
fn test_capped_collateral_must_not_leave_dust() {
    let tester = LiquidationTester;

    let result = tester.calculate_available_collateral_to_liquidate(&collateral_params(5_500, 5_000));

    tester.require_no_dust_leftover(&tokens(5_000), &result.debt_to_liquidate, &wad(WAD));
}

#[test]
fn test_capped_collateral_leaving_enough_debt() {
    let tester = LiquidationTester;

    // 5_500 collateral only repays ~4_583 of a 5_000 debt
    let capped = tester.calculate_available_collateral_to_liquidate(&collateral_params(5_500, 5_000));
    assert_eq!(capped.debt_to_liquidate.into_raw_units(), &BigUint::from(4_583_333_334u64));

    let result = tester.calculate_available_collateral_to_liquidate(&collateral_params(3_000, 5_000));

    // 2_500 left behind is above the floor
    tester.require_no_dust_leftover(&tokens(5_000), &result.debt_to_liquidate, &wad(WAD));
    tester.require_no_dust_leftover(&tokens(2_500), &result.debt_to_liquidate, &wad(WAD));
}

#[test]
fn test_collateral_uses_both_prices() {
    let tester = LiquidationTester;

    let mut params = collateral_params(10_000, 1_000);
    params.collateral_asset_price = wad(2 * WAD);
    params.liquidation_fee = bps(0);

    let result = tester.calculate_available_collateral_to_liquidate(&params);

    // 1_000 debt at 1.0 buys 500 collateral at 2.0, plus 20%
    assert_eq!(result.collateral_to_liquidate.into_raw_units(), &raw_tokens(600));
    assert_eq!(result.collateral_to_liquidator.into_raw_units(), &raw_tokens(600));
    assert_eq!(result.liquidation_fee_amount.into_raw_units(), &BigUint::zero());
}

#[test]
fn test_collateral_across_decimals_and_prices() {
    let tester = LiquidationTester;

    // 2.5 units of an 18 decimals debt asset priced at 2000
    let mut params = collateral_params(10_000, 0);
    params.debt_to_liquidate = ManagedDecimal::from_raw_units(BigUint::from(25 * WAD / 10), 18);
    params.debt_asset_price = wad(2_000 * WAD);

    let result = tester.calculate_available_collateral_to_liquidate(&params);

    assert_eq!(result.collateral_to_liquidate.into_raw_units(), &raw_tokens(6_000));
    assert_eq!(result.collateral_to_liquidator.into_raw_units(), &raw_tokens(5_900));
    assert_eq!(result.liquidation_fee_amount.into_raw_units(), &raw_tokens(100));
    assert_eq!(result.debt_to_liquidate.into_raw_units(), &BigUint::from(25 * WAD / 10));
}

#[test]
fn test_token_value() {
    let tester = LiquidationTester;

    let value = tester.get_token_value(&tokens(1_500), &wad(2 * WAD));
    assert_eq!(value.into_raw_units(), &BigUint::from(3_000 * WAD));
}
