#![no_std]

use common_constants::{BPS_PRECISION, MIN_LEFTOVER_BASE, WAD_PRECISION};
use common_errors::ERROR_MUST_NOT_LEAVE_DUST;
use common_structs::{
    AvailableCollateralParams, CollateralToLiquidate, DebtToTarget, DebtToTargetParams,
    MaxDebtParams,
};

multiversx_sc::imports!();

/// Stateless liquidation sizing.
///
/// Health factors, values and prices are WAD based; bonuses, fees and
/// collateral factors are BPS based; amounts carry their asset decimals.
#[multiversx_sc::module]
pub trait LiquidationMathModule: common_math::SharedMathModule {
    /// Bonus multiplier paid to the liquidator, decaying with the health factor.
    ///
    /// - `hf <= hf_for_max_bonus`: `max_bonus`.
    /// - `hf >= liquidation_threshold`: `min_bonus = 100% + (max_bonus - 100%) * (100% - bonus_factor)`.
    /// - In between: linear from `max_bonus` down to `min_bonus`.
    fn calculate_variable_liquidation_bonus(
        &self,
        hf_for_max_bonus: &ManagedDecimal<Self::Api, NumDecimals>,
        bonus_factor: &ManagedDecimal<Self::Api, NumDecimals>,
        health_factor: &ManagedDecimal<Self::Api, NumDecimals>,
        max_bonus: &ManagedDecimal<Self::Api, NumDecimals>,
        liquidation_threshold: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let bps = self.bps();
        if health_factor <= hf_for_max_bonus || max_bonus <= &bps {
            return max_bonus.clone();
        }

        let bonus_range = max_bonus.clone() - bps.clone();
        let min_bonus = bps.clone()
            + self.mul_floor(&bonus_range, &(bps - bonus_factor.clone()), BPS_PRECISION);

        if health_factor >= liquidation_threshold {
            return min_bonus;
        }

        let increment_raw = self.mul_div_floor(
            (max_bonus.clone() - min_bonus.clone()).into_raw_units(),
            (liquidation_threshold.clone() - health_factor.clone()).into_raw_units(),
            (liquidation_threshold.clone() - hf_for_max_bonus.clone()).into_raw_units(),
        );

        min_bonus + self.to_decimal_bps(increment_raw)
    }

    /// Debt amount that brings the position back to the close factor.
    ///
    /// Repaying `V` in value moves the health factor to
    /// `(hf * D - V * bonus * cf) / (D - V)`; solving for the close factor `T` gives
    /// `V = D * (T - hf) / (T - bonus * cf)`. The result is converted to debt units
    /// and rounded up. When `T <= bonus * cf` every repayment lowers the health
    /// factor relative to the target and the result is `Unreachable`.
    fn calculate_debt_to_restore_close_factor(
        &self,
        params: &DebtToTargetParams<Self::Api>,
    ) -> DebtToTarget<Self::Api> {
        let effective_penalty = self.mul_ceil(
            &params.liquidation_bonus,
            &params.collateral_factor,
            WAD_PRECISION,
        );
        let close_factor = params.close_factor.rescale(WAD_PRECISION);

        if close_factor <= effective_penalty {
            return DebtToTarget::Unreachable;
        }

        let health_factor = params.health_factor.rescale(WAD_PRECISION);
        if health_factor >= close_factor {
            return DebtToTarget::Reachable(
                self.to_decimal(BigUint::zero(), params.debt_asset_decimals),
            );
        }

        let numerator = params.total_debt_value.rescale(WAD_PRECISION).into_raw_units()
            * (close_factor.clone() - health_factor).into_raw_units();
        let denominator = (close_factor - effective_penalty).into_raw_units()
            * params.debt_asset_price.rescale(WAD_PRECISION).into_raw_units();

        let raw = self.mul_div_ceil(
            &numerator,
            &self.pow10(params.debt_asset_decimals),
            &denominator,
        );

        DebtToTarget::Reachable(self.to_decimal(raw, params.debt_asset_decimals))
    }

    /// `min(debt balance, debt to cover, debt to target)`, refusing to strand dust.
    ///
    /// If the leftover debt would be worth less than `MIN_LEFTOVER_BASE`, the close
    /// factor bound is dropped and the whole balance is liquidated, provided the
    /// liquidator covers it; otherwise the call fails with `MustNotLeaveDust`.
    /// A balance already at or below the threshold is therefore always closed in full.
    fn calculate_max_debt_to_liquidate(
        &self,
        params: &MaxDebtParams<Self::Api>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let balance = params.debt_reserve_balance.clone();
        let mut max_debt = self.get_min(balance.clone(), params.debt_to_cover.clone());

        if let DebtToTarget::Reachable(debt_to_target) = &params.debt_to_target {
            max_debt = self.get_min(max_debt, debt_to_target.clone());
        }

        if self.leaves_dust(&balance, &max_debt, &params.debt_asset_price) {
            require!(
                params.debt_to_cover >= balance,
                ERROR_MUST_NOT_LEAVE_DUST
            );
            max_debt = balance;
        }

        max_debt
    }

    /// Re-applies the dust rule once the collateral cap has fixed the debt repaid.
    ///
    /// A back-solved repayment below the balance must still leave at least
    /// `MIN_LEFTOVER_BASE` of debt; a smaller cover avoids the cap.
    fn require_no_dust_leftover(
        &self,
        debt_reserve_balance: &ManagedDecimal<Self::Api, NumDecimals>,
        debt_to_liquidate: &ManagedDecimal<Self::Api, NumDecimals>,
        debt_asset_price: &ManagedDecimal<Self::Api, NumDecimals>,
    ) {
        require!(
            !self.leaves_dust(debt_reserve_balance, debt_to_liquidate, debt_asset_price),
            ERROR_MUST_NOT_LEAVE_DUST
        );
    }

    /// Whether repaying `repaid` out of `balance` leaves a non-zero debt worth
    /// less than `MIN_LEFTOVER_BASE`.
    fn leaves_dust(
        &self,
        balance: &ManagedDecimal<Self::Api, NumDecimals>,
        repaid: &ManagedDecimal<Self::Api, NumDecimals>,
        debt_asset_price: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> bool {
        if repaid >= balance {
            return false;
        }

        let leftover = balance.clone() - repaid.clone();
        let leftover_value = self.get_token_value(&leftover, debt_asset_price);
        leftover_value < self.to_decimal_wad(BigUint::from(MIN_LEFTOVER_BASE))
    }

    /// Collateral seized for `debt_to_liquidate`, bonus included, and its split.
    ///
    /// When the bonus-scaled amount exceeds the collateral balance the seizure is
    /// capped at the balance and the debt repaid is back-solved from it. The
    /// protocol fee is taken from the bonus part:
    /// `bonus_collateral = collateral - collateral / bonus`, `fee = bonus_collateral * liquidation_fee`.
    fn calculate_available_collateral_to_liquidate(
        &self,
        params: &AvailableCollateralParams<Self::Api>,
    ) -> CollateralToLiquidate<Self::Api> {
        let collateral_decimals = params.collateral_reserve_balance.scale();
        let debt_decimals = params.debt_to_liquidate.scale();
        let debt_price = params.debt_asset_price.rescale(WAD_PRECISION);
        let collateral_price = params.collateral_asset_price.rescale(WAD_PRECISION);

        let base_collateral_raw = self.mul_div_floor(
            &(params.debt_to_liquidate.into_raw_units() * debt_price.into_raw_units()),
            &self.pow10(collateral_decimals),
            &(collateral_price.into_raw_units() * &self.pow10(debt_decimals)),
        );
        let base_collateral = self.to_decimal(base_collateral_raw, collateral_decimals);

        let mut collateral_to_liquidate =
            self.mul_floor(&base_collateral, &params.liquidation_bonus, collateral_decimals);
        let mut debt_to_liquidate = params.debt_to_liquidate.clone();

        if collateral_to_liquidate > params.collateral_reserve_balance {
            collateral_to_liquidate = params.collateral_reserve_balance.clone();

            let debt_value_raw = self.mul_div_ceil(
                &(collateral_to_liquidate.into_raw_units() * collateral_price.into_raw_units()),
                &self.pow10(debt_decimals),
                &(debt_price.into_raw_units() * &self.pow10(collateral_decimals)),
            );
            debt_to_liquidate = self.get_min(
                self.div_ceil(
                    &self.to_decimal(debt_value_raw, debt_decimals),
                    &params.liquidation_bonus,
                    debt_decimals,
                ),
                debt_to_liquidate,
            );
        }

        let collateral_without_bonus = self.div_ceil(
            &collateral_to_liquidate,
            &params.liquidation_bonus,
            collateral_decimals,
        );
        let bonus_collateral = if collateral_without_bonus < collateral_to_liquidate {
            collateral_to_liquidate.clone() - collateral_without_bonus
        } else {
            self.to_decimal(BigUint::zero(), collateral_decimals)
        };

        let liquidation_fee_amount =
            self.mul_ceil(&bonus_collateral, &params.liquidation_fee, collateral_decimals);
        let collateral_to_liquidator =
            collateral_to_liquidate.clone() - liquidation_fee_amount.clone();

        CollateralToLiquidate {
            collateral_to_liquidate,
            collateral_to_liquidator,
            liquidation_fee_amount,
            debt_to_liquidate,
        }
    }

    /// Value of an amount in WAD base units at a WAD price.
    fn get_token_value(
        &self,
        amount: &ManagedDecimal<Self::Api, NumDecimals>,
        price: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.mul_floor(amount, price, WAD_PRECISION)
    }
}
