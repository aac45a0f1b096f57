multiversx_sc::imports!();

use common_errors::{
    ERROR_COLLATERAL_CANNOT_BE_LIQUIDATED, ERROR_HEALTH_FACTOR_NOT_BELOW_THRESHOLD,
    ERROR_INVALID_DEBT_TO_COVER, ERROR_INVALID_LIQUIDATION_CONFIG, ERROR_INVALID_PAYMENT,
    ERROR_RESERVE_NOT_LISTED, ERROR_RESERVE_PAUSED, ERROR_SELF_LIQUIDATION,
    ERROR_SPECIFIED_CURRENCY_NOT_BORROWED_BY_USER,
};
use common_structs::{
    AvailableCollateralParams, CollateralToLiquidate, DebtToTargetParams, DynamicReserveConfig,
    LiquidationCall, LiquidationConfig, LiquidationResult, MaxDebtParams,
};

use crate::{cache::Cache, liquidity, premium, storage, utils, validation};

/// Settles liquidations requested by spokes.
///
/// The spoke owns the user's health factor and balances and passes them in a
/// `LiquidationCall`; the hub sizes the liquidation with its own curve and
/// collateral parameters, then applies it on both assets in one transaction.
#[multiversx_sc::module]
pub trait LiquidationModule:
    storage::Storage
    + validation::ValidationModule
    + utils::UtilsModule
    + premium::PremiumModule
    + liquidity::LiquidityModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_math::shares::SharesMathModule
    + common_rates::InterestRates
    + common_rates::premium::RiskPremiumModule
    + common_liquidation::LiquidationMathModule
{
    /// Liquidates part of a user's debt against their collateral.
    ///
    /// **Process**:
    /// 1. Validates the call: distinct liquidator, listed and unpaused assets, a covering
    ///    payment, a health factor below the threshold, usable collateral and existing debt.
    /// 2. Sizes the bonus, the debt to repay and the collateral to seize.
    /// 3. Restores the debt with the payment, premium first, refunding any excess to the liquidator.
    /// 4. Removes the liquidator's collateral and sends it, then moves the protocol fee
    ///    as supplied shares to the collateral asset's fee receiver.
    ///
    /// # Arguments
    /// - `call`: User position as seen by the calling spoke.
    ///
    /// # Payment
    /// - The debt asset underlying, at least `call.debt_to_cover`.
    ///
    /// # Returns
    /// - `LiquidationResult` with the amounts applied and whether the debt balance was closed.
    #[payable]
    #[endpoint(liquidateUser)]
    fn liquidate_user(&self, call: LiquidationCall<Self::Api>) -> LiquidationResult<Self::Api> {
        let spoke = self.blockchain().get_caller();

        let (liquidation_config, reserve_config) = self.validate_liquidation(&spoke, &call);
        let payment = self.require_liquidation_payment(&call);
        let (collateral, liquidation_bonus) =
            self.size_liquidation(&call, &liquidation_config, &reserve_config);

        let (debt_restored, premium_restored) =
            self.liquidate_debt(&spoke, &call, &collateral.debt_to_liquidate, &payment);
        let fee_shares = self.liquidate_collateral(&spoke, &call, &collateral);

        let result = LiquidationResult {
            is_position_closed: collateral.debt_to_liquidate.into_raw_units()
                == &call.user_debt_balance,
            debt_restored,
            premium_restored,
            collateral_to_liquidator: collateral.collateral_to_liquidator,
            liquidation_fee_amount: collateral.liquidation_fee_amount,
            fee_shares,
            liquidation_bonus,
        };

        self.liquidation_event(
            &spoke,
            call.collateral_asset_id,
            call.debt_asset_id,
            &call.user,
            &call.liquidator,
            &result,
        );

        result
    }

    /// Amounts a `liquidateUser` call from `spoke` would apply, without applying them.
    #[view(previewLiquidation)]
    fn preview_liquidation(
        &self,
        spoke: ManagedAddress,
        call: LiquidationCall<Self::Api>,
    ) -> CollateralToLiquidate<Self::Api> {
        let (liquidation_config, reserve_config) = self.validate_liquidation(&spoke, &call);
        let (collateral, _) = self.size_liquidation(&call, &liquidation_config, &reserve_config);

        collateral
    }

    /// Reads the debt token payment; it must cover `debt_to_cover`.
    fn require_liquidation_payment(&self, call: &LiquidationCall<Self::Api>) -> BigUint {
        let (token, amount) = self.call_value().egld_or_single_fungible_esdt();
        require!(
            self.assets(call.debt_asset_id).get().underlying == token,
            ERROR_INVALID_PAYMENT
        );
        require!(amount >= call.debt_to_cover, ERROR_INVALID_DEBT_TO_COVER);

        amount
    }

    /// Checks every precondition before any math runs.
    ///
    /// # Returns
    /// - The spoke's liquidation curve and its collateral parameters on the collateral asset.
    fn validate_liquidation(
        &self,
        spoke: &ManagedAddress,
        call: &LiquidationCall<Self::Api>,
    ) -> (LiquidationConfig<Self::Api>, DynamicReserveConfig<Self::Api>) {
        require!(call.user != call.liquidator, ERROR_SELF_LIQUIDATION);

        for asset_id in [call.collateral_asset_id, call.debt_asset_id] {
            require!(!self.assets(asset_id).is_empty(), ERROR_RESERVE_NOT_LISTED);
            let config = self.asset_config(asset_id).get();
            require!(
                config.is_active() && !config.is_paused(),
                ERROR_RESERVE_PAUSED
            );
        }

        require!(
            call.debt_to_cover > BigUint::zero(),
            ERROR_INVALID_DEBT_TO_COVER
        );

        self.require_active_spoke(call.collateral_asset_id, spoke);
        self.require_active_spoke(call.debt_asset_id, spoke);

        let liquidation_config_mapper = self.liquidation_config(spoke);
        require!(
            !liquidation_config_mapper.is_empty(),
            ERROR_INVALID_LIQUIDATION_CONFIG
        );
        let liquidation_config = liquidation_config_mapper.get();

        let health_factor = self.to_decimal_wad(call.health_factor.clone());
        require!(
            health_factor < liquidation_config.target_health_factor,
            ERROR_HEALTH_FACTOR_NOT_BELOW_THRESHOLD
        );

        let reserve_config_mapper = self.dynamic_reserve_config(call.collateral_asset_id, spoke);
        require!(
            !reserve_config_mapper.is_empty(),
            ERROR_COLLATERAL_CANNOT_BE_LIQUIDATED
        );
        let reserve_config = reserve_config_mapper.get();
        require!(
            reserve_config.collateral_factor > self.bps_zero()
                && call.using_as_collateral
                && call.user_collateral_balance > BigUint::zero(),
            ERROR_COLLATERAL_CANNOT_BE_LIQUIDATED
        );

        require!(
            call.user_debt_balance > BigUint::zero(),
            ERROR_SPECIFIED_CURRENCY_NOT_BORROWED_BY_USER
        );

        (liquidation_config, reserve_config)
    }

    /// Runs the bonus curve, the close factor bound, the dust rule and the collateral split.
    fn size_liquidation(
        &self,
        call: &LiquidationCall<Self::Api>,
        liquidation_config: &LiquidationConfig<Self::Api>,
        reserve_config: &DynamicReserveConfig<Self::Api>,
    ) -> (
        CollateralToLiquidate<Self::Api>,
        ManagedDecimal<Self::Api, NumDecimals>,
    ) {
        let debt_decimals = self.assets(call.debt_asset_id).get().decimals;
        let collateral_decimals = self.assets(call.collateral_asset_id).get().decimals;

        let health_factor = self.to_decimal_wad(call.health_factor.clone());
        let debt_asset_price = self.to_decimal_wad(call.debt_asset_price.clone());
        let collateral_asset_price = self.to_decimal_wad(call.collateral_asset_price.clone());

        let liquidation_bonus = self.calculate_variable_liquidation_bonus(
            &liquidation_config.health_factor_for_max_bonus,
            &liquidation_config.liquidation_bonus_factor,
            &health_factor,
            &reserve_config.max_liquidation_bonus,
            &liquidation_config.target_health_factor,
        );

        let debt_to_target = self.calculate_debt_to_restore_close_factor(&DebtToTargetParams {
            total_debt_value: self.to_decimal_wad(call.total_debt_value.clone()),
            health_factor,
            close_factor: liquidation_config.close_factor.clone(),
            liquidation_bonus: liquidation_bonus.clone(),
            collateral_factor: reserve_config.collateral_factor.clone(),
            debt_asset_price: debt_asset_price.clone(),
            debt_asset_decimals: debt_decimals,
        });

        let debt_reserve_balance = self.to_decimal(call.user_debt_balance.clone(), debt_decimals);
        let debt_to_liquidate = self.calculate_max_debt_to_liquidate(&MaxDebtParams {
            debt_reserve_balance: debt_reserve_balance.clone(),
            debt_to_cover: self.to_decimal(call.debt_to_cover.clone(), debt_decimals),
            debt_to_target,
            debt_asset_price: debt_asset_price.clone(),
        });

        let collateral =
            self.calculate_available_collateral_to_liquidate(&AvailableCollateralParams {
                collateral_reserve_balance: self
                    .to_decimal(call.user_collateral_balance.clone(), collateral_decimals),
                collateral_asset_price,
                debt_to_liquidate,
                debt_asset_price: debt_asset_price.clone(),
                liquidation_bonus: liquidation_bonus.clone(),
                liquidation_fee: reserve_config.liquidation_fee.clone(),
            });

        self.require_no_dust_leftover(
            &debt_reserve_balance,
            &collateral.debt_to_liquidate,
            &debt_asset_price,
        );

        (collateral, liquidation_bonus)
    }

    /// Restores `debt_to_liquidate` of the spoke's debt and refunds the rest of the payment.
    ///
    /// # Returns
    /// - `(base debt repaid, premium debt repaid)`.
    fn liquidate_debt(
        &self,
        spoke: &ManagedAddress,
        call: &LiquidationCall<Self::Api>,
        debt_to_liquidate: &ManagedDecimal<Self::Api, NumDecimals>,
        payment: &BigUint,
    ) -> (
        ManagedDecimal<Self::Api, NumDecimals>,
        ManagedDecimal<Self::Api, NumDecimals>,
    ) {
        let mut cache = Cache::new(self, call.debt_asset_id);

        let (shares, base_amount, premium_amount) =
            self.process_restore(&mut cache, spoke, debt_to_liquidate);

        let refund = cache.get_decimal_value(&(payment - debt_to_liquidate.into_raw_units()));
        self.send_asset(&cache, &refund, &call.liquidator);

        self.restore_event(
            call.debt_asset_id,
            spoke,
            &call.liquidator,
            &shares,
            &base_amount,
            &premium_amount,
        );

        (base_amount, premium_amount)
    }

    /// Sends the liquidator's collateral and pays the protocol fee in shares.
    ///
    /// # Returns
    /// - Supplied shares moved to the fee receiver of the collateral asset.
    fn liquidate_collateral(
        &self,
        spoke: &ManagedAddress,
        call: &LiquidationCall<Self::Api>,
        collateral: &CollateralToLiquidate<Self::Api>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let mut cache = Cache::new(self, call.collateral_asset_id);

        if collateral.collateral_to_liquidator > cache.zero {
            let shares =
                self.process_remove(&mut cache, spoke, &collateral.collateral_to_liquidator);
            self.send_asset(&cache, &collateral.collateral_to_liquidator, &call.liquidator);

            self.remove_event(
                call.collateral_asset_id,
                spoke,
                &call.liquidator,
                &shares,
                &collateral.collateral_to_liquidator,
            );
        }

        let fee_shares = cache.to_supplied_shares_down(&collateral.liquidation_fee_amount);
        if fee_shares > cache.zero {
            self.process_pay_fee(&mut cache, spoke, &fee_shares);
        }

        fee_shares
    }
}
