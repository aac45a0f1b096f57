multiversx_sc::imports!();

use common_constants::{ASSET_ID_START, BPS_PRECISION, RAY_PRECISION, WAD_PRECISION};
use common_errors::{
    ERROR_INVALID_DYNAMIC_RESERVE_CONFIG, ERROR_INVALID_LIQUIDATION_CONFIG, ERROR_INVALID_SPOKE,
};
use common_proxies::proxy_interest_strategy;
use common_structs::{
    AssetConfig, AssetData, DynamicReserveConfig, InterestRateData, LiquidationConfig,
    SpokeAccount, SpokeConfig,
};

use crate::{cache::Cache, storage, utils, validation};

/// Administration of the hub.
///
/// Lists assets, attaches spokes and tunes their limits. Every endpoint is gated
/// by the admin set of `OnlyAdminModule`, managed by the contract owner.
///
/// Changes that alter how interest accrues (fees, strategy, pause flags) accrue
/// the asset first so that the elapsed period is settled under the old settings.
#[multiversx_sc::module]
pub trait ConfigModule:
    storage::Storage
    + validation::ValidationModule
    + utils::UtilsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_math::shares::SharesMathModule
    + common_rates::InterestRates
    + common_rates::premium::RiskPremiumModule
    + multiversx_sc_modules::only_admin::OnlyAdminModule
{
    /// Lists a new asset on the hub.
    ///
    /// **Process**:
    /// 1. Validates the underlying, fee settings and rate strategy.
    /// 2. Assigns the next asset id and stores an empty ledger with the drawn index at 1.0.
    /// 3. Attaches the fee receiver as an uncapped spoke so accrual can credit it.
    /// 4. Pushes the rate curve to the strategy and caches the initial rate.
    ///
    /// # Arguments
    /// - `underlying`: Token held by the asset, EGLD or ESDT.
    /// - `decimals`: Token decimals, at most 18.
    /// - `fee_receiver`: Spoke credited with liquidity fee shares.
    /// - `liquidity_fee`: Share of accrued interest kept as fee, BPS.
    /// - `ir_strategy`: Interest rate strategy contract.
    /// - `rate_data`: Curve registered for the asset on the strategy.
    ///
    /// # Returns
    /// - The id assigned to the asset.
    #[endpoint(addAsset)]
    fn add_asset(
        &self,
        underlying: EgldOrEsdtTokenIdentifier,
        decimals: usize,
        fee_receiver: ManagedAddress,
        liquidity_fee: BigUint,
        ir_strategy: ManagedAddress,
        rate_data: InterestRateData<Self::Api>,
    ) -> u32 {
        self.require_caller_is_admin();
        self.require_valid_underlying(&underlying, decimals);
        self.require_valid_fee_receiver(&fee_receiver);
        self.require_valid_liquidity_fee(&liquidity_fee);
        self.require_valid_ir_strategy(&ir_strategy);

        let asset_id = self.asset_count().get() + ASSET_ID_START;
        self.asset_count().set(asset_id);
        self.asset_id(&underlying).set(asset_id);

        let timestamp = self.blockchain().get_block_timestamp();
        let zero = self.to_decimal(BigUint::zero(), decimals);
        self.assets(asset_id).set(AssetData {
            underlying: underlying.clone(),
            decimals,
            supplied_shares: zero.clone(),
            available_liquidity: zero.clone(),
            drawn_shares: zero.clone(),
            drawn_index: self.ray(),
            drawn_rate: self.ray_zero(),
            risk_premium: self.bps_zero(),
            premium_shares: zero,
            premium_offset: self.ray_zero(),
            realized_premium: self.ray_zero(),
            last_update_timestamp: timestamp,
        });

        let config = AssetConfig {
            fee_receiver: fee_receiver.clone(),
            liquidity_fee: self.to_decimal_bps(liquidity_fee),
            ir_strategy: ir_strategy.clone(),
            active: true,
            paused: false,
            frozen: false,
        };
        self.asset_config(asset_id).set(&config);

        self.asset_added_event(asset_id, &underlying, decimals, &config);

        self.register_spoke(asset_id, &fee_receiver, SpokeConfig {
            supply_cap: None,
            draw_cap: None,
            active: true,
        });

        self.push_interest_rate_data(&ir_strategy, asset_id, &rate_data);

        let mut cache = Cache::new(self, asset_id);
        self.update_interest_rate(&mut cache);

        asset_id
    }

    /// Updates the strategy and status flags of an asset.
    ///
    /// A frozen asset still accepts repayments and withdrawals; a paused or
    /// inactive asset accepts nothing. When the strategy changes, the asset's
    /// curve is copied from the previous strategy to the new one, which must
    /// accept the hub as its caller.
    #[endpoint(updateAssetConfig)]
    fn update_asset_config(
        &self,
        asset_id: u32,
        ir_strategy: ManagedAddress,
        active: bool,
        paused: bool,
        frozen: bool,
    ) {
        self.require_caller_is_admin();
        self.require_asset_listed(asset_id);
        self.require_valid_ir_strategy(&ir_strategy);

        let mut cache = Cache::new(self, asset_id);
        self.global_sync(&mut cache);

        if cache.config.ir_strategy != ir_strategy {
            let rate_data = self.pull_interest_rate_data(&cache.config.ir_strategy, asset_id);
            self.push_interest_rate_data(&ir_strategy, asset_id, &rate_data);
            cache.config.ir_strategy = ir_strategy;
        }
        cache.config.active = active;
        cache.config.paused = paused;
        cache.config.frozen = frozen;

        self.update_interest_rate(&mut cache);

        self.asset_config_updated_event(asset_id, &cache.config);
    }

    /// Changes who receives the liquidity fee and how large it is.
    ///
    /// Interest accrued so far is settled to the previous receiver at the previous fee.
    /// A receiver that is not yet a spoke of the asset is attached uncapped.
    #[endpoint(updateAssetFees)]
    fn update_asset_fees(&self, asset_id: u32, fee_receiver: ManagedAddress, liquidity_fee: BigUint) {
        self.require_caller_is_admin();
        self.require_asset_listed(asset_id);
        self.require_valid_fee_receiver(&fee_receiver);
        self.require_valid_liquidity_fee(&liquidity_fee);

        if self.spoke_config(asset_id, &fee_receiver).is_empty() {
            self.register_spoke(asset_id, &fee_receiver, SpokeConfig {
                supply_cap: None,
                draw_cap: None,
                active: true,
            });
        }

        let mut cache = Cache::new(self, asset_id);
        self.global_sync(&mut cache);

        cache.config.fee_receiver = fee_receiver;
        cache.config.liquidity_fee = self.to_decimal_bps(liquidity_fee);

        self.asset_config_updated_event(asset_id, &cache.config);
    }

    /// Replaces the rate curve of an asset on its strategy.
    #[endpoint(updateInterestRateData)]
    fn update_interest_rate_data(&self, asset_id: u32, rate_data: InterestRateData<Self::Api>) {
        self.require_caller_is_admin();
        self.require_asset_listed(asset_id);

        let mut cache = Cache::new(self, asset_id);
        self.global_sync(&mut cache);

        self.push_interest_rate_data(&cache.config.ir_strategy, asset_id, &rate_data);

        self.update_interest_rate(&mut cache);
    }

    /// Attaches a spoke to an asset.
    ///
    /// # Arguments
    /// - `supply_cap` / `draw_cap`: Raw underlying caps, `None` for unlimited.
    ///
    /// # Errors
    /// - `ERROR_INVALID_SPOKE`: Zero address or spoke already attached.
    #[endpoint(addSpoke)]
    fn add_spoke(
        &self,
        asset_id: u32,
        spoke: ManagedAddress,
        supply_cap: Option<BigUint>,
        draw_cap: Option<BigUint>,
    ) {
        self.require_caller_is_admin();
        self.require_asset_listed(asset_id);

        self.register_spoke(asset_id, &spoke, SpokeConfig {
            supply_cap,
            draw_cap,
            active: true,
        });
    }

    /// Attaches several uncapped spokes to an asset.
    #[endpoint(addSpokes)]
    fn add_spokes(&self, asset_id: u32, spokes: MultiValueEncoded<ManagedAddress>) {
        self.require_caller_is_admin();
        self.require_asset_listed(asset_id);

        for spoke in spokes {
            self.register_spoke(asset_id, &spoke, SpokeConfig {
                supply_cap: None,
                draw_cap: None,
                active: true,
            });
        }
    }

    #[endpoint(updateSpokeConfig)]
    fn update_spoke_config(
        &self,
        asset_id: u32,
        spoke: ManagedAddress,
        supply_cap: Option<BigUint>,
        draw_cap: Option<BigUint>,
        active: bool,
    ) {
        self.require_caller_is_admin();
        self.require_asset_listed(asset_id);
        self.require_spoke_listed(asset_id, &spoke);

        let config = SpokeConfig {
            supply_cap,
            draw_cap,
            active,
        };
        self.spoke_config(asset_id, &spoke).set(&config);

        self.spoke_config_updated_event(asset_id, &spoke, &config);
    }

    /// Sets the liquidation curve a spoke uses.
    ///
    /// Health factors are WAD based and must satisfy
    /// `health_factor_for_max_bonus < target_health_factor <= close_factor`;
    /// the bonus factor is BPS based, at most 100%.
    #[endpoint(updateLiquidationConfig)]
    fn update_liquidation_config(
        &self,
        spoke: ManagedAddress,
        close_factor: BigUint,
        health_factor_for_max_bonus: BigUint,
        liquidation_bonus_factor: BigUint,
        target_health_factor: BigUint,
    ) {
        self.require_caller_is_admin();

        let config = LiquidationConfig {
            close_factor: self.to_decimal(close_factor, WAD_PRECISION),
            health_factor_for_max_bonus: self.to_decimal(health_factor_for_max_bonus, WAD_PRECISION),
            liquidation_bonus_factor: self.to_decimal(liquidation_bonus_factor, BPS_PRECISION),
            target_health_factor: self.to_decimal(target_health_factor, WAD_PRECISION),
        };

        require!(
            config.health_factor_for_max_bonus < config.target_health_factor
                && config.target_health_factor <= config.close_factor
                && config.liquidation_bonus_factor <= self.bps(),
            ERROR_INVALID_LIQUIDATION_CONFIG
        );

        self.liquidation_config(&spoke).set(&config);

        self.liquidation_config_updated_event(&spoke, &config);
    }

    /// Sets the collateral parameters of an asset for a spoke. All values are BPS.
    ///
    /// The collateral factor stays below 100%, the bonus is a multiplier of at
    /// least 100% and the fee at most 100%.
    #[endpoint(updateDynamicReserveConfig)]
    fn update_dynamic_reserve_config(
        &self,
        asset_id: u32,
        spoke: ManagedAddress,
        collateral_factor: BigUint,
        max_liquidation_bonus: BigUint,
        liquidation_fee: BigUint,
    ) {
        self.require_caller_is_admin();
        self.require_asset_listed(asset_id);
        self.require_spoke_listed(asset_id, &spoke);

        let config = DynamicReserveConfig {
            collateral_factor: self.to_decimal_bps(collateral_factor),
            max_liquidation_bonus: self.to_decimal_bps(max_liquidation_bonus),
            liquidation_fee: self.to_decimal_bps(liquidation_fee),
        };

        let bps = self.bps();
        require!(
            config.collateral_factor < bps
                && config.max_liquidation_bonus >= bps
                && config.liquidation_fee <= bps,
            ERROR_INVALID_DYNAMIC_RESERVE_CONFIG
        );

        self.dynamic_reserve_config(asset_id, &spoke).set(&config);

        self.dynamic_reserve_config_updated_event(asset_id, &spoke, &config);
    }

    fn register_spoke(&self, asset_id: u32, spoke: &ManagedAddress, config: SpokeConfig<Self::Api>) {
        require!(!spoke.is_zero(), ERROR_INVALID_SPOKE);
        require!(
            self.asset_spokes(asset_id).insert(spoke.clone()),
            ERROR_INVALID_SPOKE
        );

        let decimals = self.assets(asset_id).get().decimals;
        let timestamp = self.blockchain().get_block_timestamp();
        self.spoke_account(asset_id, spoke).set(SpokeAccount::new(
            decimals,
            RAY_PRECISION,
            BPS_PRECISION,
            timestamp,
        ));
        self.spoke_config(asset_id, spoke).set(&config);

        self.spoke_added_event(asset_id, spoke);
        self.spoke_config_updated_event(asset_id, spoke, &config);
    }

    fn pull_interest_rate_data(
        &self,
        ir_strategy: &ManagedAddress,
        asset_id: u32,
    ) -> InterestRateData<Self::Api> {
        self.tx()
            .to(ir_strategy)
            .typed(proxy_interest_strategy::InterestStrategyProxy)
            .interest_rate_data(asset_id)
            .returns(ReturnsResult)
            .sync_call()
    }

    fn push_interest_rate_data(
        &self,
        ir_strategy: &ManagedAddress,
        asset_id: u32,
        rate_data: &InterestRateData<Self::Api>,
    ) {
        self.tx()
            .to(ir_strategy)
            .typed(proxy_interest_strategy::InterestStrategyProxy)
            .set_interest_rate_data(asset_id, rate_data)
            .sync_call();
    }
}
