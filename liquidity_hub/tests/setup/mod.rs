use crate::constants::*;

use common_structs::{
    AssetConfig, AssetData, InterestRateData, LiquidationCall, LiquidationResult, SpokeAccount,
};
use liquidity_hub::{proxy_interest_strategy, proxy_liquidity_hub};
use multiversx_sc::types::{
    BigUint, EgldOrEsdtTokenIdentifier, ManagedAddress, ManagedDecimal, MultiValueEncoded,
    NumDecimals, ReturnsNewManagedAddress, ReturnsResult, TestAddress, TestSCAddress,
    TestTokenIdentifier,
};
use multiversx_sc_scenario::{api::StaticApi, imports::ExpectMessage, ScenarioTxRun, ScenarioWorld};

pub fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();

    blockchain.register_contract(LIQUIDITY_HUB_PATH, liquidity_hub::ContractBuilder);
    blockchain.register_contract(INTEREST_STRATEGY_PATH, interest_strategy::ContractBuilder);

    blockchain
}

/// `whole` tokens in raw units of a token with `decimals`.
pub fn tokens(whole: u64, decimals: usize) -> BigUint<StaticApi> {
    BigUint::from(whole) * BigUint::from(10u64).pow(decimals as u32)
}

pub fn usdc(whole: u64) -> BigUint<StaticApi> {
    tokens(whole, USDC_DECIMALS)
}

pub fn xoxno(whole: u64) -> BigUint<StaticApi> {
    tokens(whole, XOXNO_DECIMALS)
}

pub fn ray_decimal(raw: u128) -> ManagedDecimal<StaticApi, NumDecimals> {
    ManagedDecimal::from_raw_units(BigUint::from(raw), 27)
}

pub fn rate_data() -> InterestRateData<StaticApi> {
    InterestRateData {
        max_borrow_rate: ray_decimal(R_MAX),
        base_borrow_rate: ray_decimal(R_BASE),
        slope1: ray_decimal(R_SLOPE1),
        slope2: ray_decimal(R_SLOPE2),
        slope3: ray_decimal(R_SLOPE3),
        mid_utilization: ray_decimal(U_MID),
        optimal_utilization: ray_decimal(U_OPTIMAL),
    }
}

pub fn setup_accounts(world: &mut ScenarioWorld) {
    let funded = [
        OWNER_ADDRESS,
        SPOKE_ADDRESS,
        CAPPED_SPOKE_ADDRESS,
        STRANGER_ADDRESS,
    ];
    for address in funded {
        world
            .account(address)
            .nonce(1)
            .esdt_balance(USDC_TOKEN, usdc(1_000_000))
            .esdt_balance(XOXNO_TOKEN, xoxno(1_000_000))
            .esdt_balance(OTHER_TOKEN, usdc(1_000_000));
    }

    for address in [TREASURY_ADDRESS, USER_ADDRESS, LIQUIDATOR_ADDRESS] {
        world.account(address).nonce(1);
    }
}

pub struct LiquidityHubTestState {
    pub world: ScenarioWorld,
    pub hub: ManagedAddress<StaticApi>,
    pub strategy: ManagedAddress<StaticApi>,
}

impl LiquidityHubTestState {
    /// Hub with USDC (id 1) and XOXNO (id 2) listed, treasury as fee receiver
    /// and `SPOKE_ADDRESS` attached uncapped to both.
    pub fn new() -> Self {
        let mut world = world();
        setup_accounts(&mut world);
        world.current_block().block_timestamp(0);

        let hub = world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(proxy_liquidity_hub::LiquidityHubProxy)
            .init()
            .code(LIQUIDITY_HUB_PATH)
            .new_address(LIQUIDITY_HUB_ADDRESS)
            .returns(ReturnsNewManagedAddress)
            .run();

        let strategy = world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(proxy_interest_strategy::InterestStrategyProxy)
            .init(&hub)
            .code(INTEREST_STRATEGY_PATH)
            .new_address(INTEREST_STRATEGY_ADDRESS)
            .returns(ReturnsNewManagedAddress)
            .run();

        let mut state = Self {
            world,
            hub,
            strategy,
        };

        let usdc_id = state.add_asset(USDC_TOKEN, USDC_DECIMALS);
        assert_eq!(usdc_id, USDC_ASSET_ID);
        let xoxno_id = state.add_asset(XOXNO_TOKEN, XOXNO_DECIMALS);
        assert_eq!(xoxno_id, XOXNO_ASSET_ID);

        state.add_spoke(USDC_ASSET_ID, SPOKE_ADDRESS, None, None);
        state.add_spoke(XOXNO_ASSET_ID, SPOKE_ADDRESS, None, None);

        state
    }

    pub fn change_timestamp(&mut self, timestamp: u64) {
        self.world.current_block().block_timestamp(timestamp);
    }

    // Administration

    pub fn add_asset(&mut self, token: TestTokenIdentifier, decimals: usize) -> u32 {
        let strategy = self.strategy.clone();
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.hub)
            .typed(proxy_liquidity_hub::LiquidityHubProxy)
            .add_asset(
                EgldOrEsdtTokenIdentifier::esdt(token.to_token_identifier()),
                decimals,
                TREASURY_ADDRESS.to_managed_address(),
                BigUint::from(LIQUIDITY_FEE),
                strategy,
                rate_data(),
            )
            .returns(ReturnsResult)
            .run()
    }

    pub fn add_asset_error(
        &mut self,
        from: TestAddress,
        token: TestTokenIdentifier,
        decimals: usize,
        fee_receiver: ManagedAddress<StaticApi>,
        liquidity_fee: u64,
        error_message: &[u8],
    ) {
        let strategy = self.strategy.clone();
        self.world
            .tx()
            .from(from)
            .to(&self.hub)
            .typed(proxy_liquidity_hub::LiquidityHubProxy)
            .add_asset(
                EgldOrEsdtTokenIdentifier::esdt(token.to_token_identifier()),
                decimals,
                fee_receiver,
                BigUint::from(liquidity_fee),
                strategy,
                rate_data(),
            )
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn add_spoke(
        &mut self,
        asset_id: u32,
        spoke: TestAddress,
        supply_cap: Option<BigUint<StaticApi>>,
        draw_cap: Option<BigUint<StaticApi>>,
    ) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.hub)
            .typed(proxy_liquidity_hub::LiquidityHubProxy)
            .add_spoke(asset_id, spoke.to_managed_address(), supply_cap, draw_cap)
            .run();
    }

    pub fn add_spoke_error(
        &mut self,
        from: TestAddress,
        asset_id: u32,
        spoke: ManagedAddress<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from)
            .to(&self.hub)
            .typed(proxy_liquidity_hub::LiquidityHubProxy)
            .add_spoke(
                asset_id,
                spoke,
                Option::<BigUint<StaticApi>>::None,
                Option::<BigUint<StaticApi>>::None,
            )
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn add_spoke_as(&mut self, from: TestAddress, asset_id: u32, spoke: TestAddress) {
        self.world
            .tx()
            .from(from)
            .to(&self.hub)
            .typed(proxy_liquidity_hub::LiquidityHubProxy)
            .add_spoke(
                asset_id,
                spoke.to_managed_address(),
                Option::<BigUint<StaticApi>>::None,
                Option::<BigUint<StaticApi>>::None,
            )
            .run();
    }

    pub fn add_spokes(&mut self, asset_id: u32, spokes: &[TestAddress]) {
        let mut encoded = MultiValueEncoded::<StaticApi, ManagedAddress<StaticApi>>::new();
        for spoke in spokes {
            encoded.push(spoke.to_managed_address());
        }

        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.hub)
            .typed(proxy_liquidity_hub::LiquidityHubProxy)
            .add_spokes(asset_id, encoded)
            .run();
    }

    pub fn update_spoke_config(
        &mut self,
        asset_id: u32,
        spoke: TestAddress,
        supply_cap: Option<BigUint<StaticApi>>,
        draw_cap: Option<BigUint<StaticApi>>,
        active: bool,
    ) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.hub)
            .typed(proxy_liquidity_hub::LiquidityHubProxy)
            .update_spoke_config(
                asset_id,
                spoke.to_managed_address(),
                supply_cap,
                draw_cap,
                active,
            )
            .run();
    }

    pub fn update_asset_config(&mut self, asset_id: u32, active: bool, paused: bool, frozen: bool) {
        let strategy = self.strategy.clone();
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.hub)
            .typed(proxy_liquidity_hub::LiquidityHubProxy)
            .update_asset_config(asset_id, strategy, active, paused, frozen)
            .run();
    }

    /// Deploys another strategy that accepts this hub as its caller.
    pub fn deploy_strategy(&mut self, address: TestSCAddress) -> ManagedAddress<StaticApi> {
        let hub = self.hub.clone();
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(proxy_interest_strategy::InterestStrategyProxy)
            .init(&hub)
            .code(INTEREST_STRATEGY_PATH)
            .new_address(address)
            .returns(ReturnsNewManagedAddress)
            .run()
    }

    pub fn update_asset_strategy(&mut self, asset_id: u32, strategy: &ManagedAddress<StaticApi>) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.hub)
            .typed(proxy_liquidity_hub::LiquidityHubProxy)
            .update_asset_config(asset_id, strategy, true, false, false)
            .run();
    }

    pub fn strategy_rate_data(
        &mut self,
        strategy: &ManagedAddress<StaticApi>,
        asset_id: u32,
    ) -> InterestRateData<StaticApi> {
        self.world
            .query()
            .to(strategy)
            .typed(proxy_interest_strategy::InterestStrategyProxy)
            .interest_rate_data(asset_id)
            .returns(ReturnsResult)
            .run()
    }

    pub fn asset_config(&mut self, asset_id: u32) -> AssetConfig<StaticApi> {
        self.world
            .query()
            .to(&self.hub)
            .typed(proxy_liquidity_hub::LiquidityHubProxy)
            .asset_config(asset_id)
            .returns(ReturnsResult)
            .run()
    }

    pub fn update_asset_fees(&mut self, asset_id: u32, fee_receiver: TestAddress, liquidity_fee: u64) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.hub)
            .typed(proxy_liquidity_hub::LiquidityHubProxy)
            .update_asset_fees(
                asset_id,
                fee_receiver.to_managed_address(),
                BigUint::from(liquidity_fee),
            )
            .run();
    }

    pub fn update_interest_rate_data(&mut self, asset_id: u32, data: InterestRateData<StaticApi>) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.hub)
            .typed(proxy_liquidity_hub::LiquidityHubProxy)
            .update_interest_rate_data(asset_id, data)
            .run();
    }

    pub fn update_interest_rate_data_error(
        &mut self,
        from: TestAddress,
        asset_id: u32,
        data: InterestRateData<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from)
            .to(&self.hub)
            .typed(proxy_liquidity_hub::LiquidityHubProxy)
            .update_interest_rate_data(asset_id, data)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn update_liquidation_config(
        &mut self,
        spoke: TestAddress,
        close_factor: u128,
        health_factor_for_max_bonus: u128,
        liquidation_bonus_factor: u64,
        target_health_factor: u128,
    ) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.hub)
            .typed(proxy_liquidity_hub::LiquidityHubProxy)
            .update_liquidation_config(
                spoke.to_managed_address(),
                BigUint::from(close_factor),
                BigUint::from(health_factor_for_max_bonus),
                BigUint::from(liquidation_bonus_factor),
                BigUint::from(target_health_factor),
            )
            .run();
    }

    pub fn update_liquidation_config_error(
        &mut self,
        spoke: TestAddress,
        close_factor: u128,
        health_factor_for_max_bonus: u128,
        liquidation_bonus_factor: u64,
        target_health_factor: u128,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.hub)
            .typed(proxy_liquidity_hub::LiquidityHubProxy)
            .update_liquidation_config(
                spoke.to_managed_address(),
                BigUint::from(close_factor),
                BigUint::from(health_factor_for_max_bonus),
                BigUint::from(liquidation_bonus_factor),
                BigUint::from(target_health_factor),
            )
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn update_dynamic_reserve_config(
        &mut self,
        asset_id: u32,
        spoke: TestAddress,
        collateral_factor: u64,
        max_liquidation_bonus: u64,
        liquidation_fee: u64,
    ) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.hub)
            .typed(proxy_liquidity_hub::LiquidityHubProxy)
            .update_dynamic_reserve_config(
                asset_id,
                spoke.to_managed_address(),
                BigUint::from(collateral_factor),
                BigUint::from(max_liquidation_bonus),
                BigUint::from(liquidation_fee),
            )
            .run();
    }

    pub fn update_dynamic_reserve_config_error(
        &mut self,
        asset_id: u32,
        spoke: TestAddress,
        collateral_factor: u64,
        max_liquidation_bonus: u64,
        liquidation_fee: u64,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.hub)
            .typed(proxy_liquidity_hub::LiquidityHubProxy)
            .update_dynamic_reserve_config(
                asset_id,
                spoke.to_managed_address(),
                BigUint::from(collateral_factor),
                BigUint::from(max_liquidation_bonus),
                BigUint::from(liquidation_fee),
            )
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    /// Liquidation curve and XOXNO collateral parameters for `SPOKE_ADDRESS`.
    pub fn setup_liquidation_configs(&mut self) {
        self.update_liquidation_config(
            SPOKE_ADDRESS,
            CLOSE_FACTOR,
            HEALTH_FACTOR_FOR_MAX_BONUS,
            LIQUIDATION_BONUS_FACTOR,
            TARGET_HEALTH_FACTOR,
        );
        self.update_dynamic_reserve_config(
            XOXNO_ASSET_ID,
            SPOKE_ADDRESS,
            COLLATERAL_FACTOR,
            MAX_LIQUIDATION_BONUS,
            LIQUIDATION_FEE,
        );
    }

    // Spoke operations

    pub fn add(
        &mut self,
        spoke: TestAddress,
        asset_id: u32,
        token: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
    ) -> ManagedDecimal<StaticApi, NumDecimals> {
        self.world
            .tx()
            .from(spoke)
            .to(&self.hub)
            .typed(proxy_liquidity_hub::LiquidityHubProxy)
            .add(asset_id, USER_ADDRESS.to_managed_address())
            .single_esdt(&token.to_token_identifier(), 0, &amount)
            .returns(ReturnsResult)
            .run()
    }

    pub fn add_error(
        &mut self,
        spoke: TestAddress,
        asset_id: u32,
        token: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(spoke)
            .to(&self.hub)
            .typed(proxy_liquidity_hub::LiquidityHubProxy)
            .add(asset_id, USER_ADDRESS.to_managed_address())
            .single_esdt(&token.to_token_identifier(), 0, &amount)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn supply(
        &mut self,
        spoke: TestAddress,
        asset_id: u32,
        token: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
    ) -> ManagedDecimal<StaticApi, NumDecimals> {
        self.world
            .tx()
            .from(spoke)
            .to(&self.hub)
            .typed(proxy_liquidity_hub::LiquidityHubProxy)
            .supply(asset_id, USER_ADDRESS.to_managed_address())
            .single_esdt(&token.to_token_identifier(), 0, &amount)
            .returns(ReturnsResult)
            .run()
    }

    pub fn remove(
        &mut self,
        spoke: TestAddress,
        asset_id: u32,
        amount: BigUint<StaticApi>,
        to: TestAddress,
    ) -> ManagedDecimal<StaticApi, NumDecimals> {
        self.world
            .tx()
            .from(spoke)
            .to(&self.hub)
            .typed(proxy_liquidity_hub::LiquidityHubProxy)
            .remove(asset_id, amount, to.to_managed_address())
            .returns(ReturnsResult)
            .run()
    }

    pub fn remove_error(
        &mut self,
        spoke: TestAddress,
        asset_id: u32,
        amount: BigUint<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(spoke)
            .to(&self.hub)
            .typed(proxy_liquidity_hub::LiquidityHubProxy)
            .remove(asset_id, amount, USER_ADDRESS.to_managed_address())
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn withdraw(
        &mut self,
        spoke: TestAddress,
        asset_id: u32,
        amount: BigUint<StaticApi>,
        to: TestAddress,
    ) -> ManagedDecimal<StaticApi, NumDecimals> {
        self.world
            .tx()
            .from(spoke)
            .to(&self.hub)
            .typed(proxy_liquidity_hub::LiquidityHubProxy)
            .withdraw(asset_id, amount, to.to_managed_address())
            .returns(ReturnsResult)
            .run()
    }

    pub fn draw(
        &mut self,
        spoke: TestAddress,
        asset_id: u32,
        amount: BigUint<StaticApi>,
        risk_premium: u64,
    ) -> ManagedDecimal<StaticApi, NumDecimals> {
        self.world
            .tx()
            .from(spoke)
            .to(&self.hub)
            .typed(proxy_liquidity_hub::LiquidityHubProxy)
            .draw(
                asset_id,
                amount,
                BigUint::from(risk_premium),
                USER_ADDRESS.to_managed_address(),
            )
            .returns(ReturnsResult)
            .run()
    }

    pub fn draw_error(
        &mut self,
        spoke: TestAddress,
        asset_id: u32,
        amount: BigUint<StaticApi>,
        risk_premium: u64,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(spoke)
            .to(&self.hub)
            .typed(proxy_liquidity_hub::LiquidityHubProxy)
            .draw(
                asset_id,
                amount,
                BigUint::from(risk_premium),
                USER_ADDRESS.to_managed_address(),
            )
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn restore(
        &mut self,
        spoke: TestAddress,
        asset_id: u32,
        token: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
    ) -> ManagedDecimal<StaticApi, NumDecimals> {
        self.world
            .tx()
            .from(spoke)
            .to(&self.hub)
            .typed(proxy_liquidity_hub::LiquidityHubProxy)
            .restore(asset_id, USER_ADDRESS.to_managed_address())
            .single_esdt(&token.to_token_identifier(), 0, &amount)
            .returns(ReturnsResult)
            .run()
    }

    pub fn restore_error(
        &mut self,
        spoke: TestAddress,
        asset_id: u32,
        token: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(spoke)
            .to(&self.hub)
            .typed(proxy_liquidity_hub::LiquidityHubProxy)
            .restore(asset_id, USER_ADDRESS.to_managed_address())
            .single_esdt(&token.to_token_identifier(), 0, &amount)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn pay_fee(&mut self, spoke: TestAddress, asset_id: u32, fee_shares: BigUint<StaticApi>) {
        self.world
            .tx()
            .from(spoke)
            .to(&self.hub)
            .typed(proxy_liquidity_hub::LiquidityHubProxy)
            .pay_fee(asset_id, fee_shares)
            .run();
    }

    pub fn pay_fee_error(
        &mut self,
        spoke: TestAddress,
        asset_id: u32,
        fee_shares: BigUint<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(spoke)
            .to(&self.hub)
            .typed(proxy_liquidity_hub::LiquidityHubProxy)
            .pay_fee(asset_id, fee_shares)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn refresh_premium(&mut self, spoke: TestAddress, asset_id: u32, risk_premium: u64) {
        self.world
            .tx()
            .from(spoke)
            .to(&self.hub)
            .typed(proxy_liquidity_hub::LiquidityHubProxy)
            .refresh_premium(asset_id, BigUint::from(risk_premium))
            .run();
    }

    pub fn refresh_premium_error(
        &mut self,
        spoke: TestAddress,
        asset_id: u32,
        risk_premium: u64,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(spoke)
            .to(&self.hub)
            .typed(proxy_liquidity_hub::LiquidityHubProxy)
            .refresh_premium(asset_id, BigUint::from(risk_premium))
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn accrue_interest(&mut self, asset_id: u32) {
        self.world
            .tx()
            .from(STRANGER_ADDRESS)
            .to(&self.hub)
            .typed(proxy_liquidity_hub::LiquidityHubProxy)
            .accrue_interest(asset_id)
            .run();
    }

    pub fn liquidate(
        &mut self,
        spoke: TestAddress,
        call: LiquidationCall<StaticApi>,
        payment: BigUint<StaticApi>,
    ) -> LiquidationResult<StaticApi> {
        self.world
            .tx()
            .from(spoke)
            .to(&self.hub)
            .typed(proxy_liquidity_hub::LiquidityHubProxy)
            .liquidate_user(call)
            .single_esdt(&USDC_TOKEN.to_token_identifier(), 0, &payment)
            .returns(ReturnsResult)
            .run()
    }

    pub fn liquidate_error(
        &mut self,
        spoke: TestAddress,
        call: LiquidationCall<StaticApi>,
        token: TestTokenIdentifier,
        payment: BigUint<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(spoke)
            .to(&self.hub)
            .typed(proxy_liquidity_hub::LiquidityHubProxy)
            .liquidate_user(call)
            .single_esdt(&token.to_token_identifier(), 0, &payment)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    // Views

    pub fn asset(&mut self, asset_id: u32) -> AssetData<StaticApi> {
        self.world
            .query()
            .to(&self.hub)
            .typed(proxy_liquidity_hub::LiquidityHubProxy)
            .assets(asset_id)
            .returns(ReturnsResult)
            .run()
    }

    pub fn spoke_account(&mut self, asset_id: u32, spoke: TestAddress) -> SpokeAccount<StaticApi> {
        self.world
            .query()
            .to(&self.hub)
            .typed(proxy_liquidity_hub::LiquidityHubProxy)
            .spoke_account(asset_id, spoke.to_managed_address())
            .returns(ReturnsResult)
            .run()
    }

    pub fn spoke_supplied_assets(&mut self, asset_id: u32, spoke: TestAddress) -> BigUint<StaticApi> {
        let supplied = self
            .world
            .query()
            .to(&self.hub)
            .typed(proxy_liquidity_hub::LiquidityHubProxy)
            .get_spoke_supplied_assets(asset_id, spoke.to_managed_address())
            .returns(ReturnsResult)
            .run();

        supplied.into_raw_units().clone()
    }

    /// `(drawn debt, premium debt)` of a spoke, raw units.
    pub fn spoke_debt(
        &mut self,
        asset_id: u32,
        spoke: TestAddress,
    ) -> (BigUint<StaticApi>, BigUint<StaticApi>) {
        let (drawn, premium) = self
            .world
            .query()
            .to(&self.hub)
            .typed(proxy_liquidity_hub::LiquidityHubProxy)
            .get_spoke_debt(asset_id, spoke.to_managed_address())
            .returns(ReturnsResult)
            .run()
            .into_tuple();

        (drawn.into_raw_units().clone(), premium.into_raw_units().clone())
    }

    pub fn total_supplied_assets(&mut self, asset_id: u32) -> BigUint<StaticApi> {
        let total = self
            .world
            .query()
            .to(&self.hub)
            .typed(proxy_liquidity_hub::LiquidityHubProxy)
            .get_total_supplied_assets(asset_id)
            .returns(ReturnsResult)
            .run();

        total.into_raw_units().clone()
    }

    /// `(drawn debt, premium debt)` of an asset, raw units.
    pub fn total_debt(&mut self, asset_id: u32) -> (BigUint<StaticApi>, BigUint<StaticApi>) {
        let (drawn, premium) = self
            .world
            .query()
            .to(&self.hub)
            .typed(proxy_liquidity_hub::LiquidityHubProxy)
            .get_total_debt(asset_id)
            .returns(ReturnsResult)
            .run()
            .into_tuple();

        (drawn.into_raw_units().clone(), premium.into_raw_units().clone())
    }

    pub fn effective_borrow_rate(&mut self, asset_id: u32) -> BigUint<StaticApi> {
        let rate = self
            .world
            .query()
            .to(&self.hub)
            .typed(proxy_liquidity_hub::LiquidityHubProxy)
            .get_effective_borrow_rate(asset_id)
            .returns(ReturnsResult)
            .run();

        rate.into_raw_units().clone()
    }

    pub fn preview_liquidation(
        &mut self,
        spoke: TestAddress,
        call: LiquidationCall<StaticApi>,
    ) -> common_structs::CollateralToLiquidate<StaticApi> {
        self.world
            .query()
            .to(&self.hub)
            .typed(proxy_liquidity_hub::LiquidityHubProxy)
            .preview_liquidation(spoke.to_managed_address(), call)
            .returns(ReturnsResult)
            .run()
    }

    pub fn is_admin(&mut self, address: TestAddress) -> bool {
        self.world
            .query()
            .to(&self.hub)
            .typed(proxy_liquidity_hub::LiquidityHubProxy)
            .is_admin(address.to_managed_address())
            .returns(ReturnsResult)
            .run()
    }

    pub fn add_admin(&mut self, address: TestAddress) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.hub)
            .typed(proxy_liquidity_hub::LiquidityHubProxy)
            .add_admin(address.to_managed_address())
            .run();
    }
}

/// Liquidation of `user` on USDC debt against XOXNO collateral, prices at 1.0.
pub fn liquidation_call(
    debt_to_cover: BigUint<StaticApi>,
    user_debt_balance: BigUint<StaticApi>,
    user_collateral_balance: BigUint<StaticApi>,
    health_factor: u128,
) -> LiquidationCall<StaticApi> {
    let total_debt_value =
        user_debt_balance.clone() * BigUint::from(WAD) / BigUint::from(10u64).pow(USDC_DECIMALS as u32);

    LiquidationCall {
        collateral_asset_id: XOXNO_ASSET_ID,
        debt_asset_id: USDC_ASSET_ID,
        user: USER_ADDRESS.to_managed_address(),
        liquidator: LIQUIDATOR_ADDRESS.to_managed_address(),
        debt_to_cover,
        user_collateral_balance,
        user_debt_balance,
        health_factor: BigUint::from(health_factor),
        total_debt_value,
        collateral_asset_price: BigUint::from(WAD),
        debt_asset_price: BigUint::from(WAD),
        using_as_collateral: true,
    }
}
