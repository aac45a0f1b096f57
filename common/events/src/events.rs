#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();
pub use common_constants::*;
pub use common_structs::*;

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("add")]
    fn add_event(
        &self,
        #[indexed] asset_id: u32,
        #[indexed] spoke: &ManagedAddress,
        #[indexed] from: &ManagedAddress,
        #[indexed] shares: &ManagedDecimal<Self::Api, NumDecimals>,
        #[indexed] amount: &ManagedDecimal<Self::Api, NumDecimals>,
    );

    // Legacy entry point, same accounting as `add`
    #[event("supply")]
    fn supply_event(
        &self,
        #[indexed] asset_id: u32,
        #[indexed] spoke: &ManagedAddress,
        #[indexed] from: &ManagedAddress,
        #[indexed] shares: &ManagedDecimal<Self::Api, NumDecimals>,
        #[indexed] amount: &ManagedDecimal<Self::Api, NumDecimals>,
    );

    #[event("remove")]
    fn remove_event(
        &self,
        #[indexed] asset_id: u32,
        #[indexed] spoke: &ManagedAddress,
        #[indexed] to: &ManagedAddress,
        #[indexed] shares: &ManagedDecimal<Self::Api, NumDecimals>,
        #[indexed] amount: &ManagedDecimal<Self::Api, NumDecimals>,
    );

    #[event("withdraw")]
    fn withdraw_event(
        &self,
        #[indexed] asset_id: u32,
        #[indexed] spoke: &ManagedAddress,
        #[indexed] to: &ManagedAddress,
        #[indexed] shares: &ManagedDecimal<Self::Api, NumDecimals>,
        #[indexed] amount: &ManagedDecimal<Self::Api, NumDecimals>,
    );

    #[event("draw")]
    fn draw_event(
        &self,
        #[indexed] asset_id: u32,
        #[indexed] spoke: &ManagedAddress,
        #[indexed] to: &ManagedAddress,
        #[indexed] drawn_shares: &ManagedDecimal<Self::Api, NumDecimals>,
        #[indexed] amount: &ManagedDecimal<Self::Api, NumDecimals>,
        #[indexed] risk_premium: &ManagedDecimal<Self::Api, NumDecimals>,
    );

    #[event("restore")]
    fn restore_event(
        &self,
        #[indexed] asset_id: u32,
        #[indexed] spoke: &ManagedAddress,
        #[indexed] from: &ManagedAddress,
        #[indexed] drawn_shares: &ManagedDecimal<Self::Api, NumDecimals>,
        #[indexed] base_amount: &ManagedDecimal<Self::Api, NumDecimals>,
        #[indexed] premium_amount: &ManagedDecimal<Self::Api, NumDecimals>,
    );

    #[event("pay_fee")]
    fn pay_fee_event(
        &self,
        #[indexed] asset_id: u32,
        #[indexed] spoke: &ManagedAddress,
        #[indexed] fee_receiver: &ManagedAddress,
        #[indexed] fee_shares: &ManagedDecimal<Self::Api, NumDecimals>,
    );

    #[event("refresh_premium")]
    fn refresh_premium_event(
        &self,
        #[indexed] asset_id: u32,
        #[indexed] spoke: &ManagedAddress,
        #[indexed] risk_premium: &ManagedDecimal<Self::Api, NumDecimals>,
        #[indexed] premium_shares: &ManagedDecimal<Self::Api, NumDecimals>,
    );

    #[event("asset_updated")]
    fn asset_updated_event(
        &self,
        #[indexed] asset_id: u32,
        #[indexed] drawn_index: &ManagedDecimal<Self::Api, NumDecimals>,
        #[indexed] drawn_rate: &ManagedDecimal<Self::Api, NumDecimals>,
        #[indexed] timestamp: u64,
    );

    #[event("drawn_index_update")]
    fn drawn_index_update_event(
        &self,
        #[indexed] asset_id: u32,
        #[indexed] old_index: &ManagedDecimal<Self::Api, NumDecimals>,
        #[indexed] new_index: &ManagedDecimal<Self::Api, NumDecimals>,
        #[indexed] fee_shares: &ManagedDecimal<Self::Api, NumDecimals>,
    );

    #[event("asset_added")]
    fn asset_added_event(
        &self,
        #[indexed] asset_id: u32,
        #[indexed] underlying: &EgldOrEsdtTokenIdentifier,
        #[indexed] decimals: usize,
        #[indexed] config: &AssetConfig<Self::Api>,
    );

    #[event("asset_config_updated")]
    fn asset_config_updated_event(
        &self,
        #[indexed] asset_id: u32,
        #[indexed] config: &AssetConfig<Self::Api>,
    );

    #[event("spoke_added")]
    fn spoke_added_event(&self, #[indexed] asset_id: u32, #[indexed] spoke: &ManagedAddress);

    #[event("spoke_config_updated")]
    fn spoke_config_updated_event(
        &self,
        #[indexed] asset_id: u32,
        #[indexed] spoke: &ManagedAddress,
        #[indexed] config: &SpokeConfig<Self::Api>,
    );

    #[event("liquidation_config_updated")]
    fn liquidation_config_updated_event(
        &self,
        #[indexed] spoke: &ManagedAddress,
        #[indexed] config: &LiquidationConfig<Self::Api>,
    );

    #[event("dynamic_reserve_config_updated")]
    fn dynamic_reserve_config_updated_event(
        &self,
        #[indexed] asset_id: u32,
        #[indexed] spoke: &ManagedAddress,
        #[indexed] config: &DynamicReserveConfig<Self::Api>,
    );

    #[event("liquidation")]
    fn liquidation_event(
        &self,
        #[indexed] spoke: &ManagedAddress,
        #[indexed] collateral_asset_id: u32,
        #[indexed] debt_asset_id: u32,
        #[indexed] user: &ManagedAddress,
        #[indexed] liquidator: &ManagedAddress,
        #[indexed] result: &LiquidationResult<Self::Api>,
    );

    #[event("interest_rate_data_updated")]
    fn interest_rate_data_updated_event(
        &self,
        #[indexed] asset_id: u32,
        #[indexed] data: &InterestRateData<Self::Api>,
    );
}
