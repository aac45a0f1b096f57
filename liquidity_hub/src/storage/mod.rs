multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_structs::{
    AssetConfig, AssetData, DynamicReserveConfig, LiquidationConfig, SpokeAccount, SpokeConfig,
};

/// The Storage trait provides on-chain storage mappers and view functions
/// for the assets listed on the hub and the spokes attached to them.
#[multiversx_sc::module]
pub trait Storage {
    /// Number of assets listed so far; also the last assigned asset id.
    #[view(getAssetCount)]
    #[storage_mapper("asset_count")]
    fn asset_count(&self) -> SingleValueMapper<u32>;

    /// Asset id assigned to an underlying token.
    #[view(getAssetId)]
    #[storage_mapper("asset_id")]
    fn asset_id(&self, underlying: &EgldOrEsdtTokenIdentifier) -> SingleValueMapper<u32>;

    /// Aggregate ledger state of an asset.
    ///
    /// # Returns
    /// - `AssetData<Self::Api>`: Shares, liquidity, drawn index and premium aggregates
    ///   as of the last accrual.
    #[view(getAsset)]
    #[storage_mapper("assets")]
    fn assets(&self, asset_id: u32) -> SingleValueMapper<AssetData<Self::Api>>;

    #[view(getAssetConfig)]
    #[storage_mapper("asset_config")]
    fn asset_config(&self, asset_id: u32) -> SingleValueMapper<AssetConfig<Self::Api>>;

    /// Spokes attached to an asset.
    #[view(getSpokes)]
    #[storage_mapper("asset_spokes")]
    fn asset_spokes(&self, asset_id: u32) -> UnorderedSetMapper<ManagedAddress>;

    #[view(getSpokeAccount)]
    #[storage_mapper("spoke_account")]
    fn spoke_account(
        &self,
        asset_id: u32,
        spoke: &ManagedAddress,
    ) -> SingleValueMapper<SpokeAccount<Self::Api>>;

    #[view(getSpokeConfig)]
    #[storage_mapper("spoke_config")]
    fn spoke_config(
        &self,
        asset_id: u32,
        spoke: &ManagedAddress,
    ) -> SingleValueMapper<SpokeConfig<Self::Api>>;

    /// Liquidation curve used when `spoke` settles a liquidation.
    #[view(getLiquidationConfig)]
    #[storage_mapper("liquidation_config")]
    fn liquidation_config(
        &self,
        spoke: &ManagedAddress,
    ) -> SingleValueMapper<LiquidationConfig<Self::Api>>;

    /// Collateral parameters of an asset for one spoke.
    #[view(getDynamicReserveConfig)]
    #[storage_mapper("dynamic_reserve_config")]
    fn dynamic_reserve_config(
        &self,
        asset_id: u32,
        spoke: &ManagedAddress,
    ) -> SingleValueMapper<DynamicReserveConfig<Self::Api>>;
}
