use common_constants::{MAX_ASSET_DECIMALS, MAX_LIQUIDITY_FEE, MAX_RISK_PREMIUM};
use common_errors::{
    ERROR_ASSET_FROZEN, ERROR_ASSET_NOT_ACTIVE, ERROR_ASSET_NOT_LISTED, ERROR_ASSET_PAUSED,
    ERROR_INVALID_ASSET_ADDRESS, ERROR_INVALID_ASSET_DECIMALS, ERROR_INVALID_FEE_RECEIVER,
    ERROR_INVALID_FROM_ADDRESS, ERROR_INVALID_IR_STRATEGY, ERROR_INVALID_LIQUIDITY_FEE,
    ERROR_INVALID_PAYMENT, ERROR_INVALID_RISK_PREMIUM, ERROR_INVALID_TO_ADDRESS,
    ERROR_SPOKE_NOT_ACTIVE, ERROR_SPOKE_NOT_LISTED,
};

use crate::{cache::Cache, storage};

multiversx_sc::imports!();

/// Pre-mutation checks shared by every entry point. All of them abort the
/// transaction, so nothing is written when one fails.
#[multiversx_sc::module]
pub trait ValidationModule:
    storage::Storage + common_math::SharedMathModule + common_math::shares::SharesMathModule
{
    /// Ensures an asset id refers to a listed asset.
    ///
    /// # Errors
    /// - `ERROR_ASSET_NOT_LISTED`: If no asset was created under this id.
    fn require_asset_listed(&self, asset_id: u32) {
        require!(!self.assets(asset_id).is_empty(), ERROR_ASSET_NOT_LISTED);
    }

    /// Ensures the asset accepts operations at all.
    ///
    /// # Errors
    /// - `ERROR_ASSET_NOT_ACTIVE`, `ERROR_ASSET_PAUSED`.
    fn require_asset_usable(&self, cache: &Cache<Self>) {
        require!(cache.config.is_active(), ERROR_ASSET_NOT_ACTIVE);
        require!(!cache.config.is_paused(), ERROR_ASSET_PAUSED);
    }

    /// Ensures the asset accepts new liquidity or new debt.
    fn require_asset_not_frozen(&self, cache: &Cache<Self>) {
        require!(!cache.config.is_frozen(), ERROR_ASSET_FROZEN);
    }

    /// Ensures `spoke` is attached to the asset and enabled.
    ///
    /// # Errors
    /// - `ERROR_SPOKE_NOT_LISTED`: If the spoke was never added to the asset.
    /// - `ERROR_SPOKE_NOT_ACTIVE`: If the spoke was disabled.
    fn require_active_spoke(&self, asset_id: u32, spoke: &ManagedAddress) {
        let config_mapper = self.spoke_config(asset_id, spoke);
        require!(!config_mapper.is_empty(), ERROR_SPOKE_NOT_LISTED);
        require!(config_mapper.get().active, ERROR_SPOKE_NOT_ACTIVE);
    }

    fn require_spoke_listed(&self, asset_id: u32, spoke: &ManagedAddress) {
        require!(
            !self.spoke_config(asset_id, spoke).is_empty(),
            ERROR_SPOKE_NOT_LISTED
        );
    }

    fn require_valid_from(&self, from: &ManagedAddress) {
        require!(
            from != &self.blockchain().get_sc_address(),
            ERROR_INVALID_FROM_ADDRESS
        );
    }

    fn require_valid_to(&self, to: &ManagedAddress) {
        require!(
            to != &self.blockchain().get_sc_address(),
            ERROR_INVALID_TO_ADDRESS
        );
    }

    fn require_non_zero_amount(&self, amount: &BigUint, error: &'static [u8]) {
        require!(amount > &BigUint::zero(), error);
    }

    fn require_valid_risk_premium(&self, risk_premium: &BigUint) {
        require!(
            risk_premium <= &BigUint::from(MAX_RISK_PREMIUM),
            ERROR_INVALID_RISK_PREMIUM
        );
    }

    fn require_valid_liquidity_fee(&self, liquidity_fee: &BigUint) {
        require!(
            liquidity_fee <= &BigUint::from(MAX_LIQUIDITY_FEE),
            ERROR_INVALID_LIQUIDITY_FEE
        );
    }

    fn require_valid_fee_receiver(&self, fee_receiver: &ManagedAddress) {
        require!(
            !fee_receiver.is_zero() && fee_receiver != &self.blockchain().get_sc_address(),
            ERROR_INVALID_FEE_RECEIVER
        );
    }

    fn require_valid_ir_strategy(&self, ir_strategy: &ManagedAddress) {
        require!(
            !ir_strategy.is_zero() && self.blockchain().is_smart_contract(ir_strategy),
            ERROR_INVALID_IR_STRATEGY
        );
    }

    fn require_valid_underlying(&self, underlying: &EgldOrEsdtTokenIdentifier, decimals: usize) {
        require!(
            underlying.is_valid() && self.asset_id(underlying).is_empty(),
            ERROR_INVALID_ASSET_ADDRESS
        );
        require!(decimals <= MAX_ASSET_DECIMALS, ERROR_INVALID_ASSET_DECIMALS);
    }

    /// Reads the single fungible payment and checks it is the asset underlying.
    fn require_asset_payment(&self, cache: &Cache<Self>) -> BigUint {
        let (token, amount) = self.call_value().egld_or_single_fungible_esdt();
        require!(cache.is_same_asset(&token), ERROR_INVALID_PAYMENT);
        amount
    }

    /// Aborts with `message` followed by the decimal rendering of `value`.
    fn panic_with_value(&self, message: &[u8], value: &BigUint) {
        let mut buffer = ManagedBuffer::new_from_bytes(message);
        buffer.append(&value.to_display());
        sc_panic!(buffer)
    }
}
