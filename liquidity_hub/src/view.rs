multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_constants::RAY_PRECISION;
use common_structs::{AssetData, SpokeAccount};

use crate::{storage, utils, validation};

/// Read-only figures of the hub.
///
/// Views never write storage, so they price against the asset as it would be
/// right after an accrual at the current block: the drawn index is projected
/// and the pending liquidity fee shares are counted as minted.
#[multiversx_sc::module]
pub trait ViewModule:
    storage::Storage
    + validation::ValidationModule
    + utils::UtilsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_math::shares::SharesMathModule
    + common_rates::InterestRates
    + common_rates::premium::RiskPremiumModule
{
    /// Liquidity plus drawn and premium debt of the asset.
    #[view(getTotalSuppliedAssets)]
    fn get_total_supplied_assets(&self, asset_id: u32) -> ManagedDecimal<Self::Api, NumDecimals> {
        let asset = self.accrued_asset(asset_id);
        self.total_supplied_assets_of(&asset)
    }

    /// # Returns
    /// - `(drawn debt, premium debt)` of the asset, both rounded up.
    #[view(getTotalDebt)]
    fn get_total_debt(
        &self,
        asset_id: u32,
    ) -> MultiValue2<ManagedDecimal<Self::Api, NumDecimals>, ManagedDecimal<Self::Api, NumDecimals>>
    {
        let asset = self.accrued_asset(asset_id);
        (self.drawn_debt_of(&asset), self.premium_debt_of(&asset)).into()
    }

    #[view(getSpokeSuppliedAssets)]
    fn get_spoke_supplied_assets(
        &self,
        asset_id: u32,
        spoke: ManagedAddress,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.require_spoke_listed(asset_id, &spoke);

        let asset = self.accrued_asset(asset_id);
        let mut account = self.spoke_account(asset_id, &spoke).get();
        if self.asset_config(asset_id).get().fee_receiver == spoke {
            account.supplied_shares += &self.pending_fee_shares(asset_id);
        }

        self.to_assets_down(
            &account.supplied_shares,
            &self.total_supplied_assets_of(&asset),
            &asset.supplied_shares,
        )
    }

    /// # Returns
    /// - `(drawn debt, premium debt)` owed by the spoke, both rounded up.
    #[view(getSpokeDebt)]
    fn get_spoke_debt(
        &self,
        asset_id: u32,
        spoke: ManagedAddress,
    ) -> MultiValue2<ManagedDecimal<Self::Api, NumDecimals>, ManagedDecimal<Self::Api, NumDecimals>>
    {
        self.require_spoke_listed(asset_id, &spoke);

        let asset = self.accrued_asset(asset_id);
        let account = self.spoke_account(asset_id, &spoke).get();

        (
            self.to_drawn_assets_up(&account.drawn_shares, &asset.drawn_index),
            self.spoke_premium_debt_of(&asset, &account),
        )
            .into()
    }

    #[view(convertToSuppliedAssets)]
    fn convert_to_supplied_assets(
        &self,
        asset_id: u32,
        shares: BigUint,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let asset = self.accrued_asset(asset_id);
        self.to_assets_down(
            &self.to_decimal(shares, asset.decimals),
            &self.total_supplied_assets_of(&asset),
            &asset.supplied_shares,
        )
    }

    #[view(convertToSuppliedShares)]
    fn convert_to_supplied_shares(
        &self,
        asset_id: u32,
        amount: BigUint,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let asset = self.accrued_asset(asset_id);
        self.to_shares_down(
            &self.to_decimal(amount, asset.decimals),
            &self.total_supplied_assets_of(&asset),
            &asset.supplied_shares,
        )
    }

    #[view(convertToDrawnAssets)]
    fn convert_to_drawn_assets(
        &self,
        asset_id: u32,
        shares: BigUint,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let asset = self.accrued_asset(asset_id);
        self.to_drawn_assets_up(&self.to_decimal(shares, asset.decimals), &asset.drawn_index)
    }

    #[view(convertToDrawnShares)]
    fn convert_to_drawn_shares(
        &self,
        asset_id: u32,
        amount: BigUint,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let asset = self.accrued_asset(asset_id);
        self.to_drawn_shares_up(&self.to_decimal(amount, asset.decimals), &asset.drawn_index)
    }

    /// Per second rate paid by drawn debt including the asset's average premium, RAY based.
    #[view(getEffectiveBorrowRate)]
    fn get_effective_borrow_rate(&self, asset_id: u32) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.require_asset_listed(asset_id);

        let asset = self.assets(asset_id).get();
        self.effective_borrow_rate(&asset.drawn_rate, &asset.risk_premium)
    }

    /// Stored asset with the drawn index and fee shares projected to the current block.
    fn accrued_asset(&self, asset_id: u32) -> AssetData<Self::Api> {
        self.require_asset_listed(asset_id);

        let mut asset = self.assets(asset_id).get();
        let fee_shares = self.pending_fee_shares(asset_id);
        asset.drawn_index = self.simulate_drawn_index(&asset);
        asset.supplied_shares += &fee_shares;

        asset
    }

    /// Liquidity fee shares an accrual at the current block would mint.
    fn pending_fee_shares(&self, asset_id: u32) -> ManagedDecimal<Self::Api, NumDecimals> {
        let stored = self.assets(asset_id).get();
        let mut accrued = stored.clone();
        accrued.drawn_index = self.simulate_drawn_index(&stored);

        let liquidity_fee = self.asset_config(asset_id).get().liquidity_fee;
        let fee = self.calc_liquidity_fee(
            &self.total_debt_ray_of(&stored),
            &self.total_debt_ray_of(&accrued),
            &liquidity_fee,
            stored.decimals,
        );
        if fee.into_raw_units() == &BigUint::zero() {
            return fee;
        }

        let assets_without_fee = self.total_supplied_assets_of(&accrued) - fee.clone();
        self.to_shares_down(&fee, &assets_without_fee, &stored.supplied_shares)
    }

    fn total_debt_ray_of(&self, asset: &AssetData<Self::Api>) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.mul_floor(&asset.drawn_shares, &asset.drawn_index, RAY_PRECISION)
            + self.premium_debt_ray(
                &asset.premium_shares,
                &asset.premium_offset,
                &asset.realized_premium,
                &asset.drawn_index,
            )
    }

    fn drawn_debt_of(&self, asset: &AssetData<Self::Api>) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.to_drawn_assets_up(&asset.drawn_shares, &asset.drawn_index)
    }

    fn premium_debt_of(&self, asset: &AssetData<Self::Api>) -> ManagedDecimal<Self::Api, NumDecimals> {
        let premium_ray = self.premium_debt_ray(
            &asset.premium_shares,
            &asset.premium_offset,
            &asset.realized_premium,
            &asset.drawn_index,
        );
        self.rescale_ceil(&premium_ray, asset.decimals)
    }

    fn spoke_premium_debt_of(
        &self,
        asset: &AssetData<Self::Api>,
        account: &SpokeAccount<Self::Api>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let premium_ray = self.premium_debt_ray(
            &account.premium_shares,
            &account.premium_offset,
            &account.realized_premium,
            &asset.drawn_index,
        );
        self.rescale_ceil(&premium_ray, asset.decimals)
    }

    fn total_supplied_assets_of(
        &self,
        asset: &AssetData<Self::Api>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        asset.available_liquidity.clone() + self.drawn_debt_of(asset) + self.premium_debt_of(asset)
    }
}
