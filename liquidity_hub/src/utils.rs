multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_proxies::proxy_interest_strategy;
use common_structs::{AssetData, SpokeAccount};

use crate::{cache::Cache, storage, validation};

/// The `UtilsModule` trait groups the accrual pipeline and the helpers every
/// ledger operation relies on.
///
/// **Scope**: Lazy interest accrual, rate refresh, fee share minting, spoke
/// account access and outgoing transfers.
///
/// **Goal**: Keep the operation modules free of bookkeeping details so that each
/// reads as validate, accrue, convert, mutate, check.
#[multiversx_sc::module]
pub trait UtilsModule:
    storage::Storage
    + validation::ValidationModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_math::shares::SharesMathModule
    + common_rates::InterestRates
    + common_rates::premium::RiskPremiumModule
{
    /// Accrues interest on the asset up to the current block timestamp.
    ///
    /// **Process**:
    /// 1. Skips entirely when nothing is drawn, leaving the timestamp untouched.
    /// 2. Computes the linear factor `1 + drawn_rate * elapsed` and grows the drawn index.
    /// 3. Measures the growth of drawn plus premium debt and mints the liquidity fee
    ///    part of it as supplied shares to the fee receiver spoke, priced against the
    ///    pool value net of the fee so existing suppliers keep the rest.
    /// 4. Stamps the timestamp and re-queries the rate strategy.
    ///
    /// # Arguments
    /// - `cache`: Mutable snapshot of the asset.
    ///
    /// **Security Tip**: A second call in the same block finds a zero elapsed time and changes nothing.
    fn global_sync(&self, cache: &mut Cache<Self>) {
        if !cache.has_drawn_shares() || cache.timestamp <= cache.asset.last_update_timestamp {
            return;
        }
        let delta = cache.timestamp - cache.asset.last_update_timestamp;

        let old_total_debt = cache.drawn_debt_ray() + cache.premium_debt_ray();

        let interest_factor = self.calculate_linear_interest(&cache.asset.drawn_rate, delta);
        let (new_drawn_index, old_drawn_index) =
            self.update_drawn_index(cache.asset.drawn_index.clone(), &interest_factor);
        cache.asset.drawn_index = new_drawn_index;

        let new_total_debt = cache.drawn_debt_ray() + cache.premium_debt_ray();

        let fee = self.calc_liquidity_fee(
            &old_total_debt,
            &new_total_debt,
            &cache.config.liquidity_fee,
            cache.asset.decimals,
        );

        let fee_shares = if fee > cache.zero {
            let assets_without_fee = cache.total_supplied_assets() - fee.clone();
            let fee_shares =
                self.to_shares_down(&fee, &assets_without_fee, &cache.asset.supplied_shares);
            self.mint_fee_shares(cache, &fee_shares);
            fee_shares
        } else {
            cache.zero.clone()
        };

        cache.asset.last_update_timestamp = cache.timestamp;

        self.drawn_index_update_event(
            cache.asset_id,
            &old_drawn_index,
            &cache.asset.drawn_index,
            &fee_shares,
        );

        self.update_interest_rate(cache);
    }

    /// Credits accrued fee shares to the fee receiver spoke account.
    fn mint_fee_shares(
        &self,
        cache: &mut Cache<Self>,
        fee_shares: &ManagedDecimal<Self::Api, NumDecimals>,
    ) {
        if fee_shares == &cache.zero {
            return;
        }

        self.spoke_account(cache.asset_id, &cache.config.fee_receiver)
            .update(|account| account.supplied_shares += fee_shares);
        cache.asset.supplied_shares += fee_shares;
    }

    /// Queries the rate strategy with the current liquidity and debt figures
    /// and caches the returned per-second rate for the next period.
    fn update_interest_rate(&self, cache: &mut Cache<Self>) {
        let drawn_debt = cache.drawn_debt();
        let premium_debt = cache.premium_debt();

        let drawn_rate = self
            .tx()
            .to(&cache.config.ir_strategy)
            .typed(proxy_interest_strategy::InterestStrategyProxy)
            .calculate_interest_rate(
                cache.asset_id,
                cache.asset.available_liquidity.into_raw_units(),
                drawn_debt.into_raw_units(),
                premium_debt.into_raw_units(),
            )
            .returns(ReturnsResult)
            .sync_call();

        cache.asset.drawn_rate = drawn_rate;

        self.asset_updated_event(
            cache.asset_id,
            &cache.asset.drawn_index,
            &cache.asset.drawn_rate,
            cache.timestamp,
        );
    }

    /// Loads the account of a spoke already validated as attached to the asset.
    #[inline]
    fn get_spoke_account(&self, cache: &Cache<Self>, spoke: &ManagedAddress) -> SpokeAccount<Self::Api> {
        self.spoke_account(cache.asset_id, spoke).get()
    }

    #[inline]
    fn save_spoke_account(
        &self,
        cache: &Cache<Self>,
        spoke: &ManagedAddress,
        account: &SpokeAccount<Self::Api>,
    ) {
        self.spoke_account(cache.asset_id, spoke).set(account);
    }

    /// Transfers the asset underlying (EGLD or ESDT) to `to`.
    ///
    /// **Security Tip**: Uses `transfer_if_not_empty` to avoid empty transfers.
    #[inline]
    fn send_asset(
        &self,
        cache: &Cache<Self>,
        amount: &ManagedDecimal<Self::Api, NumDecimals>,
        to: &ManagedAddress,
    ) -> EgldOrEsdtTokenPayment<Self::Api> {
        let payment = EgldOrEsdtTokenPayment::new(
            cache.asset.underlying.clone(),
            0,
            amount.into_raw_units().clone(),
        );

        self.tx().to(to).payment(&payment).transfer_if_not_empty();

        payment
    }

    /// Drawn index the asset would have if accrued now. Read-only counterpart of `global_sync`.
    fn simulate_drawn_index(&self, asset: &AssetData<Self::Api>) -> ManagedDecimal<Self::Api, NumDecimals> {
        let timestamp = self.blockchain().get_block_timestamp();
        let has_debt = asset.drawn_shares.into_raw_units() > &BigUint::zero();
        if !has_debt || timestamp <= asset.last_update_timestamp {
            return asset.drawn_index.clone();
        }

        let interest_factor = self.calculate_linear_interest(
            &asset.drawn_rate,
            timestamp - asset.last_update_timestamp,
        );
        let (new_drawn_index, _) =
            self.update_drawn_index(asset.drawn_index.clone(), &interest_factor);
        new_drawn_index
    }
}
