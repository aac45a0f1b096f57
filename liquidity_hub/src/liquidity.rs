multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_constants::RAY_PRECISION;
use common_errors::{
    ERROR_DRAW_CAP_EXCEEDED, ERROR_INVALID_ADD_AMOUNT, ERROR_INVALID_DRAW_AMOUNT,
    ERROR_INVALID_FEE_SHARES, ERROR_INVALID_REMOVE_AMOUNT, ERROR_INVALID_RESTORE_AMOUNT,
    ERROR_INVALID_SHARES_AMOUNT, ERROR_INVALID_SUPPLY_AMOUNT, ERROR_INVALID_WITHDRAW_AMOUNT,
    ERROR_NOT_AVAILABLE_LIQUIDITY, ERROR_SUPPLIED_AMOUNT_EXCEEDED, ERROR_SUPPLY_CAP_EXCEEDED,
    ERROR_SURPLUS_AMOUNT_RESTORED,
};
use common_structs::SpokeAccount;

use crate::{cache::Cache, premium, storage, utils, validation};

/// Spoke facing ledger operations.
///
/// Every endpoint acts on the caller's own spoke account and follows the same
/// pipeline: validate, accrue, convert with the operation rounding, mutate the
/// asset and the account, check caps, refresh the rate, emit.
///
/// The `process_*` functions hold the accounting and work on an existing cache
/// so the liquidation flow can drive them without re-reading the asset.
#[multiversx_sc::module]
pub trait LiquidityModule:
    storage::Storage
    + validation::ValidationModule
    + utils::UtilsModule
    + premium::PremiumModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_math::shares::SharesMathModule
    + common_rates::InterestRates
    + common_rates::premium::RiskPremiumModule
{
    /// Adds liquidity to an asset on behalf of the calling spoke.
    ///
    /// **Process**:
    /// 1. Checks the payment token, amount and counterparty.
    /// 2. Accrues interest, then mints supplied shares rounded down.
    /// 3. Rejects the call if the spoke's supplied assets end up above its supply cap.
    ///
    /// # Arguments
    /// - `asset_id`: Listed asset receiving the payment.
    /// - `from`: Account the spoke pulled the funds from.
    ///
    /// # Returns
    /// - Supplied shares minted to the spoke.
    #[payable]
    #[endpoint(add)]
    fn add(&self, asset_id: u32, from: ManagedAddress) -> ManagedDecimal<Self::Api, NumDecimals> {
        let (spoke, amount, shares) = self.add_liquidity(asset_id, &from, ERROR_INVALID_ADD_AMOUNT);

        self.add_event(asset_id, &spoke, &from, &shares, &amount);

        shares
    }

    /// Older name of `add`, kept for spokes that still call it.
    #[payable]
    #[endpoint(supply)]
    fn supply(
        &self,
        asset_id: u32,
        from: ManagedAddress,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let (spoke, amount, shares) =
            self.add_liquidity(asset_id, &from, ERROR_INVALID_SUPPLY_AMOUNT);

        self.supply_event(asset_id, &spoke, &from, &shares, &amount);

        shares
    }

    /// Removes liquidity of the calling spoke and sends it to `to`.
    ///
    /// # Arguments
    /// - `asset_id`: Listed asset.
    /// - `amount`: Raw underlying amount to remove.
    /// - `to`: Recipient of the tokens.
    ///
    /// # Returns
    /// - Supplied shares burned, rounded up.
    ///
    /// # Errors
    /// - `ERROR_SUPPLIED_AMOUNT_EXCEEDED`: More than the spoke can redeem.
    /// - `ERROR_NOT_AVAILABLE_LIQUIDITY`: More than the idle liquidity of the asset.
    #[endpoint(remove)]
    fn remove(
        &self,
        asset_id: u32,
        amount: BigUint,
        to: ManagedAddress,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let (spoke, amount, shares) =
            self.remove_liquidity(asset_id, &amount, &to, ERROR_INVALID_REMOVE_AMOUNT);

        self.remove_event(asset_id, &spoke, &to, &shares, &amount);

        shares
    }

    /// Older name of `remove`.
    #[endpoint(withdraw)]
    fn withdraw(
        &self,
        asset_id: u32,
        amount: BigUint,
        to: ManagedAddress,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let (spoke, amount, shares) =
            self.remove_liquidity(asset_id, &amount, &to, ERROR_INVALID_WITHDRAW_AMOUNT);

        self.withdraw_event(asset_id, &spoke, &to, &shares, &amount);

        shares
    }

    /// Draws liquidity as debt of the calling spoke and sends it to `to`.
    ///
    /// **Process**:
    /// 1. Accrues interest; the first draw on an idle asset starts the debt clock.
    /// 2. Blends `risk_premium` into the spoke and asset premiums, weighted by drawn debt.
    /// 3. Mints drawn shares rounded up and rebases the spoke's premium shares.
    /// 4. Rejects the call if the spoke's debt ends up above its draw cap.
    ///
    /// # Arguments
    /// - `amount`: Raw underlying amount.
    /// - `risk_premium`: BPS premium of the borrower the spoke draws for.
    ///
    /// # Returns
    /// - Drawn shares minted.
    #[endpoint(draw)]
    fn draw(
        &self,
        asset_id: u32,
        amount: BigUint,
        risk_premium: BigUint,
        to: ManagedAddress,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.require_non_zero_amount(&amount, ERROR_INVALID_DRAW_AMOUNT);
        self.require_valid_risk_premium(&risk_premium);
        self.require_valid_to(&to);
        self.require_asset_listed(asset_id);

        let spoke = self.blockchain().get_caller();
        let mut cache = Cache::new(self, asset_id);
        let amount = cache.get_decimal_value(&amount);
        let risk_premium = self.to_decimal_bps(risk_premium);

        let shares = self.process_draw(&mut cache, &spoke, &amount, &risk_premium);

        self.send_asset(&cache, &amount, &to);

        self.draw_event(asset_id, &spoke, &to, &shares, &amount, &risk_premium);

        shares
    }

    /// Repays debt of the calling spoke with the attached payment.
    ///
    /// Premium debt is paid first; the remainder burns drawn shares rounded down,
    /// or all of them when it matches the base debt exactly.
    ///
    /// # Returns
    /// - Drawn shares burned.
    ///
    /// # Errors
    /// - `ERROR_SURPLUS_AMOUNT_RESTORED`: Payment above the spoke's total debt.
    #[payable]
    #[endpoint(restore)]
    fn restore(&self, asset_id: u32, from: ManagedAddress) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.require_valid_from(&from);
        self.require_asset_listed(asset_id);

        let spoke = self.blockchain().get_caller();
        let mut cache = Cache::new(self, asset_id);
        let amount = self.require_asset_payment(&cache);
        self.require_non_zero_amount(&amount, ERROR_INVALID_RESTORE_AMOUNT);
        let amount = cache.get_decimal_value(&amount);

        let (shares, base_amount, premium_amount) =
            self.process_restore(&mut cache, &spoke, &amount);

        self.restore_event(
            asset_id,
            &spoke,
            &from,
            &shares,
            &base_amount,
            &premium_amount,
        );

        shares
    }

    /// Moves supplied shares from the calling spoke to the asset's fee receiver.
    ///
    /// No underlying moves; liquidity is unchanged.
    #[endpoint(payFee)]
    fn pay_fee(&self, asset_id: u32, fee_shares: BigUint) {
        self.require_non_zero_amount(&fee_shares, ERROR_INVALID_FEE_SHARES);
        self.require_asset_listed(asset_id);

        let spoke = self.blockchain().get_caller();
        let mut cache = Cache::new(self, asset_id);
        let fee_shares = cache.get_decimal_value(&fee_shares);

        self.process_pay_fee(&mut cache, &spoke, &fee_shares);
    }

    /// Re-prices the premium of the calling spoke at `risk_premium`.
    ///
    /// Accrued premium is realized first so the premium debt owed is unchanged;
    /// only its future growth follows the new premium. The asset premium becomes
    /// the exact debt weighted average implied by the premium shares.
    #[endpoint(refreshPremium)]
    fn refresh_premium(&self, asset_id: u32, risk_premium: BigUint) {
        self.require_valid_risk_premium(&risk_premium);
        self.require_asset_listed(asset_id);

        let spoke = self.blockchain().get_caller();
        let mut cache = Cache::new(self, asset_id);
        self.require_asset_usable(&cache);
        self.require_active_spoke(asset_id, &spoke);

        let risk_premium = self.to_decimal_bps(risk_premium);

        self.global_sync(&mut cache);

        let mut account = self.get_spoke_account(&cache, &spoke);
        self.settle_premium(&mut cache, &mut account, &risk_premium);
        account.last_update_timestamp = cache.timestamp;
        self.save_spoke_account(&cache, &spoke, &account);

        cache.asset.risk_premium =
            self.implied_risk_premium(&cache.asset.premium_shares, &cache.asset.drawn_shares);

        self.update_interest_rate(&mut cache);

        self.refresh_premium_event(asset_id, &spoke, &risk_premium, &account.premium_shares);
    }

    /// Accrues interest on an asset. Callable by anyone.
    #[endpoint(accrueInterest)]
    fn accrue_interest(&self, asset_id: u32) {
        self.require_asset_listed(asset_id);

        let mut cache = Cache::new(self, asset_id);

        self.global_sync(&mut cache);
    }

    fn add_liquidity(
        &self,
        asset_id: u32,
        from: &ManagedAddress,
        zero_amount_error: &'static [u8],
    ) -> (
        ManagedAddress,
        ManagedDecimal<Self::Api, NumDecimals>,
        ManagedDecimal<Self::Api, NumDecimals>,
    ) {
        self.require_valid_from(from);
        self.require_asset_listed(asset_id);

        let spoke = self.blockchain().get_caller();
        let mut cache = Cache::new(self, asset_id);
        let amount = self.require_asset_payment(&cache);
        self.require_non_zero_amount(&amount, zero_amount_error);
        let amount = cache.get_decimal_value(&amount);

        let shares = self.process_add(&mut cache, &spoke, &amount);

        (spoke, amount, shares)
    }

    fn remove_liquidity(
        &self,
        asset_id: u32,
        amount: &BigUint,
        to: &ManagedAddress,
        zero_amount_error: &'static [u8],
    ) -> (
        ManagedAddress,
        ManagedDecimal<Self::Api, NumDecimals>,
        ManagedDecimal<Self::Api, NumDecimals>,
    ) {
        self.require_non_zero_amount(amount, zero_amount_error);
        self.require_valid_to(to);
        self.require_asset_listed(asset_id);

        let spoke = self.blockchain().get_caller();
        let mut cache = Cache::new(self, asset_id);
        let amount = cache.get_decimal_value(amount);

        let shares = self.process_remove(&mut cache, &spoke, &amount);

        self.send_asset(&cache, &amount, to);

        (spoke, amount, shares)
    }

    fn process_add(
        &self,
        cache: &mut Cache<Self>,
        spoke: &ManagedAddress,
        amount: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.require_asset_usable(cache);
        self.require_asset_not_frozen(cache);
        self.require_active_spoke(cache.asset_id, spoke);

        self.global_sync(cache);

        let shares = cache.to_supplied_shares_down(amount);
        require!(shares > cache.zero, ERROR_INVALID_SHARES_AMOUNT);

        let mut account = self.get_spoke_account(cache, spoke);
        account.supplied_shares += &shares;
        account.last_update_timestamp = cache.timestamp;
        cache.asset.supplied_shares += &shares;
        cache.asset.available_liquidity += amount;

        self.require_supply_cap(cache, spoke, &account);
        self.save_spoke_account(cache, spoke, &account);

        self.update_interest_rate(cache);

        shares
    }

    /// Burns supplied shares worth `amount`. The caller sends the tokens.
    fn process_remove(
        &self,
        cache: &mut Cache<Self>,
        spoke: &ManagedAddress,
        amount: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.require_asset_usable(cache);
        self.require_active_spoke(cache.asset_id, spoke);

        self.global_sync(cache);

        let mut account = self.get_spoke_account(cache, spoke);
        let redeemable = cache.spoke_supplied_assets(&account);
        if amount > &redeemable {
            self.panic_with_value(ERROR_SUPPLIED_AMOUNT_EXCEEDED, redeemable.into_raw_units());
        }
        if amount > &cache.asset.available_liquidity {
            self.panic_with_value(
                ERROR_NOT_AVAILABLE_LIQUIDITY,
                cache.asset.available_liquidity.into_raw_units(),
            );
        }

        let shares = self.get_min(
            cache.to_supplied_shares_up(amount),
            account.supplied_shares.clone(),
        );
        require!(shares > cache.zero, ERROR_INVALID_SHARES_AMOUNT);

        account.supplied_shares -= &shares;
        account.last_update_timestamp = cache.timestamp;
        cache.asset.supplied_shares -= &shares;
        cache.asset.available_liquidity -= amount;

        self.save_spoke_account(cache, spoke, &account);

        self.update_interest_rate(cache);

        shares
    }

    /// Mints drawn shares for `amount`. The caller sends the tokens.
    fn process_draw(
        &self,
        cache: &mut Cache<Self>,
        spoke: &ManagedAddress,
        amount: &ManagedDecimal<Self::Api, NumDecimals>,
        risk_premium: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.require_asset_usable(cache);
        self.require_asset_not_frozen(cache);
        self.require_active_spoke(cache.asset_id, spoke);

        self.global_sync(cache);

        // Interest only runs while something is drawn.
        if !cache.has_drawn_shares() {
            cache.asset.last_update_timestamp = cache.timestamp;
        }

        if amount > &cache.asset.available_liquidity {
            self.panic_with_value(
                ERROR_NOT_AVAILABLE_LIQUIDITY,
                cache.asset.available_liquidity.into_raw_units(),
            );
        }

        let mut account = self.get_spoke_account(cache, spoke);

        let spoke_risk_premium = self.blend_risk_premium(
            &account.risk_premium,
            &cache.spoke_drawn_debt(&account),
            risk_premium,
            amount,
        );
        cache.asset.risk_premium = self.blend_risk_premium(
            &cache.asset.risk_premium,
            &cache.drawn_debt(),
            risk_premium,
            amount,
        );

        let shares = cache.to_drawn_shares_up(amount);
        require!(shares > cache.zero, ERROR_INVALID_SHARES_AMOUNT);

        account.drawn_shares += &shares;
        cache.asset.drawn_shares += &shares;
        self.settle_premium(cache, &mut account, &spoke_risk_premium);

        cache.asset.available_liquidity -= amount;
        account.last_update_timestamp = cache.timestamp;

        self.require_draw_cap(cache, spoke, &account);
        self.save_spoke_account(cache, spoke, &account);

        self.update_interest_rate(cache);

        shares
    }

    /// Applies a repayment of `amount`, premium first.
    ///
    /// # Returns
    /// - `(drawn shares burned, base debt repaid, premium debt repaid)`.
    fn process_restore(
        &self,
        cache: &mut Cache<Self>,
        spoke: &ManagedAddress,
        amount: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> (
        ManagedDecimal<Self::Api, NumDecimals>,
        ManagedDecimal<Self::Api, NumDecimals>,
        ManagedDecimal<Self::Api, NumDecimals>,
    ) {
        self.require_asset_usable(cache);
        self.require_active_spoke(cache.asset_id, spoke);

        self.global_sync(cache);

        let mut account = self.get_spoke_account(cache, spoke);
        let risk_premium = account.risk_premium.clone();

        self.settle_premium(cache, &mut account, &risk_premium);

        let premium_debt = self.rescale_ceil(&account.realized_premium, cache.asset.decimals);
        let drawn_debt = cache.spoke_drawn_debt(&account);
        let max_restorable = premium_debt.clone() + drawn_debt.clone();
        if amount > &max_restorable {
            self.panic_with_value(ERROR_SURPLUS_AMOUNT_RESTORED, max_restorable.into_raw_units());
        }

        let premium_amount = self.get_min(amount.clone(), premium_debt);
        self.repay_premium(cache, &mut account, &premium_amount.rescale(RAY_PRECISION));

        let base_amount = amount.clone() - premium_amount.clone();
        let shares = if base_amount == drawn_debt {
            account.drawn_shares.clone()
        } else {
            cache.to_drawn_shares_down(&base_amount)
        };
        if base_amount > cache.zero {
            require!(shares > cache.zero, ERROR_INVALID_SHARES_AMOUNT);
        }

        account.drawn_shares -= &shares;
        cache.asset.drawn_shares -= &shares;
        self.settle_premium(cache, &mut account, &risk_premium);

        cache.asset.available_liquidity += amount;
        account.last_update_timestamp = cache.timestamp;

        self.save_spoke_account(cache, spoke, &account);

        self.update_interest_rate(cache);

        (shares, base_amount, premium_amount)
    }

    /// Transfers `fee_shares` from `spoke` to the fee receiver of the asset.
    fn process_pay_fee(
        &self,
        cache: &mut Cache<Self>,
        spoke: &ManagedAddress,
        fee_shares: &ManagedDecimal<Self::Api, NumDecimals>,
    ) {
        self.require_asset_usable(cache);
        self.require_active_spoke(cache.asset_id, spoke);

        self.global_sync(cache);

        let mut account = self.get_spoke_account(cache, spoke);
        if fee_shares > &account.supplied_shares {
            self.panic_with_value(
                ERROR_SUPPLIED_AMOUNT_EXCEEDED,
                account.supplied_shares.into_raw_units(),
            );
        }

        account.supplied_shares -= fee_shares;
        account.last_update_timestamp = cache.timestamp;
        // Sender first so a receiver paying itself reads the updated account.
        self.save_spoke_account(cache, spoke, &account);

        let fee_receiver = cache.config.fee_receiver.clone();
        self.spoke_account(cache.asset_id, &fee_receiver)
            .update(|receiver| receiver.supplied_shares += fee_shares);

        self.pay_fee_event(cache.asset_id, spoke, &fee_receiver, fee_shares);
    }

    fn require_supply_cap(
        &self,
        cache: &Cache<Self>,
        spoke: &ManagedAddress,
        account: &SpokeAccount<Self::Api>,
    ) {
        if let Some(cap) = self.spoke_config(cache.asset_id, spoke).get().supply_cap {
            let supplied = cache.spoke_supplied_assets(account);
            if supplied.into_raw_units() > &cap {
                self.panic_with_value(ERROR_SUPPLY_CAP_EXCEEDED, &cap);
            }
        }
    }

    fn require_draw_cap(
        &self,
        cache: &Cache<Self>,
        spoke: &ManagedAddress,
        account: &SpokeAccount<Self::Api>,
    ) {
        if let Some(cap) = self.spoke_config(cache.asset_id, spoke).get().draw_cap {
            let debt = cache.spoke_drawn_debt(account) + cache.spoke_premium_debt(account);
            if debt.into_raw_units() > &cap {
                self.panic_with_value(ERROR_DRAW_CAP_EXCEEDED, &cap);
            }
        }
    }
}
