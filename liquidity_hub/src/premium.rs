multiversx_sc::imports!();

use common_structs::SpokeAccount;

use crate::{cache::Cache, storage, validation};

/// Premium debt bookkeeping of spoke accounts.
///
/// The premium triple of an account (`premium_shares`, `premium_offset`,
/// `realized_premium`) is re-derived every time its drawn shares or its risk
/// premium change. The asset aggregate is moved by the same deltas so that the
/// sum over spokes always equals the asset triple.
#[multiversx_sc::module]
pub trait PremiumModule:
    storage::Storage
    + validation::ValidationModule
    + common_math::SharedMathModule
    + common_math::shares::SharesMathModule
    + common_rates::premium::RiskPremiumModule
{
    /// Realizes the premium accrued by `account` and rebases it on `risk_premium`.
    ///
    /// **Process**:
    /// 1. Moves `premium_shares * index - premium_offset` into `realized_premium`.
    /// 2. Recomputes `premium_shares = drawn_shares * risk_premium` (rounded up).
    /// 3. Snapshots `premium_offset = premium_shares * index` so nothing is accrued yet.
    /// 4. Applies the share and offset deltas to the asset aggregate.
    ///
    /// Premium debt owed by the account is unchanged by the call.
    fn settle_premium(
        &self,
        cache: &mut Cache<Self>,
        account: &mut SpokeAccount<Self::Api>,
        risk_premium: &ManagedDecimal<Self::Api, NumDecimals>,
    ) {
        let index = cache.asset.drawn_index.clone();

        let accrued =
            self.accrued_premium(&account.premium_shares, &account.premium_offset, &index);
        account.realized_premium += &accrued;
        cache.asset.realized_premium += &accrued;

        let new_premium_shares = self.premium_shares_for(&account.drawn_shares, risk_premium);
        let new_premium_offset = self.premium_offset_for(&new_premium_shares, &index);

        // Add first: the aggregate never dips below a single account's share.
        cache.asset.premium_shares += &new_premium_shares;
        cache.asset.premium_shares -= &account.premium_shares;
        cache.asset.premium_offset += &new_premium_offset;
        cache.asset.premium_offset -= &account.premium_offset;

        account.premium_shares = new_premium_shares;
        account.premium_offset = new_premium_offset;
        account.risk_premium = risk_premium.rescale(common_constants::BPS_PRECISION);
    }

    /// Pays up to `amount` of realized premium, RAY precision in and out.
    ///
    /// Must follow `settle_premium` so the whole premium debt sits in `realized_premium`.
    fn repay_premium(
        &self,
        cache: &mut Cache<Self>,
        account: &mut SpokeAccount<Self::Api>,
        amount: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let paid = self.get_min(amount.clone(), account.realized_premium.clone());

        account.realized_premium -= &paid;
        cache.asset.realized_premium -= &paid;

        paid
    }
}
