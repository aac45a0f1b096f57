use common_constants::RAY_PRECISION;
use common_structs::{AssetConfig, AssetData, SpokeAccount};

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// A snapshot of one asset's ledger, cached from on-chain storage for the
/// duration of an operation.
///
/// **Scope**: Holds the asset aggregate and its configuration; every share and
/// debt conversion of the operation is priced against this snapshot.
///
/// **Goal**: Route every mutation of the aggregate through one in-memory copy
/// that is written back exactly once.
///
/// **Fields**:
/// - Amounts and shares carry the asset decimals, the drawn index and rate are RAY-based.
/// - `timestamp` is the current block timestamp in seconds.
pub struct Cache<'a, C>
where
    C: crate::storage::Storage,
{
    sc_ref: &'a C,
    pub asset_id: u32,
    pub asset: AssetData<C::Api>,
    pub config: AssetConfig<C::Api>,
    /// The timestamp of the current block (seconds since Unix epoch).
    pub timestamp: u64,
    /// Zero value with the asset decimals for comparisons.
    pub zero: ManagedDecimal<C::Api, NumDecimals>,
}

impl<'a, C> Cache<'a, C>
where
    C: crate::storage::Storage + common_math::shares::SharesMathModule,
{
    /// Reads the asset and its configuration. The caller checks the asset is listed.
    pub fn new(sc_ref: &'a C, asset_id: u32) -> Self {
        let asset = sc_ref.assets(asset_id).get();
        Cache {
            zero: sc_ref.to_decimal(BigUint::zero(), asset.decimals),
            config: sc_ref.asset_config(asset_id).get(),
            timestamp: sc_ref.blockchain().get_block_timestamp(),
            asset_id,
            asset,
            sc_ref,
        }
    }
}

impl<C> Drop for Cache<'_, C>
where
    C: crate::storage::Storage,
{
    /// Commits the asset aggregate and configuration back to storage.
    fn drop(&mut self) {
        self.sc_ref.assets(self.asset_id).set(&self.asset);
        self.sc_ref.asset_config(self.asset_id).set(&self.config);
    }
}

impl<C> Cache<'_, C>
where
    C: crate::storage::Storage + common_math::shares::SharesMathModule,
{
    /// Converts a raw amount into a decimal with the asset precision.
    pub fn get_decimal_value(&self, value: &BigUint<C::Api>) -> ManagedDecimal<C::Api, NumDecimals> {
        self.sc_ref.to_decimal(value.clone(), self.asset.decimals)
    }

    pub fn is_same_asset(&self, asset: &EgldOrEsdtTokenIdentifier<C::Api>) -> bool {
        self.asset.underlying == *asset
    }

    pub fn has_drawn_shares(&self) -> bool {
        self.asset.drawn_shares > self.zero
    }

    /// Base debt of the asset, rounded up.
    pub fn drawn_debt(&self) -> ManagedDecimal<C::Api, NumDecimals> {
        self.sc_ref
            .to_drawn_assets_up(&self.asset.drawn_shares, &self.asset.drawn_index)
    }

    /// Base debt at RAY precision, used to measure interest growth.
    pub fn drawn_debt_ray(&self) -> ManagedDecimal<C::Api, NumDecimals> {
        self.sc_ref
            .mul_floor(&self.asset.drawn_shares, &self.asset.drawn_index, RAY_PRECISION)
    }

    pub fn premium_debt_ray(&self) -> ManagedDecimal<C::Api, NumDecimals> {
        self.sc_ref.premium_debt_ray(
            &self.asset.premium_shares,
            &self.asset.premium_offset,
            &self.asset.realized_premium,
            &self.asset.drawn_index,
        )
    }

    /// Premium debt of the asset, rounded up.
    pub fn premium_debt(&self) -> ManagedDecimal<C::Api, NumDecimals> {
        self.sc_ref
            .rescale_ceil(&self.premium_debt_ray(), self.asset.decimals)
    }

    pub fn total_debt(&self) -> ManagedDecimal<C::Api, NumDecimals> {
        self.drawn_debt() + self.premium_debt()
    }

    /// Value backing all supplied shares: `liquidity + drawn debt + premium debt`.
    pub fn total_supplied_assets(&self) -> ManagedDecimal<C::Api, NumDecimals> {
        self.asset.available_liquidity.clone() + self.total_debt()
    }

    pub fn to_supplied_shares_down(
        &self,
        amount: &ManagedDecimal<C::Api, NumDecimals>,
    ) -> ManagedDecimal<C::Api, NumDecimals> {
        self.sc_ref.to_shares_down(
            amount,
            &self.total_supplied_assets(),
            &self.asset.supplied_shares,
        )
    }

    pub fn to_supplied_shares_up(
        &self,
        amount: &ManagedDecimal<C::Api, NumDecimals>,
    ) -> ManagedDecimal<C::Api, NumDecimals> {
        self.sc_ref.to_shares_up(
            amount,
            &self.total_supplied_assets(),
            &self.asset.supplied_shares,
        )
    }

    pub fn to_supplied_assets_down(
        &self,
        shares: &ManagedDecimal<C::Api, NumDecimals>,
    ) -> ManagedDecimal<C::Api, NumDecimals> {
        self.sc_ref.to_assets_down(
            shares,
            &self.total_supplied_assets(),
            &self.asset.supplied_shares,
        )
    }

    pub fn to_drawn_shares_up(
        &self,
        amount: &ManagedDecimal<C::Api, NumDecimals>,
    ) -> ManagedDecimal<C::Api, NumDecimals> {
        self.sc_ref
            .to_drawn_shares_up(amount, &self.asset.drawn_index)
    }

    pub fn to_drawn_shares_down(
        &self,
        amount: &ManagedDecimal<C::Api, NumDecimals>,
    ) -> ManagedDecimal<C::Api, NumDecimals> {
        self.sc_ref
            .to_drawn_shares_down(amount, &self.asset.drawn_index)
    }

    /// Base debt of a spoke account, rounded up.
    pub fn spoke_drawn_debt(
        &self,
        account: &SpokeAccount<C::Api>,
    ) -> ManagedDecimal<C::Api, NumDecimals> {
        self.sc_ref
            .to_drawn_assets_up(&account.drawn_shares, &self.asset.drawn_index)
    }

    /// Premium debt of a spoke account, rounded up.
    pub fn spoke_premium_debt(
        &self,
        account: &SpokeAccount<C::Api>,
    ) -> ManagedDecimal<C::Api, NumDecimals> {
        let premium_ray = self.sc_ref.premium_debt_ray(
            &account.premium_shares,
            &account.premium_offset,
            &account.realized_premium,
            &self.asset.drawn_index,
        );
        self.sc_ref.rescale_ceil(&premium_ray, self.asset.decimals)
    }

    pub fn spoke_supplied_assets(
        &self,
        account: &SpokeAccount<C::Api>,
    ) -> ManagedDecimal<C::Api, NumDecimals> {
        self.to_supplied_assets_down(&account.supplied_shares)
    }
}
