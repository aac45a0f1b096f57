use common_constants::RAY_PRECISION;

multiversx_sc::imports!();

/// Share <-> underlying conversions used by the ledger.
///
/// Every conversion has an explicit rounding direction and callers pick the one
/// that favours the pool:
///
/// | Operation        | Conversion                    | Rounding |
/// |------------------|-------------------------------|----------|
/// | add / supply     | amount -> supplied shares     | down     |
/// | remove / withdraw| amount -> supplied shares     | up       |
/// | draw             | amount -> drawn shares        | up       |
/// | restore          | amount -> drawn shares        | down     |
///
/// Supplied shares are priced against the total supplied assets of the asset
/// (`liquidity + drawn debt + premium debt`). An empty pool converts 1:1.
/// Drawn shares are priced against the RAY based drawn index.
#[multiversx_sc::module]
pub trait SharesMathModule: crate::SharedMathModule {
    fn to_shares_down(
        &self,
        amount: &ManagedDecimal<Self::Api, NumDecimals>,
        total_assets: &ManagedDecimal<Self::Api, NumDecimals>,
        total_shares: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        if self.is_empty_pool(total_assets, total_shares) {
            return amount.clone();
        }
        let raw = self.mul_div_floor(
            amount.into_raw_units(),
            total_shares.into_raw_units(),
            total_assets.into_raw_units(),
        );
        self.to_decimal(raw, amount.scale())
    }

    fn to_shares_up(
        &self,
        amount: &ManagedDecimal<Self::Api, NumDecimals>,
        total_assets: &ManagedDecimal<Self::Api, NumDecimals>,
        total_shares: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        if self.is_empty_pool(total_assets, total_shares) {
            return amount.clone();
        }
        let raw = self.mul_div_ceil(
            amount.into_raw_units(),
            total_shares.into_raw_units(),
            total_assets.into_raw_units(),
        );
        self.to_decimal(raw, amount.scale())
    }

    fn to_assets_down(
        &self,
        shares: &ManagedDecimal<Self::Api, NumDecimals>,
        total_assets: &ManagedDecimal<Self::Api, NumDecimals>,
        total_shares: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        if self.is_empty_pool(total_assets, total_shares) {
            return shares.clone();
        }
        let raw = self.mul_div_floor(
            shares.into_raw_units(),
            total_assets.into_raw_units(),
            total_shares.into_raw_units(),
        );
        self.to_decimal(raw, shares.scale())
    }

    fn to_assets_up(
        &self,
        shares: &ManagedDecimal<Self::Api, NumDecimals>,
        total_assets: &ManagedDecimal<Self::Api, NumDecimals>,
        total_shares: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        if self.is_empty_pool(total_assets, total_shares) {
            return shares.clone();
        }
        let raw = self.mul_div_ceil(
            shares.into_raw_units(),
            total_assets.into_raw_units(),
            total_shares.into_raw_units(),
        );
        self.to_decimal(raw, shares.scale())
    }

    fn to_drawn_shares_up(
        &self,
        amount: &ManagedDecimal<Self::Api, NumDecimals>,
        drawn_index: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let raw = self.mul_div_ceil(
            amount.into_raw_units(),
            &self.pow10(RAY_PRECISION),
            drawn_index.into_raw_units(),
        );
        self.to_decimal(raw, amount.scale())
    }

    fn to_drawn_shares_down(
        &self,
        amount: &ManagedDecimal<Self::Api, NumDecimals>,
        drawn_index: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let raw = self.mul_div_floor(
            amount.into_raw_units(),
            &self.pow10(RAY_PRECISION),
            drawn_index.into_raw_units(),
        );
        self.to_decimal(raw, amount.scale())
    }

    fn to_drawn_assets_up(
        &self,
        shares: &ManagedDecimal<Self::Api, NumDecimals>,
        drawn_index: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let raw = self.mul_div_ceil(
            shares.into_raw_units(),
            drawn_index.into_raw_units(),
            &self.pow10(RAY_PRECISION),
        );
        self.to_decimal(raw, shares.scale())
    }

    fn to_drawn_assets_down(
        &self,
        shares: &ManagedDecimal<Self::Api, NumDecimals>,
        drawn_index: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let raw = self.mul_div_floor(
            shares.into_raw_units(),
            drawn_index.into_raw_units(),
            &self.pow10(RAY_PRECISION),
        );
        self.to_decimal(raw, shares.scale())
    }

    /// Premium debt still owed at RAY precision: `premium_shares * index - offset + realized`.
    fn premium_debt_ray(
        &self,
        premium_shares: &ManagedDecimal<Self::Api, NumDecimals>,
        premium_offset: &ManagedDecimal<Self::Api, NumDecimals>,
        realized_premium: &ManagedDecimal<Self::Api, NumDecimals>,
        drawn_index: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let accrued = self.mul_floor(premium_shares, drawn_index, RAY_PRECISION);
        accrued - premium_offset.clone() + realized_premium.clone()
    }

    fn is_empty_pool(
        &self,
        total_assets: &ManagedDecimal<Self::Api, NumDecimals>,
        total_shares: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> bool {
        total_shares.into_raw_units() == &BigUint::zero()
            || total_assets.into_raw_units() == &BigUint::zero()
    }
}
