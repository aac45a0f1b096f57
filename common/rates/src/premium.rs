use common_constants::{BPS_PRECISION, RAY_PRECISION};

multiversx_sc::imports!();

/// Risk premium bookkeeping.
///
/// A borrower's premium debt is tracked lazily as
/// `premium_shares * drawn_index - premium_offset + realized_premium`, where
/// `premium_shares = drawn_shares * risk_premium`. The triple is re-derived each
/// time the drawn position or the risk premium changes, after realizing what has
/// accrued so far.
#[multiversx_sc::module]
pub trait RiskPremiumModule: common_math::SharedMathModule {
    /// Debt weighted average of two risk premiums.
    ///
    /// `(aggregate * aggregate_weight + sample * sample_weight) / (aggregate_weight + sample_weight)`,
    /// zero when both weights are zero. Weights are underlying amounts of the same asset.
    fn blend_risk_premium(
        &self,
        aggregate: &ManagedDecimal<Self::Api, NumDecimals>,
        aggregate_weight: &ManagedDecimal<Self::Api, NumDecimals>,
        sample: &ManagedDecimal<Self::Api, NumDecimals>,
        sample_weight: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let total_weight =
            aggregate_weight.into_raw_units() + sample_weight.into_raw_units();
        if total_weight == BigUint::zero() {
            return self.bps_zero();
        }

        let weighted = aggregate.rescale(BPS_PRECISION).into_raw_units()
            * aggregate_weight.into_raw_units()
            + sample.rescale(BPS_PRECISION).into_raw_units() * sample_weight.into_raw_units();

        self.to_decimal_bps(weighted / total_weight)
    }

    /// Premium shares backing a drawn position at the given risk premium, rounded up.
    fn premium_shares_for(
        &self,
        drawn_shares: &ManagedDecimal<Self::Api, NumDecimals>,
        risk_premium: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.mul_ceil(drawn_shares, risk_premium, drawn_shares.scale())
    }

    /// Offset snapshot of premium shares at the current index, RAY precision.
    fn premium_offset_for(
        &self,
        premium_shares: &ManagedDecimal<Self::Api, NumDecimals>,
        drawn_index: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.mul_floor(premium_shares, drawn_index, RAY_PRECISION)
    }

    /// Premium accrued since the offset snapshot, RAY precision.
    fn accrued_premium(
        &self,
        premium_shares: &ManagedDecimal<Self::Api, NumDecimals>,
        premium_offset: &ManagedDecimal<Self::Api, NumDecimals>,
        drawn_index: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let current = self.premium_offset_for(premium_shares, drawn_index);
        if &current <= premium_offset {
            return self.ray_zero();
        }
        current - premium_offset.clone()
    }

    /// Rate paid on drawn debt including the premium: `base + base * risk_premium`.
    fn effective_borrow_rate(
        &self,
        drawn_rate: &ManagedDecimal<Self::Api, NumDecimals>,
        risk_premium: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        drawn_rate.clone() + self.mul_half_up(drawn_rate, risk_premium, RAY_PRECISION)
    }

    /// Risk premium implied by premium shares over drawn shares, BPS precision.
    fn implied_risk_premium(
        &self,
        premium_shares: &ManagedDecimal<Self::Api, NumDecimals>,
        drawn_shares: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        if drawn_shares.into_raw_units() == &BigUint::zero() {
            return self.bps_zero();
        }
        self.div_floor(premium_shares, drawn_shares, BPS_PRECISION)
    }
}
