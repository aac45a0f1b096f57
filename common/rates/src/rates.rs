#![no_std]
use common_constants::{RAY_PRECISION, SECONDS_PER_YEAR};
use common_structs::InterestRateData;

multiversx_sc::imports!();

pub mod premium;
pub use premium::*;

/// The InterestRates module provides the rate model, the linear interest factor
/// and the fee split used by lazy accrual.
///
/// **Scope**: Pure computations over rate parameters and asset figures; no storage access.
///
/// **Goal**: Keep the accrual pipeline auditable by isolating every formula.
#[multiversx_sc::module]
pub trait InterestRates: common_math::SharedMathModule {
    /// Calculates the borrow rate based on current utilization and rate parameters.
    ///
    /// **Formula**:
    /// - If `utilization < mid_utilization`: `base_borrow_rate + (utilization * slope1 / mid_utilization)`.
    /// - If `mid_utilization <= utilization < optimal_utilization`: `base_borrow_rate + slope1 + ((utilization - mid_utilization) * slope2 / (optimal_utilization - mid_utilization))`.
    /// - Otherwise: `base_borrow_rate + slope1 + slope2 + ((utilization - optimal_utilization) * slope3 / (RAY - optimal_utilization))`.
    /// - The annual rate is capped at `max_borrow_rate` and converted to a per-second rate.
    ///
    /// # Arguments
    /// - `utilization`: Current utilization ratio, RAY-based.
    /// - `params`: Rate model configuration.
    ///
    /// # Returns
    /// - Per-second borrow rate (RAY-based).
    fn calc_borrow_rate(
        &self,
        utilization: ManagedDecimal<Self::Api, NumDecimals>,
        params: InterestRateData<Self::Api>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let annual_rate = if utilization < params.mid_utilization {
            // Region 1: utilization < mid_utilization
            let utilization_ratio = self.div_half_up(
                &self.mul_half_up(&utilization, &params.slope1, RAY_PRECISION),
                &params.mid_utilization,
                RAY_PRECISION,
            );
            params.base_borrow_rate.clone() + utilization_ratio
        } else if utilization < params.optimal_utilization {
            // Region 2: mid_utilization <= utilization < optimal_utilization
            let excess_utilization = utilization - params.mid_utilization.clone();
            let slope_contribution = self.div_half_up(
                &self.mul_half_up(&excess_utilization, &params.slope2, RAY_PRECISION),
                &(params.optimal_utilization.clone() - params.mid_utilization.clone()),
                RAY_PRECISION,
            );
            params.base_borrow_rate.clone() + params.slope1.clone() + slope_contribution
        } else {
            // Region 3: utilization >= optimal_utilization
            let base_rate =
                params.base_borrow_rate.clone() + params.slope1.clone() + params.slope2.clone();
            let excess_utilization = utilization - params.optimal_utilization.clone();
            let slope_contribution = self.div_half_up(
                &self.mul_half_up(&excess_utilization, &params.slope3, RAY_PRECISION),
                &(self.ray() - params.optimal_utilization.clone()),
                RAY_PRECISION,
            );
            base_rate + slope_contribution
        };

        let capped_rate = if annual_rate > params.max_borrow_rate {
            params.max_borrow_rate
        } else {
            annual_rate
        };

        self.div_half_up(
            &capped_rate,
            &self.to_decimal(BigUint::from(SECONDS_PER_YEAR), 0),
            RAY_PRECISION,
        )
    }

    /// Utilization of an asset: `total_debt / (available_liquidity + total_debt)`.
    ///
    /// Returns zero when nothing is supplied.
    fn get_utilization(
        &self,
        available_liquidity: &ManagedDecimal<Self::Api, NumDecimals>,
        total_debt: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let total = available_liquidity.clone() + total_debt.clone();
        if total.into_raw_units() == &BigUint::zero() {
            return self.ray_zero();
        }
        self.div_half_up(total_debt, &total, RAY_PRECISION)
    }

    /// Calculates the interest accumulation factor using a linear interest rate formula.
    ///
    /// **Formula**:
    /// - `Interest Factor = 1 + (rate * time_passed)`
    ///
    /// # Arguments
    /// - `rate`: The per-second interest rate, in RAY.
    /// - `time_passed`: The duration in seconds.
    ///
    /// # Returns
    /// - The interest accumulation factor `(1 + r*t)`, in RAY.
    fn calculate_linear_interest(
        &self,
        rate: &ManagedDecimal<Self::Api, NumDecimals>,
        time_passed: u64,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let factor = self.mul_half_up(
            rate,
            &self.to_decimal(BigUint::from(time_passed), 0),
            RAY_PRECISION,
        );

        self.ray() + factor
    }

    /// Updates the drawn index using the provided interest factor.
    ///
    /// **Formula**:
    /// - `new_drawn_index = old_drawn_index * interest_factor`.
    ///
    /// # Returns
    /// - `(new_drawn_index, old_drawn_index)`, both RAY-based.
    fn update_drawn_index(
        &self,
        old_drawn_index: ManagedDecimal<Self::Api, NumDecimals>,
        interest_factor: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> (
        ManagedDecimal<Self::Api, NumDecimals>,
        ManagedDecimal<Self::Api, NumDecimals>,
    ) {
        let new_drawn_index = self.mul_half_up(&old_drawn_index, interest_factor, RAY_PRECISION);

        if new_drawn_index < old_drawn_index {
            return (old_drawn_index.clone(), old_drawn_index);
        }

        (new_drawn_index, old_drawn_index)
    }

    /// Splits accrued interest into the protocol fee, in asset decimals.
    ///
    /// **Formula**:
    /// - `accrued = new_total_debt - old_total_debt`
    /// - `fee = floor(accrued * liquidity_fee)`
    ///
    /// # Arguments
    /// - `old_total_debt` / `new_total_debt`: Drawn plus premium debt at RAY precision.
    /// - `liquidity_fee`: BPS-based fee.
    /// - `decimals`: Asset decimals of the returned fee.
    fn calc_liquidity_fee(
        &self,
        old_total_debt: &ManagedDecimal<Self::Api, NumDecimals>,
        new_total_debt: &ManagedDecimal<Self::Api, NumDecimals>,
        liquidity_fee: &ManagedDecimal<Self::Api, NumDecimals>,
        decimals: usize,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        if new_total_debt <= old_total_debt {
            return self.to_decimal(BigUint::zero(), decimals);
        }
        let accrued = new_total_debt.clone() - old_total_debt.clone();

        self.mul_floor(&accrued, liquidity_fee, decimals)
    }
}
