#![no_std]

use common_constants::{RAY, RAY_PRECISION};
use common_errors::{ERROR_ASSET_NOT_LISTED, ERROR_INVALID_INTEREST_RATE_DATA, ERROR_ONLY_HUB};
use common_structs::InterestRateData;

multiversx_sc::imports!();

/// Utilization based rate model queried by the liquidity hub.
///
/// Rate parameters are written by the hub when an asset is listed or its curve
/// is updated; `calculateInterestRate` is a pure view over them.
#[multiversx_sc::contract]
pub trait InterestStrategy:
    common_math::SharedMathModule + common_rates::InterestRates + common_events::EventsModule
{
    #[init]
    fn init(&self, hub: ManagedAddress) {
        self.hub().set(&hub);
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// Stores the curve of an asset. Callable by the hub only.
    ///
    /// # Arguments
    /// - `asset_id`: Hub identifier of the asset.
    /// - `data`: Yearly RAY rates and RAY utilization breakpoints,
    ///   `0 < mid_utilization < optimal_utilization < 1` and `base_borrow_rate <= max_borrow_rate`.
    #[endpoint(setInterestRateData)]
    fn set_interest_rate_data(&self, asset_id: u32, data: InterestRateData<Self::Api>) {
        require!(
            self.blockchain().get_caller() == self.hub().get(),
            ERROR_ONLY_HUB
        );
        self.validate_interest_rate_data(&data);

        self.interest_rate_data(asset_id).set(&data);
        self.interest_rate_data_updated_event(asset_id, &data);
    }

    /// Per-second borrow rate (RAY) for the given utilization figures, raw asset units.
    #[view(calculateInterestRate)]
    fn calculate_interest_rate(
        &self,
        asset_id: u32,
        available_liquidity: BigUint,
        base_debt: BigUint,
        premium_debt: BigUint,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let data_mapper = self.interest_rate_data(asset_id);
        require!(!data_mapper.is_empty(), ERROR_ASSET_NOT_LISTED);

        // Raw units share the asset precision, so the ratio is scale free
        let total_debt = self.to_decimal(base_debt + premium_debt, 0);
        let liquidity = self.to_decimal(available_liquidity, 0);
        let utilization = self.get_utilization(&liquidity, &total_debt);

        self.calc_borrow_rate(utilization, data_mapper.get())
    }

    fn validate_interest_rate_data(&self, data: &InterestRateData<Self::Api>) {
        let zero = self.ray_zero();
        let one = self.to_decimal(BigUint::from(RAY), RAY_PRECISION);
        require!(
            data.mid_utilization > zero
                && data.mid_utilization < data.optimal_utilization
                && data.optimal_utilization < one,
            ERROR_INVALID_INTEREST_RATE_DATA
        );
        require!(
            data.base_borrow_rate <= data.max_borrow_rate,
            ERROR_INVALID_INTEREST_RATE_DATA
        );
    }

    #[view(getHub)]
    #[storage_mapper("hub")]
    fn hub(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getInterestRateData)]
    #[storage_mapper("interest_rate_data")]
    fn interest_rate_data(&self, asset_id: u32) -> SingleValueMapper<InterestRateData<Self::Api>>;
}
