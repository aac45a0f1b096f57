#![no_std]

use core::cmp::Ordering;

use common_constants::{BPS, BPS_PRECISION, RAY, RAY_PRECISION, WAD, WAD_PRECISION};

multiversx_sc::imports!();

pub mod shares;
pub use shares::*;

#[multiversx_sc::module]
pub trait SharedMathModule {
    fn mul_half_up(
        &self,
        a: &ManagedDecimal<Self::Api, NumDecimals>,
        b: &ManagedDecimal<Self::Api, NumDecimals>,
        precision: NumDecimals,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let scaled_a = a.rescale(precision);
        let scaled_b = b.rescale(precision);

        let product = scaled_a.into_raw_units() * scaled_b.into_raw_units();

        // Half-up rounding at precision
        let scaled = self.pow10(precision);
        let half_scaled = &scaled / &BigUint::from(2u64);

        let rounded_product = (product + half_scaled) / scaled;

        self.to_decimal(rounded_product, precision)
    }

    fn div_half_up(
        &self,
        a: &ManagedDecimal<Self::Api, NumDecimals>,
        b: &ManagedDecimal<Self::Api, NumDecimals>,
        precision: NumDecimals,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let scaled_a = a.rescale(precision);
        let scaled_b = b.rescale(precision);

        let scaled = self.pow10(precision);
        let numerator = scaled_a.into_raw_units() * &scaled;
        let denominator = scaled_b.into_raw_units();

        let half_denominator = denominator / &BigUint::from(2u64);
        let rounded_quotient = (numerator + half_denominator) / denominator;

        self.to_decimal(rounded_quotient, precision)
    }

    /// `floor(a * b / c)` on raw integers.
    fn mul_div_floor(&self, a: &BigUint, b: &BigUint, c: &BigUint) -> BigUint {
        (a * b) / c
    }

    /// `ceil(a * b / c)` on raw integers.
    fn mul_div_ceil(&self, a: &BigUint, b: &BigUint, c: &BigUint) -> BigUint {
        let product = a * b;
        let quotient = &product / c;
        if &quotient * c < product {
            quotient + BigUint::from(1u64)
        } else {
            quotient
        }
    }

    /// Product of two decimals expressed at `precision`, rounded toward zero.
    fn mul_floor(
        &self,
        a: &ManagedDecimal<Self::Api, NumDecimals>,
        b: &ManagedDecimal<Self::Api, NumDecimals>,
        precision: NumDecimals,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let product = a.into_raw_units() * b.into_raw_units();
        let raw = self.rescale_raw(&product, a.scale() + b.scale(), precision, false);
        self.to_decimal(raw, precision)
    }

    /// Product of two decimals expressed at `precision`, rounded away from zero.
    fn mul_ceil(
        &self,
        a: &ManagedDecimal<Self::Api, NumDecimals>,
        b: &ManagedDecimal<Self::Api, NumDecimals>,
        precision: NumDecimals,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let product = a.into_raw_units() * b.into_raw_units();
        let raw = self.rescale_raw(&product, a.scale() + b.scale(), precision, true);
        self.to_decimal(raw, precision)
    }

    fn div_floor(
        &self,
        a: &ManagedDecimal<Self::Api, NumDecimals>,
        b: &ManagedDecimal<Self::Api, NumDecimals>,
        precision: NumDecimals,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let numerator = a.into_raw_units() * &self.pow10(precision + b.scale());
        let denominator = b.into_raw_units() * &self.pow10(a.scale());
        self.to_decimal(numerator / denominator, precision)
    }

    fn div_ceil(
        &self,
        a: &ManagedDecimal<Self::Api, NumDecimals>,
        b: &ManagedDecimal<Self::Api, NumDecimals>,
        precision: NumDecimals,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let one = BigUint::from(1u64);
        let numerator = a.into_raw_units() * &self.pow10(precision + b.scale());
        let denominator = b.into_raw_units() * &self.pow10(a.scale());
        self.to_decimal(self.mul_div_ceil(&numerator, &one, &denominator), precision)
    }

    fn rescale_floor(
        &self,
        value: &ManagedDecimal<Self::Api, NumDecimals>,
        new_precision: NumDecimals,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let raw = self.rescale_raw(value.into_raw_units(), value.scale(), new_precision, false);
        self.to_decimal(raw, new_precision)
    }

    fn rescale_ceil(
        &self,
        value: &ManagedDecimal<Self::Api, NumDecimals>,
        new_precision: NumDecimals,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let raw = self.rescale_raw(value.into_raw_units(), value.scale(), new_precision, true);
        self.to_decimal(raw, new_precision)
    }

    /// Moves a raw integer from `from` decimals to `to` decimals with a directed rounding.
    fn rescale_raw(
        &self,
        raw: &BigUint,
        from: NumDecimals,
        to: NumDecimals,
        round_up: bool,
    ) -> BigUint {
        match to.cmp(&from) {
            Ordering::Equal => raw.clone(),
            Ordering::Greater => raw * &self.pow10(to - from),
            Ordering::Less => {
                let factor = self.pow10(from - to);
                let one = BigUint::from(1u64);
                if round_up {
                    self.mul_div_ceil(raw, &one, &factor)
                } else {
                    raw / &factor
                }
            },
        }
    }

    fn pow10(&self, exponent: NumDecimals) -> BigUint {
        BigUint::from(10u64).pow(exponent as u32)
    }

    fn to_decimal_wad(&self, value: BigUint) -> ManagedDecimal<<Self as ContractBase>::Api, usize> {
        self.to_decimal(value, WAD_PRECISION)
    }

    fn bps_zero(&self) -> ManagedDecimal<<Self as ContractBase>::Api, usize> {
        self.to_decimal_bps(BigUint::zero())
    }

    fn wad_zero(&self) -> ManagedDecimal<<Self as ContractBase>::Api, usize> {
        self.to_decimal_wad(BigUint::zero())
    }

    fn ray_zero(&self) -> ManagedDecimal<<Self as ContractBase>::Api, usize> {
        self.to_decimal_ray(BigUint::zero())
    }

    fn to_decimal_ray(&self, value: BigUint) -> ManagedDecimal<<Self as ContractBase>::Api, usize> {
        self.to_decimal(value, RAY_PRECISION)
    }

    fn to_decimal_bps(&self, value: BigUint) -> ManagedDecimal<<Self as ContractBase>::Api, usize> {
        self.to_decimal(value, BPS_PRECISION)
    }

    fn ray(&self) -> ManagedDecimal<<Self as ContractBase>::Api, usize> {
        self.to_decimal(BigUint::from(RAY), RAY_PRECISION)
    }

    fn wad(&self) -> ManagedDecimal<<Self as ContractBase>::Api, usize> {
        self.to_decimal(BigUint::from(WAD), WAD_PRECISION)
    }

    fn bps(&self) -> ManagedDecimal<<Self as ContractBase>::Api, usize> {
        self.to_decimal(BigUint::from(BPS), BPS_PRECISION)
    }

    fn to_decimal(
        &self,
        value: BigUint,
        precision: NumDecimals,
    ) -> ManagedDecimal<<Self as ContractBase>::Api, usize> {
        ManagedDecimal::from_raw_units(value, precision)
    }

    fn rescale_half_up(
        &self,
        value: &ManagedDecimal<Self::Api, NumDecimals>,
        new_precision: NumDecimals,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let old_precision = value.scale();
        let raw_value = value.into_raw_units();

        match new_precision.cmp(&old_precision) {
            Ordering::Equal => value.clone(),
            Ordering::Less => {
                let precision_diff = old_precision - new_precision;
                let factor = self.pow10(precision_diff);
                let half_factor = &factor / 2u64;

                let rounded_downscaled_value = (raw_value + &half_factor) / factor;
                ManagedDecimal::from_raw_units(rounded_downscaled_value, new_precision)
            },
            Ordering::Greater => value.rescale(new_precision),
        }
    }

    fn get_min(
        &self,
        a: ManagedDecimal<Self::Api, NumDecimals>,
        b: ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        if a < b {
            a
        } else {
            b
        }
    }

    fn get_max(
        &self,
        a: ManagedDecimal<Self::Api, NumDecimals>,
        b: ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        if a > b {
            a
        } else {
            b
        }
    }
}
