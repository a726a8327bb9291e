//! Constant-product swap quotes with exact integer arithmetic
//!
//! Mirrors the pair contract's `getAmountOut` / `getAmountIn`: fees are
//! applied in basis points and every division truncates, except the input
//! quote which adds one unit so the quoted input always suffices.

use crate::errors::{PairError, Result};
use num_bigint::BigInt;
use num_traits::{One, Zero};
use pair_config::FEE_BPS_DENOMINATOR;

/// V2 AMM math functions with zero precision loss
pub struct V2Math;

impl V2Math {
    /// `10000 - fee_bps`, rejecting fees of 100% or more
    fn fee_multiplier(fee_bps: u32) -> Result<BigInt> {
        if fee_bps >= FEE_BPS_DENOMINATOR {
            return Err(PairError::InvalidFee(fee_bps));
        }
        Ok(BigInt::from(FEE_BPS_DENOMINATOR - fee_bps))
    }

    /// Exact output amount for an input using the x*y=k formula
    ///
    /// # Arguments
    /// * `amount_in` - Raw input token amount
    /// * `reserve_in` - Raw input token reserve
    /// * `reserve_out` - Raw output token reserve
    /// * `fee_bps` - Fee in basis points (25 = 0.25%)
    pub fn calculate_output_amount(
        amount_in: &BigInt,
        reserve_in: &BigInt,
        reserve_out: &BigInt,
        fee_bps: u32,
    ) -> Result<BigInt> {
        if reserve_in.is_zero() || reserve_out.is_zero() {
            return Err(PairError::InsufficientReserves);
        }

        let amount_in_with_fee = amount_in * Self::fee_multiplier(fee_bps)?;

        // output = (amount_in_with_fee * reserve_out) / (reserve_in * 10000 + amount_in_with_fee)
        let numerator = &amount_in_with_fee * reserve_out;
        let denominator = reserve_in * BigInt::from(FEE_BPS_DENOMINATOR) + &amount_in_with_fee;

        Ok(numerator / denominator)
    }

    /// Required input amount for a desired output (reverse calculation)
    pub fn calculate_input_amount(
        amount_out: &BigInt,
        reserve_in: &BigInt,
        reserve_out: &BigInt,
        fee_bps: u32,
    ) -> Result<BigInt> {
        if reserve_in.is_zero() || reserve_out.is_zero() || amount_out >= reserve_out {
            return Err(PairError::InsufficientReserves);
        }

        let numerator = reserve_in * amount_out * BigInt::from(FEE_BPS_DENOMINATOR);
        let denominator = (reserve_out - amount_out) * Self::fee_multiplier(fee_bps)?;

        // Add 1 to round up (ensures sufficient input)
        Ok(numerator / denominator + BigInt::one())
    }
}
