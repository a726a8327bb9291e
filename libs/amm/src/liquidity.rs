//! Liquidity token accounting
//!
//! Mint and redemption formulas of the pair contract, evaluated off-chain
//! over a [`Pair`] snapshot:
//!
//! ```text
//! first deposit:   minted = sqrt(amount0 * amount1) - MINIMUM_LIQUIDITY
//! later deposits:  minted = min(amount0 * S / reserve0, amount1 * S / reserve1)
//! redemption:      value  = reserve * liquidity / S'
//! ```
//!
//! `S'` is the total supply after the protocol fee that `mint`/`burn` would
//! accrue when the fee switch is on.

use crate::errors::{PairError, Result};
use crate::math::sqrt;
use crate::pair::Pair;
use num_bigint::BigInt;
use num_traits::{Signed, Zero};
use pair_types::{Fraction, Rounding, Token, TokenAmount};
use std::cmp;
use tracing::trace;

/// Liquidity permanently locked by the first mint
pub const MINIMUM_LIQUIDITY: u64 = 1000;

/// Rounding applied to the final liquidity value division
pub const LIQUIDITY_VALUE_ROUNDING: Rounding = Rounding::Truncate;

/// Divisor weight of `root_k` in the protocol fee formula (fee is 1/6 of growth)
const PROTOCOL_FEE_ROOT_K_WEIGHT: u8 = 5;

impl Pair {
    fn check_liquidity_token(&self, amount: &TokenAmount) -> Result<()> {
        if amount.token() != self.liquidity_token() {
            return Err(PairError::DifferentToken);
        }
        Ok(())
    }

    /// Liquidity tokens minted for depositing `amount_a` and `amount_b`
    ///
    /// The deposit may be given in either token order.
    pub fn get_liquidity_minted(
        &self,
        total_supply: &TokenAmount,
        amount_a: &TokenAmount,
        amount_b: &TokenAmount,
    ) -> Result<TokenAmount> {
        self.check_liquidity_token(total_supply)?;
        if amount_a.token().chain_id() != self.chain_id()
            || amount_b.token().chain_id() != self.chain_id()
        {
            return Err(PairError::DifferentChain);
        }

        let (amount0, amount1) = if amount_a.token().sorts_before(amount_b.token())? {
            (amount_a, amount_b)
        } else {
            (amount_b, amount_a)
        };
        if amount0.token() != self.token0() || amount1.token() != self.token1() {
            return Err(PairError::DifferentToken);
        }

        let liquidity = if total_supply.is_zero() {
            sqrt(&(amount0.raw() * amount1.raw()))? - BigInt::from(MINIMUM_LIQUIDITY)
        } else {
            let (reserve0, reserve1) = (self.reserve0().raw(), self.reserve1().raw());
            if reserve0.is_zero() || reserve1.is_zero() {
                return Err(PairError::InsufficientReserves);
            }
            let supply = total_supply.raw();
            cmp::min(
                amount0.raw() * supply / reserve0,
                amount1.raw() * supply / reserve1,
            )
        };

        if !liquidity.is_positive() {
            return Err(PairError::InsufficientInputAmount);
        }

        trace!(pair = %self.address(), minted = %liquidity, "Liquidity minted");
        Ok(TokenAmount::new(self.liquidity_token().clone(), liquidity)?)
    }

    /// Total supply after accruing the protocol fee on growth of `sqrt(k)`
    fn fee_adjusted_supply(
        &self,
        total_supply: &BigInt,
        fee_on: bool,
        k_last: Option<&BigInt>,
    ) -> Result<BigInt> {
        let k_last = match k_last {
            Some(k_last) if fee_on && k_last.is_positive() => k_last,
            _ => return Ok(total_supply.clone()),
        };

        let root_k = sqrt(&(self.reserve0().raw() * self.reserve1().raw()))?;
        let root_k_last = sqrt(k_last)?;
        if root_k <= root_k_last {
            return Ok(total_supply.clone());
        }

        let numerator = total_supply * (&root_k - &root_k_last);
        let denominator = &root_k * BigInt::from(PROTOCOL_FEE_ROOT_K_WEIGHT) + &root_k_last;
        let fee_liquidity = numerator / denominator;

        trace!(
            pair = %self.address(),
            %root_k,
            %root_k_last,
            %fee_liquidity,
            "Protocol fee accrued"
        );
        Ok(total_supply + fee_liquidity)
    }

    /// Amount of `token` redeemable for `liquidity` out of `total_supply`
    ///
    /// With `fee_on`, `k_last` is the reserve product recorded at the last
    /// liquidity event; a missing or zero `k_last` accrues no fee.
    pub fn get_liquidity_value(
        &self,
        token: &Token,
        total_supply: &TokenAmount,
        liquidity: &TokenAmount,
        fee_on: bool,
        k_last: Option<&BigInt>,
    ) -> Result<TokenAmount> {
        self.get_liquidity_value_rounded(
            token,
            total_supply,
            liquidity,
            fee_on,
            k_last,
            LIQUIDITY_VALUE_ROUNDING,
        )
    }

    /// [`Pair::get_liquidity_value`] with an explicit rounding mode for the final division
    pub fn get_liquidity_value_rounded(
        &self,
        token: &Token,
        total_supply: &TokenAmount,
        liquidity: &TokenAmount,
        fee_on: bool,
        k_last: Option<&BigInt>,
        rounding: Rounding,
    ) -> Result<TokenAmount> {
        let reserve = self.reserve_of(token)?;
        self.check_liquidity_token(total_supply)?;
        self.check_liquidity_token(liquidity)?;
        if liquidity.raw() > total_supply.raw() {
            return Err(PairError::LiquidityExceedsSupply {
                liquidity: liquidity.raw().clone(),
                total_supply: total_supply.raw().clone(),
            });
        }

        let effective_supply = self.fee_adjusted_supply(total_supply.raw(), fee_on, k_last)?;
        if effective_supply.is_zero() {
            return Ok(TokenAmount::zero(reserve.token().clone()));
        }

        let value = Fraction::new(reserve.raw() * liquidity.raw(), effective_supply)
            .quotient(rounding);
        Ok(TokenAmount::new(reserve.token().clone(), value)?)
    }
}
