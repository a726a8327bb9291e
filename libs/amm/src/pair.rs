//! Constant-product pair state
//!
//! A [`Pair`] holds the two reserves in canonical order: `token0` is the token
//! whose address sorts lower. The pair's address (and with it the identity of
//! its liquidity token) comes from the injected [`PairAddressCache`].
//!
//! Pairs are immutable. Swap quotes return the reserves they would leave
//! behind as a new `Pair` rather than mutating the receiver.

use crate::errors::{PairError, Result};
use crate::pair_address::PairAddressCache;
use crate::price::Price;
use crate::v2_math::V2Math;
use num_traits::Zero;
use pair_types::{Address, ChainId, Token, TokenAmount};
use std::fmt;
use tracing::debug;

// =============================================================================
// LIQUIDITY TOKEN METADATA
// =============================================================================

pub const LIQUIDITY_TOKEN_DECIMALS: u8 = 18;
pub const LIQUIDITY_TOKEN_SYMBOL: &str = "Cake-LP";
pub const LIQUIDITY_TOKEN_NAME: &str = "Pancake LPs";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair {
    liquidity_token: Token,
    /// `[reserve0, reserve1]`
    token_amounts: [TokenAmount; 2],
    fee_bps: u32,
}

impl Pair {
    /// Build a pair from the reserves of its two tokens, in either order
    pub fn new(
        amount_a: TokenAmount,
        amount_b: TokenAmount,
        cache: &PairAddressCache,
    ) -> Result<Self> {
        let (amount0, amount1) = if amount_a.token().sorts_before(amount_b.token())? {
            (amount_a, amount_b)
        } else {
            (amount_b, amount_a)
        };

        let address = cache.get_address(amount0.token().address(), amount1.token().address());
        let liquidity_token = Token::new(
            amount0.token().chain_id(),
            address,
            LIQUIDITY_TOKEN_DECIMALS,
            LIQUIDITY_TOKEN_SYMBOL,
            LIQUIDITY_TOKEN_NAME,
        );

        debug!(
            pair = %address,
            chain_id = %liquidity_token.chain_id(),
            reserve0 = %amount0,
            reserve1 = %amount1,
            "Constructed pair"
        );

        Ok(Self {
            liquidity_token,
            token_amounts: [amount0, amount1],
            fee_bps: cache.deployment().fee_bps,
        })
    }

    /// Same pair identity over different reserves
    fn with_reserves(&self, reserve0: TokenAmount, reserve1: TokenAmount) -> Self {
        Self {
            liquidity_token: self.liquidity_token.clone(),
            token_amounts: [reserve0, reserve1],
            fee_bps: self.fee_bps,
        }
    }

    pub fn token0(&self) -> &Token {
        self.token_amounts[0].token()
    }

    pub fn token1(&self) -> &Token {
        self.token_amounts[1].token()
    }

    pub fn reserve0(&self) -> &TokenAmount {
        &self.token_amounts[0]
    }

    pub fn reserve1(&self) -> &TokenAmount {
        &self.token_amounts[1]
    }

    /// Chain of `token0` (both tokens share it)
    pub fn chain_id(&self) -> ChainId {
        self.token0().chain_id()
    }

    /// Derived CREATE2 address of the pair contract
    pub fn address(&self) -> Address {
        self.liquidity_token.address()
    }

    pub fn liquidity_token(&self) -> &Token {
        &self.liquidity_token
    }

    /// Swap fee in basis points applied by quotes
    pub fn fee_bps(&self) -> u32 {
        self.fee_bps
    }

    pub fn involves_token(&self, token: &Token) -> bool {
        token == self.token0() || token == self.token1()
    }

    /// 0 for token0, 1 for token1
    fn index_of(&self, token: &Token) -> Result<usize> {
        if token == self.token0() {
            Ok(0)
        } else if token == self.token1() {
            Ok(1)
        } else {
            Err(PairError::DifferentToken)
        }
    }

    /// Price of token0 in token1: `reserve1 / reserve0`
    ///
    /// # Panics
    /// If `reserve0` is zero.
    pub fn token0_price(&self) -> Price {
        Price::new(
            self.token0().clone(),
            self.token1().clone(),
            self.reserve0().raw().clone(),
            self.reserve1().raw().clone(),
        )
    }

    /// Price of token1 in token0: `reserve0 / reserve1`
    ///
    /// # Panics
    /// If `reserve1` is zero.
    pub fn token1_price(&self) -> Price {
        Price::new(
            self.token1().clone(),
            self.token0().clone(),
            self.reserve1().raw().clone(),
            self.reserve0().raw().clone(),
        )
    }

    /// Price of `token` expressed in the pair's other token
    pub fn price_of(&self, token: &Token) -> Result<Price> {
        match self.index_of(token)? {
            0 => Ok(self.token0_price()),
            _ => Ok(self.token1_price()),
        }
    }

    pub fn reserve_of(&self, token: &Token) -> Result<&TokenAmount> {
        Ok(&self.token_amounts[self.index_of(token)?])
    }

    /// Reserves after `input_index` gains `amount_in` and the other side loses `amount_out`
    fn after_swap(
        &self,
        input_index: usize,
        amount_in: &TokenAmount,
        amount_out: &TokenAmount,
    ) -> Result<Self> {
        let output_index = 1 - input_index;
        let mut reserves = self.token_amounts.clone();
        reserves[input_index] = reserves[input_index].add(amount_in)?;
        reserves[output_index] = reserves[output_index].subtract(amount_out)?;
        let [reserve0, reserve1] = reserves;
        Ok(self.with_reserves(reserve0, reserve1))
    }

    fn check_reserves(&self) -> Result<()> {
        if self.reserve0().is_zero() || self.reserve1().is_zero() {
            return Err(PairError::InsufficientReserves);
        }
        Ok(())
    }

    /// Quote the output of swapping `input` through the pair
    ///
    /// Returns the output amount and the pair as it would look afterwards.
    pub fn get_output_amount(&self, input: &TokenAmount) -> Result<(TokenAmount, Pair)> {
        let input_index = self.index_of(input.token())?;
        self.check_reserves()?;

        let input_reserve = &self.token_amounts[input_index];
        let output_reserve = &self.token_amounts[1 - input_index];
        let output = V2Math::calculate_output_amount(
            input.raw(),
            input_reserve.raw(),
            output_reserve.raw(),
            self.fee_bps,
        )?;
        if output.is_zero() {
            return Err(PairError::InsufficientInputAmount);
        }

        let output_amount = TokenAmount::new(output_reserve.token().clone(), output)?;
        let next = self.after_swap(input_index, input, &output_amount)?;
        Ok((output_amount, next))
    }

    /// Quote the input needed to receive `output` from the pair
    ///
    /// Returns the input amount and the pair as it would look afterwards.
    pub fn get_input_amount(&self, output: &TokenAmount) -> Result<(TokenAmount, Pair)> {
        let output_index = self.index_of(output.token())?;
        let input_index = 1 - output_index;
        self.check_reserves()?;

        let input_reserve = &self.token_amounts[input_index];
        let input = V2Math::calculate_input_amount(
            output.raw(),
            input_reserve.raw(),
            self.token_amounts[output_index].raw(),
            self.fee_bps,
        )?;

        let input_amount = TokenAmount::new(input_reserve.token().clone(), input)?;
        let next = self.after_swap(input_index, &input_amount, output)?;
        Ok((input_amount, next))
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{} / {}]",
            self.address(),
            self.reserve0(),
            self.reserve1()
        )
    }
}
