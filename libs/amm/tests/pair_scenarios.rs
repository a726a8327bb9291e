//! Pair behaviour against the published PancakeSwap SDK scenarios

use num_bigint::BigInt;
use pair_amm::{Pair, PairAddressCache, PairError, Price};
use pair_config::networks;
use pair_types::{Address, ChainId, Fraction, Token, TokenAmount};

fn mainnet_token(address: &str, symbol: &str, name: &str) -> Token {
    Token::new(
        ChainId::BSC_MAINNET,
        address.parse::<Address>().unwrap(),
        18,
        symbol,
        name,
    )
}

fn usdc() -> Token {
    mainnet_token("0x8AC76a51cc950d9822D68b83fE1Ad97B32Cd580d", "USDC", "USD Coin")
}

fn dai() -> Token {
    mainnet_token("0x1af3f329e8be154074d8769d1ffa4ee058b1dbc3", "DAI", "DAI Stablecoin")
}

fn wbnb() -> Token {
    mainnet_token("0xbb4CdB9CBd36B01bD1cBaEBF2De08d9173bc095c", "WBNB", "Wrapped BNB")
}

fn testnet_wbnb() -> Token {
    Token::new(
        ChainId::BSC_TESTNET,
        "0xae13d989daC2f0dEbFf460aC112a837C89BAa7cd"
            .parse::<Address>()
            .unwrap(),
        18,
        "WBNB",
        "Wrapped BNB",
    )
}

fn amount(token: &Token, raw: u64) -> TokenAmount {
    TokenAmount::new(token.clone(), raw).unwrap()
}

fn mainnet_pair(a: TokenAmount, b: TokenAmount) -> Pair {
    let cache = PairAddressCache::new(networks::BSC_MAINNET);
    Pair::new(a, b, &cache).unwrap()
}

#[test]
fn test_rejects_tokens_on_different_chains() {
    let cache = PairAddressCache::new(networks::BSC_MAINNET);
    let result = Pair::new(amount(&usdc(), 100), amount(&testnet_wbnb(), 100), &cache);
    assert_eq!(result, Err(PairError::DifferentChain));
}

#[test]
fn test_returns_the_correct_address() {
    let cache = PairAddressCache::new(networks::BSC_MAINNET);
    assert_eq!(
        cache.get_address(dai().address(), usdc().address()),
        "0xadBba1EF326A33FDB754f14e62A96D5278b942Bd"
            .parse::<Address>()
            .unwrap()
    );

    let pair = mainnet_pair(amount(&usdc(), 100), amount(&dai(), 100));
    assert_eq!(pair.address(), cache.get_address(usdc().address(), dai().address()));
    assert_eq!(pair.liquidity_token().address(), pair.address());
}

#[test]
fn test_token0_is_the_token_that_sorts_before() {
    let pair_a = mainnet_pair(amount(&usdc(), 100), amount(&dai(), 100));
    let pair_b = mainnet_pair(amount(&dai(), 100), amount(&usdc(), 100));

    assert_eq!(pair_a.token0(), &dai());
    assert_eq!(pair_b.token0(), &dai());
    assert_eq!(pair_a.token1(), &usdc());
    assert_eq!(pair_b.token1(), &usdc());
}

#[test]
fn test_reserves_follow_token_order() {
    let pair_a = mainnet_pair(amount(&usdc(), 100), amount(&dai(), 101));
    let pair_b = mainnet_pair(amount(&dai(), 101), amount(&usdc(), 100));

    for pair in [&pair_a, &pair_b] {
        assert_eq!(pair.reserve0(), &amount(&dai(), 101));
        assert_eq!(pair.reserve1(), &amount(&usdc(), 100));
    }
}

#[test]
fn test_token_prices() {
    let pair_a = mainnet_pair(amount(&usdc(), 101), amount(&dai(), 100));
    let pair_b = mainnet_pair(amount(&dai(), 100), amount(&usdc(), 101));

    let dai_in_usdc = Price::new(dai(), usdc(), 100, 101);
    let usdc_in_dai = Price::new(usdc(), dai(), 101, 100);

    for pair in [&pair_a, &pair_b] {
        assert_eq!(pair.token0_price(), dai_in_usdc);
        assert_eq!(pair.token1_price(), usdc_in_dai);
        assert_eq!(pair.token0_price().raw(), &Fraction::new(101, 100));
        assert_eq!(pair.token1_price().raw(), &Fraction::new(100, 101));
    }
}

#[test]
fn test_prices_are_reciprocal() {
    let pair = mainnet_pair(amount(&usdc(), 12_345), amount(&dai(), 678));
    let product = pair.token0_price().raw() * pair.token1_price().raw();
    assert_eq!(product, Fraction::from_integer(1));
    assert_eq!(pair.token0_price().invert(), pair.token1_price());
}

#[test]
fn test_price_of() {
    let pair = mainnet_pair(amount(&usdc(), 101), amount(&dai(), 100));

    assert_eq!(pair.price_of(&dai()).unwrap(), pair.token0_price());
    assert_eq!(pair.price_of(&usdc()).unwrap(), pair.token1_price());
    assert_eq!(pair.price_of(&wbnb()), Err(PairError::DifferentToken));
}

#[test]
fn test_reserve_of() {
    let pair_a = mainnet_pair(amount(&usdc(), 100), amount(&dai(), 101));
    let pair_b = mainnet_pair(amount(&dai(), 101), amount(&usdc(), 100));

    assert_eq!(pair_a.reserve_of(&usdc()).unwrap(), &amount(&usdc(), 100));
    assert_eq!(pair_b.reserve_of(&usdc()).unwrap(), &amount(&usdc(), 100));
    assert_eq!(pair_b.reserve_of(&dai()).unwrap(), &amount(&dai(), 101));
    assert_eq!(pair_b.reserve_of(&wbnb()), Err(PairError::DifferentToken));
}

#[test]
fn test_chain_id_and_involves_token() {
    let pair_a = mainnet_pair(amount(&usdc(), 100), amount(&dai(), 100));
    let pair_b = mainnet_pair(amount(&dai(), 100), amount(&usdc(), 100));

    assert_eq!(pair_a.chain_id(), ChainId::BSC_MAINNET);
    assert_eq!(pair_b.chain_id(), ChainId::BSC_MAINNET);

    assert!(pair_a.involves_token(&usdc()));
    assert!(pair_a.involves_token(&dai()));
    assert!(!pair_a.involves_token(&wbnb()));
}

mod liquidity {
    use super::*;

    fn token_a() -> Token {
        Token::new(
            ChainId::BSC_TESTNET,
            "0x0000000000000000000000000000000000000001"
                .parse::<Address>()
                .unwrap(),
            18,
            "",
            "",
        )
    }

    fn token_b() -> Token {
        Token::new(
            ChainId::BSC_TESTNET,
            "0x0000000000000000000000000000000000000002"
                .parse::<Address>()
                .unwrap(),
            18,
            "",
            "",
        )
    }

    fn testnet_pair(reserve_a: u64, reserve_b: u64) -> Pair {
        let cache = PairAddressCache::new(networks::BSC_TESTNET);
        Pair::new(amount(&token_a(), reserve_a), amount(&token_b(), reserve_b), &cache).unwrap()
    }

    #[test]
    fn test_liquidity_minted_from_zero_supply() {
        let pair = testnet_pair(0, 0);
        let supply = amount(pair.liquidity_token(), 0);

        assert_eq!(
            pair.get_liquidity_minted(&supply, &amount(&token_a(), 1000), &amount(&token_b(), 1000)),
            Err(PairError::InsufficientInputAmount)
        );
        assert_eq!(
            pair.get_liquidity_minted(
                &supply,
                &amount(&token_a(), 1_000_000),
                &amount(&token_b(), 1)
            ),
            Err(PairError::InsufficientInputAmount)
        );

        let minted = pair
            .get_liquidity_minted(&supply, &amount(&token_a(), 1001), &amount(&token_b(), 1001))
            .unwrap();
        assert_eq!(minted.raw(), &BigInt::from(1));
        assert_eq!(minted.token(), pair.liquidity_token());
    }

    #[test]
    fn test_liquidity_minted_with_existing_supply() {
        let pair = testnet_pair(10_000, 10_000);
        let supply = amount(pair.liquidity_token(), 10_000);

        let minted = pair
            .get_liquidity_minted(&supply, &amount(&token_a(), 2000), &amount(&token_b(), 2000))
            .unwrap();
        assert_eq!(minted.raw(), &BigInt::from(2000));
    }

    #[test]
    fn test_liquidity_value_fee_off() {
        let pair = testnet_pair(1000, 1000);
        let supply = amount(pair.liquidity_token(), 1000);
        let half = amount(pair.liquidity_token(), 500);

        let value = pair
            .get_liquidity_value(&token_a(), &supply, &supply, false, None)
            .unwrap();
        assert_eq!(value.token(), &token_a());
        assert_eq!(value.raw(), &BigInt::from(1000));

        let value = pair
            .get_liquidity_value(&token_a(), &supply, &half, false, None)
            .unwrap();
        assert_eq!(value.token(), &token_a());
        assert_eq!(value.raw(), &BigInt::from(500));

        let value = pair
            .get_liquidity_value(&token_b(), &supply, &supply, false, None)
            .unwrap();
        assert_eq!(value.token(), &token_b());
        assert_eq!(value.raw(), &BigInt::from(1000));
    }

    #[test]
    fn test_liquidity_value_fee_on() {
        let pair = testnet_pair(1000, 1000);
        let half = amount(pair.liquidity_token(), 500);
        let k_last = BigInt::from(500 * 500);

        // supply 500 grows to 545 after the protocol fee; 1000 * 500 / 545
        let value = pair
            .get_liquidity_value(&token_a(), &half, &half, true, Some(&k_last))
            .unwrap();
        assert_eq!(value.token(), &token_a());
        assert_eq!(value.raw(), &BigInt::from(917));
    }
}
