//! Property-based tests using `proptest` for pool invariant validation.
//!
//! Covers five properties of the zero-fee constant-product pool:
//!
//! 1. **Exact invariant preservation** — swaps whose input is
//!    `(2^j − 1) × reserve_a` move the reserves by pure powers of two,
//!    so `k` survives with strict float equality.
//! 2. **First-mint supply** — the initial share supply equals
//!    `√(Δa × Δb)`, locked shares included.
//! 3. **Share conservation** — provider balances sum exactly to the
//!    outstanding total across add/remove cycles, and ledgers track
//!    reserves.
//! 4. **Output curve shape** — quoted outputs are positive, below the
//!    reserve, and strictly increasing in the input.
//! 5. **Error purity** — a rejected operation leaves the pool bit-for-bit
//!    unchanged.

#![allow(clippy::panic)]

use proptest::prelude::*;

use crate::config::PoolConfig;
use crate::domain::{Address, Amount, AssetPair, Shares};
use crate::pool::Pool;
use crate::traits::FromConfig;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn provider() -> Address {
    Address::from_bytes([0xAA; 32])
}

fn trader() -> Address {
    Address::from_bytes([0xBB; 32])
}

fn make_pool() -> Pool {
    let Ok(pair) = AssetPair::new(
        Address::from_bytes([1u8; 32]),
        Address::from_bytes([2u8; 32]),
    ) else {
        panic!("valid pair");
    };
    let Ok(config) = PoolConfig::new(pair, "test-coin/ETH", "TST1") else {
        panic!("valid config");
    };
    let Ok(pool) = Pool::from_config(&config) else {
        panic!("valid pool");
    };
    pool
}

/// Pool seeded with one whole-valued deposit of `(amount_a, amount_b)`.
fn seeded_pool(amount_a: f64, amount_b: f64) -> Pool {
    let mut pool = make_pool();
    let Ok(_) = pool.add_liquidity(
        provider(),
        Amount::new(amount_a),
        Amount::new(amount_b),
        Amount::new(amount_a),
        Amount::new(amount_b),
    ) else {
        panic!("valid seed deposit");
    };
    pool
}

fn share_sum(pool: &Pool) -> f64 {
    pool.providers().map(|(_, shares)| shares.get()).sum()
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Whole-number reserves in [1_000, 300_000].  Products stay below 2^53,
/// so reserve arithmetic on them is exact in `f64`.
fn reserve_strategy() -> impl Strategy<Value = f64> {
    (1_000u32..=300_000u32).prop_map(f64::from)
}

/// Exponents for the exact swap family `amount_in = (2^j − 1) × reserve`.
fn swap_exponent_strategy() -> impl Strategy<Value = u32> {
    1u32..=6u32
}

/// Whole-number seed deposits divisible by 8, in [1_000, 100_000], so a
/// pool-doubling deposit mints a whole share amount twice over.
fn divisible_seed_strategy() -> impl Strategy<Value = f64> {
    (125u32..=12_500u32).prop_map(|v| f64::from(v) * 8.0)
}

/// Number of pool-doubling deposits to layer on top of the seed.
fn doubling_count_strategy() -> impl Strategy<Value = usize> {
    1usize..=2usize
}

// ---------------------------------------------------------------------------
// Property 1: Exact Invariant Preservation
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_power_of_two_swaps_preserve_k_exactly(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        j in swap_exponent_strategy(),
        k in swap_exponent_strategy(),
    ) {
        let mut pool = seeded_pool(ra, rb);
        let k_before = pool.invariant();

        // amount_in = (2^j − 1) × reserve_a scales the A reserve by 2^j
        // and the B reserve by 2^-j, both exact in f64.
        let amount_in = (f64::from(2u32.pow(j)) - 1.0) * pool.reserve_a().get();
        let Ok(out) = pool.swap_exact_in(Amount::new(amount_in), Amount::ZERO, trader()) else {
            return Err(TestCaseError::fail("first swap rejected"));
        };
        prop_assert!(out.get() > 0.0);
        prop_assert_eq!(pool.invariant(), k_before);
        prop_assert_eq!(pool.ledger_a().total(), pool.reserve_a());
        prop_assert_eq!(pool.ledger_b().total(), pool.reserve_b());

        // A second swap prices against the moved reserves and still
        // preserves k exactly.
        let amount_in = (f64::from(2u32.pow(k)) - 1.0) * pool.reserve_a().get();
        let Ok(_) = pool.swap_exact_in(Amount::new(amount_in), Amount::ZERO, trader()) else {
            return Err(TestCaseError::fail("second swap rejected"));
        };
        prop_assert_eq!(pool.invariant(), k_before);
        prop_assert_eq!(pool.ledger_a().total(), pool.reserve_a());
        prop_assert_eq!(pool.ledger_b().total(), pool.reserve_b());
    }
}

// ---------------------------------------------------------------------------
// Property 2: First-Mint Supply
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_first_mint_supply_is_sqrt_of_deposit(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
    ) {
        let pool = seeded_pool(ra, rb);

        // Locked shares plus the provider's mint reconstitute √(Δa × Δb)
        // exactly: the ±10 round-trips without rounding at this scale.
        prop_assert_eq!(pool.total_shares().get(), (ra * rb).sqrt());
        prop_assert_eq!(pool.shares_of(&Pool::LIQUIDITY_LOCK), Pool::MINIMUM_LIQUIDITY);
        prop_assert_eq!(
            pool.shares_of(&provider()).get(),
            (ra * rb).sqrt() - Pool::MINIMUM_LIQUIDITY.get()
        );
    }

    #[test]
    fn prop_balanced_first_mint_supply_is_whole(seed in divisible_seed_strategy()) {
        let pool = seeded_pool(seed, seed);

        // √(a × a) = a exactly for whole a; no rounding anywhere.
        prop_assert_eq!(pool.total_shares().get(), seed);
        prop_assert_eq!(pool.shares_of(&provider()).get(), seed - 10.0);
    }
}

// ---------------------------------------------------------------------------
// Property 3: Share Conservation
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_liquidity_cycles_conserve_shares(
        seed in divisible_seed_strategy(),
        doublings in doubling_count_strategy(),
    ) {
        let second = Address::from_bytes([0xCC; 32]);
        let mut pool = seeded_pool(seed, seed);
        prop_assert_eq!(share_sum(&pool), pool.total_shares().get());

        // Each deposit doubles the reserves; the whole-valued seed keeps
        // every minted amount whole, so all share arithmetic is exact.
        for _ in 0..doublings {
            let amount = pool.reserve_a().get();
            let Ok(_) = pool.add_liquidity(
                second,
                Amount::new(amount),
                Amount::new(amount),
                Amount::new(amount),
                Amount::new(amount),
            ) else {
                return Err(TestCaseError::fail("doubling deposit rejected"));
            };
            prop_assert_eq!(share_sum(&pool), pool.total_shares().get());
            prop_assert_eq!(pool.ledger_a().total(), pool.reserve_a());
            prop_assert_eq!(pool.ledger_b().total(), pool.reserve_b());
        }

        // Redeem a whole slice of the second provider's position.
        let redeem = (pool.shares_of(&second).get() / 2.0).floor();
        if redeem > 0.0 {
            let Ok(_) = pool.remove_liquidity(
                second,
                Shares::new(redeem),
                Amount::ZERO,
                Amount::ZERO,
            ) else {
                return Err(TestCaseError::fail("redemption rejected"));
            };
        }
        prop_assert_eq!(share_sum(&pool), pool.total_shares().get());
        prop_assert_eq!(pool.ledger_a().total(), pool.reserve_a());
        prop_assert_eq!(pool.ledger_b().total(), pool.reserve_b());
    }
}

// ---------------------------------------------------------------------------
// Property 4: Output Curve Shape
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_output_is_positive_and_bounded(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        raw_in in 1u32..=300_000u32,
    ) {
        let pool = seeded_pool(ra, rb);
        let amount_in = f64::from(raw_in).min(ra);

        let Ok(out) = pool.get_amount_out(Amount::new(amount_in)) else {
            return Err(TestCaseError::fail("quote rejected"));
        };
        prop_assert!(out.get() > 0.0, "output must be positive, got {}", out.get());
        prop_assert!(out.get() < rb, "output {} exceeds the B reserve {}", out.get(), rb);
    }

    #[test]
    fn prop_output_increases_with_input(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        raw_in in 1u32..=150_000u32,
    ) {
        let pool = seeded_pool(ra, rb);
        let small = f64::from(raw_in).min(ra / 2.0);
        let large = small * 2.0;

        let Ok(out_small) = pool.get_amount_out(Amount::new(small)) else {
            return Err(TestCaseError::fail("small quote rejected"));
        };
        let Ok(out_large) = pool.get_amount_out(Amount::new(large)) else {
            return Err(TestCaseError::fail("large quote rejected"));
        };
        prop_assert!(
            out_large.get() > out_small.get(),
            "doubling the input must grow the output: {} vs {}",
            out_small.get(),
            out_large.get()
        );
    }
}

// ---------------------------------------------------------------------------
// Property 5: Error Purity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_rejected_operations_leave_the_pool_unchanged(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
    ) {
        let mut pool = seeded_pool(ra, rb);
        let snapshot = pool.clone();

        // Minimum-output bound set above the whole B reserve.
        prop_assert!(pool
            .swap_exact_in(Amount::new(ra / 2.0), Amount::new(rb), trader())
            .is_err());
        prop_assert_eq!(&pool, &snapshot);

        // Unknown provider redeeming.
        prop_assert!(pool
            .remove_liquidity(trader(), Shares::new(10.0), Amount::ZERO, Amount::ZERO)
            .is_err());
        prop_assert_eq!(&pool, &snapshot);

        // Negative desired deposit.
        prop_assert!(pool
            .add_liquidity(
                provider(),
                Amount::new(-1.0),
                Amount::new(1.0),
                Amount::ZERO,
                Amount::ZERO,
            )
            .is_err());
        prop_assert_eq!(&pool, &snapshot);

        // Output draining the full A reserve.
        prop_assert!(pool.swap(Amount::new(ra), Amount::ZERO, trader()).is_err());
        prop_assert_eq!(&pool, &snapshot);
    }
}
