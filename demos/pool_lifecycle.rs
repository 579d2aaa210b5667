//! Constant product pool walkthrough (`x · y = k`, zero fee).
//!
//! Demonstrates creating a pool through the registry, providing
//! liquidity, swapping against the curve, and redeeming shares.
//!
//! # Run
//!
//! ```bash
//! cargo run --example pool_lifecycle
//! ```

use naiad_dex::config::PoolConfig;
use naiad_dex::domain::{Address, Amount, AssetPair, Shares};
use naiad_dex::pool::Pool;
use naiad_dex::registry::PoolRegistry;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Constant Product Pool (x · y = k, zero fee) ===\n");

    // ── 1. Define the market ────────────────────────────────────────────
    let coin = Address::from_bytes([1u8; 32]);
    let eth = Address::from_bytes([2u8; 32]);
    let pair = AssetPair::new(coin, eth)?;
    let config = PoolConfig::new(pair, "test-coin/ETH", "TST1")?;

    println!("Asset A: {coin}");
    println!("Asset B: {eth}");

    // ── 2. Create the pool through the registry ─────────────────────────
    let mut registry = PoolRegistry::new();
    let pool = registry.create_pool(&config)?;
    println!("\nPool registered: {} ({})", pool.name(), pool.symbol());

    // ── 3. Seed liquidity ───────────────────────────────────────────────
    let provider = Address::from_bytes([0xAA; 32]);
    let (in_a, in_b) = pool.add_liquidity(
        provider,
        Amount::new(1_000.0),
        Amount::new(1_000.0),
        Amount::new(1_000.0),
        Amount::new(1_000.0),
    )?;
    println!("\n--- Seed deposit ---");
    println!("  Accepted:    {in_a} A + {in_b} B");
    println!("  Provider:    {} shares", pool.shares_of(&provider));
    println!(
        "  Locked:      {} shares at {}",
        pool.shares_of(&Pool::LIQUIDITY_LOCK),
        Pool::LIQUIDITY_LOCK,
    );
    println!("  Total:       {} shares", pool.total_shares());

    // ── 4. Quote and execute a swap ─────────────────────────────────────
    let amount_in = Amount::new(600.0);
    let quoted = pool.get_amount_out(amount_in)?;
    println!("\n--- Swap: {amount_in} A in ---");
    println!("  Quoted out:  {quoted} B");

    let out = pool.swap_exact_in(amount_in, quoted, Address::from_bytes([0xBB; 32]))?;
    println!("  Settled out: {out} B");
    println!(
        "  Reserves:    ({}, {})",
        pool.reserve_a(),
        pool.reserve_b()
    );
    println!("  Invariant:   {}", pool.invariant());

    // ── 5. Add liquidity at the moved price ─────────────────────────────
    let (in_a, in_b) = pool.add_liquidity(
        provider,
        Amount::new(1_600.0),
        Amount::new(625.0),
        Amount::new(1_600.0),
        Amount::new(625.0),
    )?;
    println!("\n--- Follow-up deposit at the 1600 : 625 ratio ---");
    println!("  Accepted:    {in_a} A + {in_b} B");
    println!("  Provider:    {} shares", pool.shares_of(&provider));
    println!("  Total:       {} shares", pool.total_shares());

    // ── 6. Redeem part of the position ──────────────────────────────────
    let (out_a, out_b) =
        pool.remove_liquidity(provider, Shares::new(300.0), Amount::ZERO, Amount::ZERO)?;
    println!("\n--- Redeem 300 shares ---");
    println!("  Paid out:    {out_a} A + {out_b} B");
    println!("  Provider:    {} shares", pool.shares_of(&provider));
    println!(
        "  Reserves:    ({}, {})",
        pool.reserve_a(),
        pool.reserve_b()
    );

    println!("\n=== Done ===");
    Ok(())
}
