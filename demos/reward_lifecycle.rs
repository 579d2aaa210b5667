//! Reward streaming walkthrough (Synthetix-style accrual).
//!
//! Demonstrates staking pool shares, streaming a reward budget over a
//! fixed period, rolling unspent budget into a fresh period, and
//! claiming the accrued balance. A [`ManualClock`] drives time so the
//! schedule can be replayed deterministically.
//!
//! # Run
//!
//! ```bash
//! cargo run --example reward_lifecycle
//! ```

use naiad_dex::config::{PoolConfig, RewardConfig};
use naiad_dex::domain::{Address, Amount, AssetPair, Shares, Timestamp};
use naiad_dex::registry::PoolRegistry;
use naiad_dex::rewards::RewardAccrual;
use naiad_dex::traits::ManualClock;

const YEAR: u64 = 31_536_000;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Reward Streaming over Staked Pool Shares ===\n");

    // ── 1. Stand up a pool and provide liquidity ────────────────────────
    let pair = AssetPair::new(
        Address::from_bytes([1u8; 32]),
        Address::from_bytes([2u8; 32]),
    )?;
    let config = PoolConfig::new(pair, "test-coin/ETH", "TST1")?;
    let mut registry = PoolRegistry::new();
    let pool = registry.create_pool(&config)?;

    let provider = Address::from_bytes([0xAA; 32]);
    pool.add_liquidity(
        provider,
        Amount::new(50_000.0),
        Amount::new(50_000.0),
        Amount::new(50_000.0),
        Amount::new(50_000.0),
    )?;
    println!("Provider holds {} pool shares", pool.shares_of(&provider));

    // ── 2. Arm a one-year reward schedule ───────────────────────────────
    let clock = ManualClock::new(Timestamp::new(1_661_006_947));
    let mut rewards = RewardAccrual::with_clock(clock.clone(), &RewardConfig::default())?;
    rewards.add_rewards(Amount::new(1_000_000.0))?;
    println!("\n--- Schedule armed ---");
    println!("  Budget:      1000000 over one year");
    println!("  Rate:        {} per second", rewards.reward_rate());
    println!("  Finishes at: {}", rewards.period_finish());

    // ── 3. Stake the provider's full share balance ──────────────────────
    rewards.stake(&*pool, provider, Shares::new(49_990.0))?;
    println!("\nStaked {} shares", rewards.staked_of(&provider));

    // ── 4. Accrue for half the period ───────────────────────────────────
    clock.advance(YEAR / 2);
    println!("\n--- Half a year later ---");
    println!("  Earned:      {}", rewards.earned(&provider));

    // ── 5. Roll a second budget into the remaining stream ───────────────
    rewards.add_rewards(Amount::new(1_000_000.0))?;
    println!("\n--- Second budget rolled in ---");
    println!("  Rate:        {} per second", rewards.reward_rate());
    println!("  Finishes at: {}", rewards.period_finish());

    // ── 6. Let the fresh period run out ─────────────────────────────────
    clock.advance(YEAR);
    println!("\n--- After the full stream ---");
    println!("  Earned:      {}", rewards.earned(&provider));

    // ── 7. Claim ────────────────────────────────────────────────────────
    let paid = rewards.get_reward(provider);
    println!("\n--- Claim ---");
    println!("  Paid:        {paid}");
    println!("  Earned now:  {}", rewards.earned(&provider));

    println!("\n=== Done ===");
    Ok(())
}
