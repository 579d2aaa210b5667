//! Constant-product pool implementation (Uniswap V2 style, zero fee).
//!
//! The swap invariant is `x × y = k` where `x` and `y` are the reserves
//! of the two custodied assets.  The pool runs with the trading fee
//! disabled: inputs are scaled by the full fee denominator (1000) instead
//! of the fee-discounted 997, so the constant product is preserved
//! *exactly* across every swap and the invariant check compares `k` with
//! strict float equality.
//!
//! # Swap Algorithm (asset A → asset B)
//!
//! 1. `scaled_in = amount_in × 1000`
//! 2. `amount_out = scaled_in × reserve_b / (reserve_a × 1000 + scaled_in)`
//! 3. input is deposited into the A-side ledger
//! 4. the low-level swap pays out, verifies `k`, and checkpoints reserves
//!
//! # Share Minting
//!
//! The first deposit mints `√(Δa × Δb)` shares, of which
//! [`Pool::MINIMUM_LIQUIDITY`] are locked forever under
//! [`Pool::LIQUIDITY_LOCK`] so the pool can never be fully drained.
//! Later deposits mint `min(Δa × L / Ra, Δb × L / Rb)` where the reserves
//! are the freshly checkpointed post-deposit totals.
//!
//! # Custody Model
//!
//! The pool owns one [`BalanceLedger`] per asset and treats the ledgers,
//! not its reserve checkpoint, as the source of truth: swap inputs are
//! *inferred* from the gap between ledger totals and reserves, and
//! removals pay out pro rata against live ledger totals.

use std::collections::BTreeMap;

use crate::config::PoolConfig;
use crate::domain::{Address, Amount, AssetPair, Shares};
use crate::error::{DexError, Result};
use crate::ledger::BalanceLedger;
use crate::traits::{FromConfig, LiquiditySource};

/// Fee-scale denominator from the constant-product swap formula.  A 0.3%
/// trading fee would scale inputs by 997 instead; this pool runs with the
/// fee disabled, so inputs scale by the full 1000.
const FEE_SCALE: f64 = 1000.0;

/// A constant-product pool (`x · y = k`) with zero trading fee.
///
/// Created from a [`PoolConfig`] via [`FromConfig`].  Pools start empty;
/// reserves and shares exist only once liquidity is deposited.
///
/// # State
///
/// - `reserve_a` / `reserve_b` — last checkpointed custody totals
/// - `ledger_a` / `ledger_b` — live custody ledgers, one per asset
/// - `providers` / `total_shares` — the liquidity share register
///
/// Every mutating operation validates its inputs in full before touching
/// any state, so a returned error means the pool is unchanged.
///
/// # Example
///
/// ```rust
/// use naiad_dex::config::PoolConfig;
/// use naiad_dex::domain::{Address, Amount, AssetPair, Shares};
/// use naiad_dex::pool::Pool;
/// use naiad_dex::traits::FromConfig;
///
/// let pair = AssetPair::new(
///     Address::from_bytes([1u8; 32]),
///     Address::from_bytes([2u8; 32]),
/// )?;
/// let config = PoolConfig::new(pair, "test-coin/ETH", "TST1")?;
/// let mut pool = Pool::from_config(&config)?;
///
/// let provider = Address::from_bytes([0xAA; 32]);
/// pool.add_liquidity(
///     provider,
///     Amount::new(1_000.0),
///     Amount::new(1_000.0),
///     Amount::new(1_000.0),
///     Amount::new(1_000.0),
/// )?;
/// assert_eq!(pool.shares_of(&provider), Shares::new(990.0));
///
/// let trader = Address::from_bytes([0xBB; 32]);
/// let out = pool.swap_exact_in(Amount::new(600.0), Amount::new(375.0), trader)?;
/// assert_eq!(out, Amount::new(375.0));
/// assert_eq!(pool.reserve_a(), Amount::new(1_600.0));
/// assert_eq!(pool.reserve_b(), Amount::new(625.0));
/// # Ok::<(), naiad_dex::DexError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Pool {
    assets: AssetPair,
    name: String,
    symbol: String,
    reserve_a: Amount,
    reserve_b: Amount,
    ledger_a: BalanceLedger,
    ledger_b: BalanceLedger,
    providers: BTreeMap<Address, Shares>,
    total_shares: Shares,
}

impl Pool {
    /// Shares permanently locked on the first deposit.
    pub const MINIMUM_LIQUIDITY: Shares = Shares::new(10.0);

    /// Identity that holds the permanently locked shares.
    pub const LIQUIDITY_LOCK: Address = Address::ZERO;

    // -- accessors ------------------------------------------------------------

    /// Returns the custodied asset pair.
    #[must_use]
    pub const fn assets(&self) -> &AssetPair {
        &self.assets
    }

    /// Returns the human-readable pair name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the share-token symbol.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Returns the last checkpointed A-side reserve.
    #[must_use]
    pub const fn reserve_a(&self) -> Amount {
        self.reserve_a
    }

    /// Returns the last checkpointed B-side reserve.
    #[must_use]
    pub const fn reserve_b(&self) -> Amount {
        self.reserve_b
    }

    /// Returns the A-side custody ledger.
    #[must_use]
    pub const fn ledger_a(&self) -> &BalanceLedger {
        &self.ledger_a
    }

    /// Returns the B-side custody ledger.
    #[must_use]
    pub const fn ledger_b(&self) -> &BalanceLedger {
        &self.ledger_b
    }

    /// Returns the A-side custody ledger for direct deposits.
    ///
    /// The low-level [`Pool::swap`] infers its input from the gap between
    /// this ledger's total and the reserve checkpoint, so callers taking
    /// the manual route deposit here first and then swap.
    pub fn ledger_a_mut(&mut self) -> &mut BalanceLedger {
        &mut self.ledger_a
    }

    /// Returns the B-side custody ledger for direct deposits.
    pub fn ledger_b_mut(&mut self) -> &mut BalanceLedger {
        &mut self.ledger_b
    }

    /// Returns the outstanding liquidity shares, locked shares included.
    #[must_use]
    pub const fn total_shares(&self) -> Shares {
        self.total_shares
    }

    /// Returns the shares held by `provider`, zero if unknown.
    #[must_use]
    pub fn shares_of(&self, provider: &Address) -> Shares {
        self.providers.get(provider).copied().unwrap_or(Shares::ZERO)
    }

    /// Returns the number of share-holding identities on record.
    ///
    /// The [`Pool::LIQUIDITY_LOCK`] identity counts once the first
    /// deposit has landed.
    #[must_use]
    pub fn provider_count(&self) -> usize {
        self.providers.len()
    }

    /// Iterates over all recorded providers and their share balances.
    pub fn providers(&self) -> impl Iterator<Item = (&Address, Shares)> {
        self.providers.iter().map(|(provider, shares)| (provider, *shares))
    }

    /// Returns the current constant product `k = reserve_a × reserve_b`.
    #[must_use]
    pub fn invariant(&self) -> f64 {
        self.reserve_a.get() * self.reserve_b.get()
    }

    /// Returns `true` if no shares have been minted yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total_shares.is_zero()
    }

    // -- pricing --------------------------------------------------------------

    /// Quotes the B-side amount that keeps a deposit proportional:
    /// `amount_b = amount_a × reserve_b / reserve_a`.
    ///
    /// # Errors
    ///
    /// - [`DexError::NonFinite`] if any argument is NaN or infinite.
    /// - [`DexError::InsufficientAmount`] if `amount_a` is not positive.
    /// - [`DexError::InsufficientLiquidity`] if either reserve is not
    ///   positive.
    pub fn quote(amount_a: Amount, reserve_a: Amount, reserve_b: Amount) -> Result<Amount> {
        amount_a.ensure_finite("quote amount")?;
        reserve_a.ensure_finite("quote reserve")?;
        reserve_b.ensure_finite("quote reserve")?;
        if amount_a.get() <= 0.0 {
            return Err(DexError::InsufficientAmount);
        }
        if reserve_a.get() <= 0.0 || reserve_b.get() <= 0.0 {
            return Err(DexError::InsufficientLiquidity);
        }
        Ok(Amount::new(amount_a.get() * reserve_b.get() / reserve_a.get()))
    }

    /// Computes the output of an exact-in swap of asset A for asset B
    /// against the current reserves:
    ///
    /// `out = (in × 1000) × reserve_b / (reserve_a × 1000 + in × 1000)`
    ///
    /// # Errors
    ///
    /// - [`DexError::NonFinite`] if `amount_in` is NaN or infinite.
    /// - [`DexError::InsufficientInputAmount`] if `amount_in` is not
    ///   positive.
    /// - [`DexError::InsufficientLiquidity`] if either reserve is not
    ///   positive.
    pub fn get_amount_out(&self, amount_in: Amount) -> Result<Amount> {
        amount_in.ensure_finite("swap input amount")?;
        if amount_in.get() <= 0.0 {
            return Err(DexError::InsufficientInputAmount);
        }
        if self.reserve_a.get() <= 0.0 || self.reserve_b.get() <= 0.0 {
            return Err(DexError::InsufficientLiquidity);
        }
        let scaled_in = amount_in.get() * FEE_SCALE;
        let numerator = scaled_in * self.reserve_b.get();
        let denominator = self.reserve_a.get() * FEE_SCALE + scaled_in;
        Ok(Amount::new(numerator / denominator))
    }

    // -- liquidity ------------------------------------------------------------

    /// Deposits liquidity and mints shares to `provider`.
    ///
    /// On the first deposit both desired amounts are taken as-is.  On
    /// later deposits the B side is quoted from the A side (or vice
    /// versa, whichever fits under the desired amounts) so the deposit
    /// matches the current reserve ratio; `amount_a_min` /
    /// `amount_b_min` bound how far below the desired amounts the
    /// accepted deposit may land.
    ///
    /// Returns the `(amount_a, amount_b)` actually deposited.
    ///
    /// # Errors
    ///
    /// - [`DexError::NonFinite`] if any argument is NaN or infinite.
    /// - [`DexError::InsufficientAmount`] if a seeding deposit's desired
    ///   amounts are not both positive, or a later deposit's quoted side
    ///   is not positive.
    /// - [`DexError::InsufficientAAmount`] /
    ///   [`DexError::InsufficientBAmount`] if the accepted deposit falls
    ///   below the caller's bound.
    /// - [`DexError::InsufficientLiquidityMinted`] if the deposit is too
    ///   small to mint a positive share amount.
    /// - [`DexError::InvariantViolated`] if the quoted deposit
    ///   contradicts the desired amounts or the ledger deltas diverge
    ///   from the accepted deposit.
    ///
    /// All validation happens before the ledgers are touched; a failed
    /// deposit mutates nothing.
    pub fn add_liquidity(
        &mut self,
        provider: Address,
        amount_a_desired: Amount,
        amount_b_desired: Amount,
        amount_a_min: Amount,
        amount_b_min: Amount,
    ) -> Result<(Amount, Amount)> {
        amount_a_desired.ensure_finite("desired A-side deposit")?;
        amount_b_desired.ensure_finite("desired B-side deposit")?;
        amount_a_min.ensure_finite("minimum A-side deposit")?;
        amount_b_min.ensure_finite("minimum B-side deposit")?;

        let (amount_a, amount_b) = self.accepted_amounts(
            amount_a_desired,
            amount_b_desired,
            amount_a_min,
            amount_b_min,
        )?;
        // Prove the mint cannot fail before the ledgers are touched.
        self.minted_shares(
            amount_a,
            amount_b,
            self.reserve_a.get() + amount_a,
            self.reserve_b.get() + amount_b,
        )?;

        self.ledger_a.deposit(Amount::new(amount_a));
        self.ledger_b.deposit(Amount::new(amount_b));
        self.mint(provider, amount_a, amount_b)?;
        Ok((Amount::new(amount_a), Amount::new(amount_b)))
    }

    /// Burns up to `share_amount` of `provider`'s shares and pays out
    /// both assets pro rata against the live ledger totals.
    ///
    /// The burned amount is clamped to the provider's balance, so passing
    /// an oversized `share_amount` redeems the full position.  Returns
    /// the `(amount_a, amount_b)` paid out.
    ///
    /// # Errors
    ///
    /// - [`DexError::NonFinite`] if any argument is NaN or infinite.
    /// - [`DexError::InsufficientLiquidityBurned`] if the provider holds
    ///   no shares, `share_amount` is not positive, or a payout rounds
    ///   to zero.
    /// - [`DexError::InsufficientAAmount`] /
    ///   [`DexError::InsufficientBAmount`] if a payout falls below the
    ///   caller's bound.
    pub fn remove_liquidity(
        &mut self,
        provider: Address,
        share_amount: Shares,
        amount_a_min: Amount,
        amount_b_min: Amount,
    ) -> Result<(Amount, Amount)> {
        share_amount.ensure_finite("redeemed share amount")?;
        amount_a_min.ensure_finite("minimum A-side payout")?;
        amount_b_min.ensure_finite("minimum B-side payout")?;

        let burned = share_amount.get().min(self.shares_of(&provider).get());
        if burned <= 0.0 {
            return Err(DexError::InsufficientLiquidityBurned);
        }
        let balance_a = self.ledger_a.total().get();
        let balance_b = self.ledger_b.total().get();
        let total = self.total_shares.get();
        let amount_a = burned * balance_a / total;
        let amount_b = burned * balance_b / total;
        if amount_a <= 0.0 || amount_b <= 0.0 {
            return Err(DexError::InsufficientLiquidityBurned);
        }
        if amount_a < amount_a_min.get() {
            return Err(DexError::InsufficientAAmount);
        }
        if amount_b < amount_b_min.get() {
            return Err(DexError::InsufficientBAmount);
        }

        self.burn(provider, burned);
        self.ledger_a.transfer(Amount::new(amount_a));
        self.ledger_b.transfer(Amount::new(amount_b));
        self.checkpoint(self.ledger_a.total().get(), self.ledger_b.total().get());
        Ok((Amount::new(amount_a), Amount::new(amount_b)))
    }

    // -- swapping -------------------------------------------------------------

    /// Low-level swap: pays `amount_a_out` / `amount_b_out` to `to`,
    /// inferring the input from the gap between ledger totals and the
    /// reserve checkpoint.
    ///
    /// Callers taking this route deposit their input through
    /// [`Pool::ledger_a_mut`] / [`Pool::ledger_b_mut`] first.  The swap
    /// verifies that the fee-scaled constant product is *exactly*
    /// preserved before paying out and checkpointing.
    ///
    /// # Errors
    ///
    /// - [`DexError::NonFinite`] if an output amount is NaN or infinite.
    /// - [`DexError::InsufficientOutputAmount`] if neither output is
    ///   positive.
    /// - [`DexError::InsufficientLiquidity`] if an output meets or
    ///   exceeds its reserve.
    /// - [`DexError::InvalidRecipient`] if `to` is one of the custodied
    ///   asset addresses.
    /// - [`DexError::InsufficientInputAmount`] if no input can be
    ///   inferred.
    /// - [`DexError::InvariantViolated`] if the constant product would
    ///   change.
    ///
    /// A failed swap leaves reserves, shares, and payouts untouched;
    /// any input the caller already deposited stays in the ledger.
    pub fn swap(&mut self, amount_a_out: Amount, amount_b_out: Amount, to: Address) -> Result<()> {
        amount_a_out.ensure_finite("A-side output amount")?;
        amount_b_out.ensure_finite("B-side output amount")?;

        let (balance_a, balance_b) =
            self.validate_swap(amount_a_out.get(), amount_b_out.get(), &to, 0.0)?;
        if amount_a_out.is_positive() {
            self.ledger_a.transfer(amount_a_out);
        }
        if amount_b_out.is_positive() {
            self.ledger_b.transfer(amount_b_out);
        }
        self.checkpoint(balance_a, balance_b);
        Ok(())
    }

    /// Swaps an exact amount of asset A for asset B.
    ///
    /// Computes the output via [`Pool::get_amount_out`], rejects it if it
    /// falls below `min_amount_out`, deposits the input, and settles
    /// through the low-level [`Pool::swap`].  Returns the output amount
    /// paid to `to`.
    ///
    /// # Errors
    ///
    /// - [`DexError::NonFinite`] if any argument is NaN or infinite.
    /// - [`DexError::InsufficientInputAmount`] if `amount_in` is not
    ///   positive.
    /// - [`DexError::InsufficientLiquidity`] if the pool is empty.
    /// - [`DexError::InsufficientOutputAmount`] if the computed output
    ///   falls below `min_amount_out`.
    /// - [`DexError::InvalidRecipient`] if `to` is one of the custodied
    ///   asset addresses.
    ///
    /// The swap is validated in full against the hypothetical
    /// post-deposit balances before anything moves, so a rejected swap
    /// leaves the ledgers untouched.
    pub fn swap_exact_in(
        &mut self,
        amount_in: Amount,
        min_amount_out: Amount,
        to: Address,
    ) -> Result<Amount> {
        amount_in.ensure_finite("swap input amount")?;
        min_amount_out.ensure_finite("minimum output amount")?;

        let amount_out = self.get_amount_out(amount_in)?;
        if amount_out.get() < min_amount_out.get() {
            return Err(DexError::InsufficientOutputAmount);
        }
        self.validate_swap(0.0, amount_out.get(), &to, amount_in.get())?;

        self.ledger_a.deposit(amount_in);
        self.swap(Amount::ZERO, amount_out, to)?;
        Ok(amount_out)
    }

    // -- internals ------------------------------------------------------------

    /// Resolves the deposit actually accepted for a liquidity add, per
    /// the current reserve ratio.
    fn accepted_amounts(
        &self,
        amount_a_desired: Amount,
        amount_b_desired: Amount,
        amount_a_min: Amount,
        amount_b_min: Amount,
    ) -> Result<(f64, f64)> {
        if self.reserve_a.is_zero() && self.reserve_b.is_zero() {
            // The seeding deposit sets the price; both sides must be real
            // amounts (two negatives would otherwise survive the sqrt in
            // the first mint).
            if !amount_a_desired.is_positive() || !amount_b_desired.is_positive() {
                return Err(DexError::InsufficientAmount);
            }
            return Ok((amount_a_desired.get(), amount_b_desired.get()));
        }
        let optimal_b = Self::quote(amount_a_desired, self.reserve_a, self.reserve_b)?;
        if optimal_b.get() <= amount_b_desired.get() {
            if optimal_b.get() < amount_b_min.get() {
                return Err(DexError::InsufficientBAmount);
            }
            Ok((amount_a_desired.get(), optimal_b.get()))
        } else {
            let optimal_a = Self::quote(amount_b_desired, self.reserve_b, self.reserve_a)?;
            if optimal_a.get() > amount_a_desired.get() {
                return Err(DexError::InvariantViolated(
                    "quoted deposit exceeded desired amount",
                ));
            }
            if optimal_a.get() < amount_a_min.get() {
                return Err(DexError::InsufficientAAmount);
            }
            Ok((optimal_a.get(), amount_b_desired.get()))
        }
    }

    /// Share amount a deposit of `(delta_a, delta_b)` mints, evaluated
    /// against the reserve values the mint will have checkpointed
    /// (the post-deposit totals).
    fn minted_shares(
        &self,
        delta_a: f64,
        delta_b: f64,
        reserve_a: f64,
        reserve_b: f64,
    ) -> Result<f64> {
        let minted = if self.total_shares.is_zero() {
            (delta_a * delta_b).sqrt() - Self::MINIMUM_LIQUIDITY.get()
        } else {
            let by_a = delta_a * self.total_shares.get() / reserve_a;
            let by_b = delta_b * self.total_shares.get() / reserve_b;
            by_a.min(by_b)
        };
        if minted > 0.0 {
            Ok(minted)
        } else {
            Err(DexError::InsufficientLiquidityMinted)
        }
    }

    /// Settles a deposit: verifies the ledger deltas match what was
    /// accepted, checkpoints reserves, and mints shares to `provider`.
    ///
    /// On the first mint, [`Pool::MINIMUM_LIQUIDITY`] is credited to
    /// [`Pool::LIQUIDITY_LOCK`] before the provider's shares.
    fn mint(&mut self, provider: Address, expected_a: f64, expected_b: f64) -> Result<()> {
        let balance_a = self.ledger_a.total().get();
        let balance_b = self.ledger_b.total().get();
        let delta_a = balance_a - self.reserve_a.get();
        let delta_b = balance_b - self.reserve_b.get();
        if delta_a != expected_a || delta_b != expected_b {
            return Err(DexError::InvariantViolated(
                "ledger delta diverged from accepted deposit",
            ));
        }

        let first_mint = self.total_shares.is_zero();
        // Share ratios are taken against the post-deposit reserves.
        self.checkpoint(balance_a, balance_b);
        let minted =
            self.minted_shares(delta_a, delta_b, self.reserve_a.get(), self.reserve_b.get())?;
        if first_mint {
            self.credit(Self::LIQUIDITY_LOCK, Self::MINIMUM_LIQUIDITY.get());
        }
        self.credit(provider, minted);
        Ok(())
    }

    /// Validates a swap paying `(out_a, out_b)` to `to`, with
    /// `pending_in_a` standing in for an A-side deposit that has been or
    /// is about to be credited.  Returns the post-trade balances to
    /// checkpoint.
    fn validate_swap(
        &self,
        out_a: f64,
        out_b: f64,
        to: &Address,
        pending_in_a: f64,
    ) -> Result<(f64, f64)> {
        if out_a <= 0.0 && out_b <= 0.0 {
            return Err(DexError::InsufficientOutputAmount);
        }
        if out_a >= self.reserve_a.get() || out_b >= self.reserve_b.get() {
            return Err(DexError::InsufficientLiquidity);
        }
        if self.assets.contains(to) {
            return Err(DexError::InvalidRecipient);
        }

        let balance_a = self.ledger_a.total().get() + pending_in_a - out_a;
        let balance_b = self.ledger_b.total().get() - out_b;
        let floor_a = self.reserve_a.get() - out_a;
        let floor_b = self.reserve_b.get() - out_b;
        let in_a = if balance_a > floor_a { balance_a - floor_a } else { 0.0 };
        let in_b = if balance_b > floor_b { balance_b - floor_b } else { 0.0 };
        if in_a <= 0.0 && in_b <= 0.0 {
            return Err(DexError::InsufficientInputAmount);
        }

        let adjusted_a = balance_a * FEE_SCALE;
        let adjusted_b = balance_b * FEE_SCALE;
        if adjusted_a * adjusted_b
            != self.reserve_a.get() * self.reserve_b.get() * (FEE_SCALE * FEE_SCALE)
        {
            return Err(DexError::InvariantViolated(
                "constant product changed across swap",
            ));
        }
        Ok((balance_a, balance_b))
    }

    /// Checkpoints the reserves to the given custody totals.
    fn checkpoint(&mut self, balance_a: f64, balance_b: f64) {
        self.reserve_a = Amount::new(balance_a);
        self.reserve_b = Amount::new(balance_b);
    }

    /// Credits `amount` shares to `provider` and grows the total supply.
    fn credit(&mut self, provider: Address, amount: f64) {
        let balance = self.shares_of(&provider).get();
        self.providers.insert(provider, Shares::new(balance + amount));
        self.total_shares = Shares::new(self.total_shares.get() + amount);
    }

    /// Burns `amount` shares from `provider` and shrinks the total
    /// supply.  The provider's entry persists at its reduced balance.
    fn burn(&mut self, provider: Address, amount: f64) {
        let balance = self.shares_of(&provider).get();
        self.providers.insert(provider, Shares::new(balance - amount));
        self.total_shares = Shares::new(self.total_shares.get() - amount);
    }
}

impl FromConfig<PoolConfig> for Pool {
    /// Creates an empty pool from the given configuration.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`PoolConfig::validate`].
    fn from_config(config: &PoolConfig) -> Result<Self> {
        config.validate()?;

        let assets = *config.assets();
        Ok(Self {
            assets,
            name: config.name().to_owned(),
            symbol: config.symbol().to_owned(),
            reserve_a: Amount::ZERO,
            reserve_b: Amount::ZERO,
            ledger_a: BalanceLedger::new(assets.asset_a()),
            ledger_b: BalanceLedger::new(assets.asset_b()),
            providers: BTreeMap::new(),
            total_shares: Shares::ZERO,
        })
    }
}

impl LiquiditySource for Pool {
    /// Reports the provider's liquidity shares to the reward engine.
    fn provided_liquidity(&self, provider: &Address) -> Shares {
        self.shares_of(provider)
    }
}
