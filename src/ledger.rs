//! Custody ledger for a single asset.
//!
//! Each pool owns one [`BalanceLedger`] per custodied asset.  The ledger
//! is deliberately minimal: it records the asset's address and the total
//! quantity currently held by the pool, nothing per-account.  Who is owed
//! what is the pool's business (liquidity shares) or the reward engine's
//! (accrued rewards); the ledger only answers "how much of this asset is
//! in custody right now".
//!
//! Both mutators are infallible.  The pool validates every movement
//! before applying it, and the swap path deliberately *reads* the ledger
//! rather than trusting its own reserve checkpoint, so a ledger total
//! that drifted from the checkpoint shows up as swap input or is caught
//! by the constant-product check.

use crate::domain::{Address, Amount};

/// Running custody total for one asset.
///
/// # Examples
///
/// ```
/// use naiad_dex::domain::{Address, Amount};
/// use naiad_dex::ledger::BalanceLedger;
///
/// let mut ledger = BalanceLedger::new(Address::from_bytes([1u8; 32]));
/// ledger.deposit(Amount::new(500.0));
/// ledger.transfer(Amount::new(125.0));
/// assert_eq!(ledger.total(), Amount::new(375.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BalanceLedger {
    asset: Address,
    total: Amount,
}

impl BalanceLedger {
    /// Creates an empty ledger for `asset`.
    #[must_use]
    pub const fn new(asset: Address) -> Self {
        Self {
            asset,
            total: Amount::ZERO,
        }
    }

    /// Records `amount` entering custody.
    pub fn deposit(&mut self, amount: Amount) {
        self.total = Amount::new(self.total.get() + amount.get());
    }

    /// Records `amount` leaving custody.
    pub fn transfer(&mut self, amount: Amount) {
        self.total = Amount::new(self.total.get() - amount.get());
    }

    /// Returns the total quantity currently in custody.
    #[must_use]
    pub const fn total(&self) -> Amount {
        self.total
    }

    /// Returns the address of the custodied asset.
    #[must_use]
    pub const fn asset(&self) -> Address {
        self.asset
    }
}
