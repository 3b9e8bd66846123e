//! In-memory reference ledger.

use std::collections::BTreeMap;

use super::{FungibleLedger, LedgerError};
use crate::domain::{AccountId, Amount};

/// A map-backed fungible-asset ledger with standard allowance semantics.
///
/// One instance tracks one asset. The exchange holds two — one for the
/// native coin, one for the paired token — and tests drive both through
/// the [`FungibleLedger`] trait plus the minting and approval methods
/// below, which sit outside the trait because the exchange itself never
/// mints or approves.
///
/// Cloning is cheap relative to operation cost, which is what lets the
/// exchange stage mutations on a draft and discard it on failure.
///
/// # Examples
///
/// ```
/// use tidepool::domain::{AccountId, Amount};
/// use tidepool::ledger::{FungibleLedger, InMemoryLedger};
///
/// let alice = AccountId::from_bytes([1u8; 32]);
/// let bob = AccountId::from_bytes([2u8; 32]);
///
/// let mut ledger = InMemoryLedger::new();
/// ledger.mint(alice, Amount::new(100)).expect("fresh ledger");
/// ledger.transfer(alice, bob, Amount::new(40)).expect("funded");
/// assert_eq!(ledger.balance_of(alice), Amount::new(60));
/// assert_eq!(ledger.balance_of(bob), Amount::new(40));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryLedger {
    balances: BTreeMap<AccountId, Amount>,
    allowances: BTreeMap<(AccountId, AccountId), Amount>,
}

impl InMemoryLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Credits `account` with newly created value.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::BalanceOverflow`] if the credit overflows
    /// the account's balance.
    pub fn mint(&mut self, account: AccountId, amount: Amount) -> Result<(), LedgerError> {
        let credited = self
            .balance_of(account)
            .checked_add(&amount)
            .ok_or(LedgerError::BalanceOverflow)?;
        self.balances.insert(account, credited);
        Ok(())
    }

    /// Grants `spender` the right to move up to `amount` of `owner`'s
    /// balance via [`FungibleLedger::transfer_from`].
    ///
    /// Overwrites any previous allowance for the pair.
    pub fn approve(&mut self, owner: AccountId, spender: AccountId, amount: Amount) {
        self.allowances.insert((owner, spender), amount);
    }

    /// Returns the remaining allowance `owner` has granted `spender`.
    #[must_use]
    pub fn allowance(&self, owner: AccountId, spender: AccountId) -> Amount {
        self.allowances
            .get(&(owner, spender))
            .copied()
            .unwrap_or(Amount::ZERO)
    }
}

impl FungibleLedger for InMemoryLedger {
    fn balance_of(&self, account: AccountId) -> Amount {
        self.balances.get(&account).copied().unwrap_or(Amount::ZERO)
    }

    fn transfer(
        &mut self,
        from: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        if amount.is_zero() {
            return Ok(());
        }
        let available = self.balance_of(from);
        let remaining =
            available
                .checked_sub(&amount)
                .ok_or(LedgerError::InsufficientBalance {
                    required: amount,
                    available,
                })?;
        // Validate the credit before touching state; a self-transfer
        // credits the post-debit balance.
        let to_balance = if from == to {
            remaining
        } else {
            self.balance_of(to)
        };
        let credited = to_balance
            .checked_add(&amount)
            .ok_or(LedgerError::BalanceOverflow)?;
        self.balances.insert(from, remaining);
        self.balances.insert(to, credited);
        Ok(())
    }

    fn transfer_from(
        &mut self,
        spender: AccountId,
        owner: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        if amount.is_zero() {
            return Ok(());
        }
        let granted = self.allowance(owner, spender);
        let rest = granted
            .checked_sub(&amount)
            .ok_or(LedgerError::InsufficientAllowance {
                required: amount,
                available: granted,
            })?;
        self.transfer(owner, to, amount)?;
        self.allowances.insert((owner, spender), rest);
        Ok(())
    }
}
